//! Raw DEFLATE payload decompression
//!
//! Bundle payloads are raw DEFLATE streams with no zlib or gzip wrapper.
//! Inflation is fully in-memory and bounded: a malformed or hostile stream
//! can neither crash the inflater nor allocate without limit.

use std::io::Read;

use flate2::read::DeflateDecoder;

use crate::error::{Error, Result};

/// Default ceiling on decompressed output size.
///
/// Well beyond any plausible embedded assembly; callers that know the
/// expected size can pass a tighter limit to [`inflate_raw_with_limit`].
pub const DEFAULT_MAX_INFLATED_SIZE: u64 = 1024 * 1024 * 1024;

const READ_CHUNK: usize = 64 * 1024;

/// Inflate a raw DEFLATE stream with the default output ceiling.
///
/// # Errors
///
/// Returns [`Error::DecodeFailed`] for truncated or invalid streams and
/// [`Error::DecodedTooLarge`] when output exceeds the ceiling.
pub fn inflate_raw(compressed: &[u8]) -> Result<Vec<u8>> {
    inflate_raw_with_limit(compressed, DEFAULT_MAX_INFLATED_SIZE)
}

/// Inflate a raw DEFLATE stream, capping output at `max_size` bytes.
///
/// Output is bit-identical to a standard raw-DEFLATE inflate; this is a
/// compatibility boundary with the bundle producer.
///
/// # Errors
///
/// Returns [`Error::DecodeFailed`] for truncated or invalid streams and
/// [`Error::DecodedTooLarge`] when output exceeds `max_size`.
pub fn inflate_raw_with_limit(compressed: &[u8], max_size: u64) -> Result<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(compressed);
    let mut decompressed = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let n = decoder
            .read(&mut chunk)
            .map_err(|e| Error::DecodeFailed {
                message: e.to_string(),
            })?;
        if n == 0 {
            break;
        }
        if decompressed.len() as u64 + n as u64 > max_size {
            return Err(Error::DecodedTooLarge { limit: max_size });
        }
        decompressed.extend_from_slice(&chunk[..n]);
    }

    Ok(decompressed)
}
