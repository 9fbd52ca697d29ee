//! Resource name grammar for Costura bundles
//!
//! Bundled resources are named `costura.<logicalName>.compressed`. These
//! helpers parse that grammar and derive output filenames; they perform no
//! I/O and report non-matches as `None` rather than errors.

/// Prefix marker on every bundled resource name.
pub const RESOURCE_PREFIX: &str = "costura.";

/// Suffix marker on every compressed bundled resource name.
pub const COMPRESSED_SUFFIX: &str = ".compressed";

/// Minimum length of a valid bundled resource name (prefix + suffix).
pub const MIN_RESOURCE_NAME_LEN: usize = RESOURCE_PREFIX.len() + COMPRESSED_SUFFIX.len();

/// Decode a resource name against the bundle grammar.
///
/// Returns the logical name strictly between the prefix and the *last*
/// occurrence of the suffix, or `None` when the name is not part of the
/// bundle. The rightmost suffix occurrence wins, so a logical name that
/// itself contains `".compressed"` resolves to the shortest embedded name:
///
/// `"costura.a.compressed.dll.compressed"` -> `"a.compressed.dll"`
#[must_use]
pub fn decode_resource_name(name: &str) -> Option<&str> {
    if name.len() < MIN_RESOURCE_NAME_LEN
        || !name.starts_with(RESOURCE_PREFIX)
        || !name.ends_with(COMPRESSED_SUFFIX)
    {
        return None;
    }

    let end = name.rfind(COMPRESSED_SUFFIX)?;
    Some(&name[RESOURCE_PREFIX.len()..end])
}

/// Check whether a logical name would be reinterpreted as a path.
///
/// Logical names carrying separators are rejected before any write to keep
/// extraction inside the output directory.
#[must_use]
pub fn contains_path_separator(name: &str) -> bool {
    name.contains('/') || name.contains('\\')
}

/// Derive the output filename for a standalone compressed payload.
///
/// Strips a trailing `.compressed` marker case-insensitively:
/// `"MyLib.dll.Compressed"` -> `"MyLib.dll"`. Names without the marker are
/// returned unchanged.
#[must_use]
pub fn output_name_for_payload(file_name: &str) -> &str {
    if file_name.len() > COMPRESSED_SUFFIX.len()
        && file_name
            .to_lowercase()
            .ends_with(COMPRESSED_SUFFIX)
    {
        &file_name[..file_name.len() - COMPRESSED_SUFFIX.len()]
    } else {
        file_name
    }
}

/// Check whether a filename carries the standalone payload marker.
#[must_use]
pub fn is_compressed_payload(file_name: &str) -> bool {
    file_name.len() > COMPRESSED_SUFFIX.len()
        && file_name.to_lowercase().ends_with(COMPRESSED_SUFFIX)
}
