//! Bundle naming grammar and resource scanning

pub mod naming;
mod scanner;

pub use naming::{
    COMPRESSED_SUFFIX, RESOURCE_PREFIX, decode_resource_name, is_compressed_payload,
    output_name_for_payload,
};
pub use scanner::{BundleEntry, scan_resources};
