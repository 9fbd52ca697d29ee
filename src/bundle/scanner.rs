//! Scanning container resources for bundle entries

use crate::container::RawResource;
use crate::error::{Error, Result};

use super::naming::{contains_path_separator, decode_resource_name};

/// One compressed bundle entry identified inside a container.
#[derive(Debug, Clone)]
pub struct BundleEntry {
    /// Original filename of the bundled resource, markers stripped.
    ///
    /// Invariant: non-empty and free of path separators.
    pub logical_name: String,
    /// Raw DEFLATE-compressed payload bytes.
    pub compressed: Vec<u8>,
}

/// Filter a container's resources down to its bundle entries.
///
/// Non-embedded resources and names outside the bundle grammar are skipped
/// silently: not every embedded resource belongs to the bundle. Logical names
/// that are empty or carry path separators are skipped with a warning, never
/// written as paths.
///
/// # Errors
///
/// Returns [`Error::NoBundleFound`] when the input is empty or yields zero
/// entries, so a bundle-less container is reported rather than silently
/// succeeding with no files.
pub fn scan_resources(resources: &[RawResource]) -> Result<Vec<BundleEntry>> {
    let mut entries = Vec::new();

    for resource in resources {
        if !resource.is_embedded {
            continue;
        }

        let Some(logical_name) = decode_resource_name(&resource.name) else {
            continue;
        };

        if logical_name.is_empty() || contains_path_separator(logical_name) {
            tracing::warn!(
                resource = %resource.name,
                "skipping bundle entry with invalid logical name"
            );
            continue;
        }

        tracing::debug!(resource = %resource.name, logical_name, "found bundle entry");
        entries.push(BundleEntry {
            logical_name: logical_name.to_string(),
            compressed: resource.bytes.clone(),
        });
    }

    if entries.is_empty() {
        return Err(Error::NoBundleFound);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deflate(data: &[u8]) -> Vec<u8> {
        use flate2::Compression;
        use flate2::write::DeflateEncoder;
        use std::io::Write;

        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_scan_finds_bundle_entries() {
        let resources = vec![
            RawResource::embedded("costura.mylib.dll.compressed", deflate(b"hello")),
            RawResource::embedded("MyApp.Resources.strings", b"not a bundle".to_vec()),
            RawResource::embedded("costura.other.dll.compressed", deflate(b"world")),
        ];

        let entries = scan_resources(&resources).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].logical_name, "mylib.dll");
        assert_eq!(entries[1].logical_name, "other.dll");
    }

    #[test]
    fn test_scan_skips_non_embedded() {
        let resources = vec![RawResource::linked("costura.mylib.dll.compressed")];
        assert!(matches!(
            scan_resources(&resources),
            Err(Error::NoBundleFound)
        ));
    }

    #[test]
    fn test_scan_empty_input() {
        assert!(matches!(scan_resources(&[]), Err(Error::NoBundleFound)));
    }

    #[test]
    fn test_scan_rejects_path_separators() {
        let resources = vec![
            RawResource::embedded("costura.../escape.dll.compressed", vec![1, 2, 3]),
            RawResource::embedded("costura.safe.dll.compressed", vec![4, 5, 6]),
        ];

        let entries = scan_resources(&resources).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].logical_name, "safe.dll");
    }

    #[test]
    fn test_scan_preserves_container_order() {
        let resources = vec![
            RawResource::embedded("costura.b.dll.compressed", vec![2]),
            RawResource::embedded("costura.a.dll.compressed", vec![1]),
        ];

        let entries = scan_resources(&resources).unwrap();
        assert_eq!(entries[0].logical_name, "b.dll");
        assert_eq!(entries[1].logical_name, "a.dll");
    }
}
