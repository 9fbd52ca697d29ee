//! Batch input discovery

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::bundle::naming::is_compressed_payload;

/// Find all extractable inputs in a directory recursively.
///
/// Matches standalone `.compressed` payloads and `.exe`/`.dll` container
/// candidates, case-insensitively. Returns a sorted list so batch order is
/// stable across runs.
pub fn find_extractable_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut inputs: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.path()
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(is_extractable_name)
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    inputs.sort();
    inputs
}

fn is_extractable_name(name: &str) -> bool {
    if is_compressed_payload(name) {
        return true;
    }
    let lower = name.to_lowercase();
    lower.ends_with(".exe") || lower.ends_with(".dll")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractable_names() {
        assert!(is_extractable_name("lib.dll.compressed"));
        assert!(is_extractable_name("App.EXE"));
        assert!(is_extractable_name("lib.dll"));
        assert!(!is_extractable_name("readme.txt"));
        assert!(!is_extractable_name(".compressed"));
    }

    #[test]
    fn test_find_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.dll"), b"").unwrap();
        std::fs::write(dir.path().join("a.compressed"), b"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/c.exe"), b"").unwrap();

        let found = find_extractable_files(dir.path());
        let names: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.compressed", "b.dll", "sub/c.exe"]);
    }
}
