//! File access seam for the rewrite pass
//!
//! Reading sibling manifests goes through an explicit capability trait so
//! the core can be driven by a real filesystem or by in-memory fixtures, and
//! so an embedding host can supply its own file layer.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Read access to candidate manifest files.
pub trait ManifestSource {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`ManifestSource`] backed by `std::fs`.
#[derive(Debug, Default)]
pub struct FsSource;

impl ManifestSource for FsSource {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// [`ManifestSource`] backed by an in-memory path → contents map.
#[derive(Debug, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl ManifestSource for MemorySource {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{}", path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_round_trip() {
        let mut source = MemorySource::new();
        source.insert("/proj/package.json", "{}");

        assert!(source.exists(Path::new("/proj/package.json")));
        assert!(!source.exists(Path::new("/other/package.json")));
        assert!(source
            .read_to_string(Path::new("/proj/package.json"))
            .is_ok_and(|text| text == "{}"));
    }

    #[test]
    fn test_memory_source_missing_is_not_found() {
        let source = MemorySource::new();
        let err = source.read_to_string(Path::new("/nope"));
        assert!(err.is_err_and(|e| e.kind() == io::ErrorKind::NotFound));
    }

    #[test]
    fn test_fs_source_reads_real_files() {
        let Ok(dir) = tempfile::TempDir::new() else {
            return;
        };
        let path = dir.path().join("package.json");
        assert!(std::fs::write(&path, r#"{"name": "x"}"#).is_ok());

        let source = FsSource;
        assert!(source.exists(&path));
        assert!(source
            .read_to_string(&path)
            .is_ok_and(|text| text.contains("\"name\"")));
    }
}
