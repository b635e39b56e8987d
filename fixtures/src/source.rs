//! Where fixture documents come from

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::FixtureError;

/// Relative path of a creature fixture
pub fn creature_path(id: u32) -> String {
    format!("pokemon/{}.json", id)
}

/// Relative path of a type fixture (type names are stored lowercase)
pub fn type_path(name: &str) -> String {
    format!("type/{}.json", name.to_lowercase())
}

/// Read-only access to fixture documents by relative path
///
/// Reads are blocking. Callers on an interactive thread should move them onto
/// a blocking pool first.
pub trait FixtureSource: Send + Sync {
    /// Read the document at `path`, e.g. `pokemon/25.json`
    fn read(&self, path: &str) -> Result<String, FixtureError>;
}

impl<S: FixtureSource + ?Sized> FixtureSource for Arc<S> {
    fn read(&self, path: &str) -> Result<String, FixtureError> {
        (**self).read(path)
    }
}

impl<S: FixtureSource + ?Sized> FixtureSource for &S {
    fn read(&self, path: &str) -> Result<String, FixtureError> {
        (**self).read(path)
    }
}

/// Fixtures stored as files under a root directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FixtureSource for DirectorySource {
    fn read(&self, path: &str) -> Result<String, FixtureError> {
        std::fs::read_to_string(self.root.join(path)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FixtureError::NotFound {
                path: path.to_string(),
            },
            _ => FixtureError::Io {
                path: path.to_string(),
                source: e,
            },
        })
    }
}

/// Fixtures held in memory, keyed by relative path
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Builder form of [`MemorySource::insert`]
    pub fn with(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn with_creature(self, id: u32, contents: impl Into<String>) -> Self {
        self.with(creature_path(id), contents)
    }

    pub fn with_type(self, name: &str, contents: impl Into<String>) -> Self {
        self.with(type_path(name), contents)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FixtureSource for MemorySource {
    fn read(&self, path: &str) -> Result<String, FixtureError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FixtureError::NotFound {
                path: path.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(creature_path(25), "pokemon/25.json");
        assert_eq!(type_path("Fire"), "type/fire.json");
        assert_eq!(type_path("ghost"), "type/ghost.json");
    }

    #[test]
    fn test_memory_source_not_found() {
        let source = MemorySource::new().with_creature(1, "{}");

        assert_eq!(source.read("pokemon/1.json").unwrap(), "{}");
        assert!(source.read("pokemon/2.json").unwrap_err().is_not_found());
    }

    #[test]
    fn test_directory_source_reads_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("type")).unwrap();
        std::fs::write(dir.path().join("type/fire.json"), "{\"name\":\"fire\"}").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.read(&type_path("Fire")).unwrap(), "{\"name\":\"fire\"}");

        let err = source.read(&type_path("water")).unwrap_err();
        assert!(matches!(err, FixtureError::NotFound { ref path } if path == "type/water.json"));
    }

    #[test]
    fn test_shared_source() {
        let source: Arc<dyn FixtureSource> = Arc::new(MemorySource::new().with_type("ice", "{}"));
        assert!(source.read("type/ice.json").is_ok());
    }
}
