//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use bgen_core::application::ports::Filesystem;

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Pre-populate a file (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.into(), content.into());
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> bgen_core::error::BgenResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| bgen_core::application::ApplicationError::StoreLockError)?;

        inner.files.get(path).cloned().ok_or_else(|| {
            bgen_core::application::ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> bgen_core::error::BgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| bgen_core::application::ApplicationError::StoreLockError)?;

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> bgen_core::error::BgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| bgen_core::application::ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let Ok(inner) = self.inner.read() else {
            return false;
        };
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}
