//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use templar_core::{
    application::{ApplicationError, ports::Filesystem},
    error::TemplarResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same contents, so a test can hand one clone to a store
/// and inspect another. Listings come back in path order.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Put a file in place, creating its parents (testing helper).
    pub fn seed(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = path.as_ref();
        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        if let Some(parent) = path.parent() {
            insert_ancestors(&mut inner.directories, parent);
        }
        inner
            .files
            .insert(path.to_path_buf(), content.as_ref().to_vec());
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn not_found(path: &Path) -> templar_core::error::TemplarError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "No such file".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> TemplarResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn read_file(&self, path: &Path) -> TemplarResult<Vec<u8>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.files.get(path).cloned().ok_or_else(|| not_found(path))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> TemplarResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn overwrite_file(&self, path: &Path, content: &[u8]) -> TemplarResult<()> {
        self.write_file(path, content)
    }

    fn remove_file(&self, path: &Path) -> TemplarResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }

    fn list_files(&self, dir: &Path) -> TemplarResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !inner.directories.contains(dir) {
            return Err(not_found(dir));
        }

        Ok(inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/nope/file"), b"x").is_err());

        fs.create_dir_all(Path::new("/nope")).unwrap();
        assert!(fs.write_file(Path::new("/nope/file"), b"x").is_ok());
        assert!(fs.is_file(Path::new("/nope/file")));
        assert!(fs.exists(Path::new("/nope")));
        assert!(!fs.is_file(Path::new("/nope")));
    }

    #[test]
    fn list_files_only_returns_direct_children() {
        let fs = MemoryFilesystem::new();
        fs.seed("/d/a", "a");
        fs.seed("/d/b", "b");
        fs.seed("/d/sub/c", "c");

        assert_eq!(
            fs.list_files(Path::new("/d")).unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn remove_missing_file_is_error() {
        let fs = MemoryFilesystem::new();
        assert!(fs.remove_file(Path::new("/x")).is_err());
    }

    #[test]
    fn clones_share_contents() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.seed("/f", "shared");
        assert_eq!(other.contents(Path::new("/f")), Some(b"shared".to_vec()));
        assert_eq!(other.list_all(), vec![PathBuf::from("/f")]);
    }
}
