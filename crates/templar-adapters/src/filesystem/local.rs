//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use templar_core::{application::ports::Filesystem, error::TemplarResult};
use tracing::trace;
use uuid::Uuid;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> TemplarResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_file(&self, path: &Path) -> TemplarResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    /// Write to a sibling temporary file, then rename it over `path`.
    ///
    /// The temporary name starts with `.` so directory listings that skip
    /// dot-files never see it.
    fn write_file(&self, path: &Path, content: &[u8]) -> TemplarResult<()> {
        let tmp = temp_path_for(path);
        trace!(path = %path.display(), tmp = %tmp.display(), "Atomic write");

        if let Err(e) = std::fs::write(&tmp, content) {
            let _ = std::fs::remove_file(&tmp);
            return Err(map_io_error(path, e, "write file"));
        }

        std::fs::rename(&tmp, path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            map_io_error(path, e, "replace file")
        })
    }

    fn overwrite_file(&self, path: &Path, content: &[u8]) -> TemplarResult<()> {
        trace!(path = %path.display(), "In-place write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn remove_file(&self, path: &Path) -> TemplarResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_files(&self, dir: &Path) -> TemplarResult<Vec<String>> {
        let entries = std::fs::read_dir(dir).map_err(|e| map_io_error(dir, e, "read directory"))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(dir, e, "read directory entry"))?;
            let is_file = entry
                .file_type()
                .map_err(|e| map_io_error(&entry.path(), e, "get file type"))?
                .is_file();
            if is_file {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(names)
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4().simple()))
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> templar_core::error::TemplarError {
    use templar_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
