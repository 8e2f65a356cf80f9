//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `templar-adapters` crate provides implementations.

use crate::domain::{Extension, TemplateName};
use crate::error::TemplarResult;
use std::path::{Path, PathBuf};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `templar_adapters::filesystem::LocalFilesystem` (production)
/// - `templar_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Contents are raw bytes; templates are copied verbatim
/// - `write_file` replaces the destination atomically: readers see either
///   the old content or the new, never a partial write
/// - `overwrite_file` rewrites an existing file's content in place, keeping
///   its permissions and following symlinks; used for user-owned targets
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TemplarResult<()>;

    /// Read a file's full content.
    fn read_file(&self, path: &Path) -> TemplarResult<Vec<u8>>;

    /// Replace a file's content, creating it if needed.
    fn write_file(&self, path: &Path, content: &[u8]) -> TemplarResult<()>;

    /// Truncate and rewrite the file at `path`, creating it if needed.
    ///
    /// Unlike [`Filesystem::write_file`] the file itself is kept, so its
    /// mode and any symlink pointing at it survive.
    fn overwrite_file(&self, path: &Path, content: &[u8]) -> TemplarResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> TemplarResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Names of the regular files directly inside `dir`, in enumeration order.
    fn list_files(&self, dir: &Path) -> TemplarResult<Vec<String>>;
}

/// What [`TemplateStore::reconcile`] repaired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Registry entries dropped because no body file exists.
    pub dropped: Vec<String>,
    /// Body files registered because they had no entry.
    pub adopted: Vec<String>,
}

impl ReconcileReport {
    /// `true` if store and registry already agreed.
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty() && self.adopted.is_empty()
    }
}

/// Port for durable template storage.
///
/// The store is the only writer of the template directory and the registry.
/// It keeps one invariant: a name has a registry entry iff a body file with
/// that name exists.
///
/// Implemented by:
/// - `templar_adapters::template_store::RegistryStore`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Copy `source` in as a new template.
    ///
    /// Fails with `SourceNotFound` if `source` is not a file and with
    /// `TemplateExists` if `name` is taken. Never overwrites.
    fn create(&self, name: &TemplateName, source: &Path) -> TemplarResult<()>;

    /// Delete a template's body and registry entry.
    ///
    /// Fails with `TemplateNotFound` (and changes nothing) if no body exists.
    fn remove(&self, name: &TemplateName) -> TemplarResult<()>;

    /// Names of all stored bodies, in directory order.
    fn list(&self) -> TemplarResult<Vec<TemplateName>>;

    /// The extension recorded when `name` was created.
    fn extension_of(&self, name: &TemplateName) -> TemplarResult<Option<Extension>>;

    /// Where `name`'s body lives. Does not imply that it exists.
    fn path_of(&self, name: &TemplateName) -> PathBuf;

    /// `true` if a body for `name` exists.
    fn contains(&self, name: &TemplateName) -> bool;

    /// The stored body.
    fn read(&self, name: &TemplateName) -> TemplarResult<Vec<u8>>;

    /// Bring the registry back in line with the template directory.
    fn reconcile(&self) -> TemplarResult<ReconcileReport>;
}
