//! Application layer errors.
//!
//! These errors represent failed preconditions and infrastructure failures
//! during orchestration. Invalid values are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The source file given for a new template does not exist.
    #[error("File {} does not exist", path.display())]
    SourceNotFound { path: PathBuf },

    /// No source path was given and there is no active file to fall back on.
    #[error("No source file given and no active file to use")]
    NoSource,

    /// A template with this name is already stored.
    #[error("Template {name} already exists")]
    TemplateExists { name: String },

    /// No template body with this name is stored.
    #[error("Template {name} not found")]
    TemplateNotFound { name: String },

    /// Loading needs a destination file but none was available.
    #[error("Target file is required")]
    TargetRequired,

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// The registry file exists but cannot be decoded.
    #[error("Registry file {} is corrupted: {reason}", path.display())]
    RegistryCorrupted { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceNotFound { path } => vec![
                format!("Nothing to copy at: {}", path.display()),
                "Check the path, or pass an absolute path with --from".into(),
            ],
            Self::NoSource => vec![
                "Pass the file to save with --from <PATH>".into(),
                "Or set TEMPLAR_ACTIVE_FILE to the file open in your editor".into(),
            ],
            Self::TemplateExists { name } => vec![
                format!("A template named '{}' is already stored", name),
                "Choose a different name".into(),
                format!("Or remove the old one first: templar remove {}", name),
            ],
            Self::TemplateNotFound { .. } => vec![
                "List stored templates: templar list".into(),
                "If it is listed, run: templar doctor".into(),
            ],
            Self::TargetRequired => vec![
                "Pass the destination with --into <PATH>".into(),
                "Or set TEMPLAR_ACTIVE_FILE to the file open in your editor".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
                "Check the data directory with: templar config get storage.data_dir".into(),
            ],
            Self::RegistryCorrupted { path, .. } => vec![
                format!("Inspect or delete: {}", path.display()),
                "Then run: templar doctor".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceNotFound { .. } | Self::NoSource | Self::TargetRequired => {
                ErrorCategory::Validation
            }
            Self::TemplateExists { .. } => ErrorCategory::Conflict,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::RegistryCorrupted { .. } => {
                ErrorCategory::Internal
            }
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
