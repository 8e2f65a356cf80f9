//! Unified error handling for Templar Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Templar Core operations.
///
/// This enum wraps all possible errors that can occur when using templar-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum TemplarError {
    /// Errors from the domain layer (invalid names, damaged registry).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (missing templates, I/O failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl TemplarError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the error means "no template by that name".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::TemplateNotFound { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type TemplarResult<T> = Result<T, TemplarError>;
