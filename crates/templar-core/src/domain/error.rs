// ============================================================================
// domain/error.rs - TEMPLATE DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried through `TemplarError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid template name '{name}': {reason}")]
    InvalidTemplateName { name: String, reason: &'static str },

    // ========================================================================
    // Data Integrity Errors
    // ========================================================================
    #[error("Registry entry for '{name}' is not a string")]
    InvalidRegistryEntry { name: String },

    #[error("Registry is not a JSON object: {reason}")]
    MalformedRegistry { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidTemplateName { name, reason } => vec![
                format!("Template name '{}' is invalid: {}", name, reason),
                "Use a plain file name without '/' or '\\'".into(),
                "Names cannot start with '.'".into(),
                "Examples: greet, rust-main, header.h".into(),
            ],
            Self::InvalidRegistryEntry { .. } | Self::MalformedRegistry { .. } => vec![
                "The template registry file is damaged".into(),
                "Fix or delete registry.json, then run: templar doctor".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTemplateName { .. } => ErrorCategory::Validation,
            Self::InvalidRegistryEntry { .. } | Self::MalformedRegistry { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
