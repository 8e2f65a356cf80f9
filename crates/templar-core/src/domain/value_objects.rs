//! Domain value objects: TemplateName, Extension.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Each
//! one enforces its invariant at construction, so code holding a
//! `TemplateName` never has to re-check it before joining it onto a path.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ── TemplateName ─────────────────────────────────────────────────────────────

/// The unique name of a stored template.
///
/// The name doubles as the body's file name inside the template directory.
///
/// Invariants:
/// - not empty after trimming surrounding whitespace
/// - no path separators (`/`, `\`) and no NUL byte
/// - does not start with `.` (dot-names are reserved for temporary files,
///   which also rules out `.` and `..`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TemplateName(String);

impl TemplateName {
    /// Validate and wrap a raw name.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();
        let name = raw.trim();

        let invalid = |reason| DomainError::InvalidTemplateName {
            name: raw.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.contains('\0') {
            return Err(invalid("name cannot contain NUL bytes"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TemplateName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TemplateName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TemplateName> for String {
    fn from(name: TemplateName) -> Self {
        name.0
    }
}

impl AsRef<Path> for TemplateName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

// ── Extension ────────────────────────────────────────────────────────────────

/// A file extension including its leading dot (`.py`), or empty.
///
/// Captured from the source file when a template is created and only ever
/// used to warn about a mismatch on load. Follows the usual "extname" rules:
/// a file with no dot, or whose only dot is leading (`.bashrc`), has the
/// empty extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extension(String);

impl Extension {
    /// The extension of `path`'s final component.
    pub fn of(path: &Path) -> Self {
        path.extension()
            .map(|ext| Self(format!(".{}", ext.to_string_lossy())))
            .unwrap_or_default()
    }

    /// The empty extension.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Extension {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
