// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Templar.
//!
//! This module contains pure logic with no I/O. Reading and writing template
//! bodies and the registry file is done by adapters through the ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Validated values**: `TemplateName` cannot hold a path separator
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::registry::Registry;

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Extension, TemplateName};
