//! Application layer for Templar.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer and decides the order
//! of checks and writes; it performs no I/O of its own.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    Confirmation,
    LoadPlan,
    LoadTarget,
    TemplateInfo, // DTO for template listing
    TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ReconcileReport, TemplateStore};

pub use error::ApplicationError;
