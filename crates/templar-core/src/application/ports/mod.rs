//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `templar-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template bodies plus the extension registry
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by `TemplateService`)

pub mod output;

pub use output::{Filesystem, ReconcileReport, TemplateStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateStore};
