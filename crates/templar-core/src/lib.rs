//! Templar Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Templar, a
//! tool that saves files as named templates and stamps them out again,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          templar-cli (CLI)              │
//! │   (prompts, confirmations, editor)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (TemplateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: TemplateStore, Filesystem) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    templar-adapters (Infrastructure)    │
//! │ (RegistryStore, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (TemplateName, Extension, Registry)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//! use templar_core::application::{LoadTarget, TemplateService};
//!
//! // Use application service (with injected adapters)
//! let service = TemplateService::new(store, filesystem);
//! service.create_template("greet", Some(Path::new("/tmp/hello.txt")), None).unwrap();
//!
//! let target = LoadTarget::new("/work/new.txt", true);
//! let plan = service.load_template("greet", Some(&target)).unwrap();
//! service.apply_load(&plan, &target.path).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Confirmation, LoadPlan, LoadTarget, TemplateInfo, TemplateService,
        ports::{Filesystem, ReconcileReport, TemplateStore},
    };
    pub use crate::domain::{Extension, Registry, TemplateName};
    pub use crate::error::{TemplarError, TemplarResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
