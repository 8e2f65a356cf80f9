//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "save this file as a template" or
//! "load a template into that file".

pub mod template_service;

pub use template_service::{Confirmation, LoadPlan, LoadTarget, TemplateInfo, TemplateService};
