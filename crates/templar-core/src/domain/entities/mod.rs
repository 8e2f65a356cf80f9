pub mod registry;

pub use crate::domain::DomainError;
pub use registry::Registry;
