//! Template store adapters.

mod registry;

pub use registry::RegistryStore;
