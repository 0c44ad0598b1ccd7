//! Global default registry

use super::registry_impl::ProcessorRegistry;

lazy_static::lazy_static! {
    /// Registry with the built-in provider vocabulary and no aliases
    static ref GLOBAL_REGISTRY: ProcessorRegistry = ProcessorRegistry::new();
}

impl ProcessorRegistry {
    /// Get the shared default registry
    #[must_use]
    pub fn global() -> &'static ProcessorRegistry {
        &GLOBAL_REGISTRY
    }
}
