//! Registry - processor selection
//!
//! Maps routing hints (provider, model, endpoint kind) to the processor
//! responsible for that response shape. Lookup never fails: anything
//! unrecognized resolves to the generic processor.
//!
//! # Module Structure
//!
//! - `kind`: ProcessorKind, the closed set of processors
//! - `registry_impl`: ProcessorRegistry implementation
//! - `global`: lazily built default registry

mod global;
mod kind;
mod registry_impl;

#[cfg(test)]
mod tests;

pub use kind::ProcessorKind;
pub use registry_impl::ProcessorRegistry;
