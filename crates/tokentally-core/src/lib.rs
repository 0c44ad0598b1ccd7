//! Tokentally Core - shared types for response-body normalization
//!
//! This crate provides the types every body processor speaks:
//! - Usage: canonical, provider-agnostic token accounting
//! - Input: ParseInput / ParseOutput and routing hints
//! - Error: the failure channel all processors return through

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod input;
pub mod usage;

pub use error::{Error, ErrorKind, Result};
pub use input::{ParseInput, ParseOutput, ResponseKind};
pub use usage::Usage;
