//! Tokentally - response-body usage normalization
//!
//! Turns raw LLM provider response bodies into canonical token usage for
//! cost attribution and analytics:
//! - Normalizer: size-bounded, logged entry point for the ingestion pipeline
//! - Config: layered configuration (embedded defaults, files, environment)
//! - Telemetry: tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod loader;
pub mod normalizer;
pub mod telemetry;

pub use crate::config::{AppConfig, LoggingConfig, NormalizerConfig};
pub use loader::{load_config, load_config_from_str};
pub use normalizer::Normalizer;
pub use telemetry::init_tracing;

pub use tokentally_core::{Error, ErrorKind, ParseInput, ParseOutput, ResponseKind, Result, Usage};
pub use tokentally_processors::{BodyProcessor, ProcessorKind, ProcessorRegistry};
