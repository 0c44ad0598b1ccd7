//! Configuration types

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokentally_processors::ProcessorKind;

/// Default body size limit (10 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Normalizer settings
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reject settings the normalizer cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.normalizer.max_body_bytes == 0 {
            bail!("normalizer.max_body_bytes must be greater than zero");
        }
        if let Some(empty) = self
            .normalizer
            .provider_aliases
            .keys()
            .find(|provider| provider.trim().is_empty())
        {
            bail!("normalizer.provider_aliases has an empty provider name: {empty:?}");
        }
        Ok(())
    }
}

/// Normalizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Largest response body accepted for parsing, in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Provider identifiers mapped to a processor, checked before the
    /// built-in vocabulary
    #[serde(default)]
    pub provider_aliases: HashMap<String, ProcessorKind>,
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
            provider_aliases: HashMap::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "tokentally=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}
