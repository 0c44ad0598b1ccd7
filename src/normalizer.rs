//! Normalizer - ingestion-facing entry point
//!
//! Wraps the processor registry with the input size bound and logging. One
//! instance is built at startup and shared (e.g. behind an `Arc`) by every
//! request the pipeline normalizes.

use crate::config::NormalizerConfig;
use tokentally_core::{Error, ParseInput, ParseOutput, Result};
use tokentally_processors::ProcessorRegistry;
use tracing::{debug, instrument, warn};

/// Size-bounded usage normalizer
#[derive(Debug, Clone)]
pub struct Normalizer {
    registry: ProcessorRegistry,
    max_body_bytes: usize,
}

impl Normalizer {
    /// Create a normalizer from configuration
    #[must_use]
    pub fn new(config: &NormalizerConfig) -> Self {
        let registry = ProcessorRegistry::with_aliases(
            config
                .provider_aliases
                .iter()
                .map(|(provider, kind)| (provider, *kind)),
        );
        Self {
            registry,
            max_body_bytes: config.max_body_bytes,
        }
    }

    /// Largest accepted body, in bytes
    #[must_use]
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    /// Get the processor registry
    #[must_use]
    pub fn registry(&self) -> &ProcessorRegistry {
        &self.registry
    }

    /// Normalize one response body
    ///
    /// Oversized bodies fail with `BodyTooLarge` without being parsed;
    /// invalid JSON fails with `MalformedInput`. A body without usage data
    /// succeeds with every count unset.
    #[instrument(
        skip_all,
        fields(provider = %input.provider, model = ?input.model, bytes = input.body_len())
    )]
    pub fn normalize(&self, input: &ParseInput) -> Result<ParseOutput> {
        let size = input.body_len();
        if size > self.max_body_bytes {
            warn!(limit = self.max_body_bytes, "response body exceeds limit, not parsed");
            return Err(Error::BodyTooLarge {
                size,
                limit: self.max_body_bytes,
            });
        }

        let processor = self.registry.select(input);
        match processor.parse(input) {
            Ok(output) => {
                debug!(
                    processor = processor.name(),
                    prompt_tokens = ?output.usage.prompt_tokens,
                    completion_tokens = ?output.usage.completion_tokens,
                    total_tokens = ?output.usage.total_tokens,
                    "normalized usage"
                );
                Ok(output)
            }
            Err(e) => {
                warn!(processor = processor.name(), error = %e, "failed to normalize response body");
                Err(e)
            }
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}
