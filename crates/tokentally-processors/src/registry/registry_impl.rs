//! ProcessorRegistry implementation

use super::kind::ProcessorKind;
use crate::processor::BodyProcessor;
use std::collections::HashMap;
use tokentally_core::{ParseInput, ParseOutput, ResponseKind, Result};
use tracing::{debug, trace};

/// Immutable provider-to-processor dispatch table
///
/// Operator-defined aliases are consulted before the built-in provider
/// vocabulary. The registry holds no per-request state and is shared
/// freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ProcessorRegistry {
    aliases: HashMap<String, ProcessorKind>,
}

impl ProcessorRegistry {
    /// Create a registry with only the built-in vocabulary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with provider aliases
    #[must_use]
    pub fn with_aliases<I, K>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, ProcessorKind)>,
        K: AsRef<str>,
    {
        let aliases = aliases
            .into_iter()
            .map(|(provider, kind)| (provider.as_ref().trim().to_ascii_lowercase(), kind))
            .collect();
        Self { aliases }
    }

    /// Number of configured aliases
    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Resolve the processor kind for an input
    #[must_use]
    pub fn resolve(&self, input: &ParseInput) -> ProcessorKind {
        if input.kind != ResponseKind::Chat {
            trace!(kind = ?input.kind, "non-chat response, using generic processor");
            return ProcessorKind::Generic;
        }

        let Some(kind) = self.provider_kind(&input.provider) else {
            debug!(provider = %input.provider, "unknown provider, using generic processor");
            return ProcessorKind::Generic;
        };

        match (kind, input.model.as_deref()) {
            (ProcessorKind::Bedrock | ProcessorKind::Gemini, Some(model))
                if is_claude_model(model) =>
            {
                ProcessorKind::Anthropic
            }
            _ => kind,
        }
    }

    /// Select the processor for an input
    #[must_use]
    pub fn select(&self, input: &ParseInput) -> &'static dyn BodyProcessor {
        self.resolve(input).processor()
    }

    /// Resolve, then parse
    pub fn parse(&self, input: &ParseInput) -> Result<ParseOutput> {
        self.select(input).parse(input)
    }

    fn provider_kind(&self, provider: &str) -> Option<ProcessorKind> {
        let key = provider.trim().to_ascii_lowercase();
        self.aliases
            .get(&key)
            .copied()
            .or_else(|| ProcessorKind::from_provider(&key))
    }
}

/// Claude model ids as served by Bedrock or Vertex
fn is_claude_model(model: &str) -> bool {
    contains_ignore_ascii_case(model, "claude") || contains_ignore_ascii_case(model, "anthropic.")
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
