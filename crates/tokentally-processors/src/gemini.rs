//! Gemini body processor
//!
//! Google AI Studio and Vertex AI report usage under `usageMetadata` rather
//! than `usage`. Cached content is part of `promptTokenCount`; thinking
//! tokens are billed as output alongside the candidates.

use crate::generic::GenericBodyProcessor;
use crate::processor::BodyProcessor;
use crate::schema::{block, count, net_of};
use serde::Deserialize;
use serde_json::Value;
use tokentally_core::Usage;
use tracing::debug;

const USAGE_METADATA: &str = "usageMetadata";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default, deserialize_with = "count")]
    prompt_token_count: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    cached_content_token_count: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    candidates_token_count: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    thoughts_token_count: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    total_token_count: Option<u64>,
}

impl From<UsageMetadata> for Usage {
    fn from(meta: UsageMetadata) -> Self {
        let completion_tokens = match (meta.candidates_token_count, meta.thoughts_token_count) {
            (None, None) => None,
            (candidates, thoughts) => {
                Some(candidates.unwrap_or(0).saturating_add(thoughts.unwrap_or(0)))
            }
        };

        Self {
            prompt_tokens: meta
                .prompt_token_count
                .map(|prompt| net_of(prompt, &[meta.cached_content_token_count])),
            prompt_cache_write_tokens: None,
            prompt_cache_read_tokens: meta.cached_content_token_count,
            completion_tokens,
            total_tokens: meta.total_token_count,
            helicone_calculated: false,
        }
    }
}

/// Gemini `usageMetadata` processor
#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiBodyProcessor;

impl BodyProcessor for GeminiBodyProcessor {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn usage(&self, body: &Value) -> Usage {
        // Non-SSE streaming returns an array of chunks; the final usage
        // travels on the last chunk that carries it.
        if let Value::Array(chunks) = body {
            let last = chunks
                .iter()
                .rev()
                .find_map(|chunk| block::<UsageMetadata>(chunk, USAGE_METADATA));
            if last.is_none() {
                debug!(chunks = chunks.len(), "no usageMetadata in streamed Gemini body");
            }
            return last.map(Usage::from).unwrap_or_else(Usage::unknown);
        }

        match block::<UsageMetadata>(body, USAGE_METADATA) {
            Some(meta) => meta.into(),
            None => GenericBodyProcessor.usage(body),
        }
    }
}
