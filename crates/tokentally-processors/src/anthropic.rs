//! Anthropic body processor
//!
//! Messages API usage. `input_tokens` already excludes cached tokens, and
//! cache writes are reported separately, so no subtraction is needed. The
//! API reports no total.
//!
//! Claude is also served through Bedrock Converse and OpenAI-compatible
//! endpoints; a `usage` block without Anthropic fields is handed to the
//! Bedrock processor, which falls back to the generic one.

use crate::bedrock::BedrockBodyProcessor;
use crate::processor::BodyProcessor;
use crate::schema::count;
use serde::Deserialize;
use serde_json::Value;
use tokentally_core::Usage;

#[derive(Debug, Default, Deserialize)]
struct AnthropicUsage {
    #[serde(default, deserialize_with = "count")]
    input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    output_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    cache_creation_input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    cache_read_input_tokens: Option<u64>,
}

const ANTHROPIC_FIELDS: [&str; 4] = [
    "input_tokens",
    "output_tokens",
    "cache_creation_input_tokens",
    "cache_read_input_tokens",
];

/// Anthropic Messages processor
#[derive(Debug, Clone, Copy, Default)]
pub struct AnthropicBodyProcessor;

impl BodyProcessor for AnthropicBodyProcessor {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn usage(&self, body: &Value) -> Usage {
        let anthropic = body
            .get("usage")
            .filter(|usage| {
                ANTHROPIC_FIELDS
                    .iter()
                    .any(|field| usage.get(*field).is_some())
            })
            .and_then(|usage| AnthropicUsage::deserialize(usage).ok());

        let Some(usage) = anthropic else {
            return BedrockBodyProcessor.usage(body);
        };

        Usage {
            prompt_tokens: usage.input_tokens,
            prompt_cache_write_tokens: usage.cache_creation_input_tokens,
            prompt_cache_read_tokens: usage.cache_read_input_tokens,
            completion_tokens: usage.output_tokens,
            total_tokens: None,
            helicone_calculated: false,
        }
    }
}
