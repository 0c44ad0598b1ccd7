//! AWS Bedrock body processor
//!
//! The Converse API reports camelCase `usage` with explicit cache counts.
//! InvokeModel bodies for Llama-family models carry the flat top-level
//! counts the generic processor already understands.

use crate::generic::GenericBodyProcessor;
use crate::processor::BodyProcessor;
use crate::schema::count;
use serde::Deserialize;
use serde_json::Value;
use tokentally_core::Usage;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConverseUsage {
    #[serde(default, deserialize_with = "count")]
    input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    output_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    total_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    cache_read_input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    cache_write_input_tokens: Option<u64>,
}

/// Bedrock processor
#[derive(Debug, Clone, Copy, Default)]
pub struct BedrockBodyProcessor;

impl BodyProcessor for BedrockBodyProcessor {
    fn name(&self) -> &'static str {
        "bedrock"
    }

    fn usage(&self, body: &Value) -> Usage {
        let converse = body
            .get("usage")
            .filter(|usage| {
                usage.get("inputTokens").is_some() || usage.get("outputTokens").is_some()
            })
            .and_then(|usage| ConverseUsage::deserialize(usage).ok());

        let Some(usage) = converse else {
            return GenericBodyProcessor.usage(body);
        };

        Usage {
            prompt_tokens: usage.input_tokens,
            prompt_cache_write_tokens: usage.cache_write_input_tokens,
            prompt_cache_read_tokens: usage.cache_read_input_tokens,
            completion_tokens: usage.output_tokens,
            total_tokens: usage.total_tokens,
            helicone_calculated: false,
        }
    }
}
