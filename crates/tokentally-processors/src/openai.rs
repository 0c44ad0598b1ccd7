//! OpenAI body processor
//!
//! Covers OpenAI and the OpenAI-compatible gateways (Azure, OpenRouter,
//! Groq, DeepSeek, ...). Chat Completions usage follows the generic rules;
//! Responses API usage reports `input_tokens` with its own cached breakdown.

use crate::generic::types::ChatUsage;
use crate::generic::{chat_usage, GenericBodyProcessor};
use crate::processor::BodyProcessor;
use crate::schema::{count, lenient, net_of};
use serde::Deserialize;
use serde_json::Value;
use tokentally_core::Usage;

/// Responses API `usage` object
#[derive(Debug, Default, Deserialize)]
struct ResponsesUsage {
    #[serde(default, deserialize_with = "count")]
    input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    output_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    total_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    input_tokens_details: Option<InputTokensDetails>,
}

#[derive(Debug, Default, Deserialize)]
struct InputTokensDetails {
    #[serde(default, deserialize_with = "count")]
    cached_tokens: Option<u64>,
}

/// OpenAI-style processor
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiBodyProcessor;

impl BodyProcessor for OpenAiBodyProcessor {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn usage(&self, body: &Value) -> Usage {
        let Some(usage) = body.get("usage") else {
            return GenericBodyProcessor.usage(body);
        };

        if is_chat_completions(usage) {
            let chat = ChatUsage::deserialize(usage).unwrap_or_default();
            return chat_usage(&chat);
        }

        let responses = ResponsesUsage::deserialize(usage).unwrap_or_default();
        let cached_tokens = responses
            .input_tokens_details
            .as_ref()
            .and_then(|d| d.cached_tokens);

        Usage {
            prompt_tokens: responses
                .input_tokens
                .map(|input| net_of(input, &[cached_tokens])),
            prompt_cache_write_tokens: None,
            prompt_cache_read_tokens: cached_tokens,
            completion_tokens: responses.output_tokens,
            total_tokens: responses.total_tokens,
            helicone_calculated: false,
        }
    }
}

fn is_chat_completions(usage: &Value) -> bool {
    usage.get("prompt_tokens").is_some() || usage.get("completion_tokens").is_some()
}
