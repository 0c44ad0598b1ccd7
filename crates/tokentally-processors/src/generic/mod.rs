//! Generic body processor
//!
//! The least-assumptions processor, used whenever no provider-specific
//! processor matches. It understands two shapes:
//!
//! - an OpenAI-style `usage` object (`prompt_tokens` / `completion_tokens`,
//!   or `input_tokens` / `output_tokens`)
//! - flat top-level counts (`prompt_token_count`, `generation_token_count`,
//!   ...) when the body has no `usage` key
//!
//! # Module Structure
//!
//! - `types`: serde schemas for both shapes

pub(crate) mod types;


use crate::processor::BodyProcessor;
use crate::schema::{block, net_of};
use serde::Deserialize;
use serde_json::Value;
use tokentally_core::Usage;
use types::{ChatUsage, FlatTokenCounts};

/// Catch-all processor
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericBodyProcessor;

impl BodyProcessor for GenericBodyProcessor {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn usage(&self, body: &Value) -> Usage {
        if !body.is_object() {
            return Usage::unknown();
        }

        match block::<ChatUsage>(body, "usage") {
            Some(usage) => chat_usage(&usage),
            None => flat_usage(body),
        }
    }
}

/// Apply the chat usage accounting rules
///
/// Prompt tokens are net of cache-read and audio tokens, completion tokens
/// net of audio tokens; both clamp at zero. The `input_tokens` /
/// `output_tokens` naming carries no breakdown and is used as reported.
pub(crate) fn chat_usage(usage: &ChatUsage) -> Usage {
    let prompt_details = usage.prompt_tokens_details.as_ref();
    let cached_tokens = prompt_details.and_then(|d| d.cached_tokens);
    let prompt_audio_tokens = prompt_details.and_then(|d| d.audio_tokens);
    let completion_audio_tokens = usage
        .completion_tokens_details
        .as_ref()
        .and_then(|d| d.audio_tokens);

    let prompt_tokens = match usage.prompt_tokens {
        Some(prompt) => Some(net_of(prompt, &[cached_tokens, prompt_audio_tokens])),
        None => usage.input_tokens,
    };
    let completion_tokens = match usage.completion_tokens {
        Some(completion) => Some(net_of(completion, &[completion_audio_tokens])),
        None => usage.output_tokens,
    };

    Usage {
        prompt_tokens,
        // Cache writes are billed per provider (e.g. in fixed-size blocks) and
        // this shape does not report them.
        prompt_cache_write_tokens: None,
        prompt_cache_read_tokens: cached_tokens,
        completion_tokens,
        total_tokens: usage.total_tokens,
        helicone_calculated: false,
    }
}

/// Map the flat top-level counts; no provider total exists in this shape
pub(crate) fn flat_usage(body: &Value) -> Usage {
    let counts = FlatTokenCounts::deserialize(body).unwrap_or_default();
    Usage {
        prompt_tokens: counts.prompt_token_count,
        prompt_cache_write_tokens: counts.prompt_cache_write_token_count,
        prompt_cache_read_tokens: counts.prompt_cache_read_token_count,
        completion_tokens: counts.generation_token_count,
        total_tokens: None,
        helicone_calculated: false,
    }
}
