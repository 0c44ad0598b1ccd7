//! Usage schemas read by the generic processor

use crate::schema::{count, lenient};
use serde::Deserialize;

/// OpenAI-style `usage` object
///
/// Also covers the `input_tokens` / `output_tokens` naming used by several
/// OpenAI-compatible vendors.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChatUsage {
    #[serde(default, deserialize_with = "count")]
    pub prompt_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub completion_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub output_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub total_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub prompt_tokens_details: Option<PromptTokensDetails>,
    #[serde(default, deserialize_with = "lenient")]
    pub completion_tokens_details: Option<CompletionTokensDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PromptTokensDetails {
    #[serde(default, deserialize_with = "count")]
    pub cached_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub audio_tokens: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CompletionTokensDetails {
    #[serde(default, deserialize_with = "count")]
    pub audio_tokens: Option<u64>,
}

/// Flat top-level counts reported when there is no `usage` object
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FlatTokenCounts {
    #[serde(default, deserialize_with = "count")]
    pub prompt_token_count: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub prompt_cache_write_token_count: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub prompt_cache_read_token_count: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub generation_token_count: Option<u64>,
}
