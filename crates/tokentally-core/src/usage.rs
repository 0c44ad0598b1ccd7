//! Canonical usage record
//!
//! Every body processor produces a [`Usage`]. Each count is independently
//! optional: `None` means the provider did not report it, which downstream
//! cost calculation must keep distinct from a reported zero.

use serde::{Deserialize, Serialize};

/// Provider-agnostic token accounting for one response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    /// Standard-rate prompt tokens, net of cache-read and audio tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_tokens: Option<u64>,
    /// Tokens billed for writing to a prompt cache
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_cache_write_tokens: Option<u64>,
    /// Tokens served from a prompt cache
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_cache_read_tokens: Option<u64>,
    /// Output tokens, net of audio tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_tokens: Option<u64>,
    /// Provider-reported total, passed through and never summed locally
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
    /// True only when the counts were estimated rather than reported
    #[serde(default)]
    pub helicone_calculated: bool,
}

impl Usage {
    /// Usage with every count unset
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            prompt_tokens: None,
            prompt_cache_write_tokens: None,
            prompt_cache_read_tokens: None,
            completion_tokens: None,
            total_tokens: None,
            helicone_calculated: false,
        }
    }

    /// Whether no count at all is known
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.prompt_tokens.is_none()
            && self.prompt_cache_write_tokens.is_none()
            && self.prompt_cache_read_tokens.is_none()
            && self.completion_tokens.is_none()
            && self.total_tokens.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_has_no_counts() {
        let usage = Usage::unknown();
        assert!(usage.is_unknown());
        assert!(!usage.helicone_calculated);
        assert_eq!(usage, Usage::default());
    }

    #[test]
    fn test_reported_zero_is_not_unknown() {
        let usage = Usage {
            completion_tokens: Some(0),
            ..Usage::unknown()
        };
        assert!(!usage.is_unknown());
    }

    #[test]
    fn test_serializes_camel_case_and_skips_unset() {
        let usage = Usage {
            prompt_tokens: Some(60),
            prompt_cache_read_tokens: Some(30),
            ..Usage::unknown()
        };
        let value = serde_json::to_value(usage).unwrap();
        assert_eq!(
            value,
            json!({
                "promptTokens": 60,
                "promptCacheReadTokens": 30,
                "heliconeCalculated": false
            })
        );
    }
}
