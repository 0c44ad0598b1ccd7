//! Cohere body processor
//!
//! Chat v2 reports `usage`, v1 reports `meta`; both hold `billed_units`
//! (what is charged) and `tokens` (what was processed). Billed units win.

use crate::generic::GenericBodyProcessor;
use crate::processor::BodyProcessor;
use crate::schema::{count, lenient};
use serde::Deserialize;
use serde_json::Value;
use tokentally_core::Usage;

#[derive(Debug, Default, Deserialize)]
struct CohereUsage {
    #[serde(default, deserialize_with = "lenient")]
    billed_units: Option<TokenPair>,
    #[serde(default, deserialize_with = "lenient")]
    tokens: Option<TokenPair>,
}

#[derive(Debug, Default, Deserialize)]
struct TokenPair {
    #[serde(default, deserialize_with = "count")]
    input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    output_tokens: Option<u64>,
}

impl CohereUsage {
    fn from_body(body: &Value) -> Option<Self> {
        ["usage", "meta"]
            .iter()
            .filter_map(|key| body.get(*key))
            .filter_map(|block| Self::deserialize(block).ok())
            .find(|usage| usage.billed_units.is_some() || usage.tokens.is_some())
    }

    fn field(&self, pick: fn(&TokenPair) -> Option<u64>) -> Option<u64> {
        self.billed_units
            .as_ref()
            .and_then(pick)
            .or_else(|| self.tokens.as_ref().and_then(pick))
    }
}

/// Cohere processor
#[derive(Debug, Clone, Copy, Default)]
pub struct CohereBodyProcessor;

impl BodyProcessor for CohereBodyProcessor {
    fn name(&self) -> &'static str {
        "cohere"
    }

    fn usage(&self, body: &Value) -> Usage {
        let Some(usage) = CohereUsage::from_body(body) else {
            return GenericBodyProcessor.usage(body);
        };

        Usage {
            prompt_tokens: usage.field(|pair| pair.input_tokens),
            prompt_cache_write_tokens: None,
            prompt_cache_read_tokens: None,
            completion_tokens: usage.field(|pair| pair.output_tokens),
            total_tokens: None,
            helicone_calculated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_v2_billed_units() {
        let body = json!({
            "id": "c14c80c3",
            "finish_reason": "COMPLETE",
            "usage": {
                "billed_units": {"input_tokens": 5, "output_tokens": 418},
                "tokens": {"input_tokens": 71, "output_tokens": 418}
            }
        });

        let usage = CohereBodyProcessor.usage(&body);
        assert_eq!(usage.prompt_tokens, Some(5));
        assert_eq!(usage.completion_tokens, Some(418));
        assert_eq!(usage.total_tokens, None);
    }

    #[test]
    fn test_v1_meta_falls_back_to_tokens() {
        let body = json!({
            "text": "hello",
            "meta": {
                "api_version": {"version": "1"},
                "billed_units": {"output_tokens": 9},
                "tokens": {"input_tokens": 64, "output_tokens": 9}
            }
        });

        let usage = CohereBodyProcessor.usage(&body);
        assert_eq!(usage.prompt_tokens, Some(64));
        assert_eq!(usage.completion_tokens, Some(9));
    }

    #[test]
    fn test_compatibility_api_delegates_to_generic() {
        let body = json!({"usage": {"prompt_tokens": 20, "completion_tokens": 4, "total_tokens": 24}});

        let usage = CohereBodyProcessor.usage(&body);
        assert_eq!(usage.prompt_tokens, Some(20));
        assert_eq!(usage.total_tokens, Some(24));
    }
}
