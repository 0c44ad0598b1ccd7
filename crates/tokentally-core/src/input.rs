//! Processor input and output types
//!
//! A [`ParseInput`] is the raw response body plus the routing hints the
//! ingestion pipeline knows about the call that produced it.

use crate::usage::Usage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Endpoint family that produced a response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// Chat / text completion
    #[default]
    Chat,
    /// Embedding
    Embedding,
    /// Moderation / classification
    Moderation,
    /// Any other endpoint
    Other,
}

impl ResponseKind {
    /// Interpret a free-form endpoint hint
    ///
    /// Unrecognized hints map to [`ResponseKind::Other`].
    #[must_use]
    pub fn from_hint(hint: &str) -> Self {
        match hint.trim().to_ascii_lowercase().as_str() {
            "chat" | "completion" | "completions" | "chat_completion" | "messages"
            | "responses" => Self::Chat,
            "embedding" | "embeddings" | "embed" => Self::Embedding,
            "moderation" | "moderations" => Self::Moderation,
            _ => Self::Other,
        }
    }
}

/// Raw response body with routing hints
#[derive(Debug, Clone, Default)]
pub struct ParseInput {
    /// Response body as received (not guaranteed to be valid JSON)
    pub response_body: String,
    /// Provider identifier, e.g. "openai"
    pub provider: String,
    /// Model identifier, if known
    pub model: Option<String>,
    /// Endpoint family
    pub kind: ResponseKind,
}

impl ParseInput {
    /// Create a new chat input
    #[must_use]
    pub fn new(response_body: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            response_body: response_body.into(),
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the endpoint family
    #[must_use]
    pub fn with_kind(mut self, kind: ResponseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Body size in bytes
    #[must_use]
    pub fn body_len(&self) -> usize {
        self.response_body.len()
    }
}

/// Parsed body and its canonical usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutput {
    /// Parsed response document
    pub processed_body: Value,
    /// Extracted usage
    pub usage: Usage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let input = ParseInput::new("{}", "openai")
            .with_model("gpt-4o")
            .with_kind(ResponseKind::Embedding);

        assert_eq!(input.response_body, "{}");
        assert_eq!(input.provider, "openai");
        assert_eq!(input.model.as_deref(), Some("gpt-4o"));
        assert_eq!(input.kind, ResponseKind::Embedding);
        assert_eq!(input.body_len(), 2);
    }

    #[test]
    fn test_default_kind_is_chat() {
        assert_eq!(ParseInput::new("", "x").kind, ResponseKind::Chat);
    }

    #[test]
    fn test_response_kind_from_hint() {
        assert_eq!(ResponseKind::from_hint("Chat"), ResponseKind::Chat);
        assert_eq!(ResponseKind::from_hint(" embeddings "), ResponseKind::Embedding);
        assert_eq!(ResponseKind::from_hint("moderation"), ResponseKind::Moderation);
        assert_eq!(ResponseKind::from_hint("audio/speech"), ResponseKind::Other);
    }
}
