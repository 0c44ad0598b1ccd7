//! Processor kinds
//!
//! Each variant owns one static, stateless processor instance.

use crate::anthropic::AnthropicBodyProcessor;
use crate::bedrock::BedrockBodyProcessor;
use crate::cohere::CohereBodyProcessor;
use crate::gemini::GeminiBodyProcessor;
use crate::generic::GenericBodyProcessor;
use crate::openai::OpenAiBodyProcessor;
use crate::processor::BodyProcessor;
use serde::{Deserialize, Serialize};
use std::fmt;

static GENERIC: GenericBodyProcessor = GenericBodyProcessor;
static OPENAI: OpenAiBodyProcessor = OpenAiBodyProcessor;
static ANTHROPIC: AnthropicBodyProcessor = AnthropicBodyProcessor;
static GEMINI: GeminiBodyProcessor = GeminiBodyProcessor;
static BEDROCK: BedrockBodyProcessor = BedrockBodyProcessor;
static COHERE: CohereBodyProcessor = CohereBodyProcessor;

/// Response-shape family a processor is written against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorKind {
    /// Catch-all fallback
    #[default]
    Generic,
    /// OpenAI and OpenAI-compatible APIs
    #[serde(rename = "openai")]
    OpenAi,
    /// Anthropic Messages API
    Anthropic,
    /// Google Gemini / Vertex AI
    Gemini,
    /// AWS Bedrock
    Bedrock,
    /// Cohere
    Cohere,
}

impl ProcessorKind {
    /// All kinds, fallback first
    pub const ALL: [ProcessorKind; 6] = [
        Self::Generic,
        Self::OpenAi,
        Self::Anthropic,
        Self::Gemini,
        Self::Bedrock,
        Self::Cohere,
    ];

    /// Get the processor for this kind
    #[must_use]
    pub fn processor(self) -> &'static dyn BodyProcessor {
        match self {
            Self::Generic => &GENERIC,
            Self::OpenAi => &OPENAI,
            Self::Anthropic => &ANTHROPIC,
            Self::Gemini => &GEMINI,
            Self::Bedrock => &BEDROCK,
            Self::Cohere => &COHERE,
        }
    }

    /// Get the kind name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Gemini => "gemini",
            Self::Bedrock => "bedrock",
            Self::Cohere => "cohere",
        }
    }

    /// Map a provider identifier to its built-in kind
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns `None` for providers without a dedicated processor.
    #[must_use]
    pub fn from_provider(provider: &str) -> Option<Self> {
        let provider = provider.trim().to_ascii_lowercase();
        let kind = match provider.as_str() {
            "generic" | "custom" => Self::Generic,
            "openai" | "azure" | "azure-openai" | "azure_openai" | "openrouter" | "groq"
            | "deepseek" | "together" | "togetherai" | "fireworks" | "mistral" | "xai"
            | "x-ai" | "perplexity" | "ollama" | "siliconflow" | "moonshot" | "qwen"
            | "glm" | "novita" => Self::OpenAi,
            "anthropic" => Self::Anthropic,
            "google" | "gemini" | "vertex" | "vertexai" | "vertex-ai" => Self::Gemini,
            "bedrock" | "aws" | "aws-bedrock" => Self::Bedrock,
            "cohere" => Self::Cohere,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
