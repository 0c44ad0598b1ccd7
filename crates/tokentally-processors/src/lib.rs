//! Tokentally Processors - response-body normalization
//!
//! This crate turns raw LLM provider response bodies into canonical usage:
//! - Processor: the BodyProcessor trait every shape implements
//! - Generic: catch-all processor for OpenAI-style and flat token schemas
//! - OpenAI: Chat Completions and Responses API usage
//! - Anthropic: Messages API usage with prompt-cache accounting
//! - Gemini: `usageMetadata` accounting (Google AI Studio / Vertex)
//! - Bedrock: Converse API usage and InvokeModel flat counts
//! - Cohere: billed-unit accounting (v1 and v2)
//! - Registry: provider/model/endpoint dispatch with generic fallback

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod anthropic;
pub mod bedrock;
pub mod cohere;
pub mod gemini;
pub mod generic;
pub mod openai;
pub mod processor;
pub mod registry;
mod schema;

pub use anthropic::AnthropicBodyProcessor;
pub use bedrock::BedrockBodyProcessor;
pub use cohere::CohereBodyProcessor;
pub use gemini::GeminiBodyProcessor;
pub use generic::GenericBodyProcessor;
pub use openai::OpenAiBodyProcessor;
pub use processor::BodyProcessor;
pub use registry::{ProcessorKind, ProcessorRegistry};

pub use tokentally_core::{Error, ErrorKind, ParseInput, ParseOutput, ResponseKind, Result, Usage};
