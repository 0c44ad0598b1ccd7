//! Tests for registry module

use super::*;
use tokentally_core::{ErrorKind, ParseInput, ResponseKind};

fn chat(provider: &str) -> ParseInput {
    ParseInput::new("{}", provider)
}

#[test]
fn test_from_provider() {
    assert_eq!(ProcessorKind::from_provider("openai"), Some(ProcessorKind::OpenAi));
    assert_eq!(ProcessorKind::from_provider(" Azure "), Some(ProcessorKind::OpenAi));
    assert_eq!(ProcessorKind::from_provider("OPENROUTER"), Some(ProcessorKind::OpenAi));
    assert_eq!(ProcessorKind::from_provider("anthropic"), Some(ProcessorKind::Anthropic));
    assert_eq!(ProcessorKind::from_provider("vertex"), Some(ProcessorKind::Gemini));
    assert_eq!(ProcessorKind::from_provider("google"), Some(ProcessorKind::Gemini));
    assert_eq!(ProcessorKind::from_provider("aws"), Some(ProcessorKind::Bedrock));
    assert_eq!(ProcessorKind::from_provider("cohere"), Some(ProcessorKind::Cohere));
    assert_eq!(ProcessorKind::from_provider("custom"), Some(ProcessorKind::Generic));
    assert_eq!(ProcessorKind::from_provider("someone-new"), None);
    assert_eq!(ProcessorKind::from_provider(""), None);
}

#[test]
fn test_processor_names_match_kinds() {
    for kind in ProcessorKind::ALL {
        assert_eq!(kind.processor().name(), kind.as_str());
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn test_kind_serde_names() {
    let json = serde_json::to_string(&ProcessorKind::OpenAi).unwrap();
    assert_eq!(json, "\"openai\"");

    let kind: ProcessorKind = serde_json::from_str("\"bedrock\"").unwrap();
    assert_eq!(kind, ProcessorKind::Bedrock);
}

#[test]
fn test_unknown_provider_falls_back_to_generic() {
    let registry = ProcessorRegistry::new();
    assert_eq!(registry.resolve(&chat("acme-llm")), ProcessorKind::Generic);
    assert_eq!(registry.select(&chat("acme-llm")).name(), "generic");
}

#[test]
fn test_non_chat_kinds_use_generic() {
    let registry = ProcessorRegistry::new();
    for kind in [ResponseKind::Embedding, ResponseKind::Moderation, ResponseKind::Other] {
        let input = chat("anthropic").with_kind(kind);
        assert_eq!(registry.resolve(&input), ProcessorKind::Generic);
    }
    assert_eq!(registry.resolve(&chat("anthropic")), ProcessorKind::Anthropic);
}

#[test]
fn test_claude_models_on_cloud_providers() {
    let registry = ProcessorRegistry::new();

    let bedrock = chat("bedrock").with_model("anthropic.claude-3-5-sonnet-20241022-v2:0");
    assert_eq!(registry.resolve(&bedrock), ProcessorKind::Anthropic);

    let vertex = chat("vertex").with_model("claude-sonnet-4-5@20250929");
    assert_eq!(registry.resolve(&vertex), ProcessorKind::Anthropic);

    let llama = chat("bedrock").with_model("meta.llama3-70b-instruct-v1:0");
    assert_eq!(registry.resolve(&llama), ProcessorKind::Bedrock);

    // OpenRouter serves Claude through the OpenAI shape
    let openrouter = chat("openrouter").with_model("anthropic/claude-sonnet-4.5");
    assert_eq!(registry.resolve(&openrouter), ProcessorKind::OpenAi);
}

#[test]
fn test_claude_model_match_ignores_case() {
    let registry = ProcessorRegistry::new();

    let upper = chat("bedrock").with_model("Anthropic.Claude-3-Haiku-20240307-v1:0");
    assert_eq!(registry.resolve(&upper), ProcessorKind::Anthropic);

    let short = chat("vertex").with_model("cl");
    assert_eq!(registry.resolve(&short), ProcessorKind::Gemini);
}

#[test]
fn test_bedrock_claude_converse_keeps_usage() {
    let body = r#"{"output":{"message":{"role":"assistant","content":[{"text":"ok"}]}},"usage":{"inputTokens":30,"outputTokens":12,"totalTokens":170,"cacheReadInputTokens":100,"cacheWriteInputTokens":28}}"#;
    let input = ParseInput::new(body, "bedrock")
        .with_model("anthropic.claude-3-5-sonnet-20241022-v2:0");

    let usage = ProcessorRegistry::global().parse(&input).unwrap().usage;
    assert_eq!(usage.prompt_tokens, Some(30));
    assert_eq!(usage.completion_tokens, Some(12));
    assert_eq!(usage.total_tokens, Some(170));
    assert_eq!(usage.prompt_cache_read_tokens, Some(100));
    assert_eq!(usage.prompt_cache_write_tokens, Some(28));
}

#[test]
fn test_aliases_take_precedence() {
    let registry = ProcessorRegistry::with_aliases([
        ("My-Proxy", ProcessorKind::Anthropic),
        ("openai", ProcessorKind::Generic),
    ]);

    assert_eq!(registry.alias_count(), 2);
    assert_eq!(registry.resolve(&chat("my-proxy")), ProcessorKind::Anthropic);
    assert_eq!(registry.resolve(&chat("OpenAI")), ProcessorKind::Generic);
    assert_eq!(registry.resolve(&chat("gemini")), ProcessorKind::Gemini);
}

#[test]
fn test_parse_dispatches_to_selected_processor() {
    let body = r#"{"usage":{"input_tokens":10,"cache_read_input_tokens":90,"output_tokens":5}}"#;

    let anthropic = ProcessorRegistry::global()
        .parse(&ParseInput::new(body, "anthropic"))
        .unwrap();
    assert_eq!(anthropic.usage.prompt_cache_read_tokens, Some(90));

    let generic = ProcessorRegistry::global()
        .parse(&ParseInput::new(body, "unknown"))
        .unwrap();
    assert_eq!(generic.usage.prompt_tokens, Some(10));
    assert_eq!(generic.usage.prompt_cache_read_tokens, None);
}

#[test]
fn test_parse_malformed_input_for_every_kind() {
    for kind in ProcessorKind::ALL {
        let err = kind
            .processor()
            .parse(&ParseInput::new("{not valid json", kind.as_str()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }
}

#[test]
fn test_global_registry_has_no_aliases() {
    assert_eq!(ProcessorRegistry::global().alias_count(), 0);
}
