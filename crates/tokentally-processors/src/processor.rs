//! BodyProcessor trait definition
//!
//! One implementation exists per provider response family. Implementations
//! are pure: no I/O, no shared mutable state.

use serde_json::Value;
use tokentally_core::{ParseInput, ParseOutput, Result, Usage};

/// Trait for response-body processors
pub trait BodyProcessor: Send + Sync {
    /// Get the processor name
    fn name(&self) -> &'static str;

    /// Extract usage from an already-parsed body
    ///
    /// Must never fail: counts the shape does not carry are left unset.
    fn usage(&self, body: &Value) -> Usage;

    /// Parse a raw response body and extract its usage
    ///
    /// Fails with `MalformedInput` when the body is not valid JSON; no
    /// partial usage is produced in that case.
    fn parse(&self, input: &ParseInput) -> Result<ParseOutput> {
        let processed_body: Value = serde_json::from_str(&input.response_body)?;
        let usage = self.usage(&processed_body);
        Ok(ParseOutput {
            processed_body,
            usage,
        })
    }
}
