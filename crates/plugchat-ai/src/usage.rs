//! Per-session accounting of completion calls, tokens, and tool runs.

use crate::TokenUsage;

#[derive(Debug, Clone, Default)]
pub struct UsageTracker {
    /// Tokens summed over every completion call.
    tokens: TokenUsage,
    /// Number of completion round trips.
    completions: u64,
    /// Tool invocations requested by the model.
    tool_calls: u64,
    /// Tool invocations that ended in an error result.
    tool_failures: u64,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completion round trip.
    pub fn record_completion(&mut self, usage: &TokenUsage) {
        self.completions += 1;
        self.tokens.prompt_tokens = self.tokens.prompt_tokens.saturating_add(usage.prompt_tokens);
        self.tokens.completion_tokens = self
            .tokens
            .completion_tokens
            .saturating_add(usage.completion_tokens);
    }

    pub fn record_tool_call(&mut self, failed: bool) {
        self.tool_calls += 1;
        if failed {
            self.tool_failures += 1;
        }
    }

    pub fn tokens(&self) -> &TokenUsage {
        &self.tokens
    }

    pub fn total_tokens(&self) -> u64 {
        self.tokens.total_tokens()
    }

    pub fn completions(&self) -> u64 {
        self.completions
    }

    pub fn tool_calls(&self) -> u64 {
        self.tool_calls
    }

    pub fn tool_failures(&self) -> u64 {
        self.tool_failures
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
