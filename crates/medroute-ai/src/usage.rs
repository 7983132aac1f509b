//! Token usage and turn outcome tracking for a coordinator session.

use crate::TokenUsage;

/// Cumulative usage across the oracle calls of one session.
#[derive(Debug, Clone, Default)]
pub struct UsageTracker {
    total: TokenUsage,
    /// Calls that returned a reply.
    call_count: u64,
    /// Calls that failed before producing a reply.
    failure_count: u64,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from a successful call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self
            .total
            .output_tokens
            .saturating_add(usage.output_tokens);
        self.call_count += 1;
    }

    pub fn record_failure(&mut self) {
        self.failure_count += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn failure_count(&self) -> u64 {
        self.failure_count
    }
}
