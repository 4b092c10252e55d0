//! Session usage counters.

use crate::Provider;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rough token estimate: one token per four bytes, at least one.
pub fn estimate_tokens(text: &str) -> u64 {
    (text.len() / 4).max(1) as u64
}

/// Usage counters accumulated over a session and never reset.
///
/// # Examples
///
/// ```
/// use vellum_core::UsageMetrics;
///
/// let mut metrics = UsageMetrics::default();
/// metrics.record("gemini", 120, 1.5);
/// metrics.record("gemini", 80, 0.5);
///
/// assert_eq!(*metrics.total_runs(), 2);
/// assert_eq!(metrics.calls_for("gemini"), 2);
/// assert_eq!(metrics.calls_for("openai"), 0);
/// assert_eq!(*metrics.tokens_used(), 200);
/// assert_eq!(*metrics.last_run_duration_secs(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct UsageMetrics {
    total_runs: u64,
    provider_calls: BTreeMap<String, u64>,
    tokens_used: u64,
    last_run_duration_secs: f64,
}

impl Default for UsageMetrics {
    fn default() -> Self {
        Self {
            total_runs: 0,
            provider_calls: Provider::all().map(|p| (p.name().to_string(), 0)).collect(),
            tokens_used: 0,
            last_run_duration_secs: 0.0,
        }
    }
}

impl UsageMetrics {
    /// Calls recorded for a provider name.
    pub fn calls_for(&self, provider: &str) -> u64 {
        self.provider_calls.get(provider).copied().unwrap_or(0)
    }

    /// Records one completed invocation.
    pub fn record(&mut self, provider: &str, tokens: u64, duration_secs: f64) {
        self.total_runs += 1;
        *self.provider_calls.entry(provider.to_string()).or_insert(0) += 1;
        self.tokens_used = self.tokens_used.saturating_add(tokens);
        self.last_run_duration_secs = duration_secs;
    }
}
