use std::time::Duration;

use cow_intents_types::{MatchResult, SettleFailure};
use prometheus::{Encoder, Registry, TextEncoder};

use crate::metrics::*;

/// Metrics collector for the CoW intent solver
pub struct MetricsCollector {
    registry: Registry,
}

impl MetricsCollector {
    /// Create a new metrics collector with default registry
    pub fn new() -> Self {
        let registry = Registry::new();
        Self { registry }
    }

    /// Create a new metrics collector with custom registry
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // INTENT METRICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Record a completed fetch of the open intent pool
    pub fn record_intents_fetched(&self, count: usize) {
        INTENTS_FETCHED.inc_by(count as u64);
        OPEN_INTENTS.set(count as i64);
    }

    /// Record a malformed intent discarded at the store boundary
    pub fn record_intent_discarded(&self) {
        INTENTS_DISCARDED.inc();
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // MATCHING METRICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Record a pair scan over the open pool
    pub fn record_pair_scan(&self, pairs_found: usize, latency: Duration) {
        PAIRS_FOUND.inc_by(pairs_found as u64);
        MATCHING_LATENCY.observe(latency.as_millis() as f64);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SETTLEMENT METRICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Record a settlement submission being sent to the ledger
    pub fn record_settlement_submitted(&self) {
        SETTLEMENTS_SUBMITTED.inc();
    }

    /// Record the outcome of one settlement attempt
    pub fn record_match_result(&self, result: &MatchResult) {
        match result {
            MatchResult::Settled(_) => {
                SETTLEMENTS_SETTLED.inc();
            }
            MatchResult::Stale(kind) => {
                SETTLEMENTS_STALE.with_label_values(&[kind.as_str()]).inc();
            }
            MatchResult::Failed(failure) => {
                let reason = match failure {
                    SettleFailure::Rejected { .. } => "rejected",
                    SettleFailure::Transport { .. } => "transport",
                    SettleFailure::Timeout => "timeout",
                };
                SETTLEMENTS_FAILED.with_label_values(&[reason]).inc();
            }
        }
    }

    /// Record settlement duration
    pub fn record_settlement_duration(&self, duration: Duration) {
        SETTLEMENT_DURATION.observe(duration.as_millis() as f64);
    }

    /// Record one settlement attempt with its outcome and duration
    pub fn record_settlement(&self, result: &MatchResult, duration: Duration) {
        self.record_match_result(result);
        self.record_settlement_duration(duration);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // CYCLE METRICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Record a completed solver cycle
    pub fn record_cycle_completed(&self, duration: Duration) {
        CYCLES_RUN.inc();
        CYCLE_DURATION.observe(duration.as_millis() as f64);
    }

    /// Record a cycle aborted by a store fetch failure
    pub fn record_cycle_failed(&self) {
        CYCLES_RUN.inc();
        CYCLES_FAILED.inc();
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // EXPORT
    // ═══════════════════════════════════════════════════════════════════════════

    /// Export metrics in Prometheus text format
    pub fn export_metrics(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = prometheus::gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| MetricsError::EncodingError(e.to_string()))?;

        String::from_utf8(buffer).map_err(|e| MetricsError::EncodingError(e.to_string()))
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Metrics error types
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("encoding error: {0}")]
    EncodingError(String),
    #[error("registry error: {0}")]
    RegistryError(String),
}
