//! The solve cycle: fetch, match, settle, report.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use cow_intents_matching_engine::{find_disjoint_matches, find_match_for_intent};
use cow_intents_settlement::{LedgerClient, MatchRecorder, SettlementExecutor};
use cow_intents_types::{CompatiblePair, Intent, MatchResult};

use crate::store::{IntentStore, StoreError};

// ═══════════════════════════════════════════════════════════════════════════
// CYCLE REPORT
// ═══════════════════════════════════════════════════════════════════════════

/// Tally of one completed cycle. Every discovered pair lands in exactly
/// one of the outcome buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Disjoint pairs discovered this cycle
    pub pairs_found: usize,

    /// Settlements the ledger confirmed
    pub settled: usize,

    /// Pairs benignly skipped: stale before submission, or raced
    pub skipped_stale: usize,

    /// Pairs abandoned on a hard failure
    pub failed: usize,
}

impl CycleReport {
    fn tally(&mut self, result: &MatchResult) {
        match result {
            MatchResult::Settled(_) => self.settled += 1,
            MatchResult::Stale(_) => self.skipped_stale += 1,
            MatchResult::Failed(_) => self.failed += 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("intent fetch failed: {0}")]
    Fetch(#[from] StoreError),
}

// ═══════════════════════════════════════════════════════════════════════════
// PIPELINE
// ═══════════════════════════════════════════════════════════════════════════

/// One solver instance's matching-and-settlement loop body.
///
/// Several pipelines may watch the same pool from independent processes
/// with no coordination; the executor's re-validation and the ledger's
/// double-settlement rejection are what keep that safe. Host code decides
/// when to call [`run_cycle`](SolverPipeline::run_cycle); polling cadence
/// and process wiring live outside this crate.
pub struct SolverPipeline<S, L, R>
where
    S: IntentStore,
    L: LedgerClient,
    R: MatchRecorder,
{
    store: Arc<S>,
    executor: SettlementExecutor<L, R>,
}

impl<S, L, R> SolverPipeline<S, L, R>
where
    S: IntentStore,
    L: LedgerClient,
    R: MatchRecorder,
{
    pub fn new(store: Arc<S>, executor: SettlementExecutor<L, R>) -> Self {
        Self { store, executor }
    }

    /// Run one full cycle: fetch the pool, pick disjoint pairs, settle
    /// them one at a time in discovery order.
    ///
    /// Only the fetch can fail. Every settlement outcome, benign or hard,
    /// is absorbed into the report; one bad pair never aborts the rest of
    /// the cycle.
    pub async fn run_cycle(&self) -> Result<CycleReport, PipelineError> {
        let intents = self.store.fetch_open_intents().await?;
        debug!(pool_size = intents.len(), "fetched open intents");

        let pairs = find_disjoint_matches(&intents);

        let mut report = CycleReport {
            pairs_found: pairs.len(),
            ..Default::default()
        };

        for pair in &pairs {
            let result = self.executor.settle(pair).await;
            report.tally(&result);
        }

        info!(
            pairs_found = report.pairs_found,
            settled = report.settled,
            skipped_stale = report.skipped_stale,
            failed = report.failed,
            "cycle complete"
        );
        Ok(report)
    }

    /// Handle one newly arrived intent: check its shape, look for the
    /// first compatible counterpart in the pool, settle on a hit.
    ///
    /// Returns `None` when the intent is malformed, the pool is
    /// unavailable, or nothing matches.
    pub async fn process_new_intent(&self, intent: &Intent) -> Option<MatchResult> {
        if let Err(err) = intent.validate() {
            warn!(intent_id = %intent.id, error = %err, "rejecting malformed intent");
            return None;
        }

        let pool = match self.store.fetch_open_intents().await {
            Ok(pool) => pool,
            Err(err) => {
                warn!(intent_id = %intent.id, error = %err, "intent pool unavailable");
                return None;
            }
        };

        // The store may already hold the intent being processed; it must
        // not match against itself.
        let pool: Vec<Intent> = pool
            .into_iter()
            .filter(|candidate| candidate.id != intent.id)
            .collect();

        let counterpart = match find_match_for_intent(intent, &pool) {
            Some(counterpart) => counterpart,
            None => {
                debug!(intent_id = %intent.id, "no compatible counterpart in pool");
                return None;
            }
        };

        let pair = CompatiblePair::new(intent.clone(), counterpart.clone());
        Some(self.executor.settle(&pair).await)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
