//! Turns one compatible pair into an authoritative, on-ledger settlement.
//!
//! The executor holds no locks and shares no mutable state with competing
//! solvers. Double-settlement protection is the pre-submit re-validation
//! plus the ledger's rejection of a second settlement; the first confirmed
//! settlement wins and everyone else observes a benign rejection.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use cow_intents_matching_engine::is_compatible;
use cow_intents_types::{CompatiblePair, MatchResult, SettleFailure, StaleKind, TxReference};

use crate::ledger::{LedgerClient, LedgerError};
use crate::recorder::MatchRecorder;

// ═══════════════════════════════════════════════════════════════════════════
// CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Ceiling on one submission plus its confirmation wait, in
    /// milliseconds. On expiry the attempt is a hard failure: the intents'
    /// true status is unknown until re-fetched.
    pub submit_timeout_ms: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            submit_timeout_ms: 120_000, // 2 minutes
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// EXECUTOR
// ═══════════════════════════════════════════════════════════════════════════

pub struct SettlementExecutor<L, R>
where
    L: LedgerClient,
    R: MatchRecorder,
{
    ledger: Arc<L>,
    recorder: Arc<R>,
    config: ExecutorConfig,
}

impl<L, R> SettlementExecutor<L, R>
where
    L: LedgerClient,
    R: MatchRecorder,
{
    pub fn new(ledger: Arc<L>, recorder: Arc<R>, config: ExecutorConfig) -> Self {
        Self {
            ledger,
            recorder,
            config,
        }
    }

    /// Settle one pair and classify the outcome.
    ///
    /// Never returns an error: benign races and hard failures alike come
    /// back as data in the [`MatchResult`], so one bad pair cannot abort a
    /// caller's cycle. Nothing here is retried.
    pub async fn settle(&self, pair: &CompatiblePair) -> MatchResult {
        // ═══════════════════════════════════════════════════════════════════
        // PHASE 1: RE-VALIDATE - pair may have gone stale since discovery
        // ═══════════════════════════════════════════════════════════════════

        if !pair.a.is_pending() || !pair.b.is_pending() {
            debug!(
                intent_a = %pair.a.id,
                intent_b = %pair.b.id,
                "pair no longer pending, skipping without submission"
            );
            return MatchResult::Stale(StaleKind::NotPending);
        }

        if !is_compatible(&pair.a, &pair.b) {
            debug!(
                intent_a = %pair.a.id,
                intent_b = %pair.b.id,
                "pair no longer compatible, skipping without submission"
            );
            return MatchResult::Stale(StaleKind::Incompatible);
        }

        // ═══════════════════════════════════════════════════════════════════
        // PHASE 2: SUBMIT - one request, bounded wait for finality
        // ═══════════════════════════════════════════════════════════════════

        let wait = Duration::from_millis(self.config.submit_timeout_ms);
        let submitted = self.ledger.submit_settlement(&pair.a.id, &pair.b.id);

        let outcome = match timeout(wait, submitted).await {
            Ok(outcome) => outcome,
            Err(_) => {
                error!(
                    intent_a = %pair.a.id,
                    intent_b = %pair.b.id,
                    timeout_ms = self.config.submit_timeout_ms,
                    "settlement confirmation timed out; intent status unknown until re-fetched"
                );
                return MatchResult::Failed(SettleFailure::Timeout);
            }
        };

        // ═══════════════════════════════════════════════════════════════════
        // PHASE 3: CLASSIFY - success, benign race, or hard failure
        // ═══════════════════════════════════════════════════════════════════

        match outcome {
            Ok(tx) => {
                info!(
                    intent_a = %pair.a.id,
                    intent_b = %pair.b.id,
                    tx_hash = %tx.tx_hash,
                    block_number = tx.block_number,
                    "settlement confirmed"
                );
                self.record(pair, &tx).await;
                MatchResult::Settled(tx)
            }
            Err(err) if err.is_benign_race() => {
                debug!(
                    intent_a = %pair.a.id,
                    intent_b = %pair.b.id,
                    "pair already settled by a competing solver"
                );
                MatchResult::Stale(StaleKind::Raced)
            }
            Err(LedgerError::Rejected { reason }) => {
                error!(
                    intent_a = %pair.a.id,
                    intent_b = %pair.b.id,
                    %reason,
                    "ledger rejected settlement"
                );
                MatchResult::Failed(SettleFailure::Rejected { reason })
            }
            Err(LedgerError::Transport(message)) => {
                error!(
                    intent_a = %pair.a.id,
                    intent_b = %pair.b.id,
                    %message,
                    "transport failure during settlement; intent status unknown until re-fetched"
                );
                MatchResult::Failed(SettleFailure::Transport { message })
            }
        }
    }

    /// Journal a confirmed settlement. Failures are logged and swallowed;
    /// the settlement already happened on the ledger.
    async fn record(&self, pair: &CompatiblePair, tx: &TxReference) {
        if let Err(err) = self.recorder.record_match(&pair.a, &pair.b, tx).await {
            warn!(
                intent_a = %pair.a.id,
                intent_b = %pair.b.id,
                error = %err,
                "failed to journal settled match"
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
