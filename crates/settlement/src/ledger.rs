//! Interface to the external ledger that finalizes settlements.
//!
//! The ledger owns intent status. This core never writes status locally; it
//! submits a settlement for a pair of intent ids and interprets the
//! ledger's answer. A handle implementing [`LedgerClient`] is injected into
//! the executor at construction, which keeps the executor testable against
//! a fake ledger.

use async_trait::async_trait;
use thiserror::Error;

use cow_intents_types::TxReference;

/// Client for the ledger/contract that executes matched pairs.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Submit one settlement referencing both intents and wait for
    /// finality.
    ///
    /// Resolves only once the ledger has included and finalized the
    /// settlement, or rejected it. Callers bound the wait with their own
    /// timeout; this method itself may block through network and consensus
    /// delays.
    async fn submit_settlement(
        &self,
        intent_id_a: &str,
        intent_id_b: &str,
    ) -> Result<TxReference, LedgerError>;
}

/// Failure reported while submitting or confirming a settlement.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// The ledger refused the settlement
    #[error("ledger rejected settlement: {reason}")]
    Rejected { reason: String },

    /// The request or the confirmation wait failed in transit; the
    /// settlement may or may not have landed
    #[error("transport failure: {0}")]
    Transport(String),
}

impl LedgerError {
    /// True when the rejection only means a competing solver settled one
    /// side of the pair first.
    ///
    /// The signal is a stable string contract with the ledger: the
    /// rejection reason contains `"not pending"` (the contract reverts
    /// with `"Matched intent not pending"`). Every other rejection and any
    /// transport failure is a hard failure.
    pub fn is_benign_race(&self) -> bool {
        match self {
            LedgerError::Rejected { reason } => reason.contains("not pending"),
            LedgerError::Transport(_) => false,
        }
    }
}
