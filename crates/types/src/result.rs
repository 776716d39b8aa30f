//! Settlement attempt outcomes.

use serde::{Deserialize, Serialize};

/// Handle to a finalized settlement on the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReference {
    /// Transaction hash reported by the ledger
    pub tx_hash: String,

    /// Block the settlement was included in
    pub block_number: u64,
}

/// Outcome of one settlement attempt on a pair.
///
/// Produced exactly once per attempt; the executor never retries. Benign
/// outcomes are data here, not errors: a stale or raced pair is the normal
/// cost of running several solvers against one pool.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    /// The ledger confirmed the settlement
    Settled(TxReference),

    /// The pair was benignly skipped or lost to a competing solver
    Stale(StaleKind),

    /// The attempt failed for a reason that needs operator attention
    Failed(SettleFailure),
}

impl MatchResult {
    /// True only when the ledger confirmed the settlement.
    pub fn success(&self) -> bool {
        matches!(self, MatchResult::Settled(_))
    }

    /// True for the benign non-success outcomes.
    pub fn is_stale(&self) -> bool {
        matches!(self, MatchResult::Stale(_))
    }

    pub fn tx_reference(&self) -> Option<&TxReference> {
        match self {
            MatchResult::Settled(tx) => Some(tx),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&SettleFailure> {
        match self {
            MatchResult::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Why a pair was benignly skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleKind {
    /// An intent left `Pending` between discovery and submission
    NotPending,

    /// The pair no longer satisfies the compatibility predicate
    Incompatible,

    /// The ledger rejected the settlement because a competitor won the race
    Raced,
}

impl StaleKind {
    /// Label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            StaleKind::NotPending => "not_pending",
            StaleKind::Incompatible => "incompatible",
            StaleKind::Raced => "raced",
        }
    }
}

/// A settlement failure that needs operator attention.
///
/// The executor abandons the pair for the cycle on any of these. After
/// `Transport` or `Timeout` the intents' true status is unknown and must be
/// re-fetched from the ledger before any further attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettleFailure {
    #[error("ledger rejected settlement: {reason}")]
    Rejected { reason: String },

    #[error("transport failure: {message}")]
    Transport { message: String },

    #[error("settlement confirmation timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_reports_success_and_reference() {
        let result = MatchResult::Settled(TxReference {
            tx_hash: "0xabc".to_string(),
            block_number: 42,
        });
        assert!(result.success());
        assert!(!result.is_stale());
        assert_eq!(result.tx_reference().unwrap().block_number, 42);
        assert!(result.failure().is_none());
    }

    #[test]
    fn stale_and_failed_are_not_success() {
        let stale = MatchResult::Stale(StaleKind::NotPending);
        assert!(!stale.success());
        assert!(stale.is_stale());
        assert!(stale.tx_reference().is_none());

        let failed = MatchResult::Failed(SettleFailure::Timeout);
        assert!(!failed.success());
        assert!(!failed.is_stale());
        assert!(failed.failure().is_some());
    }
}
