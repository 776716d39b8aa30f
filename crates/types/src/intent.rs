//! Trade intents: standing, off-chain offers to swap one asset for another.

use cosmwasm_std::Uint128;
use serde::{Deserialize, Serialize};

/// A party's standing offer to sell one asset for another at a minimum
/// acceptable return.
///
/// Amounts are integral smallest-unit quantities carried as [`Uint128`];
/// token quantities never pass through floating point. Every field except
/// `status` is immutable for the intent's lifetime, and `status` only
/// advances on the ledger, never locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Opaque unique identifier, stable for the intent's lifetime
    pub id: String,

    /// Asset offered (address or symbol)
    pub sell_token: String,

    /// Asset wanted in return
    pub buy_token: String,

    /// Quantity offered, in the sell token's smallest unit
    pub sell_amount: Uint128,

    /// Minimum acceptable return, in the buy token's smallest unit
    pub min_buy_amount: Uint128,

    /// Network the intent settles on
    pub chain_id: u64,

    /// Lifecycle state; only `Pending` intents are eligible for matching
    pub status: IntentStatus,
}

impl Intent {
    /// Create a pending intent.
    pub fn new(
        id: impl Into<String>,
        sell_token: impl Into<String>,
        buy_token: impl Into<String>,
        sell_amount: Uint128,
        min_buy_amount: Uint128,
        chain_id: u64,
    ) -> Self {
        Self {
            id: id.into(),
            sell_token: sell_token.into(),
            buy_token: buy_token.into(),
            sell_amount,
            min_buy_amount,
            chain_id,
            status: IntentStatus::Pending,
        }
    }

    /// True while the intent is still eligible for matching.
    pub fn is_pending(&self) -> bool {
        self.status == IntentStatus::Pending
    }

    /// Check the fixed-shape requirements on an intent arriving from an
    /// external store. Amounts need no range check: `Uint128` is unsigned.
    pub fn validate(&self) -> Result<(), IntentValidationError> {
        if self.id.is_empty() {
            return Err(IntentValidationError::EmptyField { field: "id" });
        }
        if self.sell_token.is_empty() {
            return Err(IntentValidationError::EmptyField { field: "sellToken" });
        }
        if self.buy_token.is_empty() {
            return Err(IntentValidationError::EmptyField { field: "buyToken" });
        }
        Ok(())
    }
}

/// Shape violation detected at the intent-store boundary.
#[derive(Debug, thiserror::Error)]
pub enum IntentValidationError {
    #[error("required field {field} is empty")]
    EmptyField { field: &'static str },
}

/// Intent lifecycle state.
///
/// Transitions are forward-only and owned by the ledger: `Pending` may move
/// to `Matched` or `Failed`; both are terminal. This core only observes the
/// field, it never writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentStatus {
    /// Open and eligible for matching
    Pending,

    /// Settled into a trade
    Matched,

    /// Settlement failed irrecoverably, flagged by the ledger
    Failed,
}

impl IntentStatus {
    /// True once no further transitions can occur.
    pub fn is_terminal(&self) -> bool {
        matches!(self, IntentStatus::Matched | IntentStatus::Failed)
    }

    /// Label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentStatus::Pending => "pending",
            IntentStatus::Matched => "matched",
            IntentStatus::Failed => "failed",
        }
    }
}
