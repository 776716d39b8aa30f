//! Intent pool access.
//!
//! The store is an external collaborator: this crate reads the open set
//! once per cycle and never writes it back. Entries are shape-validated
//! here at the boundary so the matching core can assume well-formed
//! intents.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::RwLock;
use thiserror::Error;
use tracing::warn;

use cow_intents_types::{Intent, IntentStatus, Uint128};

/// Read-only view of the open intent pool.
#[async_trait]
pub trait IntentStore: Send + Sync {
    /// Fetch the current set of open intents, called once per cycle.
    async fn fetch_open_intents(&self) -> Result<Vec<Intent>, StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Request(String),

    #[error("store returned malformed payload: {0}")]
    Malformed(String),
}

// ═══════════════════════════════════════════════════════════════════════════
// HTTP STORE
// ═══════════════════════════════════════════════════════════════════════════

/// Intent store backed by the REST backend.
///
/// Fetches `GET {base_url}/api/intents`. Individual malformed entries are
/// dropped with a warning instead of failing the whole fetch; a pool with
/// one bad row is still a pool.
pub struct HttpIntentStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpIntentStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured client (timeouts, proxies).
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

/// Wire shape served by the backend. Amounts arrive as decimal strings and
/// status as the backend's numeric code (0 pending, 1 matched, 2 failed).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireIntent {
    id: String,
    sell_token: String,
    buy_token: String,
    sell_amount: Uint128,
    min_buy_amount: Uint128,
    chain_id: u64,
    #[serde(default)]
    status: u8,
}

impl WireIntent {
    fn into_intent(self) -> Result<Intent, String> {
        let status = match self.status {
            0 => IntentStatus::Pending,
            1 => IntentStatus::Matched,
            2 => IntentStatus::Failed,
            other => return Err(format!("unknown status code {other}")),
        };

        let intent = Intent {
            id: self.id,
            sell_token: self.sell_token,
            buy_token: self.buy_token,
            sell_amount: self.sell_amount,
            min_buy_amount: self.min_buy_amount,
            chain_id: self.chain_id,
            status,
        };
        intent.validate().map_err(|err| err.to_string())?;
        Ok(intent)
    }
}

#[async_trait]
impl IntentStore for HttpIntentStore {
    async fn fetch_open_intents(&self) -> Result<Vec<Intent>, StoreError> {
        let url = format!("{}/api/intents", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Request(format!("HTTP {}: {}", status, body)));
        }

        let wire: Vec<WireIntent> = response
            .json()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))?;

        let mut intents = Vec::with_capacity(wire.len());
        for raw in wire {
            let intent_id = raw.id.clone();
            match raw.into_intent() {
                Ok(intent) => intents.push(intent),
                Err(reason) => {
                    warn!(intent_id = %intent_id, %reason, "dropping malformed intent from store");
                }
            }
        }
        Ok(intents)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// IN-MEMORY STORE
// ═══════════════════════════════════════════════════════════════════════════

/// Store serving intents from memory, for tests and embedding.
///
/// Returns everything it holds regardless of status; the compatibility
/// predicate gates non-pending intents downstream, same as with the HTTP
/// store.
#[derive(Default)]
pub struct InMemoryIntentStore {
    intents: RwLock<Vec<Intent>>,
}

impl InMemoryIntentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_intents(intents: Vec<Intent>) -> Self {
        Self {
            intents: RwLock::new(intents),
        }
    }

    pub fn push(&self, intent: Intent) {
        self.intents.write().unwrap().push(intent);
    }

    /// Stand-in for the ledger advancing an intent's status between
    /// cycles.
    pub fn set_status(&self, id: &str, status: IntentStatus) {
        let mut intents = self.intents.write().unwrap();
        if let Some(intent) = intents.iter_mut().find(|intent| intent.id == id) {
            intent.status = status;
        }
    }

    pub fn len(&self) -> usize {
        self.intents.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.read().unwrap().is_empty()
    }
}

#[async_trait]
impl IntentStore for InMemoryIntentStore {
    async fn fetch_open_intents(&self) -> Result<Vec<Intent>, StoreError> {
        Ok(self.intents.read().unwrap().clone())
    }
}
