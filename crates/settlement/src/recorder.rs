//! Match journal: best-effort record of settled pairs.
//!
//! Recording is fire-and-forget. The executor logs a failed write and moves
//! on; a journal problem never fails a settlement that the ledger already
//! confirmed.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tokio::io::AsyncWriteExt;

use cow_intents_types::{Intent, TxReference, Uint128};

/// Sink for settled matches.
#[async_trait]
pub trait MatchRecorder: Send + Sync {
    /// Record one settled pair. Best effort: callers log and continue on
    /// error.
    async fn record_match(
        &self,
        a: &Intent,
        b: &Intent,
        tx: &TxReference,
    ) -> Result<(), RecordError>;
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("journal io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("journal encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One journal entry for a settled pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// RFC 3339 timestamp of the journal write
    pub recorded_at: String,

    pub intent_a: String,
    pub intent_b: String,

    /// Token pair from side a's perspective (a sells `sell_token`)
    pub sell_token: String,
    pub buy_token: String,

    /// Offered amounts on each side
    pub amount_a: Uint128,
    pub amount_b: Uint128,

    pub chain_id: u64,
    pub tx_hash: String,
    pub block_number: u64,
}

impl MatchRecord {
    pub fn new(a: &Intent, b: &Intent, tx: &TxReference) -> Self {
        Self {
            recorded_at: Utc::now().to_rfc3339(),
            intent_a: a.id.clone(),
            intent_b: b.id.clone(),
            sell_token: a.sell_token.clone(),
            buy_token: a.buy_token.clone(),
            amount_a: a.sell_amount,
            amount_b: b.sell_amount,
            chain_id: a.chain_id,
            tx_hash: tx.tx_hash.clone(),
            block_number: tx.block_number,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// IN-MEMORY RECORDER
// ═══════════════════════════════════════════════════════════════════════════

/// Recorder keeping entries in memory, for tests and inspection.
#[derive(Default)]
pub struct InMemoryRecorder {
    records: Arc<RwLock<Vec<MatchRecord>>>,
}

impl InMemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<MatchRecord> {
        self.records.read().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }
}

#[async_trait]
impl MatchRecorder for InMemoryRecorder {
    async fn record_match(
        &self,
        a: &Intent,
        b: &Intent,
        tx: &TxReference,
    ) -> Result<(), RecordError> {
        self.records.write().unwrap().push(MatchRecord::new(a, b, tx));
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// JSONL RECORDER
// ═══════════════════════════════════════════════════════════════════════════

/// Append-only journal file, one JSON record per line.
pub struct JsonlRecorder {
    path: PathBuf,
}

impl JsonlRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl MatchRecorder for JsonlRecorder {
    async fn record_match(
        &self,
        a: &Intent,
        b: &Intent,
        tx: &TxReference,
    ) -> Result<(), RecordError> {
        let mut line = serde_json::to_string(&MatchRecord::new(a, b, tx))?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
