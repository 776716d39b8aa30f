//! Candidate matches between two intents.

use serde::{Deserialize, Serialize};

use crate::Intent;

/// Two distinct intents whose offers mirror each other.
///
/// A pair is a transient value scoped to one matching cycle: it exists
/// between discovery and settlement submission and is never persisted.
/// After submission the pair's snapshot of the intents may be stale; the
/// ledger's view wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatiblePair {
    pub a: Intent,
    pub b: Intent,
}

impl CompatiblePair {
    pub fn new(a: Intent, b: Intent) -> Self {
        Self { a, b }
    }

    /// Identifiers of both sides, in pair order.
    pub fn ids(&self) -> (&str, &str) {
        (&self.a.id, &self.b.id)
    }
}
