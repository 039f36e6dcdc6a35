//! # Replay Guard
//!
//! Tracks consumed single-use transaction ids for the minter. The set
//! only ever grows; a consumed id is rejected forever. The observed
//! protocol defines no pruning, so instead of inventing an eviction
//! policy the guard carries an explicit capacity cap and fails closed
//! when it is reached.

use std::collections::BTreeSet;

use mat_types::TxId;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::errors::ReplayError;

/// Capacity cap for tracked ids. Reaching it is an operational event
/// (archive or migrate), not a silent eviction.
pub const MAX_TRACKED_IDS: usize = 1_048_576;

/// Statically typed snapshot of the consumed-id set for the read-only
/// query surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIdSnapshot {
    /// Number of consumed ids.
    pub count: usize,
    /// Consumed ids in ascending order.
    pub ids: Vec<TxId>,
}

/// Monotonically-growing set of consumed transaction ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayGuard {
    consumed: BTreeSet<TxId>,
    cap: usize,
}

impl ReplayGuard {
    /// Create an empty guard with the standard capacity cap.
    pub fn new() -> Self {
        Self::with_capacity(MAX_TRACKED_IDS)
    }

    /// Create an empty guard with an explicit capacity cap.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            consumed: BTreeSet::new(),
            cap,
        }
    }

    /// Consume `id`. Fails if it was ever consumed before, or if the
    /// guard is at capacity.
    pub fn consume(&mut self, id: TxId) -> Result<(), ReplayError> {
        if self.consumed.contains(&id) {
            return Err(ReplayError::AlreadyConsumed(id));
        }
        if self.consumed.len() >= self.cap {
            warn!(cap = self.cap, "replay guard at capacity");
            return Err(ReplayError::CapacityExhausted { cap: self.cap });
        }
        self.consumed.insert(id);
        Ok(())
    }

    /// Whether `id` has been consumed.
    pub fn contains(&self, id: TxId) -> bool {
        self.consumed.contains(&id)
    }

    /// Number of consumed ids.
    pub fn len(&self) -> usize {
        self.consumed.len()
    }

    /// True if nothing has been consumed yet.
    pub fn is_empty(&self) -> bool {
        self.consumed.is_empty()
    }

    /// Ordered snapshot for getters.
    pub fn snapshot(&self) -> TxIdSnapshot {
        TxIdSnapshot {
            count: self.consumed.len(),
            ids: self.consumed.iter().copied().collect(),
        }
    }
}

impl Default for ReplayGuard {
    fn default() -> Self {
        Self::new()
    }
}
