//! Consumed-items ledger: monotonically increasing counters keyed by tier and
//! consumption kind. Pure statistics; nothing in the engine reads it back.

use crate::items::types::ItemSource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumedKind {
    /// Crafted equipment destroyed by enhancement failure.
    Crafted,
    /// Dropped equipment destroyed by enhancement failure.
    Dropped,
    /// Ore consumed by crafting.
    Ore,
}

impl From<ItemSource> for ConsumedKind {
    fn from(source: ItemSource) -> Self {
        match source {
            ItemSource::Crafted => ConsumedKind::Crafted,
            ItemSource::Dropped => ConsumedKind::Dropped,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub tier: u8,
    pub kind: ConsumedKind,
    pub count: u64,
}

/// Counter map over `(tier, kind)`. Backed by a small Vec (at most one entry
/// per tier/kind pair) so it serializes as plain JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConsumedLedger {
    entries: Vec<LedgerEntry>,
}

impl ConsumedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to a counter. Counters only ever increase.
    pub fn record(&mut self, tier: u8, kind: ConsumedKind, amount: u64) {
        if amount == 0 {
            return;
        }
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.tier == tier && e.kind == kind)
        {
            entry.count += amount;
        } else {
            self.entries.push(LedgerEntry {
                tier,
                kind,
                count: amount,
            });
        }
    }

    pub fn count(&self, tier: u8, kind: ConsumedKind) -> u64 {
        self.entries
            .iter()
            .find(|e| e.tier == tier && e.kind == kind)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }
}
