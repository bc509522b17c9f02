//! Upgrade stone pool: three independent counters, one per stone type.

use crate::items::types::StoneType;
use serde::{Deserialize, Serialize};

/// A disassembly or destructive-failure payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoneYield {
    pub stone: StoneType,
    pub amount: u64,
}

/// Low/mid/high upgrade stone balances. Tiers never share a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StonePool {
    pub low: u64,
    pub mid: u64,
    pub high: u64,
}

impl StonePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self, stone: StoneType) -> u64 {
        match stone {
            StoneType::Low => self.low,
            StoneType::Mid => self.mid,
            StoneType::High => self.high,
        }
    }

    pub fn add(&mut self, stone: StoneType, amount: u64) {
        match stone {
            StoneType::Low => self.low += amount,
            StoneType::Mid => self.mid += amount,
            StoneType::High => self.high += amount,
        }
    }

    pub fn add_yield(&mut self, payout: StoneYield) {
        self.add(payout.stone, payout.amount);
    }

    /// Deduct from one bucket. Returns false (no deduction) on shortfall.
    pub fn try_spend(&mut self, stone: StoneType, amount: u64) -> bool {
        let balance = match stone {
            StoneType::Low => &mut self.low,
            StoneType::Mid => &mut self.mid,
            StoneType::High => &mut self.high,
        };
        if *balance < amount {
            return false;
        }
        *balance -= amount;
        true
    }

    pub fn total(&self) -> u64 {
        self.low + self.mid + self.high
    }
}
