//! Disassembly: break equipment into upgrade stones.
//!
//! The stone type follows the tier, the amount is a uniform draw from the
//! grade's band. Disassembling a batch sums one independent draw per item.

use crate::economy::stones::{StonePool, StoneYield};
use crate::items::types::{Grade, Item, StoneType};
use rand::Rng;

// Inclusive yield bands per grade, Common through Relic. Each band sits
// roughly 5x above the previous band's upper bound.
const YIELD_RANGE: [(u64, u64); 7] = [
    (2, 4),
    (10, 20),
    (50, 100),
    (250, 500),
    (1250, 2500),
    (6250, 12500),
    (12500, 20000),
];

/// Which stone bucket a tier pays into and out of.
pub fn stone_type_for_tier(tier: u8) -> StoneType {
    match tier {
        0..=2 => StoneType::Low,
        3..=4 => StoneType::Mid,
        _ => StoneType::High,
    }
}

/// Inclusive yield band for a grade.
pub fn yield_range(grade: Grade) -> (u64, u64) {
    YIELD_RANGE[grade as usize]
}

/// Roll the stone payout for disassembling one item of this tier and grade.
pub fn disassemble_yield(tier: u8, grade: Grade, rng: &mut impl Rng) -> StoneYield {
    let (lo, hi) = yield_range(grade);
    StoneYield {
        stone: stone_type_for_tier(tier),
        amount: rng.gen_range(lo..=hi),
    }
}

/// Disassemble a batch: one independent draw per item, summed per bucket.
pub fn disassemble_items(items: &[Item], rng: &mut impl Rng) -> StonePool {
    let mut pool = StonePool::new();
    for item in items {
        pool.add_yield(disassemble_yield(item.tier, item.grade, rng));
    }
    pool
}
