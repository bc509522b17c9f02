//! Grade promotion: spend upgrade stones to advance an item one grade.

use super::disassembly::stone_type_for_tier;
use crate::economy::stones::StonePool;
use crate::items::stats::max_grade_for_tier;
use crate::items::types::{Grade, Item, StoneType};

// Stones to promote from a grade, Common through Unique. Relic has no
// further promotion.
const PROMOTION_COST: [u64; 6] = [10, 50, 250, 1250, 5000, 12500];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoneCost {
    pub stone: StoneType,
    pub amount: u64,
}

/// Cost to promote an item of this grade and tier, or None at Relic.
pub fn promotion_cost(grade: Grade, tier: u8) -> Option<StoneCost> {
    if grade == Grade::Relic {
        return None;
    }
    Some(StoneCost {
        stone: stone_type_for_tier(tier),
        amount: PROMOTION_COST[grade as usize],
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromoteOutcome {
    pub success: bool,
    pub item: Item,
}

/// Promote an item one grade, paying from the pool.
///
/// Checked preconditions, each failing without any mutation: the grade must
/// sit below the tier's maximum and the matching stone bucket must cover the
/// cost. On success the grade advances, attack is recomputed, and any
/// accrued experience resets to 0.
pub fn promote(mut item: Item, pool: &mut StonePool) -> PromoteOutcome {
    if item.grade >= max_grade_for_tier(item.tier) {
        return PromoteOutcome {
            success: false,
            item,
        };
    }
    let cost = match promotion_cost(item.grade, item.tier) {
        Some(cost) => cost,
        None => {
            return PromoteOutcome {
                success: false,
                item,
            }
        }
    };
    if !pool.try_spend(cost.stone, cost.amount) {
        return PromoteOutcome {
            success: false,
            item,
        };
    }

    // next() cannot fail below Relic
    if let Some(next) = item.grade.next() {
        item.grade = next;
    }
    item.exp = 0;
    item.recompute_derived();
    PromoteOutcome {
        success: true,
        item,
    }
}
