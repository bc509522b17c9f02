//! The enhancement state machine.
//!
//! One attempt moves an item between enhancement levels 0-9 (9 terminal).
//! Success always raises the level by one; what failure does depends on the
//! session's economy mode. Draws happen in a fixed order - success roll
//! first, then (destructive failure only) the stone-yield roll - so seeded
//! RNGs reproduce identical outcomes.

use super::types::{protect_cost, EnhanceOutcome};
use crate::config::{EconomyMode, EngineConfig};
use crate::economy::ledger::{ConsumedKind, ConsumedLedger};
use crate::forge::disassembly::disassemble_yield;
use crate::items::types::{Item, MAX_ENHANCE};
use rand::Rng;

/// Attempt to enhance an item one level.
///
/// The UI must not offer enhancement at level 9; calling here at the
/// terminal level is treated as a failed precondition and returns the item
/// untouched.
///
/// * Success (either mode): level +1, attack and slots recomputed. In
///   protection mode with `use_protection` set, the protection counter still
///   grows by the attempt's cost - protection is spent per attempt, never
///   refunded.
/// * Failure, protection mode, protected: the item survives unchanged apart
///   from the protection counter.
/// * Failure, protection mode, unprotected: the item is destroyed and the
///   consumed-items ledger records it under its tier and source.
/// * Failure, destructive mode (`use_protection` ignored): the item is
///   destroyed, the ledger records it, and the caller is credited a stone
///   yield rolled as an implicit disassembly of the pre-failure item.
pub fn attempt_enhance(
    mut item: Item,
    cfg: &EngineConfig,
    use_protection: bool,
    ledger: &mut ConsumedLedger,
    rng: &mut impl Rng,
) -> EnhanceOutcome {
    if item.enhance >= MAX_ENHANCE {
        return EnhanceOutcome {
            success: false,
            item: Some(item),
            stone_refund: None,
        };
    }

    let rate = cfg.enhance_rate_at(item.enhance);
    let roll = rng.gen_range(0.0..100.0);
    let protecting = cfg.mode == EconomyMode::Protection && use_protection;

    if roll < rate {
        item.enhance += 1;
        item.recompute_derived();
        if protecting {
            item.used_protect_count += protect_cost(item.tier, rate);
        }
        return EnhanceOutcome {
            success: true,
            item: Some(item),
            stone_refund: None,
        };
    }

    if protecting {
        item.used_protect_count += protect_cost(item.tier, rate);
        return EnhanceOutcome {
            success: false,
            item: Some(item),
            stone_refund: None,
        };
    }

    // Unprotected failure destroys the item in both modes.
    ledger.record(item.tier, ConsumedKind::from(item.source), 1);
    let stone_refund = match cfg.mode {
        EconomyMode::Destructive => Some(disassemble_yield(item.tier, item.grade, rng)),
        EconomyMode::Protection => None,
    };
    EnhanceOutcome {
        success: false,
        item: None,
        stone_refund,
    }
}
