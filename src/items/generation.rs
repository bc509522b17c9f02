//! Item creation entry points: hunted drops, crafting, and ore collection.
//!
//! Within one call the draws happen in a fixed order (category, grade, bonus
//! stat, skill tier) so deterministic RNGs reproduce identical items.

use super::grade::determine_grade;
use super::stats::{max_grade_for_tier, roll_bonus_attack, roll_bonus_defense, roll_skill_tier};
use super::types::{Grade, Item, ItemCategory, ItemSource, ResourceKind};
use crate::config::EngineConfig;
use crate::economy::ledger::{ConsumedKind, ConsumedLedger};
use crate::inventory::stacks::{add_stacked, consume_stacked, AddOutcome};
use rand::Rng;
use uuid::Uuid;

// Ore consumed per craft, tiers 1-7.
const ORE_CRAFT_COST: [u32; 7] = [10, 15, 20, 30, 40, 60, 80];

/// Drops never roll above Ancient regardless of tier.
pub const DROP_GRADE_CAP: Grade = Grade::Ancient;

/// Ore consumed by one craft at this tier.
pub fn ore_craft_cost(tier: u8) -> u32 {
    if (1..=7).contains(&tier) {
        ORE_CRAFT_COST[tier as usize - 1]
    } else {
        ORE_CRAFT_COST[0]
    }
}

/// Grade floor for crafting results at this tier.
pub fn craft_min_grade(tier: u8) -> Grade {
    match tier {
        0..=2 => Grade::Common,
        3 | 4 => Grade::Uncommon,
        5 => Grade::Rare,
        _ => Grade::Ancient,
    }
}

fn new_equipment(
    tier: u8,
    category: ItemCategory,
    grade: Grade,
    source: ItemSource,
    rng: &mut impl Rng,
) -> Item {
    let bonus = match category {
        ItemCategory::Armor => roll_bonus_defense(tier, rng),
        _ => roll_bonus_attack(tier, rng),
    };
    let skill_tier = roll_skill_tier(rng);
    let mut item = Item {
        id: Uuid::new_v4(),
        name: format!("T{} {}", tier, category.label()),
        category,
        tier,
        grade,
        attack: 0,
        defense: 0,
        bonus_attack: bonus,
        skill_tier,
        enhance: 0,
        slots: 0,
        exp: 0,
        stack_count: None,
        used_protect_count: 0,
        source,
    };
    item.recompute_derived();
    item
}

/// Generate a hunted drop: random weapon/armor, grade rolled under the drop
/// bands with the ceiling clamped to the lower of the tier max and Ancient.
pub fn drop_item(tier: u8, cfg: &EngineConfig, rng: &mut impl Rng) -> Item {
    let category = if rng.gen_bool(0.5) {
        ItemCategory::Weapon
    } else {
        ItemCategory::Armor
    };
    let max_grade = max_grade_for_tier(tier).min(DROP_GRADE_CAP);
    let grade = determine_grade(&cfg.drop_rates, max_grade, Grade::Common, rng);
    new_equipment(tier, category, grade, ItemSource::Dropped, rng)
}

/// Craft a weapon at this tier. Grade floor rises with tier; the ceiling is
/// the tier max. Does not touch the inventory; see [`craft_with_ore`].
pub fn craft_item(tier: u8, cfg: &EngineConfig, rng: &mut impl Rng) -> Item {
    let grade = determine_grade(
        &cfg.craft_rates,
        max_grade_for_tier(tier),
        craft_min_grade(tier),
        rng,
    );
    new_equipment(tier, ItemCategory::Weapon, grade, ItemSource::Crafted, rng)
}

/// Outcome of an ore-consuming craft. On failure the inventory is returned
/// unchanged and no item is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CraftOutcome {
    pub success: bool,
    pub inventory: Vec<Item>,
    pub item: Option<Item>,
}

/// Consume this tier's ore cost from the inventory and craft an item.
/// Shortfall fails atomically. Consumed ore is recorded in the ledger.
pub fn craft_with_ore(
    inventory: Vec<Item>,
    tier: u8,
    cfg: &EngineConfig,
    ledger: &mut ConsumedLedger,
    rng: &mut impl Rng,
) -> CraftOutcome {
    let cost = ore_craft_cost(tier);
    let consumed = consume_stacked(inventory, tier, ResourceKind::Ore, cost);
    if !consumed.success {
        return CraftOutcome {
            success: false,
            inventory: consumed.inventory,
            item: None,
        };
    }
    ledger.record(tier, ConsumedKind::Ore, cost as u64);
    CraftOutcome {
        success: true,
        inventory: consumed.inventory,
        item: Some(craft_item(tier, cfg, rng)),
    }
}

/// Add collected ore to the inventory through the stack engine.
pub fn collect_ore(inventory: Vec<Item>, tier: u8, amount: u32, max_slots: usize) -> AddOutcome {
    add_stacked(inventory, tier, ResourceKind::Ore, amount, max_slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::DEFAULT_MAX_SLOTS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_drop_item_fields() {
        let cfg = EngineConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for tier in 1..=7u8 {
            let item = drop_item(tier, &cfg, &mut rng);
            assert_eq!(item.tier, tier);
            assert_eq!(item.enhance, 0);
            assert_eq!(item.source, ItemSource::Dropped);
            assert!(!item.is_stackable());
            assert!(item.bonus_attack > 0);
        }
    }

    #[test]
    fn test_drops_capped_at_ancient() {
        let cfg = EngineConfig {
            drop_rates: crate::config::GradeRates::new(100.0, 100.0, 100.0),
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..500 {
            let item = drop_item(7, &cfg, &mut rng);
            assert!(item.grade <= Grade::Ancient);
        }
    }

    #[test]
    fn test_drops_respect_tier_max() {
        let cfg = EngineConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let item = drop_item(1, &cfg, &mut rng);
            assert!(item.grade <= Grade::Uncommon);
        }
    }

    #[test]
    fn test_craft_min_grade_bands() {
        assert_eq!(craft_min_grade(1), Grade::Common);
        assert_eq!(craft_min_grade(2), Grade::Common);
        assert_eq!(craft_min_grade(3), Grade::Uncommon);
        assert_eq!(craft_min_grade(4), Grade::Uncommon);
        assert_eq!(craft_min_grade(5), Grade::Rare);
        assert_eq!(craft_min_grade(6), Grade::Ancient);
        assert_eq!(craft_min_grade(7), Grade::Ancient);
    }

    #[test]
    fn test_craft_item_honors_floor() {
        let cfg = EngineConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..300 {
            let item = craft_item(6, &cfg, &mut rng);
            assert!(item.grade >= Grade::Ancient);
            assert!(item.grade <= Grade::Relic);
            assert_eq!(item.source, ItemSource::Crafted);
        }
    }

    #[test]
    fn test_craft_with_ore_consumes_and_records() {
        let cfg = EngineConfig::default();
        let mut ledger = ConsumedLedger::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let inventory = collect_ore(Vec::new(), 3, 50, DEFAULT_MAX_SLOTS).inventory;

        let outcome = craft_with_ore(inventory, 3, &cfg, &mut ledger, &mut rng);
        assert!(outcome.success);
        assert!(outcome.item.is_some());
        // 50 - 20 ore left
        let remaining: u32 = outcome
            .inventory
            .iter()
            .filter_map(|i| i.stack_count)
            .sum();
        assert_eq!(remaining, 30);
        assert_eq!(ledger.count(3, ConsumedKind::Ore), 20);
    }

    #[test]
    fn test_craft_with_ore_shortfall_is_atomic() {
        let cfg = EngineConfig::default();
        let mut ledger = ConsumedLedger::new();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let inventory = collect_ore(Vec::new(), 3, 5, DEFAULT_MAX_SLOTS).inventory;

        let outcome = craft_with_ore(inventory, 3, &cfg, &mut ledger, &mut rng);
        assert!(!outcome.success);
        assert!(outcome.item.is_none());
        let remaining: u32 = outcome
            .inventory
            .iter()
            .filter_map(|i| i.stack_count)
            .sum();
        assert_eq!(remaining, 5);
        assert_eq!(ledger.count(3, ConsumedKind::Ore), 0);
    }

    #[test]
    fn test_ore_craft_cost_fallback() {
        assert_eq!(ore_craft_cost(3), 20);
        assert_eq!(ore_craft_cost(0), 10);
        assert_eq!(ore_craft_cost(99), 10);
    }
}
