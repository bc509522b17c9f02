//! Item stat formulas: attack/defense curves, slot step function, bonus-stat
//! rolls, and the tier-to-max-grade mapping. All pure lookups over
//! `(tier, grade, enhancement)`.

use super::types::{Grade, SkillTier};
use rand::Rng;

// Per-tier base tables, tiers 1-7. Unknown tiers fall through to the
// documented default formulas below.
const BASE_ATTACK: [u32; 7] = [100, 200, 400, 800, 1600, 3200, 6400];
const BASE_DEFENSE: [u32; 7] = [60, 120, 240, 480, 960, 1920, 3840];
const ENHANCE_ATTACK_PER_TIER: [u32; 7] = [10, 20, 40, 80, 160, 320, 640];

// Flat attack bonus per grade, Common through Relic.
const GRADE_ATTACK_BONUS: [u32; 7] = [0, 30, 80, 180, 400, 900, 2000];

// Inclusive bonus-attack roll ranges per tier 1-7.
const BONUS_ATTACK_RANGE: [(u32, u32); 7] = [
    (3, 6),
    (5, 10),
    (7, 14),
    (9, 18),
    (13, 26),
    (17, 34),
    (22, 44),
];

/// Probability that freshly created equipment rolls the SR skill tier.
pub const SR_CHANCE: f64 = 0.10;

fn tier_index(tier: u8) -> Option<usize> {
    if (1..=7).contains(&tier) {
        Some(tier as usize - 1)
    } else {
        None
    }
}

fn grade_bonus(grade: Grade) -> u32 {
    GRADE_ATTACK_BONUS[grade as usize]
}

/// Attack for a weapon at the given tier, grade, and enhancement level.
pub fn attack_value(tier: u8, grade: Grade, enhance: u8) -> u32 {
    match tier_index(tier) {
        Some(i) => {
            BASE_ATTACK[i] + grade_bonus(grade) + enhance as u32 * ENHANCE_ATTACK_PER_TIER[i]
        }
        None => default_attack_formula(tier, grade, enhance),
    }
}

/// Defense for an armor piece; same shape as attack with its own base table.
pub fn defense_value(tier: u8, grade: Grade, enhance: u8) -> u32 {
    match tier_index(tier) {
        Some(i) => {
            BASE_DEFENSE[i] + grade_bonus(grade) + enhance as u32 * ENHANCE_ATTACK_PER_TIER[i]
        }
        None => default_attack_formula(tier, grade, enhance),
    }
}

/// Fallback formula for tiers outside 1-7: base `tier x 100`, 10 attack per
/// enhancement level. Keeps the engine operable on partial configuration;
/// not a designed progression path.
pub fn default_attack_formula(tier: u8, grade: Grade, enhance: u8) -> u32 {
    tier as u32 * 100 + grade_bonus(grade) + enhance as u32 * 10
}

/// Socket slots granted by enhancement: 0 below +3, then one more slot every
/// two levels, capping at 4 at +9.
pub fn slot_count(enhance: u8) -> u8 {
    match enhance {
        0..=2 => 0,
        3..=4 => 1,
        5..=6 => 2,
        7..=8 => 3,
        _ => 4,
    }
}

/// Highest grade an item of this tier can ever hold. Promotion and grade
/// rolls are both clamped by this mapping.
pub fn max_grade_for_tier(tier: u8) -> Grade {
    match tier {
        0 | 1 => Grade::Uncommon,
        2 => Grade::Rare,
        3 => Grade::Ancient,
        4 => Grade::Heroic,
        5 => Grade::Unique,
        _ => Grade::Relic,
    }
}

/// Roll the flat bonus-attack stat for a weapon of this tier. Uniform over
/// the tier's inclusive range, independent of grade and enhancement.
pub fn roll_bonus_attack(tier: u8, rng: &mut impl Rng) -> u32 {
    let (lo, hi) = match tier_index(tier) {
        Some(i) => BONUS_ATTACK_RANGE[i],
        None => BONUS_ATTACK_RANGE[0],
    };
    rng.gen_range(lo..=hi)
}

/// Bonus-defense roll for armor: 3%-6% of the tier's base defense, floored.
pub fn roll_bonus_defense(tier: u8, rng: &mut impl Rng) -> u32 {
    let base = match tier_index(tier) {
        Some(i) => BASE_DEFENSE[i],
        None => tier as u32 * 100,
    };
    rng.gen_range(base * 3 / 100..=base * 6 / 100)
}

pub fn roll_skill_tier(rng: &mut impl Rng) -> SkillTier {
    if rng.gen::<f64>() < SR_CHANCE {
        SkillTier::Sr
    } else {
        SkillTier::R
    }
}
