//! Enhancement engine scenarios: mocked-roll branch coverage, both economy
//! modes, protection accounting, and long-run statistics.

use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use relicforge::config::{EconomyMode, EngineConfig};
use relicforge::economy::{ConsumedKind, ConsumedLedger, StonePool};
use relicforge::enhancement::{attempt_enhance, protect_cost};
use relicforge::forge::yield_range;
use relicforge::items::{craft_item, slot_count, Grade, Item, StoneType, MAX_ENHANCE};

// StepRng(0, 0) forces the lowest roll (success when rate > 0);
// StepRng(u64::MAX, 0) forces a roll just under 100 (failure when rate < 100).
fn roll_low() -> StepRng {
    StepRng::new(0, 0)
}

fn roll_high() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn fresh_item(tier: u8) -> Item {
    let cfg = EngineConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(100);
    craft_item(tier, &cfg, &mut rng)
}

// =========================================================================
// Concrete branch scenarios
// =========================================================================

#[test]
fn test_protected_success_at_fifty_percent() {
    let mut cfg = EngineConfig::default();
    cfg.enhance_rates[0] = 50.0;
    let mut ledger = ConsumedLedger::new();
    let mut item = fresh_item(3);
    item.used_protect_count = 1;

    let out = attempt_enhance(item, &cfg, true, &mut ledger, &mut roll_low());
    assert!(out.success);
    let item = out.item.expect("success keeps the item");
    assert_eq!(item.enhance, 1);
    // 1 + ceil((100 - 50) / 1.0) = 51: protection is spent even on success
    assert_eq!(item.used_protect_count, 51);
}

#[test]
fn test_protected_failure_at_ten_percent() {
    let mut cfg = EngineConfig::default();
    cfg.enhance_rates[0] = 10.0;
    let mut ledger = ConsumedLedger::new();
    let item = fresh_item(3);

    let out = attempt_enhance(item, &cfg, true, &mut ledger, &mut roll_high());
    assert!(!out.success);
    let item = out.item.expect("protected failure keeps the item");
    assert_eq!(item.enhance, 0);
    assert_eq!(item.used_protect_count, 90);
    assert_eq!(ledger.total(), 0);
}

#[test]
fn test_destructive_zero_rate_feeds_low_bucket() {
    let cfg = EngineConfig {
        mode: EconomyMode::Destructive,
        enhance_rates: [0.0; 9],
        ..Default::default()
    };
    let mut ledger = ConsumedLedger::new();
    let mut pool = StonePool::new();
    let mut rng = ChaCha8Rng::seed_from_u64(101);

    let item = fresh_item(2);
    let grade = item.grade;
    let out = attempt_enhance(item, &cfg, true, &mut ledger, &mut rng);
    assert!(!out.success);
    assert!(out.item.is_none());

    let refund = out.stone_refund.expect("destructive failure refunds stones");
    assert_eq!(refund.stone, StoneType::Low);
    pool.add_yield(refund);
    let (lo, hi) = yield_range(grade);
    assert!(pool.low >= lo && pool.low <= hi);
    assert_eq!(pool.mid, 0);
    assert_eq!(pool.high, 0);
}

#[test]
fn test_destructive_mode_ignores_protection_flag() {
    let cfg = EngineConfig {
        mode: EconomyMode::Destructive,
        enhance_rates: [0.0; 9],
        ..Default::default()
    };
    let mut ledger = ConsumedLedger::new();
    let mut rng = ChaCha8Rng::seed_from_u64(102);

    let out = attempt_enhance(fresh_item(5), &cfg, true, &mut ledger, &mut rng);
    assert!(out.item.is_none(), "protection flag must not save the item");
    assert_eq!(ledger.count(5, ConsumedKind::Crafted), 1);
}

#[test]
fn test_unprotected_failure_in_protection_mode_refunds_nothing() {
    let mut cfg = EngineConfig::default();
    cfg.enhance_rates[0] = 10.0;
    let mut ledger = ConsumedLedger::new();

    let out = attempt_enhance(fresh_item(3), &cfg, false, &mut ledger, &mut roll_high());
    assert!(!out.success);
    assert!(out.item.is_none());
    assert!(out.stone_refund.is_none());
    assert_eq!(ledger.count(3, ConsumedKind::Crafted), 1);
}

// =========================================================================
// Derived stats along the ladder
// =========================================================================

#[test]
fn test_full_ladder_with_certain_rates() {
    let cfg = EngineConfig {
        enhance_rates: [100.0; 9],
        ..Default::default()
    };
    let mut ledger = ConsumedLedger::new();
    let mut rng = ChaCha8Rng::seed_from_u64(103);

    let mut item = fresh_item(4);
    let mut last_attack = item.attack;
    for expected_level in 1..=MAX_ENHANCE {
        let out = attempt_enhance(item, &cfg, false, &mut ledger, &mut rng);
        assert!(out.success);
        item = out.item.unwrap();
        assert_eq!(item.enhance, expected_level);
        assert_eq!(item.slots, slot_count(expected_level));
        assert!(item.attack > last_attack);
        last_attack = item.attack;
    }
    assert_eq!(item.slots, 4);

    // Terminal level: no further attempts
    let out = attempt_enhance(item.clone(), &cfg, false, &mut ledger, &mut rng);
    assert!(!out.success);
    assert_eq!(out.item.unwrap(), item);
}

#[test]
fn test_protect_cost_scales_with_tier() {
    // Same failure mass costs progressively more protection at high tiers
    assert!(protect_cost(4, 50.0) > protect_cost(3, 50.0));
    assert!(protect_cost(5, 50.0) > protect_cost(4, 50.0));
    assert!(protect_cost(7, 50.0) > protect_cost(6, 50.0));
}

// =========================================================================
// Statistics
// =========================================================================

#[test]
fn test_memoryless_success_frequency() {
    let mut cfg = EngineConfig::default();
    cfg.enhance_rates[0] = 70.0;
    let mut ledger = ConsumedLedger::new();
    let mut rng = ChaCha8Rng::seed_from_u64(104);

    let successes = (0..10_000)
        .filter(|_| attempt_enhance(fresh_item(3), &cfg, true, &mut ledger, &mut rng).success)
        .count();
    assert!(
        (6700..=7300).contains(&successes),
        "70% rate produced {successes}/10000"
    );
}

#[test]
fn test_grade_survives_enhancement() {
    let cfg = EngineConfig {
        enhance_rates: [100.0; 9],
        ..Default::default()
    };
    let mut ledger = ConsumedLedger::new();
    let mut rng = ChaCha8Rng::seed_from_u64(105);

    let mut item = fresh_item(6);
    item.grade = Grade::Heroic;
    item.recompute_derived();
    let out = attempt_enhance(item, &cfg, false, &mut ledger, &mut rng);
    assert_eq!(out.item.unwrap().grade, Grade::Heroic);
}
