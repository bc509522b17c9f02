//! Engine configuration.
//!
//! The original design kept the economy mode and rate tables as ambient
//! globals; here they travel in an explicit [`EngineConfig`] handed to every
//! engine call. Rates are percentages in [0, 100], clamped when built through
//! the constructors. The engine itself never re-validates them.

use serde::{Deserialize, Serialize};

/// Which rule-set governs enhancement failure.
///
/// Switching modes never touches existing items; it only changes the failure
/// branch of future enhancement attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EconomyMode {
    /// Failures can be survived by spending protection; nothing is refunded.
    Protection,
    /// Failures always destroy the item and refund a disassembly stone yield.
    Destructive,
}

/// Grade-roll probability bands, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeRates {
    pub rare: f64,
    pub high: f64,
    pub hero: f64,
}

impl GradeRates {
    /// Build a rate set with each band clamped to [0, 100]. Bands are not
    /// required to sum below 100; overflowing bands compress in the cascade.
    pub fn new(rare: f64, high: f64, hero: f64) -> GradeRates {
        GradeRates {
            rare: rare.clamp(0.0, 100.0),
            high: high.clamp(0.0, 100.0),
            hero: hero.clamp(0.0, 100.0),
        }
    }
}

/// Default per-level enhancement success rates in percent, indexed by the
/// current level (entry 0 is the +0 -> +1 attempt).
pub const DEFAULT_ENHANCE_RATES: [f64; 9] = [95.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0];

/// Session-scoped engine configuration, injected into every engine call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub mode: EconomyMode,
    /// Success rate in percent for each target level 1-9.
    pub enhance_rates: [f64; 9],
    /// Grade bands applied to hunted drops.
    pub drop_rates: GradeRates,
    /// Grade bands applied to crafting results.
    pub craft_rates: GradeRates,
    /// Currency price of one protection unit, used by cost projection.
    pub protect_unit_price: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: EconomyMode::Protection,
            enhance_rates: DEFAULT_ENHANCE_RATES,
            drop_rates: GradeRates::new(12.0, 25.0, 3.0),
            craft_rates: GradeRates::new(20.0, 35.0, 5.0),
            protect_unit_price: 100.0,
        }
    }
}

impl EngineConfig {
    /// Success rate for an attempt made at `current_level`. Levels at or past
    /// the table end report 0 (the attempt should never be made there).
    pub fn enhance_rate_at(&self, current_level: u8) -> f64 {
        self.enhance_rates
            .get(current_level as usize)
            .copied()
            .unwrap_or(0.0)
    }

    /// Same config with every enhancement rate clamped to [0, 100].
    pub fn with_clamped_rates(mut self) -> Self {
        for rate in &mut self.enhance_rates {
            *rate = rate.clamp(0.0, 100.0);
        }
        self
    }
}
