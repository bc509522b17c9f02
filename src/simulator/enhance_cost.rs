//! Closed-form enhancement cost projection.
//!
//! Every attempt is memoryless, so the attempts needed to clear one level
//! follow a geometric distribution with mean `100 / rate` (rate in percent).
//! Each attempt burns `protect_cost(tier, rate)` protection units; summing
//! expected units across all nine levels and multiplying by the configured
//! unit price gives the expected currency cost of a +0 to +9 run.

use crate::config::EngineConfig;
use crate::enhancement::types::protect_cost;
use crate::items::types::MAX_ENHANCE;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelCost {
    pub target_level: u8,
    pub success_rate: f64,
    pub expected_attempts: f64,
    pub protect_per_attempt: u32,
    pub expected_protect: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhanceCostReport {
    pub tier: u8,
    pub levels: Vec<LevelCost>,
    pub total_protect: f64,
    pub total_price: f64,
}

/// Expected protection units and currency to take an item from +0 to +9.
///
/// A zero (or negative) success rate yields an infinite expectation for that
/// level and the total propagates it; the degenerate configuration is
/// reported, not masked.
pub fn project_enhance_cost(cfg: &EngineConfig, tier: u8) -> EnhanceCostReport {
    let mut levels = Vec::with_capacity(MAX_ENHANCE as usize);
    let mut total_protect = 0.0;

    for current in 0..MAX_ENHANCE {
        let rate = cfg.enhance_rate_at(current);
        let expected_attempts = if rate > 0.0 {
            100.0 / rate
        } else {
            f64::INFINITY
        };
        let protect_per_attempt = protect_cost(tier, rate);
        let expected_protect = expected_attempts * protect_per_attempt as f64;
        total_protect += expected_protect;
        levels.push(LevelCost {
            target_level: current + 1,
            success_rate: rate,
            expected_attempts,
            protect_per_attempt,
            expected_protect,
        });
    }

    EnhanceCostReport {
        tier,
        levels,
        total_protect,
        total_price: total_protect * cfg.protect_unit_price,
    }
}
