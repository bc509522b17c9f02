//! Batch simulation configuration.

use crate::items::types::{Grade, MAX_ENHANCE};

/// Configuration for an empirical batch run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent trials
    pub trials: u32,

    /// Tier of the simulated items
    pub tier: u8,

    /// Enhancement level a trial tries to reach
    pub target_enhance: u8,

    /// Grade a trial then tries to promote to
    pub target_grade: Grade,

    /// Discard (disassemble) items rolling below this bonus attack
    pub min_bonus_attack: Option<u32>,

    /// Discard items that do not roll the SR skill tier
    pub require_sr: bool,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-trial)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            tier: 3,
            target_enhance: MAX_ENHANCE,
            target_grade: Grade::Ancient,
            min_bonus_attack: None,
            require_sr: false,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for pure enhancement-chain analysis (no promotions).
    pub fn enhance_chase(tier: u8, target_enhance: u8) -> Self {
        Self {
            tier,
            target_enhance,
            target_grade: Grade::Common,
            ..Default::default()
        }
    }

    /// Quick config for a full chase to the tier's top grade.
    pub fn grade_chase(tier: u8, target_grade: Grade) -> Self {
        Self {
            tier,
            target_grade,
            ..Default::default()
        }
    }
}
