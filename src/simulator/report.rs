//! Batch simulation report.

use crate::items::types::{Grade, StoneType};
use serde::Serialize;
use std::fmt::Write;

/// Aggregated results from a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub trials: u32,
    pub tier: u8,
    pub target_enhance: u8,
    pub target_grade: Grade,
    pub stone_type: StoneType,

    /// Trials discarded by the bonus-stat / SR gates before enhancing.
    pub gated_out: u32,
    /// Final enhancement level per trial that entered the chain; index is
    /// the level the chain ended on (destroyed attempting the next, or the
    /// target itself).
    pub level_histogram: [u32; 10],
    pub reached_enhance: u32,
    pub reached_grade: u32,
    /// Promotions still queued (blocked on stones) when the run ended.
    pub pending_promotions: u32,

    pub stones_gained: u64,
    pub stones_spent: u64,
    pub stones_remaining: u64,
}

impl SimReport {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Human-readable summary table.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Batch Simulation Report ===");
        let _ = writeln!(
            out,
            "Trials: {}  (tier {}, target +{}, target grade {})",
            self.trials,
            self.tier,
            self.target_enhance,
            self.target_grade.name()
        );
        let _ = writeln!(out, "Gated out before enhancing: {}", self.gated_out);
        let _ = writeln!(out, "Final enhancement levels:");
        for (level, count) in self.level_histogram.iter().enumerate() {
            if *count > 0 {
                let pct = *count as f64 * 100.0 / self.trials.max(1) as f64;
                let _ = writeln!(out, "  +{level}: {count} ({pct:.1}%)");
            }
        }
        let _ = writeln!(
            out,
            "Reached +{}: {}  Reached {}: {}  (pending promotions: {})",
            self.target_enhance,
            self.reached_enhance,
            self.target_grade.name(),
            self.reached_grade,
            self.pending_promotions
        );
        let _ = writeln!(
            out,
            "{} stones - gained: {}  spent: {}  remaining: {}",
            self.stone_type.name(),
            self.stones_gained,
            self.stones_spent,
            self.stones_remaining
        );
        out
    }
}
