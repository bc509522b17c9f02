//! Empirical batch runner.
//!
//! Re-implements the enhancement/disassembly/promotion rules as a tight
//! synchronous loop over independent trials, detached from any live
//! inventory. Each trial crafts an item, applies the configured gates, runs
//! the memoryless enhancement chain, and - on reaching the target level -
//! chases grade promotions from the shared stone bucket.
//!
//! Trials that fail anywhere are treated as disassembled and feed the
//! bucket. Promotions blocked on stones wait in a FIFO queue whose head (and
//! only its head) is retried after each stone-yielding event; a blocked head
//! stalls the whole queue even when later entries could afford their next
//! step. That head-blocking behavior is part of the published statistics and
//! is preserved deliberately.

use super::config::SimConfig;
use super::report::SimReport;
use crate::config::EngineConfig;
use crate::forge::disassembly::{disassemble_yield, stone_type_for_tier};
use crate::forge::promotion::promotion_cost;
use crate::items::generation::craft_item;
use crate::items::stats::max_grade_for_tier;
use crate::items::types::{Grade, SkillTier};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

struct BatchState {
    stones: u64,
    stones_gained: u64,
    stones_spent: u64,
    pending: VecDeque<Grade>,
    reached_grade: u32,
}

impl BatchState {
    fn new() -> Self {
        Self {
            stones: 0,
            stones_gained: 0,
            stones_spent: 0,
            pending: VecDeque::new(),
            reached_grade: 0,
        }
    }

    fn gain(&mut self, amount: u64) {
        self.stones += amount;
        self.stones_gained += amount;
    }

    fn spend(&mut self, amount: u64) {
        self.stones -= amount;
        self.stones_spent += amount;
    }

    /// Advance the queue head while stones allow; stop at the first blocked
    /// entry. Entries that reach the target grade are popped and counted.
    fn process_pending(&mut self, tier: u8, target_grade: Grade) {
        while let Some(grade) = self.pending.front().copied() {
            if grade >= target_grade {
                self.pending.pop_front();
                self.reached_grade += 1;
                continue;
            }
            let cost = match promotion_cost(grade, tier) {
                Some(cost) => cost,
                None => {
                    self.pending.pop_front();
                    continue;
                }
            };
            if self.stones < cost.amount {
                break;
            }
            self.spend(cost.amount);
            if let (Some(head), Some(next)) = (self.pending.front_mut(), grade.next()) {
                *head = next;
            }
        }
    }
}

/// Run the batch simulation and aggregate a report.
pub fn run_simulation(sim: &SimConfig, cfg: &EngineConfig) -> SimReport {
    let target_grade = sim.target_grade.min(max_grade_for_tier(sim.tier));
    let target_enhance = sim.target_enhance.min(9);

    let mut state = BatchState::new();
    let mut level_histogram = [0u32; 10];
    let mut gated_out = 0u32;
    let mut reached_enhance = 0u32;

    for trial in 0..sim.trials {
        let mut rng = match sim.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + trial as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let item = craft_item(sim.tier, cfg, &mut rng);

        let below_bonus = sim
            .min_bonus_attack
            .map(|min| item.bonus_attack < min)
            .unwrap_or(false);
        let missing_sr = sim.require_sr && item.skill_tier != SkillTier::Sr;
        if below_bonus || missing_sr {
            gated_out += 1;
            state.gain(disassemble_yield(item.tier, item.grade, &mut rng).amount);
            state.process_pending(sim.tier, target_grade);
            continue;
        }

        let mut level = 0u8;
        let mut destroyed = false;
        while level < target_enhance {
            let rate = cfg.enhance_rate_at(level);
            if rng.gen_range(0.0..100.0) < rate {
                level += 1;
            } else {
                destroyed = true;
                break;
            }
        }
        level_histogram[level as usize] += 1;

        if destroyed {
            state.gain(disassemble_yield(item.tier, item.grade, &mut rng).amount);
            state.process_pending(sim.tier, target_grade);
            if sim.verbosity >= 2 {
                println!(
                    "Trial {}/{} - destroyed at +{}, stones {}",
                    trial + 1,
                    sim.trials,
                    level,
                    state.stones
                );
            }
            continue;
        }

        reached_enhance += 1;
        let mut grade = item.grade;
        loop {
            if grade >= target_grade {
                state.reached_grade += 1;
                break;
            }
            let cost = match promotion_cost(grade, sim.tier) {
                Some(cost) => cost,
                None => break,
            };
            if state.stones < cost.amount {
                state.pending.push_back(grade);
                break;
            }
            state.spend(cost.amount);
            grade = grade.next().unwrap_or(grade);
        }

        if sim.verbosity >= 2 {
            println!(
                "Trial {}/{} - reached +{}, grade {}, stones {}",
                trial + 1,
                sim.trials,
                level,
                grade.name(),
                state.stones
            );
        }
    }

    SimReport {
        trials: sim.trials,
        tier: sim.tier,
        target_enhance,
        target_grade,
        stone_type: stone_type_for_tier(sim.tier),
        gated_out,
        level_histogram,
        reached_enhance,
        reached_grade: state.reached_grade,
        pending_promotions: state.pending.len() as u32,
        stones_gained: state.stones_gained,
        stones_spent: state.stones_spent,
        stones_remaining: state.stones,
    }
}
