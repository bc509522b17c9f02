//! Monte Carlo cost simulator.
//!
//! Two complementary tools for economy analysis:
//! - a closed-form expectation of the protection cost to reach +9
//!   ([`project_enhance_cost`]), and
//! - an empirical batch runner ([`run_simulation`]) that replays the full
//!   craft -> gate -> enhance -> disassemble -> promote pipeline over
//!   thousands of independent trials.
//!
//! Every draw is independent and identically distributed under the
//! configured rate tables; there is no pity timer and no history-dependent
//! biasing anywhere.

mod config;
mod enhance_cost;
mod report;
mod runner;

pub use config::SimConfig;
pub use enhance_cost::{project_enhance_cost, EnhanceCostReport, LevelCost};
pub use report::SimReport;
pub use runner::run_simulation;
