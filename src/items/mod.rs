//! Item system: core types, stat formulas, grade rolls, and generation.

pub mod generation;
pub mod grade;
pub mod stats;
pub mod types;

pub use generation::*;
pub use grade::*;
pub use stats::*;
pub use types::*;
