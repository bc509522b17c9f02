//! Enhancement engine: the success/failure state machine and its protection
//! cost arithmetic.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
