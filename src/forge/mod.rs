//! Disassembly and grade promotion over the shared upgrade-stone pool.

pub mod disassembly;
pub mod promotion;

pub use disassembly::*;
pub use promotion::*;
