//! Inventory stack engine for fungible resources.

pub mod stacks;

pub use stacks::*;
