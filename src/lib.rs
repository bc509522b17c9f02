//! Relicforge - Idle RPG Item-Economy Engine
//!
//! The stochastic core behind a browser-based idle RPG: grade rolls,
//! enhancement success/failure gambling, disassembly yields, grade
//! promotion, trade valuation, and Monte Carlo cost projection.
//!
//! The engine is purely functional: state goes in, new state comes out.
//! Precondition failures (insufficient stones, zero-value trades, shortfall
//! consumption) are reported through success flags on outcome structs, never
//! through panics. Every stochastic function takes `&mut impl Rng` so callers
//! can inject seeded or mocked randomness.
//!
//! Rendering, persistence, and the hunting timer loop live in collaborating
//! layers; nothing here performs I/O.

pub mod config;
pub mod economy;
pub mod enhancement;
pub mod forge;
pub mod inventory;
pub mod items;
pub mod simulator;
