//! Shared economy state: upgrade stones, the consumed-items ledger, and
//! trade valuation.

pub mod ledger;
pub mod stones;
pub mod trade;

pub use ledger::*;
pub use stones::*;
pub use trade::*;
