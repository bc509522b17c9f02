use crate::economy::stones::StoneYield;
use crate::items::types::Item;

/// Protection cost divisor per tier. Higher tiers burn protection faster:
/// the divisor halves roughly per tier. Tiers without an entry use 1.0.
pub fn protect_cost_unit(tier: u8) -> f64 {
    match tier {
        3 => 1.0,
        4 => 0.5,
        5 => 0.25,
        6 => 0.125,
        7 => 0.06,
        _ => 1.0,
    }
}

/// Protection spent by one attempt at the given success rate (percent):
/// `ceil((100 - rate) / unit(tier))`. Spent per attempt, success or not.
pub fn protect_cost(tier: u8, success_rate: f64) -> u32 {
    let failure_mass = (100.0 - success_rate).max(0.0);
    (failure_mass / protect_cost_unit(tier)).ceil() as u32
}

/// Result of one enhancement attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhanceOutcome {
    pub success: bool,
    /// The surviving item, or None when the attempt destroyed it.
    pub item: Option<Item>,
    /// Stone refund credited on destructive-mode failure, computed as an
    /// implicit disassembly of the pre-failure item.
    pub stone_refund: Option<StoneYield>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protect_cost_unit_table() {
        assert_eq!(protect_cost_unit(3), 1.0);
        assert_eq!(protect_cost_unit(4), 0.5);
        assert_eq!(protect_cost_unit(5), 0.25);
        assert_eq!(protect_cost_unit(6), 0.125);
        assert_eq!(protect_cost_unit(7), 0.06);
        // Default for tiers without an entry
        assert_eq!(protect_cost_unit(1), 1.0);
        assert_eq!(protect_cost_unit(2), 1.0);
    }

    #[test]
    fn test_protect_cost_values() {
        assert_eq!(protect_cost(3, 50.0), 50);
        assert_eq!(protect_cost(3, 10.0), 90);
        assert_eq!(protect_cost(4, 50.0), 100);
        assert_eq!(protect_cost(5, 50.0), 200);
        assert_eq!(protect_cost(7, 40.0), 1000);
    }

    #[test]
    fn test_protect_cost_rounds_up() {
        // (100 - 99.5) / 0.06 = 8.33.. -> 9
        assert_eq!(protect_cost(7, 99.5), 9);
    }

    #[test]
    fn test_protect_cost_full_rate_is_free() {
        assert_eq!(protect_cost(3, 100.0), 0);
        // Out-of-range rates degrade gracefully rather than underflow
        assert_eq!(protect_cost(3, 150.0), 0);
    }
}
