//! Trade valuation: fixed coin payouts gated on tier, grade, and
//! enhancement. No randomness anywhere in this module.

use crate::items::types::{Grade, Item};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeRoute {
    Inland,
    Sea,
}

fn qualifies(item: &Item) -> bool {
    !item.is_stackable() && item.grade >= Grade::Rare
}

/// Inland route: tier-3 equipment only. 1 coin, 2 with enhancement +3 or
/// better.
pub fn inland_value(item: &Item) -> u32 {
    if !qualifies(item) || item.tier != 3 {
        return 0;
    }
    if item.enhance >= 3 {
        2
    } else {
        1
    }
}

/// Sea route: tier-4 equipment pays 1/2 coins, tier-5 pays 3/5, with the
/// same enhancement +3 gate. Other tiers pay nothing.
pub fn sea_value(item: &Item) -> u32 {
    if !qualifies(item) {
        return 0;
    }
    match (item.tier, item.enhance >= 3) {
        (4, false) => 1,
        (4, true) => 2,
        (5, false) => 3,
        (5, true) => 5,
        _ => 0,
    }
}

pub fn trade_value(item: &Item, route: TradeRoute) -> u32 {
    match route {
        TradeRoute::Inland => inland_value(item),
        TradeRoute::Sea => sea_value(item),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeOutcome {
    pub success: bool,
    pub inventory: Vec<Item>,
    pub coins: u32,
}

/// Sell one item by id: removes it and pays its route value. Fails without
/// mutation when the item is missing or worth 0 coins.
pub fn apply_trade(inventory: Vec<Item>, item_id: Uuid, route: TradeRoute) -> TradeOutcome {
    let value = inventory
        .iter()
        .find(|item| item.id == item_id)
        .map(|item| trade_value(item, route))
        .unwrap_or(0);
    if value == 0 {
        return TradeOutcome {
            success: false,
            inventory,
            coins: 0,
        };
    }
    let inventory = inventory
        .into_iter()
        .filter(|item| item.id != item_id)
        .collect();
    TradeOutcome {
        success: true,
        inventory,
        coins: value,
    }
}
