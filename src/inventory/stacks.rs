//! Resource stack engine.
//!
//! Stacks hold up to [`STACK_MAX`] units each; the inventory holds up to a
//! slot cap of items total. Adding fills existing under-full stacks in
//! inventory order before opening new ones, and anything unplaced is
//! reported back as overflow - resources are never dropped silently.
//! Consumption fails atomically on shortfall.

use crate::items::types::{Item, ResourceKind, STACK_MAX};

/// Total units of a resource held across all of its stacks.
pub fn resource_count(inventory: &[Item], tier: u8, kind: ResourceKind) -> u32 {
    inventory
        .iter()
        .filter(|item| item.matches_stack(tier, kind))
        .filter_map(|item| item.stack_count)
        .sum()
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub inventory: Vec<Item>,
    /// Units actually placed. `added + overflow == requested` always holds.
    pub added: u32,
    /// Units that did not fit under the slot cap.
    pub overflow: u32,
}

/// Add `amount` units of a resource, topping up existing stacks first and
/// then opening new stacks until the inventory reaches `max_slots`.
pub fn add_stacked(
    mut inventory: Vec<Item>,
    tier: u8,
    kind: ResourceKind,
    amount: u32,
    max_slots: usize,
) -> AddOutcome {
    let mut remaining = amount;

    for item in inventory.iter_mut() {
        if remaining == 0 {
            break;
        }
        if !item.matches_stack(tier, kind) {
            continue;
        }
        if let Some(count) = item.stack_count {
            let take = (STACK_MAX - count).min(remaining);
            if take > 0 {
                item.stack_count = Some(count + take);
                remaining -= take;
            }
        }
    }

    while remaining > 0 && inventory.len() < max_slots {
        let take = remaining.min(STACK_MAX);
        inventory.push(Item::resource(tier, kind, take));
        remaining -= take;
    }

    AddOutcome {
        inventory,
        added: amount - remaining,
        overflow: remaining,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsumeOutcome {
    pub success: bool,
    pub inventory: Vec<Item>,
}

/// Remove `amount` units of a resource. If the total available is short the
/// call fails and the inventory comes back unchanged. Otherwise whole stacks
/// are removed in inventory order, then the first stack with enough
/// remainder is partially decremented; all other items keep their relative
/// order.
pub fn consume_stacked(
    inventory: Vec<Item>,
    tier: u8,
    kind: ResourceKind,
    amount: u32,
) -> ConsumeOutcome {
    if resource_count(&inventory, tier, kind) < amount {
        return ConsumeOutcome {
            success: false,
            inventory,
        };
    }

    let mut remaining = amount;
    let mut kept = Vec::with_capacity(inventory.len());
    for mut item in inventory {
        if remaining > 0 && item.matches_stack(tier, kind) {
            if let Some(count) = item.stack_count {
                if count <= remaining {
                    remaining -= count;
                    continue;
                }
                item.stack_count = Some(count - remaining);
                remaining = 0;
            }
        }
        kept.push(item);
    }

    ConsumeOutcome {
        success: true,
        inventory: kept,
    }
}
