use super::stats::{attack_value, defense_value, slot_count};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Highest reachable enhancement level. Levels run 0 through 9.
pub const MAX_ENHANCE: u8 = 9;
/// Units held by a single resource stack before spilling into a new one.
pub const STACK_MAX: u32 = 100;
/// Default inventory slot cap used by the stack engine.
pub const DEFAULT_MAX_SLOTS: usize = 300;

/// Item quality grade, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Ancient = 3,
    Heroic = 4,
    Unique = 5,
    Relic = 6,
}

impl Grade {
    pub const ALL: [Grade; 7] = [
        Grade::Common,
        Grade::Uncommon,
        Grade::Rare,
        Grade::Ancient,
        Grade::Heroic,
        Grade::Unique,
        Grade::Relic,
    ];

    /// Returns the display name for this grade.
    pub fn name(&self) -> &'static str {
        match self {
            Grade::Common => "Common",
            Grade::Uncommon => "Uncommon",
            Grade::Rare => "Rare",
            Grade::Ancient => "Ancient",
            Grade::Heroic => "Heroic",
            Grade::Unique => "Unique",
            Grade::Relic => "Relic",
        }
    }

    /// The next grade up, or None at Relic.
    pub fn next(&self) -> Option<Grade> {
        match self {
            Grade::Common => Some(Grade::Uncommon),
            Grade::Uncommon => Some(Grade::Rare),
            Grade::Rare => Some(Grade::Ancient),
            Grade::Ancient => Some(Grade::Heroic),
            Grade::Heroic => Some(Grade::Unique),
            Grade::Unique => Some(Grade::Relic),
            Grade::Relic => None,
        }
    }
}

/// Skill tier stamped on equipment at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillTier {
    R,
    Sr,
}

/// Upgrade stone bucket. Tiers 1-2 pay and earn Low, 3-4 Mid, 5-7 High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoneType {
    Low,
    Mid,
    High,
}

impl StoneType {
    pub fn name(&self) -> &'static str {
        match self {
            StoneType::Low => "Low",
            StoneType::Mid => "Mid",
            StoneType::High => "High",
        }
    }
}

/// Fungible resource kinds held in stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Ore,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Ore => "Ore",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Resource(ResourceKind),
}

impl ItemCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::Weapon => "Sword",
            ItemCategory::Armor => "Plate",
            ItemCategory::Resource(kind) => kind.label(),
        }
    }
}

/// How an item entered the world. Drives the consumed-items ledger key when
/// the item is destroyed by an enhancement failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemSource {
    Crafted,
    Dropped,
}

/// A single piece of equipment or one stack of a fungible resource.
///
/// `attack`, `defense`, and `slots` are derived values; they are recomputed
/// through [`Item::recompute_derived`] whenever enhancement or grade changes
/// and must never be set independently. Stack instances (`stack_count` is
/// Some) never carry combat semantics beyond defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub category: ItemCategory,
    pub tier: u8,
    pub grade: Grade,
    pub attack: u32,
    pub defense: u32,
    pub bonus_attack: u32,
    pub skill_tier: SkillTier,
    pub enhance: u8,
    pub slots: u8,
    pub exp: u32,
    pub stack_count: Option<u32>,
    pub used_protect_count: u32,
    pub source: ItemSource,
}

impl Item {
    /// Create one stack of a resource. Count is clamped to [1, STACK_MAX].
    pub fn resource(tier: u8, kind: ResourceKind, count: u32) -> Item {
        Item {
            id: Uuid::new_v4(),
            name: format!("T{} {}", tier, kind.label()),
            category: ItemCategory::Resource(kind),
            tier,
            grade: Grade::Common,
            attack: 0,
            defense: 0,
            bonus_attack: 0,
            skill_tier: SkillTier::R,
            enhance: 0,
            slots: 0,
            exp: 0,
            stack_count: Some(count.clamp(1, STACK_MAX)),
            used_protect_count: 0,
            source: ItemSource::Crafted,
        }
    }

    pub fn is_stackable(&self) -> bool {
        self.stack_count.is_some()
    }

    /// Whether this item is a stack of the given resource at the given tier.
    pub fn matches_stack(&self, tier: u8, kind: ResourceKind) -> bool {
        self.tier == tier && self.category == ItemCategory::Resource(kind)
    }

    /// Recompute attack/defense and slot count from tier, grade, and
    /// enhancement. Resource stacks keep their zeroed combat stats.
    pub fn recompute_derived(&mut self) {
        match self.category {
            ItemCategory::Weapon => {
                self.attack = attack_value(self.tier, self.grade, self.enhance);
                self.slots = slot_count(self.enhance);
            }
            ItemCategory::Armor => {
                self.defense = defense_value(self.tier, self.grade, self.enhance);
                self.slots = slot_count(self.enhance);
            }
            ItemCategory::Resource(_) => {}
        }
    }
}
