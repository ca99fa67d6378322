//! Item model: the closed set of thing-kinds the world can contain.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Weapon,
    Armor,
    Food,
    Water,
    Medicine,
    Tool,
    Resource,
    Quest,
    Miscellaneous,
}

impl ItemCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Food => "food",
            Self::Water => "water",
            Self::Medicine => "medicine",
            Self::Tool => "tool",
            Self::Resource => "resource",
            Self::Quest => "quest",
            Self::Miscellaneous => "miscellaneous",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weapon-specific fields. Durability counts down by one per swing; the
/// weapon is destroyed when it reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub damage: i32,
    pub durability: i32,
    pub max_durability: i32,
}

/// Signed deltas a consumable applies to the player when used, eaten, or
/// drunk. Health and radiation are added; hunger and thirst are relieved by
/// the stated amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConsumableSpec {
    #[serde(default)]
    pub health: i32,
    #[serde(default)]
    pub hunger: i32,
    #[serde(default)]
    pub thirst: i32,
    #[serde(default)]
    pub radiation: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Plain,
    Weapon(WeaponSpec),
    Consumable(ConsumableSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    /// Carry weight in kilograms.
    pub weight: f32,
    pub category: ItemCategory,
    pub value: i32,
    pub kind: ItemKind,
}

impl Item {
    #[must_use]
    pub fn plain(
        name: &str,
        description: &str,
        weight: f32,
        category: ItemCategory,
        value: i32,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            weight,
            category,
            value,
            kind: ItemKind::Plain,
        }
    }

    #[must_use]
    pub fn weapon(
        name: &str,
        description: &str,
        weight: f32,
        damage: i32,
        durability: i32,
        value: i32,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            weight,
            category: ItemCategory::Weapon,
            value,
            kind: ItemKind::Weapon(WeaponSpec {
                damage,
                durability,
                max_durability: durability,
            }),
        }
    }

    #[must_use]
    pub fn consumable(
        name: &str,
        description: &str,
        weight: f32,
        category: ItemCategory,
        value: i32,
        effects: ConsumableSpec,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            weight,
            category,
            value,
            kind: ItemKind::Consumable(effects),
        }
    }

    #[must_use]
    pub fn is_consumable(&self) -> bool {
        matches!(self.kind, ItemKind::Consumable(_))
    }

    #[must_use]
    pub fn as_weapon(&self) -> Option<&WeaponSpec> {
        match &self.kind {
            ItemKind::Weapon(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_weapon_mut(&mut self) -> Option<&mut WeaponSpec> {
        match &mut self.kind {
            ItemKind::Weapon(spec) => Some(spec),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_consumable(&self) -> Option<&ConsumableSpec> {
        match &self.kind {
            ItemKind::Consumable(spec) => Some(spec),
            _ => None,
        }
    }

    /// One-line description shown by `inventory` and `examine`.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.kind {
            ItemKind::Plain => format!(
                "{}: {} (Weight: {}kg, Value: {})",
                self.name, self.description, self.weight, self.value
            ),
            ItemKind::Weapon(spec) => format!(
                "{}: {} (Damage: {}, Durability: {}/{}, Weight: {}kg)",
                self.name,
                self.description,
                spec.damage,
                spec.durability,
                spec.max_durability,
                self.weight
            ),
            ItemKind::Consumable(spec) => {
                let mut effects = Vec::new();
                if spec.health != 0 {
                    effects.push(format!("Health: {:+}", spec.health));
                }
                if spec.hunger != 0 {
                    effects.push(format!("Hunger: {:+}", spec.hunger));
                }
                if spec.thirst != 0 {
                    effects.push(format!("Thirst: {:+}", spec.thirst));
                }
                if spec.radiation != 0 {
                    effects.push(format!("Radiation: {:+}", spec.radiation));
                }
                format!(
                    "{}: {} ({}, Weight: {}kg)",
                    self.name,
                    self.description,
                    effects.join(" "),
                    self.weight
                )
            }
        }
    }
}
