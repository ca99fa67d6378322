//! The player: the shared character record plus survival vitals, an equip
//! slot, quest bookkeeping, and a current-location reference.

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::item::{ConsumableSpec, Item};
use crate::location::LocationId;

/// Upper bound shared by hunger, thirst, and radiation.
pub const VITAL_MAX: i32 = 100;

const HUNGER_DAMAGE: i32 = 5;
const THIRST_DAMAGE: i32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub character: Character,
    /// 0 (sated) to 100 (starving).
    pub hunger: i32,
    /// 0 (hydrated) to 100 (dehydrated).
    pub thirst: i32,
    /// 0 (clean) to 100 (lethal dose).
    pub radiation: i32,
    /// Weapon currently wielded. Held here, not in the inventory, so swings
    /// can wear it down without index juggling.
    pub equipped_weapon: Option<Item>,
    /// Key into the world's location registry, never an owning pointer.
    pub location: LocationId,
    pub active_quests: Vec<String>,
    pub completed_quests: Vec<String>,
    pub survivors_found: u32,
}

impl Player {
    #[must_use]
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            character: Character::new(name, description, 100, 10, 10, 10),
            hunger: 0,
            thirst: 0,
            radiation: 0,
            equipped_weapon: None,
            location: LocationId::new(),
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
            survivors_found: 0,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.character.is_alive()
    }

    /// Apply a consumable's deltas: health and radiation are added, hunger
    /// and thirst relieved, everything clamped to its range.
    pub fn consume(&mut self, effects: &ConsumableSpec) {
        if effects.health >= 0 {
            self.character.heal(effects.health);
        } else {
            self.character.take_damage(-effects.health);
        }
        self.hunger = (self.hunger - effects.hunger).clamp(0, VITAL_MAX);
        self.thirst = (self.thirst - effects.thirst).clamp(0, VITAL_MAX);
        self.radiation = (self.radiation + effects.radiation).clamp(0, VITAL_MAX);
    }

    pub fn add_radiation(&mut self, amount: i32) {
        self.radiation = (self.radiation + amount).clamp(0, VITAL_MAX);
    }

    /// One clock tick of survival pressure. Rates come from the phase just
    /// entered; penalties are independent and can all land in the same tick.
    pub fn update_vitals(&mut self, hunger_rate: i32, thirst_rate: i32) {
        self.hunger = (self.hunger + hunger_rate).min(VITAL_MAX);
        self.thirst = (self.thirst + thirst_rate).min(VITAL_MAX);

        if self.hunger >= VITAL_MAX {
            self.character.take_damage(HUNGER_DAMAGE);
        }
        if self.thirst >= VITAL_MAX {
            self.character.take_damage(THIRST_DAMAGE);
        }
        if self.radiation >= VITAL_MAX / 2 {
            self.character.take_damage(self.radiation / 10);
        }
    }

    /// Damage dealt per attack: bare strength plus the equipped weapon.
    #[must_use]
    pub fn attack_damage(&self) -> i32 {
        let weapon_damage = self
            .equipped_weapon
            .as_ref()
            .and_then(Item::as_weapon)
            .map_or(0, |spec| spec.damage);
        self.character.strength + weapon_damage
    }

    /// A quest can be offered once; completed quests never return.
    pub fn add_quest(&mut self, quest: &str) {
        if !self.active_quests.iter().any(|q| q == quest)
            && !self.completed_quests.iter().any(|q| q == quest)
        {
            self.active_quests.push(quest.to_string());
        }
    }

    /// Move a quest from the active set to the completed set.
    pub fn complete_quest(&mut self, quest: &str) {
        if let Some(idx) = self.active_quests.iter().position(|q| q == quest) {
            let quest = self.active_quests.remove(idx);
            self.completed_quests.push(quest);
        }
    }

    #[must_use]
    pub fn quest_active(&self, quest: &str) -> bool {
        self.active_quests.iter().any(|q| q == quest)
    }

    pub fn find_survivor(&mut self) {
        self.survivors_found += 1;
    }

    /// Inventory lookup that also sees the equipped weapon, for `examine`.
    #[must_use]
    pub fn visible_item(&self, name: &str) -> Option<&Item> {
        self.character
            .find_item(name)
            .map(|idx| &self.character.inventory[idx])
            .or_else(|| {
                self.equipped_weapon
                    .as_ref()
                    .filter(|item| item.name.eq_ignore_ascii_case(name))
            })
    }

    /// The vitals summary block shown by `status` and after `wait`.
    #[must_use]
    pub fn status(&self) -> String {
        let health = self.character.health;
        let health_status = if health >= 75 {
            "Good"
        } else if health >= 50 {
            "Injured"
        } else if health >= 25 {
            "Badly Injured"
        } else {
            "Critical"
        };
        let hunger_status = if self.hunger <= 25 {
            "Well Fed"
        } else if self.hunger <= 50 {
            "Hungry"
        } else if self.hunger <= 75 {
            "Very Hungry"
        } else {
            "Starving"
        };
        let thirst_status = if self.thirst <= 25 {
            "Hydrated"
        } else if self.thirst <= 50 {
            "Thirsty"
        } else if self.thirst <= 75 {
            "Very Thirsty"
        } else {
            "Dehydrated"
        };
        let radiation_status = if self.radiation <= 25 {
            "Safe"
        } else if self.radiation <= 50 {
            "Irradiated"
        } else if self.radiation <= 75 {
            "Highly Irradiated"
        } else {
            "Critically Irradiated"
        };

        format!(
            "Health: {}/{} ({})\nHunger: {}/{} ({})\nThirst: {}/{} ({})\nRadiation: {}/{} ({})\nSurvivors Found: {}",
            health,
            self.character.max_health,
            health_status,
            self.hunger,
            VITAL_MAX,
            hunger_status,
            self.thirst,
            VITAL_MAX,
            thirst_status,
            self.radiation,
            VITAL_MAX,
            radiation_status,
            self.survivors_found
        )
    }
}
