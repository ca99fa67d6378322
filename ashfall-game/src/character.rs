//! Shared character record and the NPC variant built on top of it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

use crate::item::Item;

/// Most characters carry only a handful of items, so keep them inline.
pub type Inventory = SmallVec<[Item; 4]>;

/// The capability record shared by the player and every NPC: identity,
/// health, attributes, and an owned inventory.
///
/// Invariant: `0 <= health <= max_health`, maintained by [`Character::take_damage`]
/// and [`Character::heal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub description: String,
    pub health: i32,
    pub max_health: i32,
    pub strength: i32,
    pub intelligence: i32,
    pub agility: i32,
    #[serde(default)]
    pub inventory: Inventory,
}

impl Character {
    #[must_use]
    pub fn new(
        name: &str,
        description: &str,
        health: i32,
        strength: i32,
        intelligence: i32,
        agility: i32,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            health,
            max_health: health,
            strength,
            intelligence,
            agility,
            inventory: Inventory::new(),
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.health = (self.health - damage).max(0);
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Remove and return the item at `index`. Removal is positional so a
    /// duplicate name never takes out the wrong item.
    pub fn remove_item(&mut self, index: usize) -> Item {
        self.inventory.remove(index)
    }

    /// Case-insensitive exact-name lookup, first match.
    #[must_use]
    pub fn find_item(&self, name: &str) -> Option<usize> {
        self.inventory
            .iter()
            .position(|item| item.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn has_item(&self, name: &str) -> bool {
        self.find_item(name).is_some()
    }
}

/// A non-player character: the shared record plus disposition, dialogue,
/// and trade stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub character: Character,
    pub friendly: bool,
    /// Counts toward the win condition once successfully talked to.
    pub survivor: bool,
    /// Set on the first successful dialogue; keeps the rescue idempotent.
    #[serde(default)]
    pub rescued: bool,
    #[serde(default)]
    pub dialogue: HashMap<String, String>,
    pub default_dialogue: String,
    #[serde(default)]
    pub trades: SmallVec<[Item; 4]>,
}

impl Npc {
    #[must_use]
    pub fn new(character: Character, friendly: bool, survivor: bool) -> Self {
        Self {
            character,
            friendly,
            survivor,
            rescued: false,
            dialogue: HashMap::new(),
            default_dialogue: String::from("Hello there."),
            trades: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.character.name
    }

    pub fn set_default_dialogue(&mut self, line: &str) {
        self.default_dialogue = line.to_string();
    }

    /// Register a keyword response; keywords are matched case-insensitively.
    pub fn add_dialogue(&mut self, keyword: &str, response: &str) {
        self.dialogue
            .insert(keyword.to_lowercase(), response.to_string());
    }

    /// Response for a topic. An empty topic gets the default line; an unknown
    /// one gets the stock brush-off.
    #[must_use]
    pub fn dialogue_for(&self, topic: &str) -> &str {
        if topic.is_empty() {
            return &self.default_dialogue;
        }
        self.dialogue
            .get(&topic.to_lowercase())
            .map_or("I don't know anything about that.", String::as_str)
    }

    pub fn add_trade_item(&mut self, item: Item) {
        self.trades.push(item);
    }

    /// Multi-line listing of this NPC's trade stock.
    #[must_use]
    pub fn trade_list(&self) -> String {
        if self.trades.is_empty() {
            return String::from("I have nothing to trade.");
        }
        let mut list = String::from("I have these items to trade:");
        for item in &self.trades {
            list.push_str(&format!("\n- {} (Value: {})", item.name, item.value));
        }
        list
    }
}
