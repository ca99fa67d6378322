//! World graph nodes. Locations live in a flat registry on the game state
//! and refer to each other by id, so exit cycles cost nothing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::character::Npc;
use crate::item::Item;

/// Registry key for a location. Exits and the player's position store these
/// keys, never the locations themselves.
pub type LocationId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Short description, shown until the place has been looked at.
    pub description: String,
    /// Detailed description, shown once explored.
    pub detailed_description: String,
    #[serde(default)]
    pub explored: bool,
    pub safe: bool,
    /// 0 (clean) to 5 (deadly).
    pub radiation_level: i32,
    /// Direction -> destination id. Ordered so listings are deterministic.
    #[serde(default)]
    pub exits: BTreeMap<String, LocationId>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub characters: Vec<Npc>,
}

impl Location {
    #[must_use]
    pub fn new(
        name: &str,
        description: &str,
        detailed_description: &str,
        safe: bool,
        radiation_level: i32,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            detailed_description: detailed_description.to_string(),
            explored: false,
            safe,
            radiation_level,
            exits: BTreeMap::new(),
            items: Vec::new(),
            characters: Vec::new(),
        }
    }

    /// Register a directed edge. Directions are case-insensitive keys and a
    /// duplicate direction overwrites the earlier edge.
    pub fn add_exit(&mut self, direction: &str, destination: &str) {
        self.exits
            .insert(direction.to_lowercase(), destination.to_string());
    }

    /// Destination id for a direction, if such an exit exists.
    #[must_use]
    pub fn exit(&self, direction: &str) -> Option<&LocationId> {
        self.exits.get(&direction.to_lowercase())
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, index: usize) -> Item {
        self.items.remove(index)
    }

    /// Case-insensitive exact-name lookup, first match.
    #[must_use]
    pub fn find_item(&self, name: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.name.eq_ignore_ascii_case(name))
    }

    pub fn add_character(&mut self, npc: Npc) {
        self.characters.push(npc);
    }

    pub fn remove_character(&mut self, index: usize) -> Npc {
        self.characters.remove(index)
    }

    #[must_use]
    pub fn find_character(&self, name: &str) -> Option<usize> {
        self.characters
            .iter()
            .position(|npc| npc.name().eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn exits_list(&self) -> String {
        if self.exits.is_empty() {
            return String::from("There are no visible exits.");
        }
        let mut list = String::from("Exits:");
        for direction in self.exits.keys() {
            list.push(' ');
            list.push_str(direction);
        }
        list
    }

    #[must_use]
    pub fn items_list(&self) -> String {
        if self.items.is_empty() {
            return String::from("There are no items here.");
        }
        let mut list = String::from("Items:");
        for item in &self.items {
            list.push_str("\n- ");
            list.push_str(&item.name);
        }
        list
    }

    #[must_use]
    pub fn characters_list(&self) -> String {
        if self.characters.is_empty() {
            return String::from("There is no one here.");
        }
        let mut list = String::from("Characters:");
        for npc in &self.characters {
            list.push_str("\n- ");
            list.push_str(npc.name());
        }
        list
    }

    /// Name, description, radiation line when irradiated, then exits, items,
    /// and characters, in that fixed order.
    #[must_use]
    pub fn full_description(&self) -> String {
        let mut description = format!("{}\n", self.name);
        if self.explored {
            description.push_str(&self.detailed_description);
        } else {
            description.push_str(&self.description);
        }
        description.push('\n');

        if self.radiation_level > 0 {
            description.push_str(&format!(
                "Radiation Level: {}\n",
                radiation_severity(self.radiation_level)
            ));
        }

        description.push_str(&self.exits_list());
        description.push('\n');
        description.push_str(&self.items_list());
        description.push('\n');
        description.push_str(&self.characters_list());
        description
    }
}

/// Monotone mapping from radiation level to a severity word.
#[must_use]
pub const fn radiation_severity(level: i32) -> &'static str {
    match level {
        i32::MIN..=0 => "None",
        1 => "Low",
        2 => "Moderate",
        3 => "High",
        4 => "Very High",
        _ => "Deadly",
    }
}
