//! Ashfall Game Engine
//!
//! Platform-agnostic core logic for the Ashfall post-apocalyptic survival
//! adventure. This crate provides the whole simulation — world graph,
//! entities, clock, combat, command dispatch, and quest tracking — without
//! UI or platform-specific dependencies. The renderer feeds it one line of
//! input per turn and polls the terminal-condition surface afterwards.

pub mod character;
pub mod clock;
pub mod combat;
pub mod commands;
pub mod content;
pub mod item;
pub mod location;
pub mod player;
pub mod quests;
pub mod scavenge;
pub mod state;

// Re-export commonly used types
pub use character::{Character, Inventory, Npc};
pub use clock::{TimeOfDay, advance_time};
pub use commands::{CommandError, CommandResult, process_command};
pub use content::{
    APOCALYPTIC_QUOTES, CITY_SIGHTS, FOREST_SIGHTS, SURVIVAL_TIPS, WASTELAND_SIGHTS, new_game,
};
pub use item::{ConsumableSpec, Item, ItemCategory, ItemKind, WeaponSpec};
pub use location::{Location, LocationId, radiation_severity};
pub use player::{Player, VITAL_MAX};
pub use quests::{Condition, Effect, MAIN_QUEST, QuestTrigger, TRIGGERS};
pub use scavenge::{DISCOVERY_CHANCE, discovery_for_roll, roll_search};
pub use state::{Ending, GameState, TOTAL_SURVIVORS};
