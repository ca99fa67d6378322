//! Root aggregate: the world registry, the player, the clock, and the
//! terminal-condition surface polled by the renderer.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::clock::TimeOfDay;
use crate::location::{Location, LocationId};
use crate::player::Player;

/// Survivors required for full victory.
pub const TOTAL_SURVIVORS: u32 = 12;

/// How a session ends. Death and victory are states, not errors; the
/// renderer polls for them after every turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Ending {
    /// All survivors found.
    Victory { survivors: u32 },
    /// Vitals ground the player down to zero health.
    Collapse,
    /// Killed in combat by the named character.
    Slain { by: String },
}

impl Ending {
    /// The reason line shown on the game-over screen.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Victory { survivors } => format!(
                "Congratulations! You have found all {survivors} survivors and ensured the future of humanity."
            ),
            Self::Collapse => String::from("You have died. Your journey ends here."),
            Self::Slain { by } => format!("You were killed by {by}."),
        }
    }

    #[must_use]
    pub const fn is_victory(&self) -> bool {
        matches!(self, Self::Victory { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub seed: u64,
    pub day: u32,
    pub time: TimeOfDay,
    /// None until the world has been initialized.
    pub player: Option<Player>,
    /// Flat registry; exits and the player's position refer into it by key.
    pub locations: HashMap<LocationId, Location>,
    /// Quest name -> description, for the `quests` listing.
    pub quest_catalog: HashMap<String, String>,
    pub total_survivors: u32,
    pub ending: Option<Ending>,
    #[serde(skip)]
    pub rng: Option<ChaCha20Rng>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            seed: 0,
            day: 1,
            time: TimeOfDay::Morning,
            player: None,
            locations: HashMap::new(),
            quest_catalog: HashMap::new(),
            total_survivors: TOTAL_SURVIVORS,
            ending: None,
            rng: None,
        }
    }
}

impl GameState {
    /// Attach the deterministic random stream. Everything random in a
    /// session (search outcomes) draws from this.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.rng = Some(ChaCha20Rng::seed_from_u64(seed));
        self
    }

    /// Place the player at the starting location.
    pub fn initialize(&mut self, mut player: Player, start: &str) {
        player.location = start.to_string();
        self.player = Some(player);
    }

    pub fn add_location(&mut self, key: &str, location: Location) {
        self.locations.insert(key.to_string(), location);
    }

    #[must_use]
    pub fn location(&self, key: &str) -> Option<&Location> {
        self.locations.get(key)
    }

    pub fn location_mut(&mut self, key: &str) -> Option<&mut Location> {
        self.locations.get_mut(key)
    }

    pub fn add_quest_description(&mut self, quest: &str, description: &str) {
        self.quest_catalog
            .insert(quest.to_string(), description.to_string());
    }

    #[must_use]
    pub fn quest_description(&self, quest: &str) -> &str {
        self.quest_catalog
            .get(quest)
            .map_or("No description available.", String::as_str)
    }

    /// The `quests` command body.
    #[must_use]
    pub fn active_quests_list(&self) -> String {
        let Some(player) = self.player.as_ref() else {
            return String::from("You have no active quests.");
        };
        if player.active_quests.is_empty() {
            return String::from("You have no active quests.");
        }
        let mut list = String::from("Active Quests:");
        for quest in &player.active_quests {
            list.push_str(&format!("\n- {}: {}", quest, self.quest_description(quest)));
        }
        list
    }

    #[must_use]
    pub fn time_info(&self) -> String {
        format!("Day {}, {}", self.day, self.time)
    }

    /// Latch an ending; the first one recorded wins.
    pub fn set_ending(&mut self, ending: Ending) {
        if self.ending.is_none() {
            self.ending = Some(ending);
        }
    }

    /// Flip the victory flag when the survivor target has been met.
    pub fn check_victory(&mut self) -> bool {
        let survivors = self.player.as_ref().map_or(0, |p| p.survivors_found);
        if survivors >= self.total_survivors {
            self.set_ending(Ending::Victory {
                survivors: self.total_survivors,
            });
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.ending.is_some()
    }

    #[must_use]
    pub fn game_over_reason(&self) -> Option<String> {
        self.ending.as_ref().map(Ending::reason)
    }

    /// One full turn: dispatch, state mutation, quest re-evaluation.
    pub fn process_command(&mut self, line: &str) -> String {
        crate::commands::process_command(self, line)
    }

    /// The vitals summary block, empty if no player exists yet.
    #[must_use]
    pub fn player_status(&self) -> String {
        self.player.as_ref().map_or_else(String::new, Player::status)
    }
}
