//! The game clock: a four-phase day cycle driving survival pressure.
//!
//! Time never moves on its own; `go`, `wait`, and `search` each push the
//! clock exactly one phase.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::state::{Ending, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Morning => Self::Afternoon,
            Self::Afternoon => Self::Evening,
            Self::Evening => Self::Night,
            Self::Night => Self::Morning,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advance one phase and apply the tick's survival pressure. The day counter
/// increments only on the Night -> Morning rollover. Hunger climbs slowly at
/// night (+1) and fast otherwise (+3); thirst spikes in the afternoon (+5)
/// and trickles otherwise (+2).
pub fn advance_time(state: &mut GameState) {
    if state.time == TimeOfDay::Night {
        state.day += 1;
    }
    state.time = state.time.next();

    let hunger_rate = if state.time == TimeOfDay::Night { 1 } else { 3 };
    let thirst_rate = if state.time == TimeOfDay::Afternoon {
        5
    } else {
        2
    };

    if let Some(player) = state.player.as_mut() {
        player.update_vitals(hunger_rate, thirst_rate);
        debug!(
            "clock: day {} {} hunger {} thirst {} radiation {} hp {}",
            state.day,
            state.time,
            player.hunger,
            player.thirst,
            player.radiation,
            player.character.health
        );
        if !player.is_alive() && state.ending.is_none() {
            state.ending = Some(Ending::Collapse);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;

    fn state_with_player() -> GameState {
        let mut state = GameState::default();
        state.player = Some(Player::new("Survivor", "Test subject."));
        state
    }

    #[test]
    fn cycle_is_periodic_with_period_four() {
        let mut state = state_with_player();
        assert_eq!(state.day, 1);
        assert_eq!(state.time, TimeOfDay::Morning);

        for _ in 0..4 {
            advance_time(&mut state);
        }
        assert_eq!(state.time, TimeOfDay::Morning);
        assert_eq!(state.day, 2, "day increments exactly once per full cycle");

        for _ in 0..8 {
            advance_time(&mut state);
        }
        assert_eq!(state.day, 4);
    }

    #[test]
    fn hunger_and_thirst_rates_follow_the_phase() {
        let mut state = state_with_player();

        // Morning -> Afternoon: hunger +3, thirst +5.
        advance_time(&mut state);
        {
            let player = state.player.as_ref().unwrap();
            assert_eq!(player.hunger, 3);
            assert_eq!(player.thirst, 5);
        }

        // Afternoon -> Evening: hunger +3, thirst +2.
        advance_time(&mut state);
        {
            let player = state.player.as_ref().unwrap();
            assert_eq!(player.hunger, 6);
            assert_eq!(player.thirst, 7);
        }

        // Evening -> Night: hunger +1, thirst +2.
        advance_time(&mut state);
        let player = state.player.as_ref().unwrap();
        assert_eq!(player.hunger, 7);
        assert_eq!(player.thirst, 9);
    }

    #[test]
    fn death_by_vitals_sets_the_collapse_ending() {
        let mut state = state_with_player();
        {
            let player = state.player.as_mut().unwrap();
            player.character.health = 4;
            player.hunger = 99;
        }

        advance_time(&mut state);

        assert!(state.is_game_over());
        assert_eq!(state.ending, Some(Ending::Collapse));
    }
}
