//! Command dispatch: one line of input in, one block of text out.
//!
//! Input is trimmed, lower-cased, and split on the first whitespace into a
//! verb and a single argument string; sub-parsing the argument belongs to
//! the individual handler. Handler faults are caught here and reported —
//! the turn loop never dies on a bad command.

use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

use crate::clock;
use crate::combat;
use crate::item::{ItemCategory, ItemKind};
use crate::quests;
use crate::scavenge;
use crate::state::GameState;

pub(crate) const NO_PLAYER: &str = "You don't exist.";
pub(crate) const NOWHERE: &str = "You are nowhere.";

/// A genuine handler fault, as opposed to the everyday "there is no X here"
/// replies. These surface as an "Error executing command" message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("the exit leads to '{0}', which is missing from the world")]
    DanglingLocation(String),
}

pub type CommandResult = Result<String, CommandError>;

type Handler = fn(&mut GameState, &str) -> CommandResult;

static HANDLERS: Lazy<HashMap<&'static str, Handler>> = Lazy::new(|| {
    HashMap::from([
        ("help", help as Handler),
        ("look", look as Handler),
        ("go", go as Handler),
        ("take", take as Handler),
        ("drop", drop_item as Handler),
        ("inventory", inventory as Handler),
        ("status", status as Handler),
        ("use", use_item as Handler),
        ("eat", eat as Handler),
        ("drink", drink as Handler),
        ("talk", talk as Handler),
        ("quests", quests_list as Handler),
        ("time", time as Handler),
        ("wait", wait as Handler),
        ("examine", examine as Handler),
        ("equip", equip as Handler),
        ("attack", attack as Handler),
        ("search", search as Handler),
    ])
});

/// Dispatch one turn: run the verb's handler, then re-evaluate every quest
/// trigger against the (possibly changed) state and append any narration.
pub fn process_command(state: &mut GameState, input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::from("Please enter a command.");
    }

    let lowered = trimmed.to_lowercase();
    let (verb, rest) = match lowered.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (lowered.as_str(), ""),
    };

    let mut output = match HANDLERS.get(verb) {
        Some(handler) => handler(state, rest).unwrap_or_else(|err| {
            warn!("command '{verb}' faulted: {err}");
            format!("Error executing command: {err}")
        }),
        None => format!("I don't understand '{verb}'. Type 'help' for a list of commands."),
    };

    for line in quests::evaluate(state) {
        output.push('\n');
        output.push_str(&line);
    }
    output
}

/// "+5" / "-3" / "0"; positive deltas carry their sign.
fn signed(n: i32) -> String {
    if n > 0 { format!("+{n}") } else { n.to_string() }
}

/// Relief direction for hunger/thirst lines: a positive effect lowers the
/// vital, so it prints as a minus.
fn relief(n: i32) -> String {
    if n > 0 {
        format!("-{n}")
    } else {
        format!("+{}", n.abs())
    }
}

fn help(_state: &mut GameState, _arg: &str) -> CommandResult {
    Ok(String::from(
        "Available commands:\n\
         \x20 help - Show this help message\n\
         \x20 look - Look around your current location\n\
         \x20 go [direction] - Move in a direction (north, south, east, west)\n\
         \x20 take [item] - Pick up an item\n\
         \x20 drop [item] - Drop an item from your inventory\n\
         \x20 inventory - Show your inventory\n\
         \x20 status - Show your current status\n\
         \x20 use [item] - Use an item from your inventory\n\
         \x20 eat [food] - Eat food from your inventory\n\
         \x20 drink [water] - Drink water from your inventory\n\
         \x20 talk [character] - Talk to a character\n\
         \x20 quests - Show your active quests\n\
         \x20 time - Show the current time and day\n\
         \x20 wait - Wait for time to pass\n\
         \x20 examine [item/character] - Examine an item or character\n\
         \x20 equip [weapon] - Equip a weapon\n\
         \x20 attack [character] - Attack a character\n\
         \x20 search - Search the area for items",
    ))
}

fn look(state: &mut GameState, _arg: &str) -> CommandResult {
    let Some(player) = state.player.as_ref() else {
        return Ok(NO_PLAYER.to_string());
    };
    let Some(location) = state.locations.get_mut(&player.location) else {
        return Ok(NOWHERE.to_string());
    };
    location.explored = true;
    Ok(location.full_description())
}

fn go(state: &mut GameState, arg: &str) -> CommandResult {
    let Some(player) = state.player.as_mut() else {
        return Ok(NO_PLAYER.to_string());
    };
    if arg.is_empty() {
        return Ok(String::from("Go where? Please specify a direction."));
    }
    let Some(location) = state.locations.get(&player.location) else {
        return Ok(NOWHERE.to_string());
    };
    let Some(next_id) = location.exit(arg) else {
        return Ok(format!("You can't go {arg} from here."));
    };
    let next_id = next_id.clone();
    let Some(next) = state.locations.get(&next_id) else {
        return Err(CommandError::DanglingLocation(next_id));
    };
    let next_name = next.name.clone();
    let radiation_level = next.radiation_level;

    player.location = next_id;
    let mut result = format!("You go {arg} to {next_name}.\n");

    if radiation_level > 0 {
        let dose = radiation_level * 2;
        player.add_radiation(dose);
        result.push_str(&format!(
            "You are exposed to radiation. Radiation +{dose}\n"
        ));
    }

    // Moving takes time; the destination description is part of this
    // command's own output, not a recursive look.
    clock::advance_time(state);

    if let Some(player) = state.player.as_ref() {
        if let Some(next) = state.locations.get(&player.location) {
            result.push_str(&next.full_description());
        }
    }
    Ok(result)
}

fn take(state: &mut GameState, arg: &str) -> CommandResult {
    let Some(player) = state.player.as_mut() else {
        return Ok(NO_PLAYER.to_string());
    };
    if arg.is_empty() {
        return Ok(String::from("Take what? Please specify an item."));
    }
    let Some(location) = state.locations.get_mut(&player.location) else {
        return Ok(NOWHERE.to_string());
    };
    let Some(idx) = location.find_item(arg) else {
        return Ok(format!("There is no {arg} here."));
    };
    let item = location.remove_item(idx);
    let name = item.name.clone();
    player.character.add_item(item);
    Ok(format!("You take the {name}."))
}

fn drop_item(state: &mut GameState, arg: &str) -> CommandResult {
    let Some(player) = state.player.as_mut() else {
        return Ok(NO_PLAYER.to_string());
    };
    if arg.is_empty() {
        return Ok(String::from("Drop what? Please specify an item."));
    }
    let Some(location) = state.locations.get_mut(&player.location) else {
        return Ok(NOWHERE.to_string());
    };
    let Some(idx) = player.character.find_item(arg) else {
        return Ok(format!("You don't have a {arg}."));
    };
    let item = player.character.remove_item(idx);
    let name = item.name.clone();
    location.add_item(item);
    Ok(format!("You drop the {name}."))
}

fn inventory(state: &mut GameState, _arg: &str) -> CommandResult {
    let Some(player) = state.player.as_ref() else {
        return Ok(NO_PLAYER.to_string());
    };
    if player.character.inventory.is_empty() && player.equipped_weapon.is_none() {
        return Ok(String::from("Your inventory is empty."));
    }
    let mut result = String::from("Inventory:");
    for item in &player.character.inventory {
        result.push_str(&format!("\n- {}", item.describe()));
    }
    if let Some(weapon) = &player.equipped_weapon {
        result.push_str(&format!("\n\nEquipped Weapon: {}", weapon.describe()));
    }
    Ok(result)
}

fn status(state: &mut GameState, _arg: &str) -> CommandResult {
    let Some(player) = state.player.as_ref() else {
        return Ok(NO_PLAYER.to_string());
    };
    Ok(player.status())
}

fn use_item(state: &mut GameState, arg: &str) -> CommandResult {
    let Some(player) = state.player.as_mut() else {
        return Ok(NO_PLAYER.to_string());
    };
    if arg.is_empty() {
        return Ok(String::from("Use what? Please specify an item."));
    }
    let Some(idx) = player.character.find_item(arg) else {
        return Ok(format!("You don't have a {arg}."));
    };

    let item = &player.character.inventory[idx];
    let ItemKind::Consumable(spec) = &item.kind else {
        return Ok(format!("You can't use {}.", item.name));
    };
    if item.category != ItemCategory::Medicine {
        return Ok(format!(
            "You can't use {} like that. Try 'eat' or 'drink' instead.",
            item.name
        ));
    }
    let spec = *spec;
    let item = player.character.remove_item(idx);
    player.consume(&spec);
    Ok(format!(
        "You use the {}.\nHealth: {}\nRadiation: {}",
        item.name,
        signed(spec.health),
        signed(spec.radiation)
    ))
}

fn eat(state: &mut GameState, arg: &str) -> CommandResult {
    let Some(player) = state.player.as_mut() else {
        return Ok(NO_PLAYER.to_string());
    };
    if arg.is_empty() {
        return Ok(String::from("Eat what? Please specify a food item."));
    }
    let Some(idx) = player.character.find_item(arg) else {
        return Ok(format!("You don't have a {arg}."));
    };

    let item = &player.character.inventory[idx];
    let is_food = matches!(item.kind, ItemKind::Consumable(_)) && item.category == ItemCategory::Food;
    if !is_food {
        return Ok(format!("You can't eat {}.", item.name));
    }
    let item = player.character.remove_item(idx);
    let ItemKind::Consumable(spec) = item.kind else {
        return Ok(format!("You can't eat {}.", item.name));
    };
    player.consume(&spec);

    let mut result = format!("You eat the {}.\nHunger: {}", item.name, relief(spec.hunger));
    if spec.health != 0 {
        result.push_str(&format!("\nHealth: {}", signed(spec.health)));
    }
    if spec.radiation != 0 {
        result.push_str(&format!("\nRadiation: {}", signed(spec.radiation)));
    }
    Ok(result)
}

fn drink(state: &mut GameState, arg: &str) -> CommandResult {
    let Some(player) = state.player.as_mut() else {
        return Ok(NO_PLAYER.to_string());
    };
    if arg.is_empty() {
        return Ok(String::from("Drink what? Please specify a water item."));
    }
    let Some(idx) = player.character.find_item(arg) else {
        return Ok(format!("You don't have a {arg}."));
    };

    let item = &player.character.inventory[idx];
    let is_water =
        matches!(item.kind, ItemKind::Consumable(_)) && item.category == ItemCategory::Water;
    if !is_water {
        return Ok(format!("You can't drink {}.", item.name));
    }
    let item = player.character.remove_item(idx);
    let ItemKind::Consumable(spec) = item.kind else {
        return Ok(format!("You can't drink {}.", item.name));
    };
    player.consume(&spec);

    let mut result = format!(
        "You drink the {}.\nThirst: {}",
        item.name,
        relief(spec.thirst)
    );
    if spec.health != 0 {
        result.push_str(&format!("\nHealth: {}", signed(spec.health)));
    }
    if spec.radiation != 0 {
        result.push_str(&format!("\nRadiation: {}", signed(spec.radiation)));
    }
    Ok(result)
}

fn talk(state: &mut GameState, arg: &str) -> CommandResult {
    let Some(player) = state.player.as_mut() else {
        return Ok(NO_PLAYER.to_string());
    };
    if arg.is_empty() {
        return Ok(String::from("Talk to whom? Please specify a character."));
    }
    let Some(location) = state.locations.get_mut(&player.location) else {
        return Ok(NOWHERE.to_string());
    };

    // Try the whole argument as a name first so multi-word names resolve,
    // then fall back to splitting off a topic.
    let (npc_idx, topic) = match location.find_character(arg) {
        Some(idx) => (idx, ""),
        None => {
            let (name, topic) = match arg.split_once(char::is_whitespace) {
                Some((name, topic)) => (name, topic.trim()),
                None => (arg, ""),
            };
            match location.find_character(name) {
                Some(idx) => (idx, topic),
                None => return Ok(format!("There is no {name} here.")),
            }
        }
    };

    let npc = &mut location.characters[npc_idx];
    let mut result = if topic == "trades" {
        format!("{}: {}", npc.name(), npc.trade_list())
    } else {
        format!("{}: {}", npc.name(), npc.dialogue_for(topic))
    };

    // First successful dialogue with a survivor rescues them, exactly once.
    if npc.survivor && !npc.rescued {
        npc.rescued = true;
        player.find_survivor();
        result.push_str(&format!(
            "\n\nYou've found a survivor! Total survivors found: {}/{}",
            player.survivors_found, state.total_survivors
        ));
    }
    Ok(result)
}

fn quests_list(state: &mut GameState, _arg: &str) -> CommandResult {
    Ok(state.active_quests_list())
}

fn time(state: &mut GameState, _arg: &str) -> CommandResult {
    Ok(state.time_info())
}

fn wait(state: &mut GameState, _arg: &str) -> CommandResult {
    clock::advance_time(state);
    Ok(format!(
        "Time passes... It is now {}\n{}",
        state.time_info(),
        state.player_status()
    ))
}

fn examine(state: &mut GameState, arg: &str) -> CommandResult {
    let Some(player) = state.player.as_ref() else {
        return Ok(NO_PLAYER.to_string());
    };
    if arg.is_empty() {
        return Ok(String::from(
            "Examine what? Please specify an item or character.",
        ));
    }
    if let Some(item) = player.visible_item(arg) {
        return Ok(item.describe());
    }
    let Some(location) = state.locations.get(&player.location) else {
        return Ok(NOWHERE.to_string());
    };
    if let Some(idx) = location.find_item(arg) {
        return Ok(location.items[idx].describe());
    }
    if let Some(idx) = location.find_character(arg) {
        let npc = &location.characters[idx];
        return Ok(format!("{}: {}", npc.name(), npc.character.description));
    }
    Ok(format!("You don't see a {arg} here."))
}

fn equip(state: &mut GameState, arg: &str) -> CommandResult {
    let Some(player) = state.player.as_mut() else {
        return Ok(NO_PLAYER.to_string());
    };
    if arg.is_empty() {
        return Ok(String::from("Equip what? Please specify a weapon."));
    }
    let Some(idx) = player.character.find_item(arg) else {
        return Ok(format!("You don't have a {arg}."));
    };
    if player.character.inventory[idx].as_weapon().is_none() {
        return Ok(format!(
            "{} is not a weapon.",
            player.character.inventory[idx].name
        ));
    }
    let weapon = player.character.remove_item(idx);
    let name = weapon.name.clone();
    if let Some(previous) = player.equipped_weapon.replace(weapon) {
        player.character.add_item(previous);
    }
    Ok(format!("You equip the {name}."))
}

fn attack(state: &mut GameState, arg: &str) -> CommandResult {
    if state.player.is_none() {
        return Ok(NO_PLAYER.to_string());
    }
    if arg.is_empty() {
        return Ok(String::from("Attack whom? Please specify a character."));
    }
    Ok(combat::resolve_attack(state, arg))
}

fn search(state: &mut GameState, _arg: &str) -> CommandResult {
    let Some(player) = state.player.as_ref() else {
        return Ok(NO_PLAYER.to_string());
    };
    let location_id = player.location.clone();
    if !state.locations.contains_key(&location_id) {
        return Ok(NOWHERE.to_string());
    }

    let found = state
        .rng
        .as_mut()
        .and_then(|rng| scavenge::roll_search(rng));
    let text = if let Some(item) = found {
        let name = item.name.clone();
        if let Some(location) = state.locations.get_mut(&location_id) {
            location.add_item(item);
        }
        format!("You found something! A {name} has been added to this location.")
    } else {
        String::from("You search the area but find nothing of value.")
    };

    // Searching takes time whether or not anything turns up.
    clock::advance_time(state);
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Character, Npc};
    use crate::clock::TimeOfDay;
    use crate::item::{ConsumableSpec, Item};
    use crate::location::Location;
    use crate::player::Player;

    fn two_room_state() -> GameState {
        let mut state = GameState::default().with_seed(42);
        let mut bunker = Location::new("Bunker", "A cramped bunker.", "Home since the bombs.", true, 0);
        bunker.add_exit("up", "surface");
        let mut surface = Location::new(
            "Scorched Surface",
            "Scorched earth in every direction.",
            "Ash drifts over the broken ground.",
            false,
            3,
        );
        surface.add_exit("down", "bunker");
        state.add_location("bunker", bunker);
        state.add_location("surface", surface);
        state.initialize(Player::new("Survivor", "Test subject."), "bunker");
        state
    }

    #[test]
    fn empty_input_prompts_for_a_command() {
        let mut state = two_room_state();
        assert_eq!(process_command(&mut state, "   "), "Please enter a command.");
    }

    #[test]
    fn unknown_verbs_are_not_understood() {
        let mut state = two_room_state();
        assert_eq!(
            process_command(&mut state, "dance"),
            "I don't understand 'dance'. Type 'help' for a list of commands."
        );
    }

    #[test]
    fn input_is_trimmed_and_lowercased_before_dispatch() {
        let mut state = two_room_state();
        let output = process_command(&mut state, "  GO   UP  ");
        assert!(output.starts_with("You go up to Scorched Surface."));
    }

    #[test]
    fn go_without_an_exit_changes_nothing() {
        let mut state = two_room_state();
        let output = process_command(&mut state, "go north");
        assert_eq!(output, "You can't go north from here.");
        let player = state.player.as_ref().unwrap();
        assert_eq!(player.location, "bunker");
        assert_eq!(state.time, TimeOfDay::Morning);
        assert_eq!(state.day, 1);
    }

    #[test]
    fn go_applies_radiation_and_advances_the_clock() {
        let mut state = two_room_state();
        let output = process_command(&mut state, "go up");
        assert!(output.contains("You are exposed to radiation. Radiation +6"));
        let player = state.player.as_ref().unwrap();
        assert_eq!(player.radiation, 6);
        assert_eq!(player.location, "surface");
        assert_eq!(state.time, TimeOfDay::Afternoon);
        // The destination description is appended, short form first.
        assert!(output.contains("Scorched earth in every direction."));
    }

    #[test]
    fn go_to_a_dangling_exit_is_a_caught_fault() {
        let mut state = two_room_state();
        state
            .location_mut("bunker")
            .unwrap()
            .add_exit("west", "missing");
        let output = process_command(&mut state, "go west");
        assert!(output.starts_with("Error executing command:"));
        assert!(output.contains("missing"));
        // The turn loop survives and the player has not moved.
        assert_eq!(state.player.as_ref().unwrap().location, "bunker");
    }

    #[test]
    fn look_marks_the_location_explored() {
        let mut state = two_room_state();
        let output = process_command(&mut state, "look");
        assert!(state.location("bunker").unwrap().explored);
        assert!(output.contains("Home since the bombs."));
    }

    #[test]
    fn take_and_drop_round_trip_through_the_location() {
        let mut state = two_room_state();
        state.location_mut("bunker").unwrap().add_item(Item::plain(
            "Crowbar",
            "A pry bar.",
            2.5,
            ItemCategory::Tool,
            6,
        ));

        assert_eq!(process_command(&mut state, "take crowbar"), "You take the Crowbar.");
        assert!(state.location("bunker").unwrap().items.is_empty());

        assert_eq!(process_command(&mut state, "drop crowbar"), "You drop the Crowbar.");
        assert_eq!(state.location("bunker").unwrap().find_item("crowbar"), Some(0));
        assert_eq!(
            process_command(&mut state, "drop crowbar"),
            "You don't have a crowbar."
        );
    }

    #[test]
    fn eat_applies_deltas_and_removes_the_item() {
        let mut state = two_room_state();
        {
            let player = state.player.as_mut().unwrap();
            player.hunger = 50;
            player.character.health = 90;
            player.character.add_item(Item::consumable(
                "Ration",
                "Military ration.",
                0.4,
                ItemCategory::Food,
                4,
                ConsumableSpec {
                    health: 5,
                    hunger: 30,
                    ..ConsumableSpec::default()
                },
            ));
        }

        let output = process_command(&mut state, "eat ration");

        assert!(output.contains("You eat the Ration."));
        assert!(output.contains("Hunger: -30"));
        assert!(output.contains("Health: +5"));
        let player = state.player.as_ref().unwrap();
        assert_eq!(player.hunger, 20);
        assert_eq!(player.character.health, 95);
        assert!(player.character.inventory.is_empty());
    }

    #[test]
    fn eat_rejects_non_food() {
        let mut state = two_room_state();
        state
            .player
            .as_mut()
            .unwrap()
            .character
            .add_item(Item::weapon("Rusty Knife", "Not much.", 0.5, 5, 15, 5));
        assert_eq!(
            process_command(&mut state, "eat rusty knife"),
            "You can't eat Rusty Knife."
        );
    }

    #[test]
    fn use_is_for_medicine_only() {
        let mut state = two_room_state();
        {
            let player = state.player.as_mut().unwrap();
            player.radiation = 40;
            player.character.health = 60;
            player.character.add_item(Item::consumable(
                "Med Kit",
                "Basic supplies.",
                0.3,
                ItemCategory::Medicine,
                10,
                ConsumableSpec {
                    health: 30,
                    radiation: -10,
                    ..ConsumableSpec::default()
                },
            ));
            player.character.add_item(Item::consumable(
                "Water Bottle",
                "Somewhat clean.",
                1.0,
                ItemCategory::Water,
                5,
                ConsumableSpec {
                    thirst: 40,
                    ..ConsumableSpec::default()
                },
            ));
        }

        let output = process_command(&mut state, "use med kit");
        assert!(output.contains("You use the Med Kit."));
        assert!(output.contains("Health: +30"));
        assert!(output.contains("Radiation: -10"));
        let player = state.player.as_ref().unwrap();
        assert_eq!(player.character.health, 90);
        assert_eq!(player.radiation, 30);

        assert_eq!(
            process_command(&mut state, "use water bottle"),
            "You can't use Water Bottle like that. Try 'eat' or 'drink' instead."
        );
    }

    #[test]
    fn equip_swaps_weapons_through_the_slot() {
        let mut state = two_room_state();
        {
            let player = state.player.as_mut().unwrap();
            player
                .character
                .add_item(Item::weapon("Rusty Knife", "Not much.", 0.5, 5, 15, 5));
            player
                .character
                .add_item(Item::weapon("Metal Pipe", "Sturdy.", 2.0, 8, 25, 3));
        }

        assert_eq!(
            process_command(&mut state, "equip rusty knife"),
            "You equip the Rusty Knife."
        );
        assert_eq!(
            process_command(&mut state, "equip metal pipe"),
            "You equip the Metal Pipe."
        );

        let player = state.player.as_ref().unwrap();
        assert_eq!(player.equipped_weapon.as_ref().unwrap().name, "Metal Pipe");
        // The knife went back into the inventory.
        assert!(player.character.has_item("Rusty Knife"));
    }

    #[test]
    fn equip_rejects_non_weapons() {
        let mut state = two_room_state();
        state.player.as_mut().unwrap().character.add_item(Item::plain(
            "Map Fragment",
            "A torn map.",
            0.1,
            ItemCategory::Quest,
            20,
        ));
        assert_eq!(
            process_command(&mut state, "equip map fragment"),
            "Map Fragment is not a weapon."
        );
    }

    #[test]
    fn talk_resolves_multi_word_names_and_topics() {
        let mut state = two_room_state();
        {
            let mut hermit = Npc::new(
                Character::new("Forest Hermit", "Wild-looking.", 70, 10, 9, 15),
                true,
                true,
            );
            hermit.set_default_dialogue("The forest provides.");
            hermit.add_dialogue("healing", "Bring me clean water.");
            state.location_mut("bunker").unwrap().add_character(hermit);
        }

        let output = process_command(&mut state, "talk forest hermit");
        assert!(output.starts_with("Forest Hermit: The forest provides."));
        assert!(output.contains("You've found a survivor! Total survivors found: 1/12"));

        let output = process_command(&mut state, "talk hermit healing");
        assert_eq!(output, "There is no hermit here.");

        let output = process_command(&mut state, "talk forest hermit");
        // dialogue_for("hermit") is not a keyword; whole-name match wins.
        assert!(output.starts_with("Forest Hermit: The forest provides."));
        // Rescue fired exactly once.
        assert_eq!(state.player.as_ref().unwrap().survivors_found, 1);
    }

    #[test]
    fn talk_topic_lookup_still_works_for_single_word_names() {
        let mut state = two_room_state();
        {
            let mut doctor = Npc::new(
                Character::new("Doctor", "Tired-looking.", 60, 6, 18, 7),
                true,
                false,
            );
            doctor.add_dialogue("medicine", "I can treat your injuries.");
            state.location_mut("bunker").unwrap().add_character(doctor);
        }
        assert_eq!(
            process_command(&mut state, "talk doctor medicine"),
            "Doctor: I can treat your injuries."
        );
    }

    #[test]
    fn talk_trades_lists_the_stock() {
        let mut state = two_room_state();
        {
            let mut trader = Npc::new(
                Character::new("Trader", "Shrewd.", 70, 8, 12, 10),
                true,
                false,
            );
            trader.add_trade_item(Item::consumable(
                "Purified Water",
                "Clean, radiation-free water.",
                1.0,
                ItemCategory::Water,
                10,
                ConsumableSpec {
                    thirst: 50,
                    ..ConsumableSpec::default()
                },
            ));
            state.location_mut("bunker").unwrap().add_character(trader);
        }
        let output = process_command(&mut state, "talk trader trades");
        assert!(output.contains("I have these items to trade:"));
        assert!(output.contains("- Purified Water (Value: 10)"));
    }

    #[test]
    fn wait_advances_time_and_reports_status() {
        let mut state = two_room_state();
        let output = process_command(&mut state, "wait");
        assert!(output.starts_with("Time passes... It is now Day 1, Afternoon"));
        assert!(output.contains("Health: 100/100"));
        assert_eq!(state.time, TimeOfDay::Afternoon);
    }

    #[test]
    fn search_always_advances_the_clock() {
        let mut state = two_room_state();
        for _ in 0..4 {
            process_command(&mut state, "search");
        }
        assert_eq!(state.day, 2, "four searches roll the day over");
    }

    #[test]
    fn examine_checks_inventory_then_location_then_characters() {
        let mut state = two_room_state();
        state.location_mut("bunker").unwrap().add_character(Npc::new(
            Character::new("Old Man", "An elderly survivor.", 50, 5, 15, 5),
            true,
            true,
        ));
        assert_eq!(
            process_command(&mut state, "examine old man"),
            "Old Man: An elderly survivor."
        );
        assert_eq!(
            process_command(&mut state, "examine ghost"),
            "You don't see a ghost here."
        );
    }
}
