//! Combat: one deterministic attack exchange per `attack` command.
//!
//! Damage numbers are never randomized; the outcome is fully determined by
//! strength, weapon, and durability state.

use log::debug;

use crate::commands::{NO_PLAYER, NOWHERE};
use crate::state::{Ending, GameState};

/// Resolve `attack <name>` against the current location.
///
/// Refuses friendly targets. Otherwise: the player strikes for strength plus
/// weapon damage, the weapon loses one durability (and is destroyed at zero,
/// after the blow has already landed), a dead target spills its inventory
/// into the location and is removed, and a surviving target counterattacks
/// with its bare strength.
pub fn resolve_attack(state: &mut GameState, target_name: &str) -> String {
    let Some(player) = state.player.as_mut() else {
        return NO_PLAYER.to_string();
    };
    let Some(location) = state.locations.get_mut(&player.location) else {
        return NOWHERE.to_string();
    };
    let Some(target_idx) = location.find_character(target_name) else {
        return format!("There is no {target_name} here.");
    };

    if location.characters[target_idx].friendly {
        let name = location.characters[target_idx].name();
        return format!("{name} is friendly. Are you sure you want to attack them?");
    }

    let damage = player.attack_damage();
    let mut broken_weapon = None;
    if let Some(weapon) = player.equipped_weapon.as_mut() {
        if let Some(spec) = weapon.as_weapon_mut() {
            spec.durability -= 1;
            if spec.durability <= 0 {
                broken_weapon = Some(weapon.name.clone());
            }
        }
    }
    if broken_weapon.is_some() {
        player.equipped_weapon = None;
    }

    let target = &mut location.characters[target_idx];
    target.character.take_damage(damage);
    debug!(
        "combat: hit {} for {} (health now {})",
        target.name(),
        damage,
        target.character.health
    );

    let mut output = format!("You attack {} for {} damage!\n", target.name(), damage);
    if let Some(name) = broken_weapon {
        output.push_str(&format!("Your {name} breaks!\n"));
    }

    if target.character.is_alive() {
        let counter_damage = target.character.strength;
        let target_name = target.name().to_string();
        player.character.take_damage(counter_damage);
        output.push_str(&format!(
            "{target_name} attacks you for {counter_damage} damage!\n"
        ));
        if !player.is_alive() && state.ending.is_none() {
            state.ending = Some(Ending::Slain { by: target_name });
        }
    } else {
        let fallen = location.remove_character(target_idx);
        output.push_str(&format!("{} is defeated!\n", fallen.name()));
        location.items.extend(fallen.character.inventory);
    }

    output
}
