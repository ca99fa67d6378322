//! Quest tracker: a fixed, ordered battery of trigger checks evaluated after
//! every dispatched command.
//!
//! Each trigger is a (quest, condition, effect) tuple evaluated uniformly.
//! Completion removes the quest from the active set, so a satisfied trigger
//! fires exactly once.

use log::debug;

use crate::item::{ConsumableSpec, Item, ItemCategory};
use crate::state::GameState;

/// The main quest; completing it is the win condition.
pub const MAIN_QUEST: &str = "Find Survivors";

/// Predicate over current state deciding whether a trigger fires.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// Carrying any one of the named items while the named NPC is present at
    /// the current location. The first item found is the one delivered.
    DeliverAnyOf {
        items: &'static [&'static str],
        npc: &'static str,
    },
    /// Standing in the named location without the marker item yet; used for
    /// staged discoveries that hand the player a quest item.
    DiscoverAt {
        location: &'static str,
        grants_missing: &'static str,
    },
    /// Standing in the named location well-armed and healthy enough.
    ProvenAt {
        location: &'static str,
        min_weapon_damage: i32,
        min_health: i32,
    },
}

/// What a fired trigger does to the world.
#[derive(Debug, Clone, Copy)]
pub struct Effect {
    /// Remove the item matched by the condition.
    pub consume_match: bool,
    /// Move the quest from the active set to the completed set.
    pub complete: bool,
    pub reward: Option<fn() -> Item>,
    /// Count one more survivor toward the win condition.
    pub rescue: bool,
    pub narration: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct QuestTrigger {
    pub quest: &'static str,
    pub when: Condition,
    pub then: Effect,
}

fn map_fragment() -> Item {
    Item::plain(
        "Map Fragment",
        "A torn piece of a map showing the location of a hidden bunker.",
        0.1,
        ItemCategory::Quest,
        20,
    )
}

fn research_documents() -> Item {
    Item::plain(
        "Research Documents",
        "Medical research documents about radiation treatment.",
        0.2,
        ItemCategory::Quest,
        30,
    )
}

fn advanced_rad_away() -> Item {
    Item::consumable(
        "Advanced Rad-Away",
        "A powerful anti-radiation medicine developed by the Doctor.",
        0.2,
        ItemCategory::Medicine,
        40,
        ConsumableSpec {
            radiation: -50,
            ..ConsumableSpec::default()
        },
    )
}

fn family_locket() -> Item {
    Item::plain(
        "Family Locket",
        "A locket with a family photo inside. It belongs to the missing parents.",
        0.1,
        ItemCategory::Quest,
        10,
    )
}

fn herbal_medicine() -> Item {
    Item::consumable(
        "Herbal Medicine",
        "A potent medicine made from forest plants. Heals and reduces radiation.",
        0.3,
        ItemCategory::Medicine,
        25,
        ConsumableSpec {
            health: 30,
            radiation: -20,
            ..ConsumableSpec::default()
        },
    )
}

fn military_rifle() -> Item {
    Item::weapon(
        "Military Rifle",
        "A well-maintained military rifle with a scope.",
        4.0,
        25,
        40,
        50,
    )
}

/// The fixed trigger battery, in evaluation order.
pub static TRIGGERS: &[QuestTrigger] = &[
    QuestTrigger {
        quest: "Help the Old Man",
        when: Condition::DeliverAnyOf {
            items: &["Antibiotics", "First Aid Kit", "Med Kit"],
            npc: "Old Man",
        },
        then: Effect {
            consume_match: true,
            complete: true,
            reward: Some(map_fragment),
            rescue: false,
            narration: &[
                "You give the medicine to the Old Man.",
                "Old Man: Thank you, my joints have been giving me trouble. Here, take this. I found it but have no use for it.",
                "You received: Map Fragment",
            ],
        },
    },
    QuestTrigger {
        quest: "Medical Research",
        when: Condition::DiscoverAt {
            location: "Underground Laboratory",
            grants_missing: "Research Documents",
        },
        then: Effect {
            consume_match: false,
            complete: false,
            reward: Some(research_documents),
            rescue: false,
            narration: &[
                "You found research documents that might help the Doctor with her radiation treatment research.",
            ],
        },
    },
    QuestTrigger {
        quest: "Medical Research",
        when: Condition::DeliverAnyOf {
            items: &["Research Documents"],
            npc: "Doctor",
        },
        then: Effect {
            consume_match: true,
            complete: true,
            reward: Some(advanced_rad_away),
            rescue: false,
            narration: &[
                "You give the research documents to the Doctor.",
                "Doctor: This is exactly what I needed! With this research, I can develop better radiation treatments. Here, take this as thanks.",
                "You received: Advanced Rad-Away",
            ],
        },
    },
    QuestTrigger {
        quest: "Find Missing Parents",
        when: Condition::DiscoverAt {
            location: "Ruined City",
            grants_missing: "Family Locket",
        },
        then: Effect {
            consume_match: false,
            complete: false,
            reward: Some(family_locket),
            rescue: false,
            narration: &[
                "Among the ruins, you find a locket with a family photo. You recognize the Child's parents from the picture. There are signs of a struggle nearby. It doesn't look good.",
            ],
        },
    },
    QuestTrigger {
        quest: "Find Missing Parents",
        when: Condition::DeliverAnyOf {
            items: &["Family Locket"],
            npc: "Child",
        },
        then: Effect {
            consume_match: true,
            complete: true,
            reward: None,
            rescue: true,
            narration: &[
                "With a heavy heart, you show the locket to the Child.",
                "Child: That's... that's my mom's. They're not coming back, are they?",
                "The Child takes the locket with trembling hands. After a moment of silence, they look up at you with determination.",
                "Child: I want to be strong, like you. Can you teach me how to survive out here?",
                "You've gained the Child's trust. They will now help at the settlement, and you've effectively saved another survivor.",
            ],
        },
    },
    QuestTrigger {
        quest: "Forest Medicine",
        when: Condition::DeliverAnyOf {
            items: &["Purified Water", "Clean Water"],
            npc: "Forest Hermit",
        },
        then: Effect {
            consume_match: true,
            complete: true,
            reward: Some(herbal_medicine),
            rescue: false,
            narration: &[
                "You give the clean water to the Forest Hermit.",
                "Forest Hermit: Good, good. Now watch carefully as I prepare this medicine. The forest provides everything we need, if we respect it.",
                "You received: Herbal Medicine and knowledge of how to make more.",
            ],
        },
    },
    QuestTrigger {
        quest: "Secure the Perimeter",
        when: Condition::ProvenAt {
            location: "Military Bunker",
            min_weapon_damage: 10,
            min_health: 50,
        },
        then: Effect {
            consume_match: false,
            complete: true,
            reward: Some(military_rifle),
            rescue: true,
            narration: &[
                "You help the Veteran secure the perimeter, fighting off several hostile mutants.",
                "Veteran: Good work, soldier. The perimeter is secure for now. As promised, here's something from my stockpile.",
                "You received: Military Rifle",
                "The Veteran agrees to help coordinate defense for any survivors you find. You've effectively recruited another survivor to your cause.",
            ],
        },
    },
];

struct TriggerMatch {
    /// Inventory index of the delivered item, for conditions that match one.
    consumed_item: Option<usize>,
}

fn condition_met(state: &GameState, trigger: &QuestTrigger) -> Option<TriggerMatch> {
    let player = state.player.as_ref()?;
    if !player.quest_active(trigger.quest) {
        return None;
    }
    let location = state.locations.get(&player.location)?;

    match &trigger.when {
        Condition::DeliverAnyOf { items, npc } => {
            let idx = items
                .iter()
                .find_map(|name| player.character.find_item(name))?;
            location.find_character(npc)?;
            Some(TriggerMatch {
                consumed_item: Some(idx),
            })
        }
        Condition::DiscoverAt {
            location: name,
            grants_missing,
        } => {
            if location.name == *name && !player.character.has_item(grants_missing) {
                Some(TriggerMatch {
                    consumed_item: None,
                })
            } else {
                None
            }
        }
        Condition::ProvenAt {
            location: name,
            min_weapon_damage,
            min_health,
        } => {
            if location.name != *name {
                return None;
            }
            let weapon_damage = player
                .equipped_weapon
                .as_ref()
                .and_then(Item::as_weapon)
                .map_or(0, |spec| spec.damage);
            if weapon_damage >= *min_weapon_damage && player.character.health >= *min_health {
                Some(TriggerMatch {
                    consumed_item: None,
                })
            } else {
                None
            }
        }
    }
}

fn apply_effect(
    state: &mut GameState,
    trigger: &QuestTrigger,
    matched: &TriggerMatch,
    lines: &mut Vec<String>,
) {
    let Some(player) = state.player.as_mut() else {
        return;
    };
    if trigger.then.consume_match {
        if let Some(idx) = matched.consumed_item {
            player.character.remove_item(idx);
        }
    }
    if trigger.then.complete {
        player.complete_quest(trigger.quest);
        debug!("quest completed: {}", trigger.quest);
    }
    if let Some(reward) = trigger.then.reward {
        player.character.add_item(reward());
    }
    if trigger.then.rescue {
        player.find_survivor();
    }
    lines.extend(trigger.then.narration.iter().map(|line| (*line).to_string()));
}

/// Run the whole battery once, then the aggregate victory check. Returns the
/// narration produced by any fired triggers.
pub fn evaluate(state: &mut GameState) -> Vec<String> {
    let mut lines = Vec::new();
    if state.player.is_none() {
        return lines;
    }

    for trigger in TRIGGERS {
        if let Some(matched) = condition_met(state, trigger) {
            apply_effect(state, trigger, &matched, &mut lines);
        }
    }

    let survivors = state.player.as_ref().map_or(0, |p| p.survivors_found);
    if survivors >= state.total_survivors {
        if let Some(player) = state.player.as_mut() {
            player.complete_quest(MAIN_QUEST);
        }
        state.check_victory();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Character, Npc};
    use crate::location::Location;
    use crate::player::Player;
    use crate::state::Ending;

    fn state_with(location_key: &str, location: Location, quests: &[&str]) -> GameState {
        let mut state = GameState::default();
        state.add_location(location_key, location);
        let mut player = Player::new("Survivor", "Test subject.");
        for quest in quests {
            player.add_quest(quest);
        }
        state.initialize(player, location_key);
        state
    }

    fn npc(name: &str) -> Npc {
        Npc::new(Character::new(name, "Somebody.", 50, 5, 10, 5), true, true)
    }

    #[test]
    fn delivery_consumes_the_item_and_completes_once() {
        let mut wasteland = Location::new("Desolate Wasteland", "Barren.", "Scorched.", false, 2);
        wasteland.add_character(npc("Old Man"));
        let mut state = state_with("wasteland", wasteland, &["Help the Old Man"]);
        state
            .player
            .as_mut()
            .unwrap()
            .character
            .add_item(super::advanced_rad_away()); // not a trigger item
        state
            .player
            .as_mut()
            .unwrap()
            .character
            .add_item(Item::consumable(
                "Antibiotics",
                "Treats infections.",
                0.1,
                ItemCategory::Medicine,
                15,
                ConsumableSpec {
                    health: 20,
                    radiation: -5,
                    ..ConsumableSpec::default()
                },
            ));

        let lines = evaluate(&mut state);

        assert!(lines.iter().any(|l| l == "You give the medicine to the Old Man."));
        let player = state.player.as_ref().unwrap();
        assert!(!player.character.has_item("Antibiotics"));
        assert!(player.character.has_item("Map Fragment"));
        assert!(player.character.has_item("Advanced Rad-Away"));
        assert!(!player.quest_active("Help the Old Man"));
        assert!(player.completed_quests.contains(&String::from("Help the Old Man")));

        // Idempotent: the quest left the active set, so nothing fires again.
        assert!(evaluate(&mut state).is_empty());
    }

    #[test]
    fn staged_discovery_grants_the_marker_item_once() {
        let lab = Location::new(
            "Underground Laboratory",
            "A hidden laboratory.",
            "Terminals still flicker.",
            false,
            2,
        );
        let mut state = state_with("lab", lab, &["Medical Research"]);

        let lines = evaluate(&mut state);
        assert_eq!(lines.len(), 1);
        assert!(state.player.as_ref().unwrap().character.has_item("Research Documents"));
        // The quest is still active; only delivery to the Doctor completes it.
        assert!(state.player.as_ref().unwrap().quest_active("Medical Research"));

        // Standing around does not duplicate the documents.
        assert!(evaluate(&mut state).is_empty());
        let player = state.player.as_ref().unwrap();
        let count = player
            .character
            .inventory
            .iter()
            .filter(|item| item.name == "Research Documents")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn discovery_then_delivery_spans_two_locations() {
        let lab = Location::new(
            "Underground Laboratory",
            "A hidden laboratory.",
            "Terminals still flicker.",
            false,
            2,
        );
        let mut hospital = Location::new("Abandoned Hospital", "Dilapidated.", "Decay.", false, 2);
        hospital.add_character(npc("Doctor"));

        let mut state = state_with("lab", lab, &["Medical Research"]);
        state.add_location("hospital", hospital);

        evaluate(&mut state);
        state.player.as_mut().unwrap().location = String::from("hospital");
        let lines = evaluate(&mut state);

        assert!(lines.iter().any(|l| l.contains("exactly what I needed")));
        let player = state.player.as_ref().unwrap();
        assert!(!player.character.has_item("Research Documents"));
        assert!(player.character.has_item("Advanced Rad-Away"));
        assert!(!player.quest_active("Medical Research"));
    }

    #[test]
    fn locket_delivery_rescues_a_survivor() {
        let mut settlement = Location::new("Survivor Settlement", "Makeshift.", "Guarded.", true, 1);
        settlement.add_character(npc("Child"));
        let mut state = state_with("settlement", settlement, &["Find Missing Parents"]);
        state
            .player
            .as_mut()
            .unwrap()
            .character
            .add_item(super::family_locket());

        evaluate(&mut state);

        let player = state.player.as_ref().unwrap();
        assert_eq!(player.survivors_found, 1);
        assert!(!player.character.has_item("Family Locket"));
        assert!(!player.quest_active("Find Missing Parents"));
    }

    #[test]
    fn perimeter_needs_both_weapon_and_health() {
        let base = Location::new("Military Bunker", "Sealed.", "Reinforced.", false, 1);
        let mut state = state_with("base", base, &["Secure the Perimeter"]);

        // Unarmed: nothing happens.
        assert!(evaluate(&mut state).is_empty());

        // Armed but battered: still nothing.
        {
            let player = state.player.as_mut().unwrap();
            player.equipped_weapon = Some(Item::weapon("Military Knife", "Sharp.", 1.0, 15, 50, 20));
            player.character.health = 40;
        }
        assert!(evaluate(&mut state).is_empty());

        // Armed and healthy: completes with the rifle and a rescue.
        state.player.as_mut().unwrap().character.health = 80;
        let lines = evaluate(&mut state);
        assert!(lines.iter().any(|l| l.contains("Good work, soldier.")));
        let player = state.player.as_ref().unwrap();
        assert!(player.character.has_item("Military Rifle"));
        assert_eq!(player.survivors_found, 1);
    }

    #[test]
    fn reaching_the_survivor_target_completes_the_main_quest() {
        let bunker = Location::new("Underground Bunker", "Cramped.", "Low supplies.", true, 0);
        let mut state = state_with("bunker", bunker, &[MAIN_QUEST]);
        state.player.as_mut().unwrap().survivors_found = state.total_survivors;

        evaluate(&mut state);

        assert!(state.is_game_over());
        assert!(matches!(state.ending, Some(Ending::Victory { .. })));
        let player = state.player.as_ref().unwrap();
        assert!(player.completed_quests.contains(&String::from(MAIN_QUEST)));
    }
}
