//! Search outcomes: the discovery roll and the weighted archetype bands.
//!
//! All rolls come through the caller's `Rng` so a seeded session replays
//! identically.

use rand::Rng;

use crate::item::{ConsumableSpec, Item, ItemCategory};

/// Percent chance that a search turns anything up.
pub const DISCOVERY_CHANCE: i32 = 40;

/// Roll a search: `None` roughly 60% of the time, otherwise an item from the
/// archetype bands.
pub fn roll_search<R: Rng>(rng: &mut R) -> Option<Item> {
    if rng.gen_range(0..100) >= DISCOVERY_CHANCE {
        return None;
    }
    let band = rng.gen_range(0..100);
    Some(discovery_for_roll(band, rng))
}

/// Map a 0-99 band roll onto an item archetype. Bands are contiguous and
/// ordered: food < 30 <= water < 60 <= medicine < 75 <= weapon < 90 <= valuable.
pub fn discovery_for_roll<R: Rng>(band: i32, rng: &mut R) -> Item {
    if band < 30 {
        Item::consumable(
            "Canned Food",
            "A dusty can of preserved food. Still edible... probably.",
            0.5,
            ItemCategory::Food,
            5,
            ConsumableSpec {
                health: 5,
                hunger: 30,
                radiation: rng.gen_range(0..5),
                ..ConsumableSpec::default()
            },
        )
    } else if band < 60 {
        Item::consumable(
            "Water Bottle",
            "A bottle of somewhat clean water.",
            1.0,
            ItemCategory::Water,
            5,
            ConsumableSpec {
                thirst: 40,
                radiation: rng.gen_range(0..3),
                ..ConsumableSpec::default()
            },
        )
    } else if band < 75 {
        Item::consumable(
            "Med Kit",
            "A small medical kit with basic supplies.",
            0.3,
            ItemCategory::Medicine,
            10,
            ConsumableSpec {
                health: 30,
                radiation: -10,
                ..ConsumableSpec::default()
            },
        )
    } else if band < 90 {
        Item::weapon(
            "Rusty Pipe",
            "A rusty metal pipe that can be used as a weapon.",
            2.0,
            10,
            20,
            8,
        )
    } else {
        Item::plain(
            "Valuable Trinket",
            "A small valuable item that might be worth something to the right person.",
            0.1,
            ItemCategory::Miscellaneous,
            15,
        )
    }
}
