//! World seed data and flavor pools: the wasteland graph, its people, the
//! quest registry, and the player's starting kit. Pure data handed to the
//! engine at initialization; the renderer owns how the pools are shown.

use crate::character::{Character, Npc};
use crate::item::{ConsumableSpec, Item, ItemCategory};
use crate::location::Location;
use crate::player::Player;
use crate::quests::MAIN_QUEST;
use crate::state::GameState;

/// Build a fresh, fully-populated game seeded for deterministic play.
#[must_use]
pub fn new_game(seed: u64) -> GameState {
    let mut state = GameState::default().with_seed(seed);
    build_locations(&mut state);
    build_quest_catalog(&mut state);

    let mut player = Player::new(
        "Survivor",
        "A survivor of the nuclear apocalypse, searching for others.",
    );
    player.add_quest(MAIN_QUEST);
    player.add_quest("Help the Old Man");
    player.add_quest("Medical Research");
    player.add_quest("Find Missing Parents");
    player.add_quest("Secure the Perimeter");
    player.add_quest("Forest Medicine");

    player.character.add_item(Item::consumable(
        "Stale Bread",
        "A piece of stale bread. Better than nothing.",
        0.2,
        ItemCategory::Food,
        2,
        ConsumableSpec {
            hunger: 15,
            ..ConsumableSpec::default()
        },
    ));
    player.character.add_item(Item::consumable(
        "Water Flask",
        "A small flask of clean water.",
        0.5,
        ItemCategory::Water,
        3,
        ConsumableSpec {
            thirst: 20,
            ..ConsumableSpec::default()
        },
    ));
    player.equipped_weapon = Some(Item::weapon(
        "Rusty Knife",
        "A rusty knife. Not much, but it's something.",
        0.5,
        5,
        15,
        5,
    ));

    state.initialize(player, "bunker");
    build_npcs(&mut state);
    state
}

fn build_locations(state: &mut GameState) {
    let bunker = Location::new(
        "Underground Bunker",
        "A small underground bunker that has protected you from the worst of the radiation.",
        "This cramped underground bunker has been your home since the bombs fell. It's stocked with basic supplies, but they're running low. The air filtration system is failing, and you know you can't stay here much longer. A ladder leads up to the surface.",
        true,
        0,
    );
    state.add_location("bunker", bunker);

    let mut wasteland = Location::new(
        "Desolate Wasteland",
        "A barren wasteland stretches out before you, the ground scorched and lifeless.",
        "The landscape is unrecognizable from what it once was. The ground is cracked and scorched, with no vegetation in sight. The air is thick with dust, and you can see the ruins of buildings in the distance. The sky has a sickly yellow tint to it.",
        false,
        2,
    );
    wasteland.add_item(Item::consumable(
        "Dirty Water",
        "A puddle of contaminated water. Drinking it would be risky.",
        1.0,
        ItemCategory::Water,
        1,
        ConsumableSpec {
            thirst: 15,
            radiation: 10,
            ..ConsumableSpec::default()
        },
    ));
    state.add_location("wasteland", wasteland);

    let mut ruined_city = Location::new(
        "Ruined City",
        "The skeletal remains of a once-thriving city rise from the wasteland.",
        "Crumbling skyscrapers and collapsed buildings create a maze of concrete and steel. The streets are littered with abandoned vehicles and debris. Occasionally, you hear strange noises echoing through the empty streets. This place feels dangerous, but might contain valuable supplies.",
        false,
        3,
    );
    ruined_city.add_item(Item::weapon(
        "Metal Pipe",
        "A sturdy metal pipe that could be used as a weapon.",
        2.0,
        8,
        25,
        3,
    ));
    state.add_location("ruined_city", ruined_city);

    let settlement = Location::new(
        "Survivor Settlement",
        "A small settlement of survivors who have banded together.",
        "This makeshift settlement is built from scavenged materials and fortified against the dangers of the wasteland. A few dozen people live here, trading goods and information. They look at you with a mixture of suspicion and hope. Guards patrol the perimeter, armed with improvised weapons.",
        true,
        1,
    );
    state.add_location("settlement", settlement);

    let mut hospital = Location::new(
        "Abandoned Hospital",
        "A dilapidated hospital that might contain valuable medical supplies.",
        "The hospital is in a state of disrepair, with collapsed sections and debris everywhere. Medical equipment lies scattered about, most of it broken or useless. The air smells of antiseptic and decay. Dark corridors lead deeper into the building, where who knows what might lurk.",
        false,
        2,
    );
    hospital.add_item(Item::consumable(
        "Antibiotics",
        "A bottle of antibiotics that could treat infections.",
        0.1,
        ItemCategory::Medicine,
        15,
        ConsumableSpec {
            health: 20,
            radiation: -5,
            ..ConsumableSpec::default()
        },
    ));
    state.add_location("hospital", hospital);

    let mut forest = Location::new(
        "Mutated Forest",
        "A forest of twisted, mutated trees and strange vegetation.",
        "The trees here have been warped by radiation, growing in impossible shapes with glowing fungus clinging to their trunks. Strange sounds come from deep within the forest, and you occasionally glimpse movement between the trees. Despite the danger, there might be edible plants or clean water here.",
        false,
        4,
    );
    forest.add_item(Item::consumable(
        "Wild Berries",
        "Berries growing in the mutated forest. They look edible... maybe.",
        0.2,
        ItemCategory::Food,
        2,
        ConsumableSpec {
            hunger: 10,
            radiation: 5,
            ..ConsumableSpec::default()
        },
    ));
    state.add_location("forest", forest);

    let mut military_base = Location::new(
        "Military Bunker",
        "A sealed military bunker that might contain weapons and supplies.",
        "This reinforced bunker was designed to withstand nuclear attacks. The entrance is heavily secured, but someone has managed to force it open. Inside, you can see military-grade equipment and supplies. This place would have been a treasure trove right after the war, but it's been picked over by scavengers.",
        false,
        1,
    );
    military_base.add_item(Item::weapon(
        "Military Knife",
        "A well-maintained military combat knife.",
        1.0,
        15,
        50,
        20,
    ));
    state.add_location("military_base", military_base);

    let crater = Location::new(
        "Radioactive Crater",
        "A highly radioactive crater where a nuclear bomb detonated.",
        "The ground here is glass-like, fused by the intense heat of a nuclear explosion. Your Geiger counter is clicking frantically, warning of the extreme radiation levels. Strange, mutated creatures can be seen in the distance, warped beyond recognition. Only the desperate or foolish would linger here.",
        false,
        5,
    );
    state.add_location("radioactive_crater", crater);

    let mut underground_lab = Location::new(
        "Underground Laboratory",
        "A hidden laboratory that was conducting secret experiments.",
        "This high-tech facility is surprisingly intact, protected deep underground. Computer terminals still flicker with power, and scientific equipment lines the walls. Documents scattered around hint at experimental research that might have contributed to the current state of the world. There might be valuable technology or information here.",
        false,
        2,
    );
    underground_lab.add_item(Item::consumable(
        "Rad-X",
        "An experimental anti-radiation drug.",
        0.1,
        ItemCategory::Medicine,
        25,
        ConsumableSpec {
            radiation: -30,
            ..ConsumableSpec::default()
        },
    ));
    state.add_location("underground_lab", underground_lab);

    let mut coastline = Location::new(
        "Toxic Coastline",
        "A coastline where toxic waste has polluted the water.",
        "The ocean has turned a sickly green color, with dead fish washing up on the shore. The beach is littered with industrial waste and debris. Despite the contamination, you can see signs that people have been living here, perhaps fishing or scavenging from the washed-up debris.",
        false,
        3,
    );
    coastline.add_item(Item::consumable(
        "Mutated Fish",
        "A strange fish with multiple eyes. Probably not safe to eat.",
        1.0,
        ItemCategory::Food,
        5,
        ConsumableSpec {
            health: -5,
            hunger: 25,
            radiation: 15,
            ..ConsumableSpec::default()
        },
    ));
    state.add_location("coastline", coastline);

    let exits: &[(&str, &str, &str)] = &[
        ("bunker", "up", "wasteland"),
        ("wasteland", "down", "bunker"),
        ("wasteland", "north", "ruined_city"),
        ("wasteland", "east", "settlement"),
        ("wasteland", "south", "forest"),
        ("wasteland", "west", "radioactive_crater"),
        ("ruined_city", "south", "wasteland"),
        ("ruined_city", "east", "hospital"),
        ("ruined_city", "north", "underground_lab"),
        ("settlement", "west", "wasteland"),
        ("settlement", "north", "hospital"),
        ("hospital", "west", "ruined_city"),
        ("hospital", "south", "settlement"),
        ("forest", "north", "wasteland"),
        ("forest", "east", "coastline"),
        ("radioactive_crater", "east", "wasteland"),
        ("radioactive_crater", "west", "military_base"),
        ("underground_lab", "south", "ruined_city"),
        ("coastline", "west", "forest"),
        ("military_base", "east", "radioactive_crater"),
    ];
    for &(from, direction, to) in exits {
        if let Some(location) = state.location_mut(from) {
            location.add_exit(direction, to);
        }
    }
}

fn build_npcs(state: &mut GameState) {
    let mut old_man = Npc::new(
        Character::new(
            "Old Man",
            "An elderly survivor with a weathered face and knowing eyes.",
            50,
            5,
            15,
            5,
        ),
        true,
        true,
    );
    old_man.set_default_dialogue(
        "I've been surviving out here since the bombs fell. Not many of us left now.",
    );
    old_man.add_dialogue(
        "survivors",
        "There's a settlement to the east where some folks have gathered. Be careful though, not everyone out here is friendly.",
    );
    old_man.add_dialogue(
        "radiation",
        "The radiation's worst in the crater to the west. Stay away from there if you value your life.",
    );
    old_man.add_dialogue(
        "food",
        "You can find some edible plants in the forest to the south, but be careful what you eat.",
    );
    old_man.add_dialogue(
        "water",
        "Clean water is hard to come by. The settlement has a purification system, but they don't share freely.",
    );
    old_man.add_dialogue(
        "help",
        "I'm too old to travel, but if you find medical supplies, I could use some for my joints.",
    );
    add_npc(state, "wasteland", old_man);

    let mut trader = Npc::new(
        Character::new(
            "Trader",
            "A shrewd-looking person with a backpack full of scavenged goods.",
            70,
            8,
            12,
            10,
        ),
        true,
        true,
    );
    trader.set_default_dialogue("Looking to trade? I've got supplies if you've got something valuable.");
    trader.add_dialogue(
        "trade",
        "I can offer you clean water, food, or medicine in exchange for weapons or valuable items.",
    );
    trader.add_dialogue(
        "survivors",
        "I travel between survivor groups. There are pockets of people all over, trying to rebuild.",
    );
    trader.add_dialogue(
        "information",
        "Information is valuable in this world. I might know something that could help you, for the right price.",
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
    trader.add_trade_item(Item::consumable(
        "Canned Beans",
        "A preserved can of beans. A rare find.",
        0.5,
        ItemCategory::Food,
        8,
        ConsumableSpec {
            hunger: 40,
            ..ConsumableSpec::default()
        },
    ));
    trader.add_trade_item(Item::consumable(
        "First Aid Kit",
        "A well-stocked first aid kit.",
        1.0,
        ItemCategory::Medicine,
        15,
        ConsumableSpec {
            health: 50,
            radiation: -10,
            ..ConsumableSpec::default()
        },
    ));
    add_npc(state, "settlement", trader);

    let mut doctor = Npc::new(
        Character::new(
            "Doctor",
            "A tired-looking woman wearing a stained lab coat.",
            60,
            6,
            18,
            7,
        ),
        true,
        true,
    );
    doctor.set_default_dialogue("I'm trying to help people with limited supplies. What do you need?");
    doctor.add_dialogue(
        "radiation",
        "I'm working on better treatments for radiation sickness. If you find any medical research in the underground lab, bring it to me.",
    );
    doctor.add_dialogue(
        "medicine",
        "I can treat your injuries or radiation sickness if you have something to trade.",
    );
    doctor.add_dialogue(
        "survivors",
        "I've treated several survivors who came from the coast. They mentioned others hiding in caves there.",
    );
    add_npc(state, "hospital", doctor);

    let mut child = Npc::new(
        Character::new(
            "Child",
            "A young child, dirty and thin, but with a resilient spirit.",
            30,
            3,
            8,
            12,
        ),
        true,
        true,
    );
    child.set_default_dialogue("Are you going to help us? My parents are missing.");
    child.add_dialogue(
        "parents",
        "They went to the city to find medicine and never came back. Can you look for them?",
    );
    child.add_dialogue(
        "survivors",
        "There are other kids at the settlement. The adults try to protect us.",
    );
    add_npc(state, "settlement", child);

    let mut scientist = Npc::new(
        Character::new(
            "Scientist",
            "A gaunt man in a tattered lab coat, clutching a notebook.",
            45,
            4,
            20,
            6,
        ),
        true,
        true,
    );
    scientist.set_default_dialogue("My research... I need to complete my research. It could help everyone.");
    scientist.add_dialogue(
        "research",
        "I was working on a way to neutralize radiation in the soil. My notes are still in the lab.",
    );
    scientist.add_dialogue(
        "lab",
        "The underground laboratory has everything I need, but it's overrun with those... things.",
    );
    add_npc(state, "underground_lab", scientist);

    let mut veteran = Npc::new(
        Character::new(
            "Veteran",
            "A stern-looking person in tattered military fatigues.",
            80,
            15,
            10,
            12,
        ),
        true,
        true,
    );
    veteran.set_default_dialogue("State your business. This area is under my protection.");
    veteran.add_dialogue(
        "military",
        "I was stationed at the base when the bombs fell. Been guarding the weapons cache ever since.",
    );
    veteran.add_dialogue(
        "weapons",
        "I've got a stockpile inside. Could spare some if you help me secure the perimeter.",
    );
    add_npc(state, "military_base", veteran);

    let mut fisherman = Npc::new(
        Character::new(
            "Fisherman",
            "A weathered individual with a makeshift fishing rod.",
            65,
            9,
            7,
            10,
        ),
        true,
        true,
    );
    fisherman.set_default_dialogue("The waters are poisoned, but sometimes you can catch something edible.");
    fisherman.add_dialogue(
        "fish",
        "Most are mutated, but some are safe to eat if you know what to look for.",
    );
    fisherman.add_dialogue(
        "coast",
        "There's a group of survivors living in caves further down the coast. They're cautious of strangers.",
    );
    add_npc(state, "coastline", fisherman);

    let mut hermit = Npc::new(
        Character::new(
            "Forest Hermit",
            "A wild-looking person who seems to have adapted to life in the mutated forest.",
            70,
            10,
            9,
            15,
        ),
        true,
        true,
    );
    hermit.set_default_dialogue("The forest provides, if you know its secrets.");
    hermit.add_dialogue(
        "forest",
        "The radiation changed everything, but new life always finds a way. Some plants here have healing properties.",
    );
    hermit.add_dialogue(
        "healing",
        "Bring me some clean water, and I'll show you how to make medicine from the forest plants.",
    );
    add_npc(state, "forest", hermit);

    let mut raider = Npc::new(
        Character::new(
            "Raider",
            "A vicious-looking person with makeshift armor and weapons.",
            60,
            12,
            6,
            8,
        ),
        false,
        false,
    );
    raider.set_default_dialogue("Hand over your supplies and maybe I'll let you live!");
    add_npc(state, "ruined_city", raider);

    let mut mutant = Npc::new(
        Character::new(
            "Mutant",
            "A heavily deformed humanoid, affected by extreme radiation.",
            100,
            15,
            3,
            5,
        ),
        false,
        false,
    );
    mutant.set_default_dialogue("Grrraaahhhh!");
    add_npc(state, "radioactive_crater", mutant);
}

fn add_npc(state: &mut GameState, location_key: &str, npc: Npc) {
    if let Some(location) = state.location_mut(location_key) {
        location.add_character(npc);
    }
}

fn build_quest_catalog(state: &mut GameState) {
    state.add_quest_description(
        MAIN_QUEST,
        "Search for survivors across the wasteland and bring them to safety.",
    );
    state.add_quest_description(
        "Help the Old Man",
        "Find medicine for the Old Man's joint pain.",
    );
    state.add_quest_description(
        "Medical Research",
        "Find medical research documents in the underground lab for the Doctor.",
    );
    state.add_quest_description(
        "Find Missing Parents",
        "Look for the Child's missing parents in the ruined city.",
    );
    state.add_quest_description(
        "Secure the Perimeter",
        "Help the Veteran secure the military base perimeter.",
    );
    state.add_quest_description(
        "Forest Medicine",
        "Bring clean water to the Forest Hermit to learn about medicinal plants.",
    );
    state.add_quest_description(
        "Clean Water",
        "Find a way to purify irradiated water for the settlement.",
    );
    state.add_quest_description(
        "Secure Supplies",
        "Gather essential supplies (food, medicine, tools) for long-term survival.",
    );
    state.add_quest_description(
        "Neutralize Radiation",
        "Find a way to reduce radiation in a small area to allow for farming.",
    );
}

/// Ambient sights the renderer may sprinkle into wasteland travel.
pub static WASTELAND_SIGHTS: &[&str] = &[
    "The barren landscape stretches out before you, broken only by the occasional twisted piece of metal or crumbling concrete.",
    "Dust swirls around your feet as you walk across the scorched earth. Nothing grows here anymore.",
    "The remains of a highway stretch into the distance, littered with rusted vehicles frozen in their final moments.",
    "A hot, irradiated wind blows across the wasteland, carrying the scent of decay and chemicals.",
    "The ground crunches beneath your feet, a mixture of ash and pulverized concrete.",
    "In the distance, you can see the skeletal remains of what might have been a small town.",
    "The sky above is a sickly yellow-gray, the sun barely visible through the perpetual haze.",
];

pub static CITY_SIGHTS: &[&str] = &[
    "Towering skyscrapers, now broken and hollow, cast long shadows across the debris-filled streets.",
    "The city is eerily quiet, save for the occasional sound of collapsing metal or glass.",
    "Abandoned vehicles line the streets, some crushed beneath fallen concrete, others simply left where they stopped.",
    "You navigate through a maze of collapsed buildings and blocked streets, always alert for danger.",
    "Papers and trash swirl in the wind between the buildings, ghostly remnants of the city's former life.",
    "The buildings here lean precariously, their structural integrity compromised by the blast and years of neglect.",
    "Shattered glass crunches beneath your feet as you move carefully through the urban ruins.",
];

pub static FOREST_SIGHTS: &[&str] = &[
    "The trees here are twisted and mutated, their bark glowing faintly with an unnatural light.",
    "Strange fungi grow in patches, emitting a soft blue luminescence that provides just enough light to see by.",
    "The vegetation is dense and alien, nothing like the forests of the old world.",
    "Bizarre sounds echo through the trees - clicks, whistles, and low moans that could be animal or something else entirely.",
    "The air is thick with spores and the sweet-rot smell of mutated vegetation.",
    "Vines with thorns as long as your finger hang from the twisted branches, ready to snag the unwary.",
    "Despite the radiation, life finds a way here, though changed into forms barely recognizable.",
];

pub static SURVIVAL_TIPS: &[&str] = &[
    "Tip: Always keep some anti-radiation medicine with you when exploring irradiated areas.",
    "Tip: Food and water are your most important resources. Never pass up a chance to collect them.",
    "Tip: Some locations are safer to rest in than others. Look for shelter when your health is low.",
    "Tip: Your Geiger counter will click faster in areas with high radiation. Listen for it.",
    "Tip: Not all survivors are friendly. Approach strangers with caution.",
    "Tip: Weapons break with use. Try to have a backup weapon available.",
    "Tip: Radiation sickness will slowly damage your health. Treat it as soon as possible.",
    "Tip: The wasteland is more dangerous at night. Try to find shelter before dark.",
    "Tip: Some mutated plants and animals can be consumed for food, but may increase your radiation.",
    "Tip: Trading with other survivors can be a good way to get supplies you need.",
];

pub static APOCALYPTIC_QUOTES: &[&str] = &[
    "War. War never changes.",
    "It is not the strongest of the species that survives, but the one most adaptable to change.",
    "In the wasteland, hope is as precious as clean water.",
    "The world ended not with a whimper, but with a bang.",
    "Survival is insufficient.",
    "The end of the world was just the beginning of our story.",
    "When everything is lost, the future still remains.",
    "In a world of ash, even the smallest flame is a miracle.",
    "The old world died so that something new could be born.",
    "We are not the last of the old; we are the first of the new.",
];
