use rand::Rng;
use rand::RngCore;

use crate::model::FactionType;

const PREFIXES: &[&str] = &[
    "Iron", "Silver", "Golden", "Shadow", "Storm", "Crimson", "Ashen", "Frost", "Void", "Solar",
    "Bright", "Ember", "Pale", "Azure", "Obsidian", "Jade", "Scarlet", "Ivory", "Hollow", "Silent",
    "Gilded", "Elder", "Sunken", "Distant",
];

fn forms(faction_type: FactionType) -> &'static [&'static str] {
    match faction_type {
        FactionType::Empire => &["Empire", "Dominion", "Throne", "Imperium"],
        FactionType::Republic => &["Republic", "Assembly", "Commonwealth", "Union"],
        FactionType::Theocracy => &["Covenant", "Choir", "Sanctum", "Order"],
        FactionType::Syndicate => &["Syndicate", "Consortium", "Exchange", "Cartel"],
        FactionType::Technocracy => &["Directorate", "Collegium", "Institute", "Array"],
        FactionType::Nomads => &["Flotilla", "Caravan", "Drift", "Armada"],
        FactionType::Hive => &["Hive", "Brood", "Swarm", "Chorus"],
        FactionType::Remnant => &["Remnant", "Exiles", "Wardens", "Vigil"],
    }
}

/// Generate a faction name in the style of its archetype: "The {Prefix} {Form}".
pub fn generate_faction_name(faction_type: FactionType, rng: &mut dyn RngCore) -> String {
    let prefix = PREFIXES[rng.random_range(0..PREFIXES.len())];
    let forms = forms(faction_type);
    let form = forms[rng.random_range(0..forms.len())];
    format!("The {prefix} {form}")
}
