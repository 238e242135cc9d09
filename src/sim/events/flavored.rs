//! Archetype-flavored bonus events. Each row belongs to one category and
//! fires only for the listed faction types.

use super::tables::EventTemplate;
use crate::model::FactionType::{self, *};
use crate::model::EventCategory;
use crate::model::stat::StatKey::*;

pub struct FlavoredTemplate {
    pub category: EventCategory,
    pub affinity: &'static [FactionType],
    pub template: EventTemplate,
}

const fn f(
    category: EventCategory,
    affinity: &'static [FactionType],
    template: EventTemplate,
) -> FlavoredTemplate {
    FlavoredTemplate {
        category,
        affinity,
        template,
    }
}

const fn bonus(
    title: &'static str,
    description: &'static str,
    effects: &'static [(crate::model::StatKey, i32)],
) -> EventTemplate {
    EventTemplate {
        title,
        description,
        effects,
        blocks: &[],
    }
}

pub const FLAVORED: &[FlavoredTemplate] = &[
    f(EventCategory::Military, &[Empire, Remnant], bonus(
        "Legions Answer the Call",
        "Old loyalties stir and veteran legions rally to the banner.",
        &[(Military, 8), (Stability, 2)])),
    f(EventCategory::Military, &[Hive], bonus(
        "Brood Surge",
        "A new brood matures and swells the warrior castes.",
        &[(Military, 6), (Population, 4)])),
    f(EventCategory::Military, &[Nomads, Syndicate], bonus(
        "Privateer Contracts",
        "Independent captains sign on under your letters of marque.",
        &[(Military, 5), (Resources, 3)])),
    f(EventCategory::Economic, &[Syndicate], bonus(
        "Hostile Takeover",
        "Your brokers absorb a rival consortium's holdings.",
        &[(Resources, 9), (Influence, 3), (Reputation, -2)])),
    f(EventCategory::Economic, &[Republic], bonus(
        "Free Market Charter",
        "The assembly passes a charter that unleashes local trade.",
        &[(Resources, 6), (Stability, 3)])),
    f(EventCategory::Economic, &[Nomads], bonus(
        "Caravan Fair",
        "The fleets gather for a great exchange of goods.",
        &[(Resources, 5), (Influence, 3)])),
    f(EventCategory::Technological, &[Technocracy], bonus(
        "Singularity Lab",
        "Your research directorate achieves a self-improving design loop.",
        &[(Technology, 10), (Stability, 1)])),
    f(EventCategory::Technological, &[Hive, Remnant], bonus(
        "Recovered Schematics",
        "Fragments of lost engineering knowledge are pieced back together.",
        &[(Technology, 7), (AncientTechDiscovery, 2)])),
    f(EventCategory::Discovery, &[Remnant, Theocracy], bonus(
        "Relic of the Ancients",
        "A relic tied to your founding myths is brought home.",
        &[(AncientTechDiscovery, 8), (Stability, 3), (Reputation, 2)])),
    f(EventCategory::Discovery, &[Nomads, Empire], bonus(
        "Uncharted Gate",
        "Scouts find a dormant gate leading to untouched systems.",
        &[(GateNetworkIntegrity, 6), (Population, 3)])),
    f(EventCategory::Natural, &[Theocracy], bonus(
        "Celestial Omen",
        "A rare alignment is hailed as a blessing and the faithful rally.",
        &[(Stability, 7), (Influence, 3)])),
    f(EventCategory::Natural, &[Hive, Republic], bonus(
        "Fertile Epoch",
        "Favorable conditions drive a population boom.",
        &[(Population, 7), (Resources, 2)])),
    f(EventCategory::Crisis, &[Empire, Theocracy], bonus(
        "Iron Decree",
        "Emergency powers restore order, whatever the cost in goodwill.",
        &[(Stability, 6), (Reputation, -3)])),
    f(EventCategory::Crisis, &[Technocracy, Syndicate, Republic], bonus(
        "Crisis Committee",
        "Experts convene and contain the emergency before it spreads.",
        &[(Stability, 4), (Influence, 2)])),
];

/// Flavored rows of `category` that `faction_type` qualifies for.
pub fn flavored_for(
    category: EventCategory,
    faction_type: FactionType,
) -> impl Iterator<Item = &'static FlavoredTemplate> {
    FLAVORED
        .iter()
        .filter(move |row| row.category == category && row.affinity.contains(&faction_type))
}
