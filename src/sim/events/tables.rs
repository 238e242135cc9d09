//! Event templates, stored as data and indexed by category.

use std::collections::BTreeSet;

use crate::model::ActionKind::{self, *};
use crate::model::stat::StatKey::{self, *};
use crate::model::stat::effects_from;
use crate::model::{EventCategory, GameEvent};

/// An immutable (title, description, effects, blocked actions) row.
#[derive(Debug, Clone, Copy)]
pub struct EventTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub effects: &'static [(StatKey, i32)],
    pub blocks: &'static [ActionKind],
}

impl EventTemplate {
    pub fn instantiate(&self, category: EventCategory, cycle: u32) -> GameEvent {
        GameEvent {
            title: self.title.to_string(),
            description: self.description.to_string(),
            category,
            cycle,
            effects: effects_from(self.effects),
            blocked_actions: self.blocks.iter().copied().collect(),
            unblocked_actions: BTreeSet::new(),
            choices: Vec::new(),
            prompt: None,
        }
    }
}

const fn t(
    title: &'static str,
    description: &'static str,
    effects: &'static [(StatKey, i32)],
    blocks: &'static [ActionKind],
) -> EventTemplate {
    EventTemplate {
        title,
        description,
        effects,
        blocks,
    }
}

pub const MILITARY: &[EventTemplate] = &[
    t("Border Skirmish", "Raiders harry the outer colonies and are driven back at a cost.",
        &[(Military, -3), (Stability, -2)], &[]),
    t("Veteran Officers Return", "A decorated fleet cadre re-enlists after years abroad.",
        &[(Military, 5), (Influence, 1)], &[]),
    t("Mutiny Aboard the Flagship", "A crew revolt paralyzes the home fleet for a cycle.",
        &[(Military, -6), (Stability, -3)], &[BuildDefenses]),
    t("Arms Cache Recovered", "Scouts uncover a forgotten armory in a derelict station.",
        &[(Military, 4), (Resources, 2)], &[]),
    t("Pirate Blockade", "Corsairs choke the trade lanes around the capital system.",
        &[(Resources, -5), (Influence, -2)], &[TradeAgreements]),
    t("Mercenary Offer", "A free company sells its services at a steep price.",
        &[(Military, 6), (Resources, -4)], &[]),
    t("Militia Drills", "Civilian drills improve readiness and morale.",
        &[(Military, 2), (Stability, 2)], &[]),
    t("Sabotaged Shipyard", "Saboteurs cripple the main shipyard's assembly lines.",
        &[(Military, -4), (Technology, -2)], &[RecruitForces]),
];

pub const ECONOMIC: &[EventTemplate] = &[
    t("Market Boom", "Demand for colony exports surges across the sector.",
        &[(Resources, 6), (Stability, 1)], &[]),
    t("Currency Collapse", "A neighboring credit union fails and drags prices down.",
        &[(Resources, -6), (Stability, -2)], &[]),
    t("Merchant Convoy", "A wealthy convoy docks and trades generously.",
        &[(Resources, 4), (Influence, 2)], &[]),
    t("Supply Shortage", "Critical components run short in every depot.",
        &[(Resources, -4), (Technology, -1)], &[GatherResources]),
    t("Tariff Dispute", "Rival ports raise tariffs on everything you ship.",
        &[(Resources, -3), (Reputation, -2)], &[TradeAgreements]),
    t("Mining Windfall", "A survey team strikes a rich vein in the asteroid belt.",
        &[(Resources, 8)], &[]),
    t("Labor Strike", "Dock workers walk out over rationing.",
        &[(Stability, -4), (Resources, -2)], &[]),
    t("Investment Wave", "Outside capital floods into local ventures.",
        &[(Resources, 3), (Technology, 2), (Influence, 1)], &[]),
];

pub const TECHNOLOGICAL: &[EventTemplate] = &[
    t("Research Breakthrough", "Labs unlock a long-stalled line of inquiry.",
        &[(Technology, 6)], &[]),
    t("Reactor Failure", "A power core meltdown darkens a research campus.",
        &[(Technology, -4), (Population, -2)], &[ResearchTechnology]),
    t("Data Archive Restored", "Corrupted archives are rebuilt from backups.",
        &[(Technology, 3), (Influence, 1)], &[]),
    t("Brain Drain", "Top engineers defect to a richer patron.",
        &[(Technology, -5), (Influence, -1)], &[]),
    t("Automated Foundries", "New fabricators raise output across the colonies.",
        &[(Resources, 3), (Technology, 3)], &[]),
    t("Computer Virus", "A self-replicating program spreads through the grid.",
        &[(Technology, -3), (Stability, -2)], &[]),
    t("Sensor Upgrade", "Deep-space sensors extend early warning.",
        &[(Military, 2), (Technology, 2)], &[]),
];

pub const DISCOVERY: &[EventTemplate] = &[
    t("Derelict Vessel", "An ancient hulk drifts into range, its holds intact.",
        &[(Technology, 4), (Resources, 2)], &[]),
    t("Habitable World", "Explorers chart a temperate planet ready for settlers.",
        &[(Population, 5), (Resources, 2)], &[]),
    t("Gate Fragment", "A shard of gate machinery hints at how the network was built.",
        &[(GateNetworkIntegrity, 4), (AncientTechDiscovery, 3)], &[]),
    t("Alien Ruins", "Explorers map a vast ruin complex beneath an ice moon.",
        &[(AncientTechDiscovery, 5), (Influence, 1)], &[]),
    t("Lost Colony", "A forgotten settlement rejoins your people.",
        &[(Population, 4), (Stability, 1)], &[]),
    t("Star Charts", "Recovered charts reveal safe hyperlanes.",
        &[(Influence, 2), (Resources, 2)], &[]),
    t("Cursed Artifact", "A relic drives its handlers to madness before it is sealed.",
        &[(Stability, -3), (AncientTechDiscovery, 4)], &[AncientStudies]),
    t("Nebula Harvest", "A dense nebula yields rare exotic gases.",
        &[(Resources, 5)], &[]),
];

pub const NATURAL: &[EventTemplate] = &[
    t("Solar Flare", "A violent flare scorches orbital infrastructure.",
        &[(Technology, -2), (Resources, -3)], &[]),
    t("Asteroid Impact", "A rogue rock strikes a farming world.",
        &[(Population, -5), (Resources, -2)], &[ExpandTerritory]),
    t("Bountiful Season", "Hydroponics and farm worlds post a record yield.",
        &[(Resources, 5), (Population, 2)], &[]),
    t("Plague Outbreak", "A fast-moving fever tears through the crowded habitats.",
        &[(Population, -6), (Stability, -3)], &[]),
    t("Ion Storm", "A storm front isolates the frontier for a cycle.",
        &[(GateNetworkIntegrity, -3), (Influence, -2)], &[GateNetworkResearch]),
    t("Calm Skies", "Quiet space weather lets convoys move freely.",
        &[(Stability, 2), (Resources, 2)], &[]),
    t("Quake on the Capital", "Tremors crack the capital's foundations.",
        &[(Stability, -4), (Population, -2)], &[]),
    t("Stellar Bloom", "A blooming star bathes nearby worlds in useful radiation.",
        &[(Technology, 2), (Population, 2)], &[]),
];

pub const CRISIS: &[EventTemplate] = &[
    t("Civil Unrest", "Riots spread through the core worlds.",
        &[(Stability, -6), (Population, -2)], &[ExpandTerritory]),
    t("Gate Cascade Failure", "Gate after gate goes dark along the spine routes.",
        &[(GateNetworkIntegrity, -6), (Resources, -3)], &[GateNetworkResearch]),
    t("Famine", "Crop blight and failed shipments starve the outer colonies.",
        &[(Population, -5), (Resources, -5)], &[]),
    t("Assassination Attempt", "An attempt on the council shakes public confidence.",
        &[(Stability, -5), (Influence, -3)], &[Diplomacy]),
    t("Refugee Flood", "Refugees from collapsing systems crowd your stations.",
        &[(Population, 3), (Resources, -5), (Stability, -2)], &[]),
    t("Secession Movement", "Frontier systems declare themselves independent.",
        &[(Population, -4), (Influence, -4), (Stability, -3)], &[]),
    t("Sector War", "Neighbors go to war and the fighting spills over.",
        &[(Military, -5), (GalacticStability, -4)], &[TradeAgreements]),
];

/// Plain template table for `category`.
pub fn templates_for(category: EventCategory) -> &'static [EventTemplate] {
    match category {
        EventCategory::Military => MILITARY,
        EventCategory::Economic => ECONOMIC,
        EventCategory::Technological => TECHNOLOGICAL,
        EventCategory::Discovery => DISCOVERY,
        EventCategory::Natural => NATURAL,
        EventCategory::Crisis => CRISIS,
    }
}

pub const DIMINISHING_RETURNS: EventTemplate = t(
    "Diminishing Returns",
    "Repeating the same policy has exhausted its benefits and strained your people.",
    &[(Stability, -5), (Resources, -3)],
    &[],
);

pub const STABILITY_CRISIS: EventTemplate = t(
    "Galactic Turmoil",
    "The collapse of order between the stars reaches your borders.",
    &[(Stability, -6), (Military, -3), (Resources, -3)],
    &[Diplomacy],
);

pub const ANCIENT_SURGE: EventTemplate = t(
    "Ancient Technology Surge",
    "Accumulated research unlocks a cache of Ancient designs.",
    &[(Technology, 8), (AncientTechDiscovery, 5), (Influence, 2)],
    &[],
);

pub const ALLIANCE_OVERTURE: EventTemplate = t(
    "Alliance Overture",
    "A distant power sends envoys proposing a formal alliance.",
    &[],
    &[],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tables_hold_seven_or_eight_templates() {
        for category in EventCategory::ALL {
            let len = templates_for(*category).len();
            assert!((7..=8).contains(&len), "{category} has {len} templates");
        }
    }

    #[test]
    fn titles_are_unique_within_a_category() {
        for category in EventCategory::ALL {
            let titles: BTreeSet<_> = templates_for(*category).iter().map(|t| t.title).collect();
            assert_eq!(titles.len(), templates_for(*category).len(), "{category}");
        }
    }

    #[test]
    fn instantiate_copies_the_row() {
        let event = MILITARY[2].instantiate(EventCategory::Military, 9);
        assert_eq!(event.title, "Mutiny Aboard the Flagship");
        assert_eq!(event.cycle, 9);
        assert_eq!(event.effects[&Military], -6);
        assert!(event.blocked_actions.contains(&BuildDefenses));
        assert!(event.choices.is_empty());
    }
}
