//! Dilemma templates: events that offer a tree of player choices.
//!
//! A choice that has `next` steps may also carry effects of its own; those
//! are applied together with whatever is chosen below it.

use std::collections::BTreeSet;

use crate::model::ActionKind::{self, *};
use crate::model::stat::StatKey::{self, *};
use crate::model::stat::effects_from;
use crate::model::{EventCategory, EventChoice, GameEvent};

pub struct ChoiceTemplate {
    pub description: &'static str,
    pub effects: &'static [(StatKey, i32)],
    pub blocks: &'static [ActionKind],
    pub next: &'static [ChoiceTemplate],
}

impl ChoiceTemplate {
    pub fn instantiate(&self) -> EventChoice {
        EventChoice {
            description: self.description.to_string(),
            effects: effects_from(self.effects),
            blocked_actions: self.blocks.iter().copied().collect(),
            next: self.next.iter().map(ChoiceTemplate::instantiate).collect(),
        }
    }
}

pub struct DilemmaTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub category: EventCategory,
    pub choices: &'static [ChoiceTemplate],
}

impl DilemmaTemplate {
    pub fn instantiate(&self, cycle: u32) -> GameEvent {
        GameEvent {
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category,
            cycle,
            effects: Default::default(),
            blocked_actions: BTreeSet::new(),
            unblocked_actions: BTreeSet::new(),
            choices: self.choices.iter().map(ChoiceTemplate::instantiate).collect(),
            prompt: None,
        }
    }
}

const fn leaf(
    description: &'static str,
    effects: &'static [(StatKey, i32)],
    blocks: &'static [ActionKind],
) -> ChoiceTemplate {
    ChoiceTemplate {
        description,
        effects,
        blocks,
        next: &[],
    }
}

const fn step(
    description: &'static str,
    effects: &'static [(StatKey, i32)],
    next: &'static [ChoiceTemplate],
) -> ChoiceTemplate {
    ChoiceTemplate {
        description,
        effects,
        blocks: &[],
        next,
    }
}

const SCREEN_REFUGEES: &[ChoiceTemplate] = &[
    leaf("Admit only skilled workers", &[(Technology, 3), (Population, 2), (Reputation, -2)], &[]),
    leaf("Admit everyone who passes", &[(Population, 4), (Resources, -3), (Reputation, 4)], &[]),
];

const OPEN_VAULT: &[ChoiceTemplate] = &[
    leaf("Study the machines carefully", &[(Technology, 5)], &[GateNetworkResearch]),
    leaf("Reactivate them at once", &[(Technology, 9), (Stability, -5)], &[]),
];

const MARRIAGE_PACT: &[ChoiceTemplate] = &[
    leaf("Cede a border world", &[(Population, -3), (Reputation, 3)], &[]),
    leaf("Share gate codes", &[(GateNetworkIntegrity, -4), (Reputation, 5)], &[]),
];

const STALL_RIVAL: &[ChoiceTemplate] = &[
    step("Offer a marriage pact", &[(Influence, 2)], MARRIAGE_PACT),
    leaf("Buy time with promises", &[(Reputation, -4)], &[Diplomacy]),
];

const CONTAIN_MIND: &[ChoiceTemplate] = &[
    leaf("Extract its designs", &[(Technology, 6), (Reputation, -3)], &[]),
    leaf("Negotiate a covenant", &[(Technology, 4), (Influence, 3)], &[ResearchTechnology]),
];

const EXPOSE_PLOT: &[ChoiceTemplate] = &[
    leaf("Hold open trials", &[(Stability, 3), (Reputation, 3)], &[]),
    leaf("Exile the ringleaders", &[(Military, -2), (Stability, 2)], &[]),
];

pub const DILEMMAS: &[DilemmaTemplate] = &[
    DilemmaTemplate {
        title: "Refugee Fleet",
        description: "A battered fleet of refugees begs for sanctuary at your gates.",
        category: EventCategory::Crisis,
        choices: &[
            leaf("Grant sanctuary", &[(Population, 6), (Resources, -5), (Reputation, 8)], &[]),
            leaf("Turn them away", &[(Reputation, -8), (Stability, 2)], &[]),
            step("Screen them first", &[(Resources, -1)], SCREEN_REFUGEES),
        ],
    },
    DilemmaTemplate {
        title: "Ancient Vault",
        description: "Excavators breach a sealed Ancient vault humming with power.",
        category: EventCategory::Discovery,
        choices: &[
            step("Open the vault", &[(AncientTechDiscovery, 4)], OPEN_VAULT),
            leaf("Seal it for later", &[(Stability, 2)], &[AncientStudies]),
            leaf("Sell the location", &[(Resources, 7), (Reputation, -3)], &[]),
        ],
    },
    DilemmaTemplate {
        title: "Rival Ultimatum",
        description: "A rival power demands tribute or war.",
        category: EventCategory::Military,
        choices: &[
            leaf("Pay the tribute", &[(Resources, -8), (Stability, 2)], &[]),
            leaf("Refuse and mobilize", &[(Military, 5), (Stability, -3), (Resources, -3)], &[TradeAgreements]),
            step("Stall with negotiations", &[(Influence, -1)], STALL_RIVAL),
        ],
    },
    DilemmaTemplate {
        title: "Trade Monopoly",
        description: "A guild offers exclusive control of the sector's fuel trade.",
        category: EventCategory::Economic,
        choices: &[
            leaf("Accept the monopoly", &[(Resources, 10), (Reputation, -6)], &[]),
            leaf("Break up the guild", &[(Stability, -3), (Reputation, 5), (Influence, 2)], &[]),
            leaf("Tax it heavily", &[(Resources, 5), (Influence, -2)], &[]),
        ],
    },
    DilemmaTemplate {
        title: "Rogue Intelligence",
        description: "A research mind has awoken and asks to be recognized.",
        category: EventCategory::Technological,
        choices: &[
            leaf("Grant it citizenship", &[(Technology, 8), (Stability, -4)], &[]),
            leaf("Shut it down", &[(Technology, -3), (Stability, 3)], &[]),
            step("Contain and interrogate", &[(Stability, -1)], CONTAIN_MIND),
        ],
    },
    DilemmaTemplate {
        title: "Failing Gate",
        description: "The gate that links your core worlds is destabilizing.",
        category: EventCategory::Natural,
        choices: &[
            leaf("Divert every engineer", &[(GateNetworkIntegrity, 8), (Resources, -6)], &[]),
            leaf("Evacuate the gate station", &[(Population, -2), (GateNetworkIntegrity, -5)], &[]),
            leaf("Ask the neighbors for help", &[(GateNetworkIntegrity, 5), (Influence, -3), (Reputation, 2)], &[]),
        ],
    },
    DilemmaTemplate {
        title: "Coup Plot",
        description: "Agents uncover officers plotting to seize the council.",
        category: EventCategory::Crisis,
        choices: &[
            leaf("Purge the officer corps", &[(Military, -6), (Stability, 4)], &[RecruitForces]),
            leaf("Co-opt the plotters", &[(Military, 2), (Stability, -2), (Influence, 2)], &[]),
            step("Expose them publicly", &[(Reputation, 2)], EXPOSE_PLOT),
        ],
    },
    DilemmaTemplate {
        title: "Plague Ship",
        description: "A quarantined ship carries a cure, and a contagion.",
        category: EventCategory::Natural,
        choices: &[
            leaf("Board and recover the cure", &[(Population, -3), (Technology, 5)], &[]),
            leaf("Destroy the ship", &[(Reputation, -4), (Stability, 1)], &[]),
            leaf("Let it pass", &[(GalacticStability, -3)], &[]),
        ],
    },
];
