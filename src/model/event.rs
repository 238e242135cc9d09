use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::action::ActionKind;
use super::stat::Effects;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventCategory {
    Military,
    Economic,
    Technological,
    Discovery,
    Natural,
    Crisis,
}

string_enum!(EventCategory, "event category", {
    Military => "military",
    Economic => "economic",
    Technological => "technological",
    Discovery => "discovery",
    Natural => "natural",
    Crisis => "crisis",
});

impl EventCategory {
    /// Categories the main roll draws from uniformly.
    pub const ORDINARY: [EventCategory; 5] = [
        EventCategory::Military,
        EventCategory::Economic,
        EventCategory::Technological,
        EventCategory::Discovery,
        EventCategory::Natural,
    ];

    /// Categories a strong positive reputation steers toward.
    pub const FAVORABLE: [EventCategory; 2] =
        [EventCategory::Discovery, EventCategory::Technological];
}

/// A decision the core hands to the UI without resolving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventPrompt {
    AllianceOverture,
}

string_enum!(EventPrompt, "event prompt", {
    AllianceOverture => "alliance_overture",
});

/// One branch of a dilemma. A choice with `next` steps is not final: the
/// player must pick again among `next` before anything is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChoice {
    pub description: String,
    #[serde(default, skip_serializing_if = "Effects::is_empty")]
    pub effects: Effects,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub blocked_actions: BTreeSet<ActionKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next: Vec<EventChoice>,
}

impl EventChoice {
    pub fn is_leaf(&self) -> bool {
        self.next.is_empty()
    }

    /// Longest chain of selections starting at this choice (a leaf is 1).
    pub fn depth(&self) -> usize {
        1 + self.next.iter().map(EventChoice::depth).max().unwrap_or(0)
    }
}

/// An event that fired in a given cycle. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub cycle: u32,
    #[serde(default, skip_serializing_if = "Effects::is_empty")]
    pub effects: Effects,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub blocked_actions: BTreeSet<ActionKind>,
    /// Kinds this event lifts from the next cycle's blocked set, even when
    /// another event of the same cycle blocked them.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub unblocked_actions: BTreeSet<ActionKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<EventChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<EventPrompt>,
}

impl GameEvent {
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }

    pub fn headline(&self) -> String {
        format!("Cycle {}: {}", self.cycle, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::stat::{StatKey, effects_from};

    fn leaf(description: &str) -> EventChoice {
        EventChoice {
            description: description.to_string(),
            effects: Effects::new(),
            blocked_actions: BTreeSet::new(),
            next: Vec::new(),
        }
    }

    #[test]
    fn choice_depth_counts_longest_chain() {
        let mut root = leaf("negotiate");
        let mut middle = leaf("press harder");
        middle.next.push(leaf("accept terms"));
        root.next.push(leaf("walk away"));
        root.next.push(middle);

        assert_eq!(root.depth(), 3);
        assert!(!root.is_leaf());
        assert!(root.next[0].is_leaf());
    }

    #[test]
    fn event_serializes_expected_shape() {
        let event = GameEvent {
            title: "Border Skirmish".to_string(),
            description: "Raiders harry the outer colonies.".to_string(),
            category: EventCategory::Military,
            cycle: 4,
            effects: effects_from(&[(StatKey::Military, -3)]),
            blocked_actions: BTreeSet::from([ActionKind::TradeAgreements]),
            unblocked_actions: BTreeSet::new(),
            choices: Vec::new(),
            prompt: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["category"], "military");
        assert_eq!(json["cycle"], 4);
        assert_eq!(json["effects"]["military"], -3);
        assert_eq!(json["blocked_actions"][0], "trade_agreements");
        // Empty collections and absent prompt are omitted
        assert!(json.get("choices").is_none());
        assert!(json.get("unblocked_actions").is_none());
        assert!(json.get("prompt").is_none());

        let back: GameEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn headline_names_cycle() {
        let event = GameEvent {
            title: "Gate Flicker".to_string(),
            description: String::new(),
            category: EventCategory::Natural,
            cycle: 12,
            effects: Effects::new(),
            blocked_actions: BTreeSet::new(),
            unblocked_actions: BTreeSet::new(),
            choices: Vec::new(),
            prompt: Some(EventPrompt::AllianceOverture),
        };
        assert_eq!(event.headline(), "Cycle 12: Gate Flicker");
    }
}
