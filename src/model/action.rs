//! Player action types.
//!
//! The UI queues `PlayerAction`s for a cycle; the turn engine admits at most
//! two distinct kinds and applies them through the action catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ActionKind {
    BuildDefenses,
    Diplomacy,
    ResearchTechnology,
    GatherResources,
    RecruitForces,
    ExpandTerritory,
    TradeAgreements,
    InternalReforms,
    AncientStudies,
    GateNetworkResearch,
}

string_enum!(ActionKind, "action kind", {
    BuildDefenses => "build_defenses",
    Diplomacy => "diplomacy",
    ResearchTechnology => "research_technology",
    GatherResources => "gather_resources",
    RecruitForces => "recruit_forces",
    ExpandTerritory => "expand_territory",
    TradeAgreements => "trade_agreements",
    InternalReforms => "internal_reforms",
    AncientStudies => "ancient_studies",
    GateNetworkResearch => "gate_network_research",
});

impl ActionKind {
    pub const COUNT: usize = Self::ALL.len();

    fn index(self) -> usize {
        self as usize
    }
}

/// One action queued by the player. Parameters are carried through for the
/// UI; only `kind` drives the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAction {
    pub kind: ActionKind,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,
}

impl PlayerAction {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.parameters.insert(key.to_string(), value.to_string());
        self
    }
}

/// Rolling per-kind usage counter, one slot per action kind.
///
/// Serialized as a map of the non-zero counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<ActionKind, u32>", from = "BTreeMap<ActionKind, u32>")]
pub struct ActionCounts([u32; ActionKind::COUNT]);

impl ActionCounts {
    pub fn get(&self, kind: ActionKind) -> u32 {
        self.0[kind.index()]
    }

    pub fn set(&mut self, kind: ActionKind, count: u32) {
        self.0[kind.index()] = count;
    }

    /// +1 for every kind in `used`, -1 (floor 0) for every other kind.
    pub fn record_cycle(&mut self, used: &[ActionKind]) {
        for &kind in ActionKind::ALL {
            let slot = &mut self.0[kind.index()];
            if used.contains(&kind) {
                *slot = slot.saturating_add(1);
            } else {
                *slot = slot.saturating_sub(1);
            }
        }
    }

    /// Kinds whose count is at least `threshold`, in declaration order.
    pub fn at_least(&self, threshold: u32) -> Vec<ActionKind> {
        ActionKind::ALL
            .iter()
            .copied()
            .filter(|&kind| self.get(kind) >= threshold)
            .collect()
    }
}

impl From<ActionCounts> for BTreeMap<ActionKind, u32> {
    fn from(counts: ActionCounts) -> Self {
        ActionKind::ALL
            .iter()
            .map(|&kind| (kind, counts.get(kind)))
            .filter(|&(_, count)| count > 0)
            .collect()
    }
}

impl From<BTreeMap<ActionKind, u32>> for ActionCounts {
    fn from(map: BTreeMap<ActionKind, u32>) -> Self {
        let mut counts = ActionCounts::default();
        for (kind, count) in map {
            counts.set(kind, count);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_discriminants() {
        for (i, kind) in ActionKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i, "{kind} out of order");
        }
        assert_eq!(ActionKind::COUNT, 10);
    }

    #[test]
    fn record_cycle_increments_used_and_decays_others() {
        let mut counts = ActionCounts::default();
        counts.set(ActionKind::Diplomacy, 2);
        counts.record_cycle(&[ActionKind::BuildDefenses]);

        assert_eq!(counts.get(ActionKind::BuildDefenses), 1);
        assert_eq!(counts.get(ActionKind::Diplomacy), 1);
        assert_eq!(counts.get(ActionKind::TradeAgreements), 0);
    }

    #[test]
    fn at_least_lists_repeated_kinds() {
        let mut counts = ActionCounts::default();
        counts.set(ActionKind::BuildDefenses, 3);
        counts.set(ActionKind::AncientStudies, 2);
        assert_eq!(counts.at_least(3), vec![ActionKind::BuildDefenses]);
    }

    #[test]
    fn counts_serialize_as_sparse_map() {
        let mut counts = ActionCounts::default();
        counts.set(ActionKind::GatherResources, 2);
        let json = serde_json::to_value(&counts).unwrap();
        assert_eq!(json, serde_json::json!({ "gather_resources": 2 }));

        let back: ActionCounts = serde_json::from_value(json).unwrap();
        assert_eq!(back, counts);
    }

    #[test]
    fn action_parameters_are_optional_in_json() {
        let action: PlayerAction =
            serde_json::from_str(r#"{ "kind": "diplomacy" }"#).unwrap();
        assert_eq!(action, PlayerAction::new(ActionKind::Diplomacy));

        assert!(serde_json::from_str::<PlayerAction>(r#"{ "kind": "teleport" }"#).is_err());
    }
}
