//! Action catalog: the fixed stat deltas of each player action.

use crate::model::stat::StatKey::{self, *};
use crate::model::{ActionKind, GameState};

/// Catalog row for one action kind.
pub struct ActionDef {
    pub kind: ActionKind,
    pub effects: &'static [(StatKey, i32)],
}

pub const ACTION_CATALOG: &[ActionDef] = &[
    ActionDef { kind: ActionKind::BuildDefenses, effects: &[(Military, 5), (Stability, 2)] },
    ActionDef { kind: ActionKind::Diplomacy, effects: &[(GalacticStability, 3), (Influence, 2), (Reputation, 5)] },
    ActionDef { kind: ActionKind::ResearchTechnology, effects: &[(Technology, 5), (Resources, -2)] },
    ActionDef { kind: ActionKind::GatherResources, effects: &[(Resources, 6), (Stability, -1)] },
    ActionDef { kind: ActionKind::RecruitForces, effects: &[(Military, 4), (Population, -2), (Resources, -2)] },
    ActionDef { kind: ActionKind::ExpandTerritory, effects: &[(Population, 4), (Influence, 2), (Resources, -3), (Reputation, -2)] },
    ActionDef { kind: ActionKind::TradeAgreements, effects: &[(Resources, 4), (Influence, 2), (Reputation, 2)] },
    ActionDef { kind: ActionKind::InternalReforms, effects: &[(Stability, 5), (Population, 1), (Resources, -2)] },
    ActionDef { kind: ActionKind::AncientStudies, effects: &[(AncientTechDiscovery, 5), (Technology, 2)] },
    ActionDef { kind: ActionKind::GateNetworkResearch, effects: &[(GateNetworkIntegrity, 5), (Technology, 1)] },
];

pub fn catalog_entry(kind: ActionKind) -> Option<&'static ActionDef> {
    ACTION_CATALOG.iter().find(|def| def.kind == kind)
}

/// Apply one action's deltas to the faction and world, unclamped.
///
/// Kinds without a catalog row are a no-op. Returns whether anything applied.
pub fn apply_action(state: &mut GameState, kind: ActionKind) -> bool {
    let Some(def) = catalog_entry(kind) else {
        tracing::debug!(%kind, "no catalog entry for action, skipping");
        return false;
    };
    for &(key, delta) in def.effects {
        if !state.faction.shift(key, delta) {
            state.world.shift(key, delta);
        }
    }
    true
}
