//! One cycle of turn resolution.
//!
//! A cycle runs in three parts:
//!
//! - [`resolve_cycle`]: admit actions, update rolling counts, apply actions,
//!   drift the world, select and apply events.
//! - [`conclude_cycle`]: settle win/loss and advance the cycle counter.
//! - [`record_achievements`]: unlock achievements in the ledger.
//!
//! [`TurnEngine`](crate::sim::TurnEngine) commits between the last two, so
//! the saved snapshot carries the terminal flags and the advanced counter,
//! and the ledger only hears about cycles that were persisted.

use std::collections::BTreeSet;

use rand::{Rng, RngCore};
use serde::Serialize;

use super::achievements::{Achievement, AchievementLedger, award_achievements, settle_outcome};
use super::actions::apply_action;
use super::config::TurnConfig;
use super::events::{roll_percent, select_events};
use super::validate::{validate_action, validate_event};
use crate::error::{TurnError, ValidationError};
use crate::model::{ActionKind, GameEvent, GameState, PlayerAction};

/// Why a submitted action did not run this cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    Malformed {
        #[serde(skip)]
        error: ValidationError,
    },
    Duplicate,
    Blocked,
    OverLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedAction {
    pub kind: ActionKind,
    #[serde(flatten)]
    pub rejection: Rejection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ongoing,
    Won,
    Lost,
}

/// What happened during one cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReport {
    /// The cycle that was resolved (the counter's value before the advance).
    pub cycle: u32,
    pub applied: Vec<ActionKind>,
    pub rejected: Vec<RejectedAction>,
    pub events: Vec<GameEvent>,
    pub unlocked: Vec<Achievement>,
    pub outcome: Outcome,
}

/// Split submitted actions into the kinds that run and the ones that don't.
///
/// Malformed actions, duplicates of an already admitted kind, blocked kinds
/// and anything beyond the per-cycle limit are rejected. Submission order is
/// kept.
pub fn admit_actions(
    actions: &[PlayerAction],
    blocked: &BTreeSet<ActionKind>,
    config: &TurnConfig,
) -> (Vec<ActionKind>, Vec<RejectedAction>) {
    let mut admitted: Vec<ActionKind> = Vec::new();
    let mut rejected = Vec::new();

    for action in actions {
        let rejection = if let Err(error) = validate_action(action) {
            Some(Rejection::Malformed { error })
        } else if admitted.contains(&action.kind) {
            Some(Rejection::Duplicate)
        } else if blocked.contains(&action.kind) {
            Some(Rejection::Blocked)
        } else if admitted.len() >= config.max_actions_per_cycle {
            Some(Rejection::OverLimit)
        } else {
            None
        };

        match rejection {
            Some(rejection) => {
                tracing::warn!(kind = %action.kind, ?rejection, "dropping action");
                rejected.push(RejectedAction {
                    kind: action.kind,
                    rejection,
                });
            }
            None => admitted.push(action.kind),
        }
    }

    (admitted, rejected)
}

/// Per-cycle ambient drift: galactic stability and gate integrity erode,
/// ancient tech discovery occasionally advances. Clamped.
pub fn drift_world(state: &mut GameState, rng: &mut dyn RngCore, config: &TurnConfig) {
    let world = &mut state.world;
    if config.stability_drift_max > 0 {
        world.galactic_stability -= rng.random_range(0..config.stability_drift_max);
    }
    if config.gate_drift_max > 0 {
        world.gate_network_integrity -= rng.random_range(0..config.gate_drift_max);
    }
    if roll_percent(rng) <= config.ancient_drift_chance {
        let (low, high) = config.ancient_drift_gain;
        if low < high {
            world.ancient_tech_discovery += rng.random_range(low..high);
        }
    }
    world.clamp();
}

/// Apply this cycle's events: effects accumulate across all events and are
/// clamped once; the blocked set is rebuilt from scratch.
///
/// Returns the events that passed validation, in firing order.
pub fn apply_events(state: &mut GameState, events: Vec<GameEvent>) -> Vec<GameEvent> {
    let mut applied = Vec::with_capacity(events.len());
    let mut blocked = BTreeSet::new();
    let mut unblocked = BTreeSet::new();

    for event in events {
        if let Err(error) = validate_event(&event) {
            tracing::warn!(title = %event.title, %error, "dropping malformed event");
            continue;
        }
        state.apply_effects(&event.effects);
        blocked.extend(event.blocked_actions.iter().copied());
        unblocked.extend(event.unblocked_actions.iter().copied());
        applied.push(event);
    }

    state.clamp();
    state.blocked_actions = blocked.difference(&unblocked).copied().collect();
    applied
}

/// Everything up to the persistence commit. Mutates `state` in place; callers
/// that need the pre-turn state must work on a copy.
pub fn resolve_cycle(
    state: &mut GameState,
    actions: &[PlayerAction],
    rng: &mut dyn RngCore,
    config: &TurnConfig,
) -> Result<TurnReport, TurnError> {
    if state.is_over() {
        return Err(TurnError::GameOver { cycle: state.cycle });
    }
    let cycle = state.cycle;
    tracing::info!(cycle, submitted = actions.len(), "resolving cycle");

    if let Some(index) = state.pending_choice.take() {
        tracing::debug!(index, "unresolved dilemma expired");
    }

    // Admission
    let (applied, rejected) = admit_actions(actions, &state.blocked_actions, config);

    // Rolling counts. Repetition penalties read the counts the cycle began with.
    let repeated = state
        .recent_action_counts
        .at_least(config.repetition_threshold);
    state.recent_action_counts.record_cycle(&applied);

    // Actions
    for &kind in &applied {
        apply_action(state, kind);
    }
    state.clamp();

    // Ambient drift
    drift_world(state, rng, config);

    // Events
    let selected = select_events(state, &repeated, rng, config);
    let events = apply_events(state, selected);
    for event in &events {
        tracing::debug!(title = %event.title, category = %event.category, "event fired");
        state.push_news(event.headline(), config.news_capacity);
    }
    let first_new = state.recent_events.len();
    state.recent_events.extend(events.iter().cloned());
    if let Some(offset) = events.iter().position(GameEvent::has_choices) {
        state.pending_choice = Some(first_new + offset);
    }

    Ok(TurnReport {
        cycle,
        applied,
        rejected,
        events,
        unlocked: Vec::new(),
        outcome: Outcome::Ongoing,
    })
}

/// Settle the terminal flags for the resolved cycle, then advance the cycle
/// counter. The counter advances even when the game was just lost.
pub fn conclude_cycle(state: &mut GameState, report: &mut TurnReport, config: &TurnConfig) {
    settle_outcome(state, report.cycle, config);
    report.outcome = outcome_of(state);
    match report.outcome {
        Outcome::Won => tracing::info!(cycle = report.cycle, "faction victorious"),
        Outcome::Lost => tracing::info!(cycle = report.cycle, status = %state.faction.status, "faction defeated"),
        Outcome::Ongoing => {}
    }
    state.cycle += 1;
}

/// Unlock achievements earned by a concluded, committed cycle.
pub fn record_achievements(
    state: &GameState,
    report: &mut TurnReport,
    ledger: &mut dyn AchievementLedger,
    config: &TurnConfig,
) {
    report.unlocked = award_achievements(state, report.cycle, ledger, config);
}

pub fn outcome_of(state: &GameState) -> Outcome {
    if state.has_lost {
        Outcome::Lost
    } else if state.has_won {
        Outcome::Won
    } else {
        Outcome::Ongoing
    }
}
