//! Resolving a dilemma: walking a selection path through its choice tree.

use std::collections::BTreeSet;

use serde::Serialize;

use super::validate::validate_choice;
use crate::error::{ChoiceError, TurnError};
use crate::model::stat::merge_effects;
use crate::model::{ActionKind, Effects, EventChoice, GameState};

/// The accumulated outcome of a selection path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChoiceOutcome {
    /// Description of every node on the path, root first.
    pub steps: Vec<String>,
    pub effects: Effects,
    pub blocked_actions: BTreeSet<ActionKind>,
}

/// Follow `path` from `choices`, one index per step. Every node on the way
/// contributes its effects and blocks; the path must end at a leaf.
pub fn walk_path(choices: &[EventChoice], path: &[usize]) -> Result<ChoiceOutcome, ChoiceError> {
    if path.is_empty() {
        return Err(ChoiceError::EmptyPath);
    }

    let mut outcome = ChoiceOutcome::default();
    let mut options = choices;
    let mut current: Option<&EventChoice> = None;

    for (step, &index) in path.iter().enumerate() {
        if current.is_some_and(EventChoice::is_leaf) {
            // Path continues past a leaf.
            return Err(ChoiceError::OutOfRange {
                step,
                index,
                available: 0,
            });
        }
        let choice = options.get(index).ok_or(ChoiceError::OutOfRange {
            step,
            index,
            available: options.len(),
        })?;
        outcome.steps.push(choice.description.clone());
        merge_effects(&mut outcome.effects, &choice.effects);
        outcome
            .blocked_actions
            .extend(choice.blocked_actions.iter().copied());
        options = &choice.next;
        current = Some(choice);
    }

    match current {
        Some(choice) if choice.is_leaf() => Ok(outcome),
        _ => Err(ChoiceError::Incomplete { step: path.len() }),
    }
}

/// Apply the player's selection for the pending dilemma to `state`.
///
/// Effects are clamped, blocks join the set checked next cycle and the
/// pending marker is cleared. Win/loss evaluation is left to the caller.
pub fn apply_choice(state: &mut GameState, path: &[usize]) -> Result<ChoiceOutcome, TurnError> {
    if state.is_over() {
        return Err(TurnError::GameOver { cycle: state.cycle });
    }
    let event = state.pending_event().ok_or(TurnError::NoPendingChoice)?;
    for choice in &event.choices {
        validate_choice(choice).map_err(TurnError::InvalidChoice)?;
    }
    let title = event.title.clone();
    let outcome = walk_path(&event.choices, path)?;

    state.apply_effects(&outcome.effects);
    state.clamp();
    state
        .blocked_actions
        .extend(outcome.blocked_actions.iter().copied());
    state.pending_choice = None;

    tracing::info!(%title, steps = outcome.steps.len(), "dilemma resolved");
    Ok(outcome)
}
