//! Structural checks on actions, events and choices.
//!
//! These only answer "is this well-formed"; admission policy (duplicates,
//! blocked kinds, the per-cycle limit) lives in the turn engine.

use crate::error::ValidationError;
use crate::model::{Effects, EventChoice, GameEvent, PlayerAction};

/// Largest absolute delta a single effect entry may carry.
pub const MAX_EFFECT_MAGNITUDE: i32 = 100;

/// Deepest selection chain a dilemma may ask for.
pub const MAX_CHOICE_DEPTH: usize = 3;

pub fn validate_action(action: &PlayerAction) -> Result<(), ValidationError> {
    if action.parameters.keys().any(|k| k.trim().is_empty()) {
        return Err(ValidationError::EmptyParameterKey);
    }
    Ok(())
}

pub fn validate_event(event: &GameEvent) -> Result<(), ValidationError> {
    if event.title.trim().is_empty() {
        return Err(ValidationError::EmptyText {
            what: "event",
            field: "title",
        });
    }
    validate_effects(&event.effects)?;
    for choice in &event.choices {
        validate_choice(choice)?;
    }
    Ok(())
}

/// Validate a choice and everything reachable from it.
pub fn validate_choice(choice: &EventChoice) -> Result<(), ValidationError> {
    let depth = choice.depth();
    if depth > MAX_CHOICE_DEPTH {
        return Err(ValidationError::ChoiceTooDeep {
            depth,
            max: MAX_CHOICE_DEPTH,
        });
    }
    validate_choice_node(choice)
}

fn validate_choice_node(choice: &EventChoice) -> Result<(), ValidationError> {
    if choice.description.trim().is_empty() {
        return Err(ValidationError::EmptyText {
            what: "choice",
            field: "description",
        });
    }
    validate_effects(&choice.effects)?;
    choice.next.iter().try_for_each(validate_choice_node)
}

fn validate_effects(effects: &Effects) -> Result<(), ValidationError> {
    match effects
        .iter()
        .find(|&(_, delta)| delta.unsigned_abs() > MAX_EFFECT_MAGNITUDE.unsigned_abs())
    {
        Some((key, &delta)) => Err(ValidationError::EffectTooLarge {
            key: key.to_string(),
            delta,
        }),
        None => Ok(()),
    }
}
