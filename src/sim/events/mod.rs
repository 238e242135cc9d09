//! Event selection: which events fire in a cycle.
//!
//! Rolls run in a fixed order and draw from one shared RNG, so a seeded
//! generator replays the same cycle:
//!
//! 1. Repetition penalty, one event per over-used action kind (no roll).
//! 2. Main roll, skewed by reputation, possibly overridden to a crisis when
//!    galactic stability is low.
//! 3. Stability crisis roll.
//! 4. Ancient tech surge roll.
//! 5. Alliance overture roll.
//! 6. Dilemma roll. When it hits, the dilemma replaces everything above.

pub mod dilemmas;
pub mod flavored;
pub mod tables;

use rand::{Rng, RngCore};

use crate::model::{ActionKind, EventCategory, EventPrompt, Faction, GameEvent, GameState};

use super::config::TurnConfig;
use dilemmas::DILEMMAS;
use flavored::flavored_for;
use tables::{
    ALLIANCE_OVERTURE, ANCIENT_SURGE, DIMINISHING_RETURNS, STABILITY_CRISIS, templates_for,
};

/// Uniform roll in 1..=100.
pub fn roll_percent(rng: &mut dyn RngCore) -> u32 {
    rng.random_range(1..=100)
}

/// How the main roll resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainRoll {
    Miss,
    /// Inside the base window: uniform ordinary category.
    Ordinary,
    /// Inside the reputation skew above the base window.
    Favorable,
    Hostile,
}

/// Extra percentage points the reputation skew adds, and in which direction.
/// Positive for favorable, negative for hostile.
pub fn reputation_skew(reputation: i32, config: &TurnConfig) -> i32 {
    if config.reputation_step <= 0 {
        return 0;
    }
    let steps = reputation.unsigned_abs() / config.reputation_step.unsigned_abs();
    let bonus = steps
        .saturating_mul(config.reputation_bonus_per_step)
        .min(config.reputation_bonus_cap) as i32;
    if reputation >= 0 { bonus } else { -bonus }
}

/// Classify a main-roll value against the base window and reputation skew.
pub fn classify_main_roll(roll: u32, reputation: i32, config: &TurnConfig) -> MainRoll {
    let skew = reputation_skew(reputation, config);
    let base = config.base_event_chance;
    if roll <= base {
        MainRoll::Ordinary
    } else if roll <= base + skew.unsigned_abs() {
        if skew > 0 {
            MainRoll::Favorable
        } else {
            MainRoll::Hostile
        }
    } else {
        MainRoll::Miss
    }
}

/// Resolve the category of the main event, if any.
fn roll_main_category(
    state: &GameState,
    rng: &mut dyn RngCore,
    config: &TurnConfig,
) -> Option<EventCategory> {
    let main = classify_main_roll(roll_percent(rng), state.faction.reputation, config);

    let crisis_override = state.world.galactic_stability < config.crisis_override_below
        && roll_percent(rng) <= config.crisis_override_chance;
    if crisis_override {
        tracing::debug!(?main, "low galactic stability turned the main roll into a crisis");
        return Some(EventCategory::Crisis);
    }

    match main {
        MainRoll::Miss => None,
        MainRoll::Ordinary => {
            let ordinary = EventCategory::ORDINARY;
            Some(ordinary[rng.random_range(0..ordinary.len())])
        }
        MainRoll::Favorable => {
            let favorable = EventCategory::FAVORABLE;
            Some(favorable[rng.random_range(0..favorable.len())])
        }
        MainRoll::Hostile => Some(EventCategory::Crisis),
    }
}

/// Generate one event of `category`: an archetype-flavored bonus with
/// `faction_event_chance`, otherwise a uniform pick from the plain table.
pub fn generate_category_event(
    category: EventCategory,
    faction: &Faction,
    cycle: u32,
    rng: &mut dyn RngCore,
    config: &TurnConfig,
) -> GameEvent {
    if roll_percent(rng) <= config.faction_event_chance {
        let flavored: Vec<_> = flavored_for(category, faction.faction_type).collect();
        if !flavored.is_empty() {
            let row = flavored[rng.random_range(0..flavored.len())];
            return row.template.instantiate(category, cycle);
        }
    }
    let table = templates_for(category);
    table[rng.random_range(0..table.len())].instantiate(category, cycle)
}

pub fn repetition_event(kind: ActionKind, cycle: u32) -> GameEvent {
    let mut event = DIMINISHING_RETURNS.instantiate(EventCategory::Crisis, cycle);
    event.description = format!("{} Overuse of {kind} has worn thin.", event.description);
    event.blocked_actions.insert(kind);
    event
}

pub fn ancient_surge_event(cycle: u32) -> GameEvent {
    let mut event = ANCIENT_SURGE.instantiate(EventCategory::Discovery, cycle);
    event.unblocked_actions.insert(ActionKind::AncientStudies);
    event
}

pub fn alliance_overture_event(cycle: u32) -> GameEvent {
    let mut event = ALLIANCE_OVERTURE.instantiate(EventCategory::Military, cycle);
    event.prompt = Some(EventPrompt::AllianceOverture);
    event
}

/// Pick this cycle's events.
///
/// `repeated` lists the action kinds over the repetition threshold; the turn
/// engine computes it from the counts the cycle started with.
pub fn select_events(
    state: &GameState,
    repeated: &[ActionKind],
    rng: &mut dyn RngCore,
    config: &TurnConfig,
) -> Vec<GameEvent> {
    let cycle = state.cycle;
    let mut events = Vec::new();

    for &kind in repeated {
        events.push(repetition_event(kind, cycle));
    }

    if let Some(category) = roll_main_category(state, rng, config) {
        events.push(generate_category_event(
            category,
            &state.faction,
            cycle,
            rng,
            config,
        ));
    }

    if state.world.galactic_stability <= config.stability_crisis_at
        && roll_percent(rng) <= config.stability_crisis_chance
    {
        events.push(STABILITY_CRISIS.instantiate(EventCategory::Crisis, cycle));
    }

    if state.world.ancient_tech_discovery >= config.ancient_surge_at
        && roll_percent(rng) <= config.ancient_surge_chance
    {
        events.push(ancient_surge_event(cycle));
    }

    if roll_percent(rng) <= config.overture_chance {
        events.push(alliance_overture_event(cycle));
    }

    if roll_percent(rng) <= config.dilemma_chance {
        let dilemma = &DILEMMAS[rng.random_range(0..DILEMMAS.len())];
        tracing::debug!(title = dilemma.title, skipped = events.len(), "dilemma replaces cycle events");
        return vec![dilemma.instantiate(cycle)];
    }

    events
}
