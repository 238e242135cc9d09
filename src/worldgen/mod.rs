pub mod config;
pub mod factions;
pub mod names;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::model::GameState;

pub use config::NewGameConfig;
pub use factions::{ArchetypeProfile, PROFILES, profile_for};

/// The single player faction's id.
pub const PLAYER_FACTION_ID: u64 = 1;

/// Generate a new game: the player faction and its galaxy, at cycle 1.
pub fn generate_game(config: &NewGameConfig) -> GameState {
    let mut rng = SmallRng::seed_from_u64(config.seed);

    let name = match &config.faction_name {
        Some(name) if !name.trim().is_empty() => name.clone(),
        _ => names::generate_faction_name(config.faction_type, &mut rng),
    };
    let state = factions::generate_state(PLAYER_FACTION_ID, name, config.faction_type, &mut rng);

    tracing::info!(
        faction = %state.faction.name,
        faction_type = %config.faction_type,
        seed = config.seed,
        "new game"
    );
    state
}
