use rand::Rng;
use rand::RngCore;

use crate::model::FactionType::{self, *};
use crate::model::stat::StatKey::{self, *};
use crate::model::{Faction, GameState, WorldState};

/// Uniform range every faction stat starts in, before archetype adjustments.
const BASE_STAT: (i32, i32) = (40, 60);
const BASE_REPUTATION: (i32, i32) = (-10, 10);

/// Bonus every player faction receives on top of its archetype.
pub const PLAYER_BONUS: &[(StatKey, i32)] = &[(Stability, 5), (Resources, 5)];

const GALACTIC_STABILITY: (i32, i32) = (50, 70);
const GATE_NETWORK: (i32, i32) = (60, 80);
const ANCIENT_TECH: (i32, i32) = (0, 10);

/// Starting bonuses and penalties of one archetype. World keys shift the
/// galaxy the faction starts in.
pub struct ArchetypeProfile {
    pub faction_type: FactionType,
    pub adjustments: &'static [(StatKey, i32)],
}

pub const PROFILES: &[ArchetypeProfile] = &[
    ArchetypeProfile {
        faction_type: Empire,
        adjustments: &[(Military, 10), (Influence, 5), (Reputation, -5), (Technology, -5)],
    },
    ArchetypeProfile {
        faction_type: Republic,
        adjustments: &[(Influence, 5), (Stability, 5), (Reputation, 5), (Military, -5)],
    },
    ArchetypeProfile {
        faction_type: Theocracy,
        adjustments: &[(Stability, 10), (Population, 5), (Technology, -10)],
    },
    ArchetypeProfile {
        faction_type: Syndicate,
        adjustments: &[(Resources, 10), (Influence, 5), (Reputation, -10), (Stability, -5)],
    },
    ArchetypeProfile {
        faction_type: Technocracy,
        adjustments: &[(Technology, 15), (Population, -5), (Military, -5)],
    },
    ArchetypeProfile {
        faction_type: Nomads,
        adjustments: &[(Military, 5), (Resources, 5), (Population, -10), (GateNetworkIntegrity, 5)],
    },
    ArchetypeProfile {
        faction_type: Hive,
        adjustments: &[(Population, 15), (Stability, 5), (Influence, -10), (Technology, -5)],
    },
    ArchetypeProfile {
        faction_type: Remnant,
        adjustments: &[(Technology, 10), (Population, -10), (Stability, -5), (AncientTechDiscovery, 10)],
    },
];

pub fn profile_for(faction_type: FactionType) -> Option<&'static ArchetypeProfile> {
    PROFILES.iter().find(|p| p.faction_type == faction_type)
}

fn roll(rng: &mut dyn RngCore, (low, high): (i32, i32)) -> i32 {
    rng.random_range(low..=high)
}

/// Roll the player's faction and the galaxy around it. The result is
/// clamped and its status derived; cycle starts at 1.
pub fn generate_state(
    id: u64,
    name: String,
    faction_type: FactionType,
    rng: &mut dyn RngCore,
) -> GameState {
    let mut faction = Faction::new(id, name, faction_type);
    faction.is_player = true;
    faction.population = roll(rng, BASE_STAT);
    faction.military = roll(rng, BASE_STAT);
    faction.technology = roll(rng, BASE_STAT);
    faction.influence = roll(rng, BASE_STAT);
    faction.resources = roll(rng, BASE_STAT);
    faction.stability = roll(rng, BASE_STAT);
    faction.reputation = roll(rng, BASE_REPUTATION);

    let world = WorldState {
        galactic_stability: roll(rng, GALACTIC_STABILITY),
        gate_network_integrity: roll(rng, GATE_NETWORK),
        ancient_tech_discovery: roll(rng, ANCIENT_TECH),
    };

    let mut state = GameState::new(faction, world);
    match profile_for(faction_type) {
        Some(profile) => {
            for &(key, delta) in profile.adjustments {
                if !state.faction.shift(key, delta) {
                    state.world.shift(key, delta);
                }
            }
        }
        None => tracing::warn!(%faction_type, "no archetype profile, using base stats"),
    }
    for &(key, delta) in PLAYER_BONUS {
        state.faction.shift(key, delta);
    }
    state.clamp();
    state
}
