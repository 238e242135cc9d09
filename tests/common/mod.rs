#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use gatefall::model::{Faction, FactionType, GameState, WorldState};
use gatefall::{MemoryLedger, MemoryStore, TurnConfig, TurnEngine};

/// A middling game: every faction stat at 50, a calm galaxy.
pub fn build_test_state() -> GameState {
    let mut faction = Faction::new(1, "Test Concord".to_string(), FactionType::Republic);
    faction.is_player = true;
    GameState::new(
        faction,
        WorldState {
            galactic_stability: 60,
            gate_network_integrity: 60,
            ancient_tech_discovery: 10,
        },
    )
}

pub fn build_engine(seed: u64, config: TurnConfig) -> TurnEngine<MemoryStore, MemoryLedger> {
    TurnEngine::new(
        Box::new(SmallRng::seed_from_u64(seed)),
        MemoryStore::new(),
        MemoryLedger::new(),
        config,
    )
}

/// Engine with `state` already loaded and no random events.
pub fn quiet_engine(state: GameState) -> TurnEngine<MemoryStore, MemoryLedger> {
    let mut engine = build_engine(7, TurnConfig::without_random_events());
    engine.load(state);
    engine
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
