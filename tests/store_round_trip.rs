mod common;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use common::{build_test_state, read_lines};
use gatefall::model::{ActionKind, FactionType, PlayerAction};
use gatefall::store::{EVENTS_FILE, STATE_FILE, load_state, read_events};
use gatefall::{
    JsonDirStore, MemoryLedger, NewGameConfig, StateStore, TurnConfig, TurnEngine, TurnError,
};

#[test]
fn engine_commits_to_json_dir() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonDirStore::create(dir.path().join("save")).unwrap();
    let config = TurnConfig {
        base_event_chance: 100,
        dilemma_chance: 0,
        ..TurnConfig::default()
    };
    let mut engine = TurnEngine::new(
        Box::new(SmallRng::seed_from_u64(17)),
        store,
        MemoryLedger::new(),
        config,
    );
    engine
        .start(&NewGameConfig::new(FactionType::Syndicate, 5).named("Brass Exchange"))
        .unwrap();

    for _ in 0..3 {
        engine
            .process_turn(&[PlayerAction::new(ActionKind::TradeAgreements)
                .with_param("partner", "Vell")])
            .unwrap();
    }

    let save = engine.store().dir();
    assert!(save.join(STATE_FILE).exists());
    assert!(save.join(EVENTS_FILE).exists());

    let loaded = load_state(save).unwrap();
    let live = engine.state().unwrap();
    assert_eq!(&loaded, live);
    assert_eq!(loaded.cycle, 4);
    assert_eq!(loaded.faction.name, "Brass Exchange");

    let lines = read_lines(&save.join(EVENTS_FILE));
    assert_eq!(lines.len(), live.recent_events.len());
    assert!(lines.len() >= 3, "base chance 100 fires every cycle");
    for line in &lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value["title"].is_string());
        assert!(value["category"].is_string());
    }
    assert_eq!(read_events(save).unwrap(), live.recent_events);
}

#[test]
fn state_round_trips_losslessly() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonDirStore::create(dir.path()).unwrap();

    let mut state = build_test_state();
    state.faction.reputation = -37;
    state.blocked_actions.insert(ActionKind::GateNetworkResearch);
    state.recent_action_counts.set(ActionKind::Diplomacy, 2);
    state.push_news("Cycle 1: Quiet Skies".to_string(), 15);
    state.has_lost = true;

    store.commit(&state).unwrap();
    assert_eq!(load_state(dir.path()).unwrap(), state);
}

#[test]
fn loaded_state_resumes_play() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonDirStore::create(dir.path()).unwrap();
    store.commit(&build_test_state()).unwrap();

    let mut engine = common::quiet_engine(load_state(dir.path()).unwrap());
    let report = engine
        .process_turn(&[PlayerAction::new(ActionKind::Diplomacy)])
        .unwrap();
    assert_eq!(report.cycle, 1);
    assert_eq!(engine.state().unwrap().faction.reputation, 5);
}

#[test]
fn lost_game_stays_lost_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonDirStore::create(dir.path()).unwrap();
    let mut engine = TurnEngine::new(
        Box::new(SmallRng::seed_from_u64(4)),
        store,
        MemoryLedger::new(),
        TurnConfig::without_random_events(),
    );
    let mut state = build_test_state();
    state.faction.resources = 2;
    engine.load(state);

    engine
        .process_turn(&[PlayerAction::new(ActionKind::ResearchTechnology)])
        .unwrap();
    assert!(engine.state().unwrap().has_lost);

    let saved = load_state(dir.path()).unwrap();
    assert!(saved.has_lost);
    assert_eq!(saved.cycle, 2);
    assert_eq!(saved.faction.resources, 0);

    let mut resumed = common::quiet_engine(saved);
    assert!(matches!(
        resumed.process_turn(&[]),
        Err(TurnError::GameOver { cycle: 2 })
    ));
}

#[test]
fn won_game_stays_won_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonDirStore::create(dir.path()).unwrap();
    let mut engine = TurnEngine::new(
        Box::new(SmallRng::seed_from_u64(4)),
        store,
        MemoryLedger::new(),
        TurnConfig::without_random_events(),
    );
    let mut state = build_test_state();
    state.faction.technology = 98;
    engine.load(state);

    engine
        .process_turn(&[PlayerAction::new(ActionKind::ResearchTechnology)])
        .unwrap();
    let saved = load_state(dir.path()).unwrap();
    assert!(saved.has_won);
    assert_eq!(&saved, engine.state().unwrap());
}
