//! Plays one game with random actions until it ends.
//!
//! ```text
//! RUST_LOG=gatefall=debug cargo run --example autoplay -- [seed] [archetype] [save-dir]
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use gatefall::model::{ActionKind, EventChoice, PlayerAction};
use gatefall::{
    FactionType, MemoryLedger, MemoryStore, NewGameConfig, StateStore, TurnConfig, TurnEngine,
    TurnError,
};

const MAX_CYCLES: u32 = 40;

fn pick_actions(blocked: &[ActionKind], rng: &mut SmallRng) -> Vec<PlayerAction> {
    let mut open: Vec<ActionKind> = ActionKind::ALL
        .iter()
        .copied()
        .filter(|k| !blocked.contains(k))
        .collect();
    let mut picked = Vec::new();
    while picked.len() < 2 && !open.is_empty() {
        let kind = open.swap_remove(rng.random_range(0..open.len()));
        picked.push(PlayerAction::new(kind));
    }
    picked
}

fn random_leaf_path(choices: &[EventChoice], rng: &mut SmallRng) -> Vec<usize> {
    let mut path = Vec::new();
    let mut options = choices;
    while !options.is_empty() {
        let index = rng.random_range(0..options.len());
        path.push(index);
        options = &options[index].next;
    }
    path
}

fn play<S: StateStore>(mut engine: TurnEngine<S, MemoryLedger>, game: &NewGameConfig, seed: u64) -> Result<(), TurnError> {
    let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
    let faction = engine.start(game)?.faction.name.clone();
    info!(%faction, "game started");

    loop {
        let Some(state) = engine.state() else {
            return Err(TurnError::NoActiveGame);
        };
        if state.is_over() || state.cycle > MAX_CYCLES {
            break;
        }
        let blocked: Vec<_> = state.blocked_actions.iter().copied().collect();
        let actions = pick_actions(&blocked, &mut rng);
        let report = engine.process_turn(&actions)?;

        for event in &report.events {
            info!(cycle = report.cycle, title = %event.title, "event");
        }
        if let Some(choices) = engine
            .state()
            .and_then(|s| s.pending_event())
            .map(|e| e.choices.clone())
        {
            let path = random_leaf_path(&choices, &mut rng);
            let resolved = engine.resolve_choice(&path)?;
            info!(title = %resolved.title, steps = ?resolved.choice.steps, "dilemma resolved");
        }
    }

    if let Some(state) = engine.state() {
        let f = &state.faction;
        info!(
            cycle = state.cycle,
            won = state.has_won,
            lost = state.has_lost,
            status = %f.status,
            population = f.population,
            military = f.military,
            technology = f.technology,
            resources = f.resources,
            stability = f.stability,
            reputation = f.reputation,
            "game over"
        );
    }
    let unlocked: Vec<_> = engine.ledger().names().collect();
    info!(?unlocked, "achievements");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let faction_type = args
        .next()
        .and_then(|s| FactionType::try_from(s).ok())
        .unwrap_or(FactionType::Republic);
    let save_dir = args.next();

    let game = NewGameConfig::new(faction_type, seed);
    let rng = Box::new(SmallRng::seed_from_u64(seed));
    let config = TurnConfig::default();

    let result = match save_dir {
        Some(dir) => match gatefall::JsonDirStore::create(&dir) {
            Ok(store) => play(TurnEngine::new(rng, store, MemoryLedger::new(), config), &game, seed),
            Err(error) => {
                eprintln!("cannot create save directory {dir}: {error}");
                std::process::exit(1);
            }
        },
        None => play(
            TurnEngine::new(rng, MemoryStore::new(), MemoryLedger::new(), config),
            &game,
            seed,
        ),
    };
    if let Err(error) = result {
        eprintln!("autoplay failed: {error}");
        std::process::exit(1);
    }
}
