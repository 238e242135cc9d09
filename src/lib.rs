pub mod error;
#[macro_use]
pub mod model;
pub mod sim;
pub mod store;
pub mod worldgen;

pub use error::{ChoiceError, PersistError, TurnError, ValidationError};
pub use model::{
    ActionKind, EventCategory, EventChoice, Faction, FactionStatus, FactionType, GameEvent,
    GameState, PlayerAction, StatKey, WorldState,
};
pub use sim::{Achievement, AchievementLedger, MemoryLedger, TurnConfig, TurnEngine, TurnReport};
pub use store::{JsonDirStore, MemoryStore, StateStore};
pub use worldgen::{NewGameConfig, generate_game};
