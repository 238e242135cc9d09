#[macro_use]
mod macros;

pub mod action;
pub mod event;
pub mod faction;
pub mod stat;
pub mod state;

pub use action::{ActionCounts, ActionKind, PlayerAction};
pub use event::{EventCategory, EventChoice, EventPrompt, GameEvent};
pub use faction::{Faction, FactionStatus, FactionType};
pub use stat::{Effects, StatKey};
pub use state::{GameState, WorldState};
