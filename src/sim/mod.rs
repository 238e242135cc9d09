pub mod achievements;
pub mod actions;
pub mod choice;
mod config;
mod engine;
pub mod events;
pub mod turn;
pub mod validate;

pub use achievements::{Achievement, AchievementLedger, MemoryLedger};
pub use actions::{ACTION_CATALOG, ActionDef, apply_action, catalog_entry};
pub use choice::{ChoiceOutcome, walk_path};
pub use config::TurnConfig;
pub use engine::{ChoiceReport, TurnEngine};
pub use events::select_events;
pub use turn::{Outcome, RejectedAction, Rejection, TurnReport};
