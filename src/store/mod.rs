//! Commit hooks the turn engine persists through.

mod json;
mod memory;

pub use json::{EVENTS_FILE, JsonDirStore, STATE_FILE, load_state, read_events};
pub use memory::MemoryStore;

use crate::error::PersistError;
use crate::model::GameState;

/// Synchronous commit hook. A failed commit must leave the previously
/// committed snapshot intact.
pub trait StateStore {
    fn commit(&mut self, state: &GameState) -> Result<(), PersistError>;
}

impl<S: StateStore + ?Sized> StateStore for &mut S {
    fn commit(&mut self, state: &GameState) -> Result<(), PersistError> {
        (**self).commit(state)
    }
}

impl<S: StateStore + ?Sized> StateStore for Box<S> {
    fn commit(&mut self, state: &GameState) -> Result<(), PersistError> {
        (**self).commit(state)
    }
}
