use super::StateStore;
use crate::error::PersistError;
use crate::model::GameState;

/// Keeps every committed snapshot in memory.
///
/// [`MemoryStore::fail_next`] makes the following commits fail, which is how
/// tests drive the persistence-failure paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshots: Vec<GameState>,
    failures_left: usize,
    attempts: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the next `count` commits.
    pub fn fail_next(&mut self, count: usize) {
        self.failures_left = count;
    }

    pub fn snapshots(&self) -> &[GameState] {
        &self.snapshots
    }

    pub fn latest(&self) -> Option<&GameState> {
        self.snapshots.last()
    }

    /// Commits attempted so far, failed ones included.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl StateStore for MemoryStore {
    fn commit(&mut self, state: &GameState) -> Result<(), PersistError> {
        self.attempts += 1;
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(PersistError::Rejected(format!(
                "commit of cycle {} refused",
                state.cycle
            )));
        }
        self.snapshots.push(state.clone());
        Ok(())
    }
}
