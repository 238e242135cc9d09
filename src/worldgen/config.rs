use serde::{Deserialize, Serialize};

use crate::model::FactionType;

/// Configuration for starting a new game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewGameConfig {
    /// Faction name. Generated from the archetype when absent.
    pub faction_name: Option<String>,
    pub faction_type: FactionType,
    /// RNG seed for deterministic starting values.
    pub seed: u64,
}

impl NewGameConfig {
    pub fn new(faction_type: FactionType, seed: u64) -> Self {
        Self {
            faction_type,
            seed,
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.faction_name = Some(name.into());
        self
    }
}

impl Default for NewGameConfig {
    fn default() -> Self {
        Self {
            faction_name: None,
            faction_type: FactionType::Republic,
            seed: 42,
        }
    }
}
