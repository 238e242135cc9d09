use serde::{Deserialize, Serialize};

use super::stat::{StatKey, clamp_stat};

/// The eight faction archetypes. Each carries its own starting profile and
/// event affinities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FactionType {
    Empire,
    Republic,
    Theocracy,
    Syndicate,
    Technocracy,
    Nomads,
    Hive,
    Remnant,
}

string_enum!(FactionType, "faction type", {
    Empire => "empire",
    Republic => "republic",
    Theocracy => "theocracy",
    Syndicate => "syndicate",
    Technocracy => "technocracy",
    Nomads => "nomads",
    Hive => "hive",
    Remnant => "remnant",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FactionStatus {
    Thriving,
    Stable,
    Struggling,
    Desperate,
    Collapsing,
}

string_enum!(FactionStatus, "faction status", {
    Thriving => "thriving",
    Stable => "stable",
    Struggling => "struggling",
    Desperate => "desperate",
    Collapsing => "collapsing",
});

impl FactionStatus {
    /// Fixed precedence, first match wins.
    pub fn derive(stability: i32, population: i32, resources: i32) -> Self {
        let lowest = stability.min(population).min(resources);
        if lowest <= 0 {
            FactionStatus::Collapsing
        } else if lowest <= 10 {
            FactionStatus::Desperate
        } else if lowest <= 25 {
            FactionStatus::Struggling
        } else if stability >= 80 && population >= 80 && resources >= 80 {
            FactionStatus::Thriving
        } else {
            FactionStatus::Stable
        }
    }
}

/// The player's faction.
///
/// Stats may hold out-of-range values only between a batch of
/// [`Faction::shift`] calls and the following [`Faction::clamp`]; `status` is
/// only meaningful after `clamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faction {
    pub id: u64,
    pub name: String,
    pub faction_type: FactionType,
    pub is_player: bool,
    pub population: i32,
    pub military: i32,
    pub technology: i32,
    pub influence: i32,
    pub resources: i32,
    pub stability: i32,
    pub reputation: i32,
    pub status: FactionStatus,
}

impl Faction {
    pub fn new(id: u64, name: String, faction_type: FactionType) -> Self {
        let mut faction = Self {
            id,
            name,
            faction_type,
            is_player: false,
            population: 50,
            military: 50,
            technology: 50,
            influence: 50,
            resources: 50,
            stability: 50,
            reputation: 0,
            status: FactionStatus::Stable,
        };
        faction.clamp();
        faction
    }

    /// Current value of a faction stat. World keys return `None`.
    pub fn get(&self, key: StatKey) -> Option<i32> {
        Some(match key {
            StatKey::Population => self.population,
            StatKey::Military => self.military,
            StatKey::Technology => self.technology,
            StatKey::Influence => self.influence,
            StatKey::Resources => self.resources,
            StatKey::Stability => self.stability,
            StatKey::Reputation => self.reputation,
            _ => return None,
        })
    }

    fn slot_mut(&mut self, key: StatKey) -> Option<&mut i32> {
        Some(match key {
            StatKey::Population => &mut self.population,
            StatKey::Military => &mut self.military,
            StatKey::Technology => &mut self.technology,
            StatKey::Influence => &mut self.influence,
            StatKey::Resources => &mut self.resources,
            StatKey::Stability => &mut self.stability,
            StatKey::Reputation => &mut self.reputation,
            _ => return None,
        })
    }

    /// Add `delta` without clamping. Returns false for world keys.
    pub fn shift(&mut self, key: StatKey, delta: i32) -> bool {
        match self.slot_mut(key) {
            Some(slot) => {
                *slot = slot.saturating_add(delta);
                true
            }
            None => false,
        }
    }

    /// Force every stat into its legal range, then re-derive `status`.
    pub fn clamp(&mut self) {
        for &key in StatKey::ALL {
            if let Some(slot) = self.slot_mut(key) {
                *slot = clamp_stat(key, *slot);
            }
        }
        self.status = FactionStatus::derive(self.stability, self.population, self.resources);
    }
}
