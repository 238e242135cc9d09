use std::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::action::{ActionCounts, ActionKind};
use super::event::GameEvent;
use super::faction::Faction;
use super::stat::{Effects, StatKey, clamp_stat};

/// Galaxy-wide ambient variables, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldState {
    pub galactic_stability: i32,
    pub gate_network_integrity: i32,
    pub ancient_tech_discovery: i32,
}

impl WorldState {
    pub fn get(&self, key: StatKey) -> Option<i32> {
        match key {
            StatKey::GalacticStability => Some(self.galactic_stability),
            StatKey::GateNetworkIntegrity => Some(self.gate_network_integrity),
            StatKey::AncientTechDiscovery => Some(self.ancient_tech_discovery),
            _ => None,
        }
    }

    /// Add `delta` without clamping. Returns false for faction keys.
    pub fn shift(&mut self, key: StatKey, delta: i32) -> bool {
        let slot = match key {
            StatKey::GalacticStability => &mut self.galactic_stability,
            StatKey::GateNetworkIntegrity => &mut self.gate_network_integrity,
            StatKey::AncientTechDiscovery => &mut self.ancient_tech_discovery,
            _ => return false,
        };
        *slot = slot.saturating_add(delta);
        true
    }

    pub fn clamp(&mut self) {
        self.galactic_stability = clamp_stat(StatKey::GalacticStability, self.galactic_stability);
        self.gate_network_integrity =
            clamp_stat(StatKey::GateNetworkIntegrity, self.gate_network_integrity);
        self.ancient_tech_discovery =
            clamp_stat(StatKey::AncientTechDiscovery, self.ancient_tech_discovery);
    }
}

/// The whole session: one faction, the galaxy around it, and the cycle log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Starts at 1; advanced only as the last step of a resolved cycle.
    pub cycle: u32,
    pub faction: Faction,
    pub world: WorldState,
    /// Every event that ever fired, in firing order.
    pub recent_events: Vec<GameEvent>,
    /// Kinds the player may not use next cycle. Rebuilt from scratch each cycle.
    pub blocked_actions: BTreeSet<ActionKind>,
    pub recent_action_counts: ActionCounts,
    /// Rolling headlines, newest last.
    pub news: VecDeque<String>,
    /// Index into `recent_events` of a dilemma still awaiting the player's choice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_choice: Option<usize>,
    pub has_won: bool,
    pub has_lost: bool,
}

impl GameState {
    pub fn new(faction: Faction, world: WorldState) -> Self {
        Self {
            cycle: 1,
            faction,
            world,
            recent_events: Vec::new(),
            blocked_actions: BTreeSet::new(),
            recent_action_counts: ActionCounts::default(),
            news: VecDeque::new(),
            pending_choice: None,
            has_won: false,
            has_lost: false,
        }
    }

    pub fn is_over(&self) -> bool {
        self.has_won || self.has_lost
    }

    /// Current value of any stat, faction or world.
    pub fn stat(&self, key: StatKey) -> i32 {
        self.faction
            .get(key)
            .or_else(|| self.world.get(key))
            .unwrap_or_default()
    }

    /// Add every delta to its faction or world slot. Leaves values unclamped;
    /// callers batch effects and then call [`GameState::clamp`].
    pub fn apply_effects(&mut self, effects: &Effects) {
        for (&key, &delta) in effects {
            if !self.faction.shift(key, delta) {
                self.world.shift(key, delta);
            }
        }
    }

    /// Clamp faction and world, re-deriving faction status.
    pub fn clamp(&mut self) {
        self.faction.clamp();
        self.world.clamp();
    }

    /// Events recorded for `cycle`.
    pub fn events_in(&self, cycle: u32) -> impl Iterator<Item = &GameEvent> {
        self.recent_events.iter().filter(move |e| e.cycle == cycle)
    }

    /// Append a headline, dropping the oldest beyond `capacity`.
    pub fn push_news(&mut self, headline: String, capacity: usize) {
        self.news.push_back(headline);
        while self.news.len() > capacity {
            self.news.pop_front();
        }
    }

    pub fn pending_event(&self) -> Option<&GameEvent> {
        self.pending_choice.and_then(|i| self.recent_events.get(i))
    }
}
