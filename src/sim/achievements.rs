//! End-of-cycle win/loss/achievement evaluation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::config::TurnConfig;
use crate::model::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Achievement {
    Victory,
    FirstWin,
    Survivor,
    TechMaster,
    TechAscendant,
    Defeat,
    LegendaryReputation,
    Warlord,
}

string_enum!(Achievement, "achievement", {
    Victory => "Victory",
    FirstWin => "FirstWin",
    Survivor => "Survivor",
    TechMaster => "TechMaster",
    TechAscendant => "TechAscendant",
    Defeat => "Defeat",
    LegendaryReputation => "LegendaryReputation",
    Warlord => "Warlord",
});

impl Achievement {
    pub fn description(self) -> &'static str {
        match self {
            Achievement::Victory => "Lead your faction to victory.",
            Achievement::FirstWin => "Win a game for the first time.",
            Achievement::Survivor => "Survive twenty cycles.",
            Achievement::TechMaster => "Reach maximum technology.",
            Achievement::TechAscendant => "Ascend through technological mastery.",
            Achievement::Defeat => "Watch your faction fall.",
            Achievement::LegendaryReputation => "Reach legendary reputation.",
            Achievement::Warlord => "Reach maximum military strength.",
        }
    }
}

/// Cross-session record of unlocked achievements. `unlock` must be
/// idempotent.
pub trait AchievementLedger {
    fn is_unlocked(&self, name: &str) -> bool;
    fn unlock(&mut self, name: &str, description: &str);
}

/// Ledger held in memory; serializable so callers can keep it between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryLedger {
    unlocked: BTreeMap<String, String>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.unlocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.unlocked.keys().map(String::as_str)
    }
}

impl AchievementLedger for MemoryLedger {
    fn is_unlocked(&self, name: &str) -> bool {
        self.unlocked.contains_key(name)
    }

    fn unlock(&mut self, name: &str, description: &str) {
        self.unlocked
            .entry(name.to_string())
            .or_insert_with(|| description.to_string());
    }
}

/// Unlock `achievement` unless already unlocked. Returns true if newly unlocked.
fn award(ledger: &mut dyn AchievementLedger, achievement: Achievement) -> bool {
    if ledger.is_unlocked(achievement.as_str()) {
        return false;
    }
    ledger.unlock(achievement.as_str(), achievement.description());
    tracing::info!(%achievement, "achievement unlocked");
    true
}

pub fn is_defeated(state: &GameState) -> bool {
    let f = &state.faction;
    f.stability <= 0 || f.population <= 0 || f.resources <= 0 || state.world.galactic_stability <= 0
}

pub fn is_victorious(state: &GameState, completed_cycle: u32, config: &TurnConfig) -> bool {
    completed_cycle > config.victory_cycle || state.faction.technology >= 100
}

/// Set the terminal flags for `completed_cycle`. Touches no ledger, so it
/// can run on a working copy before that copy is committed.
///
/// Defeat takes precedence: a faction that collapses in the same cycle it
/// would have won is defeated. Flags are never cleared.
pub fn settle_outcome(state: &mut GameState, completed_cycle: u32, config: &TurnConfig) {
    if state.is_over() {
        return;
    }
    if is_defeated(state) {
        state.has_lost = true;
    } else if is_victorious(state, completed_cycle, config) {
        state.has_won = true;
    }
}

/// Unlock every satisfied achievement not yet in `ledger`. Reads the flags
/// [`settle_outcome`] set; returns the achievements unlocked by this call.
pub fn award_achievements(
    state: &GameState,
    completed_cycle: u32,
    ledger: &mut dyn AchievementLedger,
    config: &TurnConfig,
) -> Vec<Achievement> {
    let f = &state.faction;
    let checks = [
        (state.has_lost, Achievement::Defeat),
        (state.has_won, Achievement::Victory),
        (state.has_won, Achievement::FirstWin),
        (completed_cycle >= config.survivor_cycle, Achievement::Survivor),
        (f.technology >= 100, Achievement::TechMaster),
        (f.technology >= 100, Achievement::TechAscendant),
        (f.reputation >= 100, Achievement::LegendaryReputation),
        (f.military >= 100, Achievement::Warlord),
    ];

    checks
        .into_iter()
        .filter(|&(cond, achievement)| cond && award(ledger, achievement))
        .map(|(_, achievement)| achievement)
        .collect()
}

/// [`settle_outcome`] followed by [`award_achievements`].
pub fn evaluate(
    state: &mut GameState,
    completed_cycle: u32,
    ledger: &mut dyn AchievementLedger,
    config: &TurnConfig,
) -> Vec<Achievement> {
    settle_outcome(state, completed_cycle, config);
    award_achievements(state, completed_cycle, ledger, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Faction, FactionType, WorldState};

    fn state() -> GameState {
        GameState::new(
            Faction::new(1, "Test".to_string(), FactionType::Empire),
            WorldState {
                galactic_stability: 50,
                gate_network_integrity: 50,
                ancient_tech_discovery: 0,
            },
        )
    }

    #[test]
    fn ledger_unlock_is_idempotent() {
        let mut ledger = MemoryLedger::new();
        ledger.unlock("Victory", "first");
        ledger.unlock("Victory", "second");
        assert_eq!(ledger.len(), 1);
        assert!(ledger.is_unlocked("Victory"));
    }

    #[test]
    fn quiet_cycle_unlocks_nothing() {
        let mut s = state();
        let mut ledger = MemoryLedger::new();
        let unlocked = evaluate(&mut s, 1, &mut ledger, &TurnConfig::default());
        assert!(unlocked.is_empty());
        assert!(!s.is_over());
    }

    #[test]
    fn max_technology_wins_once() {
        let mut s = state();
        s.faction.technology = 100;
        let mut ledger = MemoryLedger::new();
        let config = TurnConfig::default();

        let first = evaluate(&mut s, 3, &mut ledger, &config);
        assert!(s.has_won);
        assert_eq!(
            first,
            vec![
                Achievement::Victory,
                Achievement::FirstWin,
                Achievement::TechMaster,
                Achievement::TechAscendant
            ]
        );

        let second = evaluate(&mut s, 4, &mut ledger, &config);
        assert!(second.is_empty());
    }

    #[test]
    fn first_win_is_global_across_games() {
        let mut ledger = MemoryLedger::new();
        ledger.unlock("FirstWin", "earlier game");
        let mut s = state();
        let unlocked = evaluate(&mut s, 21, &mut ledger, &TurnConfig::default());
        assert!(s.has_won);
        assert!(unlocked.contains(&Achievement::Victory));
        assert!(!unlocked.contains(&Achievement::FirstWin));
        assert!(unlocked.contains(&Achievement::Survivor));
    }

    #[test]
    fn cycle_twenty_survives_but_does_not_win() {
        let mut s = state();
        let mut ledger = MemoryLedger::new();
        let unlocked = evaluate(&mut s, 20, &mut ledger, &TurnConfig::default());
        assert!(!s.has_won);
        assert_eq!(unlocked, vec![Achievement::Survivor]);
    }

    #[test]
    fn collapse_beats_victory() {
        let mut s = state();
        s.faction.technology = 100;
        s.faction.resources = 0;
        let mut ledger = MemoryLedger::new();
        let unlocked = evaluate(&mut s, 5, &mut ledger, &TurnConfig::default());
        assert!(s.has_lost);
        assert!(!s.has_won);
        assert!(unlocked.contains(&Achievement::Defeat));
        assert!(!unlocked.contains(&Achievement::Victory));
    }

    #[test]
    fn galactic_collapse_is_defeat() {
        let mut s = state();
        s.world.galactic_stability = 0;
        evaluate(&mut s, 2, &mut MemoryLedger::new(), &TurnConfig::default());
        assert!(s.has_lost);
    }

    #[test]
    fn terminal_flags_stick() {
        let mut s = state();
        s.has_lost = true;
        // Stats recovered, but a lost game stays lost.
        evaluate(&mut s, 2, &mut MemoryLedger::new(), &TurnConfig::default());
        assert!(s.has_lost);
        assert!(!s.has_won);
    }

    #[test]
    fn settling_leaves_ledger_untouched() {
        let mut s = state();
        s.faction.technology = 100;
        settle_outcome(&mut s, 3, &TurnConfig::default());
        assert!(s.has_won);

        let mut ledger = MemoryLedger::new();
        assert!(ledger.is_empty());
        let unlocked = award_achievements(&s, 3, &mut ledger, &TurnConfig::default());
        assert!(unlocked.contains(&Achievement::Victory));
    }

    #[test]
    fn names_round_trip_as_strings() {
        for &achievement in Achievement::ALL {
            let json = serde_json::to_string(&achievement).unwrap();
            assert_eq!(json, format!("\"{achievement}\""));
            let back: Achievement = serde_json::from_str(&json).unwrap();
            assert_eq!(back, achievement);
        }
        assert!(Achievement::try_from("Conqueror".to_string()).is_err());
    }

    #[test]
    fn reputation_and_military_milestones() {
        let mut s = state();
        s.faction.reputation = 100;
        s.faction.military = 100;
        let unlocked = evaluate(&mut s, 2, &mut MemoryLedger::new(), &TurnConfig::default());
        assert_eq!(
            unlocked,
            vec![Achievement::LegendaryReputation, Achievement::Warlord]
        );
    }
}
