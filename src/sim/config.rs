use serde::{Deserialize, Serialize};

/// Tunables for turn resolution. Chances are percentages checked against a
/// uniform roll in 1..=100.
///
/// Deserializes with per-field defaults, so a JSON document only needs the
/// knobs it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnConfig {
    /// Distinct action kinds admitted per cycle.
    pub max_actions_per_cycle: usize,
    /// Rolling count at which an action kind triggers diminishing returns.
    pub repetition_threshold: u32,

    pub base_event_chance: u32,
    /// Reputation points per step of roll skew.
    pub reputation_step: i32,
    /// Extra chance per reputation step.
    pub reputation_bonus_per_step: u32,
    pub reputation_bonus_cap: u32,
    /// Below this galactic stability the main roll may turn into a crisis.
    pub crisis_override_below: i32,
    pub crisis_override_chance: u32,
    /// Chance a category generator emits an archetype-flavored event.
    pub faction_event_chance: u32,

    /// At or below this galactic stability a dedicated crisis may fire.
    pub stability_crisis_at: i32,
    pub stability_crisis_chance: u32,
    /// At or above this ancient-tech discovery a surge may fire.
    pub ancient_surge_at: i32,
    pub ancient_surge_chance: u32,
    pub overture_chance: u32,
    /// Chance a dilemma replaces every other event of the cycle.
    pub dilemma_chance: u32,

    /// Exclusive upper bound of the per-cycle galactic stability loss.
    pub stability_drift_max: i32,
    /// Exclusive upper bound of the per-cycle gate network loss.
    pub gate_drift_max: i32,
    pub ancient_drift_chance: u32,
    /// Inclusive-exclusive range of an ancient-tech gain.
    pub ancient_drift_gain: (i32, i32),

    /// A faction still standing after this many cycles has won.
    pub victory_cycle: u32,
    pub survivor_cycle: u32,

    pub news_capacity: usize,
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self {
            max_actions_per_cycle: 2,
            repetition_threshold: 3,
            base_event_chance: 40,
            reputation_step: 20,
            reputation_bonus_per_step: 5,
            reputation_bonus_cap: 25,
            crisis_override_below: 30,
            crisis_override_chance: 30,
            faction_event_chance: 20,
            stability_crisis_at: 20,
            stability_crisis_chance: 30,
            ancient_surge_at: 70,
            ancient_surge_chance: 25,
            overture_chance: 10,
            dilemma_chance: 10,
            stability_drift_max: 3,
            gate_drift_max: 2,
            ancient_drift_chance: 15,
            ancient_drift_gain: (1, 5),
            victory_cycle: 20,
            survivor_cycle: 20,
            news_capacity: 15,
        }
    }
}

impl TurnConfig {
    /// Parse a (possibly partial) JSON override document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// A configuration where nothing fires by chance. Repetition penalties,
    /// drift bounds and thresholds keep their defaults.
    pub fn without_random_events() -> Self {
        Self {
            base_event_chance: 0,
            reputation_bonus_cap: 0,
            crisis_override_chance: 0,
            stability_crisis_chance: 0,
            ancient_surge_chance: 0,
            overture_chance: 0,
            dilemma_chance: 0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = TurnConfig::from_json(r#"{ "dilemma_chance": 0, "news_capacity": 5 }"#).unwrap();
        assert_eq!(config.dilemma_chance, 0);
        assert_eq!(config.news_capacity, 5);
        assert_eq!(config.base_event_chance, 40);
        assert_eq!(config.max_actions_per_cycle, 2);
    }

    #[test]
    fn quiet_config_disables_every_chance() {
        let config = TurnConfig::without_random_events();
        assert_eq!(config.base_event_chance, 0);
        assert_eq!(config.dilemma_chance, 0);
        assert_eq!(config.repetition_threshold, 3);
    }
}
