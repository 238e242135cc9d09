use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Every numeric attribute an action or event can shift.
///
/// The first seven live on the faction; the last three are world ambient
/// variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum StatKey {
    Population,
    Military,
    Technology,
    Influence,
    Resources,
    Stability,
    Reputation,
    GalacticStability,
    GateNetworkIntegrity,
    AncientTechDiscovery,
}

string_enum!(StatKey, "stat key", {
    Population => "population",
    Military => "military",
    Technology => "technology",
    Influence => "influence",
    Resources => "resources",
    Stability => "stability",
    Reputation => "reputation",
    GalacticStability => "galactic_stability",
    GateNetworkIntegrity => "gate_network_integrity",
    AncientTechDiscovery => "ancient_tech_discovery",
});

impl StatKey {
    /// Legal inclusive range for this stat.
    pub fn bounds(self) -> (i32, i32) {
        match self {
            StatKey::Reputation => (REPUTATION_MIN, REPUTATION_MAX),
            _ => (STAT_MIN, STAT_MAX),
        }
    }

    pub fn is_world(self) -> bool {
        matches!(
            self,
            StatKey::GalacticStability | StatKey::GateNetworkIntegrity | StatKey::AncientTechDiscovery
        )
    }
}

pub const STAT_MIN: i32 = 0;
pub const STAT_MAX: i32 = 100;
pub const REPUTATION_MIN: i32 = -100;
pub const REPUTATION_MAX: i32 = 100;

/// Stat key to signed delta. Ordered so serialization and application are
/// deterministic.
pub type Effects = BTreeMap<StatKey, i32>;

/// Build an owned effects map from a static table row.
pub fn effects_from(pairs: &[(StatKey, i32)]) -> Effects {
    let mut effects = Effects::new();
    for &(key, delta) in pairs {
        *effects.entry(key).or_insert(0) += delta;
    }
    effects
}

/// Add `delta` to every matching key of `into`.
pub fn merge_effects(into: &mut Effects, from: &Effects) {
    for (&key, &delta) in from {
        let slot = into.entry(key).or_insert(0);
        *slot = slot.saturating_add(delta);
    }
}

/// Saturating clamp into the key's legal range.
pub fn clamp_stat(key: StatKey, value: i32) -> i32 {
    let (min, max) = key.bounds();
    value.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_serialize_as_snake_case_strings() {
        let effects = effects_from(&[(StatKey::GalacticStability, 3), (StatKey::Influence, 2)]);
        let json = serde_json::to_value(&effects).unwrap();
        assert_eq!(json["galactic_stability"], 3);
        assert_eq!(json["influence"], 2);

        let back: Effects = serde_json::from_value(json).unwrap();
        assert_eq!(back, effects);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = StatKey::try_from("charisma".to_string()).unwrap_err();
        assert!(err.contains("charisma"));
        assert!(StatKey::try_from(String::new()).is_err());
    }

    #[test]
    fn effects_from_sums_repeated_keys() {
        let effects = effects_from(&[(StatKey::Military, 2), (StatKey::Military, 3)]);
        assert_eq!(effects[&StatKey::Military], 5);
    }

    #[test]
    fn merge_accumulates() {
        let mut a = effects_from(&[(StatKey::Stability, 4)]);
        merge_effects(&mut a, &effects_from(&[(StatKey::Stability, -6), (StatKey::Resources, 1)]));
        assert_eq!(a[&StatKey::Stability], -2);
        assert_eq!(a[&StatKey::Resources], 1);
    }

    #[test]
    fn clamp_respects_reputation_range() {
        assert_eq!(clamp_stat(StatKey::Reputation, -150), -100);
        assert_eq!(clamp_stat(StatKey::Technology, -3), 0);
        assert_eq!(clamp_stat(StatKey::Technology, 103), 100);
        assert_eq!(clamp_stat(StatKey::GalacticStability, 55), 55);
    }
}
