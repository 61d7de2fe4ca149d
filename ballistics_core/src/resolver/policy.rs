//! Resolution policies

use crate::types::Armor;
use serde::{Deserialize, Serialize};

/// How per-hit armor wear is derived from the penetration chance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorWearPolicy {
    /// Wear as a penetrating hit when the chance exceeds 50%, else as a blocked hit
    #[default]
    MajorityThreshold,
    /// Probability-weighted blend of penetrating and blocked wear
    Weighted,
}

/// Which equipped piece protects a zone covered by more than one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerPolicy {
    /// First covering piece in equipment order
    #[default]
    FirstListed,
    /// Covering piece with the highest class; ties go to the first listed
    HighestClass,
}

impl LayerPolicy {
    /// Pick the piece protecting `zone`. Only one piece ever applies;
    /// layers are not stacked.
    pub fn select<'a>(&self, zone: &str, equipped: &'a [Armor]) -> Option<&'a Armor> {
        let mut covering = equipped.iter().filter(|armor| armor.covers(zone));
        match self {
            LayerPolicy::FirstListed => covering.next(),
            LayerPolicy::HighestClass => covering.fold(None, |best: Option<&'a Armor>, armor| match best {
                Some(current) if current.class >= armor.class => Some(current),
                _ => Some(armor),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loadout() -> Vec<Armor> {
        vec![
            Armor::new("PACA", 2, 50.0, "aramid").covering(["thorax", "stomach"]),
            Armor::new("Slick", 6, 80.0, "titan").covering(["thorax"]),
            Armor::new("Korund", 6, 60.0, "ceramic").covering(["thorax", "leftArm"]),
        ]
    }

    #[test]
    fn test_first_listed_wins() {
        let equipped = loadout();
        let picked = LayerPolicy::FirstListed.select("thorax", &equipped).unwrap();
        assert_eq!(picked.name, "PACA");
    }

    #[test]
    fn test_highest_class_wins_ties_to_first() {
        let equipped = loadout();
        let picked = LayerPolicy::HighestClass.select("thorax", &equipped).unwrap();
        assert_eq!(picked.name, "Slick");

        let picked = LayerPolicy::HighestClass.select("stomach", &equipped).unwrap();
        assert_eq!(picked.name, "PACA");
    }

    #[test]
    fn test_uncovered_zone() {
        let equipped = loadout();
        assert!(LayerPolicy::FirstListed.select("head", &equipped).is_none());
        assert!(LayerPolicy::HighestClass.select("head", &[]).is_none());
    }
}
