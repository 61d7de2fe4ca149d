//! Resolver outputs
//!
//! All values are computed on demand and never persisted. Percentages are
//! in [0, 100]; damage figures are rounded to 2 decimals.

use crate::types::Armor;
use serde::{Deserialize, Serialize};

/// Expected outcome of one hit against one armor piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageCalculation {
    /// Chance the hit penetrates, percent
    pub penetration_chance: f64,
    /// Damage dealt when the hit penetrates
    pub damage_if_penetrates: f64,
    /// Damage dealt when the armor stops the hit
    pub damage_if_blocked: f64,
    /// Probability-weighted damage per hit
    pub average_damage: f64,
    /// Durability removed from the armor
    pub armor_damage: f64,
    /// Trauma transferred through the armor by a blocked hit
    pub blunt_damage: f64,
}

impl DamageCalculation {
    /// Outcome against an unprotected zone
    pub fn unprotected(damage: f64) -> Self {
        DamageCalculation {
            penetration_chance: 100.0,
            damage_if_penetrates: damage,
            damage_if_blocked: damage,
            average_damage: damage,
            armor_damage: 0.0,
            blunt_damage: 0.0,
        }
    }

    /// Share of the raw damage mitigated on average, percent
    pub fn mitigation_percent(&self) -> f64 {
        if self.damage_if_penetrates <= 0.0 {
            return 0.0;
        }
        ((1.0 - self.average_damage / self.damage_if_penetrates) * 100.0).clamp(0.0, 100.0)
    }
}

/// Outcome of a hit on a specific body zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDamageResult {
    pub body_zone: String,
    /// Armor protecting the zone, `None` if the zone is exposed
    pub protection: Option<Armor>,
    /// Expected damage per hit
    pub effective_damage: f64,
    pub penetration_chance: f64,
    pub armor_damage: f64,
    pub calculation: DamageCalculation,
}

impl ZoneDamageResult {
    pub fn is_exposed(&self) -> bool {
        self.protection.is_none()
    }

    pub fn summary(&self) -> String {
        match &self.protection {
            Some(armor) => format!(
                "{}: {:.2} dmg/hit, {:.1}% pen through {} (class {}), {:.2} wear",
                self.body_zone,
                self.effective_damage,
                self.penetration_chance,
                armor.name,
                armor.class,
                self.armor_damage
            ),
            None => format!("{}: {:.2} dmg/hit, exposed", self.body_zone, self.effective_damage),
        }
    }
}

/// Shots and time needed to deplete a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeToKill {
    pub target_health: f64,
    /// Expected hits to deplete the zone. Saturates at `u32::MAX`, which is also
    /// the value when the hit deals no damage; use `is_lethal` to tell them apart.
    pub shots_to_kill: u32,
    /// Seconds between the first and the last shot at the given fire rate
    pub time_to_kill: Option<f64>,
    pub damage_per_shot: f64,
    pub penetration_chance: f64,
    pub armor_damage: f64,
}

impl TimeToKill {
    /// Whether the zone can be depleted at all
    pub fn is_lethal(&self) -> bool {
        self.damage_per_shot > 0.0
    }

    pub fn summary(&self) -> String {
        if !self.is_lethal() {
            return "cannot deplete zone".to_string();
        }
        match self.time_to_kill {
            Some(seconds) => format!("{} shots, {:.3}s", self.shots_to_kill, seconds),
            None => format!("{} shots", self.shots_to_kill),
        }
    }
}

/// Damage including the expected fragmentation bonus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentationDamage {
    /// Expected damage per hit without fragmentation
    pub base_damage: f64,
    /// Expected extra damage from fragmentation
    pub fragmentation_damage: f64,
    pub total_damage: f64,
    pub fragmentation_chance: f64,
}

/// Which projectile came out ahead in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonWinner {
    First,
    Second,
    Tie,
}

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmmoEvaluation {
    pub ammo_name: String,
    pub zone: ZoneDamageResult,
    pub time_to_kill: TimeToKill,
}

/// Two projectiles against the same armor and zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmmoComparison {
    pub body_zone: String,
    pub first: AmmoEvaluation,
    pub second: AmmoEvaluation,
    pub winner: ComparisonWinner,
}

impl AmmoComparison {
    /// The winning side, if any
    pub fn winning(&self) -> Option<&AmmoEvaluation> {
        match self.winner {
            ComparisonWinner::First => Some(&self.first),
            ComparisonWinner::Second => Some(&self.second),
            ComparisonWinner::Tie => None,
        }
    }
}
