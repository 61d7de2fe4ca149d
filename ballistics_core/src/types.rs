//! Core value types: projectiles, protection and body zones
//!
//! These mirror the records returned by the game-data API, so field names
//! deserialize from camelCase JSON.

use crate::tables::normalize_key;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A projectile as supplied by the game-data service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ammo {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Caliber label (display only)
    #[serde(default)]
    pub caliber: String,
    /// Health removed per hit before mitigation
    pub damage: f64,
    /// Penetration rating compared against armor resistance
    pub penetration_power: f64,
    /// Chance to fragment on hit, 0-100
    #[serde(default)]
    pub fragmentation_chance: f64,
    /// Chance to ricochet off armor, 0-100
    #[serde(default)]
    pub ricochet_chance: f64,
    /// Tracer round (display only)
    #[serde(default)]
    pub tracer: bool,
}

impl Ammo {
    pub fn new(name: impl Into<String>, damage: f64, penetration_power: f64) -> Self {
        Ammo {
            name: name.into(),
            caliber: String::new(),
            damage,
            penetration_power,
            fragmentation_chance: 0.0,
            ricochet_chance: 0.0,
            tracer: false,
        }
    }

    pub fn with_caliber(mut self, caliber: impl Into<String>) -> Self {
        self.caliber = caliber.into();
        self
    }

    pub fn with_fragmentation(mut self, chance: f64) -> Self {
        self.fragmentation_chance = chance;
        self
    }

    pub fn with_ricochet(mut self, chance: f64) -> Self {
        self.ricochet_chance = chance;
        self
    }
}

/// A piece of protective equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Armor {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Armor tier, 1-6
    #[serde(alias = "armorClass")]
    pub class: u8,
    /// Current durability
    pub durability: f64,
    /// Maximum durability. When absent the current durability is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_durability: Option<f64>,
    /// Material name, looked up in the material table
    #[serde(default)]
    pub material: String,
    /// Body zones covered by this piece
    #[serde(default)]
    pub zones: Vec<String>,
}

impl Armor {
    pub fn new(name: impl Into<String>, class: u8, durability: f64, material: impl Into<String>) -> Self {
        Armor {
            name: name.into(),
            class,
            durability,
            max_durability: None,
            material: material.into(),
            zones: Vec::new(),
        }
    }

    pub fn with_max_durability(mut self, max_durability: f64) -> Self {
        self.max_durability = Some(max_durability);
        self
    }

    pub fn covering<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zones = zones.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this piece protects the given zone. Names compare the way
    /// table keys do, so `leftArm`, `left_arm` and `Left Arm` all match.
    pub fn covers(&self, zone: &str) -> bool {
        let key = normalize_key(zone);
        self.zones.iter().any(|z| normalize_key(z) == key)
    }

    /// Maximum durability, falling back to the current durability
    pub fn effective_max_durability(&self) -> f64 {
        self.max_durability.unwrap_or(self.durability)
    }

    /// Remaining durability as a percentage of maximum
    pub fn durability_percent(&self) -> f64 {
        let max = self.effective_max_durability();
        if max <= 0.0 {
            return 0.0;
        }
        (self.durability / max * 100.0).clamp(0.0, 100.0)
    }
}

/// Error returned when a body zone name is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown body part: {0}")]
pub struct UnknownBodyPart(pub String);

/// Body zones with a base health pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyPart {
    Head,
    Thorax,
    Stomach,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    pub fn all() -> &'static [BodyPart] {
        &[
            BodyPart::Head,
            BodyPart::Thorax,
            BodyPart::Stomach,
            BodyPart::LeftArm,
            BodyPart::RightArm,
            BodyPart::LeftLeg,
            BodyPart::RightLeg,
        ]
    }

    /// Zone name as used in armor coverage lists
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyPart::Head => "head",
            BodyPart::Thorax => "thorax",
            BodyPart::Stomach => "stomach",
            BodyPart::LeftArm => "leftArm",
            BodyPart::RightArm => "rightArm",
            BodyPart::LeftLeg => "leftLeg",
            BodyPart::RightLeg => "rightLeg",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BodyPart::Head => "Head",
            BodyPart::Thorax => "Thorax",
            BodyPart::Stomach => "Stomach",
            BodyPart::LeftArm => "Left arm",
            BodyPart::RightArm => "Right arm",
            BodyPart::LeftLeg => "Left leg",
            BodyPart::RightLeg => "Right leg",
        }
    }

    /// Built-in health pool for this zone
    pub fn base_health(&self) -> f64 {
        match self {
            BodyPart::Head => 35.0,
            BodyPart::Thorax => 85.0,
            BodyPart::Stomach => 70.0,
            BodyPart::LeftArm | BodyPart::RightArm => 60.0,
            BodyPart::LeftLeg | BodyPart::RightLeg => 65.0,
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyPart {
    type Err = UnknownBodyPart;

    /// Accepts `leftArm`, `left_arm`, `Left Arm` and similar spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "head" => Ok(BodyPart::Head),
            "thorax" => Ok(BodyPart::Thorax),
            "stomach" => Ok(BodyPart::Stomach),
            "leftarm" => Ok(BodyPart::LeftArm),
            "rightarm" => Ok(BodyPart::RightArm),
            "leftleg" => Ok(BodyPart::LeftLeg),
            "rightleg" => Ok(BodyPart::RightLeg),
            _ => Err(UnknownBodyPart(s.to_string())),
        }
    }
}
