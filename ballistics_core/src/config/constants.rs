//! Tunable model coefficients

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// One breakpoint of the penetration curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Penetration power minus effective armor resistance
    pub difference: f64,
    /// Penetration chance (percent) at this difference
    pub chance: f64,
}

impl CurvePoint {
    pub const fn new(difference: f64, chance: f64) -> Self {
        CurvePoint { difference, chance }
    }
}

/// Every coefficient the resolver uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConstants {
    /// Armor resistance per armor class
    #[serde(default = "default_class_resistance_step")]
    pub class_resistance_step: f64,
    /// Lower bound of the durability ratio
    #[serde(default = "default_durability_floor")]
    pub durability_floor: f64,
    /// Breakpoints of the penetration curve, ascending by difference
    #[serde(default = "default_penetration_curve")]
    pub penetration_curve: Vec<CurvePoint>,
    /// Blunt damage reduction per armor class
    #[serde(default = "default_blunt_reduction_per_class")]
    pub blunt_reduction_per_class: f64,
    /// Blocked hits always transfer at least (1 - cap) of the damage
    #[serde(default = "default_blunt_reduction_cap")]
    pub blunt_reduction_cap: f64,
    /// Armor wear per point of penetration
    #[serde(default = "default_wear_per_penetration")]
    pub wear_per_penetration: f64,
    /// Wear multiplier for penetrating hits
    #[serde(default = "default_penetrated_wear_multiplier")]
    pub penetrated_wear_multiplier: f64,
    /// Wear reduction per armor class above 1
    #[serde(default = "default_wear_reduction_per_class")]
    pub wear_reduction_per_class: f64,
    /// Minimum wear per hit
    #[serde(default = "default_minimum_wear")]
    pub minimum_wear: f64,
    /// Fragmentation reduction per armor class
    #[serde(default = "default_fragmentation_reduction_per_class")]
    pub fragmentation_reduction_per_class: f64,
    /// Share of effective damage added by a fragmenting hit
    #[serde(default = "default_fragmentation_damage_share")]
    pub fragmentation_damage_share: f64,
    /// Ricochet chance added per armor class (as a fraction)
    #[serde(default = "default_ricochet_per_class")]
    pub ricochet_per_class: f64,
    /// Lower bound of the impact-angle factor
    #[serde(default = "default_angle_factor_floor")]
    pub angle_factor_floor: f64,
    /// Health for zones missing from the body part table
    #[serde(default = "default_unknown_zone_health")]
    pub unknown_zone_health: f64,
}

impl Default for ModelConstants {
    fn default() -> Self {
        ModelConstants {
            class_resistance_step: default_class_resistance_step(),
            durability_floor: default_durability_floor(),
            penetration_curve: default_penetration_curve(),
            blunt_reduction_per_class: default_blunt_reduction_per_class(),
            blunt_reduction_cap: default_blunt_reduction_cap(),
            wear_per_penetration: default_wear_per_penetration(),
            penetrated_wear_multiplier: default_penetrated_wear_multiplier(),
            wear_reduction_per_class: default_wear_reduction_per_class(),
            minimum_wear: default_minimum_wear(),
            fragmentation_reduction_per_class: default_fragmentation_reduction_per_class(),
            fragmentation_damage_share: default_fragmentation_damage_share(),
            ricochet_per_class: default_ricochet_per_class(),
            angle_factor_floor: default_angle_factor_floor(),
            unknown_zone_health: default_unknown_zone_health(),
        }
    }
}

impl ModelConstants {
    /// Reject values that would break the resolver's invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("class_resistance_step", self.class_resistance_step),
            ("durability_floor", self.durability_floor),
            ("unknown_zone_health", self.unknown_zone_health),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("blunt_reduction_per_class", self.blunt_reduction_per_class),
            ("wear_per_penetration", self.wear_per_penetration),
            ("penetrated_wear_multiplier", self.penetrated_wear_multiplier),
            ("wear_reduction_per_class", self.wear_reduction_per_class),
            ("minimum_wear", self.minimum_wear),
            ("fragmentation_reduction_per_class", self.fragmentation_reduction_per_class),
            ("fragmentation_damage_share", self.fragmentation_damage_share),
            ("ricochet_per_class", self.ricochet_per_class),
            ("angle_factor_floor", self.angle_factor_floor),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!("{name} must not be negative, got {value}")));
            }
        }

        if !(0.0..1.0).contains(&self.blunt_reduction_cap) {
            return Err(ConfigError::ValidationError(format!(
                "blunt_reduction_cap must be in [0, 1), got {}",
                self.blunt_reduction_cap
            )));
        }

        self.validate_curve()
    }

    fn validate_curve(&self) -> Result<(), ConfigError> {
        if self.penetration_curve.is_empty() {
            return Err(ConfigError::ValidationError("penetration_curve is empty".to_string()));
        }
        for point in &self.penetration_curve {
            if !point.difference.is_finite() || !(0.0..=100.0).contains(&point.chance) {
                return Err(ConfigError::ValidationError(format!(
                    "penetration_curve point {point:?} out of range"
                )));
            }
        }
        for pair in self.penetration_curve.windows(2) {
            if pair[1].difference <= pair[0].difference {
                return Err(ConfigError::ValidationError(
                    "penetration_curve differences must be strictly ascending".to_string(),
                ));
            }
            if pair[1].chance < pair[0].chance {
                return Err(ConfigError::ValidationError(
                    "penetration_curve chances must not decrease".to_string(),
                ));
            }
        }
        Ok(())
    }
}

fn default_class_resistance_step() -> f64 {
    12.5
}
fn default_durability_floor() -> f64 {
    0.1
}
fn default_penetration_curve() -> Vec<CurvePoint> {
    vec![
        CurvePoint::new(-30.0, 20.0),
        CurvePoint::new(-15.0, 27.5),
        CurvePoint::new(0.0, 50.0),
        CurvePoint::new(10.0, 85.0),
        CurvePoint::new(25.0, 100.0),
    ]
}
fn default_blunt_reduction_per_class() -> f64 {
    0.12
}
fn default_blunt_reduction_cap() -> f64 {
    0.95
}
fn default_wear_per_penetration() -> f64 {
    0.08
}
fn default_penetrated_wear_multiplier() -> f64 {
    1.8
}
fn default_wear_reduction_per_class() -> f64 {
    0.05
}
fn default_minimum_wear() -> f64 {
    0.1
}
fn default_fragmentation_reduction_per_class() -> f64 {
    0.15
}
fn default_fragmentation_damage_share() -> f64 {
    0.5
}
fn default_ricochet_per_class() -> f64 {
    0.05
}
fn default_angle_factor_floor() -> f64 {
    0.5
}
fn default_unknown_zone_health() -> f64 {
    crate::tables::DEFAULT_BODY_PART_HEALTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = ModelConstants::default();
        assert!((constants.class_resistance_step - 12.5).abs() < f64::EPSILON);
        assert!((constants.blunt_reduction_cap - 0.95).abs() < f64::EPSILON);
        assert_eq!(constants.penetration_curve.len(), 5);
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = r#"
class_resistance_step = 10
minimum_wear = 0.25
"#;
        let constants: ModelConstants = toml::from_str(toml).unwrap();
        assert!((constants.class_resistance_step - 10.0).abs() < f64::EPSILON);
        assert!((constants.minimum_wear - 0.25).abs() < f64::EPSILON);
        assert!((constants.penetrated_wear_multiplier - 1.8).abs() < f64::EPSILON);
        assert_eq!(constants.penetration_curve, default_penetration_curve());
    }

    #[test]
    fn test_rejects_unsorted_curve() {
        let mut constants = ModelConstants::default();
        constants.penetration_curve.swap(0, 1);
        assert!(matches!(constants.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_decreasing_curve() {
        let mut constants = ModelConstants::default();
        constants.penetration_curve[4].chance = 80.0;
        assert!(constants.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_scalars() {
        let constants = ModelConstants {
            class_resistance_step: 0.0,
            ..ModelConstants::default()
        };
        assert!(constants.validate().is_err());

        let constants = ModelConstants {
            blunt_reduction_cap: 1.0,
            ..ModelConstants::default()
        };
        assert!(constants.validate().is_err());

        let constants = ModelConstants {
            minimum_wear: -0.1,
            ..ModelConstants::default()
        };
        assert!(constants.validate().is_err());
    }
}
