//! Secondary effects - fragmentation and ricochet

use super::round2;
use crate::config::ModelConstants;
use crate::tables::MaterialModifiers;

/// Fragmentation chance after armor, percent
///
/// Armor scales the projectile's chance down by
/// `class × per_class × material.blunt_damage_reduction`, never below zero.
pub fn armored_fragmentation_chance(
    base_chance: f64,
    armor_class: u8,
    material: MaterialModifiers,
    constants: &ModelConstants,
) -> f64 {
    let reduction =
        f64::from(armor_class) * constants.fragmentation_reduction_per_class * material.blunt_damage_reduction;
    round2((base_chance * (1.0 - reduction)).clamp(0.0, 100.0))
}

/// Expected extra damage from fragmentation
pub fn fragmentation_damage(effective_damage: f64, fragmentation_chance: f64, constants: &ModelConstants) -> f64 {
    round2(effective_damage * constants.fragmentation_damage_share * (fragmentation_chance / 100.0))
}

/// Impact-angle multiplier; steeper angles lower the ricochet chance down to the floor
pub fn angle_factor(angle: f64, constants: &ModelConstants) -> f64 {
    (1.0 - angle / 90.0).max(constants.angle_factor_floor)
}

/// Ricochet chance, percent
///
/// `(base/100 + class × per_class) × material.penetration_resistance × angle_factor`
pub fn calculate_ricochet_chance(
    base_chance: f64,
    armor_class: u8,
    material: MaterialModifiers,
    angle: f64,
    constants: &ModelConstants,
) -> f64 {
    let fraction = (base_chance / 100.0 + f64::from(armor_class) * constants.ricochet_per_class)
        * material.penetration_resistance
        * angle_factor(angle, constants);
    round2((fraction * 100.0).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CERAMIC: MaterialModifiers = MaterialModifiers::new(0.8, 1.2, 0.8);

    #[test]
    fn test_fragmentation_reduced_by_armor() {
        // 4 × 0.15 × 0.8 = 0.48 reduction
        let chance = armored_fragmentation_chance(40.0, 4, CERAMIC, &ModelConstants::default());
        assert!((chance - 20.8).abs() < 1e-9);
    }

    #[test]
    fn test_fragmentation_floor() {
        let aramid = MaterialModifiers::new(0.25, 0.85, 1.2);
        // 6 × 0.15 × 1.2 = 1.08 reduction
        let chance = armored_fragmentation_chance(40.0, 6, aramid, &ModelConstants::default());
        assert!((chance - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fragmentation_damage() {
        let extra = fragmentation_damage(50.0, 20.0, &ModelConstants::default());
        assert!((extra - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_factor() {
        let constants = ModelConstants::default();
        assert!((angle_factor(0.0, &constants) - 1.0).abs() < f64::EPSILON);
        assert!((angle_factor(30.0, &constants) - (2.0 / 3.0)).abs() < 1e-9);
        assert!((angle_factor(80.0, &constants) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ricochet_chance() {
        // (0.2 + 4 × 0.05) × 1.2 × 1.0 = 0.48
        let chance = calculate_ricochet_chance(20.0, 4, CERAMIC, 0.0, &ModelConstants::default());
        assert!((chance - 48.0).abs() < 1e-9);

        // 45 degrees halves it
        let chance = calculate_ricochet_chance(20.0, 4, CERAMIC, 45.0, &ModelConstants::default());
        assert!((chance - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_ricochet_clamped() {
        let chance = calculate_ricochet_chance(95.0, 6, CERAMIC, 0.0, &ModelConstants::default());
        assert!((chance - 100.0).abs() < f64::EPSILON);
    }
}
