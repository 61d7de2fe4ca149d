//! Penetration - projectile penetration power vs armor resistance
//!
//! Formula:
//! - durability_factor = max(floor, durability / max_durability)
//! - resistance = class × step × material.penetration_resistance × durability_factor
//! - chance = curve(penetration − resistance)
//!
//! The curve is piecewise linear between breakpoints. With the default
//! constants an even match (difference 0) gives 50%, +25 saturates at 100%
//! and anything at or below −30 sits on the 20% floor.

use super::round2;
use crate::config::{CurvePoint, ModelConstants};
use crate::tables::MaterialModifiers;

/// Remaining-durability multiplier on armor resistance
///
/// A non-positive maximum durability yields the floor rather than dividing by zero.
pub fn durability_factor(durability: f64, max_durability: f64, constants: &ModelConstants) -> f64 {
    if max_durability <= 0.0 {
        return constants.durability_floor;
    }
    (durability / max_durability).max(constants.durability_floor)
}

/// Effective penetration resistance of an armor piece
pub fn effective_resistance(
    armor_class: u8,
    material: MaterialModifiers,
    durability_factor: f64,
    constants: &ModelConstants,
) -> f64 {
    f64::from(armor_class) * constants.class_resistance_step * material.penetration_resistance * durability_factor
}

/// Map a penetration/resistance difference through the curve
///
/// Below the first breakpoint the first chance applies, above the last the
/// last chance applies. NaN lands on the floor.
pub fn interpolate_curve(curve: &[CurvePoint], difference: f64) -> f64 {
    let (first, last) = match (curve.first(), curve.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return 0.0,
    };

    if difference.is_nan() || difference <= first.difference {
        return first.chance;
    }
    if difference >= last.difference {
        return last.chance;
    }

    for pair in curve.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if difference < hi.difference {
            let t = (difference - lo.difference) / (hi.difference - lo.difference);
            return lo.chance + t * (hi.chance - lo.chance);
        }
    }
    last.chance
}

/// Chance (percent, 2 decimals) that a projectile penetrates the armor
pub fn calculate_penetration_chance(
    penetration: f64,
    armor_class: u8,
    durability: f64,
    max_durability: f64,
    material: MaterialModifiers,
    constants: &ModelConstants,
) -> f64 {
    let factor = durability_factor(durability, max_durability, constants);
    let resistance = effective_resistance(armor_class, material, factor, constants);
    let chance = interpolate_curve(&constants.penetration_curve, penetration - resistance);
    round2(chance.clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chance(pen: f64, class: u8, durability: f64, max: f64, material: MaterialModifiers) -> f64 {
        calculate_penetration_chance(pen, class, durability, max, material, &ModelConstants::default())
    }

    #[test]
    fn test_curve_breakpoints() {
        let curve = ModelConstants::default().penetration_curve;
        assert!((interpolate_curve(&curve, 25.0) - 100.0).abs() < f64::EPSILON);
        assert!((interpolate_curve(&curve, 40.0) - 100.0).abs() < f64::EPSILON);
        assert!((interpolate_curve(&curve, 10.0) - 85.0).abs() < f64::EPSILON);
        assert!((interpolate_curve(&curve, 0.0) - 50.0).abs() < f64::EPSILON);
        assert!((interpolate_curve(&curve, -15.0) - 27.5).abs() < f64::EPSILON);
        assert!((interpolate_curve(&curve, -30.0) - 20.0).abs() < f64::EPSILON);
        assert!((interpolate_curve(&curve, -100.0) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_curve_segments() {
        let curve = ModelConstants::default().penetration_curve;
        // 0..10: 3.5 per point
        assert!((interpolate_curve(&curve, 4.0) - 64.0).abs() < 1e-9);
        // 10..25: 1 per point
        assert!((interpolate_curve(&curve, 20.0) - 95.0).abs() < 1e-9);
        // -15..0: 1.5 per point
        assert!((interpolate_curve(&curve, -10.0) - 35.0).abs() < 1e-9);
        // -30..-15: 0.5 per point
        assert!((interpolate_curve(&curve, -20.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_curve_nan_is_floor() {
        let curve = ModelConstants::default().penetration_curve;
        assert!((interpolate_curve(&curve, f64::NAN) - 20.0).abs() < f64::EPSILON);
        assert!((interpolate_curve(&[], 10.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ceramic_class_four_example() {
        // resistance = 4 × 12.5 × 1.2 × 1.0 = 60, difference = -15
        let ceramic = MaterialModifiers::new(0.8, 1.2, 0.8);
        let result = chance(45.0, 4, 50.0, 50.0, ceramic);
        assert!((result - 27.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_even_match() {
        // class 4 steel = 50 resistance
        let result = chance(50.0, 4, 40.0, 40.0, MaterialModifiers::NEUTRAL);
        assert!((result - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_worn_armor_is_easier_to_penetrate() {
        let fresh = chance(40.0, 4, 60.0, 60.0, MaterialModifiers::NEUTRAL);
        let worn = chance(40.0, 4, 30.0, 60.0, MaterialModifiers::NEUTRAL);
        assert!(worn > fresh);
        // half durability: resistance 25, difference 15 -> 90
        assert!((worn - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_durability_factor_floor() {
        let constants = ModelConstants::default();
        assert!((durability_factor(0.0, 50.0, &constants) - 0.1).abs() < f64::EPSILON);
        assert!((durability_factor(10.0, 0.0, &constants) - 0.1).abs() < f64::EPSILON);
        assert!((durability_factor(0.0, 0.0, &constants) - 0.1).abs() < f64::EPSILON);
        assert!((durability_factor(25.0, 50.0, &constants) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_max_durability_is_defined() {
        let result = chance(30.0, 6, 0.0, 0.0, MaterialModifiers::NEUTRAL);
        // resistance = 6 × 12.5 × 0.1 = 7.5, difference 22.5 -> 97.5
        assert!((result - 97.5).abs() < 1e-9);
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        let result = chance(33.333, 2, 40.0, 40.0, MaterialModifiers::NEUTRAL);
        assert!(((result * 100.0).round() - result * 100.0).abs() < 1e-9);
    }
}
