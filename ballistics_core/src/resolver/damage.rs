//! Expected damage of a hit against armor
//!
//! A penetrating hit deals its full damage. A blocked hit transfers blunt
//! damage reduced by `min(cap, class × per_class × material.blunt_damage_reduction)`.
//! The reported average is the probability-weighted mix of both, not a
//! sampled outcome.

use super::round2;
use crate::config::ModelConstants;
use crate::tables::MaterialModifiers;

/// Fraction of damage absorbed by a blocked hit
pub fn blunt_damage_reduction(armor_class: u8, material: MaterialModifiers, constants: &ModelConstants) -> f64 {
    (f64::from(armor_class) * constants.blunt_reduction_per_class * material.blunt_damage_reduction)
        .min(constants.blunt_reduction_cap)
}

/// Damage transferred by a blocked hit
pub fn blocked_damage(
    base_damage: f64,
    armor_class: u8,
    material: MaterialModifiers,
    constants: &ModelConstants,
) -> f64 {
    round2(base_damage * (1.0 - blunt_damage_reduction(armor_class, material, constants)))
}

/// Probability-weighted damage for a penetration chance in percent
pub fn average_damage(penetration_chance: f64, damage_if_penetrates: f64, damage_if_blocked: f64) -> f64 {
    let p = penetration_chance / 100.0;
    round2(p * damage_if_penetrates + (1.0 - p) * damage_if_blocked)
}
