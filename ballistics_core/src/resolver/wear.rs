//! Armor wear - durability removed per hit
//!
//! Formula:
//! - wear = penetration × wear_per_penetration
//! - × penetrated_wear_multiplier when the hit penetrates
//! - × material.destructibility
//! - × (1 − (class − 1) × wear_reduction_per_class)
//! - floored at minimum_wear, rounded to 2 decimals

use super::round2;
use crate::config::ModelConstants;
use crate::tables::MaterialModifiers;

/// Durability lost by the armor from one hit
pub fn calculate_armor_damage(
    penetration: f64,
    armor_class: u8,
    material: MaterialModifiers,
    penetrated: bool,
    constants: &ModelConstants,
) -> f64 {
    let mut wear = penetration * constants.wear_per_penetration;
    if penetrated {
        wear *= constants.penetrated_wear_multiplier;
    }
    wear *= material.destructibility;
    wear *= 1.0 - (f64::from(armor_class) - 1.0) * constants.wear_reduction_per_class;

    round2(wear.max(constants.minimum_wear))
}

/// Wear blended by the penetration chance (percent)
pub fn weighted_armor_damage(
    penetration: f64,
    armor_class: u8,
    material: MaterialModifiers,
    penetration_chance: f64,
    constants: &ModelConstants,
) -> f64 {
    let p = (penetration_chance / 100.0).clamp(0.0, 1.0);
    let penetrating = calculate_armor_damage(penetration, armor_class, material, true, constants);
    let blocked = calculate_armor_damage(penetration, armor_class, material, false, constants);
    round2(p * penetrating + (1.0 - p) * blocked)
}
