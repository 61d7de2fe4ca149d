//! Engagement - repeated hits on one zone with armor wearing down
//!
//! `project_engagement` applies each shot's expected damage and wear in
//! sequence, so later shots face degraded armor. `simulate_engagement`
//! rolls penetration per shot with a caller-supplied RNG instead, which
//! keeps runs reproducible under a fixed seed.

use crate::resolver::{DamageCalculation, DamageModel};
use crate::types::{Ammo, Armor};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One shot of an engagement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotStep {
    /// 1-based shot number
    pub shot: u32,
    /// Armor durability before this shot, `None` if the zone is exposed
    pub durability_before: Option<f64>,
    pub penetration_chance: f64,
    /// Rolled outcome; `None` for expected-value projections
    pub penetrated: Option<bool>,
    pub damage: f64,
    pub armor_damage: f64,
    pub remaining_health: f64,
}

/// Shot-by-shot outcome of an engagement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementProjection {
    pub body_zone: String,
    pub target_health: f64,
    /// Name of the protecting armor, if any
    pub armor_name: Option<String>,
    pub steps: Vec<ShotStep>,
    /// Shot that depleted the zone, if it was depleted within the shot budget
    pub incapacitated_after: Option<u32>,
    /// Armor durability after the last shot
    pub final_durability: Option<f64>,
}

impl EngagementProjection {
    pub fn shots_fired(&self) -> u32 {
        self.steps.len() as u32
    }

    pub fn is_incapacitated(&self) -> bool {
        self.incapacitated_after.is_some()
    }

    pub fn total_damage(&self) -> f64 {
        self.steps.iter().map(|s| s.damage).sum()
    }

    pub fn total_armor_damage(&self) -> f64 {
        self.steps.iter().map(|s| s.armor_damage).sum()
    }
}

/// Expected-value projection of up to `max_shots` hits on `zone`
pub fn project_engagement(
    model: &DamageModel,
    ammo: &Ammo,
    zone: &str,
    equipped: &[Armor],
    max_shots: u32,
) -> EngagementProjection {
    run_engagement(model, ammo, zone, equipped, max_shots, |calc| {
        (calc.average_damage, calc.armor_damage, None)
    })
}

/// Sampled engagement: each shot penetrates with its current chance
pub fn simulate_engagement(
    model: &DamageModel,
    ammo: &Ammo,
    zone: &str,
    equipped: &[Armor],
    max_shots: u32,
    rng: &mut impl Rng,
) -> EngagementProjection {
    let (class, material) = model
        .protecting_armor(zone, equipped)
        .map(|a| (a.class, a.material.clone()))
        .unwrap_or_default();

    run_engagement(model, ammo, zone, equipped, max_shots, |calc| {
        let penetrated = rng.gen::<f64>() * 100.0 < calc.penetration_chance;
        let damage = if penetrated {
            calc.damage_if_penetrates
        } else {
            calc.damage_if_blocked
        };
        let wear = model.armor_damage(ammo.penetration_power, class, &material, penetrated);
        (damage, wear, Some(penetrated))
    })
}

/// Shared shot loop. `resolve_shot` turns a shot's expected outcome into
/// (damage dealt, armor wear, rolled outcome).
fn run_engagement<F>(
    model: &DamageModel,
    ammo: &Ammo,
    zone: &str,
    equipped: &[Armor],
    max_shots: u32,
    mut resolve_shot: F,
) -> EngagementProjection
where
    F: FnMut(&DamageCalculation) -> (f64, f64, Option<bool>),
{
    let target_health = model.body_part_health(zone);
    let mut armor = model.protecting_armor(zone, equipped).cloned();
    // wear lowers current durability; the maximum stays fixed
    let max_durability = armor.as_ref().map(Armor::effective_max_durability);

    let mut projection = EngagementProjection {
        body_zone: zone.to_string(),
        target_health,
        armor_name: armor.as_ref().map(|a| a.name.clone()),
        steps: Vec::new(),
        incapacitated_after: None,
        final_durability: None,
    };

    let mut health = target_health;
    for shot in 1..=max_shots {
        let (calc, durability_before) = match (&armor, max_durability) {
            (Some(piece), Some(max)) => (
                model.effective_damage(
                    ammo.damage,
                    ammo.penetration_power,
                    piece.class,
                    piece.durability,
                    max,
                    &piece.material,
                    None,
                ),
                Some(piece.durability),
            ),
            _ => (DamageCalculation::unprotected(ammo.damage), None),
        };

        let (damage, wear, penetrated) = resolve_shot(&calc);
        let armor_damage = match armor.as_mut() {
            Some(piece) => {
                piece.durability = (piece.durability - wear).max(0.0);
                wear
            }
            None => 0.0,
        };
        health -= damage;

        projection.steps.push(ShotStep {
            shot,
            durability_before,
            penetration_chance: calc.penetration_chance,
            penetrated,
            damage,
            armor_damage,
            remaining_health: health.max(0.0),
        });

        if health <= 0.0 {
            projection.incapacitated_after = Some(shot);
            break;
        }
    }

    projection.final_durability = armor.map(|a| a.durability);
    projection
}
