//! Combat resolver - projectile vs armor outcomes
//!
//! `DamageModel` owns the coefficients, lookup tables and policies. Each
//! operation is also exposed as a free function bound to the standard
//! model, which is built once and shared.
//!
//! Every operation is pure: identical inputs give bit-identical outputs.

mod damage;
mod penetration;
mod policy;
mod result;
mod secondary;
mod wear;

pub use damage::{average_damage, blocked_damage, blunt_damage_reduction};
pub use penetration::{durability_factor, effective_resistance, interpolate_curve};
pub use policy::{ArmorWearPolicy, LayerPolicy};
pub use result::{
    AmmoComparison, AmmoEvaluation, ComparisonWinner, DamageCalculation, FragmentationDamage, TimeToKill,
    ZoneDamageResult,
};
pub use secondary::{angle_factor, armored_fragmentation_chance, fragmentation_damage};

use crate::config::ModelConstants;
use crate::tables::{BodyPartTable, MaterialModifiers, MaterialTable};
use crate::types::{Ammo, Armor, BodyPart};
use std::sync::OnceLock;

/// Round to 2 decimals for presentation
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Coefficients, tables and policies for resolving hits
#[derive(Debug, Clone, PartialEq)]
pub struct DamageModel {
    pub constants: ModelConstants,
    pub materials: MaterialTable,
    pub body_parts: BodyPartTable,
    pub wear_policy: ArmorWearPolicy,
    pub layer_policy: LayerPolicy,
}

impl Default for DamageModel {
    fn default() -> Self {
        DamageModel {
            constants: ModelConstants::default(),
            materials: MaterialTable::builtin(),
            body_parts: BodyPartTable::builtin(),
            wear_policy: ArmorWearPolicy::default(),
            layer_policy: LayerPolicy::default(),
        }
    }
}

impl DamageModel {
    /// The shared built-in model
    pub fn standard() -> &'static DamageModel {
        static STANDARD: OnceLock<DamageModel> = OnceLock::new();
        STANDARD.get_or_init(DamageModel::default)
    }

    pub fn with_wear_policy(mut self, policy: ArmorWearPolicy) -> Self {
        self.wear_policy = policy;
        self
    }

    pub fn with_layer_policy(mut self, policy: LayerPolicy) -> Self {
        self.layer_policy = policy;
        self
    }

    /// Material modifiers, neutral for unknown names
    pub fn material(&self, name: &str) -> MaterialModifiers {
        self.materials.get(name)
    }

    /// Base health of a zone; unknown zones get `constants.unknown_zone_health`
    pub fn body_part_health(&self, zone: &str) -> f64 {
        self.body_parts.lookup(zone).unwrap_or_else(|| {
            let fallback = self.constants.unknown_zone_health;
            tracing::trace!(zone, fallback, "unknown body zone, using fallback health");
            fallback
        })
    }

    pub fn penetration_chance(
        &self,
        penetration: f64,
        armor_class: u8,
        durability: f64,
        max_durability: f64,
        material: &str,
    ) -> f64 {
        penetration::calculate_penetration_chance(
            penetration,
            armor_class,
            durability,
            max_durability,
            self.material(material),
            &self.constants,
        )
    }

    pub fn armor_damage(&self, penetration: f64, armor_class: u8, material: &str, penetrated: bool) -> f64 {
        wear::calculate_armor_damage(penetration, armor_class, self.material(material), penetrated, &self.constants)
    }

    /// Expected outcome of one hit
    ///
    /// `armor_damage_percent` is the projectile's armor-damage rating; when
    /// given it scales the wear (100 = unchanged). The wear floor still applies.
    #[allow(clippy::too_many_arguments)]
    pub fn effective_damage(
        &self,
        base_damage: f64,
        penetration: f64,
        armor_class: u8,
        durability: f64,
        max_durability: f64,
        material: &str,
        armor_damage_percent: Option<f64>,
    ) -> DamageCalculation {
        let modifiers = self.material(material);
        let penetration_chance = penetration::calculate_penetration_chance(
            penetration,
            armor_class,
            durability,
            max_durability,
            modifiers,
            &self.constants,
        );

        let damage_if_penetrates = base_damage;
        let damage_if_blocked = damage::blocked_damage(base_damage, armor_class, modifiers, &self.constants);
        let average_damage = damage::average_damage(penetration_chance, damage_if_penetrates, damage_if_blocked);

        let mut armor_damage = match self.wear_policy {
            ArmorWearPolicy::MajorityThreshold => wear::calculate_armor_damage(
                penetration,
                armor_class,
                modifiers,
                penetration_chance > 50.0,
                &self.constants,
            ),
            ArmorWearPolicy::Weighted => {
                wear::weighted_armor_damage(penetration, armor_class, modifiers, penetration_chance, &self.constants)
            }
        };
        if let Some(percent) = armor_damage_percent {
            armor_damage = round2((armor_damage * percent / 100.0).max(self.constants.minimum_wear));
        }

        DamageCalculation {
            penetration_chance,
            damage_if_penetrates,
            damage_if_blocked,
            average_damage,
            armor_damage,
            blunt_damage: damage_if_blocked,
        }
    }

    /// The equipped piece protecting `zone`, per the layer policy
    pub fn protecting_armor<'a>(&self, zone: &str, equipped: &'a [Armor]) -> Option<&'a Armor> {
        self.layer_policy.select(zone, equipped)
    }

    /// Expected outcome of a hit on `zone` given the equipped armor
    pub fn zone_damage(&self, ammo: &Ammo, zone: &str, equipped: &[Armor]) -> ZoneDamageResult {
        let protection = self.protecting_armor(zone, equipped);
        let calculation = match protection {
            Some(armor) => self.effective_damage(
                ammo.damage,
                ammo.penetration_power,
                armor.class,
                armor.durability,
                armor.effective_max_durability(),
                &armor.material,
                None,
            ),
            None => DamageCalculation::unprotected(ammo.damage),
        };

        ZoneDamageResult {
            body_zone: zone.to_string(),
            protection: protection.cloned(),
            effective_damage: calculation.average_damage,
            penetration_chance: calculation.penetration_chance,
            armor_damage: calculation.armor_damage,
            calculation,
        }
    }

    /// Expected shots (and optionally seconds) to deplete a zone
    pub fn time_to_kill(&self, ammo: &Ammo, zone: &str, equipped: &[Armor], fire_rate_rpm: Option<f64>) -> TimeToKill {
        let target_health = self.body_part_health(zone);
        let result = self.zone_damage(ammo, zone, equipped);

        let lethal = result.effective_damage > 0.0;
        let shots_to_kill = if lethal {
            // float-to-int casts saturate, so vanishing damage caps at u32::MAX
            (target_health / result.effective_damage).ceil() as u32
        } else {
            u32::MAX
        };

        let time_to_kill = match fire_rate_rpm {
            Some(rpm) if rpm > 0.0 && lethal => {
                Some(f64::from(shots_to_kill.saturating_sub(1)) / (rpm / 60.0))
            }
            _ => None,
        };

        TimeToKill {
            target_health,
            shots_to_kill,
            time_to_kill,
            damage_per_shot: result.effective_damage,
            penetration_chance: result.penetration_chance,
            armor_damage: result.armor_damage,
        }
    }

    /// Fragmentation chance of a hit on `zone`, after armor
    pub fn fragmentation_chance(&self, ammo: &Ammo, zone: &str, equipped: &[Armor]) -> f64 {
        match self.protecting_armor(zone, equipped) {
            Some(armor) => secondary::armored_fragmentation_chance(
                ammo.fragmentation_chance,
                armor.class,
                self.material(&armor.material),
                &self.constants,
            ),
            None => round2(ammo.fragmentation_chance.clamp(0.0, 100.0)),
        }
    }

    /// Expected damage per hit including fragmentation
    pub fn total_damage_with_fragmentation(&self, ammo: &Ammo, zone: &str, equipped: &[Armor]) -> FragmentationDamage {
        let base_damage = self.zone_damage(ammo, zone, equipped).effective_damage;
        let fragmentation_chance = self.fragmentation_chance(ammo, zone, equipped);
        let fragmentation_damage = secondary::fragmentation_damage(base_damage, fragmentation_chance, &self.constants);

        FragmentationDamage {
            base_damage,
            fragmentation_damage,
            total_damage: round2(base_damage + fragmentation_damage),
            fragmentation_chance,
        }
    }

    /// Ricochet chance off armor; `angle` in degrees, default 0
    pub fn ricochet_chance(&self, ammo: &Ammo, armor_class: u8, material: &str, angle: Option<f64>) -> f64 {
        secondary::calculate_ricochet_chance(
            ammo.ricochet_chance,
            armor_class,
            self.material(material),
            angle.unwrap_or(0.0),
            &self.constants,
        )
    }

    fn evaluate(&self, ammo: &Ammo, zone: &str, equipped: &[Armor]) -> AmmoEvaluation {
        AmmoEvaluation {
            ammo_name: ammo.name.clone(),
            zone: self.zone_damage(ammo, zone, equipped),
            time_to_kill: self.time_to_kill(ammo, zone, equipped, None),
        }
    }

    /// Run two projectiles against one armor piece and pick a winner
    ///
    /// Higher average damage and higher penetration chance wins outright;
    /// otherwise fewer shots to kill; otherwise a tie.
    pub fn compare_ammunition(&self, first: &Ammo, second: &Ammo, armor: &Armor, zone: Option<&str>) -> AmmoComparison {
        let zone = zone.unwrap_or(BodyPart::Thorax.as_str());
        let equipped = std::slice::from_ref(armor);
        let first = self.evaluate(first, zone, equipped);
        let second = self.evaluate(second, zone, equipped);
        let winner = pick_winner(&first, &second);

        AmmoComparison {
            body_zone: zone.to_string(),
            first,
            second,
            winner,
        }
    }
}

fn pick_winner(first: &AmmoEvaluation, second: &AmmoEvaluation) -> ComparisonWinner {
    let (a, b) = (&first.zone, &second.zone);
    if a.effective_damage > b.effective_damage && a.penetration_chance > b.penetration_chance {
        return ComparisonWinner::First;
    }
    if b.effective_damage > a.effective_damage && b.penetration_chance > a.penetration_chance {
        return ComparisonWinner::Second;
    }

    let (shots_a, shots_b) = (first.time_to_kill.shots_to_kill, second.time_to_kill.shots_to_kill);
    match shots_a.cmp(&shots_b) {
        std::cmp::Ordering::Less => ComparisonWinner::First,
        std::cmp::Ordering::Greater => ComparisonWinner::Second,
        std::cmp::Ordering::Equal => ComparisonWinner::Tie,
    }
}

// Free functions bound to the standard model

/// Chance (percent) that a projectile penetrates the armor
pub fn calculate_penetration_chance(
    ammo_penetration: f64,
    armor_class: u8,
    armor_durability: f64,
    max_durability: f64,
    armor_material: &str,
) -> f64 {
    DamageModel::standard().penetration_chance(
        ammo_penetration,
        armor_class,
        armor_durability,
        max_durability,
        armor_material,
    )
}

/// Expected outcome of one hit against one armor piece
pub fn calculate_effective_damage(
    base_damage: f64,
    ammo_penetration: f64,
    armor_class: u8,
    armor_durability: f64,
    max_durability: f64,
    armor_material: &str,
    armor_damage: Option<f64>,
) -> DamageCalculation {
    DamageModel::standard().effective_damage(
        base_damage,
        ammo_penetration,
        armor_class,
        armor_durability,
        max_durability,
        armor_material,
        armor_damage,
    )
}

pub fn calculate_zone_damage(ammo: &Ammo, body_zone: &str, equipped: &[Armor]) -> ZoneDamageResult {
    DamageModel::standard().zone_damage(ammo, body_zone, equipped)
}

pub fn calculate_time_to_kill(
    ammo: &Ammo,
    target_body_part: &str,
    equipped: &[Armor],
    weapon_fire_rate: Option<f64>,
) -> TimeToKill {
    DamageModel::standard().time_to_kill(ammo, target_body_part, equipped, weapon_fire_rate)
}

pub fn get_body_part_health(body_part: &str) -> f64 {
    DamageModel::standard().body_part_health(body_part)
}

pub fn calculate_armor_damage(ammo_penetration: f64, armor_class: u8, armor_material: &str, penetrated: bool) -> f64 {
    DamageModel::standard().armor_damage(ammo_penetration, armor_class, armor_material, penetrated)
}

pub fn calculate_fragmentation_chance(ammo: &Ammo, target_body_part: &str, equipped: &[Armor]) -> f64 {
    DamageModel::standard().fragmentation_chance(ammo, target_body_part, equipped)
}

pub fn calculate_total_damage_with_fragmentation(
    ammo: &Ammo,
    target_body_part: &str,
    equipped: &[Armor],
) -> FragmentationDamage {
    DamageModel::standard().total_damage_with_fragmentation(ammo, target_body_part, equipped)
}

pub fn calculate_ricochet_chance(ammo: &Ammo, armor_class: u8, armor_material: &str, angle: Option<f64>) -> f64 {
    DamageModel::standard().ricochet_chance(ammo, armor_class, armor_material, angle)
}

pub fn compare_ammunition(
    first: &Ammo,
    second: &Ammo,
    armor: &Armor,
    target_body_part: Option<&str>,
) -> AmmoComparison {
    DamageModel::standard().compare_ammunition(first, second, armor, target_body_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ceramic_vest() -> Armor {
        Armor::new("6B13", 4, 50.0, "ceramic").covering(["thorax", "stomach"])
    }

    #[test]
    fn test_effective_damage_example() {
        let calc = calculate_effective_damage(60.0, 45.0, 4, 50.0, 50.0, "ceramic", None);
        assert!((calc.penetration_chance - 27.5).abs() < 1e-9);
        assert!((calc.damage_if_penetrates - 60.0).abs() < f64::EPSILON);
        assert!((calc.damage_if_blocked - 36.96).abs() < 1e-9);
        assert!((calc.average_damage - 43.3).abs() < 1e-9);
        assert!((calc.blunt_damage - calc.damage_if_blocked).abs() < f64::EPSILON);
        // 27.5% is not a majority, so blocked wear applies
        assert!((calc.armor_damage - calculate_armor_damage(45.0, 4, "ceramic", false)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_majority_threshold_wear() {
        // class 2 steel, resistance 25, difference 15 -> 90%
        let calc = calculate_effective_damage(50.0, 40.0, 2, 40.0, 40.0, "steel", None);
        assert!(calc.penetration_chance > 50.0);
        assert!((calc.armor_damage - calculate_armor_damage(40.0, 2, "steel", true)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weighted_wear_policy() {
        let model = DamageModel::default().with_wear_policy(ArmorWearPolicy::Weighted);
        let calc = model.effective_damage(60.0, 45.0, 4, 50.0, 50.0, "ceramic", None);
        let blocked = model.armor_damage(45.0, 4, "ceramic", false);
        let penetrating = model.armor_damage(45.0, 4, "ceramic", true);
        let expected = round2(0.275 * penetrating + 0.725 * blocked);
        assert!((calc.armor_damage - expected).abs() < 1e-9);
        // damage figures don't depend on the wear policy
        assert!((calc.average_damage - 43.3).abs() < 1e-9);
    }

    #[test]
    fn test_armor_damage_percent_scales_wear() {
        let plain = calculate_effective_damage(60.0, 45.0, 4, 50.0, 50.0, "ceramic", None);
        let halved = calculate_effective_damage(60.0, 45.0, 4, 50.0, 50.0, "ceramic", Some(50.0));
        assert!((halved.armor_damage - round2(plain.armor_damage * 0.5)).abs() < 1e-9);

        let tiny = calculate_effective_damage(60.0, 45.0, 4, 50.0, 50.0, "ceramic", Some(0.0));
        assert!((tiny.armor_damage - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zone_damage_exposed() {
        let ammo = Ammo::new("PS", 50.0, 28.0);
        let result = calculate_zone_damage(&ammo, "head", &[ceramic_vest()]);
        assert!(result.is_exposed());
        assert!((result.effective_damage - 50.0).abs() < f64::EPSILON);
        assert!((result.penetration_chance - 100.0).abs() < f64::EPSILON);
        assert!((result.armor_damage - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zone_damage_protected_uses_durability_as_max() {
        let ammo = Ammo::new("M855A1", 60.0, 45.0);
        let result = calculate_zone_damage(&ammo, "Thorax", &[ceramic_vest()]);
        assert!(!result.is_exposed());
        assert_eq!(result.protection.as_ref().map(|a| a.name.as_str()), Some("6B13"));
        assert!((result.penetration_chance - 27.5).abs() < 1e-9);
        assert!((result.effective_damage - 43.3).abs() < 1e-9);
    }

    #[test]
    fn test_zone_damage_respects_max_durability() {
        let ammo = Ammo::new("M855A1", 60.0, 45.0);
        let worn = ceramic_vest().with_max_durability(100.0);
        let fresh = calculate_zone_damage(&ammo, "thorax", &[ceramic_vest()]);
        let result = calculate_zone_damage(&ammo, "thorax", &[worn]);
        assert!(result.penetration_chance > fresh.penetration_chance);
    }

    #[test]
    fn test_zone_layer_policy_is_pinned() {
        let ammo = Ammo::new("BT", 44.0, 37.0);
        let equipped = vec![
            Armor::new("PACA", 2, 50.0, "aramid").covering(["thorax", "stomach"]),
            Armor::new("Slick", 6, 80.0, "titan").covering(["thorax"]),
        ];

        let first = calculate_zone_damage(&ammo, "thorax", &equipped);
        assert_eq!(first.protection.as_ref().map(|a| a.class), Some(2));

        let model = DamageModel::default().with_layer_policy(LayerPolicy::HighestClass);
        let highest = model.zone_damage(&ammo, "thorax", &equipped);
        assert_eq!(highest.protection.as_ref().map(|a| a.class), Some(6));
        assert!(highest.penetration_chance < first.penetration_chance);
    }

    #[test]
    fn test_time_to_kill_exposed_head() {
        let ammo = Ammo::new("PS", 50.0, 28.0);
        let ttk = calculate_time_to_kill(&ammo, "head", &[], Some(650.0));
        assert_eq!(ttk.shots_to_kill, 1);
        assert!((ttk.time_to_kill.unwrap_or(-1.0) - 0.0).abs() < f64::EPSILON);
        assert!((ttk.target_health - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_time_to_kill_at_fire_rate() {
        // 85 thorax / 30 per hit -> 3 shots
        let ammo = Ammo::new("PSO", 30.0, 10.0);
        let ttk = calculate_time_to_kill(&ammo, "thorax", &[], Some(650.0));
        assert_eq!(ttk.shots_to_kill, 3);
        let seconds = ttk.time_to_kill.unwrap_or_default();
        assert!((seconds - 2.0 / (650.0 / 60.0)).abs() < 1e-12);
        assert!((seconds - 0.1846).abs() < 1e-4);
    }

    #[test]
    fn test_time_to_kill_without_fire_rate() {
        let ammo = Ammo::new("PSO", 30.0, 10.0);
        assert!(calculate_time_to_kill(&ammo, "thorax", &[], None).time_to_kill.is_none());
        assert!(calculate_time_to_kill(&ammo, "thorax", &[], Some(0.0)).time_to_kill.is_none());
    }

    #[test]
    fn test_time_to_kill_zero_damage() {
        let ammo = Ammo::new("blank", 0.0, 0.0);
        let ttk = calculate_time_to_kill(&ammo, "thorax", &[], Some(600.0));
        assert!(!ttk.is_lethal());
        assert!(ttk.time_to_kill.is_none());
    }

    #[test]
    fn test_time_to_kill_vanishing_damage_stays_lethal() {
        let ammo = Ammo::new("sliver", 1e-8, 0.0);
        let ttk = calculate_time_to_kill(&ammo, "thorax", &[], Some(600.0));
        assert!(ttk.damage_per_shot > 0.0);
        assert!(ttk.is_lethal());
        assert_eq!(ttk.shots_to_kill, u32::MAX);
        assert!(ttk.time_to_kill.is_some());
        assert!(!ttk.summary().contains("cannot"));
    }

    #[test]
    fn test_unknown_zone_health_follows_constants() {
        let mut model = DamageModel::default();
        model.constants.unknown_zone_health = 100.0;
        assert!((model.body_part_health("tail") - 100.0).abs() < f64::EPSILON);
        assert!((model.body_part_health("head") - 35.0).abs() < f64::EPSILON);

        let ttk = model.time_to_kill(&Ammo::new("PSO", 30.0, 10.0), "tail", &[], None);
        assert!((ttk.target_health - 100.0).abs() < f64::EPSILON);
        assert_eq!(ttk.shots_to_kill, 4);
    }

    #[test]
    fn test_armor_covers_zone_spelled_differently() {
        let plate = Armor::new("6B13", 4, 50.0, "ceramic").covering(["leftArm"]);
        let ammo = Ammo::new("M855A1", 60.0, 44.0);
        let ttk = calculate_time_to_kill(&ammo, "left_arm", std::slice::from_ref(&plate), None);
        assert!((ttk.target_health - 60.0).abs() < f64::EPSILON);
        assert!(ttk.penetration_chance < 100.0);
        assert!(ttk.damage_per_shot < 60.0);

        let result = DamageModel::standard().zone_damage(&ammo, "Left Arm", &[plate]);
        assert_eq!(result.protection.as_ref().map(|a| a.name.as_str()), Some("6B13"));
    }

    #[test]
    fn test_body_part_health() {
        assert!((get_body_part_health("head") - 35.0).abs() < f64::EPSILON);
        assert!((get_body_part_health("unknown") - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fragmentation_exposed_vs_armored() {
        let ammo = Ammo::new("PS", 50.0, 28.0).with_fragmentation(40.0);
        let exposed = calculate_fragmentation_chance(&ammo, "head", &[ceramic_vest()]);
        let armored = calculate_fragmentation_chance(&ammo, "thorax", &[ceramic_vest()]);
        assert!((exposed - 40.0).abs() < f64::EPSILON);
        assert!((armored - 20.8).abs() < 1e-9);
    }

    #[test]
    fn test_total_damage_with_fragmentation() {
        let ammo = Ammo::new("PS", 50.0, 28.0).with_fragmentation(40.0);
        let total = calculate_total_damage_with_fragmentation(&ammo, "head", &[]);
        assert!((total.base_damage - 50.0).abs() < f64::EPSILON);
        // 50 × 0.5 × 0.4 = 10
        assert!((total.fragmentation_damage - 10.0).abs() < 1e-9);
        assert!((total.total_damage - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_ricochet_default_angle() {
        let ammo = Ammo::new("PS", 50.0, 28.0).with_ricochet(20.0);
        let implicit = calculate_ricochet_chance(&ammo, 4, "ceramic", None);
        let explicit = calculate_ricochet_chance(&ammo, 4, "ceramic", Some(0.0));
        assert!((implicit - explicit).abs() < f64::EPSILON);
        assert!((implicit - 48.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_outright_winner() {
        let armor = ceramic_vest();
        let weak = Ammo::new("PS", 50.0, 28.0);
        let strong = Ammo::new("BP", 58.0, 47.0);
        let comparison = compare_ammunition(&weak, &strong, &armor, None);
        assert_eq!(comparison.body_zone, "thorax");
        assert_eq!(comparison.winner, ComparisonWinner::Second);
        assert_eq!(comparison.winning().map(|e| e.ammo_name.as_str()), Some("BP"));
    }

    #[test]
    fn test_compare_falls_back_to_shots() {
        let armor = ceramic_vest();
        // heavy: 20% pen, 62.35 avg -> 2 shots; piercing: 50% pen, 32.32 avg -> 3 shots
        let heavy = Ammo::new("heavy", 90.0, 20.0);
        let piercing = Ammo::new("piercing", 40.0, 60.0);
        let comparison = compare_ammunition(&heavy, &piercing, &armor, Some("thorax"));
        assert!(comparison.first.zone.effective_damage > comparison.second.zone.effective_damage);
        assert!(comparison.first.zone.penetration_chance < comparison.second.zone.penetration_chance);
        assert_eq!(comparison.first.time_to_kill.shots_to_kill, 2);
        assert_eq!(comparison.second.time_to_kill.shots_to_kill, 3);
        assert_eq!(comparison.winner, ComparisonWinner::First);
    }

    #[test]
    fn test_compare_identical_is_tie() {
        let armor = ceramic_vest();
        let ammo = Ammo::new("PS", 50.0, 28.0);
        let comparison = compare_ammunition(&ammo, &ammo.clone(), &armor, Some("stomach"));
        assert_eq!(comparison.winner, ComparisonWinner::Tie);
        assert!(comparison.winning().is_none());
    }

    #[test]
    fn test_standard_model_is_shared() {
        assert!(std::ptr::eq(DamageModel::standard(), DamageModel::standard()));
        assert_eq!(*DamageModel::standard(), DamageModel::default());
    }
}
