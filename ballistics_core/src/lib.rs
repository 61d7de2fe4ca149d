//! ballistics_core - Ammunition vs armor damage model
//!
//! This library provides:
//! - Penetration chance of a projectile against an armor piece
//! - Expected damage (penetrating, blocked, probability-weighted) and armor wear
//! - Zone damage and time-to-kill against an equipped loadout
//! - Fragmentation, ricochet and two-round comparisons
//! - Shot-by-shot engagement projections with armor degrading
//!
//! All calculations are pure and deterministic; they report expected values
//! and probabilities, not sampled outcomes.

pub mod catalog;
pub mod config;
pub mod engagement;
pub mod prelude;
pub mod resolver;
pub mod tables;
pub mod types;

// Re-export core types for convenience
pub use catalog::{Catalog, CatalogError};
pub use config::{default_damage_model, load_damage_model, ConfigError};
pub use engagement::{project_engagement, simulate_engagement, EngagementProjection, ShotStep};
pub use resolver::{
    calculate_armor_damage, calculate_effective_damage, calculate_fragmentation_chance, calculate_penetration_chance,
    calculate_ricochet_chance, calculate_time_to_kill, calculate_total_damage_with_fragmentation,
    calculate_zone_damage, compare_ammunition, get_body_part_health, AmmoComparison, AmmoEvaluation,
    ArmorWearPolicy, ComparisonWinner, DamageCalculation, DamageModel, FragmentationDamage, LayerPolicy,
    TimeToKill, ZoneDamageResult,
};
pub use tables::{BodyPartTable, MaterialModifiers, MaterialTable};
pub use types::{Ammo, Armor, BodyPart};
