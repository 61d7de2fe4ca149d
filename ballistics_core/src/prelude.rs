//! Prelude module for convenient imports
//!
//! ```rust
//! use ballistics_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Ammo, Armor, BodyPart};

// Resolver
pub use crate::resolver::{
    AmmoComparison, ArmorWearPolicy, ComparisonWinner, DamageCalculation, DamageModel, LayerPolicy, TimeToKill,
    ZoneDamageResult,
};

// Engagements
pub use crate::engagement::{project_engagement, simulate_engagement, EngagementProjection};

// Data
pub use crate::catalog::Catalog;
pub use crate::config::default_damage_model;
