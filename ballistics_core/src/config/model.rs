//! Damage model configuration loading

use super::{ConfigError, ModelConstants};
use crate::resolver::{ArmorWearPolicy, DamageModel, LayerPolicy};
use crate::tables::{BodyPartTable, MaterialModifiers, MaterialTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// TOML shape of a damage model. Materials and body parts listed here are
/// layered over the built-in rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageModelConfig {
    #[serde(default)]
    pub constants: ModelConstants,
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialModifiers>,
    #[serde(default)]
    pub body_parts: BTreeMap<String, f64>,
    #[serde(default)]
    pub wear_policy: ArmorWearPolicy,
    #[serde(default)]
    pub layer_policy: LayerPolicy,
}

impl DamageModelConfig {
    /// Validate and build the model
    pub fn into_model(self) -> Result<DamageModel, ConfigError> {
        self.constants.validate()?;

        let mut materials = MaterialTable::builtin();
        for (name, modifiers) in &self.materials {
            if !materials.insert(name, *modifiers) {
                return Err(ConfigError::ValidationError(format!(
                    "material '{name}' needs a name and finite, non-negative modifiers"
                )));
            }
        }

        let mut body_parts = BodyPartTable::builtin();
        for (name, health) in &self.body_parts {
            if !body_parts.insert(name, *health) {
                return Err(ConfigError::ValidationError(format!(
                    "body part '{name}' needs a name and positive health, got {health}"
                )));
            }
        }

        tracing::debug!(
            materials = materials.len(),
            body_parts = body_parts.len(),
            wear_policy = ?self.wear_policy,
            layer_policy = ?self.layer_policy,
            "built damage model from config"
        );

        Ok(DamageModel {
            constants: self.constants,
            materials,
            body_parts,
            wear_policy: self.wear_policy,
            layer_policy: self.layer_policy,
        })
    }
}

/// Load a damage model from a TOML file
pub fn load_damage_model(path: &Path) -> Result<DamageModel, ConfigError> {
    let config: DamageModelConfig = super::load_toml(path)?;
    tracing::debug!(path = %path.display(), "loaded damage model config");
    config.into_model()
}

/// Load a damage model from a TOML string
pub fn parse_damage_model(content: &str) -> Result<DamageModel, ConfigError> {
    let config: DamageModelConfig = super::parse_toml(content)?;
    config.into_model()
}

/// The bundled default model (`config/damage_model.toml`)
pub fn default_damage_model() -> DamageModel {
    let toml = include_str!("../../config/damage_model.toml");
    parse_damage_model(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "bundled damage model failed to load, using built-in tables");
        DamageModel::default()
    })
}
