//! Catalog of ammunition and armor records from the game-data API

use crate::types::{Ammo, Armor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Catalog loading error
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Catalog validation error: {0}")]
    ValidationError(String),
}

/// Ammunition and armor available for calculations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub ammo: Vec<Ammo>,
    #[serde(default)]
    pub armor: Vec<Armor>,
}

impl Catalog {
    /// Load and validate a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            ammo = catalog.ammo.len(),
            armor = catalog.armor.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the invariants callers of the resolver are responsible for
    pub fn validate(&self) -> Result<(), CatalogError> {
        for armor in &self.armor {
            if !(1..=6).contains(&armor.class) {
                return Err(CatalogError::ValidationError(format!(
                    "{}: armor class {} outside 1-6",
                    armor.name, armor.class
                )));
            }
            if armor.durability < 0.0 {
                return Err(CatalogError::ValidationError(format!(
                    "{}: negative durability {}",
                    armor.name, armor.durability
                )));
            }
            if let Some(max) = armor.max_durability {
                if armor.durability > max {
                    return Err(CatalogError::ValidationError(format!(
                        "{}: durability {} exceeds maximum {}",
                        armor.name, armor.durability, max
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn ammo_named(&self, name: &str) -> Option<&Ammo> {
        self.ammo.iter().find(|a| a.name.eq_ignore_ascii_case(name))
    }

    pub fn armor_named(&self, name: &str) -> Option<&Armor> {
        self.armor.iter().find(|a| a.name.eq_ignore_ascii_case(name))
    }

    pub fn is_empty(&self) -> bool {
        self.ammo.is_empty() && self.armor.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "ammo": [
            { "name": "7.62x39mm PS", "caliber": "Caliber762x39", "damage": 57, "penetrationPower": 35,
              "fragmentationChance": 25, "ricochetChance": 30 }
        ],
        "armor": [
            { "name": "PACA Soft Armor", "class": 2, "durability": 40, "maxDurability": 50,
              "material": "Aramid", "zones": ["thorax", "stomach"] }
        ]
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.ammo.len(), 1);
        assert_eq!(catalog.armor.len(), 1);
        assert!(catalog.ammo_named("7.62X39MM ps").is_some());
        assert!(catalog.armor_named("paca soft armor").is_some());
        assert!(catalog.armor_named("Altyn").is_none());
    }

    #[test]
    fn test_rejects_durability_above_max() {
        let json = r#"{ "armor": [ { "name": "bad", "class": 3, "durability": 60, "maxDurability": 50 } ] }"#;
        assert!(matches!(Catalog::from_json_str(json), Err(CatalogError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_class_out_of_range() {
        let json = r#"{ "armor": [ { "name": "bad", "class": 7, "durability": 10 } ] }"#;
        assert!(matches!(Catalog::from_json_str(json), Err(CatalogError::ValidationError(_))));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(Catalog::from_json_str("{ nope"), Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty());
    }
}
