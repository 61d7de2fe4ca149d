//! Lookup tables - armor material modifiers and body part health
//!
//! Keys are case-insensitive and ignore spaces, underscores and hyphens,
//! so `Armored Steel`, `armored_steel` and `armoredsteel` name the same row.
//! Missing materials fall back to the neutral modifier (steel-equivalent).
//! Missing zones are left to the caller; the damage model substitutes its
//! configured unknown-zone health.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default health for zones missing from the table
pub const DEFAULT_BODY_PART_HEALTH: f64 = 85.0;

/// Normalize a table key: lowercase, separators removed
pub fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Per-material multipliers applied by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialModifiers {
    /// Scales armor wear per hit
    pub destructibility: f64,
    /// Scales the armor's penetration resistance
    pub penetration_resistance: f64,
    /// Scales blunt damage mitigation on blocked hits
    pub blunt_damage_reduction: f64,
}

impl MaterialModifiers {
    /// Steel-equivalent modifiers, used for unknown materials
    pub const NEUTRAL: MaterialModifiers = MaterialModifiers::new(1.0, 1.0, 1.0);

    pub const fn new(destructibility: f64, penetration_resistance: f64, blunt_damage_reduction: f64) -> Self {
        MaterialModifiers {
            destructibility,
            penetration_resistance,
            blunt_damage_reduction,
        }
    }

    fn is_valid(&self) -> bool {
        [self.destructibility, self.penetration_resistance, self.blunt_damage_reduction]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Default for MaterialModifiers {
    fn default() -> Self {
        MaterialModifiers::NEUTRAL
    }
}

const BUILTIN_MATERIALS: &[(&str, MaterialModifiers)] = &[
    ("aramid", MaterialModifiers::new(0.25, 0.85, 1.1)),
    ("uhmwpe", MaterialModifiers::new(0.45, 0.95, 0.9)),
    ("combined", MaterialModifiers::new(0.5, 1.1, 0.85)),
    ("titanium", MaterialModifiers::new(0.55, 1.15, 0.9)),
    ("titan", MaterialModifiers::new(0.55, 1.15, 0.9)),
    ("aluminium", MaterialModifiers::new(0.6, 0.9, 1.0)),
    ("aluminum", MaterialModifiers::new(0.6, 0.9, 1.0)),
    ("steel", MaterialModifiers::NEUTRAL),
    ("armoredsteel", MaterialModifiers::NEUTRAL),
    ("ceramic", MaterialModifiers::new(0.8, 1.2, 0.8)),
    ("glass", MaterialModifiers::new(0.8, 0.7, 1.2)),
];

const BUILTIN_BODY_PARTS: &[(&str, f64)] = &[
    ("head", 35.0),
    ("thorax", 85.0),
    ("stomach", 70.0),
    ("leftarm", 60.0),
    ("rightarm", 60.0),
    ("leftleg", 65.0),
    ("rightleg", 65.0),
];

/// Material name -> modifiers
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialTable {
    rows: HashMap<String, MaterialModifiers>,
}

impl MaterialTable {
    /// An empty table (every lookup resolves to neutral)
    pub fn empty() -> Self {
        MaterialTable { rows: HashMap::new() }
    }

    /// Table with the built-in materials
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (name, modifiers) in BUILTIN_MATERIALS {
            table.insert(name, *modifiers);
        }
        table
    }

    /// Add or replace a row. Returns false if the name is blank or the
    /// modifiers are negative or non-finite.
    pub fn insert(&mut self, name: &str, modifiers: MaterialModifiers) -> bool {
        let key = normalize_key(name);
        if key.is_empty() || !modifiers.is_valid() {
            return false;
        }
        self.rows.insert(key, modifiers);
        true
    }

    /// Exact lookup without fallback
    pub fn lookup(&self, name: &str) -> Option<MaterialModifiers> {
        self.rows.get(&normalize_key(name)).copied()
    }

    /// Lookup with neutral fallback
    pub fn get(&self, name: &str) -> MaterialModifiers {
        self.lookup(name).unwrap_or_else(|| {
            tracing::trace!(material = name, "unknown armor material, using neutral modifiers");
            MaterialModifiers::NEUTRAL
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Normalized material names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rows.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Body zone name -> base health
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPartTable {
    rows: HashMap<String, f64>,
}

impl BodyPartTable {
    pub fn empty() -> Self {
        BodyPartTable { rows: HashMap::new() }
    }

    /// Table with the built-in zones
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (name, health) in BUILTIN_BODY_PARTS {
            table.insert(name, *health);
        }
        table
    }

    /// Add or replace a zone. Returns false for blank names or non-positive health.
    pub fn insert(&mut self, name: &str, health: f64) -> bool {
        let key = normalize_key(name);
        if key.is_empty() || !health.is_finite() || health <= 0.0 {
            return false;
        }
        self.rows.insert(key, health);
        true
    }

    pub fn lookup(&self, zone: &str) -> Option<f64> {
        self.rows.get(&normalize_key(zone)).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for BodyPartTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BodyPart;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Armored Steel"), "armoredsteel");
        assert_eq!(normalize_key("armored_steel"), "armoredsteel");
        assert_eq!(normalize_key("left-Arm"), "leftarm");
        assert_eq!(normalize_key("  "), "");
    }

    #[test]
    fn test_material_lookup_case_insensitive() {
        let table = MaterialTable::builtin();
        let ceramic = table.get("CERAMIC");
        assert!((ceramic.penetration_resistance - 1.2).abs() < f64::EPSILON);
        assert!((ceramic.blunt_damage_reduction - 0.8).abs() < f64::EPSILON);
        assert_eq!(table.get("Ceramic"), table.get("ceramic"));
    }

    #[test]
    fn test_unknown_material_is_neutral() {
        let table = MaterialTable::builtin();
        assert_eq!(table.get("unobtainium"), MaterialModifiers::NEUTRAL);
        assert_eq!(table.get(""), MaterialModifiers::NEUTRAL);
        assert_eq!(table.get("steel"), MaterialModifiers::NEUTRAL);
        assert!(table.lookup("unobtainium").is_none());
    }

    #[test]
    fn test_material_aliases() {
        let table = MaterialTable::builtin();
        assert_eq!(table.get("Titan"), table.get("titanium"));
        assert_eq!(table.get("Aluminum"), table.get("aluminium"));
        assert_eq!(table.get("ArmoredSteel"), MaterialModifiers::NEUTRAL);
    }

    #[test]
    fn test_insert_rejects_bad_rows() {
        let mut table = MaterialTable::empty();
        assert!(!table.insert(" ", MaterialModifiers::NEUTRAL));
        assert!(!table.insert("foam", MaterialModifiers::new(-1.0, 1.0, 1.0)));
        assert!(!table.insert("foam", MaterialModifiers::new(1.0, f64::NAN, 1.0)));
        assert!(table.insert("foam", MaterialModifiers::new(1.5, 0.5, 1.0)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_body_part_health() {
        let table = BodyPartTable::builtin();
        assert_eq!(table.lookup("head"), Some(35.0));
        assert_eq!(table.lookup("Thorax"), Some(85.0));
        assert_eq!(table.lookup("leftArm"), Some(60.0));
        assert_eq!(table.lookup("right_leg"), Some(65.0));
        assert_eq!(table.lookup("unknown"), None);
    }

    #[test]
    fn test_body_part_table_matches_enum() {
        let table = BodyPartTable::builtin();
        for part in BodyPart::all() {
            assert_eq!(table.lookup(part.as_str()), Some(part.base_health()));
        }
        assert_eq!(table.len(), BodyPart::all().len());
    }
}
