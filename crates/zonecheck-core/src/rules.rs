//! Classification rule table.
//!
//! Zoning rules are regulatory policy: they change independently of code,
//! so the table is plain data that can be loaded from configuration. A
//! built-in table ships as the default policy and is fully replaceable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Normalized zoning classification code (trimmed, uppercased).
///
/// Source systems disagree on formats like "I-1" vs "I1"; lookups retry
/// with hyphens stripped so both resolve to the same rule set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationCode(String);

impl ClassificationCode {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn dehyphenated(&self) -> Self {
        Self(self.0.replace('-', ""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the code into a regulatory family.
    ///
    /// Families drive fee formulas: the letter-digit patterns are matched
    /// on the compact (hyphen-stripped) form.
    pub fn family(&self) -> ClassificationFamily {
        let compact = self.0.replace('-', "");
        let mut chars = compact.chars();

        match (chars.next(), chars.next(), chars.next()) {
            (Some('I'), Some('1' | '2'), None) => ClassificationFamily::Industrial,
            (Some('C'), Some('1'..='3'), None) => ClassificationFamily::Commercial,
            (Some('R'), Some('3' | '4'), None) => ClassificationFamily::ResidentialApartment,
            (Some('R'), Some('1' | '2'), None) => ClassificationFamily::Residential,
            _ => ClassificationFamily::Unknown,
        }
    }
}

impl fmt::Display for ClassificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Regulatory family of a classification code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationFamily {
    /// R1, R2 - low/medium density housing
    Residential,
    /// R3, R4 - apartment and high density residential
    ResidentialApartment,
    /// C1..C3
    Commercial,
    /// I1, I2
    Industrial,
    Unknown,
}

/// Rule set attached to one classification code.
///
/// Every numeric field is optional: an absent field disables the
/// corresponding check entirely, it is neither a violation nor "0
/// allowed". An empty `allowed_uses` list means no use restriction is
/// configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationRuleSet {
    pub code: String,
    pub name: String,
    pub front_setback_min_m: Option<f64>,
    pub rear_setback_min_m: Option<f64>,
    pub side_setback_min_m: Option<f64>,
    pub max_floor_area_ratio: Option<f64>,
    pub max_building_height_m: Option<f64>,
    pub max_storeys: Option<u32>,
    pub min_open_space_ratio: Option<f64>,
    pub min_lot_area_sqm: Option<f64>,
    pub allowed_uses: Vec<String>,
}

impl ClassificationRuleSet {
    /// Case-insensitive membership test; an empty list allows everything.
    pub fn allows_use(&self, land_use: &str) -> bool {
        self.allowed_uses.is_empty()
            || self.allowed_uses.iter().any(|u| u.eq_ignore_ascii_case(land_use.trim()))
    }
}

/// Lookup from classification code to rule set, with a default rule set
/// for codes that have no explicit entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: HashMap<ClassificationCode, ClassificationRuleSet>,
    default_rules: ClassificationRuleSet,
}

impl RuleTable {
    pub fn new(
        rule_sets: Vec<ClassificationRuleSet>,
        default_rules: ClassificationRuleSet,
    ) -> Self {
        let mut table = Self { rules: HashMap::new(), default_rules };
        for rule_set in rule_sets {
            table.insert(rule_set);
        }
        table
    }

    /// Insert or replace an entry, indexed under both its normalized and
    /// hyphen-stripped forms so "I-1" and "I1" resolve identically.
    pub fn insert(&mut self, rule_set: ClassificationRuleSet) {
        let code = ClassificationCode::new(&rule_set.code);
        self.rules.insert(code.dehyphenated(), rule_set.clone());
        self.rules.insert(code, rule_set);
    }

    pub fn set_default(&mut self, rule_set: ClassificationRuleSet) {
        self.default_rules = rule_set;
    }

    pub fn default_rules(&self) -> &ClassificationRuleSet {
        &self.default_rules
    }

    /// Resolve the rule set for a code.
    ///
    /// Lookup chain: exact normalized code, then hyphens stripped, then
    /// the default rule set. Never fails; an unknown zone must still be
    /// evaluable with conservative defaults.
    pub fn rules_for(&self, code: Option<&str>) -> &ClassificationRuleSet {
        let Some(code) = code else {
            return &self.default_rules;
        };

        let normalized = ClassificationCode::new(code);
        if let Some(rule_set) = self.rules.get(&normalized) {
            return rule_set;
        }
        if let Some(rule_set) = self.rules.get(&normalized.dehyphenated()) {
            return rule_set;
        }
        &self.default_rules
    }

    /// The built-in policy table. A starting point, not a constant: the
    /// whole table can be replaced or amended from configuration.
    pub fn builtin() -> Self {
        let residential = vec!["residential".to_string()];
        let residential_mixed = vec!["residential".to_string(), "mixed_use".to_string()];
        let commercial =
            vec!["commercial".to_string(), "mixed_use".to_string(), "office".to_string()];
        let industrial = vec![
            "industrial".to_string(),
            "warehouse".to_string(),
            "manufacturing".to_string(),
        ];

        let rule_sets = vec![
            ClassificationRuleSet {
                code: "R1".to_string(),
                name: "Low Density Residential".to_string(),
                front_setback_min_m: Some(4.5),
                rear_setback_min_m: Some(2.0),
                side_setback_min_m: Some(2.0),
                max_floor_area_ratio: Some(0.8),
                max_building_height_m: Some(10.0),
                max_storeys: Some(2),
                min_open_space_ratio: Some(0.3),
                min_lot_area_sqm: Some(120.0),
                allowed_uses: residential.clone(),
            },
            ClassificationRuleSet {
                code: "R2".to_string(),
                name: "Medium Density Residential".to_string(),
                front_setback_min_m: Some(4.5),
                rear_setback_min_m: Some(2.0),
                side_setback_min_m: Some(2.0),
                max_floor_area_ratio: Some(1.5),
                max_building_height_m: Some(12.0),
                max_storeys: Some(3),
                min_open_space_ratio: Some(0.25),
                min_lot_area_sqm: Some(100.0),
                allowed_uses: residential,
            },
            ClassificationRuleSet {
                code: "R3".to_string(),
                name: "High Density Residential".to_string(),
                front_setback_min_m: Some(4.5),
                rear_setback_min_m: Some(3.0),
                side_setback_min_m: Some(2.0),
                max_floor_area_ratio: Some(3.0),
                max_building_height_m: Some(15.0),
                max_storeys: Some(5),
                min_open_space_ratio: Some(0.2),
                min_lot_area_sqm: Some(150.0),
                allowed_uses: residential_mixed.clone(),
            },
            ClassificationRuleSet {
                code: "R4".to_string(),
                name: "Residential Apartment".to_string(),
                front_setback_min_m: Some(4.5),
                rear_setback_min_m: Some(3.0),
                side_setback_min_m: Some(3.0),
                max_floor_area_ratio: Some(4.0),
                max_building_height_m: Some(21.0),
                max_storeys: Some(7),
                min_open_space_ratio: Some(0.2),
                min_lot_area_sqm: Some(200.0),
                allowed_uses: residential_mixed,
            },
            ClassificationRuleSet {
                code: "C1".to_string(),
                name: "Neighborhood Commercial".to_string(),
                front_setback_min_m: Some(3.0),
                rear_setback_min_m: Some(2.0),
                side_setback_min_m: Some(1.5),
                max_floor_area_ratio: Some(3.0),
                max_building_height_m: Some(15.0),
                max_storeys: Some(5),
                min_open_space_ratio: Some(0.15),
                min_lot_area_sqm: Some(150.0),
                allowed_uses: commercial.clone(),
            },
            ClassificationRuleSet {
                code: "C2".to_string(),
                name: "General Commercial".to_string(),
                front_setback_min_m: Some(3.0),
                rear_setback_min_m: Some(2.0),
                side_setback_min_m: Some(1.5),
                max_floor_area_ratio: Some(5.0),
                max_building_height_m: Some(24.0),
                max_storeys: Some(8),
                min_open_space_ratio: Some(0.15),
                min_lot_area_sqm: Some(200.0),
                allowed_uses: commercial.clone(),
            },
            ClassificationRuleSet {
                code: "C3".to_string(),
                name: "Central Business District".to_string(),
                front_setback_min_m: Some(3.0),
                rear_setback_min_m: Some(2.0),
                side_setback_min_m: Some(1.5),
                max_floor_area_ratio: Some(8.0),
                max_building_height_m: Some(45.0),
                max_storeys: Some(15),
                min_open_space_ratio: Some(0.1),
                min_lot_area_sqm: Some(300.0),
                allowed_uses: commercial,
            },
            ClassificationRuleSet {
                code: "I1".to_string(),
                name: "Light Industrial".to_string(),
                front_setback_min_m: Some(6.0),
                rear_setback_min_m: Some(4.0),
                side_setback_min_m: Some(4.0),
                max_floor_area_ratio: Some(2.0),
                max_building_height_m: Some(15.0),
                max_storeys: Some(3),
                min_open_space_ratio: Some(0.25),
                min_lot_area_sqm: Some(500.0),
                allowed_uses: industrial.clone(),
            },
            ClassificationRuleSet {
                code: "I2".to_string(),
                name: "Heavy Industrial".to_string(),
                front_setback_min_m: Some(8.0),
                rear_setback_min_m: Some(5.0),
                side_setback_min_m: Some(5.0),
                max_floor_area_ratio: Some(2.5),
                max_building_height_m: Some(21.0),
                max_storeys: Some(4),
                min_open_space_ratio: Some(0.3),
                min_lot_area_sqm: Some(1000.0),
                allowed_uses: {
                    let mut uses = industrial;
                    uses.push("utilities".to_string());
                    uses
                },
            },
        ];

        let default_rules = ClassificationRuleSet {
            code: "DEFAULT".to_string(),
            name: "Unclassified".to_string(),
            front_setback_min_m: Some(4.5),
            rear_setback_min_m: Some(2.0),
            side_setback_min_m: Some(2.0),
            max_floor_area_ratio: Some(1.0),
            max_building_height_m: Some(10.0),
            max_storeys: Some(3),
            min_open_space_ratio: Some(0.3),
            min_lot_area_sqm: Some(100.0),
            // No use restriction for unmapped codes
            allowed_uses: Vec::new(),
        };

        Self::new(rule_sets, default_rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_normalization() {
        assert_eq!(ClassificationCode::new("  r-1 ").as_str(), "R-1");
        assert_eq!(ClassificationCode::new("R-1").dehyphenated().as_str(), "R1");
    }

    #[test]
    fn test_family_patterns() {
        assert_eq!(ClassificationCode::new("I1").family(), ClassificationFamily::Industrial);
        assert_eq!(ClassificationCode::new("i-2").family(), ClassificationFamily::Industrial);
        assert_eq!(ClassificationCode::new("C-3").family(), ClassificationFamily::Commercial);
        assert_eq!(
            ClassificationCode::new("r3").family(),
            ClassificationFamily::ResidentialApartment
        );
        assert_eq!(ClassificationCode::new("R1").family(), ClassificationFamily::Residential);
        // Longer codes do not match the two-character patterns
        assert_eq!(ClassificationCode::new("I10").family(), ClassificationFamily::Unknown);
        assert_eq!(ClassificationCode::new("AGR").family(), ClassificationFamily::Unknown);
    }

    #[test]
    fn test_rules_for_hyphen_insensitive() {
        let table = RuleTable::builtin();
        assert_eq!(table.rules_for(Some("I-1")), table.rules_for(Some("I1")));
        assert_eq!(table.rules_for(Some("i1")), table.rules_for(Some("I1")));
    }

    #[test]
    fn test_rules_for_unknown_falls_back_to_default() {
        let table = RuleTable::builtin();
        let rules = table.rules_for(Some("ZZZ-UNKNOWN"));
        assert_eq!(rules, table.default_rules());

        let rules = table.rules_for(None);
        assert_eq!(rules, table.default_rules());
    }

    #[test]
    fn test_hyphenated_table_entry_resolves_compact_lookup() {
        let mut table = RuleTable::builtin();
        table.insert(ClassificationRuleSet {
            code: "A-1".to_string(),
            name: "Agricultural".to_string(),
            ..Default::default()
        });

        assert_eq!(table.rules_for(Some("A1")).name, "Agricultural");
        assert_eq!(table.rules_for(Some("A-1")).name, "Agricultural");
    }

    #[test]
    fn test_allows_use() {
        let table = RuleTable::builtin();
        let industrial = table.rules_for(Some("I1"));

        assert!(industrial.allows_use("warehouse"));
        assert!(industrial.allows_use("  Industrial "));
        assert!(!industrial.allows_use("residential"));

        // Empty list means no restriction configured
        assert!(table.default_rules().allows_use("anything"));
    }
}
