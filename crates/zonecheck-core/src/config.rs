//! Engine policy configuration.
//!
//! Precedence follows defaults < config file < environment. The engine
//! owns no persisted state; the caller may rebuild the configuration and
//! hand a fresh snapshot to any later invocation (hot reload).

use crate::error::{Result, ZonecheckError};
use crate::rules::{ClassificationRuleSet, RuleTable};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Regulatory fee constants.
///
/// Defaults carry the reference schedule; every value is policy and may
/// be overridden from a `[fees]` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub subdivision_base: f64,
    pub subdivision_per_lot: f64,
    pub industrial_base: f64,
    pub industrial_per_sqm: f64,
    pub commercial_base: f64,
    pub commercial_per_sqm: f64,
    pub apartment_base: f64,
    pub apartment_per_sqm: f64,
    pub house_flat: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            subdivision_base: 1000.0,
            subdivision_per_lot: 5.0,
            industrial_base: 1500.0,
            industrial_per_sqm: 15.0,
            commercial_base: 1000.0,
            commercial_per_sqm: 10.0,
            apartment_base: 500.0,
            apartment_per_sqm: 5.0,
            house_flat: 500.0,
        }
    }
}

/// Snapshot of all policy the engine evaluates against.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub rules: RuleTable,
    pub fees: FeeSchedule,
    pub currency: String,
}

impl EngineConfig {
    /// Built-in policy: the shipped rule table, reference fee schedule,
    /// and PHP as currency.
    pub fn with_defaults() -> Self {
        Self {
            rules: RuleTable::builtin(),
            fees: FeeSchedule::default(),
            currency: "PHP".to_string(),
        }
    }

    /// Merge a TOML config file over the current values.
    ///
    /// `[[classification]]` entries are inserted into the rule table
    /// (replacing same-code entries, keeping the rest); `[default_rules]`
    /// replaces the fallback rule set; `[fees]` fields and `currency`
    /// merge individually over the current values.
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ZonecheckError::ConfigFileNotFound { path: path.to_path_buf() });
        }

        let content = fs::read_to_string(path).map_err(|e| ZonecheckError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| ZonecheckError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(currency) = file_config.currency {
            self.currency = currency;
        }

        if let Some(fees) = file_config.fees {
            fees.merge_into(&mut self.fees);
        }

        for rule_set in file_config.classification {
            if rule_set.code.trim().is_empty() {
                return Err(ZonecheckError::ConfigInvalid {
                    key: "classification".to_string(),
                    reason: "classification entry has an empty code".to_string(),
                });
            }
            self.rules.insert(rule_set);
        }

        if let Some(default_rules) = file_config.default_rules {
            self.rules.set_default(default_rules);
        }

        Ok(self)
    }

    /// Apply environment overrides.
    pub fn load_from_env(mut self) -> Self {
        // ZONECHECK_CURRENCY
        if let Ok(currency) = env::var("ZONECHECK_CURRENCY") {
            let trimmed = currency.trim();
            if trimmed.is_empty() {
                tracing::warn!("Ignoring empty ZONECHECK_CURRENCY");
            } else {
                self.currency = trimmed.to_uppercase();
            }
        }

        self
    }
}

/// Configuration loaded from a TOML file. Every section is optional.
#[derive(Debug, Default, Deserialize, Serialize)]
struct FileConfig {
    currency: Option<String>,
    fees: Option<FileFees>,
    default_rules: Option<ClassificationRuleSet>,
    #[serde(default)]
    classification: Vec<ClassificationRuleSet>,
}

/// `[fees]` section with every field optional, so fields a file omits
/// keep whatever the current configuration already holds.
#[derive(Debug, Default, Deserialize, Serialize)]
struct FileFees {
    subdivision_base: Option<f64>,
    subdivision_per_lot: Option<f64>,
    industrial_base: Option<f64>,
    industrial_per_sqm: Option<f64>,
    commercial_base: Option<f64>,
    commercial_per_sqm: Option<f64>,
    apartment_base: Option<f64>,
    apartment_per_sqm: Option<f64>,
    house_flat: Option<f64>,
}

impl FileFees {
    fn merge_into(self, fees: &mut FeeSchedule) {
        if let Some(value) = self.subdivision_base {
            fees.subdivision_base = value;
        }
        if let Some(value) = self.subdivision_per_lot {
            fees.subdivision_per_lot = value;
        }
        if let Some(value) = self.industrial_base {
            fees.industrial_base = value;
        }
        if let Some(value) = self.industrial_per_sqm {
            fees.industrial_per_sqm = value;
        }
        if let Some(value) = self.commercial_base {
            fees.commercial_base = value;
        }
        if let Some(value) = self.commercial_per_sqm {
            fees.commercial_per_sqm = value;
        }
        if let Some(value) = self.apartment_base {
            fees.apartment_base = value;
        }
        if let Some(value) = self.apartment_per_sqm {
            fees.apartment_per_sqm = value;
        }
        if let Some(value) = self.house_flat {
            fees.house_flat = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::with_defaults();
        assert_eq!(config.currency, "PHP");
        assert_eq!(config.fees.industrial_base, 1500.0);
        assert_eq!(config.fees.house_flat, 500.0);
        assert_eq!(config.rules.rules_for(Some("R1")).name, "Low Density Residential");
    }

    #[test]
    fn test_load_from_file_merges_over_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
currency = "USD"

[fees]
industrial_base = 2000.0

[default_rules]
code = "DEFAULT"
name = "Fallback"
min_lot_area_sqm = 80.0

[[classification]]
code = "A-1"
name = "Agricultural"
min_lot_area_sqm = 2000.0
allowed_uses = ["agricultural"]
"#
        )
        .unwrap();

        let config = EngineConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.currency, "USD");
        // Overridden field plus section defaults for the rest
        assert_eq!(config.fees.industrial_base, 2000.0);
        assert_eq!(config.fees.industrial_per_sqm, 15.0);
        // New classification entry, existing entries kept
        assert_eq!(config.rules.rules_for(Some("A1")).name, "Agricultural");
        assert_eq!(config.rules.rules_for(Some("I1")).name, "Light Industrial");
        // Replaced default rule set
        assert_eq!(config.rules.rules_for(Some("ZZZ")).name, "Fallback");
        assert_eq!(config.rules.rules_for(Some("ZZZ")).min_lot_area_sqm, Some(80.0));
    }

    #[test]
    fn test_load_from_file_rejects_empty_code() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[classification]]
code = ""
name = "Broken"
"#
        )
        .unwrap();

        let result = EngineConfig::with_defaults().load_from_file(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = EngineConfig::with_defaults().load_from_file("/nonexistent/zonecheck.toml");
        assert!(result.is_err());
    }
}
