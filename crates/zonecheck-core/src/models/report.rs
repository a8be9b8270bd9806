//! Result structures returned by the engine.
//!
//! All of these are intended to be serialized as-is by the surrounding
//! request-handling layer, either for display or to gate a downstream
//! submit action.

use crate::models::zone::ZoneId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of the compliance evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// True iff the violations list is empty.
    pub compliant: bool,
    pub violations: Vec<String>,
    pub warnings: Vec<String>,
    /// 0-100, rounded to two decimals.
    pub score: f64,
    pub classification_code: String,
    pub classification_name: String,
}

/// A compliance result plus advisory remediation text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub result: ComplianceResult,
    /// Deduplicated recommendations derived from the violation text.
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Itemized fee computation for display and audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Project category label, e.g. "Industrial Project".
    pub category: String,
    pub base_fee: f64,
    pub rate: f64,
    pub quantity: f64,
    /// What the rate applies to, e.g. "sqm floor area" or "lot".
    pub unit: String,
    pub variable_fee: f64,
    pub total: f64,
}

/// Assessed regulatory fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeAssessment {
    pub amount: f64,
    pub currency: String,
    pub breakdown: FeeBreakdown,
}

/// Outcome of a single validator contract.
///
/// Validator failures are expected, user-correctable business outcomes,
/// never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: String,
    pub detected_zone_id: Option<ZoneId>,
}

impl ValidationOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { valid: true, message: message.into(), detected_zone_id: None }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self { valid: false, message: message.into(), detected_zone_id: None }
    }

    pub fn with_detected_zone(mut self, zone_id: ZoneId) -> Self {
        self.detected_zone_id = Some(zone_id);
        self
    }
}

/// Accumulated structural validation errors, keyed by field name.
///
/// BTreeMap keeps the serialized form byte-stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValidation {
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl FieldValidation {
    pub fn valid() -> Self {
        Self { valid: true, errors: BTreeMap::new() }
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.insert(field.into(), message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_outcome_builders() {
        let ok = ValidationOutcome::ok("Zone assignment is consistent");
        assert!(ok.valid);
        assert!(ok.detected_zone_id.is_none());

        let fail = ValidationOutcome::fail("Zone mismatch").with_detected_zone(3);
        assert!(!fail.valid);
        assert_eq!(fail.detected_zone_id, Some(3));
    }

    #[test]
    fn test_field_validation_accumulates() {
        let mut validation = FieldValidation::valid();
        assert!(validation.valid);

        validation.add_error("lot_count", "Subdivision requires a positive lot count");
        validation.add_error("name", "Subdivision requires a project name");

        assert!(!validation.valid);
        assert_eq!(validation.errors.len(), 2);
    }

    #[test]
    fn test_field_validation_serialization_is_stable() {
        let mut a = FieldValidation::valid();
        a.add_error("z_field", "z");
        a.add_error("a_field", "a");

        let mut b = FieldValidation::valid();
        b.add_error("a_field", "a");
        b.add_error("z_field", "z");

        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }
}
