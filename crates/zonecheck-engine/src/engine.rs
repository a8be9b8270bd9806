//! Assessment facade.
//!
//! Ties the locator, validator, evaluator, and fee calculator together
//! for one "check this project" request. The three outputs are
//! independent: a failed location validation does not block compliance
//! evaluation or fee assessment; the caller decides what gates a
//! submission.

use serde::{Deserialize, Serialize};
use zonecheck_core::config::EngineConfig;
use zonecheck_core::models::{
    ComplianceReport, ComplianceResult, FeeAssessment, FieldValidation, GeoPoint,
    ProjectAttributes, ValidationOutcome, Zone, ZoneId,
};
use zonecheck_geo::locate;

use crate::{compliance, fees, validate};

/// An inbound "check this project" request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentRequest {
    pub project: ProjectAttributes,
    pub declared_zone_id: Option<ZoneId>,
    pub location: Option<GeoPoint>,
}

/// The combined result of one assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub requirements: FieldValidation,
    pub location: ValidationOutcome,
    /// Present when a zone and a declared land use were both resolvable.
    pub land_use: Option<ValidationOutcome>,
    pub compliance: ComplianceResult,
    pub fee: FeeAssessment,
}

/// Stateless assessment engine over an injected policy snapshot.
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::with_defaults())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one full assessment against a zone snapshot.
    ///
    /// The classification is resolved from the declared zone when it
    /// exists in the snapshot, otherwise from the zone located at the
    /// request coordinates; with neither, the default rule set applies.
    pub fn assess(&self, request: &AssessmentRequest, zones: &[Zone]) -> Assessment {
        let requirements = validate::validate_project_requirements(&request.project);
        let location =
            validate::validate_zone_location(request.declared_zone_id, request.location, zones);

        let resolved_zone = request
            .declared_zone_id
            .and_then(|id| zones.iter().find(|zone| zone.id == id))
            .or_else(|| request.location.and_then(|point| locate(&point, zones)));

        let classification = resolved_zone.and_then(|zone| zone.classification.as_deref());
        tracing::debug!(?classification, "resolved classification for assessment");

        let rule_set = self.config.rules.rules_for(classification);
        let compliance = compliance::evaluate(&request.project, rule_set);

        let land_use = match (resolved_zone, request.project.land_use.as_deref()) {
            (Some(zone), Some(land_use)) => Some(validate::validate_land_use_compatibility(
                zone.id,
                land_use,
                zones,
                &self.config.rules,
            )),
            _ => None,
        };

        let fee = fees::calculate_fee(
            classification,
            &request.project,
            &self.config.fees,
            &self.config.currency,
        );

        Assessment { requirements, location, land_use, compliance, fee }
    }

    /// Compliance report with remediation advice for an evaluated result.
    pub fn report(&self, result: &ComplianceResult) -> ComplianceReport {
        compliance::report(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zonecheck_core::models::Geometry;

    fn snapshot() -> Vec<Zone> {
        let residential = Geometry::polygon(vec![vec![
            [120.95, 14.55],
            [121.00, 14.55],
            [121.00, 14.60],
            [120.95, 14.60],
            [120.95, 14.55],
        ]])
        .unwrap();
        let industrial = Geometry::polygon(vec![vec![
            [121.00, 14.55],
            [121.05, 14.55],
            [121.05, 14.60],
            [121.00, 14.60],
            [121.00, 14.55],
        ]])
        .unwrap();

        vec![
            Zone::new(1, Some("R1".to_string()), Some(residential)),
            Zone::new(2, Some("I-1".to_string()), Some(industrial)),
        ]
    }

    #[test]
    fn test_assess_resolves_classification_from_declared_zone() {
        let engine = Engine::with_defaults();
        let request = AssessmentRequest {
            project: ProjectAttributes { floor_area_sqm: Some(200.0), ..Default::default() },
            declared_zone_id: Some(2),
            location: Some(GeoPoint::new(121.02, 14.57)),
        };

        let assessment = engine.assess(&request, &snapshot());

        assert!(assessment.location.valid);
        assert_eq!(assessment.compliance.classification_code, "I1");
        assert_eq!(assessment.fee.breakdown.category, "Industrial Project");
        assert_eq!(assessment.fee.amount, 4500.0);
    }

    #[test]
    fn test_assess_falls_back_to_located_zone() {
        let engine = Engine::with_defaults();
        let request = AssessmentRequest {
            project: ProjectAttributes::default(),
            declared_zone_id: None,
            location: Some(GeoPoint::new(120.97, 14.57)),
        };

        let assessment = engine.assess(&request, &snapshot());

        // Location validation fails without a declared zone, but the
        // compliance evaluation still uses the located classification
        assert!(!assessment.location.valid);
        assert_eq!(assessment.compliance.classification_code, "R1");
    }

    #[test]
    fn test_assess_without_any_zone_uses_default_rules() {
        let engine = Engine::with_defaults();
        let request = AssessmentRequest::default();

        let assessment = engine.assess(&request, &snapshot());

        assert_eq!(assessment.compliance.classification_code, "DEFAULT");
        assert_eq!(assessment.fee.breakdown.category, "Residential House");
    }
}
