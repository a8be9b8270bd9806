//! Location/zone consistency validation.
//!
//! All three contracts return structured outcomes, never errors: a zone
//! mismatch or a disallowed land use is an expected, user-correctable
//! business result.

use zonecheck_core::models::{
    FieldValidation, GeoPoint, ProjectAttributes, ProjectType, ValidationOutcome, Zone, ZoneId,
};
use zonecheck_core::rules::RuleTable;
use zonecheck_geo::locate;

/// Cross-check a declared zone id against the zone the coordinates
/// actually resolve to.
pub fn validate_zone_location(
    declared_zone_id: Option<ZoneId>,
    point: Option<GeoPoint>,
    zones: &[Zone],
) -> ValidationOutcome {
    let Some(point) = point else {
        return ValidationOutcome::fail("No coordinates were provided for the project location");
    };

    let Some(declared_id) = declared_zone_id else {
        return ValidationOutcome::fail("No zone was declared for the project");
    };

    let Some(detected) = locate(&point, zones) else {
        return ValidationOutcome::fail(
            "The project coordinates do not fall inside any mapped zone",
        );
    };

    if detected.id != declared_id {
        let classification = detected.classification.as_deref().unwrap_or("unclassified");
        return ValidationOutcome::fail(format!(
            "The project coordinates fall inside zone {} ({}), not the declared zone {}",
            detected.id, classification, declared_id
        ))
        .with_detected_zone(detected.id);
    }

    ValidationOutcome::ok("The declared zone matches the project coordinates")
        .with_detected_zone(detected.id)
}

/// Check the declared land use against the allowed uses of the zone's
/// classification. Unmapped classifications fall back to the default
/// rule set, which allows everything.
pub fn validate_land_use_compatibility(
    zone_id: ZoneId,
    land_use: &str,
    zones: &[Zone],
    rules: &RuleTable,
) -> ValidationOutcome {
    let Some(zone) = zones.iter().find(|z| z.id == zone_id) else {
        return ValidationOutcome::fail(format!("Zone {zone_id} was not found"));
    };

    let rule_set = rules.rules_for(zone.classification.as_deref());

    if !rule_set.allows_use(land_use) {
        return ValidationOutcome::fail(format!(
            "Land use '{}' is not permitted in {} ({})",
            land_use, rule_set.name, rule_set.code
        ));
    }

    ValidationOutcome::ok(format!("Land use '{}' is permitted in {}", land_use, rule_set.name))
}

/// Structural cross-field rules, independent of geometry. Errors
/// accumulate per field instead of stopping at the first failure.
pub fn validate_project_requirements(project: &ProjectAttributes) -> FieldValidation {
    let mut validation = FieldValidation::valid();

    if project.is_subdivision() {
        if project.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
            validation.add_error("name", "Subdivision projects must declare a project name");
        }
        if project.lot_count.is_none_or(|count| count == 0) {
            validation
                .add_error("lot_count", "Subdivision projects must declare a positive lot count");
        }
    }

    if matches!(
        project.project_type,
        Some(ProjectType::NewConstruction | ProjectType::Addition)
    ) && project.floor_area_sqm.is_none_or(|area| area <= 0.0)
    {
        validation.add_error(
            "floor_area_sqm",
            "New construction and addition projects must declare a positive floor area",
        );
    }

    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use zonecheck_core::models::Geometry;

    fn square_zone(id: ZoneId, classification: &str, min: f64, max: f64) -> Zone {
        let geometry = Geometry::polygon(vec![vec![
            [min, min],
            [max, min],
            [max, max],
            [min, max],
            [min, min],
        ]])
        .unwrap();
        Zone::new(id, Some(classification.to_string()), Some(geometry))
    }

    #[test]
    fn test_zone_location_mismatch_reports_detected_zone() {
        let zones = vec![square_zone(3, "C-1", 0.0, 10.0)];

        let outcome = validate_zone_location(Some(7), Some(GeoPoint::new(5.0, 5.0)), &zones);

        assert!(!outcome.valid);
        assert_eq!(outcome.detected_zone_id, Some(3));
        assert!(outcome.message.contains("C-1"));
    }

    #[test]
    fn test_zone_location_match() {
        let zones = vec![square_zone(7, "R1", 0.0, 10.0)];

        let outcome = validate_zone_location(Some(7), Some(GeoPoint::new(5.0, 5.0)), &zones);

        assert!(outcome.valid);
        assert_eq!(outcome.detected_zone_id, Some(7));
    }

    #[test]
    fn test_zone_location_missing_inputs() {
        let zones = vec![square_zone(7, "R1", 0.0, 10.0)];

        assert!(!validate_zone_location(Some(7), None, &zones).valid);
        assert!(!validate_zone_location(None, Some(GeoPoint::new(5.0, 5.0)), &zones).valid);
        // Point outside every zone
        assert!(!validate_zone_location(Some(7), Some(GeoPoint::new(50.0, 50.0)), &zones).valid);
    }

    #[test]
    fn test_land_use_compatibility() {
        let table = RuleTable::builtin();
        let zones = vec![square_zone(1, "I1", 0.0, 10.0)];

        let outcome = validate_land_use_compatibility(1, "residential", &zones, &table);
        assert!(!outcome.valid);

        let outcome = validate_land_use_compatibility(1, "warehouse", &zones, &table);
        assert!(outcome.valid);

        // Unknown zone id in the snapshot
        let outcome = validate_land_use_compatibility(99, "residential", &zones, &table);
        assert!(!outcome.valid);
        assert!(outcome.message.contains("not found"));
    }

    #[test]
    fn test_land_use_unmapped_classification_allows_everything() {
        let table = RuleTable::builtin();
        let zones = vec![square_zone(1, "XYZ", 0.0, 10.0)];

        let outcome = validate_land_use_compatibility(1, "residential", &zones, &table);
        assert!(outcome.valid);
    }

    #[test]
    fn test_project_requirements_accumulate() {
        let project = ProjectAttributes { subdivision: true, ..Default::default() };

        let validation = validate_project_requirements(&project);

        assert!(!validation.valid);
        assert!(validation.errors.contains_key("name"));
        assert!(validation.errors.contains_key("lot_count"));
    }

    #[test]
    fn test_project_requirements_new_construction() {
        let project = ProjectAttributes {
            project_type: Some(ProjectType::NewConstruction),
            ..Default::default()
        };
        assert!(!validate_project_requirements(&project).valid);

        let project = ProjectAttributes {
            project_type: Some(ProjectType::NewConstruction),
            floor_area_sqm: Some(120.0),
            ..Default::default()
        };
        assert!(validate_project_requirements(&project).valid);

        // Renovations carry no floor-area requirement
        let project = ProjectAttributes {
            project_type: Some(ProjectType::Renovation),
            ..Default::default()
        };
        assert!(validate_project_requirements(&project).valid);
    }
}
