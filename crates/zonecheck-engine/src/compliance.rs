//! Compliance evaluator.
//!
//! Six independent checks run in a fixed order: setbacks, floor-area
//! ratio, height/storeys, open space, minimum lot area, land use. Each
//! check is skipped entirely when the inputs it needs are absent.

use chrono::Utc;
use zonecheck_core::models::{ComplianceReport, ComplianceResult, ProjectAttributes};
use zonecheck_core::rules::ClassificationRuleSet;

/// The score always divides by the full check count, regardless of how
/// many checks were skipped for missing input.
const TOTAL_CHECKS: usize = 6;

#[derive(Default)]
struct CheckOutcome {
    violations: Vec<String>,
    warnings: Vec<String>,
}

impl CheckOutcome {
    fn failed(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Evaluate a project against a classification rule set.
///
/// Scoring policy: a check skipped for missing data contributes no
/// violation and therefore scores the same as a pass. This mirrors the
/// regulatory reference behavior; it is not a statement that missing
/// data is compliant.
pub fn evaluate(project: &ProjectAttributes, rules: &ClassificationRuleSet) -> ComplianceResult {
    let outcomes = [
        check_setbacks(project, rules),
        check_floor_area_ratio(project, rules),
        check_height(project, rules),
        check_open_space(project, rules),
        check_min_lot_area(project, rules),
        check_land_use(project, rules),
    ];

    let failed = outcomes.iter().filter(|o| o.failed()).count();

    let mut violations = Vec::new();
    let mut warnings = Vec::new();
    for outcome in outcomes {
        violations.extend(outcome.violations);
        warnings.extend(outcome.warnings);
    }

    let score = (TOTAL_CHECKS - failed) as f64 / TOTAL_CHECKS as f64 * 100.0;
    let score = (score * 100.0).round() / 100.0;

    ComplianceResult {
        compliant: violations.is_empty(),
        violations,
        warnings,
        score,
        classification_code: rules.code.clone(),
        classification_name: rules.name.clone(),
    }
}

fn check_setbacks(project: &ProjectAttributes, rules: &ClassificationRuleSet) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    if let (Some(declared), Some(required)) = (project.front_setback_m, rules.front_setback_min_m) {
        if declared < required {
            outcome.violations.push(format!(
                "Front setback {declared}m is less than the required minimum of {required}m"
            ));
        } else if declared < required * 1.1 {
            outcome.warnings.push(format!(
                "Front setback {declared}m is within 10% of the required minimum of {required}m"
            ));
        }
    }

    if let (Some(declared), Some(required)) = (project.rear_setback_m, rules.rear_setback_min_m) {
        if declared < required {
            outcome.violations.push(format!(
                "Rear setback {declared}m is less than the required minimum of {required}m"
            ));
        }
    }

    if let (Some(declared), Some(required)) = (project.side_setback_m, rules.side_setback_min_m) {
        if declared < required {
            outcome.violations.push(format!(
                "Side setback {declared}m is less than the required minimum of {required}m"
            ));
        }
    }

    outcome
}

fn check_floor_area_ratio(
    project: &ProjectAttributes,
    rules: &ClassificationRuleSet,
) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    let (Some(floor_area), Some(lot_area), Some(max_far)) =
        (project.floor_area_sqm, project.lot_area_sqm, rules.max_floor_area_ratio)
    else {
        return outcome;
    };

    let actual = if lot_area > 0.0 { floor_area / lot_area } else { 0.0 };

    if actual > max_far {
        outcome.violations.push(format!(
            "Floor Area Ratio {actual:.2} exceeds the maximum of {max_far:.2}"
        ));
    } else if actual > max_far * 0.95 {
        outcome.warnings.push(format!(
            "Floor Area Ratio {actual:.2} is approaching the maximum of {max_far:.2}"
        ));
    }

    outcome
}

fn check_height(project: &ProjectAttributes, rules: &ClassificationRuleSet) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    if let (Some(storeys), Some(max_storeys)) = (project.storeys, rules.max_storeys) {
        if storeys > max_storeys {
            outcome.violations.push(format!(
                "Building has {storeys} storeys, exceeding the maximum of {max_storeys}"
            ));
        } else if max_storeys - storeys <= 1 {
            outcome.warnings.push(format!(
                "Storey count {storeys} is within 1 of the maximum of {max_storeys}"
            ));
        }
    }

    if let (Some(height), Some(max_height)) =
        (project.building_height_m, rules.max_building_height_m)
    {
        if height > max_height {
            outcome.violations.push(format!(
                "Building height {height}m exceeds the maximum of {max_height}m"
            ));
        }
    }

    outcome
}

fn check_open_space(project: &ProjectAttributes, rules: &ClassificationRuleSet) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    let (Some(lot_area), Some(min_ratio)) = (project.lot_area_sqm, rules.min_open_space_ratio)
    else {
        return outcome;
    };

    // Footprint falls back to floor area when not declared
    let Some(footprint) = project.building_footprint_sqm.or(project.floor_area_sqm) else {
        return outcome;
    };

    let open_space = (lot_area - footprint).max(0.0);
    let ratio = if lot_area > 0.0 { open_space / lot_area } else { 0.0 };

    if ratio < min_ratio {
        outcome.violations.push(format!(
            "Open space ratio {ratio:.2} is below the required minimum of {min_ratio:.2}"
        ));
    } else if ratio < min_ratio * 1.1 {
        outcome.warnings.push(format!(
            "Open space ratio {ratio:.2} is within 10% of the required minimum of {min_ratio:.2}"
        ));
    }

    outcome
}

fn check_min_lot_area(project: &ProjectAttributes, rules: &ClassificationRuleSet) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    if let (Some(lot_area), Some(min_area)) = (project.lot_area_sqm, rules.min_lot_area_sqm) {
        if lot_area < min_area {
            outcome.violations.push(format!(
                "Lot area {lot_area} sqm is below the minimum of {min_area} sqm"
            ));
        }
    }

    outcome
}

fn check_land_use(project: &ProjectAttributes, rules: &ClassificationRuleSet) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    let Some(land_use) = project.land_use.as_deref() else {
        return outcome;
    };

    // Empty allowed-uses list means no restriction configured
    if rules.allowed_uses.is_empty() {
        return outcome;
    }

    if !rules.allows_use(land_use) {
        outcome.violations.push(format!(
            "Land use '{land_use}' is not permitted in this zone (allowed: {})",
            rules.allowed_uses.join(", ")
        ));
    }

    outcome
}

/// Derive a timestamped report with deduplicated remediation advice.
///
/// Recommendations are canned text keyed off the violation wording; they
/// are advisory only and feed no further computation.
pub fn report(result: &ComplianceResult) -> ComplianceReport {
    let mut recommendations: Vec<String> = Vec::new();

    for violation in &result.violations {
        let recommendation = if violation.contains("setback") {
            "Adjust the building position to meet the required setbacks."
        } else if violation.contains("Floor Area Ratio") {
            "Reduce the total floor area or increase the lot size to lower the Floor Area Ratio."
        } else if violation.contains("storey") || violation.contains("height") {
            "Reduce the building height or storey count to meet the zone limit."
        } else if violation.contains("Open space") {
            "Reduce the building footprint to free up the required open space."
        } else if violation.contains("Lot area") {
            "Increase the lot area or scale the proposal down to meet the minimum lot size."
        } else if violation.contains("Land use") {
            "Change the proposed land use or apply for rezoning."
        } else {
            "Review the zoning regulations for this classification."
        };

        if !recommendations.iter().any(|r| r == recommendation) {
            recommendations.push(recommendation.to_string());
        }
    }

    ComplianceReport { result: result.clone(), recommendations, generated_at: Utc::now() }
}
