//! Regulatory fee calculation.
//!
//! Fees are a priority chain, first match wins: subdivision, industrial,
//! commercial, residential apartment, residential house default. Every
//! constant comes from the injected `FeeSchedule`.

use zonecheck_core::config::FeeSchedule;
use zonecheck_core::models::{FeeAssessment, FeeBreakdown, ProjectAttributes, ProjectType};
use zonecheck_core::rules::{ClassificationCode, ClassificationFamily};

/// Compute the regulatory fee for a project.
///
/// Classification matching is case-insensitive and hyphen-tolerant via
/// `ClassificationCode::family`.
pub fn calculate_fee(
    classification: Option<&str>,
    project: &ProjectAttributes,
    schedule: &FeeSchedule,
    currency: &str,
) -> FeeAssessment {
    let family = classification
        .map(|code| ClassificationCode::new(code).family())
        .unwrap_or(ClassificationFamily::Unknown);
    let floor_area = project.floor_area_sqm.unwrap_or(0.0);

    let breakdown = if project.is_subdivision() {
        let lots = f64::from(project.lot_count.unwrap_or(0));
        variable_fee(
            "Subdivision Project",
            schedule.subdivision_base,
            schedule.subdivision_per_lot,
            lots,
            "lot",
        )
    } else if family == ClassificationFamily::Industrial {
        variable_fee(
            "Industrial Project",
            schedule.industrial_base,
            schedule.industrial_per_sqm,
            floor_area,
            "sqm floor area",
        )
    } else if family == ClassificationFamily::Commercial {
        variable_fee(
            "Commercial Project",
            schedule.commercial_base,
            schedule.commercial_per_sqm,
            floor_area,
            "sqm floor area",
        )
    } else if family == ClassificationFamily::ResidentialApartment
        || project.project_type == Some(ProjectType::Apartment)
    {
        variable_fee(
            "Residential Apartment",
            schedule.apartment_base,
            schedule.apartment_per_sqm,
            floor_area,
            "sqm floor area",
        )
    } else {
        FeeBreakdown {
            category: "Residential House".to_string(),
            base_fee: schedule.house_flat,
            rate: 0.0,
            quantity: 0.0,
            unit: String::new(),
            variable_fee: 0.0,
            total: schedule.house_flat,
        }
    };

    FeeAssessment {
        amount: breakdown.total,
        currency: currency.to_string(),
        breakdown,
    }
}

fn variable_fee(category: &str, base: f64, rate: f64, quantity: f64, unit: &str) -> FeeBreakdown {
    let variable = rate * quantity;
    FeeBreakdown {
        category: category.to_string(),
        base_fee: base,
        rate,
        quantity,
        unit: unit.to_string(),
        variable_fee: variable,
        total: base + variable,
    }
}
