//! Project attribute payloads.

use serde::{Deserialize, Serialize};

/// Project category declared by the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    NewConstruction,
    Addition,
    Renovation,
    Apartment,
    Subdivision,
}

/// The subset of a construction/subdivision proposal relevant to
/// compliance checks and fee assessment.
///
/// Every numeric field is optional; an absent field disables only the
/// checks that require it, it is never treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectAttributes {
    pub name: Option<String>,
    pub project_type: Option<ProjectType>,
    /// Declared land-use tag, e.g. "residential" or "commercial".
    pub land_use: Option<String>,
    pub lot_area_sqm: Option<f64>,
    pub floor_area_sqm: Option<f64>,
    pub building_footprint_sqm: Option<f64>,
    pub storeys: Option<u32>,
    pub building_height_m: Option<f64>,
    pub front_setback_m: Option<f64>,
    pub rear_setback_m: Option<f64>,
    pub side_setback_m: Option<f64>,
    pub subdivision: bool,
    pub lot_count: Option<u32>,
}

impl ProjectAttributes {
    /// Subdivision projects are flagged explicitly or via project type.
    pub fn is_subdivision(&self) -> bool {
        self.subdivision || self.project_type == Some(ProjectType::Subdivision)
    }
}
