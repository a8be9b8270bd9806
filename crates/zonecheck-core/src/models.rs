pub mod geometry;
pub mod project;
pub mod report;
pub mod zone;

pub use geometry::{GeoPoint, Geometry, Polygon, Ring};
pub use project::{ProjectAttributes, ProjectType};
pub use report::{
    ComplianceReport, ComplianceResult, FeeAssessment, FeeBreakdown, FieldValidation,
    ValidationOutcome,
};
pub use zone::{Zone, ZoneId};
