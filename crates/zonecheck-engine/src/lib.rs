//! Zonecheck Engine - Compliance evaluation, consistency validation, and fees
//!
//! The engine is purely functional per call: every operation receives an
//! immutable snapshot of zones, rules, and project data and returns a
//! freshly constructed result. It is safe to invoke concurrently without
//! locking.

pub mod compliance;
pub mod engine;
pub mod fees;
pub mod validate;

pub use compliance::{evaluate, report};
pub use engine::{Assessment, AssessmentRequest, Engine};
pub use fees::calculate_fee;
pub use validate::{
    validate_land_use_compatibility, validate_project_requirements, validate_zone_location,
};
