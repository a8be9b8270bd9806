//! Zonecheck Geo - Point containment and zone location
//!
//! Ray-casting containment over validated zone geometry, plus the zone
//! locator and its nearby-zone bounding-box prefilter.

pub mod containment;
pub mod convert;
pub mod locator;

pub use containment::{geometry_contains, point_in_ring, polygon_contains};
pub use convert::{to_geo_geometry, to_geo_polygon};
pub use locator::{locate, nearby};
