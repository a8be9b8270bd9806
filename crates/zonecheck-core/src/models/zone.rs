//! Zone snapshot records.

use crate::models::geometry::Geometry;
use serde::{Deserialize, Serialize};

/// Unique identifier for a zone. Identity is owned by the surrounding
/// record-management system.
pub type ZoneId = i64;

/// Immutable snapshot of a zoning area, supplied per request.
///
/// The engine never persists or mutates a zone; the surrounding system
/// owns the full lifecycle and hands the engine read-only snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    /// Classification code, e.g. "R-1" or "C2". None if unclassified.
    pub classification: Option<String>,
    /// Boundary geometry. None if unmapped or the source record carried
    /// malformed geometry.
    pub geometry: Option<Geometry>,
    pub active: bool,
}

impl Zone {
    pub fn new(id: ZoneId, classification: Option<String>, geometry: Option<Geometry>) -> Self {
        Self { id, classification, geometry, active: true }
    }

    /// Build a zone from a raw record with GeoJSON geometry.
    ///
    /// Malformed geometry (missing type tag, empty or degenerate rings)
    /// is dropped with a warning; the zone itself is kept so that
    /// rule lookups by classification still work.
    pub fn from_record(
        id: ZoneId,
        classification: Option<String>,
        geometry: Option<&serde_json::Value>,
        active: bool,
    ) -> Self {
        let geometry = geometry.and_then(|value| {
            let parsed = Geometry::from_geojson(value);
            if parsed.is_none() {
                tracing::warn!(zone_id = id, "skipping malformed zone geometry");
            }
            parsed
        });

        Self { id, classification, geometry, active }
    }
}
