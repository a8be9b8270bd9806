//! Even-odd ray-casting containment.
//!
//! A conceptual horizontal ray is cast from the test point towards +∞ in
//! longitude; each edge crossing toggles an inside flag. The straddle
//! test uses strict `>` on both vertices, so an edge lying exactly at the
//! test latitude never straddles it and the crossing division cannot hit
//! zero. Points exactly on a boundary get whatever the formula yields;
//! no inclusive/exclusive guarantee is made.

use zonecheck_core::models::{GeoPoint, Geometry, Polygon, Ring};

/// Even-odd test of a point against a single ring.
pub fn point_in_ring(point: &GeoPoint, ring: &Ring) -> bool {
    let vertices = ring.points();
    let mut inside = false;

    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];

        if (a.lat > point.lat) != (b.lat > point.lat) {
            let crossing_lon = (b.lon - a.lon) * (point.lat - a.lat) / (b.lat - a.lat) + a.lon;
            if point.lon < crossing_lon {
                inside = !inside;
            }
        }

        j = i;
    }

    inside
}

/// Point inside the exterior ring and not inside any hole.
pub fn polygon_contains(point: &GeoPoint, polygon: &Polygon) -> bool {
    point_in_ring(point, polygon.exterior())
        && !polygon.holes().iter().any(|hole| point_in_ring(point, hole))
}

/// Point inside any member polygon.
pub fn geometry_contains(point: &GeoPoint, geometry: &Geometry) -> bool {
    geometry.polygons().any(|polygon| polygon_contains(point, polygon))
}
