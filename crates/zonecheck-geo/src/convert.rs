//! Conversion from zone geometry to computational `geo` crate types.

use geo::{Coord, LineString, MultiPolygon};
use zonecheck_core::models::{Geometry, Polygon, Ring};

fn to_line_string(ring: &Ring) -> LineString<f64> {
    let mut coords: Vec<Coord<f64>> =
        ring.points().iter().map(|p| Coord { x: p.lon, y: p.lat }).collect();
    // Rings are stored unclosed; geo expects closed LineStrings
    if let Some(first) = coords.first().copied() {
        coords.push(first);
    }
    LineString::new(coords)
}

/// Convert a polygon to a `geo::Polygon`.
pub fn to_geo_polygon(polygon: &Polygon) -> geo::Polygon<f64> {
    geo::Polygon::new(
        to_line_string(polygon.exterior()),
        polygon.holes().iter().map(to_line_string).collect(),
    )
}

/// Convert zone geometry to a `geo::Geometry`.
pub fn to_geo_geometry(geometry: &Geometry) -> geo::Geometry<f64> {
    match geometry {
        Geometry::Polygon(polygon) => geo::Geometry::Polygon(to_geo_polygon(polygon)),
        Geometry::MultiPolygon(polygons) => geo::Geometry::MultiPolygon(MultiPolygon(
            polygons.iter().map(to_geo_polygon).collect(),
        )),
    }
}
