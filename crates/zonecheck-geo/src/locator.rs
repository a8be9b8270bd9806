//! Zone locator.
//!
//! `locate` runs the exact containment test over the caller-supplied
//! candidates in order; `nearby` is a cheap equirectangular bounding-box
//! prefilter for callers that want to narrow a larger candidate list
//! before the exact test. The box is generous by construction: it may
//! return zones the exact test rejects, never the other way around.

use crate::containment::geometry_contains;
use crate::convert::to_geo_geometry;
use geo::algorithm::bounding_rect::BoundingRect;
use geo::{coord, Rect};
use zonecheck_core::models::{GeoPoint, Zone};

/// Meters per degree of latitude under the equirectangular approximation.
const METERS_PER_DEGREE: f64 = 111_000.0;

/// Find the first zone (in caller-supplied order) whose geometry contains
/// the point. Zones without geometry are skipped.
pub fn locate<'a>(point: &GeoPoint, candidates: &'a [Zone]) -> Option<&'a Zone> {
    let found = candidates.iter().find(|zone| {
        zone.geometry.as_ref().is_some_and(|geometry| geometry_contains(point, geometry))
    });

    match found {
        Some(zone) => tracing::debug!(zone_id = zone.id, "point resolved to zone"),
        None => tracing::debug!(lon = point.lon, lat = point.lat, "no zone contains point"),
    }

    found
}

/// Narrow candidates to zones whose bounding box falls within
/// `radius_m` meters of the point.
///
/// Longitude degrees are scaled by cos(latitude); the scale is clamped
/// away from zero so the search box widens near the poles instead of
/// inverting.
pub fn nearby<'a>(point: &GeoPoint, radius_m: f64, candidates: &'a [Zone]) -> Vec<&'a Zone> {
    let d_lat = radius_m / METERS_PER_DEGREE;
    let cos_lat = point.lat.to_radians().cos().abs().max(0.01);
    let d_lon = radius_m / (METERS_PER_DEGREE * cos_lat);

    let search = Rect::new(
        coord! { x: point.lon - d_lon, y: point.lat - d_lat },
        coord! { x: point.lon + d_lon, y: point.lat + d_lat },
    );

    candidates
        .iter()
        .filter(|zone| {
            zone.geometry.as_ref().is_some_and(|geometry| {
                to_geo_geometry(geometry)
                    .bounding_rect()
                    .is_some_and(|bbox| rects_intersect(&bbox, &search))
            })
        })
        .collect()
}

fn rects_intersect(a: &Rect<f64>, b: &Rect<f64>) -> bool {
    let x_overlap = a.min().x <= b.max().x && a.max().x >= b.min().x;
    let y_overlap = a.min().y <= b.max().y && a.max().y >= b.min().y;
    x_overlap && y_overlap
}
