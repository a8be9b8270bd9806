//! Zone boundary geometry.
//!
//! These types follow the GeoJSON Polygon/MultiPolygon shape conventions
//! (`[ring][vertex][lon, lat]`, ring 0 = exterior, subsequent rings =
//! holes) for serialization, but reject degenerate input at construction
//! time: a ring with fewer than 3 vertices or a non-finite coordinate
//! never makes it into a `Geometry`.

use crate::error::{Result, ZonecheckError};
use serde::{Deserialize, Serialize};

/// A geographic point in decimal degrees.
///
/// No unit or datum conversion is performed; the caller's coordinate
/// system is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from(coords: [f64; 2]) -> Self {
        Self::new(coords[0], coords[1])
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lon, point.lat]
    }
}

/// An ordered vertex loop, stored unclosed.
///
/// GeoJSON repeats the first vertex at the end of each ring; `Ring::new`
/// strips that duplicate, and the containment algorithm closes the loop
/// implicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring(Vec<GeoPoint>);

impl Ring {
    pub fn new(mut points: Vec<GeoPoint>) -> Result<Self> {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        if points.len() < 3 {
            return Err(ZonecheckError::InvalidGeometry {
                reason: format!("ring must have at least 3 vertices, found {}", points.len()),
            });
        }

        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            return Err(ZonecheckError::InvalidGeometry {
                reason: format!("ring vertex ({}, {}) is not finite", p.lon, p.lat),
            });
        }

        Ok(Self(points))
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One exterior ring plus zero or more holes.
///
/// Holes are trusted to lie inside the exterior ring; the containment
/// test does not verify this.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Ring,
    holes: Vec<Ring>,
}

impl Polygon {
    pub fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
        Self { exterior, holes }
    }

    /// Build a polygon from GeoJSON-style nested rings (ring 0 is the
    /// exterior, the rest are holes).
    pub fn from_rings(rings: Vec<Vec<[f64; 2]>>) -> Result<Self> {
        let mut iter = rings.into_iter();

        let exterior = match iter.next() {
            Some(ring) => Ring::new(ring.into_iter().map(GeoPoint::from).collect())?,
            None => {
                return Err(ZonecheckError::InvalidGeometry {
                    reason: "polygon has no rings".to_string(),
                })
            }
        };

        let holes = iter
            .map(|ring| Ring::new(ring.into_iter().map(GeoPoint::from).collect()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { exterior, holes })
    }

    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }
}

/// Zone boundary geometry: a single polygon or a non-empty multi-polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeometry", into = "RawGeometry")]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// Create a Polygon geometry from nested rings.
    pub fn polygon(rings: Vec<Vec<[f64; 2]>>) -> Result<Self> {
        Ok(Geometry::Polygon(Polygon::from_rings(rings)?))
    }

    /// Create a MultiPolygon geometry from nested polygons.
    pub fn multi_polygon(polygons: Vec<Vec<Vec<[f64; 2]>>>) -> Result<Self> {
        if polygons.is_empty() {
            return Err(ZonecheckError::InvalidGeometry {
                reason: "multi-polygon has no members".to_string(),
            });
        }

        let members = polygons
            .into_iter()
            .map(Polygon::from_rings)
            .collect::<Result<Vec<_>>>()?;

        Ok(Geometry::MultiPolygon(members))
    }

    /// Iterate over the member polygons (one for the Polygon variant).
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        match self {
            Geometry::Polygon(polygon) => std::slice::from_ref(polygon).iter(),
            Geometry::MultiPolygon(polygons) => polygons.iter(),
        }
    }

    /// Try to parse from a serde_json::Value (GeoJSON).
    ///
    /// This is the explicit "skip malformed geometry" boundary: a missing
    /// type tag, empty coordinate arrays, or degenerate rings all yield
    /// `None`, never an error.
    pub fn from_geojson(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    /// Convert to serde_json::Value (GeoJSON).
    pub fn to_geojson(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// GeoJSON wire shape. Rings are closed on output (first vertex repeated)
/// and validated on input.
#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<[f64; 2]>>> },
}

impl TryFrom<RawGeometry> for Geometry {
    type Error = ZonecheckError;

    fn try_from(raw: RawGeometry) -> Result<Self> {
        match raw {
            RawGeometry::Polygon { coordinates } => Geometry::polygon(coordinates),
            RawGeometry::MultiPolygon { coordinates } => Geometry::multi_polygon(coordinates),
        }
    }
}

impl From<Geometry> for RawGeometry {
    fn from(geometry: Geometry) -> Self {
        fn close(ring: &Ring) -> Vec<[f64; 2]> {
            let mut coords: Vec<[f64; 2]> = ring.points().iter().copied().map(Into::into).collect();
            if let Some(first) = coords.first().copied() {
                coords.push(first);
            }
            coords
        }

        fn rings(polygon: &Polygon) -> Vec<Vec<[f64; 2]>> {
            std::iter::once(close(polygon.exterior()))
                .chain(polygon.holes().iter().map(close))
                .collect()
        }

        match geometry {
            Geometry::Polygon(polygon) => RawGeometry::Polygon { coordinates: rings(&polygon) },
            Geometry::MultiPolygon(polygons) => RawGeometry::MultiPolygon {
                coordinates: polygons.iter().map(rings).collect(),
            },
        }
    }
}
