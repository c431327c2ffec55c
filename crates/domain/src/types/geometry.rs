//! Host geometry model
//!
//! Geometries follow the host's JSON encoding: a point is `{x, y}`, a
//! multipoint `{points}`, a polyline `{paths}`, a polygon `{rings}` and an
//! envelope `{xmin, ymin, xmax, ymax}`. Every shape may carry a
//! `spatialReference`. The platform stores non-point geometries in a text
//! field as `{"geometry": <geometry json>}`.

use serde::{Deserialize, Serialize};

use crate::constants::WGS84_WKID;

/// Coordinate system identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wkid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_wkid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wkt: Option<String>,
}

impl SpatialReference {
    #[must_use]
    pub const fn from_wkid(wkid: u32) -> Self {
        Self { wkid: Some(wkid), latest_wkid: None, wkt: None }
    }

    /// The fixed reference used for latitude/longitude storage.
    #[must_use]
    pub const fn wgs84() -> Self {
        Self::from_wkid(WGS84_WKID)
    }

    #[must_use]
    pub fn is_wgs84(&self) -> bool {
        self.wkid == Some(WGS84_WKID) || self.latest_wkid == Some(WGS84_WKID)
    }
}

/// Single position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_reference: Option<SpatialReference>,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64, spatial_reference: Option<SpatialReference>) -> Self {
        Self { x, y, z: None, m: None, spatial_reference }
    }
}

/// Set of positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Multipoint {
    pub points: Vec<Vec<f64>>,
    #[serde(rename = "hasZ", default, skip_serializing_if = "Option::is_none")]
    pub has_z: Option<bool>,
    #[serde(rename = "hasM", default, skip_serializing_if = "Option::is_none")]
    pub has_m: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_reference: Option<SpatialReference>,
}

/// One or more paths of positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polyline {
    pub paths: Vec<Vec<Vec<f64>>>,
    #[serde(rename = "hasZ", default, skip_serializing_if = "Option::is_none")]
    pub has_z: Option<bool>,
    #[serde(rename = "hasM", default, skip_serializing_if = "Option::is_none")]
    pub has_m: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_reference: Option<SpatialReference>,
}

/// One or more closed rings of positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    pub rings: Vec<Vec<Vec<f64>>>,
    #[serde(rename = "hasZ", default, skip_serializing_if = "Option::is_none")]
    pub has_z: Option<bool>,
    #[serde(rename = "hasM", default, skip_serializing_if = "Option::is_none")]
    pub has_m: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_reference: Option<SpatialReference>,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_reference: Option<SpatialReference>,
}

/// Geometry shape discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    Multipoint,
    Polyline,
    Polygon,
    Envelope,
}

/// Any host geometry. The JSON encoding carries no type tag, so the shape is
/// recognised by its members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Geometry {
    Point(Point),
    Multipoint(Multipoint),
    Polyline(Polyline),
    Polygon(Polygon),
    Envelope(Envelope),
}

impl Geometry {
    #[must_use]
    pub const fn kind(&self) -> GeometryKind {
        match self {
            Self::Point(_) => GeometryKind::Point,
            Self::Multipoint(_) => GeometryKind::Multipoint,
            Self::Polyline(_) => GeometryKind::Polyline,
            Self::Polygon(_) => GeometryKind::Polygon,
            Self::Envelope(_) => GeometryKind::Envelope,
        }
    }

    #[must_use]
    pub const fn spatial_reference(&self) -> Option<&SpatialReference> {
        match self {
            Self::Point(g) => g.spatial_reference.as_ref(),
            Self::Multipoint(g) => g.spatial_reference.as_ref(),
            Self::Polyline(g) => g.spatial_reference.as_ref(),
            Self::Polygon(g) => g.spatial_reference.as_ref(),
            Self::Envelope(g) => g.spatial_reference.as_ref(),
        }
    }

    /// Replace the declared spatial reference without touching coordinates.
    pub fn set_spatial_reference(&mut self, spatial_reference: SpatialReference) {
        let slot = match self {
            Self::Point(g) => &mut g.spatial_reference,
            Self::Multipoint(g) => &mut g.spatial_reference,
            Self::Polyline(g) => &mut g.spatial_reference,
            Self::Polygon(g) => &mut g.spatial_reference,
            Self::Envelope(g) => &mut g.spatial_reference,
        };
        *slot = Some(spatial_reference);
    }

    #[must_use]
    pub const fn as_point(&self) -> Option<&Point> {
        match self {
            Self::Point(point) => Some(point),
            _ => None,
        }
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

/// Envelope stored in a platform geometry field: `{"geometry": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedGeometry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}
