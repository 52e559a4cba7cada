//! Region-of-interest handling.
//!
//! A region may arrive as a single polygon or as a collection of polygons
//! (e.g. an administrative boundary split across islands). Both forms are
//! normalized to one unioned multi-polygon at the API boundary so the rest
//! of the pipeline only ever sees a single geometry.

use geo::{BooleanOps, Geometry, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};
use wkt::TryFromWkt;

use crate::error::{GhslError, GhslResult};

/// A region of interest in geographic coordinates (EPSG:4326).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Region {
    /// One polygon.
    SinglePolygon(Polygon<f64>),
    /// A collection of polygons, treated as their union.
    PolygonCollection(MultiPolygon<f64>),
}

impl Region {
    /// Parse a region from a well-known-text string.
    ///
    /// Accepts `POLYGON` and `MULTIPOLYGON` geometries.
    pub fn from_wkt(s: &str) -> GhslResult<Self> {
        let geometry: Geometry<f64> =
            Geometry::try_from_wkt_str(s).map_err(|e| GhslError::InvalidWkt(e.to_string()))?;

        match geometry {
            Geometry::Polygon(p) => Ok(Region::SinglePolygon(p)),
            Geometry::MultiPolygon(mp) => Ok(Region::PolygonCollection(mp)),
            other => Err(GhslError::InvalidWkt(format!(
                "expected POLYGON or MULTIPOLYGON, got {}",
                geometry_kind(&other)
            ))),
        }
    }

    /// Normalize to a single unioned multi-polygon.
    ///
    /// Overlapping members of a collection are dissolved so downstream
    /// intersection and clip tests never double-count area.
    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        match self {
            Region::SinglePolygon(p) => MultiPolygon::new(vec![p.clone()]),
            Region::PolygonCollection(mp) => {
                let mut iter = mp.0.iter();
                let first = match iter.next() {
                    Some(p) => MultiPolygon::new(vec![p.clone()]),
                    None => return MultiPolygon::new(vec![]),
                };
                iter.fold(first, |acc, p| {
                    acc.union(&MultiPolygon::new(vec![p.clone()]))
                })
            }
        }
    }
}

impl From<Polygon<f64>> for Region {
    fn from(p: Polygon<f64>) -> Self {
        Region::SinglePolygon(p)
    }
}

impl From<MultiPolygon<f64>> for Region {
    fn from(mp: MultiPolygon<f64>) -> Self {
        Region::PolygonCollection(mp)
    }
}

fn geometry_kind(g: &Geometry<f64>) -> &'static str {
    match g {
        Geometry::Point(_) => "POINT",
        Geometry::Line(_) => "LINE",
        Geometry::LineString(_) => "LINESTRING",
        Geometry::Polygon(_) => "POLYGON",
        Geometry::MultiPoint(_) => "MULTIPOINT",
        Geometry::MultiLineString(_) => "MULTILINESTRING",
        Geometry::MultiPolygon(_) => "MULTIPOLYGON",
        Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        Geometry::Rect(_) => "RECT",
        Geometry::Triangle(_) => "TRIANGLE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, Area};

    #[test]
    fn test_from_wkt_polygon() {
        let region = Region::from_wkt(
            "POLYGON((-59.9 -33.83, -57.28 -33.83, -57.28 -35.25, -59.9 -35.25, -59.9 -33.83))",
        )
        .unwrap();
        assert!(matches!(region, Region::SinglePolygon(_)));
        let mp = region.to_multi_polygon();
        assert_eq!(mp.0.len(), 1);
    }

    #[test]
    fn test_from_wkt_rejects_points() {
        let err = Region::from_wkt("POINT(1 2)").unwrap_err();
        assert!(matches!(err, GhslError::InvalidWkt(_)));
    }

    #[test]
    fn test_collection_unions_overlapping_members() {
        let a: Polygon<f64> = polygon![
            (x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0), (x: 0.0, y: 0.0)
        ];
        let b: Polygon<f64> = polygon![
            (x: 1.0, y: 0.0), (x: 3.0, y: 0.0), (x: 3.0, y: 2.0), (x: 1.0, y: 2.0), (x: 1.0, y: 0.0)
        ];
        let region = Region::PolygonCollection(MultiPolygon::new(vec![a, b]));
        let unioned = region.to_multi_polygon();

        // 2x2 and 2x2 overlapping by 1x2: union area is 6, not 8.
        assert!((unioned.unsigned_area() - 6.0).abs() < 1e-9);
    }
}
