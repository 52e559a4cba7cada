//! Bounding box types and operations.

use geo::{BoundingRect, MultiPolygon};
use serde::{Deserialize, Serialize};

/// A geographic or projected bounding box.
///
/// For the geographic CRS coordinates are in degrees; for World Mollweide
/// they are in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounding box of a multi-polygon, or `None` for an empty geometry.
    pub fn of_geometry(geometry: &MultiPolygon<f64>) -> Option<Self> {
        geometry.bounding_rect().map(|rect| Self {
            min_x: rect.min().x,
            min_y: rect.min().y,
            max_x: rect.max().x,
            max_y: rect.max().y,
        })
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if this bbox intersects another.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Compute the intersection of two bounding boxes.
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        if !self.intersects(other) {
            return None;
        }

        Some(BoundingBox {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        })
    }

    /// Check if a point is contained within this bbox.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    #[test]
    fn test_intersection() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);

        let i = a.intersection(&b).unwrap();
        assert_eq!(i.min_x, 5.0);
        assert_eq!(i.min_y, 5.0);
        assert_eq!(i.max_x, 10.0);
        assert_eq!(i.max_y, 10.0);
    }

    #[test]
    fn test_disjoint_boxes() {
        let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let b = BoundingBox::new(2.0, 2.0, 3.0, 3.0);
        assert!(!a.intersects(&b));
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_of_geometry() {
        let poly = polygon![
            (x: -58.5, y: -34.7),
            (x: -58.3, y: -34.7),
            (x: -58.3, y: -34.5),
            (x: -58.5, y: -34.5),
            (x: -58.5, y: -34.7),
        ];
        let bbox = BoundingBox::of_geometry(&MultiPolygon::new(vec![poly])).unwrap();
        assert_eq!(bbox.min_x, -58.5);
        assert_eq!(bbox.max_y, -34.5);
    }
}
