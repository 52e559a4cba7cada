//! Region fixtures.

use geo::{polygon, MultiPolygon, Polygon};

/// Axis-aligned rectangle polygon.
pub fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Polygon<f64> {
    polygon![
        (x: min_x, y: min_y),
        (x: max_x, y: min_y),
        (x: max_x, y: max_y),
        (x: min_x, y: max_y),
        (x: min_x, y: min_y),
    ]
}

/// Rectangle wrapped as a multi-polygon.
pub fn rect_multi(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![rect(min_x, min_y, max_x, max_y)])
}

/// A small geographic region strictly inside one tile of the global
/// partition (tile R13_C13, around Buenos Aires).
pub fn buenos_aires_region() -> Polygon<f64> {
    rect(-58.6, -34.8, -58.2, -34.4)
}

/// A geographic region straddling the 60W meridian, i.e. two adjacent
/// tiles (R13_C12 and R13_C13).
pub fn two_tile_region() -> Polygon<f64> {
    rect(-60.5, -34.8, -59.5, -34.4)
}
