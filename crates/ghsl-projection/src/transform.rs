//! Geometry reprojection helpers.
//!
//! Vertex-wise reprojection of polygon geometries between geographic and
//! Mollweide coordinates. GHSL regions are small relative to the projection
//! distortion scale, so edges are not densified before transforming.

use geo::{MapCoords, MapCoordsInPlace, MultiPolygon};
use ghsl_common::GhslResult;

use crate::Mollweide;

/// Reproject a geographic (EPSG:4326) geometry into Mollweide meters.
pub fn geometry_to_mollweide(geometry: &MultiPolygon<f64>) -> MultiPolygon<f64> {
    let proj = Mollweide::new();
    geometry.map_coords(|c| {
        let (x, y) = proj.forward(c.x, c.y);
        (x, y).into()
    })
}

/// Reproject a Mollweide geometry back to geographic coordinates.
///
/// Fails if any vertex falls outside the projection's valid extent, which
/// for grid-derived geometry indicates a corrupt transform upstream.
pub fn geometry_to_geographic(geometry: &MultiPolygon<f64>) -> GhslResult<MultiPolygon<f64>> {
    let proj = Mollweide::new();
    let mut out = geometry.clone();
    let failure = std::cell::RefCell::new(None);
    let failure_ref = &failure;
    out.map_coords_in_place(|c| match proj.inverse(c.x, c.y) {
        Ok((lon, lat)) => (lon, lat).into(),
        Err(e) => {
            let mut failure = failure_ref.borrow_mut();
            if failure.is_none() {
                *failure = Some(e);
            }
            c
        }
    });
    match failure.into_inner() {
        Some(e) => Err(e),
        None => Ok(out),
    }
}
