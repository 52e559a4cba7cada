//! Synthetic raster generators.

use ghsl_common::Crs;
use ghsl_grid::{GridGeometry, RasterGrid};
use ndarray::Array2;

/// Sentinel used by the synthetic grids, matching the GHSL float products.
pub const TEST_NODATA: f64 = -200.0;

/// A Mollweide grid geometry with 100m pixels, origin at the given
/// north-west corner.
pub fn mollweide_geometry(origin_x: f64, origin_y: f64, width: usize, height: usize) -> GridGeometry {
    GridGeometry::new(Crs::Mollweide, origin_x, origin_y, 100.0, -100.0, width, height)
}

/// A grid where every cell holds `col * 1000 + row`.
///
/// Makes blit/crop assertions self-describing: `grid[(row, col)]`
/// must equal `col * 1000 + row`.
pub fn indexed_grid(name: &str, geometry: GridGeometry) -> RasterGrid {
    let data = Array2::from_shape_fn((geometry.height, geometry.width), |(row, col)| {
        (col * 1000 + row) as f64
    });
    RasterGrid::new(name, geometry, TEST_NODATA, data)
}

/// A grid filled with one constant value.
pub fn constant_grid(name: &str, geometry: GridGeometry, value: f64) -> RasterGrid {
    let data = Array2::from_elem((geometry.height, geometry.width), value);
    RasterGrid::new(name, geometry, TEST_NODATA, data)
}

/// A zero grid with a constant-valued rectangular block.
///
/// `block` is `(row, col, height, width)` in cell indices.
pub fn block_grid(
    name: &str,
    geometry: GridGeometry,
    block: (usize, usize, usize, usize),
    value: f64,
) -> RasterGrid {
    let (row0, col0, h, w) = block;
    let data = Array2::from_shape_fn((geometry.height, geometry.width), |(row, col)| {
        if row >= row0 && row < row0 + h && col >= col0 && col < col0 + w {
            value
        } else {
            0.0
        }
    });
    RasterGrid::new(name, geometry, TEST_NODATA, data)
}
