//! Spatial mosaic of tile grids.

use ndarray::Array2;
use tracing::debug;

use ghsl_common::{GhslError, GhslResult};

use crate::geometry::GridGeometry;
use crate::raster::RasterGrid;

/// Merge tile grids into one grid covering their union extent.
///
/// Preconditions, enforced here:
/// - at least one tile;
/// - every tile carries an identical no-data sentinel; a mismatch is a
///   data-integrity defect and fails hard, it is never reconciled;
/// - all tiles share CRS and pixel size and sit on one pixel lattice.
///
/// A cell is written only where the mosaic still holds the sentinel, so
/// the merge is commutative over tile order.
pub fn merge_tiles(tiles: &[RasterGrid]) -> GhslResult<RasterGrid> {
    let first = tiles.first().ok_or_else(|| {
        GhslError::GridMismatch("cannot merge an empty tile set".to_string())
    })?;

    for tile in &tiles[1..] {
        if tile.nodata != first.nodata {
            return Err(GhslError::InconsistentNoDataValue {
                expected: first.nodata,
                found: tile.nodata,
            });
        }
    }

    // Union extent, anchored on the north-west-most tile origin.
    let origin_x = tiles
        .iter()
        .map(|t| t.geometry.origin_x)
        .fold(f64::INFINITY, f64::min);
    let origin_y = tiles
        .iter()
        .map(|t| t.geometry.origin_y)
        .fold(f64::NEG_INFINITY, f64::max);

    let anchor = GridGeometry::new(
        first.geometry.crs,
        origin_x,
        origin_y,
        first.geometry.pixel_w,
        first.geometry.pixel_h,
        0,
        0,
    );

    let mut width = 0usize;
    let mut height = 0usize;
    let mut offsets = Vec::with_capacity(tiles.len());
    for tile in tiles {
        let (row_off, col_off) = anchor.lattice_offset(&tile.geometry)?;
        // Offsets are non-negative by choice of anchor.
        let (row_off, col_off) = (row_off as usize, col_off as usize);
        height = height.max(row_off + tile.geometry.height);
        width = width.max(col_off + tile.geometry.width);
        offsets.push((row_off, col_off));
    }

    let geometry = GridGeometry::new(
        first.geometry.crs,
        origin_x,
        origin_y,
        first.geometry.pixel_w,
        first.geometry.pixel_h,
        width,
        height,
    );

    debug!(
        tiles = tiles.len(),
        width, height, "merging tiles into mosaic"
    );

    let mut data = Array2::from_elem((height, width), first.nodata);
    for (tile, (row_off, col_off)) in tiles.iter().zip(offsets) {
        for row in 0..tile.geometry.height {
            for col in 0..tile.geometry.width {
                let target = &mut data[(row_off + row, col_off + col)];
                if *target == first.nodata {
                    *target = tile.data[(row, col)];
                }
            }
        }
    }

    Ok(RasterGrid::new(
        first.name.clone(),
        geometry,
        first.nodata,
        data,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghsl_common::Crs;
    use ndarray::array;

    fn tile(origin_x: f64, origin_y: f64, nodata: f64, data: Array2<f64>) -> RasterGrid {
        let geometry = GridGeometry::new(
            Crs::Mollweide,
            origin_x,
            origin_y,
            100.0,
            -100.0,
            data.ncols(),
            data.nrows(),
        );
        RasterGrid::new("GHS_POP", geometry, nodata, data)
    }

    #[test]
    fn test_merge_side_by_side() {
        let left = tile(0.0, 200.0, -200.0, array![[1.0, 2.0], [3.0, 4.0]]);
        let right = tile(200.0, 200.0, -200.0, array![[5.0, 6.0], [7.0, 8.0]]);

        let merged = merge_tiles(&[left, right]).unwrap();
        assert_eq!(merged.geometry.width, 4);
        assert_eq!(merged.geometry.height, 2);
        assert_eq!(
            merged.data,
            array![[1.0, 2.0, 5.0, 6.0], [3.0, 4.0, 7.0, 8.0]]
        );
    }

    #[test]
    fn test_merge_is_commutative_over_tile_order() {
        let a = tile(0.0, 200.0, -200.0, array![[1.0, 2.0], [3.0, 4.0]]);
        let b = tile(200.0, 200.0, -200.0, array![[5.0, 6.0], [7.0, 8.0]]);

        let ab = merge_tiles(&[a.clone(), b.clone()]).unwrap();
        let ba = merge_tiles(&[b, a]).unwrap();
        assert_eq!(ab.data, ba.data);
        assert_eq!(ab.geometry, ba.geometry);
    }

    #[test]
    fn test_merge_fills_uncovered_area_with_sentinel() {
        // Diagonal tiles leave two uncovered corners.
        let nw = tile(0.0, 400.0, -200.0, array![[1.0, 1.0], [1.0, 1.0]]);
        let se = tile(200.0, 200.0, -200.0, array![[2.0, 2.0], [2.0, 2.0]]);

        let merged = merge_tiles(&[nw, se]).unwrap();
        assert_eq!(merged.geometry.width, 4);
        assert_eq!(merged.geometry.height, 4);
        assert_eq!(merged.data[(0, 0)], 1.0);
        assert_eq!(merged.data[(2, 2)], 2.0);
        assert_eq!(merged.data[(0, 2)], -200.0);
        assert_eq!(merged.data[(2, 0)], -200.0);
    }

    #[test]
    fn test_differing_sentinels_fail_hard() {
        let a = tile(0.0, 200.0, -200.0, array![[1.0, 2.0], [3.0, 4.0]]);
        let b = tile(200.0, 200.0, 65535.0, array![[5.0, 6.0], [7.0, 8.0]]);

        let err = merge_tiles(&[a, b]).unwrap_err();
        assert!(matches!(
            err,
            GhslError::InconsistentNoDataValue {
                expected,
                found,
            } if expected == -200.0 && found == 65535.0
        ));
    }

    #[test]
    fn test_identical_sentinels_succeed() {
        let a = tile(0.0, 200.0, -200.0, array![[1.0, 2.0], [3.0, 4.0]]);
        let b = tile(200.0, 200.0, -200.0, array![[5.0, 6.0], [7.0, 8.0]]);
        assert!(merge_tiles(&[a, b]).is_ok());
    }
}
