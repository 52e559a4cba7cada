//! Grid polygonization.
//!
//! Dissolves a 2-D slice into maximal same-value regions: adjacent cells
//! (4-connected, matching the usual raster polygonization convention)
//! holding an equal value merge into one polygon. NaN cells are holes and
//! belong to no region.

use geo::{polygon, BooleanOps, MultiPolygon, Polygon};
use ndarray::ArrayView2;

use ghsl_grid::GridGeometry;

/// A maximal same-value region in grid-native coordinates.
#[derive(Debug, Clone)]
pub struct ValueRegion {
    pub value: f64,
    pub geometry: MultiPolygon<f64>,
}

/// Polygonize one slice. Regions are emitted in row-major order of their
/// first cell, so output is deterministic.
pub fn polygonize(data: ArrayView2<'_, f64>, geometry: &GridGeometry) -> Vec<ValueRegion> {
    let (rows, cols) = data.dim();
    let mut visited = vec![false; rows * cols];
    let mut regions = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            if visited[row * cols + col] {
                continue;
            }
            let value = data[(row, col)];
            if value.is_nan() {
                visited[row * cols + col] = true;
                continue;
            }

            let cells = flood_fill(&data, &mut visited, (row, col), value);
            regions.push(ValueRegion {
                value,
                geometry: cells_to_geometry(&cells, geometry),
            });
        }
    }

    regions
}

/// Collect the 4-connected component of equal-valued cells around a seed.
fn flood_fill(
    data: &ArrayView2<'_, f64>,
    visited: &mut [bool],
    seed: (usize, usize),
    value: f64,
) -> Vec<(usize, usize)> {
    let (rows, cols) = data.dim();
    let mut stack = vec![seed];
    let mut cells = Vec::new();
    visited[seed.0 * cols + seed.1] = true;

    while let Some((row, col)) = stack.pop() {
        cells.push((row, col));

        // wrapping_sub turns row 0's "up" neighbor into an out-of-range
        // index, rejected by the bounds check below.
        let neighbors = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        for (r, c) in neighbors {
            if r < rows && c < cols && !visited[r * cols + c] && data[(r, c)] == value {
                visited[r * cols + c] = true;
                stack.push((r, c));
            }
        }
    }

    cells
}

/// Union the component's cells into one multi-polygon.
///
/// Consecutive cells in a row collapse into a single rectangle first, so
/// the boolean union runs over row runs rather than individual cells.
fn cells_to_geometry(cells: &[(usize, usize)], geometry: &GridGeometry) -> MultiPolygon<f64> {
    let mut sorted = cells.to_vec();
    sorted.sort_unstable();

    let mut runs: Vec<Polygon<f64>> = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let (row, col_start) = sorted[i];
        let mut col_end = col_start;
        while i + 1 < sorted.len() && sorted[i + 1] == (row, col_end + 1) {
            col_end += 1;
            i += 1;
        }
        i += 1;
        runs.push(run_rect(geometry, row, col_start, col_end));
    }

    let mut iter = runs.into_iter();
    let first = MultiPolygon::new(vec![iter.next().expect("component has at least one cell")]);
    iter.fold(first, |acc, rect| {
        acc.union(&MultiPolygon::new(vec![rect]))
    })
}

/// Rectangle covering cells [col_start..=col_end] of one row.
fn run_rect(geometry: &GridGeometry, row: usize, col_start: usize, col_end: usize) -> Polygon<f64> {
    let (x0, y0) = geometry.cell_corner(row, col_start);
    let (x1, y1) = geometry.cell_corner(row + 1, col_end + 1);
    polygon![
        (x: x0, y: y0),
        (x: x1, y: y0),
        (x: x1, y: y1),
        (x: x0, y: y1),
        (x: x0, y: y0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;
    use ndarray::array;
    use test_utils::mollweide_geometry;

    #[test]
    fn test_uniform_grid_is_one_region() {
        let geometry = mollweide_geometry(0.0, 200.0, 2, 2);
        let data = array![[5.0, 5.0], [5.0, 5.0]];
        let regions = polygonize(data.view(), &geometry);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].value, 5.0);
        // 2x2 cells of 100m: 200m x 200m.
        assert!((regions[0].geometry.unsigned_area() - 40_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_adjacent_equal_values_merge() {
        let geometry = mollweide_geometry(0.0, 300.0, 3, 3);
        let data = array![
            [1.0, 1.0, 2.0],
            [1.0, 2.0, 2.0],
            [3.0, 3.0, 2.0],
        ];
        let regions = polygonize(data.view(), &geometry);

        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0].value, 1.0);
        assert_eq!(regions[1].value, 2.0);
        assert_eq!(regions[2].value, 3.0);

        let cell = 100.0 * 100.0;
        assert!((regions[0].geometry.unsigned_area() - 3.0 * cell).abs() < 1e-6);
        assert!((regions[1].geometry.unsigned_area() - 4.0 * cell).abs() < 1e-6);
        assert!((regions[2].geometry.unsigned_area() - 2.0 * cell).abs() < 1e-6);
    }

    #[test]
    fn test_diagonal_cells_do_not_merge() {
        let geometry = mollweide_geometry(0.0, 200.0, 2, 2);
        let data = array![[1.0, 2.0], [2.0, 1.0]];
        let regions = polygonize(data.view(), &geometry);
        // 4-connected: the two diagonal 1-cells stay separate regions.
        assert_eq!(regions.len(), 4);
    }

    #[test]
    fn test_nan_cells_are_skipped() {
        let geometry = mollweide_geometry(0.0, 200.0, 2, 2);
        let data = array![[1.0, f64::NAN], [f64::NAN, f64::NAN]];
        let regions = polygonize(data.view(), &geometry);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].value, 1.0);
    }
}
