//! Affine grid geometry.

use ghsl_common::{BoundingBox, Crs, GhslError, GhslResult};

/// Pixel-to-coordinate mapping for a north-up raster.
///
/// `origin_x`/`origin_y` is the outer corner of the top-left pixel;
/// `pixel_w` is positive, `pixel_h` negative (rows run north to south).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub crs: Crs,
    pub origin_x: f64,
    pub origin_y: f64,
    pub pixel_w: f64,
    pub pixel_h: f64,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl GridGeometry {
    pub fn new(
        crs: Crs,
        origin_x: f64,
        origin_y: f64,
        pixel_w: f64,
        pixel_h: f64,
        width: usize,
        height: usize,
    ) -> Self {
        Self {
            crs,
            origin_x,
            origin_y,
            pixel_w,
            pixel_h,
            width,
            height,
        }
    }

    /// Coordinate of a cell center.
    pub fn cell_center(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.origin_x + (col as f64 + 0.5) * self.pixel_w,
            self.origin_y + (row as f64 + 0.5) * self.pixel_h,
        )
    }

    /// Outer corner of a cell (its top-left in grid order).
    pub fn cell_corner(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.origin_x + col as f64 * self.pixel_w,
            self.origin_y + row as f64 * self.pixel_h,
        )
    }

    /// Cell containing a coordinate, or `None` when outside the grid.
    pub fn coord_to_cell(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let col = ((x - self.origin_x) / self.pixel_w).floor() as isize;
        let row = ((y - self.origin_y) / self.pixel_h).floor() as isize;
        if col < 0 || row < 0 || col >= self.width as isize || row >= self.height as isize {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Full extent of the grid.
    pub fn bbox(&self) -> BoundingBox {
        let end_x = self.origin_x + self.width as f64 * self.pixel_w;
        let end_y = self.origin_y + self.height as f64 * self.pixel_h;
        BoundingBox::new(
            self.origin_x.min(end_x),
            self.origin_y.min(end_y),
            self.origin_x.max(end_x),
            self.origin_y.max(end_y),
        )
    }

    /// Integer (row, col) offset of `other`'s origin within this grid's
    /// pixel lattice.
    ///
    /// Fails unless both grids share CRS and pixel size and their origins
    /// are congruent on the lattice; mosaic merging requires all of these.
    pub fn lattice_offset(&self, other: &GridGeometry) -> GhslResult<(isize, isize)> {
        if self.crs != other.crs {
            return Err(GhslError::GridMismatch(format!(
                "CRS differs: {} vs {}",
                self.crs, other.crs
            )));
        }
        if (self.pixel_w - other.pixel_w).abs() > 1e-9 * self.pixel_w.abs()
            || (self.pixel_h - other.pixel_h).abs() > 1e-9 * self.pixel_h.abs()
        {
            return Err(GhslError::GridMismatch(format!(
                "pixel size differs: ({}, {}) vs ({}, {})",
                self.pixel_w, self.pixel_h, other.pixel_w, other.pixel_h
            )));
        }

        let col_f = (other.origin_x - self.origin_x) / self.pixel_w;
        let row_f = (other.origin_y - self.origin_y) / self.pixel_h;
        let col = col_f.round();
        let row = row_f.round();
        if (col_f - col).abs() > 1e-6 || (row_f - row).abs() > 1e-6 {
            return Err(GhslError::GridMismatch(
                "grid origins are not aligned on a common lattice".to_string(),
            ));
        }
        Ok((row as isize, col as isize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom() -> GridGeometry {
        GridGeometry::new(Crs::Mollweide, 1000.0, 2000.0, 100.0, -100.0, 10, 5)
    }

    #[test]
    fn test_cell_center() {
        let g = geom();
        let (x, y) = g.cell_center(0, 0);
        assert_eq!(x, 1050.0);
        assert_eq!(y, 1950.0);
    }

    #[test]
    fn test_coord_to_cell_roundtrip() {
        let g = geom();
        for row in 0..g.height {
            for col in 0..g.width {
                let (x, y) = g.cell_center(row, col);
                assert_eq!(g.coord_to_cell(x, y), Some((row, col)));
            }
        }
        assert_eq!(g.coord_to_cell(0.0, 0.0), None);
    }

    #[test]
    fn test_bbox() {
        let g = geom();
        let bbox = g.bbox();
        assert_eq!(bbox.min_x, 1000.0);
        assert_eq!(bbox.max_x, 2000.0);
        assert_eq!(bbox.min_y, 1500.0);
        assert_eq!(bbox.max_y, 2000.0);
    }

    #[test]
    fn test_lattice_offset() {
        let a = geom();
        let b = GridGeometry::new(Crs::Mollweide, 1300.0, 1800.0, 100.0, -100.0, 4, 2);
        assert_eq!(a.lattice_offset(&b).unwrap(), (2, 3));
    }

    #[test]
    fn test_lattice_offset_rejects_misaligned() {
        let a = geom();
        let b = GridGeometry::new(Crs::Mollweide, 1350.0, 1800.0, 100.0, -100.0, 4, 2);
        assert!(a.lattice_offset(&b).is_err());
    }

    #[test]
    fn test_lattice_offset_rejects_crs_mismatch() {
        let a = geom();
        let b = GridGeometry::new(Crs::Geographic, 1300.0, 1800.0, 100.0, -100.0, 4, 2);
        assert!(a.lattice_offset(&b).is_err());
    }
}
