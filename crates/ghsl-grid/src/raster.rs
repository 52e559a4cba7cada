//! A single raster variable slice.

use geo::{Contains, MultiPolygon, Point};
use ndarray::Array2;

use ghsl_common::{BoundingBox, GhslError, GhslResult};

use crate::geometry::GridGeometry;

/// One 2-D raster: data, geometry and a single no-data sentinel.
#[derive(Debug, Clone)]
pub struct RasterGrid {
    /// Variable name, e.g. "GHS_POP"
    pub name: String,
    pub geometry: GridGeometry,
    /// No-data sentinel as stored in the source archive
    pub nodata: f64,
    /// Row-major (row, col) values
    pub data: Array2<f64>,
}

impl RasterGrid {
    pub fn new(name: impl Into<String>, geometry: GridGeometry, nodata: f64, data: Array2<f64>) -> Self {
        debug_assert_eq!(data.nrows(), geometry.height);
        debug_assert_eq!(data.ncols(), geometry.width);
        Self {
            name: name.into(),
            geometry,
            nodata,
            data,
        }
    }

    /// A grid filled entirely with the sentinel value.
    pub fn filled(name: impl Into<String>, geometry: GridGeometry, nodata: f64) -> Self {
        let data = Array2::from_elem((geometry.height, geometry.width), nodata);
        Self::new(name, geometry, nodata, data)
    }

    /// Clip to a region in this grid's native CRS.
    ///
    /// Crops to the intersection of the grid extent and the region's
    /// bounding box, then forces cells whose centers fall outside the
    /// region to the sentinel. Fails when grid and region do not overlap.
    pub fn clip(&self, region: &MultiPolygon<f64>) -> GhslResult<RasterGrid> {
        let region_bbox = BoundingBox::of_geometry(region).ok_or_else(|| {
            GhslError::GridMismatch("clip region has no extent".to_string())
        })?;
        let window = self.geometry.bbox().intersection(&region_bbox).ok_or_else(|| {
            GhslError::GridMismatch("clip region does not overlap grid".to_string())
        })?;

        let g = &self.geometry;
        // Cell ranges covering the window, clamped to the grid.
        let col_min = (((window.min_x - g.origin_x) / g.pixel_w).floor().max(0.0)) as usize;
        let col_max = ((((window.max_x - g.origin_x) / g.pixel_w).ceil()) as usize).min(g.width);
        // pixel_h is negative: max_y maps to the smaller row index.
        let row_min = (((window.max_y - g.origin_y) / g.pixel_h).floor().max(0.0)) as usize;
        let row_max = ((((window.min_y - g.origin_y) / g.pixel_h).ceil()) as usize).min(g.height);

        if col_min >= col_max || row_min >= row_max {
            return Err(GhslError::GridMismatch(
                "clip region does not overlap grid".to_string(),
            ));
        }

        let height = row_max - row_min;
        let width = col_max - col_min;
        let (corner_x, corner_y) = g.cell_corner(row_min, col_min);
        let geometry = GridGeometry::new(
            g.crs, corner_x, corner_y, g.pixel_w, g.pixel_h, width, height,
        );

        let mut data = Array2::from_elem((height, width), self.nodata);
        for row in 0..height {
            for col in 0..width {
                let (cx, cy) = geometry.cell_center(row, col);
                if region.contains(&Point::new(cx, cy)) {
                    data[(row, col)] = self.data[(row_min + row, col_min + col)];
                }
            }
        }

        Ok(RasterGrid::new(
            self.name.clone(),
            geometry,
            self.nodata,
            data,
        ))
    }

    /// Replace sentinel cells with NaN ("no value").
    pub fn mask_nodata(&mut self) {
        let nodata = self.nodata;
        self.data.mapv_inplace(|v| if v == nodata { f64::NAN } else { v });
    }
}
