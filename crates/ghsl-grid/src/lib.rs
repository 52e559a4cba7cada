//! Raster grid and dataset types for GHSL processing.
//!
//! A [`RasterGrid`] is one 2-D variable slice with an affine pixel
//! transform, CRS tag and a single no-data sentinel. A [`Dataset`] is the
//! merged, analysis-ready product: named variables stacked along a shared
//! time axis over one shared spatial geometry.

pub mod dataset;
pub mod geometry;
pub mod mosaic;
pub mod raster;

pub use dataset::{DataVariable, Dataset};
pub use geometry::GridGeometry;
pub use mosaic::merge_tiles;
pub use raster::RasterGrid;
