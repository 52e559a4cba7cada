//! Urbanization metrics over raster arrays.
//!
//! Elementwise transforms (densities, change rates, binary flags) and the
//! monocentric/polycentric pattern classifier. All functions operate on
//! plain `ndarray` arrays; callers slice them out of a dataset.

pub mod distance;
pub mod pattern;
pub mod pixelwise;

pub use distance::euclidean_distance;
pub use pattern::{classify, urban_fringe};
