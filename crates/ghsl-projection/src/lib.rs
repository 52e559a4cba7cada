//! Coordinate reference system transformations for GHSL data.
//!
//! Implements the World Mollweide projection from scratch without external
//! dependencies. GHSL source rasters are distributed in Mollweide
//! (ESRI:54009); vector outputs are geographic (EPSG:4326).

pub mod mollweide;
pub mod transform;

pub use mollweide::Mollweide;
pub use transform::{geometry_to_geographic, geometry_to_mollweide};
