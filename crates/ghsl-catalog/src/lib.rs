//! Product catalog, classification tables and tile partition for GHSL data.
//!
//! Everything in this crate is static, bundled data: it is built once at
//! process start, never mutated, and shared read-only by all requests.

pub mod classification;
pub mod products;
pub mod tiles;

pub use classification::ClassificationTable;
pub use products::{ProductCatalog, ProductDefinition, ProductRequest, RequestSpec};
pub use tiles::{Tile, TileIndex};
