//! Common types and utilities shared across all ghsl-rs crates.

pub mod bbox;
pub mod crs;
pub mod error;
pub mod region;
pub mod time;

pub use bbox::BoundingBox;
pub use crs::Crs;
pub use error::{GhslError, GhslResult};
pub use region::Region;
pub use time::epoch_date;
