//! Vector layers derived from grid datasets.
//!
//! Converts a (possibly time-stacked) dataset into polygon layers with
//! value/date/classification attributes, computes the year-by-year
//! urbanization frontier, and exports layers as WKT-in-CSV or GeoJSON.

pub mod export;
pub mod layer;
pub mod polygonize;
pub mod transition;
pub mod vectorize;

pub use layer::{AttributeValue, Feature, FeatureRecord, VectorLayer};
pub use transition::{transition, TransitionLayer, TransitionStep};
pub use vectorize::vectorize;
