//! Acquisition pipeline: resolve a validated request into one consistent
//! multi-variable, time-stacked dataset.
//!
//! The [`Fetcher`] trait is the boundary to the outside world (network,
//! archive extraction); everything else here is deterministic orchestration
//! over the catalog, tile index and grid mosaic.

pub mod engine;
pub mod fetcher;
pub mod naming;

pub use engine::MosaicEngine;
pub use fetcher::Fetcher;
