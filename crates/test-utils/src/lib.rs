//! Shared test utilities for the ghsl-rs workspace.
//!
//! Provides synthetic raster and region generators used across the crate
//! test suites. Values are predictable so assertions can spell out the
//! expected cell contents.

pub mod generators;
pub mod regions;

pub use generators::*;
pub use regions::*;
