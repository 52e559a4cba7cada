//! Error types for ghsl-rs operations.

use thiserror::Error;

/// Result type alias using GhslError.
pub type GhslResult<T> = Result<T, GhslError>;

/// Primary error type for GHSL acquisition and processing operations.
#[derive(Debug, Error)]
pub enum GhslError {
    // === Request validation errors (fail before any I/O) ===
    #[error("Product '{product}' not supported. Available products: {available}")]
    UnknownProduct { product: String, available: String },

    #[error("Epoch {epoch} not available for {product}. Available epochs: {available}")]
    InvalidEpoch {
        product: String,
        epoch: i32,
        available: String,
    },

    #[error("Resolution '{resolution}' not available for {product}. Available resolutions: {available}")]
    InvalidResolution {
        product: String,
        resolution: String,
        available: String,
    },

    #[error("Classification '{classification}' not available for {product}. Available classifications: {available}")]
    InvalidClassification {
        product: String,
        classification: String,
        available: String,
    },

    #[error("Product {product} does not support classifications (got '{classification}')")]
    UnsupportedClassification {
        product: String,
        classification: String,
    },

    // === Region / availability errors (fail after attempted I/O) ===
    #[error("The provided region does not intersect with any tiles")]
    NoIntersectingTiles,

    #[error("No data available for {product} at epoch {epoch}: all tile fetches failed")]
    NoDataAvailable { product: String, epoch: i32 },

    // === Data integrity errors (always fatal, never reconciled) ===
    #[error("No-data value changes between merged sources: expected {expected}, found {found}")]
    InconsistentNoDataValue { expected: f64, found: f64 },

    // === Processing errors ===
    #[error("No valid data found for vectorization")]
    EmptyVectorization,

    #[error("Failed to fetch {url}: {message}")]
    FetchFailed { url: String, message: String },

    #[error("Grid mismatch: {0}")]
    GridMismatch(String),

    #[error("Missing required attribute: {0}")]
    MissingAttribute(String),

    #[error("Projection error: {0}")]
    Projection(String),

    #[error("Invalid WKT geometry: {0}")]
    InvalidWkt(String),

    // === Infrastructure errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl GhslError {
    /// True for errors caused by the request itself, detectable before any I/O.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            GhslError::UnknownProduct { .. }
                | GhslError::InvalidEpoch { .. }
                | GhslError::InvalidResolution { .. }
                | GhslError::InvalidClassification { .. }
                | GhslError::UnsupportedClassification { .. }
                | GhslError::NoIntersectingTiles
        )
    }
}
