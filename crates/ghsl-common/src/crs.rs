//! Coordinate Reference System tags for GHSL data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two CRSs that GHSL layers move between.
///
/// Source rasters ship in World Mollweide; output vector layers are always
/// geographic (EPSG:4326).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crs {
    /// WGS84 Geographic (lon/lat in degrees)
    Geographic,
    /// World Mollweide equal-area (meters)
    Mollweide,
}

impl Crs {
    /// Authority code as used in archive names and metadata.
    pub fn code(&self) -> &'static str {
        match self {
            Crs::Geographic => "EPSG:4326",
            Crs::Mollweide => "ESRI:54009",
        }
    }

    /// Numeric projection code embedded in GHSL archive names.
    pub fn archive_code(&self) -> &'static str {
        match self {
            Crs::Geographic => "4326",
            Crs::Mollweide => "54009",
        }
    }

    pub fn is_geographic(&self) -> bool {
        matches!(self, Crs::Geographic)
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crs_codes() {
        assert_eq!(Crs::Mollweide.code(), "ESRI:54009");
        assert_eq!(Crs::Mollweide.archive_code(), "54009");
        assert!(Crs::Geographic.is_geographic());
        assert!(!Crs::Mollweide.is_geographic());
    }
}
