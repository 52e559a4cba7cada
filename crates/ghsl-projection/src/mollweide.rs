//! World Mollweide projection (ESRI:54009).
//!
//! The equal-area pseudocylindrical projection GHSL rasters are distributed
//! in. Spherical formulas on the WGS84 semi-major axis, matching the grids
//! published by the JRC.
//!
//! Forward: solve the auxiliary angle theta from
//!   2*theta + sin(2*theta) = pi * sin(lat)
//! by Newton iteration, then
//!   x = R * (2*sqrt(2)/pi) * lon * cos(theta)
//!   y = R * sqrt(2) * sin(theta)

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use ghsl_common::{GhslError, GhslResult};

/// World Mollweide projection parameters.
#[derive(Debug, Clone)]
pub struct Mollweide {
    /// Central meridian in radians
    pub lon0: f64,
    /// Sphere radius (meters)
    pub radius: f64,
}

impl Default for Mollweide {
    fn default() -> Self {
        Self::new()
    }
}

impl Mollweide {
    /// World Mollweide as used by GHSL: central meridian 0, WGS84 semi-major
    /// axis as sphere radius.
    pub fn new() -> Self {
        Self {
            lon0: 0.0,
            radius: 6_378_137.0,
        }
    }

    /// Project geographic coordinates (degrees) to Mollweide x/y (meters).
    pub fn forward(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
        let to_rad = PI / 180.0;
        let lon = lon_deg * to_rad - self.lon0;
        let lat = lat_deg * to_rad;

        let theta = solve_theta(lat);

        let x = self.radius * (2.0 * SQRT_2 / PI) * lon * theta.cos();
        let y = self.radius * SQRT_2 * theta.sin();
        (x, y)
    }

    /// Unproject Mollweide x/y (meters) back to geographic degrees.
    ///
    /// Fails if the point lies outside the projection's valid ellipse.
    pub fn inverse(&self, x: f64, y: f64) -> GhslResult<(f64, f64)> {
        let s = y / (self.radius * SQRT_2);
        if s.abs() > 1.0 + 1e-9 {
            return Err(GhslError::Projection(format!(
                "y coordinate {} outside Mollweide extent",
                y
            )));
        }
        let theta = num_traits::clamp(s, -1.0, 1.0).asin();

        let sin_lat = (2.0 * theta + (2.0 * theta).sin()) / PI;
        let lat = num_traits::clamp(sin_lat, -1.0, 1.0).asin();

        let lon = if theta.cos().abs() < 1e-12 {
            // At the poles every meridian collapses to a point.
            self.lon0
        } else {
            self.lon0 + PI * x / (2.0 * self.radius * SQRT_2 * theta.cos())
        };

        let to_deg = 180.0 / PI;
        Ok((lon * to_deg, lat * to_deg))
    }
}

/// Newton iteration for the Mollweide auxiliary angle.
fn solve_theta(lat: f64) -> f64 {
    let rhs = PI * lat.sin();
    let mut theta = lat;
    for _ in 0..20 {
        let denom = 2.0 + 2.0 * (2.0 * theta).cos();
        if denom.abs() < 1e-12 {
            // Converged at a pole.
            return if lat > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
        }
        let delta = (2.0 * theta + (2.0 * theta).sin() - rhs) / denom;
        theta -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    theta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_origin() {
        let proj = Mollweide::new();
        let (x, y) = proj.forward(0.0, 0.0);
        assert!(x.abs() < 1e-6);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn test_equator_edge() {
        let proj = Mollweide::new();
        // At (180, 0) the x coordinate is the full half-width 2*sqrt(2)*R.
        let (x, y) = proj.forward(180.0, 0.0);
        let expected = 2.0 * SQRT_2 * 6_378_137.0;
        assert!((x - expected).abs() < 1.0);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn test_roundtrip() {
        let proj = Mollweide::new();
        for &(lon, lat) in &[
            (-58.4, -34.6),  // Buenos Aires
            (2.35, 48.85),   // Paris
            (139.7, 35.7),   // Tokyo
            (0.0, 89.0),     // near pole
            (-179.0, -55.0), // far southwest
        ] {
            let (x, y) = proj.forward(lon, lat);
            let (lon2, lat2) = proj.inverse(x, y).unwrap();
            assert!(
                (lon - lon2).abs() < 1e-6 && (lat - lat2).abs() < 1e-6,
                "roundtrip failed for ({}, {}): got ({}, {})",
                lon,
                lat,
                lon2,
                lat2
            );
        }
    }

    #[test]
    fn test_inverse_rejects_out_of_extent() {
        let proj = Mollweide::new();
        assert!(proj.inverse(0.0, 1e9).is_err());
    }
}
