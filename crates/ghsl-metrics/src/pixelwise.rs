//! Elementwise urbanization metrics.
//!
//! Simple per-cell transforms over population and built-up surfaces.
//! Change metrics take a (time, row, col) cube and return one slice per
//! consecutive pair of time coordinates.

use ndarray::{Array2, Array3, Axis, Zip};

/// Area of a 100m pixel in square kilometres.
pub const PIXEL_AREA_100M_KM2: f64 = 0.01;

/// Per-cell population counts to density in people per square kilometre.
pub fn population_density(pop: &Array2<f64>, pixel_area_km2: f64) -> Array2<f64> {
    pop.mapv(|v| v / pixel_area_km2)
}

/// Difference between each consecutive pair of time slices.
///
/// A cube with `t` slices yields `t - 1`; slice `i` holds
/// `cube[i + 1] - cube[i]`.
pub fn absolute_change(cube: &Array3<f64>) -> Array3<f64> {
    let (t, rows, cols) = cube.dim();
    let steps = t.saturating_sub(1);
    let mut out = Array3::zeros((steps, rows, cols));
    for i in 0..steps {
        let next = cube.index_axis(Axis(0), i + 1);
        let base = cube.index_axis(Axis(0), i);
        out.index_axis_mut(Axis(0), i).assign(&(&next - &base));
    }
    out
}

/// Percentage change between consecutive time slices.
///
/// Base values below `min_base` are clamped up to it before dividing, so
/// growth from zero stays finite.
pub fn relative_change(cube: &Array3<f64>, min_base: f64) -> Array3<f64> {
    let (t, rows, cols) = cube.dim();
    let steps = t.saturating_sub(1);
    let mut out = Array3::zeros((steps, rows, cols));
    for i in 0..steps {
        let next = cube.index_axis(Axis(0), i + 1);
        let base = cube.index_axis(Axis(0), i);
        let mut slot = out.index_axis_mut(Axis(0), i);
        Zip::from(&mut slot)
            .and(&next)
            .and(&base)
            .for_each(|out, &next, &base| {
                let denom = if base < min_base { min_base } else { base };
                *out = (next - base) / denom * 100.0;
            });
    }
    out
}

/// Built-up square metres per person; NaN where nobody lives.
pub fn built_up_area_per_capita(built: &Array2<f64>, pop: &Array2<f64>) -> Array2<f64> {
    Zip::from(built)
        .and(pop)
        .map_collect(|&built, &pop| if pop > 0.0 { built / pop } else { f64::NAN })
}

/// Binary mask of cells holding at least `threshold` people.
pub fn inhabited_flag(pop: &Array2<f64>, threshold: f64) -> Array2<u8> {
    pop.mapv(|v| u8::from(v >= threshold))
}

/// Binary mask of cells whose density clears `density_threshold`
/// people per square kilometre.
pub fn high_density_areas(
    pop: &Array2<f64>,
    pixel_area_km2: f64,
    density_threshold: f64,
) -> Array2<u8> {
    pop.mapv(|v| u8::from(v / pixel_area_km2 >= density_threshold))
}
