//! Exact Euclidean distance transform.
//!
//! Two-pass lower-envelope algorithm over squared distances: one pass
//! down the columns, one across the rows. Exact for any mask, O(rows *
//! cols) total.

use ndarray::Array2;

/// Distance from every cell to the nearest `true` cell, in cell units.
///
/// Masked cells are at distance zero. A mask with no `true` cells yields
/// infinity everywhere.
pub fn euclidean_distance(mask: &Array2<bool>) -> Array2<f64> {
    let (rows, cols) = mask.dim();
    if !mask.iter().any(|&m| m) {
        return Array2::from_elem((rows, cols), f64::INFINITY);
    }

    // Squared distances; (rows + cols)^2 exceeds any reachable value and
    // keeps the envelope arithmetic finite.
    let unreachable = ((rows + cols) * (rows + cols)) as f64;
    let mut sq = Array2::from_shape_fn((rows, cols), |(r, c)| {
        if mask[(r, c)] {
            0.0
        } else {
            unreachable
        }
    });

    let n = rows.max(cols);
    let mut f = vec![0.0; n];
    let mut d = vec![0.0; n];
    let mut v = vec![0usize; n];
    let mut z = vec![0.0; n + 1];

    for c in 0..cols {
        for r in 0..rows {
            f[r] = sq[(r, c)];
        }
        lower_envelope(&f[..rows], &mut d[..rows], &mut v[..rows], &mut z[..rows + 1]);
        for r in 0..rows {
            sq[(r, c)] = d[r];
        }
    }
    for r in 0..rows {
        for c in 0..cols {
            f[c] = sq[(r, c)];
        }
        lower_envelope(&f[..cols], &mut d[..cols], &mut v[..cols], &mut z[..cols + 1]);
        for c in 0..cols {
            sq[(r, c)] = d[c];
        }
    }

    sq.mapv_into(f64::sqrt)
}

/// One-dimensional squared-distance transform of `f` into `d`.
///
/// `v` holds the parabola vertices of the lower envelope, `z` the range
/// boundaries between consecutive parabolas (`z` is one longer than `f`).
fn lower_envelope(f: &[f64], d: &mut [f64], v: &mut [usize], z: &mut [f64]) {
    let n = f.len();
    if n == 0 {
        return;
    }
    let mut k = 0usize;
    v[0] = 0;
    z[0] = f64::NEG_INFINITY;
    z[1] = f64::INFINITY;
    for q in 1..n {
        let mut s = intersection(f, q, v[k]);
        while s <= z[k] {
            k -= 1;
            s = intersection(f, q, v[k]);
        }
        k += 1;
        v[k] = q;
        z[k] = s;
        z[k + 1] = f64::INFINITY;
    }

    k = 0;
    for q in 0..n {
        while z[k + 1] < q as f64 {
            k += 1;
        }
        let dx = q as f64 - v[k] as f64;
        d[q] = dx * dx + f[v[k]];
    }
}

/// Horizontal position where the parabolas rooted at `q` and `p` cross.
fn intersection(f: &[f64], q: usize, p: usize) -> f64 {
    let q2 = (q * q) as f64;
    let p2 = (p * p) as f64;
    ((f[q] + q2) - (f[p] + p2)) / (2.0 * (q as f64 - p as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_with(rows: usize, cols: usize, seeds: &[(usize, usize)]) -> Array2<bool> {
        let mut mask = Array2::from_elem((rows, cols), false);
        for &seed in seeds {
            mask[seed] = true;
        }
        mask
    }

    #[test]
    fn test_single_seed_distances_are_exact() {
        let d = euclidean_distance(&mask_with(6, 6, &[(0, 0)]));
        assert_eq!(d[(0, 0)], 0.0);
        assert_eq!(d[(0, 5)], 5.0);
        assert_eq!(d[(5, 0)], 5.0);
        // 3-4-5 triangle
        assert!((d[(3, 4)] - 5.0).abs() < 1e-12);
        assert!((d[(1, 1)] - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_of_two_seeds_wins() {
        let d = euclidean_distance(&mask_with(1, 10, &[(0, 0), (0, 9)]));
        assert_eq!(d[(0, 4)], 4.0);
        assert_eq!(d[(0, 6)], 3.0);
        assert_eq!(d[(0, 9)], 0.0);
    }

    #[test]
    fn test_empty_mask_is_unreachable() {
        let d = euclidean_distance(&mask_with(3, 3, &[]));
        assert!(d.iter().all(|v| v.is_infinite()));
    }

    #[test]
    fn test_block_interior_and_exterior() {
        let mut mask = Array2::from_elem((5, 5), false);
        for r in 1..3 {
            for c in 1..3 {
                mask[(r, c)] = true;
            }
        }
        let d = euclidean_distance(&mask);
        assert_eq!(d[(1, 1)], 0.0);
        assert_eq!(d[(1, 4)], 2.0);
        assert!((d[(4, 4)] - 2.0 * 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
