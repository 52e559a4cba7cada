//! Monocentric/polycentric settlement pattern classification.

use ndarray::{Array2, Zip};
use tracing::debug;

use crate::distance::euclidean_distance;

/// Rural: not within the search radius of any center.
pub const RURAL: u8 = 0;
/// Monocentric: within the search radius of exactly one center.
pub const MONOCENTRIC: u8 = 1;
/// Polycentric: within the search radius of more than one center.
pub const POLYCENTRIC: u8 = 2;

/// Classify every cell of a density surface by settlement pattern.
///
/// Cells at or above `density_threshold` form centers; touching cells,
/// diagonals included, belong to the same center. Each cell is then
/// scored by its exact Euclidean distance to every center. Strictly
/// inside `search_radius` of one center is monocentric, of several is
/// polycentric, otherwise rural. A surface with no centers is rural
/// everywhere. Distances and the radius are in cell units.
pub fn classify(density: &Array2<f64>, density_threshold: f64, search_radius: f64) -> Array2<u8> {
    let mask = density.mapv(|v| v >= density_threshold);
    let (labels, centers) = label_components(&mask);

    let mut classes = Array2::<u8>::zeros(density.raw_dim());
    if centers == 0 {
        debug!(density_threshold, "no centers above threshold");
        return classes;
    }
    debug!(centers, search_radius, "scoring distance to centers");

    let mut min_distance = Array2::from_elem(density.raw_dim(), f64::INFINITY);
    let mut centers_in_radius = Array2::<u32>::zeros(density.raw_dim());
    for center in 1..=centers {
        let center_mask = labels.mapv(|l| l == center);
        let distance = euclidean_distance(&center_mask);
        Zip::from(&mut min_distance)
            .and(&mut centers_in_radius)
            .and(&distance)
            .for_each(|min, within, &d| {
                if d < *min {
                    *min = d;
                }
                if d < search_radius {
                    *within += 1;
                }
            });
    }

    Zip::from(&mut classes)
        .and(&min_distance)
        .and(&centers_in_radius)
        .for_each(|class, &min, &within| {
            if within > 1 {
                *class = POLYCENTRIC;
            } else if min < search_radius {
                *class = MONOCENTRIC;
            }
        });
    classes
}

/// Binary mask of the urban fringe: cells just outside the above-threshold
/// area.
///
/// The above-threshold mask is dilated by a Euclidean disk of
/// `buffer_size` cells; the fringe is the dilated area minus the mask
/// itself. A surface with no cells above the threshold has no fringe.
pub fn urban_fringe(density: &Array2<f64>, density_threshold: f64, buffer_size: f64) -> Array2<u8> {
    let mask = density.mapv(|v| v >= density_threshold);
    let distance = euclidean_distance(&mask);
    Zip::from(&mask)
        .and(&distance)
        .map_collect(|&inside, &d| u8::from(!inside && d <= buffer_size))
}

/// Label 8-connected components of a mask; 0 is background, components
/// number from 1 in scan order.
fn label_components(mask: &Array2<bool>) -> (Array2<u32>, u32) {
    let (rows, cols) = mask.dim();
    let mut labels = Array2::<u32>::zeros((rows, cols));
    let mut count = 0u32;
    let mut stack = Vec::new();

    for r in 0..rows {
        for c in 0..cols {
            if !mask[(r, c)] || labels[(r, c)] != 0 {
                continue;
            }
            count += 1;
            labels[(r, c)] = count;
            stack.push((r, c));
            while let Some((cr, cc)) = stack.pop() {
                for dr in -1isize..=1 {
                    for dc in -1isize..=1 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let nr = cr as isize + dr;
                        let nc = cc as isize + dc;
                        if nr < 0 || nc < 0 || nr as usize >= rows || nc as usize >= cols {
                            continue;
                        }
                        let cell = (nr as usize, nc as usize);
                        if mask[cell] && labels[cell] == 0 {
                            labels[cell] = count;
                            stack.push(cell);
                        }
                    }
                }
            }
        }
    }
    (labels, count)
}
