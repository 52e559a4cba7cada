//! Year-of-transition frontier.
//!
//! Given a categorical layer with per-slice dates, computes the area that
//! first satisfies a target category in each year relative to all strictly
//! earlier years.
//!
//! Area loss is intentionally asymmetric: a year whose dissolved area is a
//! strict subset of the cumulative union produces an empty geometry. The
//! frontier only ever reports newly gained area, never lost area.

use std::collections::BTreeMap;

use chrono::Datelike;
use geo::{BooleanOps, MultiPolygon};
use tracing::debug;

use ghsl_common::{GhslError, GhslResult};

use crate::layer::{AttributeValue, VectorLayer};

/// One frontier step: the area newly in the target category that year.
#[derive(Debug, Clone)]
pub struct TransitionStep {
    pub year: i32,
    /// Newly gained area; may be empty for shrinkage years
    pub geometry: MultiPolygon<f64>,
}

/// Ordered-by-year frontier, immutable once computed.
#[derive(Debug, Clone)]
pub struct TransitionLayer {
    pub variable: String,
    pub steps: Vec<TransitionStep>,
}

/// Compute the per-year incremental-area frontier for a target category.
///
/// Features are filtered to records whose label equals `target_category`,
/// grouped by the calendar year of their `date` attribute, and dissolved
/// into one polygon per year. Years ascend; the earliest year passes
/// through unchanged, every later year is differenced against the
/// cumulative union of all strictly earlier years.
pub fn transition(layer: &VectorLayer, target_category: &str) -> GhslResult<TransitionLayer> {
    let mut by_year: BTreeMap<i32, MultiPolygon<f64>> = BTreeMap::new();

    for feature in &layer.features {
        let matches = matches!(
            &feature.record.value,
            AttributeValue::Label(label) if label == target_category
        );
        if !matches {
            continue;
        }

        let date = feature.record.date.ok_or_else(|| {
            GhslError::MissingAttribute(
                "date (transition input must be a time-stacked layer)".to_string(),
            )
        })?;
        let year = date.year();

        // Dissolve: union all polygons sharing a year.
        by_year
            .entry(year)
            .and_modify(|acc| *acc = acc.union(&feature.geometry))
            .or_insert_with(|| feature.geometry.clone());
    }

    let mut steps = Vec::with_capacity(by_year.len());
    let mut past_union: Option<MultiPolygon<f64>> = None;

    for (year, dissolved) in by_year {
        let geometry = match &past_union {
            // Earliest year: no subtraction.
            None => dissolved.clone(),
            Some(past) => dissolved.difference(past),
        };
        debug!(year, polygons = geometry.0.len(), "transition step");
        steps.push(TransitionStep { year, geometry });

        past_union = Some(match past_union {
            None => dissolved,
            Some(past) => past.union(&dissolved),
        });
    }

    Ok(TransitionLayer {
        variable: layer.variable.clone(),
        steps,
    })
}
