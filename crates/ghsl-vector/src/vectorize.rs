//! Dataset to vector layer conversion.

use tracing::debug;

use ghsl_catalog::ProductCatalog;
use ghsl_common::{GhslError, GhslResult};
use ghsl_grid::Dataset;
use ghsl_projection::geometry_to_geographic;

use crate::layer::{AttributeValue, Feature, FeatureRecord, VectorLayer};
use crate::polygonize::polygonize;

/// Convert a single-variable dataset into a polygon layer.
///
/// Each time slice is polygonized independently and the results
/// concatenated. A dataset with more than one time coordinate gets a
/// `date` attribute per slice; a single-slice dataset gets none. For
/// categorical products the raw code is preserved in `class_value`, the
/// primary attribute becomes the mapped label, and a `domain` attribute is
/// attached where the product defines domains. Output geometry is always
/// geographic (EPSG:4326).
pub fn vectorize(dataset: &Dataset, catalog: &ProductCatalog) -> GhslResult<VectorLayer> {
    let times = dataset.times();
    if times.is_empty() {
        return Err(GhslError::EmptyVectorization);
    }
    let variable = dataset.single_variable()?;
    let with_date = times.len() > 1;

    let table = catalog
        .by_variable(&variable.name)
        .and_then(|def| def.class_table);

    let mut features = Vec::new();
    for (t, &date) in times.iter().enumerate() {
        let slice = dataset.slice(variable, t);
        let regions = polygonize(slice, &dataset.geometry);
        debug!(
            time = %date,
            regions = regions.len(),
            "polygonized time slice"
        );

        for region in regions {
            let geometry = if dataset.geometry.crs.is_geographic() {
                region.geometry
            } else {
                geometry_to_geographic(&region.geometry)?
            };

            let record = match table {
                Some(table) => {
                    let code = region.value as i64;
                    FeatureRecord {
                        value: AttributeValue::Label(table.label(code)),
                        class_value: Some(region.value),
                        domain: table.domain(code),
                        date: with_date.then_some(date),
                    }
                }
                None => FeatureRecord {
                    value: AttributeValue::Number(region.value),
                    class_value: None,
                    domain: None,
                    date: with_date.then_some(date),
                },
            };

            features.push(Feature { geometry, record });
        }
    }

    Ok(VectorLayer {
        variable: variable.name.clone(),
        features,
    })
}
