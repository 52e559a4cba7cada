//! GHSL product definitions and request validation.
//!
//! The registry is a fixed, strongly-typed table validated once at build
//! time by construction, rather than an open-ended mapping checked
//! defensively at every lookup.

use ghsl_common::{GhslError, GhslResult, Region};

use crate::classification::{ClassificationTable, SMOD_CLASSES};

/// A single GHSL product: its valid options, defaults and URL naming.
#[derive(Debug, Clone, Copy)]
pub struct ProductDefinition {
    /// Public product id, e.g. "GHS-BUILT-S"
    pub id: &'static str,
    pub description: &'static str,
    /// Valid epoch years
    pub epochs: &'static [i32],
    /// Valid resolution strings, e.g. "100m"
    pub resolutions: &'static [&'static str],
    /// Valid classifications, or `None` for unclassified products
    pub classifications: Option<&'static [&'static str]>,
    pub default_resolution: &'static str,
    pub default_classification: Option<&'static str>,
    /// Variable / archive name, e.g. "GHS_BUILT_S"
    pub normalized_name: &'static str,
    /// URL-name templates keyed by classification; the `None` key is the
    /// wildcard used when a classification has no dedicated template.
    /// Placeholders: `{product}`, `{epoch}`, `{classification}`.
    url_patterns: &'static [(Option<&'static str>, &'static str)],
    /// Class-code table for categorical products
    pub class_table: Option<&'static ClassificationTable>,
}

impl ProductDefinition {
    /// True if the raster carries categorical class codes.
    pub fn is_categorical(&self) -> bool {
        self.class_table.is_some()
    }

    /// Render the archive base name for an epoch/classification.
    ///
    /// The template is selected by classification key, falling back to the
    /// wildcard: some products encode the classification in the URL path
    /// and others do not.
    pub fn url_name(&self, epoch: i32, classification: Option<&str>) -> String {
        let template = self
            .url_patterns
            .iter()
            .find(|(key, _)| *key == classification)
            .or_else(|| self.url_patterns.iter().find(|(key, _)| key.is_none()))
            .map(|(_, t)| *t)
            // Registry construction guarantees a wildcard or exact entry.
            .unwrap_or("{product}_E{epoch}");

        template
            .replace("{product}", self.normalized_name)
            .replace("{epoch}", &epoch.to_string())
            .replace("{classification}", classification.unwrap_or(""))
    }
}

/// The bundled GHSL R2023A product registry.
static PRODUCTS: &[ProductDefinition] = &[
    ProductDefinition {
        id: "GHS-BUILT-S",
        description: "Global Human Settlement Built-Up Surface",
        epochs: &[1975, 1980, 1985, 1990, 1995, 2000, 2015, 2018, 2020, 2025, 2030],
        resolutions: &["100m", "1000m"],
        classifications: Some(&["RES+NRES", "NRES"]),
        default_resolution: "100m",
        default_classification: Some("RES+NRES"),
        normalized_name: "GHS_BUILT_S",
        url_patterns: &[
            (Some("RES+NRES"), "{product}_E{epoch}"),
            (Some("NRES"), "{product}_NRES_E{epoch}"),
        ],
        class_table: None,
    },
    ProductDefinition {
        id: "GHS-BUILT-H",
        description: "Global Human Settlement Built-Up Height",
        epochs: &[2018],
        resolutions: &["100m"],
        classifications: Some(&["AGBH", "ANBH"]),
        default_resolution: "100m",
        default_classification: Some("AGBH"),
        normalized_name: "GHS_BUILT_H",
        url_patterns: &[
            (Some("AGBH"), "{product}_{classification}_E{epoch}"),
            (Some("ANBH"), "{product}_{classification}_E{epoch}"),
        ],
        class_table: None,
    },
    ProductDefinition {
        id: "GHS-BUILT-V",
        description: "Global Human Settlement Built-Up Volume",
        epochs: &[1975, 1980, 1985, 1990, 1995, 2000, 2015, 2020, 2025, 2030],
        resolutions: &["100m", "1000m"],
        classifications: Some(&["RES+NRES", "NRES"]),
        default_resolution: "100m",
        default_classification: Some("RES+NRES"),
        normalized_name: "GHS_BUILT_V",
        url_patterns: &[
            (Some("RES+NRES"), "{product}_E{epoch}"),
            (Some("NRES"), "{product}_NRES_E{epoch}"),
        ],
        class_table: None,
    },
    ProductDefinition {
        id: "GHS-POP",
        description: "Global Human Settlement Population",
        epochs: &[1975, 1980, 1985, 1990, 1995, 2000, 2015, 2020, 2025, 2030],
        resolutions: &["100m", "1000m"],
        classifications: None,
        default_resolution: "100m",
        default_classification: None,
        normalized_name: "GHS_POP",
        url_patterns: &[(None, "{product}_E{epoch}")],
        class_table: None,
    },
    ProductDefinition {
        id: "GHS-SMOD",
        description: "Global Human Settlement Settlement Model",
        epochs: &[1975, 1980, 1985, 1990, 1995, 2000, 2015, 2020, 2025, 2030],
        resolutions: &["1000m"],
        classifications: None,
        default_resolution: "1000m",
        default_classification: None,
        normalized_name: "GHS_SMOD",
        url_patterns: &[(None, "{product}_E{epoch}")],
        class_table: Some(&SMOD_CLASSES),
    },
];

/// A validated, normalized request for one product.
#[derive(Debug, Clone)]
pub struct ProductRequest {
    pub definition: &'static ProductDefinition,
    pub resolution: String,
    pub classification: Option<String>,
}

impl ProductRequest {
    /// Archive base name for one epoch of this request.
    pub fn url_name(&self, epoch: i32) -> String {
        self.definition
            .url_name(epoch, self.classification.as_deref())
    }
}

/// A fully validated request: products, ordered epochs and an optional
/// region. Every field is a member of the corresponding product's valid
/// set before any I/O occurs.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub products: Vec<ProductRequest>,
    /// Requested epochs, in request order, duplicates preserved.
    pub epochs: Vec<i32>,
    /// Region of interest; `None` means global.
    pub region: Option<Region>,
}

/// Read-only registry of GHSL product definitions.
#[derive(Debug, Clone, Copy)]
pub struct ProductCatalog {
    products: &'static [ProductDefinition],
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProductCatalog {
    /// The bundled R2023A registry.
    pub fn builtin() -> Self {
        Self { products: PRODUCTS }
    }

    /// All known product ids.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.products.iter().map(|p| p.id)
    }

    /// Look up a product definition by public id.
    pub fn get(&self, product: &str) -> GhslResult<&'static ProductDefinition> {
        self.products
            .iter()
            .find(|p| p.id == product)
            .ok_or_else(|| GhslError::UnknownProduct {
                product: product.to_string(),
                available: join(self.ids()),
            })
    }

    /// Look up a product definition by its variable name (e.g. "GHS_SMOD").
    pub fn by_variable(&self, variable: &str) -> Option<&'static ProductDefinition> {
        self.products
            .iter()
            .find(|p| p.normalized_name == variable)
    }

    /// Validate one product against the requested options and substitute
    /// defaults where omitted. Each epoch is checked individually.
    pub fn validate(
        &self,
        product: &str,
        epochs: &[i32],
        resolution: Option<&str>,
        classification: Option<&str>,
    ) -> GhslResult<ProductRequest> {
        let definition = self.get(product)?;

        for &epoch in epochs {
            if !definition.epochs.contains(&epoch) {
                return Err(GhslError::InvalidEpoch {
                    product: definition.id.to_string(),
                    epoch,
                    available: join(definition.epochs.iter()),
                });
            }
        }

        let resolution = match resolution {
            None => definition.default_resolution.to_string(),
            Some(r) if definition.resolutions.contains(&r) => r.to_string(),
            Some(r) => {
                return Err(GhslError::InvalidResolution {
                    product: definition.id.to_string(),
                    resolution: r.to_string(),
                    available: join(definition.resolutions.iter()),
                })
            }
        };

        let classification = match definition.classifications {
            Some(valid) => match classification {
                None => definition.default_classification.map(str::to_string),
                Some(c) if valid.contains(&c) => Some(c.to_string()),
                Some(c) => {
                    return Err(GhslError::InvalidClassification {
                        product: definition.id.to_string(),
                        classification: c.to_string(),
                        available: join(valid.iter()),
                    })
                }
            },
            None => match classification {
                // A classification on an unclassified product is a hard
                // error, never silently dropped.
                Some(c) => {
                    return Err(GhslError::UnsupportedClassification {
                        product: definition.id.to_string(),
                        classification: c.to_string(),
                    })
                }
                None => None,
            },
        };

        Ok(ProductRequest {
            definition,
            resolution,
            classification,
        })
    }

    /// Validate a full multi-product request into a `RequestSpec`.
    pub fn resolve(
        &self,
        products: &[&str],
        epochs: Vec<i32>,
        resolution: Option<&str>,
        classification: Option<&str>,
        region: Option<Region>,
    ) -> GhslResult<RequestSpec> {
        let products = products
            .iter()
            .map(|p| self.validate(p, &epochs, resolution, classification))
            .collect::<GhslResult<Vec<_>>>()?;

        Ok(RequestSpec {
            products,
            epochs,
            region,
        })
    }
}

fn join<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: ToString,
{
    items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_product_lists_known_ids() {
        let catalog = ProductCatalog::builtin();
        let err = catalog.get("GHS-NOPE").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("GHS-NOPE"));
        assert!(msg.contains("GHS-BUILT-S"));
        assert!(msg.contains("GHS-SMOD"));
    }

    #[test]
    fn test_defaults_substituted() {
        let catalog = ProductCatalog::builtin();
        let req = catalog.validate("GHS-BUILT-S", &[2020], None, None).unwrap();
        assert_eq!(req.resolution, "100m");
        assert_eq!(req.classification.as_deref(), Some("RES+NRES"));
    }

    #[test]
    fn test_invalid_epoch_lists_valid_epochs() {
        let catalog = ProductCatalog::builtin();
        let err = catalog
            .validate("GHS-BUILT-H", &[2018, 2020], None, None)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Epoch 2020"));
        assert!(msg.contains("Available epochs: 2018"));
    }

    #[test]
    fn test_invalid_resolution() {
        let catalog = ProductCatalog::builtin();
        let err = catalog
            .validate("GHS-SMOD", &[2020], Some("100m"), None)
            .unwrap_err();
        assert!(matches!(err, GhslError::InvalidResolution { .. }));
        assert!(err.to_string().contains("1000m"));
    }

    #[test]
    fn test_invalid_classification() {
        let catalog = ProductCatalog::builtin();
        let err = catalog
            .validate("GHS-BUILT-S", &[2020], None, Some("BOGUS"))
            .unwrap_err();
        assert!(matches!(err, GhslError::InvalidClassification { .. }));
        assert!(err.to_string().contains("RES+NRES"));
    }

    #[test]
    fn test_classification_on_unclassified_product_is_hard_error() {
        let catalog = ProductCatalog::builtin();
        let err = catalog
            .validate("GHS-POP", &[2020], None, Some("RES+NRES"))
            .unwrap_err();
        assert!(matches!(err, GhslError::UnsupportedClassification { .. }));
    }

    #[test]
    fn test_url_name_templates() {
        let catalog = ProductCatalog::builtin();

        let default = catalog.validate("GHS-BUILT-S", &[2020], None, None).unwrap();
        assert_eq!(default.url_name(2020), "GHS_BUILT_S_E2020");

        let nres = catalog
            .validate("GHS-BUILT-S", &[2020], None, Some("NRES"))
            .unwrap();
        assert_eq!(nres.url_name(2020), "GHS_BUILT_S_NRES_E2020");

        let height = catalog.validate("GHS-BUILT-H", &[2018], None, None).unwrap();
        assert_eq!(height.url_name(2018), "GHS_BUILT_H_AGBH_E2018");

        let pop = catalog.validate("GHS-POP", &[2020], None, None).unwrap();
        assert_eq!(pop.url_name(2020), "GHS_POP_E2020");
    }

    #[test]
    fn test_every_declared_combination_validates() {
        let catalog = ProductCatalog::builtin();
        for id in catalog.ids().collect::<Vec<_>>() {
            let def = catalog.get(id).unwrap();
            let classifications: Vec<Option<&str>> = match def.classifications {
                Some(cs) => cs.iter().map(|c| Some(*c)).collect(),
                None => vec![None],
            };
            for &epoch in def.epochs {
                for &res in def.resolutions {
                    for &cls in &classifications {
                        let req = catalog
                            .validate(id, &[epoch], Some(res), cls)
                            .unwrap_or_else(|e| panic!("{}: {}", id, e));
                        assert_eq!(req.resolution, res);
                        assert_eq!(req.classification.as_deref(), cls);
                    }
                }
            }
        }
    }

    #[test]
    fn test_by_variable() {
        let catalog = ProductCatalog::builtin();
        assert_eq!(catalog.by_variable("GHS_SMOD").unwrap().id, "GHS-SMOD");
        assert!(catalog.by_variable("GHS_BOGUS").is_none());
    }
}
