//! Per-product class-code lookup tables.
//!
//! Categorical products (currently GHS-SMOD) map raster cell codes to
//! human-readable class labels and, where defined, to a coarse domain
//! ("Urban domain" / "Rural domain" per the degree-of-urbanisation model).

/// Integer-code to label/domain lookup for a categorical product.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationTable {
    classes: &'static [(i64, &'static str)],
    domains: &'static [(i64, &'static str)],
}

impl ClassificationTable {
    pub const fn new(
        classes: &'static [(i64, &'static str)],
        domains: &'static [(i64, &'static str)],
    ) -> Self {
        Self { classes, domains }
    }

    /// Class label for a raster code. Unmapped codes render as
    /// `Unknown class <code>`.
    pub fn label(&self, code: i64) -> String {
        self.classes
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| (*label).to_string())
            .unwrap_or_else(|| format!("Unknown class {}", code))
    }

    /// Domain label for a raster code, or `None` if this table carries no
    /// domain column.
    pub fn domain(&self, code: i64) -> Option<String> {
        if self.domains.is_empty() {
            return None;
        }
        Some(
            self.domains
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, d)| (*d).to_string())
                .unwrap_or_else(|| "Unknown domain".to_string()),
        )
    }
}

/// GHS-SMOD settlement model, degree-of-urbanisation level 2 codes.
pub static SMOD_CLASSES: ClassificationTable = ClassificationTable::new(
    &[
        (30, "Urban Centre grid cell"),
        (23, "Dense Urban Cluster grid cell"),
        (22, "Semi-dense Urban Cluster grid cell"),
        (21, "Suburban or peri-urban grid cell"),
        (13, "Rural cluster grid cell"),
        (12, "Low Density Rural grid cell"),
        (11, "Very low density rural grid cell"),
        (10, "Water grid cell"),
    ],
    &[
        (30, "Urban domain"),
        (23, "Urban domain"),
        (22, "Urban domain"),
        (21, "Urban domain"),
        (13, "Rural domain"),
        (12, "Rural domain"),
        (11, "Rural domain"),
        (10, "Rural domain"),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smod_label_lookup() {
        assert_eq!(SMOD_CLASSES.label(30), "Urban Centre grid cell");
        assert_eq!(SMOD_CLASSES.label(13), "Rural cluster grid cell");
    }

    #[test]
    fn test_unknown_code_renders_placeholder() {
        assert_eq!(SMOD_CLASSES.label(99), "Unknown class 99");
        assert_eq!(SMOD_CLASSES.domain(99).unwrap(), "Unknown domain");
    }

    #[test]
    fn test_domain_split() {
        assert_eq!(SMOD_CLASSES.domain(21).unwrap(), "Urban domain");
        assert_eq!(SMOD_CLASSES.domain(10).unwrap(), "Rural domain");
    }
}
