//! Vector layer types.

use chrono::NaiveDate;
use geo::MultiPolygon;
use std::fmt;

/// Primary attribute of a feature: the raw numeric value, or the mapped
/// class label for categorical products.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Number(f64),
    Label(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Number(v) => write!(f, "{}", v),
            AttributeValue::Label(s) => write!(f, "{}", s),
        }
    }
}

/// Attributes attached to one polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub value: AttributeValue,
    /// Raw class code, kept when the label replaces the value
    pub class_value: Option<f64>,
    /// Coarse domain for classified products
    pub domain: Option<String>,
    /// Time-slice date; absent for single-slice datasets
    pub date: Option<NaiveDate>,
}

/// One polygon with its attribute record.
#[derive(Debug, Clone)]
pub struct Feature {
    /// Geometry in geographic coordinates (EPSG:4326)
    pub geometry: MultiPolygon<f64>,
    pub record: FeatureRecord,
}

/// An ordered sequence of features derived from one grid variable.
#[derive(Debug, Clone)]
pub struct VectorLayer {
    /// Source variable name, e.g. "GHS_SMOD"
    pub variable: String,
    pub features: Vec<Feature>,
}

impl VectorLayer {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
