//! Layer exports: delimited text with WKT geometry, and GeoJSON.

use std::io::Write;

use geojson::{Feature as GeoJsonFeature, FeatureCollection, JsonObject};
use serde_json::Value;
use wkt::ToWkt;

use ghsl_common::GhslResult;

use crate::layer::{AttributeValue, VectorLayer};

impl VectorLayer {
    /// Write the layer as CSV with geometry encoded as well-known text.
    ///
    /// Columns: `geometry`, the variable name, then `date`, `class_value`
    /// and `domain` where any feature carries them.
    pub fn to_csv<W: Write>(&self, mut out: W) -> GhslResult<()> {
        let has_date = self.features.iter().any(|f| f.record.date.is_some());
        let has_class = self.features.iter().any(|f| f.record.class_value.is_some());
        let has_domain = self.features.iter().any(|f| f.record.domain.is_some());

        let mut header = vec!["geometry".to_string(), self.variable.clone()];
        if has_date {
            header.push("date".to_string());
        }
        if has_class {
            header.push("class_value".to_string());
        }
        if has_domain {
            header.push("domain".to_string());
        }
        writeln!(out, "{}", header.join(","))?;

        for feature in &self.features {
            let mut row = vec![
                csv_field(&feature.geometry.wkt_string()),
                csv_field(&feature.record.value.to_string()),
            ];
            if has_date {
                row.push(
                    feature
                        .record
                        .date
                        .map(|d| d.to_string())
                        .unwrap_or_default(),
                );
            }
            if has_class {
                row.push(
                    feature
                        .record
                        .class_value
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                );
            }
            if has_domain {
                row.push(csv_field(feature.record.domain.as_deref().unwrap_or("")));
            }
            writeln!(out, "{}", row.join(","))?;
        }

        Ok(())
    }

    /// Convert the layer to a GeoJSON feature collection.
    pub fn to_geojson(&self) -> FeatureCollection {
        let features = self
            .features
            .iter()
            .map(|feature| {
                let mut properties = JsonObject::new();
                let value = match &feature.record.value {
                    AttributeValue::Number(v) => serde_json::json!(v),
                    AttributeValue::Label(s) => Value::String(s.clone()),
                };
                properties.insert(self.variable.clone(), value);
                if let Some(date) = feature.record.date {
                    properties.insert("date".to_string(), Value::String(date.to_string()));
                }
                if let Some(code) = feature.record.class_value {
                    properties.insert("class_value".to_string(), serde_json::json!(code));
                }
                if let Some(domain) = &feature.record.domain {
                    properties.insert("domain".to_string(), Value::String(domain.clone()));
                }

                GeoJsonFeature {
                    bbox: None,
                    geometry: Some(geojson::Geometry::new(geojson::Value::from(
                        &feature.geometry,
                    ))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

/// Quote a field when it contains a delimiter, quote or newline.
fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
