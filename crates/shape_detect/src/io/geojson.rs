use ::geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{json, Map, Number};
use std::path::Path;
use crate::{error::Result, types::DetectionResult};

impl DetectionResult {
    /// Export to GeoJSON: one Polygon feature per shape, in pixel coordinates.
    ///
    /// Rings are closed as GeoJSON requires. Image dimensions and the shape
    /// count travel as foreign members of the collection.
    pub fn to_geojson(&self) -> FeatureCollection {
        let features = self
            .shapes
            .iter()
            .enumerate()
            .map(|(i, shape)| {
                let mut ring: Vec<Vec<f64>> = shape
                    .points
                    .iter()
                    .map(|&[x, y]| vec![x as f64, y as f64])
                    .collect();
                if let Some(first) = ring.first().cloned() {
                    ring.push(first);
                }

                let mut properties = Map::new();
                properties.insert("name".to_string(), json!(shape.name.to_string()));
                properties.insert("center".to_string(), json!([shape.center_x, shape.center_y]));
                properties.insert("is_inner".to_string(), json!(shape.is_inner));
                properties.insert("vertex_count".to_string(), json!(shape.points.len()));

                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
                    id: Some(::geojson::feature::Id::Number(Number::from(i))),
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        let mut foreign_members = Map::new();
        foreign_members.insert("image_width".to_string(), json!(self.width));
        foreign_members.insert("image_height".to_string(), json!(self.height));
        foreign_members.insert("shape_count".to_string(), json!(self.shapes.len()));

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: Some(foreign_members),
        }
    }

    /// Export to GeoJSON and serialize to JSON string
    pub fn to_geojson_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_geojson())?)
    }

    /// Save GeoJSON to file
    pub fn save_geojson(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_geojson_string()?)?;
        Ok(())
    }
}
