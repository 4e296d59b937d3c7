use geo_types::{Coord, LineString, Polygon};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// A closed boundary traced in the edge map.
///
/// Contours live in a flat list; `parent` indexes into that same list and
/// forms the containment forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    /// Boundary pixels in tracing order, without repeating the first point
    pub points: Vec<[i32; 2]>,
    /// Index of the contour whose enclosed region directly contains this one
    pub parent: Option<usize>,
}

impl Contour {
    pub fn new(points: Vec<[i32; 2]>, parent: Option<usize>) -> Self {
        Self { points, parent }
    }

    /// Convert to geo-types Polygon for geometric operations
    pub fn to_geo_polygon(&self) -> Polygon<f64> {
        let coords: Vec<Coord<f64>> = self
            .points
            .iter()
            .map(|&[x, y]| Coord { x: x as f64, y: y as f64 })
            .collect();

        Polygon::new(LineString::new(coords), vec![])
    }

    /// Enclosed area magnitude in square pixels
    pub fn area(&self) -> f64 {
        use geo::Area;
        if self.points.len() < 3 {
            return 0.0;
        }
        self.to_geo_polygon().unsigned_area()
    }

    /// Length of the closed boundary path
    pub fn perimeter(&self) -> f64 {
        use geo::EuclideanLength;
        if self.points.len() < 2 {
            return 0.0;
        }
        self.to_geo_polygon().exterior().euclidean_length()
    }

    /// `4π·area / perimeter²`: 1.0 for a perfect circle, lower for anything else.
    pub fn circularity(&self) -> f64 {
        let perimeter = self.perimeter();
        if perimeter <= 0.0 {
            return 0.0;
        }
        4.0 * std::f64::consts::PI * self.area() / (perimeter * perimeter)
    }

    pub fn is_nested(&self) -> bool {
        self.parent.is_some()
    }
}

/// The fixed set of labels a detected shape can carry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, VariantNames, IntoStaticStr,
)]
pub enum ShapeKind {
    Triangle,
    Square,
    Rectangle,
    Pentagon,
    Hexagon,
    Polygon,
    Circle,
    Unknown,
}

impl ShapeKind {
    /// All label strings, in declaration order
    pub fn labels() -> &'static [&'static str] {
        <Self as VariantNames>::VARIANTS
    }
}

/// One classified shape, in source image pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub name: ShapeKind,
    /// Area-weighted centroid of the source contour, truncated
    pub center_x: i32,
    pub center_y: i32,
    /// Simplified polygon vertices; the closing vertex is not repeated
    pub points: Vec<[i32; 2]>,
    /// Whether the source contour sits inside another contour
    pub is_inner: bool,
}

impl Shape {
    /// Axis-aligned bounds of the polygon vertices as (min, max)
    pub fn bounding_box(&self) -> ([i32; 2], [i32; 2]) {
        let mut min = [i32::MAX, i32::MAX];
        let mut max = [i32::MIN, i32::MIN];

        for &[x, y] in &self.points {
            min = [min[0].min(x), min[1].min(y)];
            max = [max[0].max(x), max[1].max(y)];
        }

        (min, max)
    }
}

/// Everything found in one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetectionResult {
    /// Decoded image dimensions
    pub width: u32,
    pub height: u32,
    /// Shapes in contour discovery order
    pub shapes: Vec<Shape>,
}

impl DetectionResult {
    /// JSON schema of the result document
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(DetectionResult)
    }

    pub fn to_json_string(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
