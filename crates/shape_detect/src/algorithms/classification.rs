use crate::{
    config::{CIRCULARITY_THRESHOLD, SQUARE_RATIO_MAX, SQUARE_RATIO_MIN},
    traits::ShapeClassifier,
    types::{Contour, ShapeKind},
};

/// Classifier driven by the simplified vertex count.
///
/// Outlines with more than six vertices are tested for circularity first,
/// on the original contour, since simplification flattens curvature.
#[derive(Debug, Clone)]
pub struct VertexCountClassifier {
    pub circularity_threshold: f64,
    /// Open interval of width/height ratios that count as square
    pub square_ratio_min: f64,
    pub square_ratio_max: f64,
}

impl Default for VertexCountClassifier {
    fn default() -> Self {
        Self {
            circularity_threshold: CIRCULARITY_THRESHOLD,
            square_ratio_min: SQUARE_RATIO_MIN,
            square_ratio_max: SQUARE_RATIO_MAX,
        }
    }
}

impl ShapeClassifier for VertexCountClassifier {
    fn classify(&self, polygon: &[[i32; 2]], contour: &Contour) -> ShapeKind {
        match polygon.len() {
            3 => ShapeKind::Triangle,
            4 => {
                let ratio = aspect_ratio(polygon);
                if ratio > self.square_ratio_min && ratio < self.square_ratio_max {
                    ShapeKind::Square
                } else {
                    ShapeKind::Rectangle
                }
            }
            5 => ShapeKind::Pentagon,
            6 => ShapeKind::Hexagon,
            v => {
                if v > 6 && contour.circularity() > self.circularity_threshold {
                    ShapeKind::Circle
                } else if (7..=10).contains(&v) {
                    ShapeKind::Polygon
                } else {
                    ShapeKind::Unknown
                }
            }
        }
    }
}

/// Width over height of the pixel bounding box; both extents are inclusive.
fn aspect_ratio(polygon: &[[i32; 2]]) -> f64 {
    let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
    let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
    for &[x, y] in polygon {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    let width = (max_x - min_x + 1) as f64;
    let height = (max_y - min_y + 1) as f64;
    width / height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regular_polygon(vertices: usize, radius: f64) -> Vec<[i32; 2]> {
        (0..vertices)
            .map(|i| {
                let angle = i as f64 / vertices as f64 * std::f64::consts::TAU;
                [
                    (200.0 + radius * angle.cos()).round() as i32,
                    (200.0 + radius * angle.sin()).round() as i32,
                ]
            })
            .collect()
    }

    fn classify(polygon: &[[i32; 2]], contour_points: Vec<[i32; 2]>) -> ShapeKind {
        VertexCountClassifier::default().classify(polygon, &Contour::new(contour_points, None))
    }

    #[test]
    fn test_low_vertex_counts() {
        let triangle = vec![[0, 0], [50, 0], [25, 40]];
        assert_eq!(classify(&triangle, triangle.clone()), ShapeKind::Triangle);

        let pentagon = regular_polygon(5, 50.0);
        assert_eq!(classify(&pentagon, pentagon.clone()), ShapeKind::Pentagon);

        let hexagon = regular_polygon(6, 50.0);
        assert_eq!(classify(&hexagon, hexagon.clone()), ShapeKind::Hexagon);
    }

    #[test]
    fn test_square_versus_rectangle() {
        let square = vec![[0, 0], [99, 0], [99, 99], [0, 99]];
        assert_eq!(classify(&square, square.clone()), ShapeKind::Square);

        let rectangle = vec![[0, 0], [199, 0], [199, 99], [0, 99]];
        assert_eq!(classify(&rectangle, rectangle.clone()), ShapeKind::Rectangle);

        // Ratio of exactly 1.05 falls outside the open interval.
        let borderline = vec![[0, 0], [104, 0], [104, 99], [0, 99]];
        assert_eq!(classify(&borderline, borderline.clone()), ShapeKind::Rectangle);
    }

    #[test]
    fn test_round_outline_is_circle() {
        let outline = regular_polygon(360, 100.0);
        let simplified = regular_polygon(8, 100.0);
        assert_eq!(classify(&simplified, outline.clone()), ShapeKind::Circle);

        let many = regular_polygon(14, 100.0);
        assert_eq!(classify(&many, outline), ShapeKind::Circle);
    }

    #[test]
    fn test_angular_outlines() {
        // A thin star-like zigzag has low circularity.
        let zigzag: Vec<[i32; 2]> = (0..16)
            .map(|i| {
                let angle = i as f64 / 16.0 * std::f64::consts::TAU;
                let radius = if i % 2 == 0 { 100.0 } else { 20.0 };
                [
                    (200.0 + radius * angle.cos()).round() as i32,
                    (200.0 + radius * angle.sin()).round() as i32,
                ]
            })
            .collect();
        let eight = zigzag[..8].to_vec();

        assert_eq!(classify(&eight, zigzag.clone()), ShapeKind::Polygon);
        assert_eq!(classify(&zigzag, zigzag.clone()), ShapeKind::Unknown);
    }

    #[test]
    fn test_degenerate_polygon_is_unknown() {
        let line = vec![[0, 0], [10, 10]];
        assert_eq!(classify(&line, line.clone()), ShapeKind::Unknown);
    }
}
