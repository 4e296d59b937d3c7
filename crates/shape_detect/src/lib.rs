//! # Shape Detection Library
//!
//! Finds closed geometric figures in raster images and describes each one as
//! a labelled polygon with a centroid, ready for an interactive editor.
//!
//! ## Pipeline
//!
//! 1. Decode to grayscale and median-blur away speckle
//! 2. Canny edges, dilated and closed so each stroke is one solid band
//! 3. Border following with a one-level containment hierarchy
//! 4. Area filtering (speckle, image frame, double-traced strokes)
//! 5. Douglas-Peucker simplification relative to contour length
//! 6. Classification by vertex count, aspect ratio and circularity
//! 7. Centroid from raster moments
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! let bytes = std::fs::read("drawing.png")?;
//! let result = shape_detect::detect_shapes(&bytes)?;
//!
//! for shape in &result.shapes {
//!     println!("{} at ({}, {})", shape.name, shape.center_x, shape.center_y);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Custom Pipeline
//!
//! ```rust,no_run
//! use shape_detect::{Pipeline, algorithms::*};
//!
//! let pipeline = Pipeline::builder()
//!     .with_median_blur(3)
//!     .set_edge_detector(CannyEdgeDetector { low_threshold: 30.0, high_threshold: 90.0, morph_kernel_size: 3 })
//!     .set_filter(AreaContourFilter { min_area: 100.0, ..Default::default() })
//!     .build();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core modules
pub mod error;
pub mod config;
pub mod types;
pub mod traits;
pub mod algorithms;
pub mod pipeline;
pub mod io;

// Re-exports for convenience
pub use error::{ShapeError, Result};
pub use config::DetectorConfig;
pub use types::{Contour, DetectionResult, Shape, ShapeKind};
pub use traits::*;
pub use pipeline::{Pipeline, builder::PipelineBuilder};
pub use io::*;

/// Detect shapes in encoded image bytes with the default thresholds.
///
/// Fails only when the bytes cannot be decoded into a non-empty image; an
/// image without shapes yields an empty `shapes` list.
pub fn detect_shapes(bytes: &[u8]) -> Result<DetectionResult> {
    Pipeline::default().detect(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{CannyEdgeDetector, ImageprocContourExtractor, MedianBlurPreprocessor};
    use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
    use std::io::Cursor;

    const BLACK: Luma<u8> = Luma([0u8]);

    fn white(width: u32, height: u32) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([255u8]))
    }

    fn fill_rect(img: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32) {
        for y in y0..y1 {
            for x in x0..x1 {
                img.put_pixel(x, y, BLACK);
            }
        }
    }

    fn stroke_rect(img: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32, thickness: u32) {
        fill_rect(img, x0, y0, x1, y0 + thickness);
        fill_rect(img, x0, y1 - thickness, x1, y1);
        fill_rect(img, x0, y0, x0 + thickness, y1);
        fill_rect(img, x1 - thickness, y0, x1, y1);
    }

    fn fill_circle(img: &mut GrayImage, cx: f32, cy: f32, radius: f32) {
        let (width, height) = img.dimensions();
        for y in 0..height {
            for x in 0..width {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                if dx * dx + dy * dy <= radius * radius {
                    img.put_pixel(x, y, BLACK);
                }
            }
        }
    }

    fn fill_triangle(img: &mut GrayImage, a: (f32, f32), b: (f32, f32), c: (f32, f32)) {
        let edge = |p: (f32, f32), q: (f32, f32), x: f32, y: f32| {
            (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
        };
        let (width, height) = img.dimensions();
        for y in 0..height {
            for x in 0..width {
                let (fx, fy) = (x as f32, y as f32);
                let d1 = edge(a, b, fx, fy);
                let d2 = edge(b, c, fx, fy);
                let d3 = edge(c, a, fx, fy);
                let negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
                let positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
                if !(negative && positive) {
                    img.put_pixel(x, y, BLACK);
                }
            }
        }
    }

    fn encode(img: GrayImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut bytes), format)
            .expect("Should encode test image");
        bytes
    }

    fn png(img: GrayImage) -> Vec<u8> {
        encode(img, ImageFormat::Png)
    }

    fn square_image() -> GrayImage {
        let mut img = white(400, 400);
        fill_rect(&mut img, 100, 100, 300, 300);
        img
    }

    fn assert_well_formed(result: &DetectionResult) {
        for shape in &result.shapes {
            assert!(shape.points.len() >= 3, "{:?} has too few points", shape.name);
            let label = shape.name.to_string();
            assert!(ShapeKind::labels().iter().any(|l| *l == label));

            let (min, max) = shape.bounding_box();
            assert!(shape.center_x >= min[0] - 3 && shape.center_x <= max[0] + 3);
            assert!(shape.center_y >= min[1] - 3 && shape.center_y <= max[1] + 3);
        }
    }

    #[test]
    fn test_solid_square() {
        let result = detect_shapes(&png(square_image())).expect("Should detect");

        assert_eq!(result.width, 400);
        assert_eq!(result.height, 400);
        assert_eq!(result.shapes.len(), 1);

        let shape = &result.shapes[0];
        assert_eq!(shape.name, ShapeKind::Square);
        assert_eq!(shape.points.len(), 4);
        assert!((shape.center_x - 200).abs() <= 3, "center_x = {}", shape.center_x);
        assert!((shape.center_y - 200).abs() <= 3, "center_y = {}", shape.center_y);
        assert!(!shape.is_inner);
        assert_well_formed(&result);
    }

    #[test]
    fn test_solid_circle() {
        let mut img = white(300, 300);
        fill_circle(&mut img, 150.0, 150.0, 100.0);

        let result = detect_shapes(&png(img.clone())).expect("Should detect");
        assert_eq!(result.shapes.len(), 1);
        assert_eq!(result.shapes[0].name, ShapeKind::Circle);
        assert!((result.shapes[0].center_x - 150).abs() <= 3);
        assert!((result.shapes[0].center_y - 150).abs() <= 3);

        let blurred = MedianBlurPreprocessor::default().preprocess(&img).expect("Blur");
        let edges = CannyEdgeDetector::default().detect_edges(&blurred).expect("Edges");
        let contours = ImageprocContourExtractor.extract_contours(&edges).expect("Contours");
        let outline = contours
            .iter()
            .max_by(|a, b| a.area().total_cmp(&b.area()))
            .expect("Circle outline");
        assert!(outline.circularity() > 0.8, "circularity = {}", outline.circularity());
    }

    #[test]
    fn test_double_outline_is_one_shape() {
        let mut img = white(400, 400);
        stroke_rect(&mut img, 100, 100, 300, 300, 3);
        stroke_rect(&mut img, 105, 105, 295, 295, 3);

        let result = detect_shapes(&png(img)).expect("Should detect");
        assert_eq!(result.shapes.len(), 1);
        assert_eq!(result.shapes[0].name, ShapeKind::Square);
        assert!(!result.shapes[0].is_inner);
    }

    #[test]
    fn test_blank_image_has_no_shapes() {
        let result = detect_shapes(&png(white(120, 80))).expect("Should detect");
        assert_eq!(result.width, 120);
        assert_eq!(result.height, 80);
        assert!(result.shapes.is_empty());
    }

    #[test]
    fn test_empty_payload_is_invalid() {
        let err = detect_shapes(&[]).expect_err("Empty payload must fail");
        assert!(matches!(err, ShapeError::InvalidImage(_)));
    }

    #[test]
    fn test_nested_triangle_in_rectangle() {
        let mut img = white(400, 300);
        stroke_rect(&mut img, 40, 40, 360, 260, 4);
        fill_triangle(&mut img, (200.0, 90.0), (130.0, 210.0), (270.0, 210.0));

        let result = detect_shapes(&png(img)).expect("Should detect");
        assert_eq!(result.shapes.len(), 2);

        let outer: Vec<_> = result.shapes.iter().filter(|s| !s.is_inner).collect();
        let inner: Vec<_> = result.shapes.iter().filter(|s| s.is_inner).collect();
        assert_eq!(outer.len(), 1);
        assert_eq!(inner.len(), 1);
        assert_eq!(outer[0].name, ShapeKind::Rectangle);
        assert_eq!(inner[0].name, ShapeKind::Triangle);
        assert_eq!(inner[0].points.len(), 3);
        assert!((inner[0].center_x - 200).abs() <= 4);
        assert_well_formed(&result);
    }

    #[test]
    fn test_speckle_is_filtered() {
        let mut img = square_image();
        fill_rect(&mut img, 20, 20, 28, 28);
        fill_rect(&mut img, 350, 360, 356, 366);

        let result = detect_shapes(&png(img)).expect("Should detect");
        assert_eq!(result.shapes.len(), 1);
        assert_eq!(result.shapes[0].name, ShapeKind::Square);
    }

    #[test]
    fn test_image_frame_is_filtered() {
        let mut img = square_image();
        stroke_rect(&mut img, 0, 0, 400, 400, 6);

        let result = detect_shapes(&png(img)).expect("Should detect");
        assert_eq!(result.shapes.len(), 1);

        // The frame is rejected but still encloses the square in the hierarchy.
        let shape = &result.shapes[0];
        assert_eq!(shape.name, ShapeKind::Square);
        assert_eq!(shape.points.len(), 4);
        assert!(shape.is_inner);
        assert!((shape.center_x - 200).abs() <= 3, "center_x = {}", shape.center_x);
        assert!((shape.center_y - 200).abs() <= 3, "center_y = {}", shape.center_y);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let mut img = square_image();
        fill_circle(&mut img, 60.0, 340.0, 40.0);
        let bytes = png(img);

        let first = detect_shapes(&bytes).expect("Should detect");
        let second = detect_shapes(&bytes).expect("Should detect");
        assert_eq!(first, second);
        assert_eq!(
            first.to_json_string().expect("JSON"),
            second.to_json_string().expect("JSON")
        );
        assert_well_formed(&first);
    }

    #[test]
    fn test_jpeg_and_bmp_inputs() {
        let jpeg = encode(square_image(), ImageFormat::Jpeg);
        let result = detect_shapes(&jpeg).expect("Should decode JPEG");
        assert_eq!((result.width, result.height), (400, 400));
        assert_eq!(result.shapes.len(), 1);
        assert_well_formed(&result);

        let mut bmp = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 48, Rgb([255, 255, 255])))
            .write_to(&mut Cursor::new(&mut bmp), ImageFormat::Bmp)
            .expect("Should encode BMP");
        let result = detect_shapes(&bmp).expect("Should decode BMP");
        assert_eq!((result.width, result.height), (64, 48));
        assert!(result.shapes.is_empty());
    }

    #[test]
    fn test_pipeline_from_custom_config() {
        let config = DetectorConfig {
            min_contour_area: 50_000.0,
            ..DetectorConfig::default()
        };
        let pipeline = Pipeline::from_config(&config);
        let result = pipeline.process(&square_image()).expect("Should process");
        assert!(result.shapes.is_empty());
        assert!(pipeline.info().starts_with("Pipeline: 1 preprocessors"));
    }

    #[test]
    fn test_zero_sized_image_is_invalid() {
        let err = Pipeline::default()
            .process(&GrayImage::new(0, 0))
            .expect_err("Zero-sized image must fail");
        assert!(matches!(err, ShapeError::InvalidImage(_)));
    }

    #[test]
    fn test_result_json_schema() {
        let result = detect_shapes(&png(square_image())).expect("Should detect");
        let json: serde_json::Value =
            serde_json::from_str(&result.to_json_string().expect("JSON")).expect("Valid JSON");
        assert_eq!(json["width"], 400);
        assert_eq!(json["shapes"][0]["name"], "Square");
        assert!(json["shapes"][0]["centerX"].is_i64());
        assert!(json["shapes"][0]["isInner"].is_boolean());

        let schema = serde_json::to_value(DetectionResult::schema()).expect("Schema");
        assert!(schema["definitions"]["Shape"].is_object());
    }
}
