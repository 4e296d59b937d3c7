pub mod builder;

use image::GrayImage;
use crate::{
    algorithms::{decode_grayscale, Moments},
    config::DetectorConfig,
    error::{Result, ShapeError},
    traits::{
        ContourExtractor, ContourFilter, EdgeDetector, ImagePreprocessor, PolygonSimplifier,
        ShapeClassifier,
    },
    types::{DetectionResult, Shape},
};

/// The detection pipeline: preprocess, extract edges, trace contours, then
/// filter, simplify, classify and locate each contour.
///
/// A pipeline holds configuration only, so one instance can serve any number
/// of images, from any number of threads.
pub struct Pipeline {
    preprocessors: Vec<Box<dyn ImagePreprocessor>>,
    edge_detector: Box<dyn EdgeDetector>,
    contour_extractor: Box<dyn ContourExtractor>,
    filter: Box<dyn ContourFilter>,
    simplifier: Box<dyn PolygonSimplifier>,
    classifier: Box<dyn ShapeClassifier>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    /// Pipeline with every stage tuned by `config`
    pub fn from_config(config: &DetectorConfig) -> Self {
        builder::PipelineBuilder::from_config(config).build()
    }

    /// Create a new pipeline with the given components
    pub fn new(
        preprocessors: Vec<Box<dyn ImagePreprocessor>>,
        edge_detector: Box<dyn EdgeDetector>,
        contour_extractor: Box<dyn ContourExtractor>,
        filter: Box<dyn ContourFilter>,
        simplifier: Box<dyn PolygonSimplifier>,
        classifier: Box<dyn ShapeClassifier>,
    ) -> Self {
        Self {
            preprocessors,
            edge_detector,
            contour_extractor,
            filter,
            simplifier,
            classifier,
        }
    }

    /// Decode encoded image bytes and run the whole pipeline on them
    pub fn detect(&self, bytes: &[u8]) -> Result<DetectionResult> {
        let image = decode_grayscale(bytes)?;
        self.process(&image)
    }

    /// Process a grayscale image through the entire pipeline
    pub fn process(&self, image: &GrayImage) -> Result<DetectionResult> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ShapeError::InvalidImage(format!(
                "zero dimensions ({}x{})",
                width, height
            )));
        }

        // Step 1: Apply all preprocessors in sequence
        let mut processed = image.clone();
        for preprocessor in &self.preprocessors {
            processed = preprocessor.preprocess(&processed)?;
        }

        // Step 2: Binary edge map
        let edges = self.edge_detector.detect_edges(&processed)?;
        drop(processed);
        tracing::debug!(
            edge_pixels = edges.pixels().filter(|p| p[0] > 0).count(),
            "edge map ready"
        );

        // Step 3: Contours and their containment forest
        let contours = self.contour_extractor.extract_contours(&edges)?;
        drop(edges);
        tracing::debug!(contours = contours.len(), "contours traced");

        // Step 4: Per-contour filter, simplify, classify, locate
        let image_area = width as f64 * height as f64;
        let mut shapes = Vec::new();

        for (index, contour) in contours.iter().enumerate() {
            if !self.filter.accept(&contours, index, image_area) {
                continue;
            }

            if contour.perimeter() <= 0.0 {
                tracing::trace!(index, "skipped: zero perimeter");
                continue;
            }

            let polygon = self.simplifier.simplify(contour);
            if polygon.len() < 3 {
                tracing::trace!(index, vertices = polygon.len(), "skipped: degenerate polygon");
                continue;
            }

            let name = self.classifier.classify(&polygon, contour);

            let Some((center_x, center_y)) = Moments::of_polygon(&contour.points).centroid()
            else {
                tracing::trace!(index, "skipped: zero area");
                continue;
            };

            shapes.push(Shape {
                name,
                center_x,
                center_y,
                points: polygon,
                is_inner: contour.is_nested(),
            });
        }

        tracing::debug!(shapes = shapes.len(), width, height, "detection finished");

        Ok(DetectionResult {
            width,
            height,
            shapes,
        })
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!(
            "Pipeline: {} preprocessors, 1 edge detector, 1 contour extractor, 1 filter, 1 simplifier, 1 classifier",
            self.preprocessors.len()
        )
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::from_config(&DetectorConfig::default())
    }
}
