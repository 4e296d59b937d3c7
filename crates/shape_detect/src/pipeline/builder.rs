use crate::{
    algorithms::{
        AreaContourFilter, CannyEdgeDetector, DouglasPeuckerSimplifier,
        ImageprocContourExtractor, MedianBlurPreprocessor, VertexCountClassifier,
    },
    config::DetectorConfig,
    pipeline::Pipeline,
    traits::{
        ContourExtractor, ContourFilter, EdgeDetector, ImagePreprocessor, PolygonSimplifier,
        ShapeClassifier,
    },
};

/// Builder for creating detection pipelines with a fluent API
pub struct PipelineBuilder {
    preprocessors: Vec<Box<dyn ImagePreprocessor>>,
    edge_detector: Option<Box<dyn EdgeDetector>>,
    contour_extractor: Option<Box<dyn ContourExtractor>>,
    filter: Option<Box<dyn ContourFilter>>,
    simplifier: Option<Box<dyn PolygonSimplifier>>,
    classifier: Option<Box<dyn ShapeClassifier>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            preprocessors: Vec::new(),
            edge_detector: None,
            contour_extractor: None,
            filter: None,
            simplifier: None,
            classifier: None,
        }
    }

    /// Builder with every stage configured from `config`
    pub fn from_config(config: &DetectorConfig) -> Self {
        Self::new()
            .with_median_blur(config.median_kernel_size)
            .set_edge_detector(CannyEdgeDetector {
                low_threshold: config.canny_low_threshold,
                high_threshold: config.canny_high_threshold,
                morph_kernel_size: config.morph_kernel_size,
            })
            .set_filter(AreaContourFilter {
                min_area: config.min_contour_area,
                max_area_ratio: config.max_area_ratio,
                duplicate_area_delta: config.duplicate_area_delta,
            })
            .set_simplifier(DouglasPeuckerSimplifier {
                epsilon_ratio: config.epsilon_ratio,
            })
            .set_classifier(VertexCountClassifier {
                circularity_threshold: config.circularity_threshold,
                square_ratio_min: config.square_ratio_min,
                square_ratio_max: config.square_ratio_max,
            })
    }

    /// Add a preprocessor to the pipeline
    pub fn add_preprocessor<P>(mut self, preprocessor: P) -> Self
    where
        P: ImagePreprocessor + 'static,
    {
        self.preprocessors.push(Box::new(preprocessor));
        self
    }

    /// Add a median blur with the given (odd) kernel size
    pub fn with_median_blur(self, kernel_size: u32) -> Self {
        self.add_preprocessor(MedianBlurPreprocessor { kernel_size })
    }

    /// Set the edge detector (replaces any existing one)
    pub fn set_edge_detector<E>(mut self, detector: E) -> Self
    where
        E: EdgeDetector + 'static,
    {
        self.edge_detector = Some(Box::new(detector));
        self
    }

    /// Set the contour extractor (replaces any existing one)
    pub fn set_contour_extractor<E>(mut self, extractor: E) -> Self
    where
        E: ContourExtractor + 'static,
    {
        self.contour_extractor = Some(Box::new(extractor));
        self
    }

    /// Set the contour filter (replaces any existing one)
    pub fn set_filter<F>(mut self, filter: F) -> Self
    where
        F: ContourFilter + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Set the polygon simplifier (replaces any existing one)
    pub fn set_simplifier<S>(mut self, simplifier: S) -> Self
    where
        S: PolygonSimplifier + 'static,
    {
        self.simplifier = Some(Box::new(simplifier));
        self
    }

    /// Set the shape classifier (replaces any existing one)
    pub fn set_classifier<C>(mut self, classifier: C) -> Self
    where
        C: ShapeClassifier + 'static,
    {
        self.classifier = Some(Box::new(classifier));
        self
    }

    /// Build the pipeline with default components if not specified
    pub fn build(self) -> Pipeline {
        Pipeline::new(
            self.preprocessors,
            self.edge_detector
                .unwrap_or_else(|| Box::new(CannyEdgeDetector::default())),
            self.contour_extractor
                .unwrap_or_else(|| Box::new(ImageprocContourExtractor)),
            self.filter
                .unwrap_or_else(|| Box::new(AreaContourFilter::default())),
            self.simplifier
                .unwrap_or_else(|| Box::new(DouglasPeuckerSimplifier::default())),
            self.classifier
                .unwrap_or_else(|| Box::new(VertexCountClassifier::default())),
        )
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
