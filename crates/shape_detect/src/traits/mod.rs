use image::GrayImage;
use crate::{
    error::Result,
    types::{Contour, ShapeKind},
};

/// Trait for grayscale preprocessing algorithms
pub trait ImagePreprocessor: Send + Sync {
    /// Preprocess the input image (e.g., denoise)
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage>;
}

/// Trait for edge extraction algorithms
pub trait EdgeDetector: Send + Sync {
    /// Produce a binary edge map (0 or 255) with the input's dimensions
    fn detect_edges(&self, image: &GrayImage) -> Result<GrayImage>;
}

/// Trait for contour extraction algorithms
pub trait ContourExtractor: Send + Sync {
    /// Extract closed contours and their containment forest from an edge map
    fn extract_contours(&self, edges: &GrayImage) -> Result<Vec<Contour>>;
}

/// Trait for contour acceptance rules
pub trait ContourFilter: Send + Sync {
    /// Whether `contours[index]` should become a shape
    fn accept(&self, contours: &[Contour], index: usize, image_area: f64) -> bool;
}

/// Trait for polygon simplification algorithms
pub trait PolygonSimplifier: Send + Sync {
    /// Reduce a closed contour to its significant vertices
    fn simplify(&self, contour: &Contour) -> Vec<[i32; 2]>;
}

/// Trait for shape classification rules
pub trait ShapeClassifier: Send + Sync {
    /// Label a simplified polygon, consulting the original contour where needed
    fn classify(&self, polygon: &[[i32; 2]], contour: &Contour) -> ShapeKind;
}
