use image::GrayImage;
use imageproc::{
    distance_transform::Norm,
    edges::canny,
    morphology::{close, dilate},
};
use crate::{
    config::{kernel_radius, CANNY_HIGH_THRESHOLD, CANNY_LOW_THRESHOLD, MORPH_KERNEL_SIZE},
    error::Result,
    traits::EdgeDetector,
};

/// Canny edge detector followed by morphological stroke strengthening
#[derive(Debug, Clone)]
pub struct CannyEdgeDetector {
    pub low_threshold: f32,
    pub high_threshold: f32,
    /// Side of the square structuring element (odd); 1 disables strengthening
    pub morph_kernel_size: u32,
}

impl Default for CannyEdgeDetector {
    fn default() -> Self {
        Self {
            low_threshold: CANNY_LOW_THRESHOLD,
            high_threshold: CANNY_HIGH_THRESHOLD,
            morph_kernel_size: MORPH_KERNEL_SIZE,
        }
    }
}

impl EdgeDetector for CannyEdgeDetector {
    fn detect_edges(&self, image: &GrayImage) -> Result<GrayImage> {
        let edges = canny(image, self.low_threshold, self.high_threshold);
        Ok(strengthen_edges(&edges, self.morph_kernel_size))
    }
}

/// Dilate, then close, with a square structuring element.
///
/// Dilation bridges small gaps in a stroke; closing fuses the parallel edge
/// pairs Canny reports on either side of a thin line into one band.
pub fn strengthen_edges(edges: &GrayImage, kernel_size: u32) -> GrayImage {
    let radius = kernel_radius(kernel_size);
    if radius == 0 {
        return edges.clone();
    }

    // An L-infinity ball of radius k is a (2k+1)x(2k+1) square.
    let k = u8::try_from(radius).unwrap_or(u8::MAX);
    let dilated = dilate(edges, Norm::LInf, k);
    close(&dilated, Norm::LInf, k)
}
