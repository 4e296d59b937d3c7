use image::GrayImage;
use crate::{
    config::{kernel_radius, MEDIAN_KERNEL_SIZE},
    error::{Result, ShapeError},
    traits::ImagePreprocessor,
};

/// Decode encoded image bytes into a single-channel intensity grid.
///
/// Any format the `image` crate recognises is accepted. Empty payloads,
/// undecodable bytes and zero-sized images are rejected as `InvalidImage`.
pub fn decode_grayscale(bytes: &[u8]) -> Result<GrayImage> {
    if bytes.is_empty() {
        return Err(ShapeError::InvalidImage("empty payload".to_string()));
    }

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| ShapeError::InvalidImage(e.to_string()))?;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(ShapeError::InvalidImage(format!(
            "zero dimensions ({}x{})",
            decoded.width(),
            decoded.height()
        )));
    }

    Ok(decoded.to_luma8())
}

/// Median blur preprocessor for salt-and-pepper noise
#[derive(Debug, Clone)]
pub struct MedianBlurPreprocessor {
    /// Side of the square neighbourhood (odd)
    pub kernel_size: u32,
}

impl Default for MedianBlurPreprocessor {
    fn default() -> Self {
        Self { kernel_size: MEDIAN_KERNEL_SIZE }
    }
}

impl ImagePreprocessor for MedianBlurPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        let radius = kernel_radius(self.kernel_size);
        if radius == 0 {
            return Ok(image.clone());
        }
        Ok(imageproc::filter::median_filter(image, radius, radius))
    }
}
