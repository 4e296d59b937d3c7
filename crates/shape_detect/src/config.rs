use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Side of the square median-blur neighbourhood.
pub const MEDIAN_KERNEL_SIZE: u32 = 5;
/// Canny hysteresis thresholds.
pub const CANNY_LOW_THRESHOLD: f32 = 50.0;
pub const CANNY_HIGH_THRESHOLD: f32 = 150.0;
/// Side of the square structuring element used for dilation and closing.
pub const MORPH_KERNEL_SIZE: u32 = 5;
/// Contours with a smaller area (square pixels) are speckle.
pub const MIN_CONTOUR_AREA: f64 = 400.0;
/// Contours covering more than this share of the image are the frame.
pub const MAX_AREA_RATIO: f64 = 0.85;
/// A nested contour this close in area to its parent is the same stroke.
pub const DUPLICATE_AREA_DELTA: f64 = 200.0;
/// Simplification tolerance as a share of the contour perimeter.
pub const EPSILON_RATIO: f64 = 0.015;
/// Minimum `4π·area/perimeter²` for a many-vertex outline to be a circle.
pub const CIRCULARITY_THRESHOLD: f64 = 0.8;
/// Open interval of bounding-box aspect ratios classified as square.
pub const SQUARE_RATIO_MIN: f64 = 0.95;
pub const SQUARE_RATIO_MAX: f64 = 1.05;

/// Every tunable threshold of the detection pipeline.
///
/// Missing fields fall back to the compiled-in defaults, so a config file only
/// needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DetectorConfig {
    /// Median blur kernel size (odd)
    #[schemars(range(min = 1, max = 31))]
    pub median_kernel_size: u32,
    pub canny_low_threshold: f32,
    pub canny_high_threshold: f32,
    /// Structuring element size for dilation and closing (odd)
    #[schemars(range(min = 1, max = 31))]
    pub morph_kernel_size: u32,
    pub min_contour_area: f64,
    #[schemars(range(min = 0.0, max = 1.0))]
    pub max_area_ratio: f64,
    pub duplicate_area_delta: f64,
    pub epsilon_ratio: f64,
    pub circularity_threshold: f64,
    pub square_ratio_min: f64,
    pub square_ratio_max: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            median_kernel_size: MEDIAN_KERNEL_SIZE,
            canny_low_threshold: CANNY_LOW_THRESHOLD,
            canny_high_threshold: CANNY_HIGH_THRESHOLD,
            morph_kernel_size: MORPH_KERNEL_SIZE,
            min_contour_area: MIN_CONTOUR_AREA,
            max_area_ratio: MAX_AREA_RATIO,
            duplicate_area_delta: DUPLICATE_AREA_DELTA,
            epsilon_ratio: EPSILON_RATIO,
            circularity_threshold: CIRCULARITY_THRESHOLD,
            square_ratio_min: SQUARE_RATIO_MIN,
            square_ratio_max: SQUARE_RATIO_MAX,
        }
    }
}

/// Radius of a square neighbourhood with the given side length.
///
/// Even sizes round down to the next odd size.
pub(crate) fn kernel_radius(size: u32) -> u32 {
    size.saturating_sub(1) / 2
}
