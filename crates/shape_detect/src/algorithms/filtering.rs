use crate::{
    config::{DUPLICATE_AREA_DELTA, MAX_AREA_RATIO, MIN_CONTOUR_AREA},
    traits::ContourFilter,
    types::Contour,
};

/// Area-based filter: drops speckle, the image frame, and the inner copy of a
/// stroke that was traced twice.
#[derive(Debug, Clone)]
pub struct AreaContourFilter {
    pub min_area: f64,
    /// Upper bound as a share of the image area
    pub max_area_ratio: f64,
    /// Nested contours closer than this in area to their parent are duplicates
    pub duplicate_area_delta: f64,
}

impl Default for AreaContourFilter {
    fn default() -> Self {
        Self {
            min_area: MIN_CONTOUR_AREA,
            max_area_ratio: MAX_AREA_RATIO,
            duplicate_area_delta: DUPLICATE_AREA_DELTA,
        }
    }
}

impl ContourFilter for AreaContourFilter {
    fn accept(&self, contours: &[Contour], index: usize, image_area: f64) -> bool {
        let Some(contour) = contours.get(index) else {
            return false;
        };
        let area = contour.area();

        if area < self.min_area {
            tracing::trace!(index, area, "rejected: too small");
            return false;
        }

        if area > self.max_area_ratio * image_area {
            tracing::trace!(index, area, "rejected: image frame");
            return false;
        }

        if let Some(parent) = contour.parent.and_then(|p| contours.get(p)) {
            let parent_area = parent.area();
            if (parent_area - area).abs() < self.duplicate_area_delta {
                tracing::trace!(index, area, parent_area, "rejected: duplicate of parent");
                return false;
            }
        }

        true
    }
}
