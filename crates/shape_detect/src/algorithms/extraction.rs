use image::GrayImage;
use imageproc::contours::{find_contours, BorderType, Contour as RawContour};
use crate::{error::Result, traits::ContourExtractor, types::Contour};

/// Imageproc-based contour extractor (Suzuki-Abe border following).
///
/// Only the outer border of each edge stroke is reported. The hole border of
/// a stroke traces the other side of the same line, so it is used for
/// nesting but never returned. A contour's parent is the outer border of the
/// stroke whose hole encloses it.
#[derive(Debug, Clone, Default)]
pub struct ImageprocContourExtractor;

impl ContourExtractor for ImageprocContourExtractor {
    fn extract_contours(&self, edges: &GrayImage) -> Result<Vec<Contour>> {
        let raw = find_contours::<i32>(edges);

        let mut output_index = vec![None; raw.len()];
        let mut next = 0;
        for (i, contour) in raw.iter().enumerate() {
            if contour.border_type == BorderType::Outer {
                output_index[i] = Some(next);
                next += 1;
            }
        }

        let contours = raw
            .iter()
            .enumerate()
            .filter(|(_, contour)| contour.border_type == BorderType::Outer)
            .map(|(i, contour)| {
                let points = contour.points.iter().map(|p| [p.x, p.y]).collect();
                let parent = enclosing_outer(&raw, i).and_then(|j| output_index[j]);
                Contour::new(points, parent)
            })
            .collect();

        Ok(contours)
    }
}

/// Nearest ancestor of `raw[index]` that is an outer border.
fn enclosing_outer(raw: &[RawContour<i32>], index: usize) -> Option<usize> {
    let mut current = raw[index].parent;
    while let Some(candidate) = current {
        if raw[candidate].border_type == BorderType::Outer {
            return Some(candidate);
        }
        current = raw[candidate].parent;
    }
    None
}
