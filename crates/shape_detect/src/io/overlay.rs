use image::{Rgb, RgbImage};
use std::path::Path;
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use crate::{error::Result, types::DetectionResult};

const OUTER_COLOR: Rgb<u8> = Rgb([0, 200, 0]);
const INNER_COLOR: Rgb<u8> = Rgb([230, 120, 0]);
const CENTER_COLOR: Rgb<u8> = Rgb([220, 0, 0]);

/// Draw every detected outline and its centroid over a copy of `image`.
///
/// Top-level shapes are green, nested ones orange.
pub fn render_overlay(image: &RgbImage, result: &DetectionResult) -> RgbImage {
    let mut canvas = image.clone();

    for shape in &result.shapes {
        let color = if shape.is_inner { INNER_COLOR } else { OUTER_COLOR };
        let n = shape.points.len();

        for i in 0..n {
            let [x0, y0] = shape.points[i];
            let [x1, y1] = shape.points[(i + 1) % n];
            draw_line_segment_mut(
                &mut canvas,
                (x0 as f32, y0 as f32),
                (x1 as f32, y1 as f32),
                color,
            );
        }

        draw_filled_circle_mut(&mut canvas, (shape.center_x, shape.center_y), 3, CENTER_COLOR);
    }

    canvas
}

/// Decode `bytes`, draw the overlay and write it to `path` (format from extension)
pub fn save_overlay(bytes: &[u8], result: &DetectionResult, path: impl AsRef<Path>) -> Result<()> {
    let source = image::load_from_memory(bytes)?.to_rgb8();
    render_overlay(&source, result).save(path)?;
    Ok(())
}
