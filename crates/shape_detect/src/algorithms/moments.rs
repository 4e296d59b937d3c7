/// Spatial moments of the region enclosed by a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
}

impl Moments {
    /// Integrate the zeroth and first moments over the polygon interior
    /// using Green's theorem on its edges.
    pub fn of_polygon(points: &[[i32; 2]]) -> Self {
        let n = points.len();
        if n < 3 {
            return Self::default();
        }

        let mut moments = Self::default();
        for i in 0..n {
            let [x0, y0] = points[i];
            let [x1, y1] = points[(i + 1) % n];
            let (x0, y0, x1, y1) = (x0 as f64, y0 as f64, x1 as f64, y1 as f64);

            let cross = x0 * y1 - x1 * y0;
            moments.m00 += cross;
            moments.m10 += cross * (x0 + x1);
            moments.m01 += cross * (y0 + y1);
        }

        // Orientation cancels in the centroid ratios; keep M00 non-negative.
        let sign = if moments.m00 < 0.0 { -1.0 } else { 1.0 };
        moments.m00 *= sign / 2.0;
        moments.m10 *= sign / 6.0;
        moments.m01 *= sign / 6.0;
        moments
    }

    /// Area-weighted centroid truncated to integer pixels, or `None` when the
    /// region has no area.
    pub fn centroid(&self) -> Option<(i32, i32)> {
        if self.m00 == 0.0 {
            return None;
        }
        Some(((self.m10 / self.m00) as i32, (self.m01 / self.m00) as i32))
    }
}
