use geo_types::{Coord, LineString};
use crate::{config::EPSILON_RATIO, traits::PolygonSimplifier, types::Contour};

/// Douglas-Peucker simplifier with a tolerance relative to contour length.
///
/// The absolute tolerance is `epsilon_ratio * perimeter`, so small and large
/// drawings of the same figure simplify to the same vertex count.
#[derive(Debug, Clone)]
pub struct DouglasPeuckerSimplifier {
    pub epsilon_ratio: f64,
}

impl Default for DouglasPeuckerSimplifier {
    fn default() -> Self {
        Self { epsilon_ratio: EPSILON_RATIO }
    }
}

impl PolygonSimplifier for DouglasPeuckerSimplifier {
    fn simplify(&self, contour: &Contour) -> Vec<[i32; 2]> {
        let tolerance = self.epsilon_ratio * contour.perimeter();
        simplify_closed(&contour.points, tolerance)
    }
}

/// Douglas-Peucker over a closed ring.
///
/// The ring is cut at two mutually distant points so the arbitrary tracing
/// start never survives as a spurious vertex. Both halves are simplified with
/// geo's implementation and joined; the closing vertex is not repeated.
pub fn simplify_closed(points: &[[i32; 2]], tolerance: f64) -> Vec<[i32; 2]> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let first = farthest_from(points, points[0]);
    let second = farthest_from(points, points[first]);
    if first == second {
        return vec![points[first]];
    }

    let (lo, hi) = (first.min(second), first.max(second));
    let wrapped: Vec<[i32; 2]> = points[hi..]
        .iter()
        .chain(points[..=lo].iter())
        .copied()
        .collect();

    let mut vertices = simplify_open(&points[lo..=hi], tolerance);
    vertices.pop();
    let mut tail = simplify_open(&wrapped, tolerance);
    tail.pop();
    vertices.extend(tail);
    vertices
}

fn simplify_open(points: &[[i32; 2]], tolerance: f64) -> Vec<[i32; 2]> {
    use geo::Simplify;

    let coords: Vec<Coord<f64>> = points
        .iter()
        .map(|&[x, y]| Coord { x: x as f64, y: y as f64 })
        .collect();
    let simplified = LineString::new(coords).simplify(&tolerance);

    simplified
        .coords()
        .map(|coord| [coord.x.round() as i32, coord.y.round() as i32])
        .collect()
}

/// Index of the point farthest from `origin`; the earliest wins ties.
fn farthest_from(points: &[[i32; 2]], origin: [i32; 2]) -> usize {
    let mut best = 0;
    let mut best_distance = -1i64;

    for (i, &[x, y]) in points.iter().enumerate() {
        let dx = (x - origin[0]) as i64;
        let dy = (y - origin[1]) as i64;
        let distance = dx * dx + dy * dy;
        if distance > best_distance {
            best = i;
            best_distance = distance;
        }
    }

    best
}
