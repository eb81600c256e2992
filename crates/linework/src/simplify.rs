//! Polygon simplification and junk-contour rejection.

use nalgebra::Point2;
use tracing::debug;

use crate::contour::Contour;

/// Controls for [`simplify_contour`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SimplifyConfig {
    /// Douglas-Peucker tolerance (pixels): maximum chord deviation that
    /// still collapses a run of points.
    pub tolerance: f64,
    /// Minimum surviving vertex count; sparser polygons are rejected.
    pub min_vertices: usize,
    /// Minimum enclosed area (square pixels); smaller polygons are specks.
    pub min_area: f64,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            min_vertices: 8,
            min_area: 25.0,
        }
    }
}

/// Simplifies a closed contour with Douglas-Peucker and applies the vertex
/// and area gates. Returns `None` when the contour should be discarded.
///
/// The ring is anchored at its first point for the recursive split, which
/// matches treating it as an open polyline that returns to its start. A
/// duplicated closing point, if present, is removed first.
pub fn simplify_contour(contour: &Contour, config: &SimplifyConfig) -> Option<Contour> {
    let mut ring: &[Point2<f64>] = &contour.points;
    if ring.len() >= 2 {
        let first = ring[0];
        let last = ring[ring.len() - 1];
        if (last - first).norm() < 1e-8 {
            ring = &ring[..ring.len() - 1];
        }
    }
    if ring.len() < 3 {
        return None;
    }

    // Close the ring explicitly so both anchors of the top-level split are
    // the seam point; the trailing duplicate is excluded from the output.
    let mut closed: Vec<Point2<f64>> = ring.to_vec();
    closed.push(ring[0]);
    let mut keep = vec![false; closed.len()];
    keep[0] = true;
    keep[closed.len() - 1] = true;
    dp_mark(&closed, 0, closed.len() - 1, config.tolerance, &mut keep);

    let points: Vec<Point2<f64>> = (0..closed.len() - 1)
        .filter(|&i| keep[i])
        .map(|i| closed[i])
        .collect();

    if points.len() < config.min_vertices.max(3) {
        debug!("dropping contour: {} vertices after simplify", points.len());
        return None;
    }
    let simplified = Contour::new(points);
    if simplified.area() < config.min_area {
        debug!("dropping contour: area {:.1} below {:.1}", simplified.area(), config.min_area);
        return None;
    }
    Some(simplified)
}

/// Marks the points to keep between two anchors. Deviation is measured to
/// the infinite chord through the anchors; a zero-length chord falls back
/// to the distance to the anchor point itself.
fn dp_mark(points: &[Point2<f64>], first: usize, last: usize, tolerance: f64, keep: &mut [bool]) {
    if last <= first + 1 {
        return;
    }
    let a = points[first];
    let chord = points[last] - a;
    let len2 = chord.norm_squared();
    let mut worst = first;
    let mut worst_d2 = 0.0;
    for i in first + 1..last {
        let ap = points[i] - a;
        let d2 = if len2 > 0.0 {
            let cross = chord.x * ap.y - chord.y * ap.x;
            cross * cross / len2
        } else {
            ap.norm_squared()
        };
        if d2 > worst_d2 {
            worst_d2 = d2;
            worst = i;
        }
    }
    if worst_d2 > tolerance * tolerance {
        keep[worst] = true;
        dp_mark(points, first, worst, tolerance, keep);
        dp_mark(points, worst, last, tolerance, keep);
    }
}
