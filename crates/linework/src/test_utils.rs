//! Shared analytic fixtures for image-based unit tests.
//!
//! Consolidated here so the normalization and pipeline tests draw their
//! stroke masks from one place instead of re-deriving band geometry in
//! every test module.

use crate::mask::Mask;

/// Render a closed circular stroke: pixels within `half_width` of the
/// circle of `radius` around the image centre.
pub(crate) fn ring_stroke_mask(w: u32, h: u32, radius: f64, half_width: f64) -> Mask {
    let cx = 0.5 * w as f64;
    let cy = 0.5 * h as f64;
    Mask::from_fn(w, h, |x, y| {
        let d = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt();
        (d - radius).abs() <= half_width
    })
}

/// Render a circular stroke whose half-width varies smoothly with angle,
/// from `min_half` (at theta = pi) to `max_half` (at theta = 0).
pub(crate) fn variable_ring_mask(
    w: u32,
    h: u32,
    radius: f64,
    min_half: f64,
    max_half: f64,
) -> Mask {
    let cx = 0.5 * w as f64;
    let cy = 0.5 * h as f64;
    Mask::from_fn(w, h, |x, y| {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        let d = (dx * dx + dy * dy).sqrt();
        let half = min_half + (max_half - min_half) * (1.0 + dy.atan2(dx).cos()) / 2.0;
        (d - radius).abs() <= half
    })
}

/// Render a filled disk of `radius` around the image centre.
pub(crate) fn filled_disk_mask(w: u32, h: u32, radius: f64) -> Mask {
    let cx = 0.5 * w as f64;
    let cy = 0.5 * h as f64;
    Mask::from_fn(w, h, |x, y| {
        (x as f64 - cx).powi(2) + (y as f64 - cy).powi(2) <= radius * radius
    })
}

/// Render a square outline stroke: a Chebyshev annulus of `half_width`
/// around the axis-aligned square of `half_side` centred in the image.
pub(crate) fn square_stroke_mask(w: u32, h: u32, half_side: f64, half_width: f64) -> Mask {
    let cx = 0.5 * w as f64;
    let cy = 0.5 * h as f64;
    Mask::from_fn(w, h, |x, y| {
        let d = (x as f64 - cx).abs().max((y as f64 - cy).abs());
        (d - half_side).abs() <= half_width
    })
}

/// Intersection-over-union of two equally sized masks. Two empty masks
/// count as identical.
pub(crate) fn mask_iou(a: &Mask, b: &Mask) -> f64 {
    assert_eq!(a.dimensions(), b.dimensions());
    let mut inter = 0usize;
    let mut union = 0usize;
    for y in 0..a.height() {
        for x in 0..a.width() {
            let fa = a.is_set(x, y);
            let fb = b.is_set(x, y);
            if fa && fb {
                inter += 1;
            }
            if fa || fb {
                union += 1;
            }
        }
    }
    if union == 0 {
        1.0
    } else {
        inter as f64 / union as f64
    }
}
