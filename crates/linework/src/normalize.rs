//! Stroke-thickness normalization.
//!
//! Reduces a mask with irregular line width to one with uniform width:
//! thin to the centerline, measure the input's own median half-width from
//! the distance field, redraw the centerline as a constant-radius tube,
//! flatten the round caps left at open stroke ends, and clean the
//! dilation artifacts.

use crate::distance::distance_field;
use crate::mask::Mask;
use crate::morph::{close_cross, dilate_disk, fill_small_holes, open_cross, remove_small_regions};
use crate::skeleton::{endpoints, skeletonize};

/// Thickness normalization parameters.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NormalizeConfig {
    /// Factor applied to the measured median half-width before clamping.
    /// Slight shrink keeps redrawn strokes from looking blobby.
    pub shrink: f64,
    /// Lower clamp for the redraw radius in pixels.
    pub min_half_width: u32,
    /// Upper clamp for the redraw radius in pixels.
    pub max_half_width: u32,
    /// Median half-widths at or above this value indicate a filled
    /// silhouette rather than a stroke drawing; such masks are returned
    /// unchanged, since redrawing them from the skeleton would erase them.
    pub filled_median_half_width: f64,
    /// Steps walked along the skeleton from an endpoint when estimating the
    /// local tangent for cap flattening.
    pub cap_tangent_steps: usize,
    /// Extra carve radius beyond the stroke half-width when cutting caps.
    pub cap_margin: f64,
    /// Foreground regions smaller than this many pixels are removed after
    /// the redraw. Kept below the area of the smallest redraw disk so a
    /// legitimate dot is never dropped.
    pub min_region_area: usize,
    /// Enclosed holes smaller than this many pixels are filled.
    pub min_hole_area: usize,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            shrink: 0.85,
            min_half_width: 2,
            max_half_width: 4,
            filled_median_half_width: 6.0,
            cap_tangent_steps: 5,
            cap_margin: 1.0,
            min_region_area: 12,
            min_hole_area: 12,
        }
    }
}

/// Normalize stroke thickness; see the module doc for the stage sequence.
///
/// Returns the input unchanged when there is nothing to normalize: an empty
/// mask, or a filled silhouette caught by the median guard.
pub fn normalize_thickness(mask: &Mask, config: &NormalizeConfig) -> Mask {
    let skeleton = skeletonize(mask);
    let dist = distance_field(mask);

    let mut widths: Vec<f64> = skeleton
        .foreground()
        .map(|(x, y)| dist.get_pixel(x, y)[0])
        .collect();
    if widths.is_empty() {
        tracing::debug!("empty mask, normalization skipped");
        return mask.clone();
    }
    let median = median_in_place(&mut widths);
    if median >= config.filled_median_half_width {
        tracing::debug!(
            "median half-width {:.2} indicates a filled shape, normalization skipped",
            median
        );
        return mask.clone();
    }

    let radius = ((median * config.shrink).round() as i64)
        .clamp(config.min_half_width as i64, config.max_half_width as i64) as u32;

    let mut redrawn = dilate_disk(&skeleton, radius);

    let ends = endpoints(&skeleton);
    for &(ex, ey) in &ends {
        flatten_cap(&mut redrawn, &skeleton, (ex, ey), radius, config);
    }

    let cleaned = close_cross(&open_cross(&redrawn));
    let cleaned = remove_small_regions(&cleaned, config.min_region_area);
    let cleaned = fill_small_holes(&cleaned, config.min_hole_area);

    tracing::info!(
        "normalized stroke width: median {:.2}px -> radius {}px, {} caps flattened",
        median,
        radius,
        ends.len()
    );
    cleaned
}

/// Median of an unordered sample; averages the two middle values for even
/// lengths. The slice must be non-empty.
fn median_in_place(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        0.5 * (values[n / 2 - 1] + values[n / 2])
    }
}

/// Cut the redrawn mask flat at one skeleton endpoint.
///
/// The local tangent comes from walking a few steps along the skeleton away
/// from the endpoint; everything strictly forward of the endpoint along the
/// outward tangent, within radius + margin, is removed.
fn flatten_cap(
    redrawn: &mut Mask,
    skeleton: &Mask,
    endpoint: (u32, u32),
    radius: u32,
    config: &NormalizeConfig,
) {
    let (ex, ey) = (endpoint.0 as i64, endpoint.1 as i64);
    let mut visited: Vec<(i64, i64)> = vec![(ex, ey)];
    let (mut cx, mut cy) = (ex, ey);

    for _ in 0..config.cap_tangent_steps {
        let mut best: Option<(i64, i64, i64)> = None;
        for dy in -1..=1i64 {
            for dx in -1..=1i64 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (cx + dx, cy + dy);
                if !skeleton.is_set_checked(nx, ny) || visited.contains(&(nx, ny)) {
                    continue;
                }
                // Ties broken toward the neighbor farthest from the endpoint.
                let d2 = (nx - ex) * (nx - ex) + (ny - ey) * (ny - ey);
                if best.map_or(true, |(_, _, bd2)| d2 > bd2) {
                    best = Some((nx, ny, d2));
                }
            }
        }
        match best {
            Some((nx, ny, _)) => {
                visited.push((nx, ny));
                (cx, cy) = (nx, ny);
            }
            None => break,
        }
    }
    if (cx, cy) == (ex, ey) {
        return;
    }

    let inward_x = (cx - ex) as f64;
    let inward_y = (cy - ey) as f64;
    let norm = (inward_x * inward_x + inward_y * inward_y).sqrt();
    let (out_x, out_y) = (-inward_x / norm, -inward_y / norm);

    let r = radius as f64 + config.cap_margin;
    let x0 = ((ex as f64 - r).floor() as i64).max(0);
    let y0 = ((ey as f64 - r).floor() as i64).max(0);
    let x1 = ((ex as f64 + r).ceil() as i64).min(redrawn.width() as i64 - 1);
    let y1 = ((ey as f64 + r).ceil() as i64).min(redrawn.height() as i64 - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            if !redrawn.is_set(x as u32, y as u32) {
                continue;
            }
            let px = (x - ex) as f64;
            let py = (y - ey) as f64;
            if px * out_x + py * out_y > 0.0 && px * px + py * py <= r * r {
                redrawn.set(x as u32, y as u32, false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mask_iou, ring_stroke_mask, variable_ring_mask};

    #[test]
    fn empty_mask_returned_unchanged() {
        let mask = Mask::empty(64, 64);
        let out = normalize_thickness(&mask, &NormalizeConfig::default());
        assert_eq!(out, mask);
    }

    #[test]
    fn filled_disk_triggers_silhouette_guard() {
        let mask = Mask::from_fn(120, 120, |x, y| {
            let dx = x as f64 - 60.0;
            let dy = y as f64 - 60.0;
            dx * dx + dy * dy <= 30.0 * 30.0
        });
        let out = normalize_thickness(&mask, &NormalizeConfig::default());
        assert_eq!(out, mask);
    }

    #[test]
    fn uneven_closed_stroke_lands_in_clamp_range() {
        // Stroke width varies from ~1.5px to ~8px around the ring.
        let mask = variable_ring_mask(220, 220, 70.0, 0.8, 4.0);
        let config = NormalizeConfig::default();
        let out = normalize_thickness(&mask, &config);
        assert_ne!(out, mask);

        let skel = skeletonize(&out);
        let dist = distance_field(&out);
        let lo = config.min_half_width as f64;
        let hi = config.max_half_width as f64;
        let mut sampled = 0usize;
        for (x, y) in skel.foreground() {
            let d = dist.get_pixel(x, y)[0];
            assert!(
                (lo..=hi + 1.0).contains(&d),
                "half-width {} out of range at ({}, {})",
                d,
                x,
                y
            );
            sampled += 1;
        }
        assert!(sampled > 100);
    }

    #[test]
    fn renormalizing_own_output_is_stable() {
        // Closed stroke already near the target width: no caps, clean fixed
        // point, successive outputs overlap almost everywhere.
        let mask = ring_stroke_mask(240, 240, 90.0, 3.0);
        let config = NormalizeConfig::default();
        let first = normalize_thickness(&mask, &config);
        let second = normalize_thickness(&first, &config);
        let iou = mask_iou(&first, &second);
        assert!(iou >= 0.99, "iou {}", iou);
    }

    #[test]
    fn open_stroke_caps_are_cut_flat() {
        let mask = Mask::from_fn(120, 40, |x, y| (20..100).contains(&x) && (17..24).contains(&y));
        let config = NormalizeConfig::default();
        let out = normalize_thickness(&mask, &config);
        assert!(out.count_foreground() > 0);

        // The carve removes everything forward of the input skeleton's
        // endpoint; a round cap would overhang it by the redraw radius.
        let end_x = endpoints(&skeletonize(&mask))
            .iter()
            .map(|&(x, _)| x)
            .max()
            .unwrap();
        let max_x = out.foreground().map(|(x, _)| x).max().unwrap();
        assert!(
            max_x <= end_x + 1,
            "cap extends to {} past endpoint {}",
            max_x,
            end_x
        );

        // Flat face: the terminal column spans most of the stroke height
        // instead of tapering to the single pixel of a round cap.
        let face_height = out.foreground().filter(|&(x, _)| x == max_x).count();
        assert!(face_height >= 4, "terminal column height {}", face_height);
    }

    #[test]
    fn median_of_even_and_odd_samples() {
        assert_eq!(median_in_place(&mut [3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median_in_place(&mut [4.0, 1.0, 2.0, 3.0]), 2.5);
    }
}
