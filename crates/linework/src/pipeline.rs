//! End-to-end mask-to-outline pipeline.

use tracing::{debug, info};

use crate::config::VectorizeConfig;
use crate::extract::extract_contours;
use crate::fit::fit_path;
use crate::mask::Mask;
use crate::normalize::normalize_thickness;
use crate::simplify::simplify_contour;
use crate::smooth::smooth_contour;
use crate::{OutlinePath, VectorizeResult};

/// Runs the full pipeline on one mask.
///
/// Stages run in order: stroke-width normalization, sub-pixel boundary
/// extraction, per-contour smoothing, simplification with the junk gates,
/// spline fitting, then a stable largest-area-first sort. Contours that
/// fail a gate are dropped silently; an empty mask yields an empty result.
pub fn vectorize(mask: &Mask, config: &VectorizeConfig) -> VectorizeResult {
    let (width, height) = mask.dimensions();
    let normalized = normalize_thickness(mask, &config.normalize);
    let contours = extract_contours(&normalized, &config.extract);

    let mut outlines = Vec::new();
    for (idx, contour) in contours.iter().enumerate() {
        let smoothed = smooth_contour(contour, &config.smooth);
        let simplified = match simplify_contour(&smoothed, &config.simplify) {
            Some(c) => c,
            None => {
                debug!("contour {} rejected by simplification gates", idx);
                continue;
            }
        };
        let d = match fit_path(&simplified, &config.fit) {
            Some(d) => d,
            None => continue,
        };
        outlines.push(OutlinePath {
            area: simplified.area(),
            d,
        });
    }

    // Stable sort: equal areas keep extraction order, so reruns emit
    // byte-identical output.
    outlines.sort_by(|a, b| b.area.partial_cmp(&a.area).unwrap_or(std::cmp::Ordering::Equal));
    info!("{} outline(s) fitted", outlines.len());
    VectorizeResult {
        outlines,
        image_size: [width, height],
    }
}
