//! Sub-pixel boundary extraction from a binary mask.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma};
use nalgebra::Point2;
use tracing::{debug, info};

use crate::contour::Contour;
use crate::mask::Mask;
use crate::trace::{trace_iso_contours, ScalarField};

/// Controls for [`extract_contours`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExtractConfig {
    /// Integer upscale factor applied before tracing. Larger values give
    /// smoother sub-pixel boundaries at the cost of trace time.
    pub upscale: u32,
    /// Gaussian sigma (upscaled pixels) softening the field before tracing.
    pub blur_sigma: f32,
    /// Iso-level traced on the softened field, in [0, 1].
    pub iso_level: f32,
    /// Minimum raw ring length (points); shorter rings are pixel noise.
    pub min_points: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            upscale: 3,
            blur_sigma: 1.25,
            iso_level: 0.5,
            min_points: 30,
        }
    }
}

/// Extracts closed sub-pixel boundaries of the mask foreground.
///
/// The mask is upscaled with Catmull-Rom resampling, softened with a small
/// Gaussian and traced at `iso_level`; ring coordinates come back mapped to
/// mask pixel space. Rings shorter than `min_points` are discarded.
pub fn extract_contours(mask: &Mask, config: &ExtractConfig) -> Vec<Contour> {
    let scale = config.upscale.max(1);
    let (w, h) = mask.dimensions();

    let up = imageops::resize(mask.as_gray(), w * scale, h * scale, FilterType::CatmullRom);
    let mut field: ScalarField = ImageBuffer::new(w * scale, h * scale);
    for (x, y, px) in up.enumerate_pixels() {
        field.put_pixel(x, y, Luma([px[0] as f32 / 255.0]));
    }
    let field = if config.blur_sigma > 0.0 {
        imageproc::filter::gaussian_blur_f32(&field, config.blur_sigma)
    } else {
        field
    };

    let inv = 1.0 / scale as f64;
    let mut contours = Vec::new();
    for ring in trace_iso_contours(&field, config.iso_level) {
        if ring.len() < config.min_points {
            debug!("dropping raw ring with {} point(s)", ring.len());
            continue;
        }
        let points = ring
            .into_iter()
            .map(|p| Point2::new(p.x * inv, p.y * inv))
            .collect();
        contours.push(Contour::new(points));
    }
    info!("{} contour(s) extracted", contours.len());
    contours
}
