//! linework — raster mask to smooth vector outline conversion.
//!
//! Takes a binary lineart mask (a scanned or rasterized logo, a stroke
//! drawing) and produces closed cubic-Bezier outlines ready for SVG.
//! The pipeline stages are:
//!
//! 1. **Normalize** – skeleton-based stroke-width equalization: centerline
//!    extraction, half-width estimation from the distance field, redraw at
//!    a fixed radius, cap flattening and speck/pinhole cleanup.
//! 2. **Extract** – upscale, blur and trace the mask boundary at sub-pixel
//!    precision as closed polylines.
//! 3. **Smooth** – periodic Gaussian filtering along each contour.
//! 4. **Simplify** – Douglas-Peucker vertex reduction plus junk gates.
//! 5. **Fit** – Catmull-Rom derived cubic Beziers with overshoot and
//!    sharp-corner safeguards, emitted as SVG path data.
//! 6. **Order** – deterministic largest-area-first output.
//!
//! # Public API
//! The stable surface is intentionally small:
//! - [`Vectorizer`] as the primary entry point
//! - [`VectorizeConfig`] and the per-stage configs for tuning
//! - [`Mask`] on the input side, [`VectorizeResult`] on the output side
//! - [`render_symbol_svg`]/[`render_editable_svg`] and [`MotifSpec`] as
//!   output companions
//!
//! Grid morphology and tracing internals stay private.

mod api;
mod config;
mod contour;
mod distance;
mod extract;
mod fit;
mod mask;
mod morph;
mod motif;
mod normalize;
mod pipeline;
mod simplify;
mod skeleton;
mod smooth;
mod svg;
#[cfg(test)]
mod test_utils;
mod trace;

pub use api::Vectorizer;
pub use config::VectorizeConfig;
pub use contour::Contour;
pub use extract::{extract_contours, ExtractConfig};
pub use fit::{fit_path, FitConfig};
pub use mask::{Mask, MaskError};
pub use motif::MotifSpec;
pub use normalize::{normalize_thickness, NormalizeConfig};
pub use pipeline::vectorize;
pub use simplify::{simplify_contour, SimplifyConfig};
pub use smooth::{smooth_contour, SmoothConfig};
pub use svg::{render_editable_svg, render_symbol_svg, SvgStyle};
pub use trace::{trace_iso_contours, ScalarField};

/// One closed outline produced by the pipeline.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OutlinePath {
    /// Enclosed area (square pixels) of the simplified polygon.
    pub area: f64,
    /// SVG path data (`M`, one `C` per segment, `Z`) of the fitted spline.
    pub d: String,
}

/// Ordered pipeline output for one mask.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct VectorizeResult {
    /// Fitted outlines, largest enclosed area first.
    pub outlines: Vec<OutlinePath>,
    /// Width and height of the pixel space the path coordinates live in.
    pub image_size: [u32; 2],
}

impl VectorizeResult {
    /// Construct an empty result for a mask with the provided dimensions.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            outlines: Vec::new(),
            image_size: [width, height],
        }
    }

    /// Path data strings in output order, without areas.
    pub fn path_data(&self) -> Vec<String> {
        self.outlines.iter().map(|o| o.d.clone()).collect()
    }
}
