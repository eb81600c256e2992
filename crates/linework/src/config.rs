//! Top-level pipeline configuration.

use crate::extract::ExtractConfig;
use crate::fit::FitConfig;
use crate::normalize::NormalizeConfig;
use crate::simplify::SimplifyConfig;
use crate::smooth::SmoothConfig;

/// Configuration for the whole mask-to-path pipeline, one sub-config per
/// stage. Defaults reproduce the tuned production values; individual
/// fields can be overridden after construction, and stage blocks omitted
/// from a serialized config fall back to their defaults.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VectorizeConfig {
    /// Stroke-width normalization controls (stage 1).
    pub normalize: NormalizeConfig,
    /// Boundary extraction controls (stage 2).
    pub extract: ExtractConfig,
    /// Contour smoothing controls (stage 3).
    pub smooth: SmoothConfig,
    /// Polygon simplification and rejection gates (stage 4).
    pub simplify: SimplifyConfig,
    /// Spline fitting controls (stage 5).
    pub fit: FitConfig,
}
