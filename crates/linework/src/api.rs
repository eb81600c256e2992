//! High-level vectorization API.
//!
//! [`Vectorizer`] is the primary entry point for converting raster masks
//! into smooth closed outlines. It wraps a [`VectorizeConfig`] and adds
//! convenience methods for common inputs.

use image::GrayImage;

use crate::config::VectorizeConfig;
use crate::mask::Mask;
use crate::pipeline;
use crate::VectorizeResult;

/// Primary vectorization interface.
///
/// Encapsulates the pipeline configuration. Create once, vectorize many
/// masks.
///
/// # Examples
///
/// ```
/// use linework::Vectorizer;
/// use image::GrayImage;
///
/// let vectorizer = Vectorizer::new();
/// let image = GrayImage::new(64, 64);
/// let result = vectorizer.vectorize_image(&image);
/// assert!(result.outlines.is_empty());
/// ```
pub struct Vectorizer {
    config: VectorizeConfig,
}

impl Vectorizer {
    /// Create a vectorizer with the default tuned configuration.
    pub fn new() -> Self {
        Self {
            config: VectorizeConfig::default(),
        }
    }

    /// Create with full config control.
    pub fn with_config(config: VectorizeConfig) -> Self {
        Self { config }
    }

    /// Access the current configuration.
    pub fn config(&self) -> &VectorizeConfig {
        &self.config
    }

    /// Mutable access to configuration for post-construction tuning.
    pub fn config_mut(&mut self) -> &mut VectorizeConfig {
        &mut self.config
    }

    /// Vectorize a binary mask.
    pub fn vectorize(&self, mask: &Mask) -> VectorizeResult {
        pipeline::vectorize(mask, &self.config)
    }

    /// Threshold a grayscale image at the channel midpoint and vectorize
    /// the resulting mask.
    pub fn vectorize_image(&self, image: &GrayImage) -> VectorizeResult {
        self.vectorize(&Mask::from_image(image))
    }
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::new()
    }
}
