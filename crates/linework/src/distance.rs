//! Euclidean distance field of a mask.
//!
//! Distances are measured from each foreground pixel to the nearest
//! background pixel center, matching the usual EDT convention where a
//! foreground pixel touching the background reads 1.0. `imageproc` computes
//! distance to the nearest *non-zero* pixel, so the transform runs on the
//! inverted mask.

use image::{ImageBuffer, Luma};
use imageproc::distance_transform::euclidean_squared_distance_transform;

use crate::mask::Mask;

/// Per-pixel distance to the nearest background pixel; 0.0 on background.
pub fn distance_field(mask: &Mask) -> ImageBuffer<Luma<f64>, Vec<f64>> {
    let (w, h) = mask.dimensions();
    let mut inverted = image::GrayImage::new(w, h);
    for (dst, src) in inverted.iter_mut().zip(mask.as_gray().iter()) {
        *dst = if *src == 0 { 255 } else { 0 };
    }
    let mut squared = euclidean_squared_distance_transform(&inverted);
    for v in squared.iter_mut() {
        *v = v.sqrt();
    }
    squared
}
