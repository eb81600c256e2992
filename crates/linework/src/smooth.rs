//! Periodic Gaussian smoothing of closed contours.

use nalgebra::Point2;

use crate::contour::Contour;

/// Controls for [`smooth_contour`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SmoothConfig {
    /// Gaussian sigma in contour samples. Zero disables smoothing.
    pub sigma: f64,
}

impl Default for SmoothConfig {
    fn default() -> Self {
        Self { sigma: 1.8 }
    }
}

/// Normalized Gaussian kernel truncated at four sigma.
fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (4.0 * sigma + 0.5) as i64;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f64> = (-radius..=radius)
        .map(|i| (-((i * i) as f64) / denom).exp())
        .collect();
    let sum: f64 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Smooths a closed contour by convolving x and y with a Gaussian kernel.
///
/// Indices wrap around the ring, so the seam between the last and first
/// point is treated exactly like any interior stretch.
pub fn smooth_contour(contour: &Contour, config: &SmoothConfig) -> Contour {
    let n = contour.len();
    if n == 0 || config.sigma <= 0.0 {
        return contour.clone();
    }
    let kernel = gaussian_kernel(config.sigma);
    let radius = (kernel.len() / 2) as i64;
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let mut x = 0.0;
        let mut y = 0.0;
        for (j, w) in kernel.iter().enumerate() {
            let idx = (i as i64 + j as i64 - radius).rem_euclid(n as i64) as usize;
            x += w * contour.points[idx].x;
            y += w * contour.points[idx].y;
        }
        points.push(Point2::new(x, y));
    }
    Contour::new(points)
}
