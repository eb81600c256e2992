//! Binary morphology on [`Mask`] values.
//!
//! Thin wrappers over `imageproc` where it has the right primitive (opening,
//! closing, component labelling) plus the disk stamping used to redraw a
//! skeleton at constant stroke width. Every function returns a new mask.

use image::{GrayImage, Luma};
use imageproc::distance_transform::Norm;
use imageproc::region_labelling::{connected_components, Connectivity};

use crate::mask::Mask;

/// Dilate by a Euclidean disk: every foreground pixel is replaced by the
/// disk of the given radius (`dx^2 + dy^2 <= r^2`) centered on it.
pub fn dilate_disk(mask: &Mask, radius: u32) -> Mask {
    let (w, h) = mask.dimensions();
    let r = radius as i64;
    let r2 = r * r;
    let mut offsets = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                offsets.push((dx, dy));
            }
        }
    }

    let mut out = Mask::empty(w, h);
    for (x, y) in mask.foreground() {
        for &(dx, dy) in &offsets {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx >= 0 && ny >= 0 && nx < w as i64 && ny < h as i64 {
                out.set(nx as u32, ny as u32, true);
            }
        }
    }
    out
}

/// Morphological opening with a 1-pixel cross element. Removes isolated
/// specks and shaves single-pixel jags.
pub fn open_cross(mask: &Mask) -> Mask {
    Mask::from_binary_gray(imageproc::morphology::open(mask.as_gray(), Norm::L1, 1))
}

/// Morphological closing with a 1-pixel cross element. Fills pinholes and
/// single-pixel notches.
pub fn close_cross(mask: &Mask) -> Mask {
    Mask::from_binary_gray(imageproc::morphology::close(mask.as_gray(), Norm::L1, 1))
}

/// Drop 8-connected foreground regions smaller than `min_area` pixels.
pub fn remove_small_regions(mask: &Mask, min_area: usize) -> Mask {
    let labels = connected_components(mask.as_gray(), Connectivity::Eight, Luma([0u8]));
    let areas = label_areas(&labels);
    let (w, h) = mask.dimensions();
    Mask::from_fn(w, h, |x, y| {
        let label = labels.get_pixel(x, y)[0] as usize;
        label != 0 && areas[label] >= min_area
    })
}

/// Fill enclosed background holes smaller than `min_area` pixels.
///
/// Background components touching the image border are outside, not holes,
/// and are never filled. 4-connectivity on the background complements the
/// 8-connectivity used for foreground regions.
pub fn fill_small_holes(mask: &Mask, min_area: usize) -> Mask {
    let (w, h) = mask.dimensions();
    if w == 0 || h == 0 {
        return mask.clone();
    }
    let mut inverted = GrayImage::new(w, h);
    for (dst, src) in inverted.iter_mut().zip(mask.as_gray().iter()) {
        *dst = if *src == 0 { 255 } else { 0 };
    }
    let labels = connected_components(&inverted, Connectivity::Four, Luma([0u8]));
    let areas = label_areas(&labels);

    let mut touches_border = vec![false; areas.len()];
    for x in 0..w {
        for &y in &[0, h - 1] {
            touches_border[labels.get_pixel(x, y)[0] as usize] = true;
        }
    }
    for y in 0..h {
        for &x in &[0, w - 1] {
            touches_border[labels.get_pixel(x, y)[0] as usize] = true;
        }
    }

    Mask::from_fn(w, h, |x, y| {
        if mask.is_set(x, y) {
            return true;
        }
        let label = labels.get_pixel(x, y)[0] as usize;
        label != 0 && !touches_border[label] && areas[label] < min_area
    })
}

/// Pixel count per component label; index 0 is the background.
fn label_areas(labels: &image::ImageBuffer<Luma<u32>, Vec<u32>>) -> Vec<usize> {
    let max_label = labels.iter().copied().max().unwrap_or(0) as usize;
    let mut areas = vec![0usize; max_label + 1];
    for &label in labels.iter() {
        areas[label as usize] += 1;
    }
    areas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dilate_disk_of_point_has_disk_area() {
        let mut mask = Mask::empty(21, 21);
        mask.set(10, 10, true);
        let out = dilate_disk(&mask, 3);
        // |{(dx,dy) : dx^2+dy^2 <= 9}| = 29
        assert_eq!(out.count_foreground(), 29);
        assert!(out.is_set(13, 10));
        assert!(!out.is_set(14, 10));
    }

    #[test]
    fn dilate_disk_zero_radius_is_identity() {
        let mask = Mask::from_fn(9, 9, |x, y| x == 4 && y == 4);
        assert_eq!(dilate_disk(&mask, 0), mask);
    }

    #[test]
    fn open_cross_removes_isolated_speck() {
        let mut mask = Mask::from_fn(20, 20, |x, y| (5..15).contains(&x) && (5..15).contains(&y));
        mask.set(1, 1, true);
        let out = open_cross(&mask);
        assert!(!out.is_set(1, 1));
        assert!(out.is_set(9, 9));
    }

    #[test]
    fn close_cross_fills_pinhole() {
        let mask = Mask::from_fn(20, 20, |x, y| {
            (5..15).contains(&x) && (5..15).contains(&y) && (x, y) != (9, 9)
        });
        let out = close_cross(&mask);
        assert!(out.is_set(9, 9));
    }

    #[test]
    fn remove_small_regions_keeps_only_large() {
        let mask = Mask::from_fn(30, 30, |x, y| {
            let blob = (5..15).contains(&x) && (5..15).contains(&y);
            let speck = (22..24).contains(&x) && (22..24).contains(&y);
            blob || speck
        });
        let out = remove_small_regions(&mask, 10);
        assert_eq!(out.count_foreground(), 100);
    }

    #[test]
    fn fill_small_holes_ignores_outside_and_large_holes() {
        // Ring with a 1px pinhole and a large 6x6 interior hole.
        let mask = Mask::from_fn(30, 30, |x, y| {
            let inside = (3..27).contains(&x) && (3..27).contains(&y);
            let large_hole = (12..18).contains(&x) && (12..18).contains(&y);
            let pinhole = (x, y) == (5, 5);
            inside && !large_hole && !pinhole
        });
        let out = fill_small_holes(&mask, 12);
        assert!(out.is_set(5, 5));
        assert!(!out.is_set(14, 14));
        assert!(!out.is_set(0, 0));
    }
}
