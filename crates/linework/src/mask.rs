//! Binary mask type shared by every pipeline stage.
//!
//! A [`Mask`] wraps a [`GrayImage`] whose pixels are strictly 0 or 255, so it
//! can be handed to `imageproc` routines without conversion while still
//! reading as a boolean grid. Stages never mutate a mask they received; they
//! build and return new ones.

use image::{GrayImage, Luma};

/// Errors from building a [`Mask`] out of raw parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Pixel buffer length does not match `width * height`.
    ShapeMismatch {
        width: u32,
        height: u32,
        len: usize,
    },
    /// Width or height is zero.
    ZeroDimension { width: u32, height: u32 },
}

impl std::fmt::Display for MaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaskError::ShapeMismatch { width, height, len } => write!(
                f,
                "mask buffer has {} pixels but dimensions are {}x{} ({} expected)",
                len,
                width,
                height,
                (*width as u64) * (*height as u64)
            ),
            MaskError::ZeroDimension { width, height } => {
                write!(f, "mask dimensions must be non-zero, got {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for MaskError {}

/// Binary foreground/background raster grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    img: GrayImage,
}

impl Mask {
    /// Threshold an 8-bit grayscale image: values above the channel midpoint
    /// (127) are foreground.
    pub fn from_image(gray: &GrayImage) -> Self {
        let mut img = GrayImage::new(gray.width(), gray.height());
        for (dst, src) in img.iter_mut().zip(gray.iter()) {
            *dst = if *src > 127 { 255 } else { 0 };
        }
        Self { img }
    }

    /// Build a mask from a row-major boolean buffer.
    ///
    /// Fails fast on caller contract violations: a buffer whose length does
    /// not match the dimensions, or a zero dimension.
    pub fn from_raw(width: u32, height: u32, data: &[bool]) -> Result<Self, MaskError> {
        if width == 0 || height == 0 {
            return Err(MaskError::ZeroDimension { width, height });
        }
        let expected = (width as u64) * (height as u64);
        if data.len() as u64 != expected {
            return Err(MaskError::ShapeMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        let mut img = GrayImage::new(width, height);
        for (dst, &on) in img.iter_mut().zip(data.iter()) {
            *dst = if on { 255 } else { 0 };
        }
        Ok(Self { img })
    }

    /// Build a mask by evaluating a predicate at every pixel.
    pub fn from_fn<F: FnMut(u32, u32) -> bool>(width: u32, height: u32, mut f: F) -> Self {
        let img = GrayImage::from_fn(width, height, |x, y| {
            if f(x, y) {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        });
        Self { img }
    }

    /// All-background mask of the given size.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            img: GrayImage::new(width, height),
        }
    }

    /// Wrap a 0/255 grayscale buffer produced by a morphology routine.
    pub(crate) fn from_binary_gray(img: GrayImage) -> Self {
        Self { img }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// Foreground test. Panics outside the grid, like `GrayImage::get_pixel`.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.img.get_pixel(x, y)[0] != 0
    }

    /// Bounds-checked foreground test; out-of-grid coordinates are background.
    pub fn is_set_checked(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return false;
        }
        self.is_set(x as u32, y as u32)
    }

    pub fn set(&mut self, x: u32, y: u32, on: bool) {
        self.img.put_pixel(x, y, Luma([if on { 255 } else { 0 }]));
    }

    pub fn count_foreground(&self) -> usize {
        self.img.iter().filter(|&&v| v != 0).count()
    }

    /// Row-major iterator over foreground pixel coordinates.
    pub fn foreground(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let w = self.width();
        self.img
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0)
            .map(move |(i, _)| ((i as u32) % w, (i as u32) / w))
    }

    /// Borrow the underlying 0/255 grayscale buffer.
    pub fn as_gray(&self) -> &GrayImage {
        &self.img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_shape_mismatch() {
        let err = Mask::from_raw(4, 4, &[true; 15]).unwrap_err();
        assert!(matches!(err, MaskError::ShapeMismatch { len: 15, .. }));
    }

    #[test]
    fn from_raw_rejects_zero_dimension() {
        let err = Mask::from_raw(0, 4, &[]).unwrap_err();
        assert!(matches!(err, MaskError::ZeroDimension { width: 0, .. }));
    }

    #[test]
    fn from_image_thresholds_at_channel_midpoint() {
        let mut gray = GrayImage::new(3, 1);
        gray.put_pixel(0, 0, Luma([127]));
        gray.put_pixel(1, 0, Luma([128]));
        gray.put_pixel(2, 0, Luma([255]));
        let mask = Mask::from_image(&gray);
        assert!(!mask.is_set(0, 0));
        assert!(mask.is_set(1, 0));
        assert!(mask.is_set(2, 0));
    }

    #[test]
    fn foreground_iterates_row_major() {
        let mask = Mask::from_fn(3, 2, |x, y| (x, y) == (2, 0) || (x, y) == (0, 1));
        let px: Vec<(u32, u32)> = mask.foreground().collect();
        assert_eq!(px, vec![(2, 0), (0, 1)]);
        assert_eq!(mask.count_foreground(), 2);
    }

    #[test]
    fn is_set_checked_treats_outside_as_background() {
        let mask = Mask::from_fn(2, 2, |_, _| true);
        assert!(mask.is_set_checked(1, 1));
        assert!(!mask.is_set_checked(-1, 0));
        assert!(!mask.is_set_checked(0, 2));
    }
}
