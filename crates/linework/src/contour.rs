//! Closed polyline contours and their basic geometry.

use nalgebra::Point2;

/// A closed polyline in mask pixel coordinates.
///
/// Points are stored in trace order; the last point connects back to the
/// first implicitly, with no duplicated closing point.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Point2<f64>>,
}

impl Contour {
    pub fn new(points: Vec<Point2<f64>>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace sum over the closed ring. The sign encodes winding: with
    /// y growing downward, outer boundaries traced interior-left come out
    /// negative and holes positive.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Enclosed polygon area, always non-negative.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Total edge length of the closed ring.
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| (self.points[(i + 1) % n] - self.points[i]).norm())
            .sum()
    }
}

/// Shoelace sum of a closed ring given without a duplicated endpoint.
pub fn signed_area(points: &[Point2<f64>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square_cw_screen() -> Contour {
        // Screen-clockwise in y-down coordinates.
        Contour::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn square_area_and_perimeter() {
        let c = unit_square_cw_screen();
        assert!((c.area() - 1.0).abs() < 1e-12);
        assert!((c.perimeter() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn winding_flips_sign() {
        let c = unit_square_cw_screen();
        let mut reversed = c.points.clone();
        reversed.reverse();
        let r = Contour::new(reversed);
        assert!((c.signed_area() + r.signed_area()).abs() < 1e-12);
        assert!(c.signed_area() != 0.0);
    }

    #[test]
    fn degenerate_rings_have_zero_area() {
        assert_eq!(signed_area(&[]), 0.0);
        assert_eq!(
            signed_area(&[Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)]),
            0.0
        );
    }
}
