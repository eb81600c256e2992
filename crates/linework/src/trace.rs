//! Marching-squares iso-contour tracing on a scalar field.
//!
//! Grid points are pixel centres. The field is conceptually padded with a
//! zero-valued guard ring so foreground touching the image border still
//! produces closed rings; emitted coordinates compensate for the pad.
//!
//! Segments are directed so the above-level region lies on the left of the
//! travel direction. With y growing downward this makes outer boundaries
//! come out with negative shoelace area and holes positive, and the two
//! boundaries of an annulus wind in opposite directions.

use image::{ImageBuffer, Luma};
use nalgebra::Point2;
use std::collections::HashMap;

/// Dense f32 scalar field, one value per pixel.
pub type ScalarField = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Identity of a lattice edge between two neighbouring grid points, in
/// padded grid coordinates. Keying crossings by lattice edge (never by
/// floating-point position) is what keeps ring stitching exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EdgeKey {
    gx: u32,
    gy: u32,
    horizontal: bool,
}

struct Segment {
    to: EdgeKey,
    start: Point2<f64>,
}

/// Traces all closed iso-contours of `field` at `level`.
///
/// Returns one point ring per boundary, in row-major discovery order, with
/// no duplicated closing point. Coordinates are sub-pixel positions in the
/// field's own pixel space; crossings are linearly interpolated between the
/// adjacent grid point values.
pub fn trace_iso_contours(field: &ScalarField, level: f32) -> Vec<Vec<Point2<f64>>> {
    let (w, h) = field.dimensions();
    if w == 0 || h == 0 {
        return Vec::new();
    }
    let level = level as f64;

    // Padded grid: original pixel (x, y) sits at grid point (x + 1, y + 1).
    let gw = w + 2;
    let gh = h + 2;
    let value = |gx: u32, gy: u32| -> f64 {
        if (1..=w).contains(&gx) && (1..=h).contains(&gy) {
            field.get_pixel(gx - 1, gy - 1)[0] as f64
        } else {
            0.0
        }
    };
    let inside = |v: f64| v > level;
    let crossing = |key: EdgeKey| -> Point2<f64> {
        let v0 = value(key.gx, key.gy);
        let (v1, dx, dy) = if key.horizontal {
            (value(key.gx + 1, key.gy), 1.0, 0.0)
        } else {
            (value(key.gx, key.gy + 1), 0.0, 1.0)
        };
        // Exactly one endpoint is above level, so the denominator is nonzero.
        let t = (level - v0) / (v1 - v0);
        Point2::new(key.gx as f64 + t * dx, key.gy as f64 + t * dy)
    };

    let mut segments: Vec<Segment> = Vec::new();
    let mut by_start: HashMap<EdgeKey, usize> = HashMap::new();

    for cy in 0..gh - 1 {
        for cx in 0..gw - 1 {
            let tl = value(cx, cy);
            let tr = value(cx + 1, cy);
            let br = value(cx + 1, cy + 1);
            let bl = value(cx, cy + 1);
            let case = ((inside(tl) as u8) << 3)
                | ((inside(tr) as u8) << 2)
                | ((inside(br) as u8) << 1)
                | inside(bl) as u8;
            if case == 0 || case == 15 {
                continue;
            }

            let top = EdgeKey { gx: cx, gy: cy, horizontal: true };
            let bottom = EdgeKey { gx: cx, gy: cy + 1, horizontal: true };
            let left = EdgeKey { gx: cx, gy: cy, horizontal: false };
            let right = EdgeKey { gx: cx + 1, gy: cy, horizontal: false };

            let mut emit = |from: EdgeKey, to: EdgeKey| {
                by_start.insert(from, segments.len());
                segments.push(Segment { to, start: crossing(from) });
            };

            match case {
                1 => emit(bottom, left),
                2 => emit(right, bottom),
                3 => emit(right, left),
                4 => emit(top, right),
                6 => emit(top, bottom),
                7 => emit(top, left),
                8 => emit(left, top),
                9 => emit(bottom, top),
                11 => emit(right, top),
                12 => emit(left, right),
                13 => emit(bottom, right),
                14 => emit(left, bottom),
                // Saddles: the centre average decides whether the two
                // above-level corners join through the cell.
                5 => {
                    if inside(0.25 * (tl + tr + br + bl)) {
                        emit(top, left);
                        emit(bottom, right);
                    } else {
                        emit(top, right);
                        emit(bottom, left);
                    }
                }
                10 => {
                    if inside(0.25 * (tl + tr + br + bl)) {
                        emit(right, top);
                        emit(left, bottom);
                    } else {
                        emit(left, top);
                        emit(right, bottom);
                    }
                }
                _ => {}
            }
        }
    }

    // Stitch directed segments into rings. Discovery stays row-major; the
    // map is only ever probed, never iterated, so output order is stable.
    let mut rings = Vec::new();
    let mut consumed = vec![false; segments.len()];
    for first in 0..segments.len() {
        if consumed[first] {
            continue;
        }
        let mut ring = Vec::new();
        let mut idx = first;
        loop {
            consumed[idx] = true;
            let seg = &segments[idx];
            ring.push(Point2::new(seg.start.x - 1.0, seg.start.y - 1.0));
            idx = match by_start.get(&seg.to) {
                Some(&next) => next,
                None => {
                    // Cannot happen on a consistent field; keep whatever
                    // partial chain we got instead of losing the boundary.
                    tracing::warn!("contour chain broke after {} points", ring.len());
                    break;
                }
            };
            if idx == first {
                break;
            }
        }
        if ring.len() >= 3 {
            rings.push(ring);
        }
    }
    rings
}
