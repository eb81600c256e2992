//! Topology-preserving thinning to a 1-pixel centerline.
//!
//! Zhang–Suen two-subiteration thinning: each pass marks boundary pixels
//! whose removal keeps the shape 8-connected, alternating the directional
//! conditions so the line erodes symmetrically from both sides. Iterates to
//! a fixed point, leaving an 8-connected unit-width skeleton.

use crate::mask::Mask;

/// Offsets of the 8-neighborhood in Zhang–Suen order P2..P9
/// (N, NE, E, SE, S, SW, W, NW) with y growing downward.
const RING: [(i64, i64); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Thin a mask to its skeleton.
pub fn skeletonize(mask: &Mask) -> Mask {
    let (w, h) = mask.dimensions();
    let mut grid: Vec<bool> = mask.as_gray().iter().map(|&v| v != 0).collect();
    let idx = |x: i64, y: i64| (y * w as i64 + x) as usize;
    let at = |grid: &[bool], x: i64, y: i64| -> bool {
        x >= 0 && y >= 0 && x < w as i64 && y < h as i64 && grid[idx(x, y)]
    };

    let mut to_delete: Vec<usize> = Vec::new();
    loop {
        let mut changed = false;
        for phase in 0..2 {
            to_delete.clear();
            for y in 0..h as i64 {
                for x in 0..w as i64 {
                    if !grid[idx(x, y)] {
                        continue;
                    }
                    let ring: [bool; 8] =
                        std::array::from_fn(|k| at(&grid, x + RING[k].0, y + RING[k].1));
                    let b: u32 = ring.iter().map(|&n| n as u32).sum();
                    if !(2..=6).contains(&b) {
                        continue;
                    }
                    let a: u32 = (0..8)
                        .filter(|&k| !ring[k] && ring[(k + 1) % 8])
                        .count() as u32;
                    if a != 1 {
                        continue;
                    }
                    let (p2, p4, p6, p8) = (ring[0], ring[2], ring[4], ring[6]);
                    let ok = if phase == 0 {
                        !(p2 && p4 && p6) && !(p4 && p6 && p8)
                    } else {
                        !(p2 && p4 && p8) && !(p2 && p6 && p8)
                    };
                    if ok {
                        to_delete.push(idx(x, y));
                    }
                }
            }
            if !to_delete.is_empty() {
                changed = true;
                for &i in &to_delete {
                    grid[i] = false;
                }
            }
        }
        if !changed {
            break;
        }
    }

    Mask::from_fn(w, h, |x, y| grid[(y * w + x) as usize])
}

/// Number of foreground pixels in the 8-neighborhood.
pub fn neighbor_count(mask: &Mask, x: u32, y: u32) -> u32 {
    RING.iter()
        .filter(|&&(dx, dy)| mask.is_set_checked(x as i64 + dx, y as i64 + dy))
        .count() as u32
}

/// Skeleton endpoints: foreground pixels with exactly one skeleton neighbor.
pub fn endpoints(skeleton: &Mask) -> Vec<(u32, u32)> {
    skeleton
        .foreground()
        .filter(|&(x, y)| neighbor_count(skeleton, x, y) == 1)
        .collect()
}
