//! Formula-based generator for the layered ring-and-petal motif.
//!
//! Four petal orientations, each drawn as a stack of parallel lanes, sit
//! inside a set of concentric rings. All geometry is emitted as stroke
//! centerlines; pair with [`SvgStyle::Stroked`](crate::svg::SvgStyle) for
//! rendering.

/// Rounded-petal centerline in local (u, v) coordinates: u points outward
/// along the petal axis, v is perpendicular to it. One cubic chain
/// p0, c1, c2, p1, c3, c4, p2, c5, c6, p3.
const MOTIF_POINTS: [(f64, f64); 10] = [
    (18.0, -74.0),
    (90.0, -114.0),
    (184.0, -76.0),
    (224.0, 0.0),
    (255.0, 69.0),
    (206.0, 157.0),
    (110.0, 173.0),
    (44.0, 172.0),
    (12.0, 131.0),
    (10.0, 70.0),
];

/// Geometry parameters of the generated motif.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MotifSpec {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Orientation of the first petal (degrees).
    pub base_angle_deg: f64,
    /// Petal orientations, added to the base angle (degrees).
    pub rotations_deg: Vec<f64>,
    /// Perpendicular lane offsets stacked per orientation (pixels).
    pub lane_offsets: Vec<f64>,
    /// Radii of the concentric rings behind the petals (pixels).
    pub ring_radii: Vec<f64>,
    /// Stroke width the geometry is designed for (pixels).
    pub stroke_width: f64,
}

impl Default for MotifSpec {
    fn default() -> Self {
        Self {
            width: 780,
            height: 794,
            base_angle_deg: 45.0,
            rotations_deg: vec![0.0, 90.0, 180.0, 270.0],
            lane_offsets: vec![-22.5, -7.5, 7.5, 22.5],
            ring_radii: vec![272.0, 289.0, 306.0, 323.0],
            stroke_width: 7.0,
        }
    }
}

impl MotifSpec {
    fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    fn uv_to_xy(&self, u: f64, v: f64, angle_deg: f64) -> (f64, f64) {
        let (cx, cy) = self.center();
        let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
        (cx + u * cos_a - v * sin_a, cy + u * sin_a + v * cos_a)
    }

    /// One petal lane as an open cubic chain in canvas coordinates.
    fn lane_path(&self, angle_deg: f64, lane_offset: f64) -> String {
        let xy: Vec<(f64, f64)> = MOTIF_POINTS
            .iter()
            .map(|&(u, v)| self.uv_to_xy(u, v + lane_offset, angle_deg))
            .collect();
        let mut d = format!("M {:.2} {:.2}", xy[0].0, xy[0].1);
        for seg in xy[1..].chunks_exact(3) {
            d.push_str(&format!(
                " C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                seg[0].0, seg[0].1, seg[1].0, seg[1].1, seg[2].0, seg[2].1
            ));
        }
        d
    }

    /// A full circle as two half arcs, which SVG requires since a single
    /// arc command cannot span 360 degrees.
    fn circle_path(&self, radius: f64) -> String {
        let (cx, cy) = self.center();
        format!(
            "M {:.2} {:.2} A {:.2} {:.2} 0 1 1 {:.2} {:.2} A {:.2} {:.2} 0 1 1 {:.2} {:.2}",
            cx + radius,
            cy,
            radius,
            radius,
            cx - radius,
            cy,
            radius,
            radius,
            cx + radius,
            cy
        )
    }

    /// All motif paths: petal lanes grouped by orientation, then rings.
    pub fn build_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for rot in &self.rotations_deg {
            let angle = self.base_angle_deg + rot;
            for lane in &self.lane_offsets {
                paths.push(self.lane_path(angle, *lane));
            }
        }
        for radius in &self.ring_radii {
            paths.push(self.circle_path(*radius));
        }
        paths
    }
}
