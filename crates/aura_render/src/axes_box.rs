//! Data-to-box coordinate mapping
//!
//! Every scene is drawn inside a box with a 4:4:3 aspect, centred at the
//! origin with z up. Data limits map onto the box faces; data outside the
//! limits is drawn outside the box rather than clipped.

use aura_core::AxesSpec;
use aura_math::Vec3;

/// Half extents of the normalised box (4:4:3 aspect)
pub const BOX_HALF_EXTENTS: Vec3 = Vec3::new(0.5, 0.5, 0.375);

/// Maps data coordinates into the normalised box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxesBox {
    min: Vec3,
    max: Vec3,
}

impl AxesBox {
    pub fn new(xlim: (f32, f32), ylim: (f32, f32), zlim: (f32, f32)) -> Self {
        Self {
            min: Vec3::new(xlim.0, ylim.0, zlim.0),
            max: Vec3::new(xlim.1, ylim.1, zlim.1),
        }
    }

    pub fn from_axes(axes: &AxesSpec) -> Self {
        Self::new(axes.xlim, axes.ylim, axes.zlim)
    }

    /// Map a data point into box space
    ///
    /// An axis with an empty range collapses onto the box centre plane.
    pub fn to_box(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            map_axis(p.x, self.min.x, self.max.x, BOX_HALF_EXTENTS.x),
            map_axis(p.y, self.min.y, self.max.y, BOX_HALF_EXTENTS.y),
            map_axis(p.z, self.min.z, self.max.z, BOX_HALF_EXTENTS.z),
        )
    }

    /// The 12 edges of the box in box space
    pub fn edges() -> [(Vec3, Vec3); 12] {
        let h = BOX_HALF_EXTENTS;
        let corner = |i: usize| {
            Vec3::new(
                if i & 1 == 0 { -h.x } else { h.x },
                if i & 2 == 0 { -h.y } else { h.y },
                if i & 4 == 0 { -h.z } else { h.z },
            )
        };
        let pairs = [
            (0, 1), (2, 3), (4, 5), (6, 7), // along x
            (0, 2), (1, 3), (4, 6), (5, 7), // along y
            (0, 4), (1, 5), (2, 6), (3, 7), // along z
        ];
        pairs.map(|(a, b)| (corner(a), corner(b)))
    }
}

fn map_axis(v: f32, lo: f32, hi: f32, half: f32) -> f32 {
    let span = hi - lo;
    if span.abs() <= f32::EPSILON {
        return 0.0;
    }
    ((v - lo) / span * 2.0 - 1.0) * half
}
