//! Parametric primitives
//!
//! Closed-form shapes the animations assemble their scenes from. Grid
//! orientation follows the meshgrid convention: for cylinders the rows are
//! heights and the columns are angles, for spheres the rows are azimuth
//! samples and the columns are polar samples.

use std::f32::consts::{PI, TAU};

use crate::{linspace, ParamGrid, Polyline, Surface, Vec3};

/// Open cylinder around a vertical axis through `(x0, y0)`
///
/// `z_start` may be greater than `z_end`; the rows then run downward.
pub fn cylinder(z_start: f32, z_end: f32, radius: f32, x0: f32, y0: f32, n: usize) -> Surface {
    ParamGrid::new(linspace(z_start, z_end, n), linspace(0.0, TAU, n)).map(|z, theta| {
        Vec3::new(radius * theta.cos() + x0, radius * theta.sin() + y0, z)
    })
}

/// Sphere of `radius` around `center`, `n` samples per parameter
pub fn sphere(radius: f32, center: Vec3, n: usize) -> Surface {
    ParamGrid::new(linspace(0.0, TAU, n), linspace(0.0, PI, n)).map(|u, v| {
        Vec3::new(
            radius * u.cos() * v.sin(),
            radius * u.sin() * v.sin(),
            radius * v.cos(),
        ) + center
    })
}

/// Horizontal circle of `radius` at height `z`, closed (first point repeated last)
pub fn ring(radius: f32, z: f32, n: usize) -> Polyline {
    linspace(0.0, TAU, n)
        .into_iter()
        .map(|theta| Vec3::new(radius * theta.cos(), radius * theta.sin(), z))
        .collect()
}

/// Surface of revolution around the z axis
///
/// Rows are `angles`, columns are `heights`. The radius may vary with the
/// height parameter; the point's z is `rise * height`.
pub fn aura_tube<F>(angles: &[f32], heights: &[f32], radius: F, rise: f32) -> Surface
where
    F: Fn(f32) -> f32,
{
    ParamGrid::new(angles.to_vec(), heights.to_vec()).map(|theta, t| {
        let r = radius(t);
        Vec3::new(r * theta.cos(), r * theta.sin(), rise * t)
    })
}

/// A circular helix around the z axis
///
/// `point(t) = (radius·cos(rate·t + phase), radius·sin(rate·t + phase), rise·t)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Helix {
    pub radius: f32,
    pub rate: f32,
    pub phase: f32,
    pub rise: f32,
}

impl Helix {
    /// Unit-pitch strand: rate 1, rise 1
    pub fn strand(radius: f32, phase: f32) -> Self {
        Self {
            radius,
            rate: 1.0,
            phase,
            rise: 1.0,
        }
    }

    /// Evaluate the helix at parameter `t`
    #[inline]
    pub fn point(&self, t: f32) -> Vec3 {
        let angle = self.rate * t + self.phase;
        Vec3::new(
            self.radius * angle.cos(),
            self.radius * angle.sin(),
            self.rise * t,
        )
    }

    /// Sample the helix at every `t` in `samples`
    pub fn sample(&self, samples: &[f32]) -> Polyline {
        samples.iter().map(|&t| self.point(t)).collect()
    }
}
