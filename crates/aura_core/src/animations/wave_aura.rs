//! Single helix with a pulsing radius inside a travelling-wave aura

use std::f32::consts::TAU;

use aura_math::primitives::{self, Helix};

use super::{check_frequency, phase_angle, HelixGrid};
use crate::{Animation, AnimationError, AxesSpec, Controls, FrameScene, Rgba, Timing};

/// Travelling-wave aura
///
/// Parameters: frequency `f`, angular frequency `ω = 2πf`, wave number
/// `k`, base aura radius `A0` and vertical growth `v`.
pub struct WaveAura {
    frequency: f32,
    wave_number: f32,
    base_radius: f32,
    rise: f32,
    grid: HelixGrid,
}

impl WaveAura {
    pub const DEFAULT_FREQUENCY: f32 = 0.06;
    pub const INTERVAL_MS: u64 = 50;
    /// Seconds of simulated time per frame
    pub const TIME_STEP: f32 = 0.05;
    pub const HEIGHT_SAMPLES: usize = 300;
    pub const ANGLE_SAMPLES: usize = 50;

    pub fn new(frequency: f32) -> Result<Self, AnimationError> {
        Ok(Self {
            frequency: check_frequency(frequency)?,
            wave_number: 1.0,
            base_radius: 1.2,
            rise: 0.1,
            grid: HelixGrid::new(Self::HEIGHT_SAMPLES, Self::ANGLE_SAMPLES),
        })
    }

    /// Angular frequency `ω = 2πf`
    #[inline]
    pub fn omega(&self) -> f32 {
        TAU * self.frequency
    }

    /// `ω·time` with `time = frame·TIME_STEP`
    fn wave_phase(&self, frame: u32) -> f32 {
        let omega = std::f64::consts::TAU * f64::from(self.frequency);
        phase_angle(frame, omega * f64::from(Self::TIME_STEP))
    }

    /// Helix radius `R = 1 + 0.3·sin(ω·time)`
    pub fn helix_radius(&self, frame: u32) -> f32 {
        1.0 + 0.3 * self.wave_phase(frame).sin()
    }

    /// Rate of change `dR/dt = 0.3·ω·cos(ω·time)`
    pub fn helix_radius_rate(&self, frame: u32) -> f32 {
        0.3 * self.omega() * self.wave_phase(frame).cos()
    }

    /// Aura radius at height parameter `t`: `A0 + sin(k·t - ω·time)`
    pub fn aura_radius(&self, t: f32, frame: u32) -> f32 {
        self.base_radius + (self.wave_number * t - self.wave_phase(frame)).sin()
    }
}

impl Default for WaveAura {
    fn default() -> Self {
        Self {
            frequency: Self::DEFAULT_FREQUENCY,
            wave_number: 1.0,
            base_radius: 1.2,
            rise: 0.1,
            grid: HelixGrid::new(Self::HEIGHT_SAMPLES, Self::ANGLE_SAMPLES),
        }
    }
}

impl Animation for WaveAura {
    fn name(&self) -> &str {
        "Travelling-Wave Aura"
    }

    fn timing(&self) -> Timing {
        Timing::every_ms(Self::INTERVAL_MS)
    }

    fn frame(&self, frame: u32, _controls: &Controls) -> Result<FrameScene, AnimationError> {
        let omega = self.omega();
        let title = format!(
            "ω={:.2} | dR/dt={:.2}",
            omega,
            self.helix_radius_rate(frame)
        );
        let axes = AxesSpec::new((-2.5, 2.5), (-2.5, 2.5), (0.0, 4.0))
            .with_title(title, Rgba::CYAN);
        let mut scene = FrameScene::new(axes);

        let aura = primitives::aura_tube(
            &self.grid.angles,
            &self.grid.heights,
            |t| self.aura_radius(t, frame),
            self.rise,
        );
        scene.add_surface(aura, Rgba::CYAN, 0.25);

        let helix = Helix {
            radius: self.helix_radius(frame),
            rate: omega,
            phase: 0.0,
            rise: self.rise,
        };
        scene.add_line(helix.sample(&self.grid.heights), Rgba::WHITE, 2.0, 1.0);

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layer;

    #[test]
    fn test_title_at_frame_zero() {
        let scene = WaveAura::default().frame(0, &Controls::default()).unwrap();
        // ω = 2π·0.06 ≈ 0.377, dR/dt = 0.3·ω ≈ 0.113
        assert_eq!(scene.axes.title, "ω=0.38 | dR/dt=0.11");
        assert_eq!(scene.axes.title_color, Rgba::CYAN);
        assert_eq!(scene.axes.zlim, (0.0, 4.0));
    }

    #[test]
    fn test_aura_wave_travels_upward() {
        let anim = WaveAura::default();
        let omega = anim.omega();
        // A crest at height t at frame 0 reappears at t + ω·Δtime later
        let frame = 40;
        let shift = omega * frame as f32 * WaveAura::TIME_STEP;
        let a = anim.aura_radius(1.0, 0);
        let b = anim.aura_radius(1.0 + shift, frame);
        assert!((a - b).abs() < 1e-4);
    }

    #[test]
    fn test_aura_surface_varies_along_height() {
        let scene = WaveAura::default().frame(0, &Controls::default()).unwrap();
        match &scene.layers[0] {
            Layer::Surface { surface, .. } => {
                assert_eq!((surface.rows, surface.cols), (50, 300));
                let p0 = surface.point(0, 0);
                // t = 0, time = 0: radius = A0 + sin(0)
                assert!((p0.x - 1.2).abs() < 1e-5);
                assert_eq!(p0.z, 0.0);
                let top = surface.point(0, 299);
                assert!((top.z - 0.1 * 4.0 * std::f32::consts::PI).abs() < 1e-5);
            }
            _ => panic!("expected aura surface"),
        }
    }

    #[test]
    fn test_helix_radius_pulses() {
        let anim = WaveAura::default();
        assert_eq!(anim.helix_radius(0), 1.0);
        let scene = anim.frame(0, &Controls::default()).unwrap();
        match &scene.layers[1] {
            Layer::Line { line, .. } => {
                assert_eq!(line.points.len(), 300);
                assert_eq!(line.points[0].x, 1.0);
            }
            _ => panic!("expected helix line"),
        }
    }

    #[test]
    fn test_helix_follows_angular_frequency() {
        let anim = WaveAura::default();
        let omega = anim.omega();
        let frame = 30;
        let radius = anim.helix_radius(frame);
        // ω·time = ω·1.5 is well away from zero, so the radius has moved
        assert!((radius - (1.0 + 0.3 * (omega * 1.5).sin())).abs() < 1e-5);
        assert!((radius - 1.0).abs() > 0.1);

        let scene = anim.frame(frame, &Controls::default()).unwrap();
        match &scene.layers[1] {
            Layer::Line { line, color, .. } => {
                assert_eq!(*color, Rgba::WHITE);
                for k in [100, 250] {
                    let t = anim.grid.heights[k];
                    let p = line.points[k];
                    assert!((p.x - radius * (omega * t).cos()).abs() < 1e-5);
                    assert!((p.y - radius * (omega * t).sin()).abs() < 1e-5);
                    assert!((p.z - 0.1 * t).abs() < 1e-5);
                }
            }
            _ => panic!("expected helix line"),
        }
    }
}
