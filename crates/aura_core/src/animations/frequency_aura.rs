//! Double helix whose aura tint is set by the chosen frequency

use aura_math::{primitives, Rgba};

use super::{check_frequency, double_helix, phase_angle, HelixGrid, HELIX_HEIGHT};
use crate::{Animation, AnimationError, AxesSpec, Controls, FrameScene, Timing};

/// Frequency-tinted aura
///
/// Suggested frequencies: 0.02, 0.04, 0.06, 0.08. Higher frequencies spin
/// faster and shift the tint from blue toward red.
pub struct FrequencyAura {
    frequency: f32,
    grid: HelixGrid,
}

impl FrequencyAura {
    pub const DEFAULT_FREQUENCY: f32 = 0.06;
    pub const INTERVAL_MS: u64 = 50;

    pub fn new(frequency: f32) -> Result<Self, AnimationError> {
        Ok(Self {
            frequency: check_frequency(frequency)?,
            grid: HelixGrid::default(),
        })
    }

    #[inline]
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Aura radius: `1.2 + 0.4·sin(frame·frequency)`
    pub fn aura_radius(&self, frame: u32) -> f32 {
        1.2 + 0.4 * self.phase(frame).sin()
    }

    fn phase(&self, frame: u32) -> f32 {
        phase_angle(frame, f64::from(self.frequency))
    }

    /// Aura tint: `glow = clamp(10·frequency, 0, 1)`, color `(glow, 0.4, 1 - glow)`
    pub fn aura_color(&self) -> Rgba {
        let glow = (self.frequency * 10.0).clamp(0.0, 1.0);
        Rgba::rgb(glow, 0.4, 1.0 - glow)
    }
}

impl Default for FrequencyAura {
    fn default() -> Self {
        Self {
            frequency: Self::DEFAULT_FREQUENCY,
            grid: HelixGrid::default(),
        }
    }
}

impl Animation for FrequencyAura {
    fn name(&self) -> &str {
        "Frequency Aura"
    }

    fn timing(&self) -> Timing {
        Timing::every_ms(Self::INTERVAL_MS)
    }

    fn frame(&self, frame: u32, _controls: &Controls) -> Result<FrameScene, AnimationError> {
        let phase = self.phase(frame);
        let radius = self.aura_radius(frame);
        let color = self.aura_color();

        let axes = AxesSpec::new((-2.0, 2.0), (-2.0, 2.0), (0.0, HELIX_HEIGHT))
            .with_title(format!("Frequency = {}", self.frequency), color);
        let mut scene = FrameScene::new(axes);

        let aura = primitives::aura_tube(&self.grid.angles, &self.grid.heights, |_| radius, 1.0);
        scene.add_surface(aura, color, 0.3);

        let (a, b) = double_helix(&self.grid.heights, phase, 1.0, 1.0);
        scene.add_line(a, Rgba::WHITE, 2.0, 1.0);
        scene.add_line(b, Rgba::WHITE, 2.0, 1.0);

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_shows_frequency() {
        let scene = FrequencyAura::default().frame(0, &Controls::default()).unwrap();
        assert_eq!(scene.axes.title, "Frequency = 0.06");
    }

    #[test]
    fn test_color_depends_only_on_frequency() {
        let anim = FrequencyAura::new(0.02).unwrap();
        let c = anim.aura_color();
        assert!((c.r() - 0.2).abs() < 1e-6);
        assert_eq!(c.g(), 0.4);
        assert!((c.b() - 0.8).abs() < 1e-6);

        let a = anim.frame(0, &Controls::default()).unwrap();
        let b = anim.frame(99, &Controls::default()).unwrap();
        assert_eq!(a.axes.title_color, b.axes.title_color);
    }

    #[test]
    fn test_glow_saturates() {
        let c = FrequencyAura::new(0.5).unwrap().aura_color();
        assert_eq!(c.0, [1.0, 0.4, 0.0, 1.0]);
    }

    #[test]
    fn test_breathing_amplitude() {
        let anim = FrequencyAura::new(std::f32::consts::FRAC_PI_2).unwrap();
        assert!((anim.aura_radius(1) - 1.6).abs() < 1e-5);
        assert!((anim.aura_radius(3) - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_rejects_nan_frequency() {
        assert!(FrequencyAura::new(f32::NAN).is_err());
    }
}
