//! Rotating double helix inside a breathing, color-shifting aura

use aura_math::{primitives, Rgba};

use super::{check_frequency, double_helix, phase_angle, HelixGrid, HELIX_HEIGHT};
use crate::{Animation, AnimationError, AxesSpec, Controls, FrameScene, Timing};

/// DNA with living aura field
pub struct DnaAura {
    frequency: f32,
    grid: HelixGrid,
}

impl DnaAura {
    pub const DEFAULT_FREQUENCY: f32 = 0.04;
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

    fn phase(&self, frame: u32) -> f32 {
        phase_angle(frame, f64::from(self.frequency))
    }

    /// Breathing aura radius: `1.2 + 0.3·sin φ`
    pub fn aura_radius(&self, frame: u32) -> f32 {
        1.2 + 0.3 * self.phase(frame).sin()
    }

    /// Aura tint sweeping between blue and red: `(glow, 0.3, 1 - glow)`
    pub fn aura_color(&self, frame: u32) -> Rgba {
        let glow = (self.phase(frame).sin() + 1.0) / 2.0;
        Rgba::rgb(glow, 0.3, 1.0 - glow)
    }
}

impl Default for DnaAura {
    fn default() -> Self {
        Self {
            frequency: Self::DEFAULT_FREQUENCY,
            grid: HelixGrid::default(),
        }
    }
}

impl Animation for DnaAura {
    fn name(&self) -> &str {
        "DNA with Living Aura Field"
    }

    fn timing(&self) -> Timing {
        Timing::every_ms(Self::INTERVAL_MS)
    }

    fn frame(&self, frame: u32, _controls: &Controls) -> Result<FrameScene, AnimationError> {
        let phase = self.phase(frame);
        let radius = self.aura_radius(frame);
        let color = self.aura_color(frame);

        let axes = AxesSpec::new((-2.0, 2.0), (-2.0, 2.0), (0.0, HELIX_HEIGHT))
            .with_title("DNA with Living Aura Field", color);
        let mut scene = FrameScene::new(axes);

        let aura = primitives::aura_tube(&self.grid.angles, &self.grid.heights, |_| radius, 1.0);
        scene.add_surface(aura, color, 0.25);

        let (a, b) = double_helix(&self.grid.heights, phase, 1.0, 1.0);
        scene.add_line(a, Rgba::WHITE, 2.0, 1.0);
        scene.add_line(b, Rgba::WHITE, 2.0, 1.0);

        Ok(scene)
    }
}
