//! Slider-driven helix mutation tinted by the selected chakra preset

use aura_math::primitives;

use super::{double_helix, phase_angle, HelixGrid, HELIX_HEIGHT};
use crate::{
    Animation, AnimationError, AxesSpec, ChakraPreset, Controls, FrameScene, Rgba, Timing,
};

/// Chakra mutation ("extreme mode")
///
/// The preset frequency drives the spin, a small counter-phase scaling of
/// the two strands, and the aura size; the preset color tints the aura.
pub struct ChakraMutation {
    grid: HelixGrid,
}

impl ChakraMutation {
    pub const INTERVAL_MS: u64 = 50;

    pub fn new() -> Self {
        Self {
            grid: HelixGrid::default(),
        }
    }

    /// Strand scale offset: `0.3·ω·sin(frame·ω)`
    pub fn mutation(frequency: f32, frame: u32) -> f32 {
        0.3 * frequency * phase_angle(frame, f64::from(frequency)).sin()
    }

    /// Aura radius: `1.2 + 0.6·ω + 0.3·sin(frame·ω)`
    pub fn aura_radius(frequency: f32, frame: u32) -> f32 {
        1.2 + 0.6 * frequency + 0.3 * phase_angle(frame, f64::from(frequency)).sin()
    }
}

impl Default for ChakraMutation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for ChakraMutation {
    fn name(&self) -> &str {
        "Chakra Mutation"
    }

    fn timing(&self) -> Timing {
        Timing::every_ms(Self::INTERVAL_MS)
    }

    fn uses_presets(&self) -> bool {
        true
    }

    fn frame(&self, frame: u32, controls: &Controls) -> Result<FrameScene, AnimationError> {
        let preset = ChakraPreset::get(controls.preset)?;
        let frequency = preset.frequency;
        let mutation = Self::mutation(frequency, frame);
        let radius = Self::aura_radius(frequency, frame);

        let axes = AxesSpec::new((-2.5, 2.5), (-2.5, 2.5), (0.0, HELIX_HEIGHT))
            .with_title(format!("EXTREME MODE | Chakra: {}", preset.name), preset.color);
        let mut scene = FrameScene::new(axes);

        let aura = primitives::aura_tube(&self.grid.angles, &self.grid.heights, |_| radius, 1.0);
        scene.add_surface(aura, preset.color, 0.25);

        let phase = phase_angle(frame, f64::from(frequency));
        let (a, b) = double_helix(&self.grid.heights, phase, 1.0 + mutation, 1.0 - mutation);
        scene.add_line(a, Rgba::WHITE, 2.0, 1.0);
        scene.add_line(b, Rgba::WHITE, 2.0, 1.0);

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Layer, CHAKRAS, DEFAULT_CHAKRA};

    fn controls(preset: usize) -> Controls {
        Controls { preset }
    }

    #[test]
    fn test_title_and_color_follow_preset() {
        let anim = ChakraMutation::new();
        for (i, preset) in CHAKRAS.iter().enumerate() {
            let scene = anim.frame(5, &controls(i)).unwrap();
            assert_eq!(scene.axes.title, format!("EXTREME MODE | Chakra: {}", preset.name));
            assert_eq!(scene.axes.title_color, preset.color);
        }
    }

    #[test]
    fn test_default_preset_is_heart() {
        let scene = ChakraMutation::new().frame(0, &controls(DEFAULT_CHAKRA)).unwrap();
        assert!(scene.axes.title.ends_with("Heart"));
        assert_eq!(scene.axes.zlim.0, 0.0);
        assert_eq!(scene.axes.xlim, (-2.5, 2.5));
    }

    #[test]
    fn test_out_of_range_preset_is_error() {
        let err = ChakraMutation::new().frame(0, &controls(7)).unwrap_err();
        assert_eq!(err, AnimationError::PresetOutOfRange { index: 7, len: 7 });
    }

    #[test]
    fn test_mutation_scales_strands_in_counter_phase() {
        let anim = ChakraMutation::new();
        // Crown, frame chosen so sin(frame·ω) is close to 1
        let frame = 20;
        let w = 0.08f32;
        let m = ChakraMutation::mutation(w, frame);
        assert!((m - 0.3 * w * (1.6f32).sin()).abs() < 1e-6);

        let scene = anim.frame(frame, &controls(6)).unwrap();
        let radius_of = |layer: &Layer| match layer {
            Layer::Line { line, .. } => {
                let p = line.points[10];
                (p.x * p.x + p.y * p.y).sqrt()
            }
            _ => panic!("expected line"),
        };
        assert!((radius_of(&scene.layers[1]) - (1.0 + m)).abs() < 1e-5);
        assert!((radius_of(&scene.layers[2]) - (1.0 - m)).abs() < 1e-5);
    }

    #[test]
    fn test_aura_radius_grows_with_frequency() {
        assert!((ChakraMutation::aura_radius(0.02, 0) - 1.212).abs() < 1e-6);
        assert!((ChakraMutation::aura_radius(0.08, 0) - 1.248).abs() < 1e-6);
    }
}
