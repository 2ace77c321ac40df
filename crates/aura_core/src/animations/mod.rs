//! Built-in animations
//!
//! Each animation evaluates closed-form formulas over fixed parameter
//! grids. The grids are sampled once at construction; `frame` only maps them.

mod dna_aura;
mod frequency_aura;
mod chakra_mutation;
mod wave_aura;
mod body;

pub use dna_aura::DnaAura;
pub use frequency_aura::FrequencyAura;
pub use chakra_mutation::ChakraMutation;
pub use wave_aura::WaveAura;
pub use body::{
    BodyPart, BodyProportions, CinematicBody, CinematicStyle, DampedBody, Limb, Scatter,
    LAYER_NAMES,
};

use std::f32::consts::{PI, TAU};

use aura_math::{linspace, primitives::Helix, Polyline};

use crate::AnimationError;

/// Height samples along the double helix
pub(crate) const HELIX_SAMPLES: usize = 200;
/// Angle samples around the aura
pub(crate) const AURA_SAMPLES: usize = 40;
/// Top of the helix, two full turns
pub(crate) const HELIX_HEIGHT: f32 = 4.0 * PI;

/// Parameter samples shared by the helix animations
#[derive(Clone, Debug)]
pub(crate) struct HelixGrid {
    pub heights: Vec<f32>,
    pub angles: Vec<f32>,
}

impl HelixGrid {
    pub fn new(height_samples: usize, angle_samples: usize) -> Self {
        Self {
            heights: linspace(0.0, HELIX_HEIGHT, height_samples),
            angles: linspace(0.0, TAU, angle_samples),
        }
    }
}

impl Default for HelixGrid {
    fn default() -> Self {
        Self::new(HELIX_SAMPLES, AURA_SAMPLES)
    }
}

/// The two antiparallel strands of the double helix at phase `phase`
///
/// Strand B is offset by half a turn. Each strand's radius is scaled
/// independently.
pub(crate) fn double_helix(heights: &[f32], phase: f32, scale_a: f32, scale_b: f32) -> (Polyline, Polyline) {
    let a = Helix::strand(scale_a, phase).sample(heights);
    let b = Helix::strand(scale_b, phase + PI).sample(heights);
    (a, b)
}

/// Phase `frame·rate`, evaluated in f64 and wrapped into `[0, 2π)`
///
/// Unbounded animations keep counting frames; wrapping before narrowing
/// keeps `sin`/`cos` of the phase accurate for long runs.
pub(crate) fn phase_angle(frame: u32, rate: f64) -> f32 {
    (f64::from(frame) * rate).rem_euclid(std::f64::consts::TAU) as f32
}

/// Reject non-finite or negative frequencies
pub(crate) fn check_frequency(frequency: f32) -> Result<f32, AnimationError> {
    if frequency.is_finite() && frequency >= 0.0 {
        Ok(frequency)
    } else {
        Err(AnimationError::InvalidParameter(format!(
            "frequency must be finite and non-negative, got {}",
            frequency
        )))
    }
}
