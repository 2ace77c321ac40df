//! Animation registry and its serializable settings

use serde::{Deserialize, Serialize};

use crate::animations::{
    ChakraMutation, CinematicBody, CinematicStyle, DampedBody, DnaAura, FrequencyAura, WaveAura,
};
use crate::{Animation, AnimationError, DEFAULT_CHAKRA};

/// The built-in animations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    DnaAura,
    FrequencyAura,
    #[default]
    ChakraMutation,
    WaveAura,
    DampedBody,
    CinematicBody,
    LayeredBody,
}

impl AnimationKind {
    /// Every kind, in menu order
    pub const ALL: [AnimationKind; 7] = [
        AnimationKind::DnaAura,
        AnimationKind::FrequencyAura,
        AnimationKind::ChakraMutation,
        AnimationKind::WaveAura,
        AnimationKind::DampedBody,
        AnimationKind::CinematicBody,
        AnimationKind::LayeredBody,
    ];

    /// Configuration key (matches the serde name)
    pub fn key(&self) -> &'static str {
        match self {
            AnimationKind::DnaAura => "dna_aura",
            AnimationKind::FrequencyAura => "frequency_aura",
            AnimationKind::ChakraMutation => "chakra_mutation",
            AnimationKind::WaveAura => "wave_aura",
            AnimationKind::DampedBody => "damped_body",
            AnimationKind::CinematicBody => "cinematic_body",
            AnimationKind::LayeredBody => "layered_body",
        }
    }

    /// Frequency used when the settings leave it unset
    pub fn default_frequency(&self) -> Option<f32> {
        match self {
            AnimationKind::DnaAura => Some(DnaAura::DEFAULT_FREQUENCY),
            AnimationKind::FrequencyAura => Some(FrequencyAura::DEFAULT_FREQUENCY),
            AnimationKind::WaveAura => Some(WaveAura::DEFAULT_FREQUENCY),
            _ => None,
        }
    }

    /// Sadness intensity used when the settings leave it unset
    pub fn default_sadness(&self) -> Option<f32> {
        match self {
            AnimationKind::DampedBody => Some(DampedBody::DEFAULT_SADNESS),
            AnimationKind::CinematicBody | AnimationKind::LayeredBody => {
                Some(CinematicBody::DEFAULT_SADNESS)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Which animation to run and its tunable parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Animation to run
    pub kind: AnimationKind,
    /// Frequency override for the helix animations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f32>,
    /// Sadness intensity override for the body animations (0-1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sadness: Option<f32>,
    /// Seed for the cell/atom scatter
    pub seed: u64,
    /// Initial slider position for preset-driven animations
    pub initial_preset: usize,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            kind: AnimationKind::default(),
            frequency: None,
            sadness: None,
            seed: 0,
            initial_preset: DEFAULT_CHAKRA,
        }
    }
}

impl AnimationSettings {
    /// Settings for `kind` with every other field at its default
    pub fn for_kind(kind: AnimationKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Construct the configured animation
    pub fn build(&self) -> Result<Box<dyn Animation>, AnimationError> {
        let frequency = self.frequency.or(self.kind.default_frequency());
        let sadness = self.sadness.or(self.kind.default_sadness());

        let animation: Box<dyn Animation> = match self.kind {
            AnimationKind::DnaAura => {
                Box::new(DnaAura::new(frequency.unwrap_or(DnaAura::DEFAULT_FREQUENCY))?)
            }
            AnimationKind::FrequencyAura => Box::new(FrequencyAura::new(
                frequency.unwrap_or(FrequencyAura::DEFAULT_FREQUENCY),
            )?),
            AnimationKind::ChakraMutation => Box::new(ChakraMutation::new()),
            AnimationKind::WaveAura => {
                Box::new(WaveAura::new(frequency.unwrap_or(WaveAura::DEFAULT_FREQUENCY))?)
            }
            AnimationKind::DampedBody => {
                Box::new(DampedBody::new(sadness.unwrap_or(DampedBody::DEFAULT_SADNESS))?)
            }
            AnimationKind::CinematicBody => Box::new(CinematicBody::new(
                sadness.unwrap_or(CinematicBody::DEFAULT_SADNESS),
                CinematicStyle::cinematic(),
                self.seed,
            )?),
            AnimationKind::LayeredBody => {
                let body = CinematicBody::new(
                    sadness.unwrap_or(CinematicBody::DEFAULT_SADNESS),
                    CinematicStyle::layered(),
                    self.seed,
                )?;
                log::info!("Body layers:");
                for line in CinematicBody::layer_summary() {
                    log::info!("  {}", line);
                }
                Box::new(body)
            }
        };

        log::info!("Built animation '{}' ({})", animation.name(), self.kind);
        Ok(animation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Controls;

    #[test]
    fn test_every_kind_builds_and_renders_frame_zero() {
        for kind in AnimationKind::ALL {
            let animation = AnimationSettings::for_kind(kind).build().unwrap();
            let controls = Controls { preset: DEFAULT_CHAKRA };
            let scene = animation.frame(0, &controls).unwrap();
            assert!(!scene.layers.is_empty(), "{} produced no layers", kind);
        }
    }

    #[test]
    fn test_only_chakra_mutation_uses_presets() {
        for kind in AnimationKind::ALL {
            let animation = AnimationSettings::for_kind(kind).build().unwrap();
            assert_eq!(animation.uses_presets(), kind == AnimationKind::ChakraMutation);
        }
    }

    #[test]
    fn test_frequency_override() {
        let settings = AnimationSettings {
            frequency: Some(0.02),
            ..AnimationSettings::for_kind(AnimationKind::FrequencyAura)
        };
        let scene = settings.build().unwrap().frame(0, &Controls::default()).unwrap();
        assert_eq!(scene.axes.title, "Frequency = 0.02");
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let settings = AnimationSettings {
            sadness: Some(2.0),
            ..AnimationSettings::for_kind(AnimationKind::DampedBody)
        };
        assert!(matches!(settings.build(), Err(AnimationError::InvalidParameter(_))));
    }

    #[test]
    fn test_layered_body_builds_with_layer_table() {
        let animation = AnimationSettings::for_kind(AnimationKind::LayeredBody).build().unwrap();
        assert_eq!(animation.name(), "Extreme Cinematic Sadness - 3D Full Body");
        assert_eq!(CinematicBody::layer_summary().len(), crate::animations::LAYER_NAMES.len());
    }

    #[test]
    fn test_key_matches_display() {
        assert_eq!(AnimationKind::WaveAura.key(), "wave_aura");
        assert_eq!(format!("{}", AnimationKind::LayeredBody), "layered_body");
    }
}
