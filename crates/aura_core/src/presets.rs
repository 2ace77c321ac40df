//! The seven chakra presets selected by the on-screen slider

use aura_math::Rgba;

use crate::AnimationError;

/// A named frequency/color pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChakraPreset {
    pub name: &'static str,
    /// Angular frequency in radians per frame
    pub frequency: f32,
    pub color: Rgba,
}

/// Fixed lookup table, root to crown
pub const CHAKRAS: [ChakraPreset; 7] = [
    ChakraPreset { name: "Root", frequency: 0.02, color: Rgba::rgb(1.0, 0.0, 0.0) },
    ChakraPreset { name: "Sacral", frequency: 0.03, color: Rgba::rgb(1.0, 0.5, 0.0) },
    ChakraPreset { name: "Solar", frequency: 0.04, color: Rgba::rgb(1.0, 1.0, 0.0) },
    ChakraPreset { name: "Heart", frequency: 0.05, color: Rgba::rgb(0.0, 1.0, 0.0) },
    ChakraPreset { name: "Throat", frequency: 0.06, color: Rgba::rgb(0.0, 0.5, 1.0) },
    ChakraPreset { name: "Third Eye", frequency: 0.07, color: Rgba::rgb(0.3, 0.0, 0.5) },
    ChakraPreset { name: "Crown", frequency: 0.08, color: Rgba::rgb(0.6, 0.0, 1.0) },
];

/// Slider position at startup (Heart)
pub const DEFAULT_CHAKRA: usize = 3;

impl ChakraPreset {
    /// Look up a preset by slider index
    pub fn get(index: usize) -> Result<&'static ChakraPreset, AnimationError> {
        CHAKRAS.get(index).ok_or(AnimationError::PresetOutOfRange {
            index,
            len: CHAKRAS.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_by_frequency() {
        for pair in CHAKRAS.windows(2) {
            assert!(pair[0].frequency < pair[1].frequency);
        }
    }

    #[test]
    fn test_default_is_heart() {
        let preset = ChakraPreset::get(DEFAULT_CHAKRA).unwrap();
        assert_eq!(preset.name, "Heart");
        assert_eq!(preset.frequency, 0.05);
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(
            ChakraPreset::get(7),
            Err(AnimationError::PresetOutOfRange { index: 7, len: 7 })
        );
    }
}
