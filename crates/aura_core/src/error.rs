//! Animation error types

use std::fmt;

/// Error type for building or evaluating an animation
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// Preset index outside the lookup table
    PresetOutOfRange { index: usize, len: usize },
    /// Frame index past the end of a bounded animation
    FrameOutOfRange { frame: u32, len: u32 },
    /// A configured parameter is unusable (non-finite, out of domain)
    InvalidParameter(String),
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::PresetOutOfRange { index, len } => {
                write!(f, "Preset index {} out of range (0..{})", index, len)
            }
            AnimationError::FrameOutOfRange { frame, len } => {
                write!(f, "Frame {} out of range (0..{})", frame, len)
            }
            AnimationError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for AnimationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_error_display() {
        let err = AnimationError::PresetOutOfRange { index: 9, len: 7 };
        assert_eq!(format!("{}", err), "Preset index 9 out of range (0..7)");
    }

    #[test]
    fn test_frame_error_display() {
        let err = AnimationError::FrameOutOfRange { frame: 120, len: 120 };
        assert!(format!("{}", err).contains("Frame 120"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = AnimationError::InvalidParameter("frequency is NaN".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid parameter"));
        assert!(msg.contains("NaN"));
    }
}
