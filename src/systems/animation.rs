//! Animation system
//!
//! Owns the running animation, its frame clock and (for preset-driven
//! animations) the slider. Each call to [`AnimationSystem::advance`] yields a
//! freshly built scene when a frame is due.

use std::time::Instant;

use aura_core::{Animation, AnimationError, AnimationSettings, FrameClock, FrameScene, CHAKRAS};
use aura_input::PresetSlider;

pub struct AnimationSystem {
    animation: Box<dyn Animation>,
    clock: FrameClock,
    slider: Option<PresetSlider>,
    initial_preset: usize,
    last_frame: Option<u32>,
}

impl AnimationSystem {
    /// Build the configured animation and start its clock
    pub fn new(settings: &AnimationSettings) -> Result<Self, AnimationError> {
        let animation = settings.build()?;
        let clock = FrameClock::new(animation.timing());

        let initial_preset = settings.initial_preset.min(CHAKRAS.len() - 1);
        let slider = animation
            .uses_presets()
            .then(|| PresetSlider::new("Chakra", 0, CHAKRAS.len() - 1, initial_preset));

        log::info!(
            "Animation '{}': interval {:?}, frames {}",
            animation.name(),
            animation.timing().interval,
            animation
                .timing()
                .frames
                .map_or_else(|| "unbounded".to_string(), |n| n.to_string()),
        );

        Ok(Self {
            animation,
            clock,
            slider,
            initial_preset,
            last_frame: None,
        })
    }

    /// Scene to show at `now`, if anything changed
    ///
    /// A due frame is always rebuilt. While paused, moving the slider
    /// rebuilds the frame on screen so the change is visible immediately.
    pub fn advance(&mut self, now: Instant) -> Result<Option<FrameScene>, AnimationError> {
        let slider_changed = self.slider.as_mut().is_some_and(|s| s.take_changed());

        let frame = match self.clock.tick(now) {
            Some(frame) => frame,
            None => match self.last_frame {
                Some(frame) if slider_changed => frame,
                _ => return Ok(None),
            },
        };

        let scene = self.animation.frame(frame, &self.controls())?;
        self.last_frame = Some(frame);
        Ok(Some(scene))
    }

    /// Slider value as frame controls (the initial preset when there is no slider)
    pub fn controls(&self) -> aura_core::Controls {
        match &self.slider {
            Some(slider) => slider.controls(),
            None => aura_core::Controls { preset: self.initial_preset },
        }
    }

    /// Toggle pause, returning the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.clock.toggle_pause();
        log::info!("Animation {}", if paused { "paused" } else { "resumed" });
        paused
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// When the event loop should wake next
    pub fn next_deadline(&self) -> Option<Instant> {
        self.clock.next_deadline()
    }

    pub fn name(&self) -> &str {
        self.animation.name()
    }

    /// Index of the frame currently on screen
    pub fn current_frame(&self) -> Option<u32> {
        self.last_frame
    }

    pub fn slider(&self) -> Option<&PresetSlider> {
        self.slider.as_ref()
    }

    pub fn slider_mut(&mut self) -> Option<&mut PresetSlider> {
        self.slider.as_mut()
    }

    /// Slider position the animation started with
    pub fn initial_preset(&self) -> usize {
        self.initial_preset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::AnimationKind;
    use std::time::Duration;
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;

    fn system(kind: AnimationKind) -> AnimationSystem {
        AnimationSystem::new(&AnimationSettings::for_kind(kind)).unwrap()
    }

    #[test]
    fn test_frames_follow_interval() {
        let mut sys = system(AnimationKind::DnaAura);
        let t0 = Instant::now();
        assert!(sys.advance(t0).unwrap().is_some());
        assert_eq!(sys.current_frame(), Some(0));
        assert!(sys.advance(t0 + Duration::from_millis(10)).unwrap().is_none());
        assert!(sys.advance(t0 + Duration::from_millis(50)).unwrap().is_some());
        assert_eq!(sys.current_frame(), Some(1));
    }

    #[test]
    fn test_slider_only_for_preset_animations() {
        assert!(system(AnimationKind::ChakraMutation).slider().is_some());
        assert!(system(AnimationKind::WaveAura).slider().is_none());
        assert!(system(AnimationKind::DampedBody).slider().is_none());
    }

    #[test]
    fn test_slider_drives_title() {
        let mut sys = system(AnimationKind::ChakraMutation);
        let t0 = Instant::now();
        let scene = sys.advance(t0).unwrap().unwrap();
        assert!(scene.axes.title.ends_with("Chakra: Heart"));

        if let Some(slider) = sys.slider_mut() {
            slider.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed);
        }
        let scene = sys.advance(t0 + Duration::from_millis(50)).unwrap().unwrap();
        assert!(scene.axes.title.ends_with("Chakra: Solar"));
    }

    #[test]
    fn test_paused_slider_change_rebuilds_current_frame() {
        let mut sys = system(AnimationKind::ChakraMutation);
        let t0 = Instant::now();
        sys.advance(t0).unwrap();
        assert!(sys.toggle_pause());
        assert!(sys.next_deadline().is_none());

        let later = t0 + Duration::from_secs(1);
        assert!(sys.advance(later).unwrap().is_none());

        if let Some(slider) = sys.slider_mut() {
            slider.process_keyboard(KeyCode::Digit1, ElementState::Pressed);
        }
        let scene = sys.advance(later).unwrap().unwrap();
        assert_eq!(sys.current_frame(), Some(0));
        assert!(scene.axes.title.ends_with("Chakra: Root"));
    }

    #[test]
    fn test_initial_preset_clamped() {
        let settings = AnimationSettings {
            initial_preset: 42,
            ..AnimationSettings::for_kind(AnimationKind::ChakraMutation)
        };
        let sys = AnimationSystem::new(&settings).unwrap();
        assert_eq!(sys.initial_preset(), 6);
        assert_eq!(sys.controls().preset, 6);
    }
}
