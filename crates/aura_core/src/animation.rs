//! The animation contract and the frame clock that drives it

use std::time::{Duration, Instant};

use crate::{AnimationError, FrameScene};

/// When and how often an animation produces frames
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Delay between frames
    pub interval: Duration,
    /// Number of frames; `None` counts up without bound
    pub frames: Option<u32>,
    /// Restart at frame 0 after the last frame
    pub repeat: bool,
}

impl Timing {
    /// Unbounded frame counter at the given interval in milliseconds
    pub fn every_ms(ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(ms),
            frames: None,
            repeat: true,
        }
    }

    /// Bounded, repeating animation
    pub fn bounded(ms: u64, frames: u32) -> Self {
        Self {
            interval: Duration::from_millis(ms),
            frames: Some(frames),
            repeat: true,
        }
    }
}

/// User-controlled inputs sampled when a frame is built
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    /// Slider value: index into the preset table
    pub preset: usize,
}

/// A frame-callback animation
///
/// `frame` must be a pure function of its arguments: the same frame index
/// and controls always produce the same scene.
pub trait Animation: Send {
    /// Short human-readable name
    fn name(&self) -> &str;

    /// Frame timing
    fn timing(&self) -> Timing;

    /// Whether this animation reads [`Controls::preset`]
    fn uses_presets(&self) -> bool {
        false
    }

    /// Build the scene for `frame`
    fn frame(&self, frame: u32, controls: &Controls) -> Result<FrameScene, AnimationError>;
}

/// Tracks which frame is due next
///
/// The first frame is due immediately. Each tick that yields a frame
/// schedules the next one `interval` later.
#[derive(Clone, Debug)]
pub struct FrameClock {
    timing: Timing,
    next_frame: u32,
    deadline: Option<Instant>,
    paused: bool,
    finished: bool,
}

impl FrameClock {
    /// Create a clock for the given timing
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            next_frame: 0,
            deadline: None,
            paused: false,
            finished: matches!(timing.frames, Some(0)),
        }
    }

    /// Frame due at `now`, if any
    pub fn tick(&mut self, now: Instant) -> Option<u32> {
        if self.paused || self.finished {
            return None;
        }
        if let Some(deadline) = self.deadline {
            if now < deadline {
                return None;
            }
        }

        let frame = self.next_frame;
        self.deadline = Some(now + self.timing.interval);
        self.advance();
        Some(frame)
    }

    fn advance(&mut self) {
        match self.timing.frames {
            Some(len) if self.next_frame + 1 >= len => {
                if self.timing.repeat {
                    self.next_frame = 0;
                } else {
                    self.finished = true;
                }
            }
            _ => self.next_frame = self.next_frame.wrapping_add(1),
        }
    }

    /// Instant the event loop should wake for the next frame
    ///
    /// `None` while paused or after a non-repeating animation has ended.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.paused || self.finished {
            None
        } else {
            self.deadline
        }
    }

    /// Pause or resume; resuming makes the next frame due immediately
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        if !paused {
            self.deadline = None;
        }
    }

    /// Toggle pause, returning the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Index of the frame the next tick will yield
    #[inline]
    pub fn next_frame(&self) -> u32 {
        self.next_frame
    }

    #[inline]
    pub fn timing(&self) -> Timing {
        self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_due_immediately() {
        let mut clock = FrameClock::new(Timing::every_ms(50));
        let now = Instant::now();
        assert_eq!(clock.tick(now), Some(0));
        assert_eq!(clock.next_deadline(), Some(now + Duration::from_millis(50)));
    }

    #[test]
    fn test_no_frame_before_deadline() {
        let mut clock = FrameClock::new(Timing::every_ms(50));
        let now = Instant::now();
        clock.tick(now);
        assert_eq!(clock.tick(now + Duration::from_millis(10)), None);
        assert_eq!(clock.tick(now + Duration::from_millis(50)), Some(1));
    }

    #[test]
    fn test_bounded_repeat_wraps() {
        let mut clock = FrameClock::new(Timing::bounded(60, 3));
        let mut now = Instant::now();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(clock.tick(now).unwrap());
            now += Duration::from_millis(60);
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_bounded_without_repeat_finishes() {
        let timing = Timing { repeat: false, ..Timing::bounded(60, 2) };
        let mut clock = FrameClock::new(timing);
        let mut now = Instant::now();
        assert_eq!(clock.tick(now), Some(0));
        now += Duration::from_millis(60);
        assert_eq!(clock.tick(now), Some(1));
        now += Duration::from_millis(60);
        assert_eq!(clock.tick(now), None);
        assert!(clock.is_finished());
        assert!(clock.next_deadline().is_none());
    }

    #[test]
    fn test_pause_and_resume() {
        let mut clock = FrameClock::new(Timing::every_ms(50));
        let now = Instant::now();
        clock.tick(now);
        assert!(clock.toggle_pause());
        assert_eq!(clock.tick(now + Duration::from_secs(1)), None);
        assert!(clock.next_deadline().is_none());
        assert!(!clock.toggle_pause());
        // Resumed: the next frame is due right away and continues the count
        assert_eq!(clock.tick(now + Duration::from_secs(1)), Some(1));
    }

    #[test]
    fn test_zero_frames_never_ticks() {
        let mut clock = FrameClock::new(Timing::bounded(60, 0));
        assert!(clock.is_finished());
        assert_eq!(clock.tick(Instant::now()), None);
    }
}
