//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static logo display, held while resources are loading
    Display,
    /// Logo animating upward
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Splash screen animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// When the scroll-up animation started
    pub scroll_started: Option<Instant>,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashState {
    /// Minimum display duration before animation starts
    const DISPLAY_DURATION: Duration = Duration::from_millis(900);
    /// Duration of scroll-up animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(600);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            scroll_started: None,
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time.
    ///
    /// The logo stays in [`SplashPhase::Display`] until `resources_ready`.
    pub fn update(&mut self, terminal_height: u16, resources_ready: bool) {
        if self.phase == SplashPhase::Complete {
            return;
        }

        if !resources_ready || self.start_time.elapsed() < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
            return;
        }

        let scroll_started = *self.scroll_started.get_or_insert_with(Instant::now);
        let animation_elapsed = scroll_started.elapsed();

        if animation_elapsed < Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let progress =
                animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-out for smooth deceleration
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * (terminal_height as f32);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}
