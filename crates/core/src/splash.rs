//! Splash playback state machine.
//!
//! Playback has two states. `Playing` carries the cursor into the loaded
//! frames, so a position only exists while something is playing:
//!
//! ```text
//!            set_splash / start
//!   Stopped ───────────────────▶ Playing { position: 0 }
//!      ▲                            │  step: draw frame, pause, position += 1
//!      └────────────────────────────┘  stop, or position reaches frame count
//! ```
//!
//! Playback never loops; re-entering requires `start` or a new `load`.

use std::time::Duration;

use crate::field::FieldSnapshot;
use crate::types::DEFAULT_SPLASH_TIMEOUT_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashState {
    Stopped,
    Playing { position: usize },
}

#[derive(Debug, Clone)]
pub struct Splash {
    frames: Vec<FieldSnapshot>,
    frame_delay: Duration,
    state: SplashState,
}

impl Default for Splash {
    fn default() -> Self {
        Self::new()
    }
}

impl Splash {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            frame_delay: Duration::from_millis(DEFAULT_SPLASH_TIMEOUT_MS),
            state: SplashState::Stopped,
        }
    }

    /// Replace the loaded frames and delay, then start playing from frame 0.
    pub fn load(&mut self, frames: Vec<FieldSnapshot>, frame_delay: Duration) {
        self.frames = frames;
        self.frame_delay = frame_delay;
        self.start();
    }

    /// Play the already loaded frames from the beginning.
    pub fn start(&mut self) {
        log::debug!("splash start ({} frames)", self.frames.len());
        self.state = SplashState::Playing { position: 0 };
    }

    pub fn stop(&mut self) {
        if self.is_playing() {
            log::debug!("splash stop");
        }
        self.state = SplashState::Stopped;
    }

    pub fn state(&self) -> SplashState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, SplashState::Playing { .. })
    }

    /// Cursor into the frames; 0 while stopped.
    pub fn position(&self) -> usize {
        match self.state {
            SplashState::Playing { position } => position,
            SplashState::Stopped => 0,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// The frame the next step should draw.
    ///
    /// Returns `None` and falls back to `Stopped` when nothing is playing or
    /// the cursor has run past the last frame.
    pub fn due_frame(&mut self) -> Option<&FieldSnapshot> {
        let SplashState::Playing { position } = self.state else {
            return None;
        };
        if position >= self.frames.len() {
            self.stop();
            return None;
        }
        self.frames.get(position)
    }

    /// Move past the frame just drawn.
    pub fn advance(&mut self) {
        if let SplashState::Playing { position } = &mut self.state {
            *position = (*position + 1).min(self.frames.len());
        }
    }
}
