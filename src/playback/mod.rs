//! Playback state machine for stepping through a trace
//!
//! [`Player`] only knows the number of steps; it never looks at the steps
//! themselves. The UI owns the clock and calls [`Player::tick`] whenever the
//! current [`Speed`] interval has elapsed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Already at the first step")]
    AtStart,

    #[error("Already at the last step")]
    AtEnd,
}

/// Auto-play speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Speed {
    #[serde(rename = "0.5x")]
    Half,
    #[default]
    #[serde(rename = "1x")]
    Normal,
    #[serde(rename = "2x")]
    Double,
    #[serde(rename = "4x")]
    Quadruple,
}

impl Speed {
    /// Delay between automatic steps
    pub fn interval(self) -> Duration {
        match self {
            Speed::Half => Duration::from_millis(1500),
            Speed::Normal => Duration::from_millis(1000),
            Speed::Double => Duration::from_millis(500),
            Speed::Quadruple => Duration::from_millis(250),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Speed::Half => "0.5x",
            Speed::Normal => "1x",
            Speed::Double => "2x",
            Speed::Quadruple => "4x",
        }
    }

    pub fn faster(self) -> Self {
        match self {
            Speed::Half => Speed::Normal,
            Speed::Normal => Speed::Double,
            Speed::Double | Speed::Quadruple => Speed::Quadruple,
        }
    }

    pub fn slower(self) -> Self {
        match self {
            Speed::Half | Speed::Normal => Speed::Half,
            Speed::Double => Speed::Normal,
            Speed::Quadruple => Speed::Double,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position and play state over a trace of `total` steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    position: usize,
    total: usize,
    playing: bool,
    speed: Speed,
}

impl Player {
    pub fn new(total: usize) -> Self {
        Player {
            position: 0,
            total,
            playing: false,
            speed: Speed::default(),
        }
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.total
    }

    /// Move one step forward; stops auto-play
    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        self.playing = false;
        self.advance()
    }

    /// Move one step back; stops auto-play
    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        self.playing = false;
        if self.is_at_start() {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    /// Step forward up to `n` times, returning how many steps were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        self.playing = false;
        let mut stepped = 0;
        while stepped < n && self.advance().is_ok() {
            stepped += 1;
        }
        stepped
    }

    pub fn reset(&mut self) {
        self.playing = false;
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.playing = false;
        self.position = self.total.saturating_sub(1);
    }

    /// Start or pause auto-play. Playback cannot start on the last step.
    pub fn toggle_play(&mut self) -> Result<bool, PlaybackError> {
        if self.playing {
            self.playing = false;
        } else if self.is_at_end() {
            return Err(PlaybackError::AtEnd);
        } else {
            self.playing = true;
        }
        tracing::trace!(playing = self.playing, position = self.position, "toggled playback");
        Ok(self.playing)
    }

    /// Advance one step if playing. Reaching the last step stops playback.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let moved = self.advance().is_ok();
        if self.is_at_end() {
            self.playing = false;
        }
        moved
    }

    fn advance(&mut self) -> Result<(), PlaybackError> {
        if self.is_at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }
}
