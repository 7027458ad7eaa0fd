//! Idle-chatter rate limiting
//!
//! Activity-triggered polling, not a timer task: the widget re-evaluates
//! this on the same pointer-down/touch-start/scroll events that drive
//! lazy initialization.

use std::time::{Duration, Instant};

/// Throttles the idle voice line by elapsed wall-clock time
pub struct IdleTimer {
    /// Instant of the last accepted interaction (or the last idle firing)
    last_interact: Instant,
    /// Threshold in minutes; `None` disables idle chatter entirely
    max_minutes: Option<u64>,
}

impl IdleTimer {
    pub fn new(max_minutes: Option<u64>) -> Self {
        Self::with_origin(max_minutes, Instant::now())
    }

    /// Start the inactivity window at an explicit instant
    pub fn with_origin(max_minutes: Option<u64>, origin: Instant) -> Self {
        Self {
            last_interact: origin,
            max_minutes,
        }
    }

    /// An interaction was accepted; restart the inactivity window
    pub fn mark_interaction(&mut self, now: Instant) {
        self.last_interact = now;
    }

    /// Whether the threshold has passed, without consuming the window
    pub fn should_trigger(&self, now: Instant) -> bool {
        let Some(max) = self.max_minutes else {
            return false;
        };
        minutes_within_hour(now.duration_since(self.last_interact)) >= max
    }

    /// Fire the trigger if due. Firing restarts the window, so the timer
    /// can never fire twice inside one threshold's worth of inactivity.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if !self.should_trigger(now) {
            return false;
        }
        self.last_interact = now;
        true
    }

    pub fn last_interaction(&self) -> Instant {
        self.last_interact
    }
}

/// Minute component of the elapsed time's hour/minute decomposition.
///
/// Deliberately NOT total elapsed minutes: the value rolls over to 0 at
/// every full hour of inactivity, so a threshold of 50 does not fire at
/// 65 minutes elapsed (the computed minute is 5), and thresholds of 60 or
/// more never fire at all. Long-standing behavior of the widget's
/// configuration format; kept as is.
fn minutes_within_hour(delta: Duration) -> u64 {
    let ms = delta.as_millis() as u64;
    let hours = ms / 3_600_000;
    ms / 60_000 - hours * 60
}
