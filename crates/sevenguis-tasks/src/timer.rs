//! Timer task

use crate::round1;
use std::time::{Duration, Instant};

/// Longest selectable duration.
pub const MAX_DURATION: Duration = Duration::from_secs(60);

/// Default duration when the slider hasn't been touched.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(30);

/// Elapsed-time display state driven by an externally supplied clock.
///
/// The timer never reads a clock itself; callers pass `now` in, which
/// keeps the model deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    started: Instant,
    duration: Duration,
}

impl Timer {
    /// Start a timer at `now` with the default duration.
    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            duration: DEFAULT_DURATION,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Move the duration slider; clamped to the selectable range.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration.min(MAX_DURATION);
    }

    /// Seconds elapsed since the last reset, clamped to the duration and
    /// rounded to one decimal.
    pub fn elapsed_secs(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        round1(elapsed.min(self.duration.as_secs_f64()))
    }

    /// Whether the elapsed bar has filled up.
    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Restart from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.started = now;
    }

    /// The `12.3s / 30` line shown next to the progress bar.
    pub fn label(&self, now: Instant) -> String {
        format!(
            "{:.1}s / {}",
            self.elapsed_secs(now),
            self.duration.as_secs()
        )
    }
}
