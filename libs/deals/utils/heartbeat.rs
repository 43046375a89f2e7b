//! Heartbeat logging for long-running processes

use chrono::{DateTime, Duration, Utc};

/// Tracks when the last periodic status line was emitted.
pub struct Heartbeat {
    interval: Duration,
    last_beat: DateTime<Utc>,
}

impl Heartbeat {
    /// Create a new heartbeat with the given interval in seconds.
    pub fn new(interval_secs: u64) -> Self {
        Self {
            interval: Duration::seconds(interval_secs as i64),
            last_beat: Utc::now(),
        }
    }

    /// Whether enough time has passed since the last beat.
    pub fn should_beat(&self) -> bool {
        Utc::now().signed_duration_since(self.last_beat) >= self.interval
    }

    /// Record a beat at the current time.
    pub fn beat(&mut self) {
        self.last_beat = Utc::now();
    }
}
