use std::time::{Duration, Instant};

pub const DEFAULT_TURN_LIMIT: Duration = Duration::from_secs(30);

/// Per-turn countdown. Time is passed in explicitly so callers control the
/// clock.
#[derive(Debug, Clone, Copy)]
pub struct TurnTimer {
    limit: Duration,
    started: Instant,
}

impl TurnTimer {
    pub fn new(limit: Duration) -> Self {
        TurnTimer {
            limit,
            started: Instant::now(),
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Start a fresh turn at `now`
    pub fn restart(&mut self, now: Instant) {
        self.started = now;
    }

    pub fn set_limit(&mut self, limit: Duration, now: Instant) {
        self.limit = limit;
        self.started = now;
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.limit
            .saturating_sub(now.saturating_duration_since(self.started))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_LIMIT)
    }
}
