//! Interval gate for one data class.
//!
//! A refresh is due when nothing was ever attempted or when at least one
//! interval has elapsed since the last attempt. The attempt time is stamped
//! when the fetch starts, so a failed fetch waits a full interval before the
//! next try.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSchedule {
    interval_ms: u64,
    last_attempt_ms: Option<u64>,
}

impl RefreshSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval_ms: interval.as_millis() as u64,
            last_attempt_ms: None,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        match self.last_attempt_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }

    /// Stamp `now_ms` and return `true` when due; otherwise leave the
    /// schedule untouched.
    pub fn try_begin(&mut self, now_ms: u64) -> bool {
        if !self.is_due(now_ms) {
            return false;
        }
        self.last_attempt_ms = Some(now_ms);
        true
    }

    /// Time of the last attempt, 0 if there never was one.
    pub fn last_attempt_ms(&self) -> u64 {
        self.last_attempt_ms.unwrap_or(0)
    }

    pub fn has_attempted(&self) -> bool {
        self.last_attempt_ms.is_some()
    }

    /// Forget the last attempt so the next tick fetches immediately.
    pub fn reset(&mut self) {
        self.last_attempt_ms = None;
    }
}
