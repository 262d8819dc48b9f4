//! Link status and time sources consulted by the refresh loop.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Whether the network link is currently up.
///
/// Checked before each fetch; an offline link turns a due refresh into a
/// no-op without touching the schedule.
pub trait Connectivity {
    fn is_connected(&self) -> bool;
}

impl<F> Connectivity for F
where
    F: Fn() -> bool,
{
    fn is_connected(&self) -> bool {
        self()
    }
}

/// A link that is never down.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConnected;

impl Connectivity for AlwaysConnected {
    fn is_connected(&self) -> bool {
        true
    }
}

/// Shared flag flipped by whatever owns the network interface.
///
/// Clones share the same flag.
#[derive(Debug, Clone)]
pub struct LinkState {
    up: Arc<AtomicBool>,
}

impl LinkState {
    pub fn new(connected: bool) -> Self {
        Self {
            up: Arc::new(AtomicBool::new(connected)),
        }
    }

    pub fn set_connected(&self, connected: bool) {
        let was = self.up.swap(connected, Ordering::SeqCst);
        if was != connected {
            tracing::info!(connected, "link state changed");
        }
    }
}

impl Default for LinkState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Connectivity for LinkState {
    fn is_connected(&self) -> bool {
        self.up.load(Ordering::SeqCst)
    }
}

/// Millisecond time source for schedules.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Milliseconds since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Clock advanced by hand. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_state_shared_between_clones() {
        let link = LinkState::new(true);
        let observer = link.clone();
        assert!(observer.is_connected());
        link.set_connected(false);
        assert!(!observer.is_connected());
    }

    #[test]
    fn test_closure_connectivity() {
        let offline = || false;
        assert!(!offline.is_connected());
        assert!(AlwaysConnected.is_connected());
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(1_000);
        let view = clock.clone();
        clock.advance(500);
        assert_eq!(view.now_ms(), 1_500);
        clock.set(10);
        assert_eq!(view.now_ms(), 10);
    }

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
