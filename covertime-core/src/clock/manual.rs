//! Manually driven clock for tests and simulations

use core::cell::Cell;

use super::{s_to_ms, Clock};

/// Clock that only moves when told to
///
/// Interior mutability lets a test keep a shared reference to the clock
/// while a calculator borrows it:
///
/// ```
/// use covertime_core::{Clock, ManualClock};
///
/// let clock = ManualClock::new(0);
/// let observer = &clock;
/// clock.advance_s(10.0);
/// assert_eq!(observer.now_ms(), 10_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Cell<u64>,
}

impl ManualClock {
    /// Create a clock reading `now_ms`
    pub const fn new(now_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    /// Jump to an absolute time
    pub fn set_ms(&self, now_ms: u64) {
        self.now_ms.set(now_ms);
    }

    /// Move forward by `delta_ms`
    pub fn advance_ms(&self, delta_ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(delta_ms));
    }

    /// Move forward by a number of seconds
    pub fn advance_s(&self, seconds: f32) {
        self.advance_ms(s_to_ms(seconds));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}
