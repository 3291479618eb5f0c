//! Time sources
//!
//! The travel calculator never reads the time on its own. It asks a
//! [`Clock`] for the current millisecond count, which makes every position
//! computation reproducible under test.

mod manual;

#[cfg(feature = "embassy")]
mod embassy;
#[cfg(feature = "std")]
mod system;

pub use manual::ManualClock;

#[cfg(feature = "embassy")]
pub use embassy::EmbassyClock;
#[cfg(feature = "std")]
pub use system::SystemClock;

/// Source of the current time
///
/// Readings only need to be consistent with each other: the calculator
/// subtracts two readings to get the elapsed travel time, so the epoch is
/// irrelevant.
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Convert a millisecond interval into seconds
pub fn ms_to_s(ms: u64) -> f32 {
    ms as f32 / 1000.0
}

/// Convert seconds into whole milliseconds (negative values clamp to zero)
pub fn s_to_ms(seconds: f32) -> u64 {
    if seconds <= 0.0 {
        return 0;
    }
    (seconds * 1000.0) as u64
}
