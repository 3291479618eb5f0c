//! Wall-clock time source for host integrations

use std::time::{SystemTime, UNIX_EPOCH};

use super::Clock;

/// Milliseconds since the UNIX epoch
///
/// A system clock that reads earlier than the epoch reports zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}
