//! embassy-time source for firmware targets

use embassy_time::Instant;

use super::Clock;

/// Milliseconds since boot, as tracked by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
