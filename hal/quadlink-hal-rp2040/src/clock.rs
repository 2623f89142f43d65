//! Monotonic clock over the embassy time driver

use embassy_time::Instant;
use quadlink_hal::MonotonicClock;

/// Microseconds since boot
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}
