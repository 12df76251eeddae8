//! Embassy-backed time sources

use embassy_time::Instant;
use gyrolock_core::traits::Monotonic;

/// Microsecond clock driven by the embassy time driver
#[derive(Clone, Copy, Default)]
pub struct UptimeClock;

impl Monotonic for UptimeClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}
