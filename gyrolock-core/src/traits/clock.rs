//! Monotonic time source

/// Free-running microsecond counter
///
/// Used for button press timing and recording session timeouts. The
/// counter must never go backwards; wrap-around is not expected within
/// the device's uptime (64-bit microseconds).
pub trait Monotonic {
    /// Current time in microseconds since an arbitrary epoch
    fn now_us(&self) -> u64;

    /// Microseconds elapsed since `since_us`
    fn elapsed_us(&self, since_us: u64) -> u64 {
        self.now_us().saturating_sub(since_us)
    }
}
