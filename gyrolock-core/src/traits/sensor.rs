//! Angular-rate sensor trait

/// One momentary angular-rate reading, raw sensor units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

/// Trait for three-axis angular-rate sensors
///
/// Implementations return the most recent available reading. When no new
/// data is ready the previous reading may be returned unchanged; the
/// recorder debounces at the symbol level and does not care.
///
/// Reads are infallible from the core's point of view. Drivers that can
/// see bus errors are expected to keep their last good sample.
pub trait RateSensor {
    /// Read the latest angular-rate sample
    fn read_sample(&mut self) -> RawSample;
}
