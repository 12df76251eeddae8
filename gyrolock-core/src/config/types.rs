//! Configuration type definitions
//!
//! Defaults reproduce the behavior of the reference device. The firmware
//! may override them from its embedded `lock.toml`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum gesture points in one sequence
pub const MAX_POINTS: usize = 5;

/// Default hysteresis trigger in raw sensor units
pub const DEFAULT_CHANGE_TRIGGER: i16 = 20_000;

/// Default long press threshold (3 s)
pub const DEFAULT_LONG_PRESS_US: u64 = 3_000_000;

/// Default recording session timeout (15 s)
pub const DEFAULT_SESSION_TIMEOUT_US: u64 = 15_000_000;

/// Default dwell for transient notifications
pub const DEFAULT_DWELL_MS: u32 = 1_500;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Change trigger must be a positive value
    InvalidTrigger,
    /// Long press threshold must be non-zero
    InvalidLongPress,
    /// Session timeout must be non-zero
    InvalidTimeout,
}

/// Lock tuning configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LockConfig {
    /// Angular rate beyond which an axis symbol may change
    pub change_trigger: i16,
    /// Press duration at or above which a press counts as long
    pub long_press_us: u64,
    /// Recording session timeout (timed sessions only)
    pub session_timeout_us: u64,
    /// Dwell after a transient notification
    pub dwell_ms: u32,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            change_trigger: DEFAULT_CHANGE_TRIGGER,
            long_press_us: DEFAULT_LONG_PRESS_US,
            session_timeout_us: DEFAULT_SESSION_TIMEOUT_US,
            dwell_ms: DEFAULT_DWELL_MS,
        }
    }
}

impl LockConfig {
    /// Check that all values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.change_trigger <= 0 {
            return Err(ConfigError::InvalidTrigger);
        }
        if self.long_press_us == 0 {
            return Err(ConfigError::InvalidLongPress);
        }
        if self.session_timeout_us == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}
