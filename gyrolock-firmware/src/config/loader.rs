//! Lock configuration loader
//!
//! Parses the `[lock]` table of the embedded `lock.toml`. Falls back to
//! built-in defaults if the text does not parse or fails validation.

use defmt::*;
use serde::Deserialize;

use gyrolock_core::config::{ConfigError, LockConfig};

/// Configuration loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadError {
    /// TOML parsing failed
    TomlParse,
    /// Values parsed but are unusable
    Invalid(ConfigError),
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Invalid(e)
    }
}

/// Top level of lock.toml
#[derive(Deserialize, Default)]
struct LockFile {
    #[serde(default)]
    lock: LockConfig,
}

/// Parse and validate a lock configuration
pub fn parse_config(text: &str) -> Result<LockConfig, LoadError> {
    let file: LockFile = toml::from_str(text).map_err(|e| {
        warn!("TOML parse error: {:?}", defmt::Debug2Format(&e));
        LoadError::TomlParse
    })?;

    file.lock.validate()?;
    Ok(file.lock)
}

/// Load configuration, using defaults if the text is unusable
pub fn load_config(text: &str) -> LockConfig {
    match parse_config(text) {
        Ok(config) => {
            info!("Loaded lock configuration");
            log_config_summary(&config);
            config
        }
        Err(e) => {
            warn!("Config rejected ({:?}), using defaults", e);
            LockConfig::default()
        }
    }
}

fn log_config_summary(config: &LockConfig) {
    debug!(
        "  trigger={} long_press={}us timeout={}us dwell={}ms",
        config.change_trigger, config.long_press_us, config.session_timeout_us, config.dwell_ms
    );
}
