//! Build script for gyrolock-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates lock.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys accepted in the [lock] table
const LOCK_KEYS: [&str; 4] = [
    "change_trigger",
    "long_press_us",
    "session_timeout_us",
    "dwell_ms",
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate lock.toml at compile time
///
/// The firmware falls back to defaults on a bad config, so catching
/// mistakes here is the only way to hear about them before flashing.
fn validate_config() {
    println!("cargo:rerun-if-changed=lock.toml");

    let config_path = Path::new("lock.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: lock.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds lock.toml at build time.                    ║\n\
            ║  Please create one in the gyrolock-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read lock.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in lock.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let errors = validate_lock(&config);
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid [lock] configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=lock.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check the [lock] table against the ranges the firmware accepts
fn validate_lock(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let lock = match config.get("lock") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[lock] must be a table".to_string());
            return errors;
        }
        // Everything defaults
        None => return errors,
    };

    for key in lock.keys() {
        if !LOCK_KEYS.contains(&key.as_str()) {
            errors.push(format!("[lock] unknown key '{}'", key));
        }
    }

    for key in LOCK_KEYS {
        match lock.get(key) {
            None => {}
            Some(toml::Value::Integer(value)) => {
                if let Some(msg) = check_range(key, *value) {
                    errors.push(msg);
                }
            }
            Some(_) => errors.push(format!("[lock] '{}' must be an integer", key)),
        }
    }

    errors
}

fn check_range(key: &str, value: i64) -> Option<String> {
    let (min, max) = match key {
        "change_trigger" => (1, i16::MAX as i64),
        "dwell_ms" => (0, u32::MAX as i64),
        _ => (1, i64::MAX),
    };
    if value < min || value > max {
        Some(format!("[lock] {} must be {}-{}", key, min, max))
    } else {
        None
    }
}
