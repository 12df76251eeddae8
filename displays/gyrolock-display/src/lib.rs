//! Display abstraction traits and status banners for Gyrolock
//!
//! This crate provides:
//! - `DisplayBackend` trait for different output types (LCD, OLED, LEDs)
//! - `Banner` describing how each lock status is presented
//! - `BannerDisplay`, the lock controller's display collaborator
//!
//! # Architecture
//!
//! The lock core only ever emits a `DisplayState` value. `BannerDisplay`
//! turns that value into a banner and pushes it through whatever backend
//! the board provides, so the core never depends on rendering code.

#![no_std]

pub mod backend;
pub mod banner;
pub mod status;

// Re-export key types
pub use backend::{Color, DisplayBackend, DisplayError};
pub use banner::Banner;
pub use status::BannerDisplay;
