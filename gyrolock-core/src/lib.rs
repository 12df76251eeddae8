//! Board-agnostic core logic for the gesture lock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (rate sensor, status display, monotonic clock)
//! - Axis quantization with hysteresis
//! - Gesture recording sessions
//! - Button press classification and the pending-event slot
//! - Lock state machine and the controller that drives it
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod gesture;
pub mod input;
pub mod state;
pub mod traits;

#[cfg(test)]
mod test_support;

pub use controller::{LockController, Step};
