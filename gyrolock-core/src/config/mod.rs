//! Configuration types
//!
//! Board-agnostic tuning values for quantization, button timing and
//! recording sessions.

pub mod types;

pub use types::*;
