//! Hardware abstraction traits
//!
//! These traits define the interface between the lock logic
//! and hardware-specific implementations.

pub mod clock;
pub mod display;
pub mod sensor;

pub use clock::Monotonic;
pub use display::{DisplayState, StatusDisplay};
pub use sensor::{RateSensor, RawSample};
