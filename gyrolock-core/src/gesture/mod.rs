//! Gesture capture
//!
//! Turns a stream of raw angular-rate samples into a short sequence of
//! discrete gesture points.

pub mod axis;
pub mod recorder;
pub mod sequence;

pub use axis::{AxisQuantizer, AxisSymbol};
pub use recorder::{GestureRecorder, RecordMode, Recording, StopReason};
pub use sequence::{GesturePoint, GestureSequence, PushError};
