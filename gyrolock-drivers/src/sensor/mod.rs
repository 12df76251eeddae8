//! Angular-rate sensor drivers

pub mod i3g4250d;

pub use i3g4250d::{GyroError, I3g4250d};
