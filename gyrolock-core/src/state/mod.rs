//! Lock state machine
//!
//! Defines the authoritative behavior of the lock. The state machine is
//! explicit, finite, and deterministic.

pub mod action;
pub mod machine;

pub use action::{Action, Outcome};
pub use machine::LockState;
