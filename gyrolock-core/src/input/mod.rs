//! User input
//!
//! Press classification runs in the button's edge handlers; the lock
//! loop only ever sees the latched [`ButtonEvent`].

pub mod button;

pub use button::{ButtonClassifier, ButtonEvent, PendingButton};
