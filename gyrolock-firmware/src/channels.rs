//! Shared state between the button task and the lock loop
//!
//! The button task runs on a higher-priority executor and preempts the
//! lock loop, so the handoff is a single atomic slot rather than a
//! channel: a newer press overwrites an unconsumed one.

use gyrolock_core::input::PendingButton;

/// Most recent classified press, consumed by the lock loop
pub static PENDING_BUTTON: PendingButton = PendingButton::new();
