//! Button press classification
//!
//! ## Hardware
//!
//! A single momentary push button. The edge handlers run in interrupt
//! context and may preempt the lock loop at any point; the lock loop
//! polls for the resulting event.
//!
//! ## Classification
//!
//! | Press       | Condition                       | Event   |
//! |-------------|---------------------------------|---------|
//! | Short press | Release before the threshold    | `Short` |
//! | Long press  | Held for at least the threshold | `Long`  |
//!
//! The classified event is latched in a [`PendingButton`] slot. The slot
//! holds at most one event; a newer press overwrites an unconsumed one.

use portable_atomic::{AtomicU8, Ordering};

/// Classified button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Short,
    Long,
}

// Slot encoding
const SLOT_EMPTY: u8 = 0;
const SLOT_SHORT: u8 = 1;
const SLOT_LONG: u8 = 2;

impl ButtonEvent {
    fn to_slot(self) -> u8 {
        match self {
            ButtonEvent::Short => SLOT_SHORT,
            ButtonEvent::Long => SLOT_LONG,
        }
    }

    fn from_slot(raw: u8) -> Option<Self> {
        match raw {
            SLOT_SHORT => Some(ButtonEvent::Short),
            SLOT_LONG => Some(ButtonEvent::Long),
            _ => None,
        }
    }
}

/// Single-event handoff between edge handlers and the lock loop
///
/// Publishing and consuming are each one atomic operation on one byte,
/// so the loop can never observe a half-written event.
pub struct PendingButton {
    slot: AtomicU8,
}

impl Default for PendingButton {
    fn default() -> Self {
        Self::new()
    }
}

impl PendingButton {
    pub const fn new() -> Self {
        Self {
            slot: AtomicU8::new(SLOT_EMPTY),
        }
    }

    /// Latch an event, replacing any unconsumed one
    pub fn publish(&self, event: ButtonEvent) {
        self.slot.store(event.to_slot(), Ordering::Release);
    }

    /// Consume the pending event, if any
    pub fn take(&self) -> Option<ButtonEvent> {
        ButtonEvent::from_slot(self.slot.swap(SLOT_EMPTY, Ordering::AcqRel))
    }

    /// Drop any stale event
    pub fn clear(&self) {
        self.slot.store(SLOT_EMPTY, Ordering::Release);
    }
}

/// Edge-pair press classifier
///
/// Owned by the edge handler. Times are microseconds from a monotonic
/// counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonClassifier {
    long_press_us: u64,
    pressed_at_us: Option<u64>,
}

impl ButtonClassifier {
    pub fn new(long_press_us: u64) -> Self {
        Self {
            long_press_us,
            pressed_at_us: None,
        }
    }

    /// Button went down; (re)start the press timer
    pub fn on_rise(&mut self, now_us: u64) {
        self.pressed_at_us = Some(now_us);
    }

    /// Button came up; classify the press and reset the timer
    ///
    /// Returns `None` for a release without a recorded press.
    pub fn on_fall(&mut self, now_us: u64) -> Option<ButtonEvent> {
        let pressed_at = self.pressed_at_us.take()?;
        let held_us = now_us.saturating_sub(pressed_at);

        if held_us >= self.long_press_us {
            Some(ButtonEvent::Long)
        } else {
            Some(ButtonEvent::Short)
        }
    }

    /// Classify a release and latch the result in `pending`
    pub fn on_fall_into(&mut self, now_us: u64, pending: &PendingButton) -> Option<ButtonEvent> {
        let event = self.on_fall(now_us)?;
        pending.publish(event);
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: u64 = 3_000_000;

    #[test]
    fn test_short_press() {
        let mut button = ButtonClassifier::new(LONG);
        button.on_rise(1_000);
        assert_eq!(button.on_fall(201_000), Some(ButtonEvent::Short));
    }

    #[test]
    fn test_long_press_at_threshold() {
        let mut button = ButtonClassifier::new(LONG);
        button.on_rise(0);
        assert_eq!(button.on_fall(LONG), Some(ButtonEvent::Long));

        button.on_rise(10);
        assert_eq!(button.on_fall(10 + LONG - 1), Some(ButtonEvent::Short));
    }

    #[test]
    fn test_fall_without_rise() {
        let mut button = ButtonClassifier::new(LONG);
        assert_eq!(button.on_fall(5_000), None);
    }

    #[test]
    fn test_rise_restarts_timer() {
        let mut button = ButtonClassifier::new(LONG);
        button.on_rise(0);
        button.on_rise(2_900_000);
        assert_eq!(button.on_fall(3_100_000), Some(ButtonEvent::Short));
    }

    #[test]
    fn test_timer_resets_between_presses() {
        let mut button = ButtonClassifier::new(LONG);
        button.on_rise(0);
        button.on_fall(4_000_000);
        assert_eq!(button.on_fall(9_000_000), None);
    }

    #[test]
    fn test_pending_take_consumes() {
        let pending = PendingButton::new();
        assert_eq!(pending.take(), None);

        pending.publish(ButtonEvent::Short);
        assert_eq!(pending.take(), Some(ButtonEvent::Short));
        assert_eq!(pending.take(), None);
    }

    #[test]
    fn test_pending_overwrites() {
        let pending = PendingButton::new();
        pending.publish(ButtonEvent::Short);
        pending.publish(ButtonEvent::Long);
        assert_eq!(pending.take(), Some(ButtonEvent::Long));
        assert_eq!(pending.take(), None);
    }

    #[test]
    fn test_pending_clear() {
        let pending = PendingButton::new();
        pending.publish(ButtonEvent::Long);
        pending.clear();
        assert_eq!(pending.take(), None);
    }

    #[test]
    fn test_fall_into_publishes() {
        let pending = PendingButton::new();
        let mut button = ButtonClassifier::new(LONG);
        button.on_rise(0);
        assert_eq!(button.on_fall_into(LONG + 1, &pending), Some(ButtonEvent::Long));
        assert_eq!(pending.take(), Some(ButtonEvent::Long));

        assert_eq!(button.on_fall_into(LONG + 2, &pending), None);
        assert_eq!(pending.take(), None);
    }
}
