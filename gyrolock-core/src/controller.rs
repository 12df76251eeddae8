//! Lock controller coordinating the state machine and recording sessions
//!
//! The controller is the central brain that:
//! - Consumes the pending button event once per poll
//! - Asks the state machine what to do
//! - Runs recording sessions and compares attempts to the key
//! - Notifies the display of every state change
//!
//! It owns the key, the last attempt, and the lock state. Nothing else in
//! the system holds lock status.

use embedded_hal::delay::DelayNs;

use crate::config::LockConfig;
use crate::gesture::{GestureRecorder, GestureSequence, RecordMode, StopReason};
use crate::input::{ButtonEvent, PendingButton};
use crate::state::{Action, LockState, Outcome};
use crate::traits::{DisplayState, Monotonic, RateSensor, StatusDisplay};

/// Summary of one controller poll that did some work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// State before the poll
    pub from: LockState,
    /// Button event consumed by the poll
    pub event: Option<ButtonEvent>,
    /// Action carried out
    pub action: Action,
    /// How the action ended
    pub outcome: Outcome,
    /// State after the poll
    pub to: LockState,
    /// Why the recording session ended, if one ran
    pub stop: Option<StopReason>,
    /// Points recorded, if a session ran
    pub points: usize,
}

/// Gesture lock controller
///
/// Generic over its collaborators:
/// - `S`: angular-rate sensor
/// - `D`: status display
/// - `M`: monotonic microsecond clock
/// - `W`: blocking delay for notification dwell
pub struct LockController<'a, S, D, M, W> {
    state: LockState,
    key: GestureSequence,
    attempt: GestureSequence,
    recorder: GestureRecorder,
    config: LockConfig,
    button: &'a PendingButton,
    sensor: S,
    display: D,
    clock: M,
    delay: W,
}

impl<'a, S, D, M, W> LockController<'a, S, D, M, W>
where
    S: RateSensor,
    D: StatusDisplay,
    M: Monotonic,
    W: DelayNs,
{
    /// Create a controller awaiting its first key
    pub fn new(
        config: LockConfig,
        button: &'a PendingButton,
        sensor: S,
        display: D,
        clock: M,
        delay: W,
    ) -> Self {
        Self {
            state: LockState::AwaitingEnrollment,
            key: GestureSequence::new(),
            attempt: GestureSequence::new(),
            recorder: GestureRecorder::new(&config),
            config,
            button,
            sensor,
            display,
            clock,
            delay,
        }
    }

    /// Get current state
    pub fn state(&self) -> LockState {
        self.state
    }

    /// Get the enrolled key (empty before enrollment)
    pub fn key(&self) -> &GestureSequence {
        &self.key
    }

    /// Get the most recent password attempt
    pub fn last_attempt(&self) -> &GestureSequence {
        &self.attempt
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Run one iteration of the lock loop
    ///
    /// The pending button event is consumed whether or not it leads
    /// anywhere. Blocks for the duration of any recording session and
    /// notification dwell. Returns `None` when nothing happened.
    pub fn poll(&mut self) -> Option<Step> {
        let event = self.button.take();
        let from = self.state;
        let action = from.plan(event);

        if action == Action::None {
            return None;
        }

        self.state = from.during(action);

        let (outcome, stop, points) = match action {
            Action::Enroll => self.record_key(RecordMode::Untimed),
            Action::ChangeKey => self.record_key(RecordMode::Timed),
            Action::VerifyPassword => self.verify_password(),
            Action::RejectKeyChange => {
                self.dwell_on(DisplayState::NoKeyAllowed);
                (Outcome::Done, None, 0)
            }
            Action::Lock | Action::None => (Outcome::Done, None, 0),
        };

        let to = action.resolve(from, outcome);
        self.state = to;

        match to {
            LockState::Locked => self.display.notify(DisplayState::Locked),
            LockState::Unlocked => self.display.notify(DisplayState::Unlocked),
            _ => {}
        }

        Some(Step {
            from,
            event,
            action,
            outcome,
            to,
            stop,
            points,
        })
    }

    /// Record a key; replace the stored one only if points were captured
    fn record_key(&mut self, mode: RecordMode) -> (Outcome, Option<StopReason>, usize) {
        self.display.notify(DisplayState::EnterKey);
        let recording = self
            .recorder
            .record(&mut self.sensor, &self.clock, self.button, mode);
        let points = recording.sequence.len();

        let outcome = if recording.sequence.is_empty() {
            if self.key.is_empty() {
                Outcome::NoKeyRecorded
            } else {
                Outcome::KeyKept
            }
        } else {
            self.key = recording.sequence;
            self.dwell_on(DisplayState::KeyStored);
            Outcome::KeyStored
        };

        (outcome, Some(recording.stop), points)
    }

    /// Record a password attempt and compare it to the key
    fn verify_password(&mut self) -> (Outcome, Option<StopReason>, usize) {
        self.display.notify(DisplayState::EnterPassword);
        let recording =
            self.recorder
                .record(&mut self.sensor, &self.clock, self.button, RecordMode::Timed);
        let stop = recording.stop;
        self.attempt = recording.sequence;

        let outcome = if self.attempt.matches(&self.key) {
            self.dwell_on(DisplayState::CorrectPassword);
            Outcome::Accepted
        } else {
            self.dwell_on(DisplayState::IncorrectPassword);
            Outcome::Rejected
        };

        (outcome, Some(stop), self.attempt.len())
    }

    /// Show a transient notification for the configured dwell
    fn dwell_on(&mut self, state: DisplayState) {
        debug_assert!(state.is_transient());
        self.display.notify(state);
        self.delay.delay_ms(self.config.dwell_ms);
    }
}
