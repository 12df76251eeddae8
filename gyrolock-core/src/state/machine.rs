//! Lock state machine definition
//!
//! Pure decision logic: given the current state and the pending button
//! event, pick the action the controller must carry out. Recording and
//! notification happen in the controller; the resulting state depends on
//! the action's outcome (see [`Action::resolve`]).

use super::action::{Action, Outcome};
use crate::input::ButtonEvent;

/// Lock states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockState {
    /// Power-on; no key enrolled yet
    AwaitingEnrollment,
    /// Key enrolled, device locked
    Locked,
    /// Correct password entered
    Unlocked,
    /// Key recording session in progress
    RecordingKey,
    /// Password recording session in progress
    RecordingPassword,
}

impl LockState {
    /// Decide what to do with a pending button event
    ///
    /// This is the core transition table.
    pub fn plan(self, event: Option<ButtonEvent>) -> Action {
        use ButtonEvent::*;
        use LockState::*;

        match (self, event) {
            // Entry action, regardless of input
            (AwaitingEnrollment, _) => Action::Enroll,

            // Locked transitions
            (Locked, Some(Long)) => Action::RejectKeyChange,
            (Locked, Some(Short)) => Action::VerifyPassword,

            // Unlocked transitions
            (Unlocked, Some(Long)) => Action::ChangeKey,
            (Unlocked, Some(Short)) => Action::Lock,

            // Default: stay in current state
            _ => Action::None,
        }
    }

    /// State held while `action` is being carried out
    pub fn during(self, action: Action) -> Self {
        match action {
            Action::Enroll | Action::ChangeKey => LockState::RecordingKey,
            Action::VerifyPassword => LockState::RecordingPassword,
            _ => self,
        }
    }
}

impl Action {
    /// State reached once the action has completed with `outcome`
    pub fn resolve(self, from: LockState, outcome: Outcome) -> LockState {
        use LockState::*;

        match (self, outcome) {
            (Action::Enroll, Outcome::KeyStored) => Locked,
            (Action::Enroll, _) => AwaitingEnrollment,
            // An empty re-enrollment keeps the previous key
            (Action::ChangeKey, _) => Locked,
            (Action::VerifyPassword, Outcome::Accepted) => Unlocked,
            (Action::VerifyPassword, _) => Locked,
            (Action::RejectKeyChange, _) => Locked,
            (Action::Lock, _) => Locked,
            (Action::None, _) => from,
        }
    }
}
