//! Status display trait
//!
//! The core never draws anything. It hands a [`DisplayState`] value to
//! the display collaborator, which decides how to present it.

/// What the device is currently telling the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    /// Key recording in progress
    EnterKey,
    /// Password attempt recording in progress
    EnterPassword,
    /// Device is locked
    Locked,
    /// Device is unlocked
    Unlocked,
    /// Attempt did not match the key
    IncorrectPassword,
    /// Attempt matched the key
    CorrectPassword,
    /// Key change requested while locked
    NoKeyAllowed,
    /// New key stored
    KeyStored,
}

impl DisplayState {
    /// Check if this notification is shown briefly before a steady state
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DisplayState::KeyStored
                | DisplayState::CorrectPassword
                | DisplayState::IncorrectPassword
                | DisplayState::NoKeyAllowed
        )
    }
}

/// Trait for the status display collaborator
///
/// Fire-and-forget: the core does not consume any result.
pub trait StatusDisplay {
    /// Present a new status to the user
    fn notify(&mut self, state: DisplayState);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_states() {
        assert!(DisplayState::KeyStored.is_transient());
        assert!(DisplayState::CorrectPassword.is_transient());
        assert!(DisplayState::IncorrectPassword.is_transient());
        assert!(DisplayState::NoKeyAllowed.is_transient());
        assert!(!DisplayState::Locked.is_transient());
        assert!(!DisplayState::Unlocked.is_transient());
        assert!(!DisplayState::EnterKey.is_transient());
    }
}
