//! Actions chosen by the state machine and their outcomes

/// Work the controller performs for one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Nothing to do
    None,
    /// Record the first key (untimed session)
    Enroll,
    /// Refuse a key change while locked
    RejectKeyChange,
    /// Record a password attempt and compare it to the key
    VerifyPassword,
    /// Record a replacement key (timed session)
    ChangeKey,
    /// Lock immediately
    Lock,
}

/// Result of carrying out an [`Action`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Action needed no decision
    Done,
    /// A non-empty key was recorded and stored
    KeyStored,
    /// Key change produced no points; previous key kept
    KeyKept,
    /// Enrollment produced no points
    NoKeyRecorded,
    /// Password attempt matched the key
    Accepted,
    /// Password attempt did not match
    Rejected,
}

