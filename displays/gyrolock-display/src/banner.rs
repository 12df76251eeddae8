//! Status banners
//!
//! One banner per lock status: a short message and its colours.

use gyrolock_core::traits::DisplayState;

use crate::backend::Color;

/// Longest banner message
pub const MAX_MESSAGE_LEN: usize = 20;

/// How one status is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Banner {
    pub text: &'static str,
    pub foreground: Color,
    pub background: Color,
}

impl Banner {
    const fn new(text: &'static str, foreground: Color, background: Color) -> Self {
        Self {
            text,
            foreground,
            background,
        }
    }

    /// Banner for a lock status
    pub fn for_state(state: DisplayState) -> Self {
        match state {
            DisplayState::EnterKey => Banner::new("Recording Key...", Color::Blue, Color::White),
            DisplayState::EnterPassword => {
                Banner::new("Enter Password...", Color::Cyan, Color::Black)
            }
            DisplayState::Locked => Banner::new("LOCKED!", Color::Red, Color::White),
            DisplayState::Unlocked => Banner::new("Unlocked!", Color::Green, Color::Black),
            DisplayState::IncorrectPassword => {
                Banner::new("Incorrect Password!", Color::Red, Color::Black)
            }
            DisplayState::CorrectPassword => {
                Banner::new("Correct Password!", Color::Green, Color::Black)
            }
            DisplayState::NoKeyAllowed => Banner::new("No Key Allowed!", Color::Red, Color::Black),
            DisplayState::KeyStored => Banner::new("New Key Stored!", Color::Cyan, Color::Black),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DisplayState; 8] = [
        DisplayState::EnterKey,
        DisplayState::EnterPassword,
        DisplayState::Locked,
        DisplayState::Unlocked,
        DisplayState::IncorrectPassword,
        DisplayState::CorrectPassword,
        DisplayState::NoKeyAllowed,
        DisplayState::KeyStored,
    ];

    #[test]
    fn test_messages_fit() {
        for state in ALL {
            let banner = Banner::for_state(state);
            assert!(!banner.text.is_empty());
            assert!(banner.text.len() <= MAX_MESSAGE_LEN);
        }
    }

    #[test]
    fn test_messages_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(Banner::for_state(*a).text, Banner::for_state(*b).text);
            }
        }
    }

    #[test]
    fn test_lock_colours() {
        assert_eq!(Banner::for_state(DisplayState::Locked).foreground, Color::Red);
        assert_eq!(Banner::for_state(DisplayState::Unlocked).foreground, Color::Green);
    }
}
