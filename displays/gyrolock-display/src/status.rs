//! Status display collaborator
//!
//! Adapts any [`DisplayBackend`] to the lock controller's
//! [`StatusDisplay`] trait.

use gyrolock_core::traits::{DisplayState, StatusDisplay};

use crate::backend::{DisplayBackend, DisplayError};
use crate::banner::Banner;

/// Renders lock status banners to a backend
///
/// Notifications are fire-and-forget for the controller, so rendering
/// failures are only counted and remembered here.
pub struct BannerDisplay<B> {
    backend: B,
    current: Option<DisplayState>,
    last_error: Option<DisplayError>,
    errors: u32,
}

impl<B: DisplayBackend> BannerDisplay<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
            last_error: None,
            errors: 0,
        }
    }

    /// Status most recently shown
    pub fn current(&self) -> Option<DisplayState> {
        self.current
    }

    /// Most recent rendering failure
    pub fn last_error(&self) -> Option<DisplayError> {
        self.last_error
    }

    /// Number of failed renders
    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Render a banner for `state`
    pub fn show(&mut self, state: DisplayState) -> Result<(), DisplayError> {
        let banner = Banner::for_state(state);
        self.backend.clear(banner.background)?;
        self.backend
            .draw_message(banner.text, banner.foreground, banner.background)?;
        self.backend.flush()
    }
}

impl<B: DisplayBackend> StatusDisplay for BannerDisplay<B> {
    fn notify(&mut self, state: DisplayState) {
        self.current = Some(state);
        if let Err(e) = self.show(state) {
            self.last_error = Some(e);
            self.errors = self.errors.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Color;
    use heapless::{String, Vec};

    #[derive(Default)]
    struct TextBackend {
        background: Option<Color>,
        shown: Vec<String<24>, 8>,
        flushes: u32,
        broken: bool,
    }

    impl DisplayBackend for TextBackend {
        fn clear(&mut self, background: Color) -> Result<(), DisplayError> {
            if self.broken {
                return Err(DisplayError::Communication);
            }
            self.background = Some(background);
            Ok(())
        }

        fn draw_message(
            &mut self,
            text: &str,
            _foreground: Color,
            _background: Color,
        ) -> Result<(), DisplayError> {
            let line = String::try_from(text).map_err(|_| DisplayError::BufferOverflow)?;
            self.shown
                .push(line)
                .map_err(|_| DisplayError::BufferOverflow)
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_notify_renders_banner() {
        let mut display = BannerDisplay::new(TextBackend::default());
        display.notify(DisplayState::Locked);
        display.notify(DisplayState::Unlocked);

        assert_eq!(display.current(), Some(DisplayState::Unlocked));
        let backend = display.backend();
        assert_eq!(backend.shown.len(), 2);
        assert_eq!(backend.shown[0].as_str(), "LOCKED!");
        assert_eq!(backend.shown[1].as_str(), "Unlocked!");
        assert_eq!(backend.background, Some(Color::Black));
        assert_eq!(backend.flushes, 2);
        assert_eq!(display.errors(), 0);
    }

    #[test]
    fn test_render_failure_is_recorded() {
        let mut display = BannerDisplay::new(TextBackend {
            broken: true,
            ..TextBackend::default()
        });
        display.notify(DisplayState::EnterKey);

        assert_eq!(display.current(), Some(DisplayState::EnterKey));
        assert_eq!(display.errors(), 1);
        assert_eq!(display.last_error(), Some(DisplayError::Communication));
    }
}
