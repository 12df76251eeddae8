//! Display backend trait
//!
//! Defines the interface for different output types.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Text does not fit
    BufferOverflow,
}

/// Banner colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    Red,
    Green,
    Blue,
    Cyan,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for presenting a single status
/// banner. Implementations handle the specifics of LCDs, OLEDs, or plain
/// indicator LEDs.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self, background: Color) -> Result<(), DisplayError>;

    /// Draw a centered message
    fn draw_message(&mut self, text: &str, foreground: Color, background: Color)
        -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;
}
