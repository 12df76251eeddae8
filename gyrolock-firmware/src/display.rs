//! Indicator LED display backend
//!
//! The Discovery board's LCD needs an FMC/LTDC stack this firmware does
//! not carry, so banners are shown on the two user LEDs and echoed over
//! RTT. Green means unlocked or accepted, red means locked or rejected,
//! both lit means the lock is waiting for a gesture.

use defmt::*;
use embassy_stm32::gpio::Output;

use gyrolock_display::{Color, DisplayBackend, DisplayError};

/// Two-LED status backend
pub struct LedBackend<'d> {
    green: Output<'d>,
    red: Output<'d>,
}

impl<'d> LedBackend<'d> {
    pub fn new(green: Output<'d>, red: Output<'d>) -> Self {
        Self { green, red }
    }

    fn set(&mut self, green: bool, red: bool) {
        if green {
            self.green.set_high();
        } else {
            self.green.set_low();
        }
        if red {
            self.red.set_high();
        } else {
            self.red.set_low();
        }
    }
}

impl DisplayBackend for LedBackend<'_> {
    fn clear(&mut self, _background: Color) -> Result<(), DisplayError> {
        self.set(false, false);
        Ok(())
    }

    fn draw_message(
        &mut self,
        text: &str,
        foreground: Color,
        _background: Color,
    ) -> Result<(), DisplayError> {
        match foreground {
            Color::Green => self.set(true, false),
            Color::Red => self.set(false, true),
            Color::Blue | Color::Cyan => self.set(true, true),
            Color::Black | Color::White => self.set(false, false),
        }
        info!("[display] {}", text);
        Ok(())
    }

    // LEDs latch immediately
    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}
