//! User button task
//!
//! Timestamps both edges of the user button and publishes a classified
//! press to [`PENDING_BUTTON`]. Runs on the interrupt executor so it keeps
//! working while the lock loop is busy recording.

use defmt::*;
use embassy_stm32::exti::ExtiInput;
use embassy_time::{Instant, Timer};

use gyrolock_core::input::ButtonClassifier;

use crate::channels::PENDING_BUTTON;

/// Contact bounce settle time after each edge
const DEBOUNCE_MS: u64 = 20;

#[embassy_executor::task]
pub async fn button_task(mut button: ExtiInput<'static>, long_press_us: u64) {
    info!("Button task started");

    let mut classifier = ButtonClassifier::new(long_press_us);

    loop {
        // The Discovery user button is active high
        button.wait_for_rising_edge().await;
        classifier.on_rise(Instant::now().as_micros());
        Timer::after_millis(DEBOUNCE_MS).await;

        if button.is_high() {
            button.wait_for_falling_edge().await;
        }
        if let Some(event) = classifier.on_fall_into(Instant::now().as_micros(), &PENDING_BUTTON)
        {
            debug!("Button: {:?}", event);
        }
        Timer::after_millis(DEBOUNCE_MS).await;
    }
}
