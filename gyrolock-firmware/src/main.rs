//! Gyrolock - Gesture Lock Firmware
//!
//! Firmware binary for the STM32F429 Discovery board. The on-board
//! I3G4250D gyroscope records a motion key; performing the same motion
//! again unlocks the device. The user button drives every transition.
//!
//! # Execution model
//!
//! The lock loop is blocking: a recording session polls the gyroscope as
//! fast as it can until it completes, times out, or is cut short by the
//! button. It therefore runs in thread mode straight from `main`, while
//! the button task lives on an interrupt-driven executor that preempts
//! it. The only shared state is the pending button slot.

#![no_std]
#![no_main]

extern crate alloc;

use cortex_m_rt::entry;
use defmt::*;
use defmt::panic;
use embassy_executor::InterruptExecutor;
use embassy_stm32::bind_interrupts;
use embassy_stm32::exti::{self, ExtiInput};
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_stm32::spi::{self, Spi};
use embassy_stm32::time::Hertz;
use embassy_time::{block_for, Delay, Duration};
use embedded_alloc::LlffHeap as Heap;
use {defmt_rtt as _, panic_probe as _};

use gyrolock_core::{LockController, Step};
use gyrolock_display::BannerDisplay;
use gyrolock_drivers::sensor::I3g4250d;

use crate::channels::PENDING_BUTTON;
use crate::clock::UptimeClock;
use crate::config::load_config;
use crate::display::LedBackend;

mod channels;
mod clock;
mod config;
mod display;
mod tasks;

// Heap allocator for TOML parsing
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: 16KB
const HEAP_SIZE: usize = 16 * 1024;

/// Embedded configuration (compiled into firmware)
/// Edit lock.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../lock.toml");

/// Idle wait between lock loop polls
const POLL_INTERVAL_MS: u64 = 1;

/// Gyroscope SPI clock
const GYRO_SPI_HZ: u32 = 1_000_000;

bind_interrupts!(struct Irqs {
    EXTI0 => exti::InterruptHandler<embassy_stm32::interrupt::typelevel::EXTI0>;
});

/// Executor for the button task, driven by an otherwise unused interrupt
static EXECUTOR_BUTTON: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn UART4() {
    EXECUTOR_BUTTON.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Gyrolock firmware starting...");

    init_heap();
    let config = load_config(EMBEDDED_CONFIG);

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    // User LEDs: PG13 green, PG14 red
    let green = Output::new(p.PG13, Level::Low, Speed::Low);
    let red = Output::new(p.PG14, Level::Low, Speed::Low);
    let display = BannerDisplay::new(LedBackend::new(green, red));

    // Gyroscope on SPI5: PF7 SCK, PF8 MISO, PF9 MOSI, PC1 CS
    let mut spi_config = spi::Config::default();
    spi_config.frequency = Hertz(GYRO_SPI_HZ);
    spi_config.mode = spi::MODE_3;
    let spi = Spi::new_blocking(p.SPI5, p.PF7, p.PF9, p.PF8, spi_config);
    let cs = Output::new(p.PC1, Level::High, Speed::VeryHigh);

    let mut gyro = I3g4250d::new(spi, cs);
    if let Err(e) = gyro.init() {
        error!("Gyroscope bring-up failed: {:?}", e);
        panic!("sensor self-check failed");
    }
    info!("Gyroscope initialized");

    // User button on PA0, active high with an external pull-down
    let button = ExtiInput::new(p.PA0, p.EXTI0, Pull::None, Irqs);

    interrupt::UART4.set_priority(Priority::P6);
    let spawner = EXECUTOR_BUTTON.start(interrupt::UART4);
    spawner
        .spawn(tasks::button_task(button, config.long_press_us))
        .unwrap();

    let mut lock = LockController::new(
        config,
        &PENDING_BUTTON,
        gyro,
        display,
        UptimeClock,
        Delay,
    );

    info!("Lock ready, awaiting key enrollment");

    let mut reported_bus_errors = 0;
    loop {
        match lock.poll() {
            Some(step) => {
                log_step(&step);
                trace!(
                    "  key: {:?} attempt: {:?}",
                    lock.key(),
                    lock.last_attempt()
                );
            }
            None => block_for(Duration::from_millis(POLL_INTERVAL_MS)),
        }

        let bus_errors = lock.sensor().bus_errors();
        if bus_errors != reported_bus_errors {
            warn!("Gyroscope bus errors: {}", bus_errors);
            reported_bus_errors = bus_errors;
        }
    }
}

fn log_step(step: &Step) {
    info!(
        "{:?} -> {:?} ({:?}, {:?})",
        step.from, step.to, step.action, step.outcome
    );
    if let Some(stop) = step.stop {
        debug!("  session: {} points, ended by {:?}", step.points, stop);
    }
}

/// Initialize the heap allocator
fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}
