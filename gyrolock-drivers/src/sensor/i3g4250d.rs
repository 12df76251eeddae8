//! I3G4250D three-axis gyroscope (SPI mode)
//!
//! The I3G4250D is the angular-rate sensor on the STM32F429 Discovery
//! board. It is driven over a 4-wire SPI bus with a manual chip select.
//!
//! # SPI Protocol
//!
//! Every transaction starts with a command byte:
//! - Bit 7: 1 = read, 0 = write
//! - Bit 6: 1 = auto-increment register address
//! - Bits 5-0: register address
//!
//! # Configuration Used
//!
//! - CTRL_REG1 = 0xFF: 800 Hz output rate, 110 Hz bandwidth, normal mode, XYZ enabled
//! - CTRL_REG2 = 0x04: high-pass filter cut-off selection
//!
//! Bring-up verifies both registers and the WHO_AM_I identity.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use gyrolock_core::traits::{RateSensor, RawSample};

/// I3G4250D register addresses
pub mod reg {
    /// Device identification
    pub const WHO_AM_I: u8 = 0x0F;
    /// Data rate, bandwidth, power mode, axis enable
    pub const CTRL_REG1: u8 = 0x20;
    /// High-pass filter configuration
    pub const CTRL_REG2: u8 = 0x21;
    /// Data status
    pub const STATUS_REG: u8 = 0x27;
    /// First output register (X low byte)
    pub const OUT_X_L: u8 = 0x28;
}

/// Expected WHO_AM_I value
pub const DEVICE_ID: u8 = 0xD3;

/// CTRL_REG1 setup value
pub const CTRL_REG1_SETUP: u8 = 0xFF;

/// CTRL_REG2 setup value
pub const CTRL_REG2_HIGH_PASS: u8 = 0x04;

/// STATUS_REG bit: new X, Y and Z data available
pub const STATUS_ZYXDA: u8 = 0x08;

const CMD_READ: u8 = 0x80;
const CMD_AUTO_INCREMENT: u8 = 0x40;
const ADDR_MASK: u8 = 0x3F;

/// Errors that can occur talking to the gyroscope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroError<E> {
    /// SPI bus error
    Bus(E),
    /// Chip select pin error
    Pin,
    /// WHO_AM_I did not return the expected identity
    IdentityMismatch { found: u8 },
    /// A control register did not read back what was written
    RegisterVerify { reg: u8, expected: u8, found: u8 },
}

/// I3G4250D driver
pub struct I3g4250d<SPI, CS> {
    spi: SPI,
    cs: CS,
    last: RawSample,
    bus_errors: u32,
}

impl<SPI, CS> I3g4250d<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    /// Create a new driver
    ///
    /// The pins are not touched until [`init`](Self::init).
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self {
            spi,
            cs,
            last: RawSample::default(),
            bus_errors: 0,
        }
    }

    /// Configure the sensor and verify its identity
    ///
    /// Any failure here means the device cannot be used.
    pub fn init(&mut self) -> Result<(), GyroError<SPI::Error>> {
        // Deselect before the first command frame
        self.cs.set_high().map_err(|_| GyroError::Pin)?;

        self.write_verified(reg::CTRL_REG1, CTRL_REG1_SETUP)?;
        self.write_verified(reg::CTRL_REG2, CTRL_REG2_HIGH_PASS)?;

        let found = self.read_register(reg::WHO_AM_I)?;
        if found != DEVICE_ID {
            return Err(GyroError::IdentityMismatch { found });
        }

        Ok(())
    }

    /// Read one register
    pub fn read_register(&mut self, addr: u8) -> Result<u8, GyroError<SPI::Error>> {
        let mut buf = [CMD_READ | (addr & ADDR_MASK), 0];
        self.transaction(|spi| spi.transfer_in_place(&mut buf))?;
        Ok(buf[1])
    }

    /// Write one register
    pub fn write_register(&mut self, addr: u8, value: u8) -> Result<(), GyroError<SPI::Error>> {
        let buf = [addr & ADDR_MASK, value];
        self.transaction(|spi| spi.write(&buf))
    }

    /// Read the rate registers if new data is available
    ///
    /// Returns `Ok(None)` when the sensor has nothing new.
    pub fn read_rates(&mut self) -> Result<Option<RawSample>, GyroError<SPI::Error>> {
        let status = self.read_register(reg::STATUS_REG)?;
        if status & STATUS_ZYXDA == 0 {
            return Ok(None);
        }

        let mut buf = [0u8; 7];
        buf[0] = CMD_READ | CMD_AUTO_INCREMENT | reg::OUT_X_L;
        self.transaction(|spi| spi.transfer_in_place(&mut buf))?;

        Ok(Some(RawSample::new(
            i16::from_le_bytes([buf[1], buf[2]]),
            i16::from_le_bytes([buf[3], buf[4]]),
            i16::from_le_bytes([buf[5], buf[6]]),
        )))
    }

    /// Number of failed sample reads since creation
    pub fn bus_errors(&self) -> u32 {
        self.bus_errors
    }

    /// Release the bus and chip select
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    fn write_verified(&mut self, addr: u8, value: u8) -> Result<(), GyroError<SPI::Error>> {
        self.write_register(addr, value)?;
        let found = self.read_register(addr)?;
        if found != value {
            return Err(GyroError::RegisterVerify {
                reg: addr,
                expected: value,
                found,
            });
        }
        Ok(())
    }

    /// Run `op` with chip select asserted; always deselects afterwards
    fn transaction<F>(&mut self, op: F) -> Result<(), GyroError<SPI::Error>>
    where
        F: FnOnce(&mut SPI) -> Result<(), SPI::Error>,
    {
        self.cs.set_low().map_err(|_| GyroError::Pin)?;
        let result = op(&mut self.spi).and_then(|()| self.spi.flush());
        let deselect = self.cs.set_high();

        result.map_err(GyroError::Bus)?;
        deselect.map_err(|_| GyroError::Pin)
    }
}

impl<SPI, CS> RateSensor for I3g4250d<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    fn read_sample(&mut self) -> RawSample {
        match self.read_rates() {
            Ok(Some(sample)) => self.last = sample,
            Ok(None) => {}
            Err(_) => self.bus_errors = self.bus_errors.saturating_add(1),
        }
        self.last
    }
}
