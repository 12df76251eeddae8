//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in gyrolock-core for the lock's hardware components:
//!
//! - Angular-rate sensors (I3G4250D over SPI)

#![no_std]
#![deny(unsafe_code)]

pub mod sensor;
