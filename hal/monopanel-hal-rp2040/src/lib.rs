//! RP2040-specific HAL for the panel firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `monopanel-hal` traits:
//!
//! - Blocking SPI master for the panel bus
//! - `Output`-backed control lines
//! - Non-blocking console input over a buffered UART
//! - Busy-wait delays and an uptime clock from `embassy-time`
//! - Dynamic pin allocation for config-driven setup

#![no_std]

pub mod clock;
pub mod delay;
pub mod gpio;
pub mod pins;
pub mod spi;
pub mod uart;

pub use clock::Uptime;
pub use delay::BusyDelay;
pub use gpio::Line;
pub use pins::{PinBank, PinError};
pub use spi::PanelSpi;
pub use uart::ConsoleRx;

// Re-export shared traits for convenience
pub use monopanel_hal::{Delay, Monotonic, OutputPin, SpiBus, SpiConfig, UartRx};
