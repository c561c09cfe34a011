//! Display driver implementations
//!
//! This crate provides the concrete pieces between the drawing layer and
//! the wire:
//!
//! - [`bus::BusDriver`]: turns byte and GPIO/delay channel messages into
//!   SPI writes, pin changes and delays
//! - [`bus::SpiPanelIo`]: the hardware-access surface built from HAL SPI,
//!   output pins and a delay
//! - [`panel::MonoBuffer`]: 1-bit page-organized frame buffer that
//!   `embedded-graphics` draws into
//! - [`panel::Ssd1306`]: SSD1306 command layer that emits bus messages

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod bus;
pub mod panel;

pub use bus::{BusDriver, SpiPanelIo};
pub use panel::{MonoBuffer, Ssd1306};
