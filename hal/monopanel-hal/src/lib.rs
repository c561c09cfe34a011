//! Monopanel Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the display stack is
//! written against. Chip-specific crates implement them so the bus driver,
//! router and frame cycle never touch peripheral registers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  monopanel-firmware / monopanel-drivers │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  monopanel-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ monopanel-hal-│
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output lines (CS, DC, RESET)
//! - [`spi::SpiBus`] - SPI master writes
//! - [`uart::UartRx`] - Non-blocking serial input
//! - [`delay::Delay`] - Busy-wait delays for panel timing
//! - [`clock::Monotonic`] - Seconds since boot
//! - [`panel::PanelIo`] - The hardware-access surface the bus driver consumes

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod delay;
pub mod gpio;
pub mod panel;
pub mod spi;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use clock::Monotonic;
pub use delay::Delay;
pub use gpio::OutputPin;
pub use panel::PanelIo;
pub use spi::{Mode, SpiBus, SpiConfig};
pub use uart::UartRx;
