//! Display bus message vocabulary
//!
//! The drawing library talks to the panel through two callback channels,
//! each carrying a small numeric message code plus an 8-bit argument and an
//! optional byte payload:
//!
//! ```text
//! ┌──────────────────┐  byte channel   ┌────────────┐  SPI   ┌───────┐
//! │ drawing library  │ ──────────────▶ │ bus driver │ ─────▶ │ panel │
//! │ (u8x8 messages)  │ ──────────────▶ │            │ ─────▶ │       │
//! └──────────────────┘  GPIO / delay   └────────────┘  pins  └───────┘
//! ```
//!
//! This crate turns raw codes into closed enums ([`ByteMessage`],
//! [`GpioMessage`]) with an `Unknown` arm for codes the driver does not act
//! on, and defines the [`MessageSink`] contract the bus driver implements.
//! It also maps console key bytes to [`Key`] values for page input.

#![no_std]
#![deny(unsafe_code)]

pub mod events;
pub mod messages;

pub use events::Key;
pub use messages::{Ack, ByteMessage, GpioMessage, Level, MessageSink};
