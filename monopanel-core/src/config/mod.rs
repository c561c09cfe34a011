//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware fills them from an
//! embedded TOML file; defaults describe the reference hardware (SSD1306
//! 64x48 on SPI0).

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
