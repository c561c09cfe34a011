//! Configuration loading and parsing
//!
//! The device configuration is compiled in from `device.toml` and parsed at
//! boot by a small `no_std` parser. `build.rs` checks the same file on the
//! host, so a bad file fails the build rather than the boot.

pub mod toml;

pub use toml::{parse_config, ParseError};
