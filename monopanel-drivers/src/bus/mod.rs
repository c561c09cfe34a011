//! Display bus
//!
//! The drawing layer speaks in byte and GPIO/delay channel messages; the
//! [`BusDriver`] carries them out on a [`PanelIo`](monopanel_hal::PanelIo)
//! implementation such as [`SpiPanelIo`].

pub mod driver;
pub mod spi;

pub use driver::BusDriver;
pub use spi::SpiPanelIo;
