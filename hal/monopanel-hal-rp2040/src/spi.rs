//! Blocking SPI master
//!
//! The panel bus is write-only and every transfer is a handful of bytes, so
//! the blocking driver is used; the frame loop waits for the last byte
//! anyway before releasing chip select.

use embassy_rp::spi::{self, Blocking, Instance, Spi};

use monopanel_hal::spi::{Phase, Polarity};
use monopanel_hal::{SpiBus, SpiConfig};

/// Panel SPI bus on one of the two RP2040 SPI blocks
pub struct PanelSpi<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
}

impl<'d, T: Instance> PanelSpi<'d, T> {
    pub fn new(spi: Spi<'d, T, Blocking>) -> Self {
        Self { spi }
    }
}

/// Translate shared settings into the peripheral's configuration
pub fn embassy_config(config: &SpiConfig) -> spi::Config {
    let mut out = spi::Config::default();
    out.frequency = config.frequency;
    out.polarity = match config.polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    out.phase = match config.phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    out
}

impl<'d, T: Instance> SpiBus for PanelSpi<'d, T> {
    type Error = spi::Error;

    fn configure(&mut self, config: &SpiConfig) -> Result<(), Self::Error> {
        self.spi.set_config(&embassy_config(config));
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.spi.blocking_write(data)
    }
}
