//! Hardware configuration types
//!
//! Panel geometry, bus settings and control-line pin numbers.

use monopanel_hal::{Mode, SpiConfig};

use super::types::ConfigError;

/// Number of GPIOs on the target MCU (0-29 valid)
pub const MAX_GPIO: u8 = 30;

/// Largest supported panel in pixels (one bit per pixel)
pub const MAX_PANEL_WIDTH: u16 = 128;
pub const MAX_PANEL_HEIGHT: u16 = 64;

/// Column RAM width of the controller; `x_offset + width` must fit in it
pub const CONTROLLER_COLUMNS: u16 = 128;

/// Largest frame buffer in bytes
pub const MAX_BUFFER_BYTES: usize = (MAX_PANEL_WIDTH as usize * MAX_PANEL_HEIGHT as usize) / 8;

/// Panel geometry and bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels (multiple of 8)
    pub height: u16,
    /// First controller column that maps to visible pixel 0
    pub x_offset: u8,
    /// Contrast sent during init (0-255)
    pub contrast: u8,
    /// SPI clock in Hz
    pub spi_frequency_hz: u32,
    /// SPI mode number (0-3)
    pub spi_mode: u8,
}

/// Check a frame size the controller can address
///
/// Height must be a whole number of 8-row pages, at most eight of them.
pub fn check_size(width: u16, height: u16) -> Result<(), ConfigError> {
    if width == 0 || height == 0 || height % 8 != 0 {
        return Err(ConfigError::InvalidGeometry);
    }
    if width > MAX_PANEL_WIDTH || height > MAX_PANEL_HEIGHT {
        return Err(ConfigError::InvalidGeometry);
    }
    Ok(())
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            x_offset: 32,
            contrast: 0xCF,
            spi_frequency_hz: 10_000_000,
            spi_mode: 0,
        }
    }
}

impl PanelConfig {
    /// Bytes needed for one full frame
    pub fn buffer_len(&self) -> usize {
        (self.width as usize * self.height as usize) / 8
    }

    /// Check the visible window fits the controller's RAM
    pub fn check_geometry(&self) -> Result<(), ConfigError> {
        check_size(self.width, self.height)?;
        if self.x_offset as u16 + self.width > CONTROLLER_COLUMNS {
            return Err(ConfigError::InvalidGeometry);
        }
        Ok(())
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u8 {
        (self.height / 8) as u8
    }

    /// SPI settings for the HAL
    pub fn spi_config(&self) -> SpiConfig {
        let mode = Mode::from_number(self.spi_mode).unwrap_or(Mode::Mode0);
        SpiConfig::new(self.spi_frequency_hz, mode)
    }
}

/// Control-line pin assignment
///
/// Clock and data lines belong to the SPI peripheral and are fixed by the
/// board; only the manually driven lines are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelPins {
    /// Chip select (active low)
    pub cs: u8,
    /// Data/command select
    pub dc: u8,
    /// Panel reset (active low)
    pub reset: u8,
}

impl Default for PanelPins {
    fn default() -> Self {
        Self {
            cs: 17,
            dc: 16,
            reset: 20,
        }
    }
}

impl PanelPins {
    pub fn as_array(&self) -> [u8; 3] {
        [self.cs, self.dc, self.reset]
    }

    /// True if two lines share a GPIO
    pub fn has_duplicates(&self) -> bool {
        self.cs == self.dc || self.cs == self.reset || self.dc == self.reset
    }
}
