//! Top-level device configuration

use crate::anim::{AnimatedValue, AnimationCurve, DEFAULT_EPSILON};

use super::hardware::{PanelConfig, PanelPins, MAX_GPIO};

/// Configuration rejected by [`DeviceConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Zero or oversized width/height, height not a multiple of 8, or a
    /// window past the controller's last column
    InvalidGeometry,
    /// SPI mode outside 0-3 or zero clock
    InvalidSpi,
    /// Pin number outside the MCU's GPIO range
    InvalidPin,
    /// Two control lines on one GPIO
    DuplicatePin,
    /// Animation speed not positive, or bad snap distance
    InvalidAnimation,
    /// Zero frame interval or baud rate
    InvalidTiming,
}

/// Page animation settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationConfig {
    pub curve: AnimationCurve,
    /// Snap distance in pixels
    pub epsilon: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            curve: AnimationCurve::default(),
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl AnimationConfig {
    /// A settled value at `initial` using these settings
    pub fn value(&self, initial: f32) -> AnimatedValue {
        AnimatedValue::new(initial, self.curve).with_epsilon(self.epsilon)
    }
}

/// Loop timing and console settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiConfig {
    /// Time between frame ticks
    pub frame_interval_ms: u32,
    /// Console baud rate for key input
    pub uart_baud: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            uart_baud: 115_200,
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    pub panel: PanelConfig,
    pub pins: PanelPins,
    pub animation: AnimationConfig,
    pub ui: UiConfig,
}

impl DeviceConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every field is usable before touching hardware
    pub fn validate(&self) -> Result<(), ConfigError> {
        let panel = &self.panel;
        panel.check_geometry()?;
        if panel.spi_mode > 3 || panel.spi_frequency_hz == 0 {
            return Err(ConfigError::InvalidSpi);
        }

        if self.pins.as_array().iter().any(|&pin| pin >= MAX_GPIO) {
            return Err(ConfigError::InvalidPin);
        }
        if self.pins.has_duplicates() {
            return Err(ConfigError::DuplicatePin);
        }

        let epsilon = self.animation.epsilon;
        if !self.animation.curve.is_valid() || !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::InvalidAnimation);
        }

        if self.ui.frame_interval_ms == 0 || self.ui.uart_baud == 0 {
            return Err(ConfigError::InvalidTiming);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(DeviceConfig::new().validate(), Ok(()));
    }

    #[test]
    fn test_geometry_checks() {
        let mut config = DeviceConfig::new();
        config.panel.height = 50;
        assert_eq!(config.validate(), Err(ConfigError::InvalidGeometry));

        config.panel.height = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidGeometry));

        config.panel.width = 256;
        config.panel.height = 64;
        assert_eq!(config.validate(), Err(ConfigError::InvalidGeometry));

        config.panel.width = 128;
        config.panel.x_offset = 0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_panels_past_controller_ram() {
        let mut config = DeviceConfig::new();

        // Pages 8 and up cannot be addressed
        config.panel.width = 64;
        config.panel.height = 128;
        assert_eq!(config.validate(), Err(ConfigError::InvalidGeometry));

        config.panel.width = 32;
        config.panel.height = 256;
        assert_eq!(config.validate(), Err(ConfigError::InvalidGeometry));

        // 32 + 128 runs off column 127
        config.panel.width = 128;
        config.panel.height = 64;
        config.panel.x_offset = 32;
        assert_eq!(config.validate(), Err(ConfigError::InvalidGeometry));
    }

    #[test]
    fn test_spi_checks() {
        let mut config = DeviceConfig::new();
        config.panel.spi_mode = 4;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpi));

        config.panel.spi_mode = 0;
        config.panel.spi_frequency_hz = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpi));
    }

    #[test]
    fn test_pin_checks() {
        let mut config = DeviceConfig::new();
        config.pins.reset = 30;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPin));

        config.pins.reset = config.pins.dc;
        assert_eq!(config.validate(), Err(ConfigError::DuplicatePin));
    }

    #[test]
    fn test_animation_checks() {
        let mut config = DeviceConfig::new();
        config.animation.curve = AnimationCurve::Linear {
            units_per_second: -1.0,
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidAnimation));

        config.animation.curve = AnimationCurve::default();
        config.animation.epsilon = f32::NAN;
        assert_eq!(config.validate(), Err(ConfigError::InvalidAnimation));
    }

    #[test]
    fn test_timing_checks() {
        let mut config = DeviceConfig::new();
        config.ui.frame_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidTiming));
    }

    #[test]
    fn test_animation_value_uses_config() {
        let config = AnimationConfig {
            curve: AnimationCurve::Linear {
                units_per_second: 10.0,
            },
            epsilon: 2.0,
        };
        let mut value = config.value(0.0);
        value.set_target(3.0);
        value.advance(0.0);
        assert_eq!(value.value(), 3.0);
    }
}
