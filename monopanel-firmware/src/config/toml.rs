//! Simple TOML parser for device configuration
//!
//! Handles only the subset `device.toml` uses. It does NOT support the full
//! TOML grammar.
//!
//! Supported features:
//! - `[section]` headers: `panel`, `pins`, `animation`, `ui`
//! - Key = value pairs (string, integer, float)
//! - Comments (`# ...`), including after a value
//!
//! NOT supported:
//! - Dotted or nested sections
//! - Arrays and inline tables
//! - Multi-line strings
//!
//! Keys that are absent keep their [`DeviceConfig::default`] value.

use monopanel_core::anim::AnimationCurve;
use monopanel_core::config::{ConfigError, DeviceConfig, MAX_GPIO};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header (line number)
    InvalidSection(usize),
    /// Line is not `key = value` (line number)
    InvalidLine(usize),
    /// Key not valid in its section (line number)
    UnknownKey(usize),
    /// Value has the wrong type or is out of range (line number)
    InvalidValue(usize),
    /// Parsed cleanly but failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(err: ConfigError) -> Self {
        ParseError::Invalid(err)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Panel,
    Pins,
    Animation,
    Ui,
}

/// Curve settings collected across the `[animation]` section
///
/// `curve` and `speed` may come in either order, so the curve is built once
/// the whole file has been read.
#[derive(Default)]
struct CurveKeys {
    linear: Option<bool>,
    speed: Option<f32>,
}

/// Parse TOML configuration into a validated [`DeviceConfig`]
pub fn parse_config(input: &str) -> Result<DeviceConfig, ParseError> {
    let mut config = DeviceConfig::new();
    let mut section = Section::Root;
    let mut curve = CurveKeys::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') {
                return Err(ParseError::InvalidSection(line_no));
            }
            section = parse_section_header(&header[1..header.len() - 1])
                .ok_or(ParseError::InvalidSection(line_no))?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine(line_no))?;
        apply_value(&mut config, &mut curve, section, key, value, line_no)?;
    }

    config.animation.curve = build_curve(&curve, config.animation.curve);
    config.validate()?;
    Ok(config)
}

fn parse_section_header(header: &str) -> Option<Section> {
    match header.trim() {
        "panel" => Some(Section::Panel),
        "pins" => Some(Section::Pins),
        "animation" => Some(Section::Animation),
        "ui" => Some(Section::Ui),
        _ => None,
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        // Make sure # is not inside a string
        Some(pos) if line[..pos].matches('"').count() % 2 == 0 => line[..pos].trim(),
        _ => line,
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_string(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

fn parse_int<T: core::str::FromStr>(value: &str, line_no: usize) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue(line_no))
}

fn parse_float(value: &str, line_no: usize) -> Result<f32, ParseError> {
    let parsed: f32 = value.parse().map_err(|_| ParseError::InvalidValue(line_no))?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(ParseError::InvalidValue(line_no))
    }
}

/// Pin as a bare number (`17`) or a name (`"gpio17"`)
fn parse_pin(value: &str, line_no: usize) -> Result<u8, ParseError> {
    let s = parse_string(value);
    let digits = s.strip_prefix("gpio").unwrap_or(s);
    let pin: u8 = parse_int(digits, line_no)?;
    if pin >= MAX_GPIO {
        return Err(ParseError::InvalidValue(line_no));
    }
    Ok(pin)
}

fn apply_value(
    config: &mut DeviceConfig,
    curve: &mut CurveKeys,
    section: Section,
    key: &str,
    value: &str,
    line_no: usize,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Panel, "width") => config.panel.width = parse_int(value, line_no)?,
        (Section::Panel, "height") => config.panel.height = parse_int(value, line_no)?,
        (Section::Panel, "x_offset") => config.panel.x_offset = parse_int(value, line_no)?,
        (Section::Panel, "contrast") => config.panel.contrast = parse_int(value, line_no)?,
        (Section::Panel, "spi_frequency_hz") => {
            config.panel.spi_frequency_hz = parse_int(value, line_no)?
        }
        (Section::Panel, "spi_mode") => config.panel.spi_mode = parse_int(value, line_no)?,

        (Section::Pins, "cs") => config.pins.cs = parse_pin(value, line_no)?,
        (Section::Pins, "dc") => config.pins.dc = parse_pin(value, line_no)?,
        (Section::Pins, "reset") => config.pins.reset = parse_pin(value, line_no)?,

        (Section::Animation, "curve") => {
            curve.linear = match parse_string(value) {
                "linear" => Some(true),
                "ease_out" => Some(false),
                _ => return Err(ParseError::InvalidValue(line_no)),
            }
        }
        (Section::Animation, "speed") => curve.speed = Some(parse_float(value, line_no)?),
        (Section::Animation, "epsilon") => {
            config.animation.epsilon = parse_float(value, line_no)?
        }

        (Section::Ui, "frame_interval_ms") => {
            config.ui.frame_interval_ms = parse_int(value, line_no)?
        }
        (Section::Ui, "uart_baud") => config.ui.uart_baud = parse_int(value, line_no)?,

        _ => return Err(ParseError::UnknownKey(line_no)),
    }
    Ok(())
}

/// Combine the `[animation]` keys with the default curve
fn build_curve(keys: &CurveKeys, default: AnimationCurve) -> AnimationCurve {
    let linear = keys
        .linear
        .unwrap_or(matches!(default, AnimationCurve::Linear { .. }));
    let default_speed = match default {
        AnimationCurve::Linear { units_per_second } => units_per_second,
        AnimationCurve::EaseOut { rate } => rate,
    };
    let speed = keys.speed.unwrap_or(default_speed);
    if linear {
        AnimationCurve::Linear {
            units_per_second: speed,
        }
    } else {
        AnimationCurve::EaseOut { rate: speed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICE: &str = include_str!("../../device.toml");

    #[test]
    fn test_parse_shipped_config() {
        let config = parse_config(DEVICE).unwrap();
        assert_eq!(config.panel.width, 64);
        assert_eq!(config.panel.height, 48);
        assert_eq!(config.panel.x_offset, 32);
        assert_eq!(config.pins.cs, 17);
        assert_eq!(config.pins.dc, 16);
        assert_eq!(config.pins.reset, 20);
        assert_eq!(config.animation.curve, AnimationCurve::EaseOut { rate: 12.0 });
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(parse_config("").unwrap(), DeviceConfig::default());
    }

    #[test]
    fn test_parse_pin() {
        assert_eq!(parse_pin("17", 1), Ok(17));
        assert_eq!(parse_pin("\"gpio5\"", 1), Ok(5));
        assert_eq!(parse_pin("gpio30", 3), Err(ParseError::InvalidValue(3)));
        assert_eq!(parse_pin("pin5", 3), Err(ParseError::InvalidValue(3)));
    }

    #[test]
    fn test_linear_curve_any_order() {
        let input = "[animation]\nspeed = 120.0\ncurve = \"linear\" # px/s\n";
        let config = parse_config(input).unwrap();
        assert_eq!(
            config.animation.curve,
            AnimationCurve::Linear {
                units_per_second: 120.0
            }
        );
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        assert_eq!(
            parse_config("# header\n[display]\n"),
            Err(ParseError::InvalidSection(2))
        );
        assert_eq!(
            parse_config("[panel]\nwidth 64\n"),
            Err(ParseError::InvalidLine(2))
        );
        assert_eq!(
            parse_config("[panel]\ndepth = 3\n"),
            Err(ParseError::UnknownKey(2))
        );
        assert_eq!(
            parse_config("[ui]\nuart_baud = fast\n"),
            Err(ParseError::InvalidValue(2))
        );
        // Keys before any section have nowhere to go
        assert_eq!(parse_config("width = 64\n"), Err(ParseError::UnknownKey(1)));
    }

    #[test]
    fn test_validation_runs() {
        assert_eq!(
            parse_config("[pins]\ncs = 16\ndc = 16\n"),
            Err(ParseError::Invalid(ConfigError::DuplicatePin))
        );
        assert_eq!(
            parse_config("[animation]\nspeed = 0\n"),
            Err(ParseError::Invalid(ConfigError::InvalidAnimation))
        );
        // Default offset 32 pushes a 128-wide window past column 127
        assert_eq!(
            parse_config("[panel]\nwidth = 128\nheight = 64\n"),
            Err(ParseError::Invalid(ConfigError::InvalidGeometry))
        );
        assert_eq!(
            parse_config("[panel]\nwidth = 64\nheight = 128\n"),
            Err(ParseError::Invalid(ConfigError::InvalidGeometry))
        );
        assert!(parse_config("[panel]\nwidth = 128\nheight = 64\nx_offset = 0\n").is_ok());
    }
}
