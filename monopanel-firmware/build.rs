//! Build script for monopanel-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates device.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column RAM width of the SSD1306
const CONTROLLER_COLUMNS: i64 = 128;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate device.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=device.toml");

    let config_path = Path::new("device.toml");
    if !config_path.exists() {
        fail("device.toml not found", &["The firmware embeds device.toml from the crate directory.".to_string()]);
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read device.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in device.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    check_sections(&config, &mut errors);
    validate_panel(&config, &mut errors);
    validate_pins(&config, &mut errors);
    validate_animation(&config, &mut errors);
    validate_ui(&config, &mut errors);

    if !errors.is_empty() {
        fail("Invalid configuration in device.toml", &errors);
    }

    println!("cargo:warning=device.toml validated successfully");
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.len() > 62 {
                format!("{}...", &line[..59])
            } else {
                line.clone()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}

fn check_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        errors.push("top level must be a table".to_string());
        return;
    };
    for (name, value) in table {
        if !["panel", "pins", "animation", "ui"].contains(&name.as_str()) {
            errors.push(format!("unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("[{}] must be a table", name));
        }
    }
}

fn int(config: &toml::Value, section: &str, key: &str) -> Option<i64> {
    config.get(section)?.get(key)?.as_integer()
}

fn check_range(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    if let Some(value) = config.get(section).and_then(|s| s.get(key)) {
        match value.as_integer() {
            Some(n) if (min..=max).contains(&n) => {}
            _ => errors.push(format!("[{}] {} must be an integer {}-{}", section, key, min, max)),
        }
    }
}

fn validate_panel(config: &toml::Value, errors: &mut Vec<String>) {
    check_range(config, "panel", "width", 1, 128, errors);
    check_range(config, "panel", "height", 8, 64, errors);
    check_range(config, "panel", "x_offset", 0, 127, errors);
    check_range(config, "panel", "contrast", 0, 255, errors);
    check_range(config, "panel", "spi_frequency_hz", 1, 62_500_000, errors);
    check_range(config, "panel", "spi_mode", 0, 3, errors);

    let width = int(config, "panel", "width").unwrap_or(64);
    let height = int(config, "panel", "height").unwrap_or(48);
    if height % 8 != 0 {
        errors.push("[panel] height must be a multiple of 8".to_string());
    }
    let x_offset = int(config, "panel", "x_offset").unwrap_or(32);
    if x_offset + width > CONTROLLER_COLUMNS {
        errors.push(format!(
            "[panel] x_offset {} + width {} runs past column {}",
            x_offset,
            width,
            CONTROLLER_COLUMNS - 1
        ));
    }
}

/// Pin as a bare number or a "gpioN" string
fn pin_number(value: &toml::Value) -> Option<i64> {
    match value {
        toml::Value::Integer(n) => Some(*n),
        toml::Value::String(s) => s.strip_prefix("gpio").unwrap_or(s).parse().ok(),
        _ => None,
    }
}

fn validate_pins(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(pins) = config.get("pins") else {
        return;
    };
    let mut seen: Vec<(i64, &str)> = Vec::new();
    for key in ["cs", "dc", "reset"] {
        let Some(value) = pins.get(key) else {
            continue;
        };
        match pin_number(value) {
            Some(pin) if [0, 1, 18, 19].contains(&pin) => {
                errors.push(format!("[pins] {} uses gpio{}, owned by UART0/SPI0", key, pin))
            }
            Some(pin) if (0..30).contains(&pin) => {
                if let Some((_, other)) = seen.iter().find(|(p, _)| *p == pin) {
                    errors.push(format!("[pins] {} and {} share gpio{}", other, key, pin));
                }
                seen.push((pin, key));
            }
            _ => errors.push(format!("[pins] {} must be 0-29 or \"gpioN\"", key)),
        }
    }
}

fn validate_animation(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(animation) = config.get("animation") else {
        return;
    };
    if let Some(curve) = animation.get("curve") {
        if !matches!(curve.as_str(), Some("linear") | Some("ease_out")) {
            errors.push("[animation] curve must be \"linear\" or \"ease_out\"".to_string());
        }
    }
    for key in ["speed", "epsilon"] {
        let Some(value) = animation.get(key) else {
            continue;
        };
        let number = value.as_float().or_else(|| value.as_integer().map(|n| n as f64));
        match number {
            Some(n) if key == "speed" && n > 0.0 => {}
            Some(n) if key == "epsilon" && n >= 0.0 => {}
            _ => errors.push(format!("[animation] {} out of range", key)),
        }
    }
}

fn validate_ui(config: &toml::Value, errors: &mut Vec<String>) {
    check_range(config, "ui", "frame_interval_ms", 1, 1000, errors);
    check_range(config, "ui", "uart_baud", 1, 921_600, errors);
}
