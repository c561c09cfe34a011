//! Uptime clock

use embassy_time::Instant;

use monopanel_hal::Monotonic;

/// Seconds since boot from the embassy time driver
#[derive(Default, Clone, Copy)]
pub struct Uptime;

impl Monotonic for Uptime {
    fn now_seconds(&self) -> f64 {
        Instant::now().as_micros() as f64 / 1_000_000.0
    }
}
