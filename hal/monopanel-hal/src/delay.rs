//! Busy-wait delays
//!
//! Used only for panel reset and power-up timing. Implementations must
//! never return early; sleeping longer than asked is acceptable.

/// Blocking delay provider
pub trait Delay {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}
