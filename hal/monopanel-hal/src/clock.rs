//! Monotonic time source

/// Monotonic clock, seconds since boot
///
/// Only animation timing reads it. Successive readings never decrease.
pub trait Monotonic {
    fn now_seconds(&self) -> f64;
}
