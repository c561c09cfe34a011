//! GPIO pin abstractions
//!
//! The panel only needs output lines: chip select, data/command and reset.
//! Writes take effect before the call returns.

/// Digital output pin
///
/// Implementations drive the hardware line synchronously; there is no
/// queuing between a `set_*` call and the electrical level changing.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently driven low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}
