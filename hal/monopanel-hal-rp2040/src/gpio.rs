//! Control lines
//!
//! Wraps any `embedded-hal` 1.0 output whose writes cannot fail, which is
//! what `embassy_rp::gpio::Output` is. The driven level is cached so it can
//! be read back without a mutable borrow.

use core::convert::Infallible;

use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;
use embedded_hal::digital::OutputPin as HalOutputPin;

use monopanel_hal::OutputPin;

/// Push-pull output line
pub struct Line<P> {
    pin: P,
    high: bool,
}

impl<P: HalOutputPin<Error = Infallible>> Line<P> {
    /// Take over `pin` and drive it to `high`
    pub fn new(mut pin: P, high: bool) -> Self {
        let _ = pin.set_state(high.into());
        Self { pin, high }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<'d> Line<Output<'d>> {
    /// Configure a GPIO as a push-pull output starting at `high`
    pub fn output(pin: Peri<'d, AnyPin>, high: bool) -> Self {
        let level = if high { Level::High } else { Level::Low };
        Self::new(Output::new(pin, level), high)
    }
}

impl<P: HalOutputPin<Error = Infallible>> OutputPin for Line<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
