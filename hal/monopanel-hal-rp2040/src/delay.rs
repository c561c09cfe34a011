//! Busy-wait delays for panel timing

use embassy_time::Delay as TimeDelay;
use embedded_hal::delay::DelayNs;

use monopanel_hal::Delay;

/// Blocking delay backed by the embassy time driver
///
/// Panel reset and init run before the frame loop starts, so blocking the
/// executor here is harmless.
#[derive(Default)]
pub struct BusyDelay;

impl Delay for BusyDelay {
    fn delay_ms(&mut self, ms: u32) {
        TimeDelay.delay_ms(ms);
    }

    fn delay_us(&mut self, us: u32) {
        TimeDelay.delay_us(us);
    }
}
