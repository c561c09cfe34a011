//! Console input
//!
//! Key bytes arrive on UART0 (RX on GPIO1) and are buffered by the
//! interrupt handler. [`ConsoleRx`] only looks at that buffer, so polling it
//! from the frame loop never waits on the line.

use embedded_io::{Read, ReadReady};

use monopanel_hal::UartRx;

/// Non-blocking reader over a buffered UART receiver
pub struct ConsoleRx<R> {
    rx: R,
}

impl<R: Read + ReadReady> ConsoleRx<R> {
    pub fn new(rx: R) -> Self {
        Self { rx }
    }
}

impl<R: Read + ReadReady> UartRx for ConsoleRx<R> {
    fn has_pending_byte(&mut self) -> bool {
        // A line error reads as "nothing waiting"; the next byte clears it
        self.rx.read_ready().unwrap_or(false)
    }

    fn try_read_byte(&mut self) -> Option<u8> {
        if !self.has_pending_byte() {
            return None;
        }
        let mut byte = [0u8; 1];
        match self.rx.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }
}
