//! UART serial input
//!
//! Key presses arrive as single bytes on a serial console. The main loop
//! polls once per tick and must never block waiting for a byte.

/// Non-blocking UART receiver
pub trait UartRx {
    /// Whether at least one received byte is waiting
    fn has_pending_byte(&mut self) -> bool;

    /// Take the next received byte, or `None` if nothing is waiting
    fn try_read_byte(&mut self) -> Option<u8>;
}
