//! Byte and GPIO/delay message translator
//!
//! Every message produces exactly one [`Ack`]. Codes the driver does not act
//! on are acknowledged as [`Ack::Ignored`] without touching hardware. The
//! only `Err` path is a fault reported by the [`PanelIo`] below, which is
//! passed up unchanged.
//!
//! Chip select doubles as the transfer bracket: bytes are only written
//! while it is asserted, whether it was asserted through `StartTransfer` or
//! a GPIO-channel `SetChipSelect(Low)`.

use monopanel_hal::PanelIo;
use monopanel_protocol::{Ack, ByteMessage, GpioMessage, MessageSink};

/// Protocol translator from drawing-library messages to panel hardware
pub struct BusDriver<IO> {
    io: IO,
    in_transfer: bool,
}

impl<IO: PanelIo> BusDriver<IO> {
    pub fn new(io: IO) -> Self {
        Self {
            io,
            in_transfer: false,
        }
    }

    /// True while chip select is asserted
    pub fn in_transfer(&self) -> bool {
        self.in_transfer
    }

    pub fn io(&self) -> &IO {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Give back the hardware
    pub fn release(self) -> IO {
        self.io
    }

    /// Carry out one byte-channel message
    pub fn handle_byte(&mut self, msg: ByteMessage<'_>) -> Result<Ack, IO::Error> {
        match msg {
            ByteMessage::Init => {
                self.io.spi_init()?;
                Ok(Ack::Handled)
            }
            ByteMessage::SetDataCommandLine(level) => {
                self.io.set_data_command(level.is_high());
                Ok(Ack::Handled)
            }
            ByteMessage::StartTransfer => {
                if self.in_transfer {
                    warn!("start transfer while a transfer is open");
                    return Ok(Ack::Ignored);
                }
                self.io.set_chip_select(false);
                self.in_transfer = true;
                Ok(Ack::Handled)
            }
            ByteMessage::Send(data) => {
                if !self.in_transfer {
                    warn!("send of {} bytes outside a transfer", data.len());
                    return Ok(Ack::Ignored);
                }
                if data.is_empty() {
                    return Ok(Ack::Ignored);
                }
                self.io.spi_write(data)?;
                Ok(Ack::Handled)
            }
            ByteMessage::EndTransfer => {
                self.io.set_chip_select(true);
                self.in_transfer = false;
                Ok(Ack::Handled)
            }
            ByteMessage::Unknown(code) => {
                trace!("byte message {} ignored", code);
                Ok(Ack::Ignored)
            }
        }
    }

    /// Carry out one GPIO/delay-channel message
    pub fn handle_gpio(&mut self, msg: GpioMessage) -> Result<Ack, IO::Error> {
        match msg {
            GpioMessage::Init => {
                self.io.gpio_init()?;
                self.in_transfer = false;
                Ok(Ack::Handled)
            }
            GpioMessage::SetChipSelect(level) => {
                self.io.set_chip_select(level.is_high());
                self.in_transfer = !level.is_high();
                Ok(Ack::Handled)
            }
            GpioMessage::SetDataCommandLine(level) => {
                self.io.set_data_command(level.is_high());
                Ok(Ack::Handled)
            }
            GpioMessage::SetReset(level) => {
                self.io.set_reset(level.is_high());
                Ok(Ack::Handled)
            }
            GpioMessage::DelayMilliseconds(ms) => {
                self.io.delay_ms(u32::from(ms));
                Ok(Ack::Handled)
            }
            GpioMessage::DelayTensOfMicroseconds(n) => {
                self.io.delay_us(u32::from(n) * 10);
                Ok(Ack::Handled)
            }
            // Over before a busy loop could start
            GpioMessage::DelayHundredsOfNanoseconds(_) => Ok(Ack::Ignored),
            GpioMessage::Unknown(code) => {
                trace!("gpio message {} ignored", code);
                Ok(Ack::Ignored)
            }
        }
    }

    /// Raw byte-channel callback: message code, length, payload
    ///
    /// Returns the value handed back to the drawing library.
    pub fn dispatch_byte_message(
        &mut self,
        code: u8,
        length: u8,
        payload: Option<&[u8]>,
    ) -> Result<u8, IO::Error> {
        self.handle_byte(ByteMessage::decode(code, length, payload))
            .map(Ack::code)
    }

    /// Raw GPIO/delay-channel callback: message code and value
    pub fn dispatch_gpio_or_delay_message(&mut self, code: u8, value: u8) -> Result<u8, IO::Error> {
        self.handle_gpio(GpioMessage::decode(code, value))
            .map(Ack::code)
    }
}

impl<IO: PanelIo> MessageSink for BusDriver<IO> {
    type Error = IO::Error;

    fn byte_message(&mut self, msg: ByteMessage<'_>) -> Result<Ack, IO::Error> {
        self.handle_byte(msg)
    }

    fn gpio_message(&mut self, msg: GpioMessage) -> Result<Ack, IO::Error> {
        self.handle_gpio(msg)
    }
}
