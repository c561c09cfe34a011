//! Byte and GPIO/delay channel messages
//!
//! Message codes follow the u8x8 numbering used by the drawing library, so
//! a raw callback can be decoded without a lookup table.

// Byte channel
pub const MSG_BYTE_INIT: u8 = 20;
pub const MSG_BYTE_SEND: u8 = 23;
pub const MSG_BYTE_START_TRANSFER: u8 = 24;
pub const MSG_BYTE_END_TRANSFER: u8 = 25;
pub const MSG_BYTE_SET_DC: u8 = 32;

// GPIO / delay channel
pub const MSG_GPIO_AND_DELAY_INIT: u8 = 40;
pub const MSG_DELAY_MILLI: u8 = 41;
pub const MSG_DELAY_100NANO: u8 = 42;
pub const MSG_DELAY_10MICRO: u8 = 43;
pub const MSG_GPIO_CS: u8 = 64 + 9;
pub const MSG_GPIO_DC: u8 = 64 + 10;
pub const MSG_GPIO_RESET: u8 = 64 + 11;

/// Value reported back to the drawing library for every message
pub const ACK_CODE: u8 = 1;

/// Logic level carried by line-setting messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Any non-zero argument is high
    pub fn from_arg(arg: u8) -> Self {
        if arg == 0 {
            Level::Low
        } else {
            Level::High
        }
    }

    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Byte-transfer channel message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteMessage<'a> {
    /// One-time bus setup (clock, mode)
    Init,
    /// Select command (low) or data (high) for the following sends
    SetDataCommandLine(Level),
    /// Assert chip select; opens a transaction
    StartTransfer,
    /// Bytes to write verbatim within the open transaction
    Send(&'a [u8]),
    /// Deassert chip select; closes the transaction
    EndTransfer,
    /// Code this driver does not act on
    Unknown(u8),
}

impl<'a> ByteMessage<'a> {
    /// Decode a raw byte-channel callback
    ///
    /// For `Send`, `arg` is the byte count and `payload` the buffer it refers
    /// to. The payload is cut to `arg` bytes; a missing payload decodes to an
    /// empty send.
    pub fn decode(code: u8, arg: u8, payload: Option<&'a [u8]>) -> Self {
        match code {
            MSG_BYTE_INIT => ByteMessage::Init,
            MSG_BYTE_SET_DC => ByteMessage::SetDataCommandLine(Level::from_arg(arg)),
            MSG_BYTE_START_TRANSFER => ByteMessage::StartTransfer,
            MSG_BYTE_SEND => {
                let data = payload.unwrap_or(&[]);
                let len = (arg as usize).min(data.len());
                ByteMessage::Send(&data[..len])
            }
            MSG_BYTE_END_TRANSFER => ByteMessage::EndTransfer,
            other => ByteMessage::Unknown(other),
        }
    }

    /// Raw message code
    pub fn code(&self) -> u8 {
        match self {
            ByteMessage::Init => MSG_BYTE_INIT,
            ByteMessage::SetDataCommandLine(_) => MSG_BYTE_SET_DC,
            ByteMessage::StartTransfer => MSG_BYTE_START_TRANSFER,
            ByteMessage::Send(_) => MSG_BYTE_SEND,
            ByteMessage::EndTransfer => MSG_BYTE_END_TRANSFER,
            ByteMessage::Unknown(code) => *code,
        }
    }
}

/// GPIO and delay channel message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioMessage {
    /// Configure CS, DC and RESET as outputs in their idle state
    Init,
    SetChipSelect(Level),
    SetDataCommandLine(Level),
    SetReset(Level),
    DelayMilliseconds(u8),
    DelayTensOfMicroseconds(u8),
    /// Shorter than any instruction the MCU can execute; never waited on
    DelayHundredsOfNanoseconds(u8),
    /// Code this driver does not act on
    Unknown(u8),
}

impl GpioMessage {
    /// Decode a raw GPIO/delay-channel callback
    pub fn decode(code: u8, arg: u8) -> Self {
        match code {
            MSG_GPIO_AND_DELAY_INIT => GpioMessage::Init,
            MSG_GPIO_CS => GpioMessage::SetChipSelect(Level::from_arg(arg)),
            MSG_GPIO_DC => GpioMessage::SetDataCommandLine(Level::from_arg(arg)),
            MSG_GPIO_RESET => GpioMessage::SetReset(Level::from_arg(arg)),
            MSG_DELAY_MILLI => GpioMessage::DelayMilliseconds(arg),
            MSG_DELAY_10MICRO => GpioMessage::DelayTensOfMicroseconds(arg),
            MSG_DELAY_100NANO => GpioMessage::DelayHundredsOfNanoseconds(arg),
            other => GpioMessage::Unknown(other),
        }
    }

    /// Raw message code
    pub fn code(&self) -> u8 {
        match self {
            GpioMessage::Init => MSG_GPIO_AND_DELAY_INIT,
            GpioMessage::SetChipSelect(_) => MSG_GPIO_CS,
            GpioMessage::SetDataCommandLine(_) => MSG_GPIO_DC,
            GpioMessage::SetReset(_) => MSG_GPIO_RESET,
            GpioMessage::DelayMilliseconds(_) => MSG_DELAY_MILLI,
            GpioMessage::DelayTensOfMicroseconds(_) => MSG_DELAY_10MICRO,
            GpioMessage::DelayHundredsOfNanoseconds(_) => MSG_DELAY_100NANO,
            GpioMessage::Unknown(code) => *code,
        }
    }
}

/// Acknowledgement for one message
///
/// Both variants report [`ACK_CODE`] to the drawing library; the split only
/// exists so callers and tests can tell whether hardware was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ack {
    /// The message was carried out
    Handled,
    /// The message was accepted as a no-op
    Ignored,
}

impl Ack {
    pub fn code(self) -> u8 {
        ACK_CODE
    }
}

/// Receiver for both message channels
///
/// This is the slot the drawing library calls into. Every message yields
/// exactly one [`Ack`]; `Err` is reserved for hardware faults from the layer
/// below and is never produced for unknown or out-of-place messages.
pub trait MessageSink {
    type Error;

    fn byte_message(&mut self, msg: ByteMessage<'_>) -> Result<Ack, Self::Error>;

    fn gpio_message(&mut self, msg: GpioMessage) -> Result<Ack, Self::Error>;
}
