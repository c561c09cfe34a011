//! SSD1306 command layer
//!
//! Speaks to the controller only through a [`MessageSink`], so the same
//! code runs against [`BusDriver`](crate::bus::BusDriver) on hardware and
//! against a recording sink in tests.
//!
//! Every page of the buffer goes out in its own transfer:
//!
//! ```text
//! START  DC=0  SEND [B0|page, 10|col_hi, col_lo]  DC=1  SEND page bytes  END
//! ```

use monopanel_core::config::{ConfigError, PanelConfig};
use monopanel_core::FramePanel;
use monopanel_protocol::{ByteMessage, GpioMessage, Level, MessageSink};

use super::buffer::MonoBuffer;

/// Controller command bytes
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_MULTIPLEX: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const CHARGE_PUMP: u8 = 0x8D;
    pub const MEMORY_MODE: u8 = 0x20;
    pub const SEGMENT_REMAP: u8 = 0xA1;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DESELECT: u8 = 0xDB;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const PAGE_START: u8 = 0xB0;
    pub const COLUMN_HIGH: u8 = 0x10;
}

/// Reset pulse timing in milliseconds
const RESET_SETTLE_MS: u8 = 1;
const RESET_HOLD_MS: u8 = 100;
const RESET_RECOVER_MS: u8 = 100;

/// Longest command list sent in one transfer
const MAX_INIT_LEN: usize = 32;

/// SSD1306 panel with its own off-screen buffer
pub struct Ssd1306<SINK> {
    sink: SINK,
    buffer: MonoBuffer,
    config: PanelConfig,
}

impl<SINK: MessageSink> Ssd1306<SINK> {
    /// Rejects geometry the controller cannot address
    pub fn new(sink: SINK, config: &PanelConfig) -> Result<Self, ConfigError> {
        config.check_geometry()?;
        Ok(Self {
            sink,
            buffer: MonoBuffer::new(config)?,
            config: *config,
        })
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn buffer(&self) -> &MonoBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut MonoBuffer {
        &mut self.buffer
    }

    pub fn sink(&self) -> &SINK {
        &self.sink
    }

    pub fn release(self) -> SINK {
        self.sink
    }

    /// Bring the panel up: pins idle, reset pulse, bus setup, init list,
    /// then display on
    pub fn begin(&mut self) -> Result<(), SINK::Error> {
        self.gpio(GpioMessage::Init)?;
        self.gpio(GpioMessage::SetReset(Level::High))?;
        self.gpio(GpioMessage::DelayMilliseconds(RESET_SETTLE_MS))?;
        self.gpio(GpioMessage::SetReset(Level::Low))?;
        self.gpio(GpioMessage::DelayMilliseconds(RESET_HOLD_MS))?;
        self.gpio(GpioMessage::SetReset(Level::High))?;
        self.gpio(GpioMessage::DelayMilliseconds(RESET_RECOVER_MS))?;

        self.byte(ByteMessage::Init)?;

        let mut init = [0u8; MAX_INIT_LEN];
        let len = self.init_sequence(&mut init);
        self.send_commands(&init[..len])?;
        self.set_power_save(false)?;

        info!(
            "ssd1306 ready: {}x{} offset {}",
            self.config.width,
            self.config.height,
            self.config.x_offset
        );
        Ok(())
    }

    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), SINK::Error> {
        self.config.contrast = contrast;
        self.send_commands(&[cmd::SET_CONTRAST, contrast])
    }

    /// Power save on blanks the panel; RAM contents survive
    pub fn set_power_save(&mut self, on: bool) -> Result<(), SINK::Error> {
        let command = if on { cmd::DISPLAY_OFF } else { cmd::DISPLAY_ON };
        self.send_commands(&[command])
    }

    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Push every page of the buffer to the controller
    pub fn send_buffer(&mut self) -> Result<(), SINK::Error> {
        let column = self.config.x_offset;
        for page in 0..self.buffer.pages() {
            let header = [
                cmd::PAGE_START | (page & 0x07),
                cmd::COLUMN_HIGH | (column >> 4),
                column & 0x0F,
            ];
            self.sink.byte_message(ByteMessage::StartTransfer)?;
            self.sink
                .byte_message(ByteMessage::SetDataCommandLine(Level::Low))?;
            self.sink.byte_message(ByteMessage::Send(&header))?;
            self.sink
                .byte_message(ByteMessage::SetDataCommandLine(Level::High))?;
            self.sink
                .byte_message(ByteMessage::Send(self.buffer.page(page)))?;
            self.sink.byte_message(ByteMessage::EndTransfer)?;
        }
        Ok(())
    }

    fn init_sequence(&self, out: &mut [u8; MAX_INIT_LEN]) -> usize {
        let height = self.config.height;
        let com_pins = if height == 32 { 0x02 } else { 0x12 };
        let list = [
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_MULTIPLEX,
            (height - 1) as u8,
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::CHARGE_PUMP,
            0x14,
            cmd::MEMORY_MODE,
            0x02,
            cmd::SEGMENT_REMAP,
            cmd::COM_SCAN_DEC,
            cmd::SET_COM_PINS,
            com_pins,
            cmd::SET_CONTRAST,
            self.config.contrast,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DESELECT,
            0x40,
            cmd::DEACTIVATE_SCROLL,
            cmd::RESUME_FROM_RAM,
            cmd::NORMAL_DISPLAY,
        ];
        out[..list.len()].copy_from_slice(&list);
        list.len()
    }

    fn send_commands(&mut self, commands: &[u8]) -> Result<(), SINK::Error> {
        self.byte(ByteMessage::StartTransfer)?;
        self.byte(ByteMessage::SetDataCommandLine(Level::Low))?;
        self.byte(ByteMessage::Send(commands))?;
        self.byte(ByteMessage::EndTransfer)
    }

    fn byte(&mut self, msg: ByteMessage<'_>) -> Result<(), SINK::Error> {
        self.sink.byte_message(msg).map(|_| ())
    }

    fn gpio(&mut self, msg: GpioMessage) -> Result<(), SINK::Error> {
        self.sink.gpio_message(msg).map(|_| ())
    }
}

impl<SINK: MessageSink> FramePanel for Ssd1306<SINK> {
    type Surface = MonoBuffer;
    type Error = SINK::Error;

    fn clear_buffer(&mut self) {
        Ssd1306::clear_buffer(self);
    }

    fn surface(&mut self) -> &mut MonoBuffer {
        &mut self.buffer
    }

    fn send_buffer(&mut self) -> Result<(), Self::Error> {
        Ssd1306::send_buffer(self)
    }
}
