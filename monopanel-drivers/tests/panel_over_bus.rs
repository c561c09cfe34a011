//! SSD1306 layer driven end to end through the bus driver

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use monopanel_core::config::PanelConfig;
use monopanel_core::FramePanel;
use monopanel_drivers::{BusDriver, Ssd1306};
use monopanel_hal::PanelIo;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Wire {
    Spi { data: bool, bytes: Vec<u8> },
    Reset(bool),
    Delay(u32),
}

#[derive(Default)]
struct WireIo {
    cs_high: bool,
    dc_high: bool,
    wire: Vec<Wire>,
}

impl PanelIo for WireIo {
    type Error = core::convert::Infallible;

    fn spi_init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn spi_write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        assert!(!self.cs_high, "write with chip select released");
        self.wire.push(Wire::Spi {
            data: self.dc_high,
            bytes: data.to_vec(),
        });
        Ok(())
    }

    fn gpio_init(&mut self) -> Result<(), Self::Error> {
        self.cs_high = true;
        self.dc_high = false;
        Ok(())
    }

    fn set_chip_select(&mut self, high: bool) {
        self.cs_high = high;
    }

    fn set_data_command(&mut self, high: bool) {
        self.dc_high = high;
    }

    fn set_reset(&mut self, high: bool) {
        self.wire.push(Wire::Reset(high));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wire.push(Wire::Delay(ms));
    }

    fn delay_us(&mut self, us: u32) {
        self.wire.push(Wire::Delay(us / 1000));
    }
}

fn panel() -> Ssd1306<BusDriver<WireIo>> {
    Ssd1306::new(BusDriver::new(WireIo::default()), &PanelConfig::default()).unwrap()
}

fn wire(panel: &Ssd1306<BusDriver<WireIo>>) -> &[Wire] {
    &panel.sink().io().wire
}

#[test]
fn begin_pulses_reset_then_sends_commands() {
    let mut panel = panel();
    panel.begin().unwrap();

    let wire = wire(&panel);
    assert_eq!(
        wire[..6],
        [
            Wire::Reset(true),
            Wire::Delay(1),
            Wire::Reset(false),
            Wire::Delay(100),
            Wire::Reset(true),
            Wire::Delay(100),
        ]
    );
    match &wire[6] {
        Wire::Spi { data, bytes } => {
            assert!(!data);
            assert_eq!(bytes[0], 0xAE);
        }
        other => panic!("expected init list, got {other:?}"),
    }
    assert_eq!(
        wire[7],
        Wire::Spi {
            data: false,
            bytes: vec![0xAF]
        }
    );
    assert!(!panel.sink().in_transfer());
}

#[test]
fn drawn_frame_reaches_the_wire() {
    let mut panel = panel();
    FramePanel::clear_buffer(&mut panel);
    Line::new(Point::new(0, 0), Point::new(63, 0))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(FramePanel::surface(&mut panel))
        .unwrap();
    FramePanel::send_buffer(&mut panel).unwrap();

    let wire = wire(&panel);
    // Six pages, each a command header then data
    assert_eq!(wire.len(), 12);
    for (page, pair) in wire.chunks(2).enumerate() {
        assert_eq!(
            pair[0],
            Wire::Spi {
                data: false,
                bytes: vec![0xB0 | page as u8, 0x12, 0x00],
            }
        );
        let expected = if page == 0 { 0x01 } else { 0x00 };
        assert_eq!(
            pair[1],
            Wire::Spi {
                data: true,
                bytes: vec![expected; 64],
            }
        );
    }
}
