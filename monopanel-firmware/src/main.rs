//! Monopanel - Monochrome Panel UI Firmware
//!
//! Drives a 64x48 SSD1306 OLED on SPI0 from an RP2040 and runs a small page
//! UI on it: a tile menu, three sliding pages (detail, editor, settings) and
//! two modals. Keys come in as single bytes on the UART0 console.
//!
//! Data flow per frame:
//!
//! ```text
//! UART0 RX ──► Key ──► Router ──► pages draw into MonoBuffer
//!                                        │
//!              Ssd1306 ──► BusDriver ──► SpiPanelIo ──► SPI0 / CS / DC / RST
//! ```

#![no_std]
#![no_main]

extern crate alloc;

use alloc::boxed::Box;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::Spi;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::{Duration, Ticker};
use embedded_alloc::LlffHeap as Heap;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use monopanel_core::config::DeviceConfig;
use monopanel_core::{App, Router};
use monopanel_drivers::{BusDriver, MonoBuffer, Ssd1306, SpiPanelIo};
use monopanel_hal_rp2040::spi::embassy_config;
use monopanel_hal_rp2040::{pin_bank, BusyDelay, ConsoleRx, Line, PanelSpi, Uptime};

use crate::config::parse_config;
use crate::pages::{HomePage, Screen};

mod config;
mod pages;

// Heap allocator for boxed pages
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: 16KB
const HEAP_SIZE: usize = 16 * 1024;

/// Embedded device configuration (compiled into firmware)
/// Edit device.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../device.toml");

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Monopanel firmware starting...");

    init_heap();

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // Console input on UART0 (TX GPIO0, RX GPIO1); only RX is used
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config.ui.uart_baud;
    let tx_buf = TX_BUF.init([0u8; 16]);
    let rx_buf = RX_BUF.init([0u8; 64]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let (_tx, rx) = uart.into_buffered(Irqs, tx_buf, rx_buf).split();
    let mut console = ConsoleRx::new(rx);
    info!("UART initialized at {} baud", config.ui.uart_baud);

    // Control lines are picked from device.toml; SCK/MOSI are fixed
    let mut bank = unwrap!(pin_bank!(p;
        2 => PIN_2, 3 => PIN_3, 4 => PIN_4, 5 => PIN_5, 6 => PIN_6, 7 => PIN_7,
        8 => PIN_8, 9 => PIN_9, 10 => PIN_10, 11 => PIN_11, 12 => PIN_12,
        13 => PIN_13, 14 => PIN_14, 15 => PIN_15, 16 => PIN_16, 17 => PIN_17,
        20 => PIN_20, 21 => PIN_21, 22 => PIN_22, 26 => PIN_26, 27 => PIN_27,
        28 => PIN_28,
    ));
    let cs = Line::output(unwrap!(bank.take(config.pins.cs)), true);
    let dc = Line::output(unwrap!(bank.take(config.pins.dc)), false);
    let reset = Line::output(unwrap!(bank.take(config.pins.reset)), true);

    let spi_config = config.panel.spi_config();
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, embassy_config(&spi_config));
    let io = SpiPanelIo::new(PanelSpi::new(spi), cs, dc, reset, BusyDelay, spi_config);

    let mut panel = unwrap!(Ssd1306::new(BusDriver::new(io), &config.panel));
    unwrap!(panel.begin());
    info!(
        "Panel initialized: CS={} DC={} RST={}",
        config.pins.cs, config.pins.dc, config.pins.reset
    );

    let screen = Screen::from_config(&config);
    let mut router: Router<MonoBuffer> = Router::new();
    unwrap!(router.set_root(Box::new(HomePage::new(screen))));
    let mut app = App::new(router);

    let clock = Uptime;
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(config.ui.frame_interval_ms)));

    info!("Entering frame loop");
    loop {
        // A panel fault leaves the display in an unknown state; stop here
        unwrap!(app.tick(&clock, &mut console, &mut panel));
        ticker.next().await;
    }
}

/// Initialize the heap allocator
fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}

/// Parse the embedded configuration
///
/// build.rs has already checked device.toml, so a failure here means the
/// two checks disagree; the built-in defaults are used instead.
fn load_config() -> DeviceConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Parsed embedded configuration: {}x{} panel",
                config.panel.width, config.panel.height
            );
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {}", e);
            error!("Using built-in defaults");
            DeviceConfig::default()
        }
    }
}
