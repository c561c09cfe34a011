//! [`PanelIo`] over HAL SPI, output pins and a delay

use monopanel_hal::{Delay, OutputPin, PanelIo, SpiBus, SpiConfig};

/// Hardware access for a 4-wire SPI panel
///
/// Chip select, data/command and reset are plain GPIOs driven by hand; the
/// SPI peripheral only clocks data out.
pub struct SpiPanelIo<SPI, CS, DC, RST, D> {
    spi: SPI,
    cs: CS,
    dc: DC,
    reset: RST,
    delay: D,
    config: SpiConfig,
}

impl<SPI, CS, DC, RST, D> SpiPanelIo<SPI, CS, DC, RST, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    D: Delay,
{
    /// Bundle the peripherals; nothing is driven until `gpio_init`/`spi_init`
    pub fn new(spi: SPI, cs: CS, dc: DC, reset: RST, delay: D, config: SpiConfig) -> Self {
        Self {
            spi,
            cs,
            dc,
            reset,
            delay,
            config,
        }
    }

    pub fn config(&self) -> &SpiConfig {
        &self.config
    }

    /// Take the peripherals back
    pub fn release(self) -> (SPI, CS, DC, RST, D) {
        (self.spi, self.cs, self.dc, self.reset, self.delay)
    }
}

impl<SPI, CS, DC, RST, D> PanelIo for SpiPanelIo<SPI, CS, DC, RST, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    D: Delay,
{
    type Error = SPI::Error;

    fn spi_init(&mut self) -> Result<(), SPI::Error> {
        self.spi.configure(&self.config)
    }

    fn spi_write(&mut self, data: &[u8]) -> Result<(), SPI::Error> {
        self.spi.write(data)
    }

    fn gpio_init(&mut self) -> Result<(), SPI::Error> {
        // Idle: deselected, command mode, out of reset
        self.cs.set_high();
        self.dc.set_low();
        self.reset.set_high();
        Ok(())
    }

    fn set_chip_select(&mut self, high: bool) {
        self.cs.set_state(high);
    }

    fn set_data_command(&mut self, high: bool) {
        self.dc.set_state(high);
    }

    fn set_reset(&mut self, high: bool) {
        self.reset.set_state(high);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
