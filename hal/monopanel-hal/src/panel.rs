//! Hardware-access surface for the display bus
//!
//! [`PanelIo`] is everything the bus driver needs from the platform: a
//! write-only SPI bus, three control lines and blocking delays. It is kept
//! as one trait so a platform can back it with whatever mix of peripherals
//! it has, and so tests can record a single ordered call trace.

/// Hardware access for a SPI-attached panel
///
/// Every call takes effect before it returns. Errors are hardware faults;
/// callers propagate them rather than retrying.
pub trait PanelIo {
    /// Error reported by the underlying bus or pins
    type Error;

    /// (Re)initialize the SPI peripheral (clock and mode)
    fn spi_init(&mut self) -> Result<(), Self::Error>;

    /// Write bytes over SPI in order
    fn spi_write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Configure CS, DC and RESET as outputs in their idle state
    fn gpio_init(&mut self) -> Result<(), Self::Error>;

    /// Drive chip select (`false` selects the panel)
    fn set_chip_select(&mut self, high: bool);

    /// Drive data/command (`false` = command, `true` = data)
    fn set_data_command(&mut self, high: bool);

    /// Drive the reset line (`false` holds the panel in reset)
    fn set_reset(&mut self, high: bool);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}
