//! Dynamic pin allocation for config-driven hardware setup
//!
//! The control lines (CS, DC, RESET) come from `device.toml`, so they are
//! looked up by GPIO number at runtime. The firmware moves every free pin
//! into a [`PinBank`] with [`pin_bank!`](crate::pin_bank) and takes the
//! configured ones back out.

use embassy_rp::gpio::AnyPin;
use embassy_rp::Peri;

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: usize = 30;

/// Pins owned by fixed-function peripherals on this board
///
/// UART0 TX/RX on GPIO0/1, SPI0 SCK/MOSI on GPIO18/19.
pub const RESERVED: [u8; 4] = [0, 1, 18, 19];

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken, or inserted twice
    AlreadyTaken,
    /// Pin belongs to a fixed-function peripheral
    Reserved,
}

/// Move GPIOs into a [`PinBank`] by number
///
/// Evaluates to `Result<PinBank, PinError>`.
///
/// ```ignore
/// let mut bank = pin_bank!(p; 16 => PIN_16, 17 => PIN_17, 20 => PIN_20)?;
/// let cs = bank.take(17)?;
/// ```
#[macro_export]
macro_rules! pin_bank {
    ($p:expr; $($num:literal => $pin:ident),* $(,)?) => {{
        let mut bank = $crate::pins::PinBank::new();
        let mut result: Result<(), $crate::pins::PinError> = Ok(());
        $(
            if result.is_ok() {
                result = bank.insert(
                    $num,
                    embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.$pin),
                );
            }
        )*
        result.map(|()| bank)
    }};
}

/// Pin bank that holds GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl Default for PinBank {
    fn default() -> Self {
        Self::new()
    }
}

impl PinBank {
    /// Empty bank
    pub fn new() -> Self {
        Self {
            pins: [const { None }; GPIO_COUNT],
        }
    }

    /// Hand a pin to the bank
    pub fn insert(&mut self, pin_num: u8, pin: Peri<'static, AnyPin>) -> Result<(), PinError> {
        check(pin_num)?;
        let slot = &mut self.pins[pin_num as usize];
        if slot.is_some() {
            return Err(PinError::AlreadyTaken);
        }
        *slot = Some(pin);
        Ok(())
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        check(pin_num)?;
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken)
    }

    /// Check if a pin is available
    pub fn is_available(&self, pin_num: u8) -> bool {
        check(pin_num).is_ok() && self.pins[pin_num as usize].is_some()
    }
}

fn check(pin_num: u8) -> Result<(), PinError> {
    if pin_num as usize >= GPIO_COUNT {
        return Err(PinError::InvalidPin);
    }
    if RESERVED.contains(&pin_num) {
        return Err(PinError::Reserved);
    }
    Ok(())
}
