//! 1-bit frame buffer
//!
//! Laid out the way SSD1306-class controllers consume it: one byte covers
//! eight vertical pixels, bytes run left to right across a page, pages run
//! top to bottom.
//!
//! ```text
//! page 0: [x0 y0..7][x1 y0..7] ... [xW-1 y0..7]
//! page 1: [x0 y8..15] ...
//! ```

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use monopanel_core::config::{check_size, ConfigError, PanelConfig, MAX_BUFFER_BYTES};

/// Off-screen monochrome frame buffer
#[derive(Clone)]
pub struct MonoBuffer {
    data: [u8; MAX_BUFFER_BYTES],
    width: u16,
    height: u16,
}

impl MonoBuffer {
    /// Blank buffer for the configured panel
    pub fn new(panel: &PanelConfig) -> Result<Self, ConfigError> {
        Self::with_size(panel.width, panel.height)
    }

    /// Blank buffer of `width` x `height` pixels
    pub fn with_size(width: u16, height: u16) -> Result<Self, ConfigError> {
        check_size(width, height)?;
        Ok(Self {
            data: [0; MAX_BUFFER_BYTES],
            width,
            height,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u8 {
        (self.height / 8) as u8
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Set every pixel to `on`
    pub fn fill(&mut self, on: bool) {
        let len = self.len();
        self.data[..len].fill(if on { 0xFF } else { 0x00 });
    }

    /// Set one pixel; out-of-bounds coordinates are ignored
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize / 8) * self.width as usize + x as usize;
        let mask = 1 << (y % 8);
        if on {
            self.data[index] |= mask;
        } else {
            self.data[index] &= !mask;
        }
    }

    /// Read one pixel; out-of-bounds reads as off
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = (y as usize / 8) * self.width as usize + x as usize;
        self.data[index] & (1 << (y % 8)) != 0
    }

    /// Column bytes of one page, left to right
    pub fn page(&self, page: u8) -> &[u8] {
        let width = self.width as usize;
        let start = (page as usize * width).min(self.len());
        let end = (start + width).min(self.len());
        &self.data[start..end]
    }

    /// The whole frame, page by page
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    fn len(&self) -> usize {
        (self.width as usize * self.height as usize) / 8
    }
}

impl OriginDimensions for MonoBuffer {
    fn size(&self) -> Size {
        Size::new(u32::from(self.width), u32::from(self.height))
    }
}

impl DrawTarget for MonoBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            // set_pixel drops anything past the right or bottom edge
            let x = u16::try_from(point.x).unwrap_or(u16::MAX);
            let y = u16::try_from(point.y).unwrap_or(u16::MAX);
            self.set_pixel(x, y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    fn buffer() -> MonoBuffer {
        MonoBuffer::new(&PanelConfig::default()).unwrap()
    }

    #[test]
    fn test_geometry() {
        let buf = buffer();
        assert_eq!(buf.size(), Size::new(64, 48));
        assert_eq!(buf.pages(), 6);
        assert_eq!(buf.as_bytes().len(), 384);
        assert_eq!(buf.page(5).len(), 64);
    }

    #[test]
    fn test_rejects_bad_geometry() {
        assert_eq!(
            MonoBuffer::with_size(64, 47).err(),
            Some(ConfigError::InvalidGeometry)
        );
        assert_eq!(
            MonoBuffer::with_size(256, 64).err(),
            Some(ConfigError::InvalidGeometry)
        );
        // Fits in the byte budget but has sixteen pages
        assert_eq!(
            MonoBuffer::with_size(64, 128).err(),
            Some(ConfigError::InvalidGeometry)
        );
        assert!(MonoBuffer::with_size(128, 64).is_ok());
    }

    #[test]
    fn test_pixel_layout() {
        let mut buf = buffer();
        buf.set_pixel(0, 0, true);
        buf.set_pixel(3, 9, true);
        buf.set_pixel(63, 47, true);

        assert_eq!(buf.page(0)[0], 0b0000_0001);
        assert_eq!(buf.page(1)[3], 0b0000_0010);
        assert_eq!(buf.page(5)[63], 0b1000_0000);
        assert!(buf.pixel(3, 9));

        buf.set_pixel(3, 9, false);
        assert!(!buf.pixel(3, 9));
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut buf = buffer();
        buf.set_pixel(64, 0, true);
        buf.set_pixel(0, 48, true);
        Pixel(Point::new(-1, 4), BinaryColor::On).draw(&mut buf).unwrap();
        Pixel(Point::new(100_000, 4), BinaryColor::On).draw(&mut buf).unwrap();
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draw_rectangle_clipped() {
        let mut buf = buffer();
        Rectangle::new(Point::new(60, 40), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut buf)
            .unwrap();

        assert!(buf.pixel(60, 40));
        assert!(buf.pixel(63, 47));
        assert!(!buf.pixel(59, 40));
        assert_eq!(buf.page(5)[60..64], [0xFF; 4]);
    }

    #[test]
    fn test_clear_and_fill() {
        let mut buf = buffer();
        DrawTarget::clear(&mut buf, BinaryColor::On).unwrap();
        assert!(buf.as_bytes().iter().all(|&b| b == 0xFF));
        buf.clear();
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }
}
