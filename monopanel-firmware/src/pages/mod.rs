//! Demo pages
//!
//! - [`HomePage`]: root tile menu
//! - [`DetailPage`]: sliding list page pushed from the menu
//! - [`EditorPage`]: sliding text layout page
//! - [`SettingsPage`]: sliding settings list whose value rows open the
//!   progress modal
//! - [`AlertPage`]: boxed message modal
//! - [`ProgressPage`]: value-adjust modal with an animated bar
//!
//! Every page renders onto the panel's [`MonoBuffer`] with
//! `embedded-graphics` and gets its geometry and animation settings from a
//! shared [`Screen`].

mod alert;
mod detail;
mod editor;
mod home;
mod progress;
mod settings;
mod slide;

pub use alert::AlertPage;
pub use detail::DetailPage;
pub use editor::EditorPage;
pub use home::HomePage;
pub use progress::ProgressPage;
pub use settings::SettingsPage;
pub use slide::Slide;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use monopanel_core::anim::AnimatedValue;
use monopanel_core::config::{AnimationConfig, DeviceConfig};
use monopanel_drivers::MonoBuffer;

/// Glyph cell of the UI font
pub const CHAR_WIDTH: i32 = 6;
pub const LINE_HEIGHT: i32 = 10;

/// Panel geometry and animation settings every page is built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub width: u16,
    pub height: u16,
    pub animation: AnimationConfig,
}

impl Screen {
    pub fn from_config(config: &DeviceConfig) -> Self {
        Self {
            width: config.panel.width,
            height: config.panel.height,
            animation: config.animation,
        }
    }

    /// Settled animated value at `initial`
    pub fn value(&self, initial: f32) -> AnimatedValue {
        self.animation.value(initial)
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::zero(),
            Size::new(u32::from(self.width), u32::from(self.height)),
        )
    }
}

// Drawing into a MonoBuffer cannot fail; the helpers below drop the
// `Infallible` results.

pub(crate) fn text(surface: &mut MonoBuffer, s: &str, x: i32, baseline: i32) {
    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let _ = Text::new(s, Point::new(x, baseline), style).draw(surface);
}

pub(crate) fn outline(surface: &mut MonoBuffer, area: Rectangle) {
    let _ = area
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(surface);
}

pub(crate) fn fill(surface: &mut MonoBuffer, area: Rectangle, on: bool) {
    let color = if on { BinaryColor::On } else { BinaryColor::Off };
    let _ = surface.fill_solid(&area, color);
}

/// Draw an XBM bitmap (row-major, LSB-first) with its top-left at `origin`
///
/// Set bits are drawn lit; clear bits leave the buffer untouched.
pub(crate) fn xbm(surface: &mut MonoBuffer, origin: Point, width: u32, bits: &[u8]) {
    let stride = width.div_ceil(8) as usize;
    let pixels = bits.chunks(stride).enumerate().flat_map(|(row, bytes)| {
        (0..width).filter_map(move |col| {
            let byte = bytes.get((col / 8) as usize)?;
            (byte & (1 << (col % 8)) != 0).then(|| {
                Pixel(
                    origin + Point::new(col as i32, row as i32),
                    BinaryColor::On,
                )
            })
        })
    });
    let _ = surface.draw_iter(pixels);
}

/// Round an animated coordinate to the pixel grid
pub(crate) fn px(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}
