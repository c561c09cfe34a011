//! Root tile menu

use alloc::boxed::Box;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use monopanel_core::anim::AnimatedValue;
use monopanel_core::{Navigation, Page};
use monopanel_drivers::MonoBuffer;
use monopanel_protocol::Key;

use super::{
    outline, px, text, xbm, DetailPage, EditorPage, ProgressPage, Screen, SettingsPage, CHAR_WIDTH,
};

const ICON_SIZE: u32 = 30;
/// Horizontal distance between neighbouring tiles
const TILE_PITCH: f32 = 36.0;
const ICON_TOP: i32 = 2;

const ICON_SLEEP: [u8; 120] = [
    0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xF1, 0x3F,
    0xFF, 0xFF, 0xC3, 0x3F, 0xFF, 0xFF, 0x87, 0x3F, 0xFF, 0xFF, 0x07, 0x3F, 0xFF, 0xFF, 0x0F, 0x3E,
    0xFF, 0xFF, 0x0F, 0x3E, 0xFF, 0xFF, 0x0F, 0x3C, 0xFF, 0xFF, 0x0F, 0x3C, 0xFF, 0xFF, 0x0F, 0x38,
    0xFF, 0xFF, 0x0F, 0x38, 0xFF, 0xFF, 0x0F, 0x38, 0xFF, 0xFF, 0x07, 0x38, 0xFF, 0xFF, 0x07, 0x38,
    0xFF, 0xFF, 0x03, 0x38, 0xF7, 0xFF, 0x01, 0x38, 0xE7, 0xFF, 0x00, 0x3C, 0x87, 0x3F, 0x00, 0x3C,
    0x0F, 0x00, 0x00, 0x3E, 0x0F, 0x00, 0x00, 0x3E, 0x1F, 0x00, 0x00, 0x3F, 0x3F, 0x00, 0x80, 0x3F,
    0x7F, 0x00, 0xC0, 0x3F, 0xFF, 0x01, 0xF0, 0x3F, 0xFF, 0x07, 0xFC, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F,
    0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F,
];

const ICON_EDITOR: [u8; 120] = [
    0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xF9, 0xE7, 0x3F,
    0xFF, 0xF9, 0xE7, 0x3F, 0xFF, 0xF9, 0xE7, 0x3F, 0xFF, 0xF0, 0xE7, 0x3F, 0x7F, 0xE0, 0xE7, 0x3F,
    0x7F, 0xE0, 0xC3, 0x3F, 0x7F, 0xE0, 0xC3, 0x3F, 0x7F, 0xE0, 0xC3, 0x3F, 0x7F, 0xE0, 0xE7, 0x3F,
    0xFF, 0xF0, 0xE7, 0x3F, 0xFF, 0xF9, 0xE7, 0x3F, 0xFF, 0xF9, 0xE7, 0x3F, 0xFF, 0xF9, 0xE7, 0x3F,
    0xFF, 0xF9, 0xE7, 0x3F, 0xFF, 0xF9, 0xC3, 0x3F, 0xFF, 0xF9, 0x81, 0x3F, 0xFF, 0xF0, 0x81, 0x3F,
    0xFF, 0xF0, 0x81, 0x3F, 0xFF, 0xF0, 0x81, 0x3F, 0xFF, 0xF9, 0x81, 0x3F, 0xFF, 0xF9, 0xC3, 0x3F,
    0xFF, 0xF9, 0xE7, 0x3F, 0xFF, 0xF9, 0xE7, 0x3F, 0xFF, 0xF9, 0xE7, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F,
    0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F,
];

const ICON_VOLT: [u8; 120] = [
    0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F, 0xEF, 0xFF, 0xFF, 0x3F, 0xC7, 0xFF, 0xFF, 0x3F,
    0xC7, 0xF3, 0xFF, 0x3F, 0x83, 0xC0, 0xFF, 0x3F, 0xEF, 0xCC, 0xFF, 0x3F, 0x6F, 0x9E, 0xFF, 0x3F,
    0x6F, 0x9E, 0xFF, 0x3F, 0x2F, 0x3F, 0xFF, 0x3F, 0x2F, 0x3F, 0xFF, 0x3F, 0x8F, 0x7F, 0xFE, 0x3F,
    0x8F, 0x7F, 0xFE, 0x39, 0x8F, 0x7F, 0xFE, 0x39, 0xCF, 0xFF, 0xFC, 0x3C, 0xCF, 0xFF, 0xFC, 0x3C,
    0xEF, 0xFF, 0xFC, 0x3C, 0xEF, 0xFF, 0x79, 0x3E, 0xEF, 0xFF, 0x79, 0x3E, 0xEF, 0xFF, 0x33, 0x3F,
    0xEF, 0xFF, 0x33, 0x3F, 0xEF, 0xFF, 0x87, 0x3F, 0xEF, 0xFF, 0xCF, 0x3F, 0xEF, 0xFF, 0x7F, 0x3E,
    0xEF, 0xFF, 0x7F, 0x38, 0x0F, 0x00, 0x00, 0x30, 0xFF, 0xFF, 0x7F, 0x38, 0xFF, 0xFF, 0x7F, 0x3E,
    0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F,
];

const ICON_SETTING: [u8; 120] = [
    0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F,
    0xFF, 0x1F, 0xFE, 0x3F, 0xFF, 0x1F, 0xFE, 0x3F, 0xFF, 0x0C, 0xCC, 0x3F, 0x7F, 0x00, 0x80, 0x3F,
    0x3F, 0x00, 0x00, 0x3F, 0x3F, 0xE0, 0x01, 0x3F, 0x7F, 0xF8, 0x87, 0x3F, 0x7F, 0xFC, 0x8F, 0x3F,
    0x3F, 0xFC, 0x0F, 0x3F, 0x0F, 0x3E, 0x1F, 0x3C, 0x0F, 0x1E, 0x1E, 0x3C, 0x0F, 0x1E, 0x1E, 0x3C,
    0x0F, 0x3E, 0x1F, 0x3C, 0x3F, 0xFC, 0x0F, 0x3F, 0x7F, 0xFC, 0x8F, 0x3F, 0x7F, 0xF8, 0x87, 0x3F,
    0x3F, 0xE0, 0x01, 0x3F, 0x3F, 0x00, 0x00, 0x3F, 0x7F, 0x00, 0x80, 0x3F, 0xFF, 0x0C, 0xCC, 0x3F,
    0xFF, 0x1F, 0xFE, 0x3F, 0xFF, 0x1F, 0xFE, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F,
    0xFF, 0xFF, 0xFF, 0x3F, 0xFF, 0xFF, 0xFF, 0x3F,
];

/// One menu entry
struct Tile {
    label: &'static str,
    icon: &'static [u8],
}

const TILES: [Tile; 4] = [
    Tile { label: "Sleep", icon: &ICON_SLEEP },
    Tile { label: "Editor", icon: &ICON_EDITOR },
    Tile { label: "Volt", icon: &ICON_VOLT },
    Tile { label: "Setting", icon: &ICON_SETTING },
];

const SLEEP: usize = 0;
const EDITOR: usize = 1;
const VOLT: usize = 2;
const SETTING: usize = 3;

/// Horizontally scrolling icon menu
///
/// The strip slides so the selected icon sits centered; the slide is an
/// animated value, so holding a key glides rather than jumps.
pub struct HomePage {
    screen: Screen,
    selected: usize,
    strip_x: AnimatedValue,
}

impl HomePage {
    pub fn new(screen: Screen) -> Self {
        let strip_x = screen.value(Self::strip_target(&screen, 0));
        Self {
            screen,
            selected: 0,
            strip_x,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn label(&self) -> &'static str {
        TILES[self.selected].label
    }

    fn strip_target(screen: &Screen, index: usize) -> f32 {
        let center = (f32::from(screen.width) - ICON_SIZE as f32) / 2.0;
        center - index as f32 * TILE_PITCH
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.strip_x
            .set_target(Self::strip_target(&self.screen, index));
    }

    fn activate(&self) -> Navigation<MonoBuffer> {
        match self.selected {
            EDITOR => Navigation::Push(Box::new(EditorPage::new(self.screen))),
            VOLT => Navigation::Push(Box::new(DetailPage::new(self.screen, self.label()))),
            SETTING => Navigation::Push(Box::new(SettingsPage::new(self.screen))),
            // Sleep has no action yet
            SLEEP => Navigation::None,
            _ => Navigation::None,
        }
    }
}

impl Page<MonoBuffer> for HomePage {
    fn animate_in(&mut self) {}

    fn animate_out(&mut self) {}

    fn is_exit_animation_finished(&self) -> bool {
        true
    }

    fn advance(&mut self, dt: f32) {
        self.strip_x.advance(dt);
    }

    fn draw(&mut self, surface: &mut MonoBuffer) {
        let strip = px(self.strip_x.value());
        for (i, tile) in TILES.iter().enumerate() {
            let x = strip + i as i32 * TILE_PITCH as i32;
            xbm(surface, Point::new(x, ICON_TOP), ICON_SIZE, tile.icon);
        }

        // Cursor box around the centered slot
        let slot = px(Self::strip_target(&self.screen, 0));
        outline(
            surface,
            Rectangle::new(
                Point::new(slot - 2, ICON_TOP - 2),
                Size::new(ICON_SIZE + 4, ICON_SIZE + 4),
            ),
        );

        let label = self.label();
        let label_x = (i32::from(self.screen.width) - label.len() as i32 * CHAR_WIDTH) / 2;
        text(surface, label, label_x.max(0), i32::from(self.screen.height) - 3);
    }

    fn handle_input(&mut self, key: Key) -> Navigation<MonoBuffer> {
        match key {
            Key::Right if self.selected + 1 < TILES.len() => {
                self.select(self.selected + 1);
                Navigation::None
            }
            Key::Left if self.selected > 0 => {
                self.select(self.selected - 1);
                Navigation::None
            }
            Key::Select => self.activate(),
            Key::Menu => Navigation::Present(Box::new(ProgressPage::new(
                self.screen,
                "Progress",
                50,
            ))),
            _ => Navigation::None,
        }
    }
}
