//! Text layout page opened from the Editor tile

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use monopanel_core::{Navigation, Page};
use monopanel_drivers::MonoBuffer;
use monopanel_protocol::Key;

use super::{fill, text, Screen, Slide, CHAR_WIDTH, LINE_HEIGHT};

/// Labels pinned to the left and right edges with free space between
const LEADING: &str = "A";
const TRAILING: &str = "C";

/// Sliding page with a two-label horizontal row
pub struct EditorPage {
    screen: Screen,
    slide: Slide,
}

impl EditorPage {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            slide: Slide::new(&screen),
        }
    }

    /// Left edge of the trailing label, relative to the page
    fn trailing_x(&self) -> i32 {
        i32::from(self.screen.width) - TRAILING.len() as i32 * CHAR_WIDTH
    }
}

impl Page<MonoBuffer> for EditorPage {
    fn animate_in(&mut self) {
        self.slide.enter();
    }

    fn animate_out(&mut self) {
        self.slide.exit();
    }

    fn is_exit_animation_finished(&self) -> bool {
        self.slide.exited()
    }

    fn is_enter_animation_finished(&self) -> bool {
        self.slide.entered()
    }

    fn advance(&mut self, dt: f32) {
        self.slide.advance(dt);
    }

    fn draw(&mut self, surface: &mut MonoBuffer) {
        let x = self.slide.x();
        let area = Rectangle::new(Point::new(x, 0), self.screen.bounds().size);
        fill(surface, area, false);

        let baseline = (i32::from(self.screen.height) + LINE_HEIGHT) / 2 - 2;
        text(surface, LEADING, x, baseline);
        text(surface, TRAILING, x + self.trailing_x(), baseline);
    }

    fn handle_input(&mut self, key: Key) -> Navigation<MonoBuffer> {
        match key {
            Key::Back => Navigation::Back,
            _ => Navigation::None,
        }
    }
}
