//! Alert modal

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use monopanel_core::anim::AnimatedValue;
use monopanel_core::{Navigation, Page};
use monopanel_drivers::MonoBuffer;
use monopanel_protocol::Key;

use super::{fill, outline, px, text, Screen, LINE_HEIGHT};

/// Boxed title + message that unfolds from its top edge
pub struct AlertPage {
    area: Rectangle,
    title: &'static str,
    message: &'static str,
    height: AnimatedValue,
}

impl AlertPage {
    /// Alert occupying `frame`, clipped to the panel
    pub fn new(screen: Screen, frame: Rectangle, title: &'static str, message: &'static str) -> Self {
        let area = frame.intersection(&screen.bounds());
        Self {
            area,
            title,
            message,
            height: screen.value(0.0),
        }
    }

    /// The stock "Info / Hello World" alert
    pub fn info(screen: Screen) -> Self {
        Self::new(
            screen,
            Rectangle::new(Point::new(14, 12), Size::new(100, 40)),
            "Info",
            "Hello World",
        )
    }

    pub fn area(&self) -> Rectangle {
        self.area
    }

    fn full_height(&self) -> f32 {
        self.area.size.height as f32
    }
}

impl Page<MonoBuffer> for AlertPage {
    fn animate_in(&mut self) {
        self.height.set_target(self.full_height());
    }

    fn animate_out(&mut self) {
        self.height.set_target(0.0);
    }

    fn is_exit_animation_finished(&self) -> bool {
        self.height.value() <= 0.5
    }

    fn is_enter_animation_finished(&self) -> bool {
        self.height.value() >= self.full_height() - 0.5
    }

    fn advance(&mut self, dt: f32) {
        self.height.advance(dt);
    }

    fn draw(&mut self, surface: &mut MonoBuffer) {
        let shown = px(self.height.value()).max(0) as u32;
        if shown == 0 {
            return;
        }
        let visible = Rectangle::new(
            self.area.top_left,
            Size::new(self.area.size.width, shown.min(self.area.size.height)),
        );
        fill(surface, visible, false);
        outline(surface, visible);

        // Text only once the box has room for it
        let x = self.area.top_left.x + 3;
        let top = self.area.top_left.y;
        if shown as i32 >= LINE_HEIGHT + 2 {
            text(surface, self.title, x, top + LINE_HEIGHT - 1);
        }
        if shown as i32 >= 2 * LINE_HEIGHT + 4 {
            text(surface, self.message, x, top + 2 * LINE_HEIGHT + 1);
        }
    }

    fn handle_input(&mut self, key: Key) -> Navigation<MonoBuffer> {
        match key {
            Key::Back | Key::Select => Navigation::Dismiss,
            _ => Navigation::None,
        }
    }
}
