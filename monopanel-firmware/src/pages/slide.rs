//! Horizontal slide shared by full-screen pushed pages

use monopanel_core::anim::AnimatedValue;

use super::{px, Screen};

/// Offset that starts off the right edge, slides to 0 on enter and back out
/// on exit
pub struct Slide {
    offset: AnimatedValue,
    width: f32,
}

impl Slide {
    pub fn new(screen: &Screen) -> Self {
        let width = f32::from(screen.width);
        Self {
            offset: screen.value(width),
            width,
        }
    }

    pub fn enter(&mut self) {
        self.offset.set_target(0.0);
    }

    pub fn exit(&mut self) {
        self.offset.set_target(self.width);
    }

    pub fn advance(&mut self, dt: f32) {
        self.offset.advance(dt);
    }

    pub fn entered(&self) -> bool {
        self.offset.target() == 0.0 && self.offset.is_settled()
    }

    pub fn exited(&self) -> bool {
        self.offset.value() >= self.width - 0.5
    }

    /// Current offset in pixels
    pub fn value(&self) -> f32 {
        self.offset.value()
    }

    /// Current offset on the pixel grid
    pub fn x(&self) -> i32 {
        px(self.offset.value())
    }
}
