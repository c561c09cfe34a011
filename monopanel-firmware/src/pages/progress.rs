//! Value-adjust modal

use alloc::rc::Rc;
use core::cell::Cell;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use monopanel_core::anim::AnimatedValue;
use monopanel_core::{Navigation, Page};
use monopanel_drivers::MonoBuffer;
use monopanel_protocol::Key;

use super::{fill, outline, px, text, Screen, LINE_HEIGHT};

const MINIMUM: i32 = 0;
const MAXIMUM: i32 = 100;
const STEP: i32 = 5;
const MARGIN: i32 = 4;
const BAR_HEIGHT: u32 = 8;

/// Titled progress bar adjusted with the arrow keys
///
/// Slides up from the bottom edge; the bar fill eases toward the value.
/// Every change is written to the attached cell, if any, so the page that
/// opened the modal sees it.
pub struct ProgressPage {
    screen: Screen,
    title: &'static str,
    value: i32,
    fill: AnimatedValue,
    lift: AnimatedValue,
    report: Option<Rc<Cell<i32>>>,
}

impl ProgressPage {
    pub fn new(screen: Screen, title: &'static str, value: i32) -> Self {
        let value = value.clamp(MINIMUM, MAXIMUM);
        let mut page = Self {
            screen,
            title,
            value,
            fill: screen.value(0.0),
            lift: screen.value(f32::from(screen.height)),
            report: None,
        };
        page.fill.jump_to(page.fill_target());
        page
    }

    /// Open on the cell's value and write every change back to it
    pub fn editing(screen: Screen, title: &'static str, cell: Rc<Cell<i32>>) -> Self {
        let mut page = Self::new(screen, title, cell.get());
        page.report = Some(cell);
        page
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    fn bar_width(&self) -> f32 {
        (i32::from(self.screen.width) - 2 * MARGIN - 2).max(0) as f32
    }

    fn fill_target(&self) -> f32 {
        self.bar_width() * (self.value - MINIMUM) as f32 / (MAXIMUM - MINIMUM) as f32
    }

    fn adjust(&mut self, delta: i32) {
        let value = (self.value + delta).clamp(MINIMUM, MAXIMUM);
        if value == self.value {
            return;
        }
        self.value = value;
        let target = self.fill_target();
        self.fill.set_target(target);
        if let Some(cell) = &self.report {
            cell.set(value);
        }
    }
}

impl Page<MonoBuffer> for ProgressPage {
    fn animate_in(&mut self) {
        self.lift.set_target(0.0);
    }

    fn animate_out(&mut self) {
        self.lift.set_target(f32::from(self.screen.height));
    }

    fn is_exit_animation_finished(&self) -> bool {
        self.lift.value() >= f32::from(self.screen.height) - 0.5
    }

    fn is_enter_animation_finished(&self) -> bool {
        self.lift.value() <= 0.5
    }

    fn advance(&mut self, dt: f32) {
        self.lift.advance(dt);
        self.fill.advance(dt);
    }

    fn draw(&mut self, surface: &mut MonoBuffer) {
        let top = px(self.lift.value());
        let size = self.screen.bounds().size;
        let area = Rectangle::new(Point::new(0, top), size);
        fill(surface, area, false);
        outline(surface, area);

        text(surface, self.title, MARGIN, top + LINE_HEIGHT);

        let mut label: heapless::String<8> = heapless::String::new();
        let _ = core::fmt::write(&mut label, format_args!("{}%", self.value));
        text(surface, &label, MARGIN, top + 2 * LINE_HEIGHT + 2);

        let bar_top = top + i32::from(self.screen.height) - MARGIN - BAR_HEIGHT as i32;
        let track = Rectangle::new(
            Point::new(MARGIN, bar_top),
            Size::new(self.bar_width() as u32 + 2, BAR_HEIGHT),
        );
        outline(surface, track);
        let filled = px(self.fill.value()).max(0) as u32;
        if filled > 0 {
            fill(
                surface,
                Rectangle::new(
                    Point::new(MARGIN + 1, bar_top + 1),
                    Size::new(filled, BAR_HEIGHT - 2),
                ),
                true,
            );
        }
    }

    fn handle_input(&mut self, key: Key) -> Navigation<MonoBuffer> {
        match key {
            Key::Up | Key::Right => {
                self.adjust(STEP);
                Navigation::None
            }
            Key::Down | Key::Left => {
                self.adjust(-STEP);
                Navigation::None
            }
            Key::Back | Key::Select => Navigation::Dismiss,
            _ => Navigation::None,
        }
    }
}
