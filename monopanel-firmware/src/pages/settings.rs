//! Settings list opened from the Setting tile
//!
//! Rows are toggles, a radio group, checkboxes, adjustable values and plain
//! text, split up by a header and separators. The cursor only lands on rows
//! that can be selected and wraps at both ends.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt::Write;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use monopanel_core::anim::AnimatedValue;
use monopanel_core::{Navigation, Page};
use monopanel_drivers::MonoBuffer;
use monopanel_protocol::Key;

use super::{fill, outline, px, text, ProgressPage, Screen, Slide, CHAR_WIDTH, LINE_HEIGHT};

const ROW_HEIGHT: i32 = 12;
const CHECKBOXES: usize = 3;

enum Row {
    Header(&'static str),
    Separator,
    Toggle { label: &'static str, on: bool },
    /// Member of the single radio group
    Radio { label: &'static str, value: u8 },
    Checkbox { label: &'static str, index: usize },
    /// Opens the progress modal, which writes back into the cell
    Value { label: &'static str, cell: Rc<Cell<i32>> },
    Text(&'static str),
}

impl Row {
    fn is_selectable(&self) -> bool {
        !matches!(self, Row::Header(_) | Row::Separator)
    }
}

/// Sliding list page with a wrap-around cursor
pub struct SettingsPage {
    screen: Screen,
    slide: Slide,
    rows: Vec<Row>,
    selected: usize,
    /// Value of the chosen radio row
    radio: u8,
    checks: [bool; CHECKBOXES],
    brightness: Rc<Cell<i32>>,
    volume: Rc<Cell<i32>>,
    /// First visible row
    first: usize,
    scroll: AnimatedValue,
}

impl SettingsPage {
    pub fn new(screen: Screen) -> Self {
        let brightness = Rc::new(Cell::new(50));
        let volume = Rc::new(Cell::new(75));
        let rows = alloc::vec![
            Row::Header("[ Menu Test ]"),
            Row::Separator,
            Row::Toggle { label: "Enable Feature", on: false },
            Row::Toggle { label: "Dark Mode", on: true },
            Row::Separator,
            Row::Radio { label: "Option 1", value: 1 },
            Row::Radio { label: "Option 2", value: 2 },
            Row::Radio { label: "Option 3", value: 3 },
            Row::Separator,
            Row::Checkbox { label: "Check 1", index: 0 },
            Row::Checkbox { label: "Check 2", index: 1 },
            Row::Checkbox { label: "Check 3", index: 2 },
            Row::Separator,
            Row::Value { label: "Brightness", cell: brightness.clone() },
            Row::Value { label: "Volume", cell: volume.clone() },
            Row::Separator,
            Row::Text("Plain Text Item 1"),
            Row::Text("Plain Text Item 2"),
            Row::Text("Plain Text Item 3"),
        ];
        let mut page = Self {
            screen,
            slide: Slide::new(&screen),
            rows,
            selected: 0,
            radio: 1,
            checks: [false; CHECKBOXES],
            brightness,
            volume,
            first: 0,
            scroll: screen.value(0.0),
        };
        // Skip the header and its separator
        page.step(1);
        page
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn brightness(&self) -> i32 {
        self.brightness.get()
    }

    pub fn volume(&self) -> i32 {
        self.volume.get()
    }

    fn visible_rows(&self) -> usize {
        (i32::from(self.screen.height) / ROW_HEIGHT).max(1) as usize
    }

    /// Move to the next selectable row in `direction`, wrapping at the ends
    ///
    /// Stays put if no other row can be selected.
    fn step(&mut self, direction: isize) {
        let count = self.rows.len();
        if count == 0 {
            return;
        }
        let mut index = self.selected;
        for _ in 0..count {
            index = (index as isize + direction).rem_euclid(count as isize) as usize;
            if self.rows[index].is_selectable() {
                self.selected = index;
                break;
            }
        }
        self.follow_cursor();
    }

    fn follow_cursor(&mut self) {
        let visible = self.visible_rows();
        let leading = self.rows[..self.selected].iter().all(|row| !row.is_selectable());
        if leading {
            // Keep the header in view at the top of the list
            self.first = 0;
        } else if self.selected < self.first {
            self.first = self.selected;
        } else if self.selected >= self.first + visible {
            self.first = self.selected + 1 - visible;
        }
        self.scroll.set_target((self.first as i32 * ROW_HEIGHT) as f32);
    }

    fn activate(&mut self) -> Navigation<MonoBuffer> {
        let screen = self.screen;
        match &mut self.rows[self.selected] {
            Row::Toggle { on, .. } => *on = !*on,
            Row::Radio { value, .. } => self.radio = *value,
            Row::Checkbox { index, .. } => self.checks[*index] = !self.checks[*index],
            Row::Value { label, cell } => {
                return Navigation::Present(Box::new(ProgressPage::editing(
                    screen,
                    *label,
                    cell.clone(),
                )));
            }
            Row::Header(_) | Row::Separator | Row::Text(_) => {}
        }
        Navigation::None
    }

    fn draw_row(&self, surface: &mut MonoBuffer, row: &Row, x: i32, top: i32) {
        let width = i32::from(self.screen.width);
        let baseline = top + LINE_HEIGHT - 1;
        match row {
            Row::Header(label) | Row::Text(label) => text(surface, label, x + 2, baseline),
            Row::Separator => fill(
                surface,
                Rectangle::new(
                    Point::new(x + 2, top + ROW_HEIGHT / 2),
                    Size::new((width - 4).max(0) as u32, 1),
                ),
                true,
            ),
            Row::Radio { label, value } => {
                let mark = if *value == self.radio { "(*)" } else { "( )" };
                text(surface, mark, x + 2, baseline);
                text(surface, label, x + 2 + 3 * CHAR_WIDTH, baseline);
            }
            Row::Checkbox { label, index } => {
                let mark = if self.checks[*index] { "[x]" } else { "[ ]" };
                text(surface, mark, x + 2, baseline);
                text(surface, label, x + 2 + 3 * CHAR_WIDTH, baseline);
            }
            Row::Toggle { label, on } => {
                let status = if *on { "on" } else { "off" };
                self.draw_with_status(surface, label, status, x, top);
            }
            Row::Value { label, cell } => {
                let mut status: String<8> = String::new();
                let _ = write!(status, "{}", cell.get());
                self.draw_with_status(surface, label, &status, x, top);
            }
        }
    }

    /// Label on the left, status right-aligned over a blanked column
    fn draw_with_status(&self, surface: &mut MonoBuffer, label: &str, status: &str, x: i32, top: i32) {
        let baseline = top + LINE_HEIGHT - 1;
        text(surface, label, x + 2, baseline);

        let status_width = status.len() as i32 * CHAR_WIDTH;
        let status_x = x + i32::from(self.screen.width) - 2 - status_width;
        fill(
            surface,
            Rectangle::new(
                Point::new(status_x - 2, top + 1),
                Size::new((status_width + 2) as u32, (ROW_HEIGHT - 2) as u32),
            ),
            false,
        );
        text(surface, status, status_x, baseline);
    }
}

impl Page<MonoBuffer> for SettingsPage {
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
        self.scroll.advance(dt);
    }

    fn draw(&mut self, surface: &mut MonoBuffer) {
        let x = self.slide.x();
        let size = self.screen.bounds().size;
        fill(surface, Rectangle::new(Point::new(x, 0), size), false);

        let scroll = px(self.scroll.value());
        let height = i32::from(self.screen.height);
        for (i, row) in self.rows.iter().enumerate() {
            let top = i as i32 * ROW_HEIGHT - scroll;
            if top + ROW_HEIGHT <= 0 || top >= height {
                continue;
            }
            self.draw_row(surface, row, x, top);
            if i == self.selected {
                outline(
                    surface,
                    Rectangle::new(
                        Point::new(x, top),
                        Size::new(size.width, ROW_HEIGHT as u32),
                    ),
                );
            }
        }
    }

    fn handle_input(&mut self, key: Key) -> Navigation<MonoBuffer> {
        match key {
            Key::Up => {
                self.step(-1);
                Navigation::None
            }
            Key::Down => {
                self.step(1);
                Navigation::None
            }
            Key::Select => self.activate(),
            Key::Back => Navigation::Back,
            _ => Navigation::None,
        }
    }
}
