//! Sliding detail page

use alloc::boxed::Box;
use core::fmt::Write;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use monopanel_core::{Navigation, Page};
use monopanel_drivers::MonoBuffer;
use monopanel_protocol::Key;

use super::{fill, outline, text, AlertPage, Screen, Slide, LINE_HEIGHT};

const ROWS: [&str; 6] = ["Input 5.02V", "Rail 3.31V", "Core 1.10V", "Batt 3.97V", "Ripple 12mV", "Press q"];

/// Full-screen page that slides in from the right edge
pub struct DetailPage {
    screen: Screen,
    title: String<24>,
    slide: Slide,
    scroll: usize,
}

impl DetailPage {
    pub fn new(screen: Screen, title: &str) -> Self {
        let mut heading = String::new();
        // Long titles are cut at the buffer; the panel can't show them anyway
        let _ = write!(heading, "Detail: {}", title);
        Self {
            screen,
            title: heading,
            slide: Slide::new(&screen),
            scroll: 0,
        }
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    fn visible_rows(&self) -> usize {
        let body = i32::from(self.screen.height) - LINE_HEIGHT - 2;
        (body / LINE_HEIGHT).max(1) as usize
    }
}

impl Page<MonoBuffer> for DetailPage {
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

        // Opaque background so the page below doesn't show through
        fill(surface, area, false);
        outline(surface, area);
        text(surface, &self.title, x + 2, LINE_HEIGHT - 1);

        let rows = ROWS.iter().skip(self.scroll).take(self.visible_rows());
        for (i, row) in rows.enumerate() {
            let baseline = LINE_HEIGHT * (i as i32 + 2);
            text(surface, row, x + 4, baseline);
        }
    }

    fn handle_input(&mut self, key: Key) -> Navigation<MonoBuffer> {
        match key {
            Key::Back => Navigation::Back,
            Key::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Navigation::None
            }
            Key::Down => {
                let last = ROWS.len().saturating_sub(self.visible_rows());
                self.scroll = (self.scroll + 1).min(last);
                Navigation::None
            }
            Key::Select => Navigation::Present(Box::new(AlertPage::info(self.screen))),
            _ => Navigation::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monopanel_core::config::DeviceConfig;

    fn detail() -> DetailPage {
        DetailPage::new(Screen::from_config(&DeviceConfig::default()), "Volt")
    }

    fn run(page: &mut DetailPage, ticks: usize) {
        for _ in 0..ticks {
            page.advance(0.016);
        }
    }

    #[test]
    fn test_starts_off_screen() {
        let page = detail();
        assert_eq!(page.slide.value(), 64.0);
        assert!(page.is_exit_animation_finished());
        assert_eq!(page.title.as_str(), "Detail: Volt");
    }

    #[test]
    fn test_slide_in_then_out() {
        let mut page = detail();
        page.animate_in();
        assert!(!page.is_enter_animation_finished());
        run(&mut page, 200);
        assert!(page.is_enter_animation_finished());
        assert_eq!(page.slide.value(), 0.0);

        page.animate_out();
        run(&mut page, 1);
        assert!(!page.is_exit_animation_finished());
        run(&mut page, 200);
        assert!(page.is_exit_animation_finished());
    }

    #[test]
    fn test_scroll_bounds() {
        let mut page = detail();
        page.handle_input(Key::Up);
        assert_eq!(page.scroll(), 0);
        for _ in 0..20 {
            page.handle_input(Key::Down);
        }
        assert_eq!(page.scroll(), ROWS.len() - page.visible_rows());
    }

    #[test]
    fn test_keys() {
        let mut page = detail();
        assert!(matches!(page.handle_input(Key::Back), Navigation::Back));
        assert!(matches!(page.handle_input(Key::Select), Navigation::Present(_)));
        assert!(page.handle_input(Key::Other(b'x')).is_none());
    }

    #[test]
    fn test_draw_is_opaque() {
        let mut page = detail();
        page.animate_in();
        run(&mut page, 200);

        let mut buf = MonoBuffer::new(&monopanel_core::config::PanelConfig::default()).unwrap();
        buf.fill(true);
        page.draw(&mut buf);
        // Interior pixel between rows is blanked
        assert!(!buf.pixel(1, 1));
        // Border is lit
        assert!(buf.pixel(0, 0));
    }
}
