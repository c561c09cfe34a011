//! Per-tick application loop
//!
//! One call to [`App::tick`] does, in order:
//!
//! 1. drain pending key bytes into the router
//! 2. advance page animations by the time since the last tick
//! 3. run one [`FrameCycle`]

use monopanel_hal::{Monotonic, UartRx};
use monopanel_protocol::Key;

use crate::frame::{FrameCycle, FramePanel};
use crate::nav::Router;

/// Upper bound on key bytes handled per tick
///
/// Keeps a flooded console from starving the frame cycle; anything left
/// over is picked up on the next tick.
pub const MAX_KEYS_PER_TICK: usize = 32;

/// Router plus frame cycle, driven by one outer loop
pub struct App<S: ?Sized> {
    router: Router<S>,
    frame: FrameCycle,
    last_tick: Option<f64>,
}

impl<S: ?Sized> App<S> {
    pub fn new(router: Router<S>) -> Self {
        Self {
            router,
            frame: FrameCycle::new(),
            last_tick: None,
        }
    }

    pub fn router(&self) -> &Router<S> {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router<S> {
        &mut self.router
    }

    /// Frames sent so far
    pub fn frames(&self) -> u32 {
        self.frame.frames()
    }

    /// Run one tick against the given clock, input and panel
    ///
    /// Navigation rejections are dropped here; only panel faults surface.
    pub fn tick<C, I, P>(&mut self, clock: &C, input: &mut I, panel: &mut P) -> Result<(), P::Error>
    where
        C: Monotonic + ?Sized,
        I: UartRx + ?Sized,
        P: FramePanel<Surface = S>,
    {
        for _ in 0..MAX_KEYS_PER_TICK {
            if !input.has_pending_byte() {
                break;
            }
            let Some(byte) = input.try_read_byte() else {
                break;
            };
            let key = Key::from_byte(byte);
            trace!("key {}", byte);
            if let Err(err) = self.router.handle_input(key) {
                debug!("key {} ignored: {}", byte, err);
            }
        }

        let now = clock.now_seconds();
        let dt = match self.last_tick {
            Some(prev) if now >= prev => (now - prev) as f32,
            _ => 0.0,
        };
        self.last_tick = Some(now);
        self.router.advance(dt);

        self.frame.run(panel, &mut self.router)
    }
}
