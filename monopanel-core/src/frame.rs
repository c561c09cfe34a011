//! Frame cycle: clear → draw → send
//!
//! The panel only ever receives a buffer that has been completely redrawn.
//! [`FrameCycle::run`] takes the panel by exclusive reference for the whole
//! sequence, so no other code can touch the buffer or the bus mid-frame.

use crate::nav::Router;

/// An off-screen buffer plus the means to push it to the display
pub trait FramePanel {
    /// What pages draw onto
    type Surface: ?Sized;
    /// Hardware fault raised while sending
    type Error;

    /// Blank the off-screen buffer
    fn clear_buffer(&mut self);

    /// Borrow the off-screen buffer for drawing
    fn surface(&mut self) -> &mut Self::Surface;

    /// Send the whole buffer to the display
    fn send_buffer(&mut self) -> Result<(), Self::Error>;
}

/// Runs one complete frame per tick
#[derive(Debug, Default)]
pub struct FrameCycle {
    frames: u32,
}

impl FrameCycle {
    pub fn new() -> Self {
        Self { frames: 0 }
    }

    /// Clear the buffer, let the router draw every page, then send
    pub fn run<P: FramePanel>(
        &mut self,
        panel: &mut P,
        router: &mut Router<P::Surface>,
    ) -> Result<(), P::Error> {
        self.run_with(panel, |surface| router.draw(surface))
    }

    /// Same as [`run`](Self::run) with an arbitrary draw step
    ///
    /// Nothing is sent if `draw` panics; the buffer goes out only after the
    /// closure returns.
    pub fn run_with<P, F>(&mut self, panel: &mut P, draw: F) -> Result<(), P::Error>
    where
        P: FramePanel,
        F: FnOnce(&mut P::Surface),
    {
        panel.clear_buffer();
        draw(panel.surface());
        panel.send_buffer()?;
        self.frames = self.frames.wrapping_add(1);
        trace!("frame {} sent", self.frames);
        Ok(())
    }

    /// Number of frames sent so far (wraps)
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Clear,
        Draw,
        Send,
    }

    /// Panel whose surface is the shared call trace
    struct TracePanel {
        calls: Vec<Call>,
        fail_send: bool,
    }

    impl FramePanel for TracePanel {
        type Surface = Vec<Call>;
        type Error = ();

        fn clear_buffer(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn surface(&mut self) -> &mut Vec<Call> {
            &mut self.calls
        }

        fn send_buffer(&mut self) -> Result<(), ()> {
            if self.fail_send {
                return Err(());
            }
            self.calls.push(Call::Send);
            Ok(())
        }
    }

    #[test]
    fn test_clear_draw_send_order() {
        let mut panel = TracePanel {
            calls: Vec::new(),
            fail_send: false,
        };
        let mut cycle = FrameCycle::new();

        cycle
            .run_with(&mut panel, |calls| {
                calls.push(Call::Draw);
                calls.push(Call::Draw);
            })
            .unwrap();

        assert_eq!(panel.calls, [Call::Clear, Call::Draw, Call::Draw, Call::Send]);
        assert_eq!(cycle.frames(), 1);
    }

    #[test]
    fn test_empty_router_still_sends_blank_frame() {
        let mut panel = TracePanel {
            calls: Vec::new(),
            fail_send: false,
        };
        let mut router: Router<Vec<Call>> = Router::new();
        let mut cycle = FrameCycle::new();

        cycle.run(&mut panel, &mut router).unwrap();
        cycle.run(&mut panel, &mut router).unwrap();

        assert_eq!(
            panel.calls,
            [Call::Clear, Call::Send, Call::Clear, Call::Send]
        );
        assert_eq!(cycle.frames(), 2);
    }

    #[test]
    fn test_send_failure_propagates() {
        let mut panel = TracePanel {
            calls: Vec::new(),
            fail_send: true,
        };
        let mut cycle = FrameCycle::new();

        assert_eq!(cycle.run_with(&mut panel, |_| {}), Err(()));
        assert_eq!(cycle.frames(), 0);
    }
}
