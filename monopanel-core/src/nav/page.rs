//! Page trait and navigation requests

use alloc::boxed::Box;

use monopanel_protocol::Key;

/// One navigable screen
///
/// `S` is the drawing surface the page renders onto. The router calls the
/// lifecycle hooks; pages never call each other.
pub trait Page<S: ?Sized> {
    /// Begin the enter transition
    fn animate_in(&mut self);

    /// Begin the exit transition
    fn animate_out(&mut self);

    /// True once the exit transition has fully played out
    ///
    /// The router removes and drops an exiting page only after this reports
    /// true. A page that never reports true stays on screen.
    fn is_exit_animation_finished(&self) -> bool;

    /// True once the enter transition has settled
    fn is_enter_animation_finished(&self) -> bool {
        true
    }

    /// Advance this page's animations by `dt` seconds
    fn advance(&mut self, _dt: f32) {}

    /// Render onto the surface
    fn draw(&mut self, surface: &mut S);

    /// React to a key and say where to navigate next
    fn handle_input(&mut self, key: Key) -> Navigation<S>;
}

/// What a page asks the router to do after handling a key
pub enum Navigation<S: ?Sized> {
    /// Stay put
    None,
    /// Push a page on top of the stack
    Push(Box<dyn Page<S>>),
    /// Pop the top page
    Pop,
    /// Show a page as the modal overlay
    Present(Box<dyn Page<S>>),
    /// Close the modal overlay
    Dismiss,
    /// Close the modal if one is shown, otherwise pop
    Back,
}

impl<S: ?Sized> Navigation<S> {
    pub fn is_none(&self) -> bool {
        matches!(self, Navigation::None)
    }
}

impl<S: ?Sized> core::fmt::Debug for Navigation<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Navigation::None => "None",
            Navigation::Push(_) => "Push",
            Navigation::Pop => "Pop",
            Navigation::Present(_) => "Present",
            Navigation::Dismiss => "Dismiss",
            Navigation::Back => "Back",
        };
        f.write_str(name)
    }
}
