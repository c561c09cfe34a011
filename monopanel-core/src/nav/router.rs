//! Stack + modal page router
//!
//! # Transitions
//!
//! ```text
//!  push / present          enter finished
//! ───────────────▶ Entering ─────────────▶ Idle
//!                                           │ pop / dismiss
//!                                           ▼
//!            removed ◀──────────────── Exiting
//!                     exit finished
//! ```
//!
//! Requests arriving while the affected slot is mid-transition are dropped,
//! not queued. A rejected request leaves the router untouched and is
//! reported as a [`NavError`] that UI-driven callers are free to ignore.

use alloc::boxed::Box;
use heapless::Vec;

use monopanel_protocol::Key;

use super::page::{Navigation, Page};

/// Deepest the navigation stack can grow, root included
pub const MAX_STACK_DEPTH: usize = 8;

/// Transition state of one page slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionState {
    /// Fully shown, no transition running
    Idle,
    /// `animate_in` has been called and has not settled yet
    EnteringAnimating,
    /// `animate_out` has been called; the page goes away once it finishes
    ExitingAnimating,
}

impl TransitionState {
    /// Returns true while a transition is in flight
    pub fn is_animating(self) -> bool {
        self != TransitionState::Idle
    }
}

/// Why a navigation request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavError {
    /// No root page has been set
    EmptyStack,
    /// `set_root` on a stack that already has pages
    RootAlreadySet,
    /// Pop with only the root left
    AtRoot,
    /// The affected slot is mid-transition
    Busy,
    /// A modal is already shown
    ModalActive,
    /// Dismiss with no modal shown
    NoModal,
    /// Stack is at [`MAX_STACK_DEPTH`]
    StackFull,
}

struct Slot<S: ?Sized> {
    page: Box<dyn Page<S>>,
    state: TransitionState,
}

impl<S: ?Sized> Slot<S> {
    fn new(page: Box<dyn Page<S>>, state: TransitionState) -> Self {
        Self { page, state }
    }

    /// Promote or retire this slot according to its page's animation hooks
    ///
    /// Returns true if the slot finished exiting and should be removed.
    fn settle(&mut self) -> bool {
        match self.state {
            TransitionState::EnteringAnimating if self.page.is_enter_animation_finished() => {
                self.state = TransitionState::Idle;
                false
            }
            TransitionState::ExitingAnimating => self.page.is_exit_animation_finished(),
            _ => false,
        }
    }
}

/// Owner of every live page: the navigation stack and the modal slot
pub struct Router<S: ?Sized> {
    stack: Vec<Slot<S>, MAX_STACK_DEPTH>,
    modal: Option<Slot<S>>,
}

impl<S: ?Sized> Default for Router<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> Router<S> {
    /// Create an empty router; call [`set_root`](Self::set_root) next
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            modal: None,
        }
    }

    /// Install the first page
    ///
    /// Only valid on an empty stack. The root is shown immediately with no
    /// enter transition.
    pub fn set_root(&mut self, page: Box<dyn Page<S>>) -> Result<(), NavError> {
        if !self.stack.is_empty() {
            return reject("set_root", NavError::RootAlreadySet);
        }
        self.stack
            .push(Slot::new(page, TransitionState::Idle))
            .map_err(|_| NavError::StackFull)
    }

    /// Push a page and start its enter transition
    ///
    /// The page below stays drawn underneath; it is occluded, not exited.
    pub fn push(&mut self, mut page: Box<dyn Page<S>>) -> Result<(), NavError> {
        let Some(top) = self.stack.last() else {
            return reject("push", NavError::EmptyStack);
        };
        if top.state.is_animating() {
            return reject("push", NavError::Busy);
        }
        if self.stack.is_full() {
            return reject("push", NavError::StackFull);
        }

        page.animate_in();
        self.stack
            .push(Slot::new(page, TransitionState::EnteringAnimating))
            .map_err(|_| NavError::StackFull)?;
        debug!("push: depth {}", self.stack.len());
        Ok(())
    }

    /// Start the exit transition of the top page
    ///
    /// The page stays on the stack, drawn and receiving input, until
    /// [`advance`](Self::advance) sees its exit finish.
    pub fn pop(&mut self) -> Result<(), NavError> {
        let depth = self.stack.len();
        let Some(top) = self.stack.last_mut() else {
            return reject("pop", NavError::EmptyStack);
        };
        if top.state.is_animating() {
            return reject("pop", NavError::Busy);
        }
        if depth == 1 {
            return reject("pop", NavError::AtRoot);
        }

        top.page.animate_out();
        top.state = TransitionState::ExitingAnimating;
        debug!("pop: depth {} exiting", depth);
        Ok(())
    }

    /// Show a page as the modal overlay and start its enter transition
    pub fn present(&mut self, mut page: Box<dyn Page<S>>) -> Result<(), NavError> {
        if self.modal.is_some() {
            return reject("present", NavError::ModalActive);
        }

        page.animate_in();
        self.modal = Some(Slot::new(page, TransitionState::EnteringAnimating));
        debug!("present: modal entering");
        Ok(())
    }

    /// Start the exit transition of the modal
    pub fn dismiss_modal(&mut self) -> Result<(), NavError> {
        let Some(modal) = self.modal.as_mut() else {
            return reject("dismiss", NavError::NoModal);
        };
        if modal.state.is_animating() {
            return reject("dismiss", NavError::Busy);
        }

        modal.page.animate_out();
        modal.state = TransitionState::ExitingAnimating;
        debug!("dismiss: modal exiting");
        Ok(())
    }

    /// Apply a request returned by a page
    pub fn navigate(&mut self, navigation: Navigation<S>) -> Result<(), NavError> {
        match navigation {
            Navigation::None => Ok(()),
            Navigation::Push(page) => self.push(page),
            Navigation::Pop => self.pop(),
            Navigation::Present(page) => self.present(page),
            Navigation::Dismiss => self.dismiss_modal(),
            Navigation::Back => {
                if self.modal.is_some() {
                    self.dismiss_modal()
                } else {
                    self.pop()
                }
            }
        }
    }

    /// Advance every page's animations, then resolve finished transitions
    ///
    /// Called once per frame tick. Exiting pages whose exit has finished
    /// are removed and dropped here, never earlier.
    pub fn advance(&mut self, dt: f32) {
        for slot in self.stack.iter_mut() {
            slot.page.advance(dt);
        }
        if let Some(modal) = self.modal.as_mut() {
            modal.page.advance(dt);
        }

        // Only the top can be mid-transition; push and pop are rejected
        // while it is busy
        while self.stack.last_mut().is_some_and(|top| top.settle()) {
            self.stack.pop();
            debug!("page removed: depth {}", self.stack.len());
        }

        if self.modal.as_mut().is_some_and(|modal| modal.settle()) {
            self.modal = None;
            debug!("modal removed");
        }
    }

    /// Draw the stack bottom to top, then the modal over everything
    pub fn draw(&mut self, surface: &mut S) {
        for slot in self.stack.iter_mut() {
            slot.page.draw(surface);
        }
        if let Some(modal) = self.modal.as_mut() {
            modal.page.draw(surface);
        }
    }

    /// Deliver a key to the modal if shown, else to the top page
    ///
    /// A page that is exiting still counts as current until removed. The
    /// page's navigation request is applied before returning.
    pub fn handle_input(&mut self, key: Key) -> Result<(), NavError> {
        let navigation = if let Some(modal) = self.modal.as_mut() {
            modal.page.handle_input(key)
        } else if let Some(top) = self.stack.last_mut() {
            top.page.handle_input(key)
        } else {
            return reject("input", NavError::EmptyStack);
        };
        self.navigate(navigation)
    }

    /// Number of pages on the stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn has_modal(&self) -> bool {
        self.modal.is_some()
    }

    /// State of the top stack page, if any
    pub fn top_state(&self) -> Option<TransitionState> {
        self.stack.last().map(|slot| slot.state)
    }

    /// State of the modal, if any
    pub fn modal_state(&self) -> Option<TransitionState> {
        self.modal.as_ref().map(|slot| slot.state)
    }

    /// True while the top page or the modal is mid-transition
    pub fn is_busy(&self) -> bool {
        self.top_state().is_some_and(TransitionState::is_animating)
            || self.modal_state().is_some_and(TransitionState::is_animating)
    }
}

fn reject(op: &'static str, err: NavError) -> Result<(), NavError> {
    debug!("{} rejected: {}", op, err);
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec as StdVec;
    use core::cell::RefCell;

    type Surface = StdVec<&'static str>;
    type Log = Rc<RefCell<StdVec<(&'static str, &'static str)>>>;

    /// Page whose transitions last a fixed number of ticks
    struct TestPage {
        name: &'static str,
        log: Log,
        ticks: u32,
        remaining: u32,
        entering: bool,
        exiting: bool,
        child: Option<Box<dyn Page<Surface>>>,
    }

    impl TestPage {
        fn new(name: &'static str, log: &Log, ticks: u32) -> Box<Self> {
            Box::new(Self {
                name,
                log: log.clone(),
                ticks,
                remaining: 0,
                entering: false,
                exiting: false,
                child: None,
            })
        }

        fn with_child(mut self: Box<Self>, child: Box<dyn Page<Surface>>) -> Box<Self> {
            self.child = Some(child);
            self
        }

        fn record(&self, event: &'static str) {
            self.log.borrow_mut().push((self.name, event));
        }
    }

    impl Page<Surface> for TestPage {
        fn animate_in(&mut self) {
            self.record("in");
            self.entering = true;
            self.exiting = false;
            self.remaining = self.ticks;
        }

        fn animate_out(&mut self) {
            self.record("out");
            self.exiting = true;
            self.entering = false;
            self.remaining = self.ticks;
        }

        fn is_exit_animation_finished(&self) -> bool {
            self.exiting && self.remaining == 0
        }

        fn is_enter_animation_finished(&self) -> bool {
            !self.entering || self.remaining == 0
        }

        fn advance(&mut self, _dt: f32) {
            self.remaining = self.remaining.saturating_sub(1);
        }

        fn draw(&mut self, surface: &mut Surface) {
            surface.push(self.name);
        }

        fn handle_input(&mut self, key: Key) -> Navigation<Surface> {
            self.record("key");
            match key {
                Key::Back => Navigation::Back,
                Key::Select => self.child.take().map_or(Navigation::None, Navigation::Push),
                Key::Menu => self
                    .child
                    .take()
                    .map_or(Navigation::None, Navigation::Present),
                _ => Navigation::None,
            }
        }
    }

    impl Drop for TestPage {
        fn drop(&mut self) {
            self.record("drop");
        }
    }

    fn new_log() -> Log {
        Rc::new(RefCell::new(StdVec::new()))
    }

    fn events(log: &Log, name: &str) -> StdVec<&'static str> {
        log.borrow()
            .iter()
            .filter(|(page, _)| *page == name)
            .map(|(_, event)| *event)
            .collect()
    }

    fn drawn(router: &mut Router<Surface>) -> Surface {
        let mut surface = Surface::new();
        router.draw(&mut surface);
        surface
    }

    fn tick(router: &mut Router<Surface>, n: usize) {
        for _ in 0..n {
            router.advance(0.016);
        }
    }

    #[test]
    fn test_set_root_only_on_empty_stack() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();

        assert_eq!(router.set_root(TestPage::new("A", &log, 0)), Ok(()));
        assert_eq!(router.top_state(), Some(TransitionState::Idle));
        assert_eq!(
            router.set_root(TestPage::new("B", &log, 0)),
            Err(NavError::RootAlreadySet)
        );
        assert_eq!(router.depth(), 1);
        // Root is shown without an enter transition
        assert!(events(&log, "A").is_empty());
    }

    #[test]
    fn test_operations_on_empty_stack_rejected() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();

        assert_eq!(
            router.push(TestPage::new("A", &log, 0)),
            Err(NavError::EmptyStack)
        );
        assert_eq!(router.pop(), Err(NavError::EmptyStack));
        assert_eq!(router.handle_input(Key::Select), Err(NavError::EmptyStack));
        assert_eq!(router.depth(), 0);
    }

    #[test]
    fn test_push_starts_enter_transition() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();
        router.set_root(TestPage::new("A", &log, 0)).unwrap();

        router.push(TestPage::new("B", &log, 2)).unwrap();
        assert_eq!(router.depth(), 2);
        assert_eq!(router.top_state(), Some(TransitionState::EnteringAnimating));
        assert_eq!(events(&log, "B"), ["in"]);
        // Occluded page is not exited
        assert!(events(&log, "A").is_empty());

        tick(&mut router, 1);
        assert_eq!(router.top_state(), Some(TransitionState::EnteringAnimating));
        tick(&mut router, 1);
        assert_eq!(router.top_state(), Some(TransitionState::Idle));
    }

    #[test]
    fn test_pop_root_is_noop() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();
        router.set_root(TestPage::new("A", &log, 0)).unwrap();

        assert_eq!(router.pop(), Err(NavError::AtRoot));
        assert_eq!(router.depth(), 1);
        assert_eq!(router.top_state(), Some(TransitionState::Idle));
        assert!(events(&log, "A").is_empty());
    }

    #[test]
    fn test_push_pop_scenario() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();
        router.set_root(TestPage::new("A", &log, 0)).unwrap();
        router.push(TestPage::new("B", &log, 3)).unwrap();

        // Mid-transition requests are dropped
        tick(&mut router, 1);
        assert_eq!(router.pop(), Err(NavError::Busy));
        assert_eq!(
            router.push(TestPage::new("C", &log, 0)),
            Err(NavError::Busy)
        );
        assert_eq!(events(&log, "C"), ["drop"]);

        tick(&mut router, 2);
        assert_eq!(router.top_state(), Some(TransitionState::Idle));

        assert_eq!(router.pop(), Ok(()));
        assert_eq!(events(&log, "B"), ["in", "out"]);
        assert_eq!(router.top_state(), Some(TransitionState::ExitingAnimating));

        // Never removed before the exit finishes
        tick(&mut router, 2);
        assert_eq!(router.depth(), 2);
        assert_eq!(drawn(&mut router), ["A", "B"]);

        tick(&mut router, 1);
        assert_eq!(router.depth(), 1);
        assert_eq!(events(&log, "B"), ["in", "out", "drop"]);
        assert_eq!(drawn(&mut router), ["A"]);
        assert_eq!(router.top_state(), Some(TransitionState::Idle));
    }

    #[test]
    fn test_instant_exit_removed_on_next_tick() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();
        router.set_root(TestPage::new("A", &log, 0)).unwrap();
        router.push(TestPage::new("B", &log, 0)).unwrap();
        tick(&mut router, 1);

        router.pop().unwrap();
        assert_eq!(router.depth(), 2);
        tick(&mut router, 1);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_stuck_exit_never_removed() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();
        router.set_root(TestPage::new("A", &log, 0)).unwrap();
        router.push(TestPage::new("B", &log, 0)).unwrap();
        tick(&mut router, 1);
        router.pop().unwrap();

        // Swap in a page whose exit never finishes
        router.stack.last_mut().unwrap().page = TestPage::new("Stuck", &log, u32::MAX);
        router.stack.last_mut().unwrap().page.animate_out();
        tick(&mut router, 100);
        assert_eq!(router.depth(), 2);
        assert_eq!(router.top_state(), Some(TransitionState::ExitingAnimating));
        assert_eq!(router.pop(), Err(NavError::Busy));
    }

    #[test]
    fn test_present_while_modal_active_is_noop() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();
        router.set_root(TestPage::new("A", &log, 0)).unwrap();

        router.present(TestPage::new("M1", &log, 1)).unwrap();
        assert_eq!(
            router.present(TestPage::new("M2", &log, 1)),
            Err(NavError::ModalActive)
        );
        assert_eq!(events(&log, "M1"), ["in"]);
        assert_eq!(events(&log, "M2"), ["drop"]);
        assert_eq!(drawn(&mut router), ["A", "M1"]);
    }

    #[test]
    fn test_input_goes_only_to_modal() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();
        router.set_root(TestPage::new("A", &log, 0)).unwrap();
        router.push(TestPage::new("B", &log, 0)).unwrap();
        router.present(TestPage::new("M", &log, 0)).unwrap();

        router.handle_input(Key::Up).unwrap();
        router.handle_input(Key::Down).unwrap();

        assert_eq!(events(&log, "M"), ["in", "key", "key"]);
        assert!(!events(&log, "A").contains(&"key"));
        assert!(!events(&log, "B").contains(&"key"));
    }

    #[test]
    fn test_present_dismiss_restores_routing() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();
        router.set_root(TestPage::new("A", &log, 0)).unwrap();
        router.present(TestPage::new("M", &log, 2)).unwrap();

        assert_eq!(router.dismiss_modal(), Err(NavError::Busy));
        tick(&mut router, 2);
        assert_eq!(router.modal_state(), Some(TransitionState::Idle));

        // Back closes the modal rather than popping
        router.handle_input(Key::Back).unwrap();
        assert_eq!(router.modal_state(), Some(TransitionState::ExitingAnimating));
        assert_eq!(router.depth(), 1);

        tick(&mut router, 2);
        assert!(!router.has_modal());
        assert_eq!(events(&log, "M"), ["in", "key", "out", "drop"]);

        router.handle_input(Key::Up).unwrap();
        assert_eq!(events(&log, "A"), ["key"]);
        assert_eq!(router.dismiss_modal(), Err(NavError::NoModal));
    }

    #[test]
    fn test_exiting_page_still_receives_input() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();
        router.set_root(TestPage::new("A", &log, 0)).unwrap();
        router.push(TestPage::new("B", &log, 5)).unwrap();
        tick(&mut router, 5);
        router.pop().unwrap();

        router.handle_input(Key::Up).unwrap();
        assert_eq!(events(&log, "B"), ["in", "out", "key"]);
        assert!(events(&log, "A").is_empty());
    }

    #[test]
    fn test_draw_order_bottom_to_top_then_modal() {
        const NAMES: [&str; MAX_STACK_DEPTH] = ["P0", "P1", "P2", "P3", "P4", "P5", "P6", "P7"];
        let log = new_log();

        for depth in 1..=MAX_STACK_DEPTH {
            let mut router: Router<Surface> = Router::new();
            router.set_root(TestPage::new(NAMES[0], &log, 0)).unwrap();
            for name in &NAMES[1..depth] {
                router.push(TestPage::new(*name, &log, 0)).unwrap();
                tick(&mut router, 1);
            }
            router.present(TestPage::new("M", &log, 0)).unwrap();

            let surface = drawn(&mut router);
            assert_eq!(&surface[..depth], &NAMES[..depth]);
            assert_eq!(surface[depth], "M");
            assert_eq!(surface.len(), depth + 1);
        }
    }

    #[test]
    fn test_push_beyond_capacity_rejected() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();
        router.set_root(TestPage::new("A", &log, 0)).unwrap();
        for _ in 1..MAX_STACK_DEPTH {
            router.push(TestPage::new("P", &log, 0)).unwrap();
            tick(&mut router, 1);
        }

        assert_eq!(
            router.push(TestPage::new("X", &log, 0)),
            Err(NavError::StackFull)
        );
        assert_eq!(router.depth(), MAX_STACK_DEPTH);
        assert!(!events(&log, "X").contains(&"in"));
    }

    #[test]
    fn test_page_requests_applied() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();
        let root = TestPage::new("A", &log, 0).with_child(TestPage::new("B", &log, 1));
        router.set_root(root).unwrap();

        router.handle_input(Key::Select).unwrap();
        assert_eq!(router.depth(), 2);
        assert_eq!(events(&log, "B"), ["in"]);

        // B has no child, so Select asks for nothing
        tick(&mut router, 1);
        router.handle_input(Key::Select).unwrap();
        assert_eq!(router.depth(), 2);

        router.handle_input(Key::Back).unwrap();
        tick(&mut router, 1);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_page_presents_modal() {
        let log = new_log();
        let mut router: Router<Surface> = Router::new();
        let root = TestPage::new("A", &log, 0).with_child(TestPage::new("M", &log, 0));
        router.set_root(root).unwrap();

        router.handle_input(Key::Menu).unwrap();
        assert!(router.has_modal());
        assert_eq!(router.modal_state(), Some(TransitionState::EnteringAnimating));
        assert!(router.is_busy());

        tick(&mut router, 1);
        assert!(!router.is_busy());
    }
}
