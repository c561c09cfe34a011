//! Page navigation
//!
//! A [`Router`] owns a bounded stack of pages plus one optional modal
//! overlay. Pages never hold a reference back to the router; instead
//! [`Page::handle_input`] returns a [`Navigation`] request that the router
//! applies once the handler has returned.

pub mod page;
pub mod router;

pub use page::{Navigation, Page};
pub use router::{NavError, Router, TransitionState, MAX_STACK_DEPTH};
