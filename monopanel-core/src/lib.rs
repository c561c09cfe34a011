//! Board-agnostic core logic for the display firmware
//!
//! This crate contains everything between input bytes and a finished frame
//! that does not depend on a specific panel or chip:
//!
//! - [`anim`]: scalar values that ease toward a target once per tick
//! - [`nav`]: the [`Page`](nav::Page) trait and the stack + modal [`Router`](nav::Router)
//! - [`frame`]: the clear → draw → send cycle that keeps frames tear-free
//! - [`app`]: the per-tick loop tying input, animation and drawing together
//! - [`config`]: device configuration types and validation
//!
//! Pages are owned as boxed trait objects, so an allocator is required.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod anim;
pub mod app;
pub mod config;
pub mod frame;
pub mod nav;

pub use anim::{AnimatedValue, AnimationCurve};
pub use app::App;
pub use frame::{FrameCycle, FramePanel};
pub use nav::{NavError, Navigation, Page, Router, TransitionState};
