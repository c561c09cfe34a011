//! Tick-driven animation values
//!
//! Pages hold [`AnimatedValue`]s for anything that slides or grows. Nothing
//! runs on a timer: the router calls each page's `advance(dt)` once per
//! frame and the page forwards that to its values.

pub mod value;

pub use value::{AnimatedValue, AnimationCurve, DEFAULT_EPSILON};
