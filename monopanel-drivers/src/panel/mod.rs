//! Panel layer
//!
//! [`MonoBuffer`] is the off-screen frame pages draw into; [`Ssd1306`]
//! owns one and knows how to turn it into controller commands and data on
//! a [`MessageSink`](monopanel_protocol::MessageSink).

pub mod buffer;
pub mod ssd1306;

pub use buffer::MonoBuffer;
pub use ssd1306::Ssd1306;
