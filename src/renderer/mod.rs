//! Draw-command output
//!
//! Rasterization belongs to the host; this module only describes what to draw.

pub mod command;
pub mod shapes;

pub use command::{Color, DrawCommand, DrawSink, Frame, colors};
