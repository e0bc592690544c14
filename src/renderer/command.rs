//! Draw commands handed to the host renderer
//!
//! The demos never touch a window. They push commands into a [`DrawSink`];
//! the host owns clearing, rasterizing and pacing.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// A single primitive for the host to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Line {
        from: DVec2,
        to: DVec2,
        thickness: f64,
        color: Color,
    },
    /// Filled disc
    Circle {
        center: DVec2,
        radius: f64,
        color: Color,
    },
    /// Stroked arc, angles in radians counter-clockwise from +X
    Arc {
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        thickness: f64,
        color: Color,
    },
    Text {
        position: DVec2,
        text: String,
        scale: f64,
    },
}

/// Receiver of draw commands, in painter's order
pub trait DrawSink {
    fn push(&mut self, command: DrawCommand);
}

impl DrawSink for Vec<DrawCommand> {
    fn push(&mut self, command: DrawCommand) {
        Vec::push(self, command);
    }
}

/// Draw context for one tick
///
/// Replaces a process-wide canvas handle: the host creates a frame, passes it
/// to each demo's `draw`, then rasterizes `commands`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            commands: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop this tick's commands and move to `tick`
    pub fn reset(&mut self, tick: u64) {
        self.tick = tick;
        self.commands.clear();
    }
}

impl DrawSink for Frame {
    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

/// Palette used by the demos
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const GRAY: Color = [0.502, 0.502, 0.502, 1.0];
    pub const DIM_GRAY: Color = [0.412, 0.412, 0.412, 1.0];
    pub const LIGHT_GRAY: Color = [0.827, 0.827, 0.827, 1.0];
    /// Shadow behind the contact marker
    pub const CONTACT_SHADOW: Color = [0.196, 0.196, 0.196, 1.0];
}
