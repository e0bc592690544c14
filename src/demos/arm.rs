//! Two-link arm in a vertical channel
//!
//! The joint handle is dragged vertically; the chain and the resolved load
//! follow. Out-of-channel drags wrap (see [`crate::sim::linkage`]).

use glam::DVec2;

use super::Demo;
use crate::consts::STROKE;
use crate::error::KernelResult;
use crate::renderer::{DrawCommand, DrawSink, colors, shapes};
use crate::settings::{ArmSettings, Settings};
use crate::sim::{ContactPoint, ForceChain, LinkChain, PointerInput};

pub struct ArmDemo {
    anchor: DVec2,
    params: ArmSettings,
    /// Constant downward load
    load: DVec2,
    handle: ContactPoint,
    chain: LinkChain,
    forces: ForceChain,
}

impl ArmDemo {
    /// Arm hanging straight down from the viewport center
    pub fn new(settings: &Settings) -> KernelResult<Self> {
        let params = settings.arm.clone();
        let anchor = settings.viewport_center;
        let down = -settings.y_axis.up();
        let load = down * params.weight;

        let driven_y = (down * params.max_reach).y;
        let chain = LinkChain::solve(anchor, driven_y, params.max_reach)?;
        let forces = ForceChain::resolve(&chain, load)?;
        let handle = ContactPoint::new(chain.joint(), params.handle_radius);

        Ok(Self {
            anchor,
            params,
            load,
            handle,
            chain,
            forces,
        })
    }

    pub fn handle(&self) -> &ContactPoint {
        &self.handle
    }

    pub fn chain(&self) -> &LinkChain {
        &self.chain
    }

    pub fn forces(&self) -> &ForceChain {
        &self.forces
    }

    fn solve(&mut self) -> KernelResult<()> {
        let driven_y = self.handle.position.y - self.anchor.y;
        let chain = LinkChain::solve(self.anchor, driven_y, self.params.max_reach)?;
        let forces = ForceChain::resolve(&chain, self.load)?;
        self.chain = chain;
        self.forces = forces;
        Ok(())
    }
}

impl Demo for ArmDemo {
    fn name(&self) -> &'static str {
        "arm"
    }

    fn tick(&mut self, input: &PointerInput) {
        if self.handle.update_drag(input) {
            log::debug!("Arm handle drag: {}", self.handle.active);
        }
        if self.handle.active {
            self.handle.position.y = input.position.y;
        }

        if let Err(e) = self.solve() {
            log::debug!("Arm kept previous pose: {e}");
            return;
        }

        if self.handle.active {
            // Stays under the pointer vertically, rides the channel horizontally
            self.handle.position.x = self.anchor.x + self.chain.extent();
        } else {
            self.handle.position = self.chain.joint();
        }
    }

    fn draw(&self, sink: &mut dyn DrawSink) {
        let scale = self.params.force_scale;

        shapes::force_arrow(sink, self.anchor, self.load, scale, STROKE, colors::DIM_GRAY);

        for link in &self.chain.links {
            shapes::segment(sink, *link, STROKE, colors::WHITE);
        }

        shapes::segment(sink, self.forces.first_segment(scale), STROKE, colors::DIM_GRAY);
        shapes::segment(sink, self.forces.second_segment(scale), STROKE, colors::WHITE);

        sink.push(DrawCommand::Circle {
            center: self.handle.position,
            radius: self.handle.radius,
            color: colors::WHITE,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::YAxis;

    fn demo() -> (ArmDemo, DVec2) {
        let settings = Settings::default();
        (ArmDemo::new(&settings).unwrap(), settings.viewport_center)
    }

    #[test]
    fn test_starts_hanging_down() {
        let (arm, anchor) = demo();
        assert_eq!(arm.chain().driven_y(), -250.0);
        assert_eq!(arm.chain().extent(), 0.0);
        assert_eq!(arm.handle().position, anchor + DVec2::new(0.0, -250.0));
        assert!(!arm.handle().active);
        // Vertical first link takes the full load
        assert!((arm.forces().along_first - DVec2::new(0.0, -2.0)).length() < 1e-12);
    }

    #[test]
    fn test_starts_hanging_down_on_y_down_surface() {
        let settings = Settings {
            y_axis: YAxis::Down,
            ..Settings::default()
        };
        let arm = ArmDemo::new(&settings).unwrap();
        assert_eq!(arm.chain().driven_y(), 250.0);
        assert!((arm.forces().along_first - DVec2::new(0.0, 2.0)).length() < 1e-12);
    }

    #[test]
    fn test_drag_moves_joint() {
        let (mut arm, anchor) = demo();
        let grab = arm.handle().position;

        arm.tick(&PointerInput::press(grab));
        assert!(arm.handle().active);

        arm.tick(&PointerInput::held(anchor + DVec2::new(-400.0, 150.0)));
        assert_eq!(arm.chain().driven_y(), 150.0);
        assert!((arm.chain().extent() - 200.0).abs() < 1e-9);
        // Handle keeps the pointer's y and rides the channel in x
        assert!((arm.handle().position - (anchor + DVec2::new(200.0, 150.0))).length() < 1e-9);

        arm.tick(&PointerInput::release(anchor));
        assert!(!arm.handle().active);
        assert!((arm.handle().position - arm.chain().joint()).length() < 1e-9);
    }

    #[test]
    fn test_press_outside_handle_does_nothing() {
        let (mut arm, anchor) = demo();
        let before = arm.chain().clone();
        arm.tick(&PointerInput::press(anchor + DVec2::new(100.0, 100.0)));
        arm.tick(&PointerInput::held(anchor + DVec2::new(100.0, 50.0)));
        assert!(!arm.handle().active);
        assert_eq!(*arm.chain(), before);
    }

    #[test]
    fn test_drag_past_channel_wraps() {
        let (mut arm, anchor) = demo();
        arm.tick(&PointerInput::press(arm.handle().position));
        arm.tick(&PointerInput::held(anchor + DVec2::new(0.0, 300.0)));
        assert_eq!(arm.chain().driven_y(), 50.0);
        assert!((arm.chain().extent() - 244.948_974_278_317_8).abs() < 1e-9);
        // While dragging the handle stays at the raw pointer height
        assert_eq!(arm.handle().position.y, anchor.y + 300.0);

        // Released, it snaps onto the wrapped joint
        arm.tick(&PointerInput::release(anchor));
        assert!((arm.handle().position.y - (anchor.y + 50.0)).abs() < 1e-9);
    }

    #[test]
    fn test_draw_order() {
        let (arm, _) = demo();
        let mut out: Vec<DrawCommand> = Vec::new();
        arm.draw(&mut out);
        assert_eq!(out.len(), 6);
        assert!(matches!(out[0], DrawCommand::Line { color, .. } if color == colors::DIM_GRAY));
        assert!(matches!(out[5], DrawCommand::Circle { radius, .. } if radius == 10.0));
    }
}
