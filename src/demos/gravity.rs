//! Fixed force applied at a point on a circle
//!
//! While the button is held the contact point follows the pointer by the
//! quadrant rule; the torque readout updates with it.

use std::f64::consts::FRAC_PI_2;

use super::Demo;
use crate::consts::{HANDLE_RADIUS, STROKE, TORQUE_READOUT_DECIMALS, TORQUE_READOUT_SCALE};
use crate::error::KernelResult;
use crate::renderer::{DrawCommand, DrawSink, colors, shapes};
use crate::settings::{ContactSettings, Settings};
use crate::sim::{Circle, CircularContact, ContactSolution, PointerInput};

pub struct GravityDemo {
    contact: CircularContact,
    params: ContactSettings,
    /// Last valid solution, kept when a pointer sample is rejected
    solution: ContactSolution,
}

impl GravityDemo {
    pub fn new(settings: &Settings) -> KernelResult<Self> {
        let params = settings.contact.clone();
        let circle = Circle::new(settings.viewport_center + params.center_offset, params.radius);
        let contact = CircularContact::new(circle, params.force, settings.y_axis);
        let solution = contact.at_angle(params.initial_angle)?;

        Ok(Self {
            contact,
            params,
            solution,
        })
    }

    pub fn circle(&self) -> &Circle {
        &self.contact.circle
    }

    pub fn solution(&self) -> &ContactSolution {
        &self.solution
    }
}

impl Demo for GravityDemo {
    fn name(&self) -> &'static str {
        "gravity"
    }

    fn tick(&mut self, input: &PointerInput) {
        if !input.pressed {
            return;
        }
        match self.contact.solve(input.position) {
            Ok(solution) => self.solution = solution,
            Err(e) => log::debug!("Rejected pointer sample {:?}: {e}", input.position),
        }
    }

    fn draw(&self, sink: &mut dyn DrawSink) {
        let point = self.solution.contact;
        let scale = self.params.force_scale;

        sink.push(DrawCommand::Circle {
            center: point,
            radius: HANDLE_RADIUS,
            color: colors::CONTACT_SHADOW,
        });
        shapes::force_arrow(sink, point, self.contact.force, scale, STROKE, colors::DIM_GRAY);
        sink.push(DrawCommand::Circle {
            center: point,
            radius: 6.0,
            color: colors::WHITE,
        });

        sink.push(DrawCommand::Arc {
            center: self.contact.circle.center,
            radius: self.contact.circle.radius,
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
            thickness: STROKE,
            color: colors::WHITE,
        });

        shapes::force_arrow(sink, point, self.solution.torque, scale, STROKE, colors::WHITE);

        sink.push(DrawCommand::Text {
            position: self.params.readout_position,
            text: self.solution.rounded_torque(TORQUE_READOUT_DECIMALS).to_string(),
            scale: TORQUE_READOUT_SCALE,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn demo() -> GravityDemo {
        GravityDemo::new(&Settings::default()).unwrap()
    }

    #[test]
    fn test_initial_contact_at_top() {
        let g = demo();
        let c = *g.circle();
        assert_eq!(c.center, DVec2::new(490.0, 210.0));
        assert!((g.solution().contact - (c.center + DVec2::new(0.0, 300.0))).length() < 1e-9);
        assert!(g.solution().torque_magnitude() < 1e-12);
    }

    #[test]
    fn test_pressed_pointer_moves_contact() {
        let mut g = demo();
        let center = g.circle().center;

        // Not pressed: nothing changes
        let before = *g.solution();
        g.tick(&PointerInput::hover(center + DVec2::new(100.0, 100.0)));
        assert_eq!(*g.solution(), before);

        g.tick(&PointerInput::held(center + DVec2::new(100.0, 100.0)));
        let expected = center + DVec2::splat(300.0 / 2f64.sqrt());
        assert!((g.solution().contact - expected).length() < 1e-9);
        let mag = g.solution().torque_magnitude();
        assert!(mag > 0.0 && mag < 1.0);
    }

    #[test]
    fn test_center_sample_keeps_previous_contact() {
        let mut g = demo();
        let center = g.circle().center;
        g.tick(&PointerInput::held(center + DVec2::new(30.0, 40.0)));
        let valid = *g.solution();

        g.tick(&PointerInput::held(center));
        assert_eq!(*g.solution(), valid);
    }

    #[test]
    fn test_readout_text() {
        let mut g = demo();
        let center = g.circle().center;
        g.tick(&PointerInput::held(center + DVec2::new(100.0, 100.0)));

        let mut out: Vec<DrawCommand> = Vec::new();
        g.draw(&mut out);
        assert_eq!(out.len(), 6);
        match out.last() {
            Some(DrawCommand::Text { text, .. }) => assert_eq!(text, "0.70711"),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
