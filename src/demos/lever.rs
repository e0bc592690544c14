//! Lever whose beam follows the pointer while the button is held

use super::Demo;
use crate::consts::{LEVER_BEAM_THICKNESS, LEVER_CORE_THICKNESS, STROKE};
use crate::error::KernelResult;
use crate::renderer::{DrawSink, colors, shapes};
use crate::settings::{LeverSettings, Settings};
use crate::sim::{Lever, PointerInput, Segment, YAxis, fast_normalize};

pub struct LeverDemo {
    lever: Lever,
    params: LeverSettings,
    y_axis: YAxis,
}

impl LeverDemo {
    pub fn new(settings: &Settings) -> KernelResult<Self> {
        let params = settings.lever.clone();
        let lever = Lever::new(
            settings.viewport_center + params.anchor_offset,
            params.length,
            params.fulcrum,
            params.effort,
            params.load,
        )?;

        let output = lever.output(params.effort_force, settings.y_axis);
        log::info!(
            "Lever class {}: output({}) = {:?}, magnitude {}",
            lever.class().number(),
            params.effort_force,
            output,
            output.length()
        );

        Ok(Self {
            lever,
            params,
            y_axis: settings.y_axis,
        })
    }

    pub fn lever(&self) -> &Lever {
        &self.lever
    }
}

impl Demo for LeverDemo {
    fn name(&self) -> &'static str {
        "lever"
    }

    fn tick(&mut self, input: &PointerInput) {
        if input.pressed {
            self.lever.aim_at(input.position, self.y_axis);
        }
    }

    fn draw(&self, sink: &mut dyn DrawSink) {
        let beam = Segment::new(self.lever.position, self.lever.beam_end(self.y_axis));
        shapes::two_tone_bar(
            sink,
            beam,
            (LEVER_BEAM_THICKNESS, colors::GRAY),
            (LEVER_CORE_THICKNESS, colors::DIM_GRAY),
        );

        shapes::ringed_marker(
            sink,
            self.lever.fulcrum_point(self.y_axis),
            (10.0, colors::LIGHT_GRAY),
            (5.0, colors::DIM_GRAY),
        );

        // Display only, the approximate unit vector is fine here
        let output = self.lever.output(self.params.effort_force, self.y_axis);
        if let Ok(dir) = fast_normalize(output) {
            shapes::force_arrow(
                sink,
                self.lever.load_point(self.y_axis),
                dir,
                output.length() * self.params.output_scale,
                STROKE,
                colors::WHITE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;
    use crate::sim::LeverClass;
    use glam::DVec2;

    #[test]
    fn test_default_lever() {
        let settings = Settings::default();
        let demo = LeverDemo::new(&settings).unwrap();
        let lever = demo.lever();
        assert_eq!(lever.class(), LeverClass::Second);
        assert_eq!(lever.position, settings.viewport_center - DVec2::new(250.0, 0.0));
        assert!((lever.output(1.0, YAxis::Up).length() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_beam_follows_pressed_pointer() {
        let mut demo = LeverDemo::new(&Settings::default()).unwrap();
        let anchor = demo.lever().position;
        let rest = demo.lever().angle;

        // Hovering does not move the beam
        demo.tick(&PointerInput::hover(anchor + DVec2::new(100.0, 0.0)));
        assert_eq!(demo.lever().angle, rest);

        demo.tick(&PointerInput::held(anchor + DVec2::new(100.0, 0.0)));
        let end = demo.lever().beam_end(YAxis::Up);
        assert!((end - (anchor + DVec2::new(500.0, 0.0))).length() < 1e-9);
    }

    #[test]
    fn test_draw_includes_output_arrow() {
        let demo = LeverDemo::new(&Settings::default()).unwrap();
        let mut out: Vec<DrawCommand> = Vec::new();
        demo.draw(&mut out);
        // Beam (2 strokes), fulcrum marker (2 discs), output arrow
        assert_eq!(out.len(), 5);
        match &out[4] {
            DrawCommand::Line { from, to, .. } => {
                let len = (*to - *from).length();
                let expected = 2.0 * demo.params.output_scale;
                assert!((len - expected).abs() <= expected * crate::sim::FAST_NORMALIZE_TOLERANCE);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_zero_effort_skips_arrow() {
        let mut settings = Settings::default();
        settings.lever.effort_force = 0.0;
        let demo = LeverDemo::new(&settings).unwrap();
        let mut out: Vec<DrawCommand> = Vec::new();
        demo.draw(&mut out);
        assert_eq!(out.len(), 4);
    }
}
