//! Composite glyphs built from primitive draw commands

use glam::DVec2;

use super::command::{Color, DrawCommand, DrawSink};
use crate::sim::Segment;

/// Stroke a segment
pub fn segment(sink: &mut dyn DrawSink, seg: Segment, thickness: f64, color: Color) {
    sink.push(DrawCommand::Line {
        from: seg.start,
        to: seg.end,
        thickness,
        color,
    });
}

/// Force vector drawn from `origin`, lengthened by `scale` for visibility
pub fn force_arrow(
    sink: &mut dyn DrawSink,
    origin: DVec2,
    force: DVec2,
    scale: f64,
    thickness: f64,
    color: Color,
) {
    segment(sink, Segment::from_offset(origin, force * scale), thickness, color);
}

/// Disc with a smaller disc of another color on top
pub fn ringed_marker(
    sink: &mut dyn DrawSink,
    center: DVec2,
    (outer_radius, outer_color): (f64, Color),
    (inner_radius, inner_color): (f64, Color),
) {
    sink.push(DrawCommand::Circle {
        center,
        radius: outer_radius,
        color: outer_color,
    });
    sink.push(DrawCommand::Circle {
        center,
        radius: inner_radius,
        color: inner_color,
    });
}

/// Thick bar with a thinner core stroke along the same line
pub fn two_tone_bar(
    sink: &mut dyn DrawSink,
    seg: Segment,
    (outer_thickness, outer_color): (f64, Color),
    (inner_thickness, inner_color): (f64, Color),
) {
    segment(sink, seg, outer_thickness, outer_color);
    segment(sink, seg, inner_thickness, inner_color);
}
