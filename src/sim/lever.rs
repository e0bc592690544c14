//! Three-point lever: classification and mechanical advantage
//!
//! Fulcrum, effort and load are normalized positions along the beam
//! (0 = anchor, 1 = beam end). The class is fixed at construction.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::vector::{YAxis, angle_of, rotate};
use crate::error::{KernelError, KernelResult};

/// Beam angle a freshly built lever rests at (pointing up on a Y-up surface)
pub const LEVER_REST_ANGLE: f64 = -std::f64::consts::FRAC_PI_2;

/// Lever class by ordering of fulcrum, effort and load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeverClass {
    /// Fulcrum between effort and load (seesaw)
    First,
    /// Effort between fulcrum and load
    Second,
    /// Load between effort and fulcrum
    Third,
}

/// `x` lies strictly between `a` and `b`, in either order
#[inline]
fn strictly_between(x: f64, a: f64, b: f64) -> bool {
    (x > a && x < b) || (x < a && x > b)
}

impl LeverClass {
    /// Classify by point order. `None` when at least two points coincide.
    pub fn classify(fulcrum: f64, effort: f64, load: f64) -> Option<Self> {
        if strictly_between(fulcrum, effort, load) {
            Some(LeverClass::First)
        } else if strictly_between(effort, fulcrum, load) {
            Some(LeverClass::Second)
        } else if strictly_between(load, effort, fulcrum) {
            Some(LeverClass::Third)
        } else {
            None
        }
    }

    /// Numeric class (1, 2 or 3)
    pub fn number(self) -> u8 {
        match self {
            LeverClass::First => 1,
            LeverClass::Second => 2,
            LeverClass::Third => 3,
        }
    }
}

/// A rigid beam pivoting about its anchor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lever {
    /// Anchor (beam start)
    pub position: DVec2,
    /// Beam length
    pub length: f64,
    /// Beam angle in radians, positive = clockwise
    pub angle: f64,
    fulcrum: f64,
    effort: f64,
    load: f64,
    class: LeverClass,
}

impl Lever {
    /// Build a lever, classifying it once
    ///
    /// Fails with [`KernelError::InvalidLength`] for a non-positive beam,
    /// [`KernelError::RatioOutOfRange`] for a ratio outside `[0, 1]` and
    /// [`KernelError::DegeneratePoints`] when the ratios are not pairwise
    /// distinct.
    pub fn new(
        position: DVec2,
        length: f64,
        fulcrum: f64,
        effort: f64,
        load: f64,
    ) -> KernelResult<Self> {
        if !(length.is_finite() && length > 0.0) {
            return Err(KernelError::InvalidLength(length));
        }
        for (name, value) in [("fulcrum", fulcrum), ("effort", effort), ("load", load)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(KernelError::RatioOutOfRange { name, value });
            }
        }
        let class = LeverClass::classify(fulcrum, effort, load).ok_or(
            KernelError::DegeneratePoints {
                fulcrum,
                effort,
                load,
            },
        )?;

        Ok(Self {
            position,
            length,
            angle: LEVER_REST_ANGLE,
            fulcrum,
            effort,
            load,
            class,
        })
    }

    pub fn class(&self) -> LeverClass {
        self.class
    }

    pub fn fulcrum(&self) -> f64 {
        self.fulcrum
    }

    pub fn effort(&self) -> f64 {
        self.effort
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    /// Output-to-input force ratio for this lever's class
    pub fn mechanical_advantage(&self) -> f64 {
        match self.class {
            LeverClass::Third => self.effort / self.load,
            LeverClass::Second => self.load / self.effort,
            LeverClass::First => {
                (self.effort - self.fulcrum).abs() / (self.load - self.fulcrum).abs()
            }
        }
    }

    /// Load-side output force for an effort of `effort_force`
    ///
    /// The magnitude acts perpendicular to the beam, turned with it.
    pub fn output(&self, effort_force: f64, y_axis: YAxis) -> DVec2 {
        let force = effort_force * self.mechanical_advantage();
        rotate(DVec2::new(0.0, force), self.angle, y_axis)
    }

    /// Point at normalized position `t` along the beam
    pub fn point_along(&self, t: f64, y_axis: YAxis) -> DVec2 {
        self.position + rotate(DVec2::new(self.length * t, 0.0), self.angle, y_axis)
    }

    pub fn beam_end(&self, y_axis: YAxis) -> DVec2 {
        self.point_along(1.0, y_axis)
    }

    pub fn fulcrum_point(&self, y_axis: YAxis) -> DVec2 {
        self.point_along(self.fulcrum, y_axis)
    }

    pub fn effort_point(&self, y_axis: YAxis) -> DVec2 {
        self.point_along(self.effort, y_axis)
    }

    pub fn load_point(&self, y_axis: YAxis) -> DVec2 {
        self.point_along(self.load, y_axis)
    }

    /// Swing the beam to point at `target`. A target on the anchor is ignored.
    pub fn aim_at(&mut self, target: DVec2, y_axis: YAxis) {
        let dif = target - self.position;
        if dif != DVec2::ZERO {
            self.angle = angle_of(dif, y_axis);
        }
    }
}
