//! Planar vector operations shared by every mechanism
//!
//! All functions are pure and work on `glam::DVec2`. Angles follow one
//! convention across the crate: a positive angle turns clockwise as seen on
//! the drawing surface, whichever way its Y axis points (see [`YAxis`]).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};

/// Seed constant for the 64-bit fast inverse square root
pub const FAST_INV_SQRT_MAGIC: u64 = 0x5FE6_EB50_C7B5_37A9;

/// Relative error bound of [`fast_normalize`] against [`normalize`].
/// A single Newton step from the magic seed peaks at about 1.75e-3.
pub const FAST_NORMALIZE_TOLERANCE: f64 = 2e-3;

/// Orientation of the drawing surface's Y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YAxis {
    /// Y grows upward (mathematical convention)
    #[default]
    Up,
    /// Y grows downward (raster/screen convention)
    Down,
}

impl YAxis {
    /// Unit vector pointing "up" on the surface
    #[inline]
    pub fn up(self) -> DVec2 {
        match self {
            YAxis::Up => DVec2::Y,
            YAxis::Down => DVec2::NEG_Y,
        }
    }

    /// Sign applied to a counter-clockwise math angle to make it clockwise on screen
    #[inline]
    fn clockwise_sign(self) -> f64 {
        match self {
            YAxis::Up => -1.0,
            YAxis::Down => 1.0,
        }
    }
}

/// A circle in the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Whether `p` lies inside or on the circle
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.distance(self.center) <= self.radius
    }
}

/// A directed segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub const fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    /// Segment starting at `start` and spanning `offset`
    pub fn from_offset(start: DVec2, offset: DVec2) -> Self {
        Self::new(start, start + offset)
    }

    #[inline]
    pub fn direction(&self) -> DVec2 {
        self.end - self.start
    }

    pub fn unit(&self) -> KernelResult<DVec2> {
        normalize(self.direction())
    }

    #[inline]
    pub fn normal(&self) -> DVec2 {
        perpendicular(self.direction())
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }
}

/// Perpendicular vector: `(x, y) -> (-y, x)`
#[inline]
pub fn perpendicular(v: DVec2) -> DVec2 {
    DVec2::new(-v.y, v.x)
}

/// Exact normalization. Fails only when `x² + y²` is exactly zero.
pub fn normalize(v: DVec2) -> KernelResult<DVec2> {
    let len_sq = v.length_squared();
    if len_sq == 0.0 {
        return Err(KernelError::DegenerateVector);
    }
    Ok(v * len_sq.sqrt().recip())
}

/// Component of `v` along `onto`
///
/// `onto` is normalized first unless it is already unit length. A zero-length
/// direction is rejected with [`KernelError::DegenerateDirection`].
pub fn project(v: DVec2, onto: DVec2) -> KernelResult<DVec2> {
    let len = onto.length();
    if len == 0.0 {
        return Err(KernelError::DegenerateDirection);
    }
    let unit = if len == 1.0 { onto } else { onto / len };
    Ok(unit * v.dot(unit))
}

/// Rotate `v` by `angle` radians, positive = clockwise on the surface
pub fn rotate(v: DVec2, angle: f64, y_axis: YAxis) -> DVec2 {
    DVec2::from_angle(angle * y_axis.clockwise_sign()).rotate(v)
}

/// Clockwise angle of direction `v`, the inverse of [`rotate`] applied to `+X`
pub fn angle_of(v: DVec2, y_axis: YAxis) -> f64 {
    v.y.atan2(v.x) * y_axis.clockwise_sign()
}

/// Fast approximate `1 / sqrt(n)`: bit-level seed plus one Newton step
///
/// Negative input yields NaN.
pub fn fast_inv_sqrt(n: f64) -> f64 {
    if n < 0.0 {
        return f64::NAN;
    }
    let half = n * 0.5;
    let seed = f64::from_bits(FAST_INV_SQRT_MAGIC - (n.to_bits() >> 1));
    seed * (1.5 - half * seed * seed)
}

/// Approximate normalization for display paths
///
/// Agrees with [`normalize`] within [`FAST_NORMALIZE_TOLERANCE`]. Never use it
/// where a point must lie exactly on a circle.
pub fn fast_normalize(v: DVec2) -> KernelResult<DVec2> {
    let len_sq = v.length_squared();
    if len_sq == 0.0 {
        return Err(KernelError::DegenerateVector);
    }
    Ok(v * fast_inv_sqrt(len_sq))
}

/// Map a compass angle (degrees, 0 = top, clockwise) to a point on `circle`
pub fn angle_to_point_on_circle(circle: &Circle, degrees: f64, y_axis: YAxis) -> DVec2 {
    let radians = (90.0 - degrees).to_radians();
    let dir = DVec2::new(radians.cos(), 0.0) + y_axis.up() * radians.sin();
    circle.center + dir * circle.radius
}
