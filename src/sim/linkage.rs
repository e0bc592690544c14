//! Two-link arm driven inside a vertical channel
//!
//! The joint between the links is held on a circle of radius `max_reach`
//! around the anchor: for a driven vertical offset `y` the horizontal extent
//! is `sqrt(max_reach² - y²)`. The second link mirrors the first's horizontal
//! run, so the chain folds back under the anchor.
//!
//! Offsets beyond the channel are wrapped with a sign-preserving remainder
//! instead of clamped. That keeps the solution finite for any input, at the
//! price of a jump in `x` as the input crosses `±max_reach`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::vector::Segment;
use crate::error::{KernelError, KernelResult};

/// Bring an out-of-range driven offset back into `[-max_reach, max_reach]`
#[inline]
pub fn wrap_driven(driven_y: f64, max_reach: f64) -> f64 {
    if driven_y.abs() <= max_reach {
        driven_y
    } else {
        driven_y % max_reach
    }
}

/// Horizontal extent of the first link for a driven vertical offset
pub fn horizontal_extent(driven_y: f64, max_reach: f64) -> f64 {
    let y = wrap_driven(driven_y, max_reach);
    (max_reach * max_reach - y * y).sqrt()
}

/// Solved chain of links sharing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkChain {
    pub links: Vec<Segment>,
    pub max_reach: f64,
    driven_y: f64,
    extent: f64,
}

impl LinkChain {
    /// Solve the two-link chain hanging from `anchor` for `driven_y`
    pub fn solve(anchor: DVec2, driven_y: f64, max_reach: f64) -> KernelResult<Self> {
        if !(max_reach.is_finite() && max_reach > 0.0) {
            return Err(KernelError::InvalidReach(max_reach));
        }

        let y = wrap_driven(driven_y, max_reach);
        let x = (max_reach * max_reach - y * y).sqrt();

        let first = Segment::from_offset(anchor, DVec2::new(x, y));
        let second = Segment::from_offset(first.end, DVec2::new(-x, y));

        Ok(Self {
            links: vec![first, second],
            max_reach,
            driven_y: y,
            extent: x,
        })
    }

    /// Effective (wrapped) driven offset
    pub fn driven_y(&self) -> f64 {
        self.driven_y
    }

    /// Horizontal extent of the first link
    pub fn extent(&self) -> f64 {
        self.extent
    }

    pub fn anchor(&self) -> DVec2 {
        self.links[0].start
    }

    /// Shared joint between the first and second link
    pub fn joint(&self) -> DVec2 {
        self.links[0].end
    }

    /// Free end of the last link
    pub fn tip(&self) -> DVec2 {
        self.links[self.links.len() - 1].end
    }
}
