//! Chained resolution of a constant external force through the arm
//!
//! The force is first resolved along link 1; that component, not the raw
//! force, is then resolved against the normal of link 2.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::linkage::LinkChain;
use super::vector::{Segment, normalize, perpendicular, project};
use crate::error::KernelResult;

/// Per-link force residuals for a solved chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceChain {
    /// Component of the external force along link 1
    pub along_first: DVec2,
    /// Component of `along_first` normal to link 2
    pub normal_to_second: DVec2,
    /// Where `along_first` acts: the end of link 1
    pub first_anchor: DVec2,
    /// Where `normal_to_second` acts: the start of link 2
    pub second_anchor: DVec2,
}

impl ForceChain {
    /// Resolve `force` through the first two links of `chain`
    pub fn resolve(chain: &LinkChain, force: DVec2) -> KernelResult<Self> {
        let first = chain.links[0];
        let second = chain.links[1];

        let f1 = project(force, normalize(first.direction())?)?;
        let f2 = project(f1, normalize(perpendicular(second.direction()))?)?;

        Ok(Self {
            along_first: f1,
            normal_to_second: f2,
            first_anchor: first.end,
            second_anchor: second.start,
        })
    }

    /// Display segment for the link-1 component, scaled by `scale`
    pub fn first_segment(&self, scale: f64) -> Segment {
        Segment::from_offset(self.first_anchor, self.along_first * scale)
    }

    /// Display segment for the link-2 normal component, scaled by `scale`
    pub fn second_segment(&self, scale: f64) -> Segment {
        Segment::from_offset(self.second_anchor, self.normal_to_second * scale)
    }
}
