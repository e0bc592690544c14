//! 2D rigid-mechanics kernel
//!
//! Pure geometry and statics shared by the demos:
//! - No rendering, input polling or I/O
//! - Every value is recomputed from the current tick's input
//! - Degenerate input is reported, never silently patched

pub mod contact;
pub mod force_chain;
pub mod lever;
pub mod linkage;
pub mod point;
pub mod tick;
pub mod vector;

pub use contact::{CircularContact, ContactSolution, closest_point, select_contact};
pub use force_chain::ForceChain;
pub use lever::{LEVER_REST_ANGLE, Lever, LeverClass};
pub use linkage::{LinkChain, horizontal_extent, wrap_driven};
pub use point::ContactPoint;
pub use tick::PointerInput;
pub use vector::{
    Circle, FAST_NORMALIZE_TOLERANCE, Segment, YAxis, angle_of, angle_to_point_on_circle,
    fast_inv_sqrt, fast_normalize, normalize, perpendicular, project, rotate,
};
