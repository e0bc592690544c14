//! Draggable handle
//!
//! A small disc the pointer can grab. The owning demo snaps it back onto its
//! constraint every tick; `active` only records whether it is being dragged.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::tick::PointerInput;
use super::vector::Circle;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    pub position: DVec2,
    pub radius: f64,
    pub active: bool,
}

impl ContactPoint {
    pub fn new(position: DVec2, radius: f64) -> Self {
        Self {
            position,
            radius,
            active: false,
        }
    }

    /// Whether `p` falls on the handle's disc
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        Circle::new(self.position, self.radius).contains(p)
    }

    /// Update the drag flag from this tick's pointer edges
    ///
    /// A press only grabs the handle when it lands on it; any release lets go.
    /// Returns true when the flag changed.
    pub fn update_drag(&mut self, input: &PointerInput) -> bool {
        let was_active = self.active;
        if input.just_pressed && self.contains(input.position) {
            self.active = true;
        }
        if input.just_released {
            self.active = false;
        }
        was_active != self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edge() {
        let p = ContactPoint::new(DVec2::new(10.0, 0.0), 10.0);
        assert!(p.contains(DVec2::new(20.0, 0.0)));
        assert!(p.contains(DVec2::new(10.0, 5.0)));
        assert!(!p.contains(DVec2::new(20.1, 0.0)));
    }

    #[test]
    fn test_drag_cycle() {
        let mut p = ContactPoint::new(DVec2::ZERO, 10.0);

        // Press outside: no grab
        let miss = PointerInput::press(DVec2::new(50.0, 0.0));
        assert!(!p.update_drag(&miss));
        assert!(!p.active);

        // Press on the handle
        assert!(p.update_drag(&PointerInput::press(DVec2::new(3.0, 4.0))));
        assert!(p.active);

        // Holding keeps it
        assert!(!p.update_drag(&PointerInput::held(DVec2::new(300.0, 0.0))));
        assert!(p.active);

        // Release anywhere drops it
        assert!(p.update_drag(&PointerInput::release(DVec2::new(300.0, 0.0))));
        assert!(!p.active);
    }
}
