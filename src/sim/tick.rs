//! Per-tick pointer sample supplied by the host

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Pointer state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    /// Pointer position in surface coordinates
    pub position: DVec2,
    /// Primary button is down
    pub pressed: bool,
    /// Primary button went down this tick
    pub just_pressed: bool,
    /// Primary button went up this tick
    pub just_released: bool,
}

impl PointerInput {
    /// Pointer hovering with the button up
    pub fn hover(position: DVec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// First tick of a press
    pub fn press(position: DVec2) -> Self {
        Self {
            position,
            pressed: true,
            just_pressed: true,
            just_released: false,
        }
    }

    /// Button held down
    pub fn held(position: DVec2) -> Self {
        Self {
            position,
            pressed: true,
            ..Default::default()
        }
    }

    /// Tick on which the button comes up
    pub fn release(position: DVec2) -> Self {
        Self {
            position,
            just_released: true,
            ..Default::default()
        }
    }

    /// Derive edge flags from the previous tick's button state
    pub fn from_button(position: DVec2, pressed: bool, was_pressed: bool) -> Self {
        Self {
            position,
            pressed,
            just_pressed: pressed && !was_pressed,
            just_released: !pressed && was_pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_button_edges() {
        let p = DVec2::new(1.0, 2.0);
        assert_eq!(PointerInput::from_button(p, true, false), PointerInput::press(p));
        assert_eq!(PointerInput::from_button(p, true, true), PointerInput::held(p));
        assert_eq!(PointerInput::from_button(p, false, true), PointerInput::release(p));
        assert_eq!(PointerInput::from_button(p, false, false), PointerInput::hover(p));
    }
}
