//! Point contact on a circle and the torque of a fixed force about it
//!
//! The pointer picks a contact point on the circle by quadrant, then the
//! force is resolved along the circle's tangent at that point.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::vector::{Circle, YAxis, angle_to_point_on_circle, normalize, perpendicular};
use crate::error::{KernelError, KernelResult};

/// Closest point on `circle` to `p`
///
/// Fails with [`KernelError::DegeneratePosition`] when `p` is the center.
pub fn closest_point(circle: &Circle, p: DVec2) -> KernelResult<DVec2> {
    let dir = normalize(p - circle.center).map_err(|_| KernelError::DegeneratePosition)?;
    Ok(circle.center + dir * circle.radius)
}

/// Pick the contact point for a pointer at `mouse`
///
/// Quadrants are taken relative to the center, "above" meaning along
/// `y_axis.up()`:
/// - right and not above: rightmost point
/// - left and not below: topmost point
/// - strictly left and below: closest point reflected across the diagonal
/// - otherwise: closest point
pub fn select_contact(circle: &Circle, mouse: DVec2, y_axis: YAxis) -> KernelResult<DVec2> {
    if mouse == circle.center {
        return Err(KernelError::DegeneratePosition);
    }

    let up = y_axis.up();
    let offset = mouse - circle.center;
    let dx = offset.x;
    let dv = offset.dot(up);

    if dx >= 0.0 && dv <= 0.0 {
        Ok(circle.center + DVec2::X * circle.radius)
    } else if dx <= 0.0 && dv >= 0.0 {
        Ok(circle.center + up * circle.radius)
    } else if dx < 0.0 && dv < 0.0 {
        let closest = closest_point(circle, mouse)? - circle.center;
        let (ox, ov) = (closest.x, closest.dot(up));
        Ok(circle.center + DVec2::new(-ov, 0.0) + up * -ox)
    } else {
        closest_point(circle, mouse)
    }
}

/// Contact point with its tangent and the torque of the applied force
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactSolution {
    pub contact: DVec2,
    /// Unit tangent of the circle at `contact`
    pub tangent: DVec2,
    /// Force component along the tangent
    pub torque: DVec2,
}

impl ContactSolution {
    /// Resolve `force` about `contact` on `circle`
    pub fn at(circle: &Circle, contact: DVec2, force: DVec2) -> KernelResult<Self> {
        let tangent = normalize(perpendicular(contact - circle.center))
            .map_err(|_| KernelError::DegeneratePosition)?;
        Ok(Self {
            contact,
            tangent,
            torque: tangent * tangent.dot(force),
        })
    }

    pub fn torque_magnitude(&self) -> f64 {
        self.torque.length()
    }

    /// Torque magnitude rounded to `decimals` places, for readouts
    pub fn rounded_torque(&self, decimals: i32) -> f64 {
        let scale = 10f64.powi(decimals);
        (self.torque_magnitude() * scale).round() / scale
    }
}

/// A circle with a fixed force applied at a pointer-selected contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularContact {
    pub circle: Circle,
    pub force: DVec2,
    pub y_axis: YAxis,
}

impl CircularContact {
    pub fn new(circle: Circle, force: DVec2, y_axis: YAxis) -> Self {
        Self {
            circle,
            force,
            y_axis,
        }
    }

    /// Contact chosen by the quadrant rule for a pointer at `mouse`
    pub fn solve(&self, mouse: DVec2) -> KernelResult<ContactSolution> {
        let contact = select_contact(&self.circle, mouse, self.y_axis)?;
        ContactSolution::at(&self.circle, contact, self.force)
    }

    /// Contact at a compass angle (degrees, 0 = top)
    pub fn at_angle(&self, degrees: f64) -> KernelResult<ContactSolution> {
        let contact = angle_to_point_on_circle(&self.circle, degrees, self.y_axis);
        ContactSolution::at(&self.circle, contact, self.force)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_circle_300() -> Circle {
        Circle::new(DVec2::ZERO, 300.0)
    }

    #[test]
    fn test_closest_point_on_circle() {
        let c = Circle::new(DVec2::new(10.0, -5.0), 4.0);
        let p = closest_point(&c, DVec2::new(10.0, 100.0)).unwrap();
        assert!((p - DVec2::new(10.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_closest_point_at_center() {
        let c = unit_circle_300();
        assert_eq!(
            closest_point(&c, DVec2::ZERO),
            Err(KernelError::DegeneratePosition)
        );
        assert_eq!(
            select_contact(&c, DVec2::ZERO, YAxis::Up),
            Err(KernelError::DegeneratePosition)
        );
    }

    #[test]
    fn test_quadrant_rules() {
        let c = unit_circle_300();

        // Right and below: rightmost
        let p = select_contact(&c, DVec2::new(50.0, -80.0), YAxis::Up).unwrap();
        assert!((p - DVec2::new(300.0, 0.0)).length() < 1e-9);

        // Left and above: topmost
        let p = select_contact(&c, DVec2::new(-50.0, 80.0), YAxis::Up).unwrap();
        assert!((p - DVec2::new(0.0, 300.0)).length() < 1e-9);

        // Left and below: reflected closest point
        let p = select_contact(&c, DVec2::new(-30.0, -40.0), YAxis::Up).unwrap();
        // closest = (-180, -240), offset swapped and negated
        assert!((p - DVec2::new(240.0, 180.0)).length() < 1e-9);

        // Right and above: closest point
        let p = select_contact(&c, DVec2::new(30.0, 40.0), YAxis::Up).unwrap();
        assert!((p - DVec2::new(180.0, 240.0)).length() < 1e-9);
    }

    #[test]
    fn test_quadrants_follow_y_axis() {
        let c = unit_circle_300();
        // With Y down, a pointer at negative y is above the center
        let p = select_contact(&c, DVec2::new(-50.0, -80.0), YAxis::Down).unwrap();
        assert!((p - DVec2::new(0.0, -300.0)).length() < 1e-9);

        let p = select_contact(&c, DVec2::new(-30.0, 40.0), YAxis::Down).unwrap();
        // closest = (-180, 240): up-frame offset (-180, -240) becomes (240, 180)
        assert!((p - DVec2::new(240.0, -180.0)).length() < 1e-9);
    }

    #[test]
    fn test_end_to_end_torque() {
        let contact = CircularContact::new(unit_circle_300(), DVec2::new(0.0, -1.0), YAxis::Up);
        let sol = contact.solve(DVec2::new(100.0, 100.0)).unwrap();

        let expected = DVec2::splat(300.0 / 2f64.sqrt());
        assert!((sol.contact - expected).length() < 1e-9);
        assert!((sol.tangent.length() - 1.0).abs() < 1e-12);
        assert!(sol.tangent.dot(sol.contact).abs() < 1e-9);

        let mag = sol.torque_magnitude();
        assert!(mag > 0.0 && mag < 1.0);
        assert!((mag - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert_eq!(sol.rounded_torque(5), 0.70711);
    }

    #[test]
    fn test_initial_contact_at_top_has_no_torque() {
        let contact = CircularContact::new(unit_circle_300(), DVec2::new(0.0, -1.0), YAxis::Up);
        let sol = contact.at_angle(0.0).unwrap();
        assert!((sol.contact - DVec2::new(0.0, 300.0)).length() < 1e-9);
        assert!(sol.torque_magnitude() < 1e-12);

        let side = contact.at_angle(90.0).unwrap();
        assert!((side.torque_magnitude() - 1.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_closest_point_lies_on_circle(
            cx in -500.0f64..500.0, cy in -500.0f64..500.0, r in 1.0f64..400.0,
            px in -1000.0f64..1000.0, py in -1000.0f64..1000.0,
        ) {
            let c = Circle::new(DVec2::new(cx, cy), r);
            let p = DVec2::new(px, py);
            prop_assume!(p != c.center);
            let q = closest_point(&c, p).unwrap();
            prop_assert!(((q - c.center).length() - r).abs() <= 1e-9 * r);
        }
    }
}
