//! Differential drive kinematics
//!
//! Converts a body velocity `(v, omega)` into left/right wheel speeds and back.

use crate::common::{ControlInput, WheelCommand};

/// Differential drive with a fixed track width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifferentialDrive {
    /// Distance between the wheels [m]
    pub track_width: f64,
}

impl DifferentialDrive {
    pub fn new(track_width: f64) -> Self {
        DifferentialDrive { track_width }
    }

    /// Wheel speeds for a body velocity
    pub fn to_wheel_speeds(&self, control: &ControlInput) -> WheelCommand {
        wheel_speeds(control.v, control.omega, self.track_width)
    }

    /// Body velocity for a pair of wheel speeds.
    ///
    /// A zero track width yields a non-finite angular velocity.
    pub fn to_body_velocity(&self, wheels: &WheelCommand) -> ControlInput {
        ControlInput::new(
            (wheels.left + wheels.right) / 2.0,
            (wheels.right - wheels.left) / self.track_width,
        )
    }
}

/// `left = v - omega * w / 2`, `right = v + omega * w / 2`
pub fn wheel_speeds(v: f64, omega: f64, track_width: f64) -> WheelCommand {
    let half = omega * track_width / 2.0;
    WheelCommand::new(v - half, v + half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_straight_line() {
        let wheels = wheel_speeds(1.0, 0.0, 0.5);
        assert_eq!(wheels, WheelCommand::new(1.0, 1.0));
    }

    #[test]
    fn test_turn_in_place() {
        let wheels = wheel_speeds(0.0, 2.0, 0.5);
        assert_eq!(wheels, WheelCommand::new(-0.5, 0.5));
    }

    #[test]
    fn test_zero_track_width() {
        let wheels = wheel_speeds(0.7, 3.0, 0.0);
        assert_eq!(wheels, WheelCommand::new(0.7, 0.7));
    }

    #[test]
    fn test_inverse() {
        let drive = DifferentialDrive::new(0.5);
        let control = drive.to_body_velocity(&WheelCommand::new(0.5, 1.5));
        assert_relative_eq!(control.v, 1.0);
        assert_relative_eq!(control.omega, 2.0);
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            v in -5.0..5.0f64,
            omega in -10.0..10.0f64,
            w in 0.05..2.0f64,
        ) {
            let drive = DifferentialDrive::new(w);
            let back = drive.to_body_velocity(&drive.to_wheel_speeds(&ControlInput::new(v, omega)));
            prop_assert!((back.v - v).abs() <= 1e-12 * (1.0 + v.abs()));
            prop_assert!((back.omega - omega).abs() <= 1e-9 * (1.0 + omega.abs()));
        }
    }
}
