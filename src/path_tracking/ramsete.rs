//! RAMSETE trajectory tracking controller
//!
//! Nonlinear feedback law for a unicycle-like robot following a
//! time-parameterized reference. The pose error is expressed in the robot
//! frame and corrected through a time-varying gain
//! `k = 2 zeta sqrt(omega_ref^2 + b v_ref^2)`.
//!
//! Ref:
//!     - C. Samson, "Time-varying feedback stabilization of car-like wheeled
//!       mobile robots", 1993
//!     - https://wiki.purduesigbots.com/software/control-algorithms/ramsete

use crate::common::{ControlInput, Pose2D, TrajectorySample, WheelCommand};
use crate::control::DifferentialDrive;

/// Configuration for the RAMSETE controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RamseteConfig {
    /// Damping gain, > 0
    pub b: f64,
    /// Aggressiveness gain, > 0
    pub zeta: f64,
    /// Vehicle track width [m]
    pub track_width: f64,
    /// Normalize the heading error to [-pi, pi] before use
    pub wrap_heading_error: bool,
}

impl Default for RamseteConfig {
    fn default() -> Self {
        Self {
            b: 2.0,
            zeta: 0.7,
            track_width: 0.5,
            wrap_heading_error: false,
        }
    }
}

/// Tracking errors in the robot frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingError {
    /// Along-track error [m]
    pub ex: f64,
    /// Cross-track error [m]
    pub ey: f64,
    /// Heading error [rad]
    pub eyaw: f64,
}

/// RAMSETE feedback controller
#[derive(Debug, Clone)]
pub struct RamseteController {
    config: RamseteConfig,
    drive: DifferentialDrive,
}

impl RamseteController {
    pub fn new(config: RamseteConfig) -> Self {
        RamseteController {
            drive: DifferentialDrive::new(config.track_width),
            config,
        }
    }

    /// Create with simplified parameters
    pub fn with_params(b: f64, zeta: f64, track_width: f64) -> Self {
        Self::new(RamseteConfig { b, zeta, track_width, ..Default::default() })
    }

    pub fn config(&self) -> &RamseteConfig {
        &self.config
    }

    /// World-frame error rotated into the robot frame
    pub fn tracking_error(&self, pose: &Pose2D, target: &TrajectorySample) -> TrackingError {
        let dx = target.x - pose.x;
        let dy = target.y - pose.y;
        let (s, c) = pose.yaw.sin_cos();
        let mut eyaw = target.yaw - pose.yaw;
        if self.config.wrap_heading_error {
            eyaw = normalize_angle(eyaw);
        }
        TrackingError {
            ex: c * dx + s * dy,
            ey: -s * dx + c * dy,
            eyaw,
        }
    }

    /// Commanded body velocity for the current pose and target sample
    pub fn compute_velocity(&self, pose: &Pose2D, target: &TrajectorySample) -> ControlInput {
        let err = self.tracking_error(pose, target);
        let b = self.config.b;

        let k1 = 2.0 * self.config.zeta * (target.omega.powi(2) + b * target.vx.powi(2)).sqrt();
        let k3 = b * target.vx;

        ControlInput::new(
            target.vx * err.eyaw.cos() + k1 * err.ex,
            target.omega + k3 * err.ey + k1 * err.eyaw,
        )
    }

    /// Commanded wheel speeds for the current pose and target sample
    pub fn compute_wheel_speeds(&self, pose: &Pose2D, target: &TrajectorySample) -> WheelCommand {
        self.drive.to_wheel_speeds(&self.compute_velocity(pose, target))
    }
}

/// Normalize angle to [-PI, PI]
///
/// Closed form, so arbitrarily large angles finish and non-finite input
/// comes back as NaN.
pub fn normalize_angle(angle: f64) -> f64 {
    angle.sin().atan2(angle.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn sample(x: f64, y: f64, yaw: f64, vx: f64, omega: f64) -> TrajectorySample {
        TrajectorySample { x, y, yaw, vx, vy: 0.0, omega }
    }

    #[test]
    fn test_ramsete_config_defaults() {
        let config = RamseteConfig::default();
        assert!((config.b - 2.0).abs() < 1e-10);
        assert!((config.zeta - 0.7).abs() < 1e-10);
        assert!((config.track_width - 0.5).abs() < 1e-10);
        assert!(!config.wrap_heading_error);
    }

    #[test]
    fn test_zero_error_zero_velocity() {
        let controller = RamseteController::with_params(2.0, 0.7, 0.5);
        let pose = Pose2D::new(1.0, -2.0, 0.3);
        let wheels = controller.compute_wheel_speeds(&pose, &sample(1.0, -2.0, 0.3, 0.0, 0.0));
        assert_eq!(wheels.left, 0.0);
        assert_eq!(wheels.right, 0.0);
    }

    #[test]
    fn test_on_track_feedforward() {
        let controller = RamseteController::with_params(2.0, 0.7, 0.5);
        let pose = Pose2D::new(1.0, 0.0, 0.0);
        let control = controller.compute_velocity(&pose, &sample(1.0, 0.0, 0.0, 0.8, 0.4));
        assert_relative_eq!(control.v, 0.8);
        assert_relative_eq!(control.omega, 0.4);
    }

    #[test]
    fn test_tracking_error_in_robot_frame() {
        let controller = RamseteController::with_params(2.0, 0.7, 0.5);
        // robot facing +y, target one meter ahead of it
        let pose = Pose2D::new(0.0, 0.0, PI / 2.0);
        let err = controller.tracking_error(&pose, &sample(0.0, 1.0, PI / 2.0, 0.0, 0.0));
        assert_relative_eq!(err.ex, 1.0, epsilon = 1e-12);
        assert_relative_eq!(err.ey, 0.0, epsilon = 1e-12);
        assert_eq!(err.eyaw, 0.0);
    }

    #[test]
    fn test_target_ahead_speeds_up() {
        let controller = RamseteController::with_params(2.0, 0.7, 0.5);
        let pose = Pose2D::origin();
        let control = controller.compute_velocity(&pose, &sample(0.2, 0.0, 0.0, 0.5, 0.0));
        assert!(control.v > 0.5);
        assert_relative_eq!(control.omega, 0.0);
    }

    #[test]
    fn test_target_left_turns_left() {
        let controller = RamseteController::with_params(2.0, 0.7, 0.5);
        let wheels =
            controller.compute_wheel_speeds(&Pose2D::origin(), &sample(0.0, 0.2, 0.0, 0.5, 0.0));
        assert!(wheels.right > wheels.left);
    }

    #[test]
    fn test_heading_error_not_wrapped_by_default() {
        let controller = RamseteController::with_params(2.0, 0.7, 0.5);
        let err = controller.tracking_error(&Pose2D::origin(), &sample(0.0, 0.0, 1.5 * PI, 0.0, 0.0));
        assert_relative_eq!(err.eyaw, 1.5 * PI);
    }

    #[test]
    fn test_heading_error_wrapped() {
        let config = RamseteConfig { wrap_heading_error: true, ..Default::default() };
        let controller = RamseteController::new(config);
        let err = controller.tracking_error(&Pose2D::origin(), &sample(0.0, 0.0, 1.5 * PI, 0.0, 0.0));
        assert_relative_eq!(err.eyaw, -0.5 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(3.0 * PI) - PI).abs() < 0.01);
        assert!((normalize_angle(-3.0 * PI) + PI).abs() < 0.01);
        assert!((normalize_angle(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_angle_extreme_inputs() {
        let wrapped = normalize_angle(1e20);
        assert!(wrapped.is_finite());
        assert!((-PI..=PI).contains(&wrapped));

        assert!(normalize_angle(f64::INFINITY).is_nan());
        assert!(normalize_angle(f64::NEG_INFINITY).is_nan());
        assert!(normalize_angle(f64::NAN).is_nan());
    }

    #[test]
    fn test_wrapped_heading_error_for_huge_target_heading() {
        let config = RamseteConfig { wrap_heading_error: true, ..Default::default() };
        let controller = RamseteController::new(config);
        let err = controller.tracking_error(&Pose2D::origin(), &sample(0.0, 0.0, 1e20, 0.0, 0.0));
        assert!((-PI..=PI).contains(&err.eyaw));

        let control = controller.compute_velocity(&Pose2D::origin(), &sample(0.0, 0.0, 1e20, 0.0, 0.0));
        assert!(control.omega.is_finite());
    }
}
