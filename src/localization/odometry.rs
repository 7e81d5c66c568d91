//! Dead-reckoning odometry for a differential drive robot
//!
//! Advances a pose estimate by forward-Euler integration of the commanded
//! wheel speeds. Nothing is measured: the estimate is an open-loop
//! simulation of the motion, so it drifts with larger `dt` or tighter turns.

use crate::common::{MotionModel, Pose2D, WheelCommand};
use crate::control::DifferentialDrive;

/// First-order pose integrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OdometryIntegrator {
    drive: DifferentialDrive,
}

impl OdometryIntegrator {
    pub fn new(track_width: f64) -> Self {
        OdometryIntegrator { drive: DifferentialDrive::new(track_width) }
    }

    pub fn track_width(&self) -> f64 {
        self.drive.track_width
    }

    /// Advance `pose` in place
    pub fn integrate(&self, pose: &mut Pose2D, wheels: &WheelCommand, dt: f64) {
        *pose = self.propagate(pose, wheels, dt);
    }
}

impl MotionModel for OdometryIntegrator {
    type State = Pose2D;
    type Control = WheelCommand;

    fn propagate(&self, state: &Pose2D, control: &WheelCommand, dt: f64) -> Pose2D {
        let body = self.drive.to_body_velocity(control);
        // position uses the heading at the start of the step
        Pose2D::new(
            state.x + body.v * state.yaw.cos() * dt,
            state.y + body.v * state.yaw.sin() * dt,
            state.yaw + body.omega * dt,
        )
    }
}

/// Single Euler step from raw wheel speeds
pub fn update_odometry(
    pose: &Pose2D,
    v_left: f64,
    v_right: f64,
    track_width: f64,
    dt: f64,
) -> Pose2D {
    OdometryIntegrator::new(track_width).propagate(pose, &WheelCommand::new(v_left, v_right), dt)
}
