//! Control algorithms module
//!
//! Drivetrain kinematics and actuator saturation.

pub mod differential_drive;
pub mod voltage_limiter;

pub use differential_drive::*;
pub use voltage_limiter::*;
