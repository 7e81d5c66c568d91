//! rust_ramsete - motion profiling and RAMSETE tracking for differential drive robots
//!
//! Builds rest-to-rest (or arbitrary boundary) quintic profiles between
//! poses, tracks them with a RAMSETE feedback law, saturates the resulting
//! wheel voltages and advances a dead-reckoned pose estimate.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod localization;
pub mod path_planning;
pub mod path_tracking;
pub mod control;

// Re-export common types for convenience
pub use common::{Pose2D, ControlInput, WheelCommand, TrajectorySample, PathSegment, SegmentSpec};
pub use common::{ExecutorConfig, MotorDispatcher, PlanFile, load_plan};
pub use common::{RoboticsError, RoboticsResult};
pub use path_tracking::{PathExecutor, ExecutionReport};
