//! Common types used throughout rust_ramsete

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// 2D pose (position + heading) in the fixed world frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    /// Heading [rad]
    pub yaw: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0, yaw: 0.0 }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.yaw)
    }
}

impl Default for Pose2D {
    fn default() -> Self {
        Self::origin()
    }
}

impl From<Vector3<f64>> for Pose2D {
    fn from(v: Vector3<f64>) -> Self {
        Self { x: v[0], y: v[1], yaw: v[2] }
    }
}

impl From<(f64, f64, f64)> for Pose2D {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1, yaw: tuple.2 }
    }
}

/// Body-frame velocity command for a differential drive robot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlInput {
    pub v: f64,      // linear velocity
    pub omega: f64,  // angular velocity
}

impl ControlInput {
    pub fn new(v: f64, omega: f64) -> Self {
        Self { v, omega }
    }

    pub fn zero() -> Self {
        Self { v: 0.0, omega: 0.0 }
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.v, self.omega)
    }
}

impl From<Vector2<f64>> for ControlInput {
    fn from(v: Vector2<f64>) -> Self {
        Self { v: v[0], omega: v[1] }
    }
}

/// Left/right pair of wheel speeds or voltages
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelCommand {
    pub left: f64,
    pub right: f64,
}

impl WheelCommand {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    pub fn zero() -> Self {
        Self { left: 0.0, right: 0.0 }
    }

    /// Multiply both sides by the same factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.left * factor, self.right * factor)
    }
}

/// Target pose and velocity of the reference trajectory at one sampled time.
///
/// `vx` and `vy` are world-frame rates of the x/y splines, `omega` is the
/// heading rate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrajectorySample {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
    pub vx: f64,
    pub vy: f64,
    pub omega: f64,
}

impl TrajectorySample {
    pub fn pose(&self) -> Pose2D {
        Pose2D::new(self.x, self.y, self.yaw)
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Position, velocity and acceleration of one scalar dimension at a spline end
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundaryState {
    pub position: f64,
    #[serde(default)]
    pub velocity: f64,
    #[serde(default)]
    pub acceleration: f64,
}

impl BoundaryState {
    pub fn new(position: f64, velocity: f64, acceleration: f64) -> Self {
        Self { position, velocity, acceleration }
    }

    /// Zero velocity and zero acceleration
    pub fn at_rest(position: f64) -> Self {
        Self { position, velocity: 0.0, acceleration: 0.0 }
    }
}

/// Pose at one end of a segment, with optional rates for non rest-to-rest moves.
///
/// `vx`/`vy`/`ax`/`ay` are world-frame, `omega`/`alpha` are heading rates.
/// All rates default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentBoundary {
    pub pose: Pose2D,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
    #[serde(default)]
    pub omega: f64,
    #[serde(default)]
    pub ax: f64,
    #[serde(default)]
    pub ay: f64,
    #[serde(default)]
    pub alpha: f64,
}

impl SegmentBoundary {
    pub fn at_rest(pose: Pose2D) -> Self {
        Self { pose, ..Default::default() }
    }

    pub fn x_state(&self) -> BoundaryState {
        BoundaryState::new(self.pose.x, self.vx, self.ax)
    }

    pub fn y_state(&self) -> BoundaryState {
        BoundaryState::new(self.pose.y, self.vy, self.ay)
    }

    pub fn yaw_state(&self) -> BoundaryState {
        BoundaryState::new(self.pose.yaw, self.omega, self.alpha)
    }
}

impl From<Pose2D> for SegmentBoundary {
    fn from(pose: Pose2D) -> Self {
        Self::at_rest(pose)
    }
}

/// Input description of one path segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentSpec {
    pub start: SegmentBoundary,
    pub end: SegmentBoundary,
    /// Segment duration [s]
    pub tf: f64,
    /// Voltage cap for this segment [V]
    pub max_voltage: f64,
}

impl SegmentSpec {
    pub fn new(start: SegmentBoundary, end: SegmentBoundary, tf: f64, max_voltage: f64) -> Self {
        Self { start, end, tf, max_voltage }
    }

    /// Rest-to-rest move between two poses
    pub fn rest_to_rest(start: Pose2D, end: Pose2D, tf: f64, max_voltage: f64) -> Self {
        Self::new(start.into(), end.into(), tf, max_voltage)
    }
}

/// Sampled trajectory of one segment together with its voltage cap
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub samples: Vec<TrajectorySample>,
    pub max_voltage: f64,
}

impl PathSegment {
    pub fn new(samples: Vec<TrajectorySample>, max_voltage: f64) -> Self {
        Self { samples, max_voltage }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&TrajectorySample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }
}
