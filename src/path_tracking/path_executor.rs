//! Multi-segment path execution
//!
//! Each segment is solved into quintic splines, sampled, and tracked sample
//! by sample with the RAMSETE law. Wheel speeds are scaled to volts,
//! saturated with the segment cap and sent to a [`MotorDispatcher`]; the
//! running pose is then advanced by dead reckoning from the *unsaturated*
//! wheel speeds. Segments run in order against one pose that starts at the
//! world origin, and the first failing segment aborts the run.

use itertools::Itertools;
use log::{debug, error, info, warn};

use crate::common::{
    validate_max_voltage, ExecutorConfig, MotorDispatcher, PathSegment, Pose2D,
    RoboticsResult, SegmentSpec, TrajectorySample, WheelCommand,
};
use crate::control::VoltageLimiter;
use crate::localization::OdometryIntegrator;
use crate::path_planning::build_path_segment;
use crate::path_tracking::ramsete::{RamseteConfig, RamseteController};

/// One voltage pair as seen by the actuator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchRecord {
    pub left: f64,
    pub right: f64,
}

/// Reports every voltage pair through the `log` facade
#[derive(Debug, Default)]
pub struct LoggingDispatcher;

impl MotorDispatcher for LoggingDispatcher {
    fn dispatch(&mut self, left: f64, right: f64) {
        info!("Left Voltage: {:.3}V, Right Voltage: {:.3}V", left, right);
    }
}

/// Keeps every voltage pair in dispatch order
#[derive(Debug, Default, Clone)]
pub struct RecordingDispatcher {
    pub records: Vec<DispatchRecord>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MotorDispatcher for RecordingDispatcher {
    fn dispatch(&mut self, left: f64, right: f64) {
        self.records.push(DispatchRecord { left, right });
    }
}

/// Outcome of a complete run
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionReport {
    /// Pose estimate after the last sample
    pub final_pose: Pose2D,
    /// Number of voltage pairs dispatched
    pub dispatch_count: usize,
    /// Origin followed by the pose after every tracked sample
    pub trace: Vec<Pose2D>,
    /// Every reference sample in tracking order
    pub reference: Vec<TrajectorySample>,
}

impl ExecutionReport {
    fn new(origin: Pose2D) -> Self {
        ExecutionReport {
            final_pose: origin,
            dispatch_count: 0,
            trace: vec![origin],
            reference: Vec::new(),
        }
    }
}

/// Runs path segments through the tracking pipeline
#[derive(Debug, Clone)]
pub struct PathExecutor {
    config: ExecutorConfig,
    controller: RamseteController,
    integrator: OdometryIntegrator,
}

impl PathExecutor {
    /// Validate the configuration and build the pipeline
    pub fn new(config: ExecutorConfig) -> RoboticsResult<Self> {
        config.validate()?;
        let controller = RamseteController::new(RamseteConfig {
            b: config.b,
            zeta: config.zeta,
            track_width: config.track_width,
            wrap_heading_error: config.wrap_heading_error,
        });
        Ok(PathExecutor {
            config,
            controller,
            integrator: OdometryIntegrator::new(config.track_width),
        })
    }

    pub fn with_defaults() -> RoboticsResult<Self> {
        Self::new(ExecutorConfig::default())
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Run all segments in order from the world origin
    pub fn execute(
        &self,
        segments: &[SegmentSpec],
        dispatcher: &mut dyn MotorDispatcher,
    ) -> RoboticsResult<ExecutionReport> {
        check_continuity(segments);

        let mut pose = Pose2D::origin();
        let mut report = ExecutionReport::new(pose);

        for (index, spec) in segments.iter().enumerate() {
            let segment = validate_max_voltage(spec.max_voltage)
                .and_then(|_| build_path_segment(spec, self.config.steps))
                .map_err(|e| {
                    error!("Segment {} failed, aborting remaining segments: {}", index, e);
                    e
                })?;

            info!(
                "Segment {}: {} samples over {:.2}s, cap {:.1}V",
                index,
                segment.len(),
                spec.tf,
                segment.max_voltage
            );

            let dt = spec.tf / self.config.steps as f64;
            self.track(&mut pose, &segment, dt, dispatcher, &mut report);

            info!(
                "Segment {} done: pose ({:.3}, {:.3}, {:.3})",
                index, pose.x, pose.y, pose.yaw
            );
        }

        report.final_pose = pose;
        Ok(report)
    }

    /// Track one sampled segment, advancing `pose` once per sample.
    ///
    /// Returns the number of dispatched voltage pairs.
    pub fn track_segment(
        &self,
        pose: &mut Pose2D,
        segment: &PathSegment,
        dt: f64,
        dispatcher: &mut dyn MotorDispatcher,
    ) -> usize {
        let mut report = ExecutionReport::new(*pose);
        self.track(pose, segment, dt, dispatcher, &mut report);
        report.dispatch_count
    }

    fn track(
        &self,
        pose: &mut Pose2D,
        segment: &PathSegment,
        dt: f64,
        dispatcher: &mut dyn MotorDispatcher,
        report: &mut ExecutionReport,
    ) {
        let limiter = VoltageLimiter::new(segment.max_voltage);
        let mut saturated = 0;

        for target in &segment.samples {
            let speeds = self.controller.compute_wheel_speeds(pose, target);
            let requested = speeds.scaled(self.config.voltage_scale);
            let voltages: WheelCommand = limiter.limit_pair(&requested);
            if limiter.is_saturated(requested.left) || limiter.is_saturated(requested.right) {
                saturated += 1;
            }

            debug!(
                "target ({:.3}, {:.3}, {:.3}) -> {:.3}V / {:.3}V",
                target.x, target.y, target.yaw, voltages.left, voltages.right
            );
            dispatcher.dispatch(voltages.left, voltages.right);
            report.dispatch_count += 1;

            self.integrator.integrate(pose, &speeds, dt);
            report.trace.push(*pose);
            report.reference.push(*target);
        }

        if saturated > 0 {
            warn!(
                "{} of {} samples saturated at {:.1}V",
                saturated,
                segment.len(),
                segment.max_voltage
            );
        }
    }
}

/// Warn when segments do not chain from the origin
fn check_continuity(segments: &[SegmentSpec]) {
    const TOLERANCE: f64 = 1e-6;

    if let Some(first) = segments.first() {
        if first.start.pose.position().distance(&Pose2D::origin().position()) > TOLERANCE {
            warn!("First segment does not start at the origin the pose estimate starts from");
        }
    }
    for (i, (prev, next)) in segments.iter().tuple_windows().enumerate() {
        if prev.end.pose.position().distance(&next.start.pose.position()) > TOLERANCE {
            warn!("Segment {} does not start where segment {} ends", i + 1, i);
        }
    }
}
