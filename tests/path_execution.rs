use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use rust_ramsete::path_planning::QuinticPolynomial;
use rust_ramsete::path_tracking::RecordingDispatcher;
use rust_ramsete::common::BoundaryState;
use rust_ramsete::{
    load_plan, ExecutorConfig, PathExecutor, Pose2D, RoboticsError, SegmentSpec,
};

fn plan_path() -> String {
    format!("{}/params/three_segment.toml", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_rest_to_rest_spline() {
    let qp = QuinticPolynomial::solve(
        BoundaryState::at_rest(0.0),
        BoundaryState::at_rest(2.0),
        5.0,
    )
    .unwrap();
    assert_abs_diff_eq!(qp.a0, 0.0, epsilon = 1e-12);

    let (position, velocity, _) = qp.evaluate(2.5);
    assert!(velocity > 0.0);
    assert!(position > 0.0 && position < 2.0);
}

#[test]
fn test_single_segment_run() {
    let config = ExecutorConfig {
        track_width: 0.5,
        b: 2.0,
        zeta: 0.7,
        steps: 100,
        ..Default::default()
    };
    let executor = PathExecutor::new(config).unwrap();
    let segments = [SegmentSpec::rest_to_rest(
        Pose2D::origin(),
        Pose2D::new(2.0, 1.0, PI / 4.0),
        5.0,
        12.0,
    )];

    let mut dispatcher = RecordingDispatcher::new();
    let report = executor.execute(&segments, &mut dispatcher).unwrap();

    assert_eq!(dispatcher.len(), 101);
    assert_eq!(report.dispatch_count, 101);

    // open-loop Euler integration lags the reference slightly
    let pose = report.final_pose;
    assert_abs_diff_eq!(pose.x, 2.0, epsilon = 0.15);
    assert_abs_diff_eq!(pose.y, 1.0, epsilon = 0.15);
    assert_abs_diff_eq!(pose.yaw, PI / 4.0, epsilon = 0.1);

    assert!(dispatcher
        .records
        .iter()
        .all(|r| r.left.abs() <= 12.0 && r.right.abs() <= 12.0));
}

#[test]
fn test_run_is_repeatable() {
    let executor = PathExecutor::with_defaults().unwrap();
    let segments = [SegmentSpec::rest_to_rest(
        Pose2D::origin(),
        Pose2D::new(1.0, -1.0, -PI / 2.0),
        3.0,
        8.0,
    )];

    let mut first = RecordingDispatcher::new();
    let mut second = RecordingDispatcher::new();
    let a = executor.execute(&segments, &mut first).unwrap();
    let b = executor.execute(&segments, &mut second).unwrap();

    assert_eq!(a, b);
    assert_eq!(first.records, second.records);
}

#[test]
fn test_degenerate_segment_aborts_run() {
    let executor = PathExecutor::with_defaults().unwrap();
    let segments = [
        SegmentSpec::rest_to_rest(Pose2D::origin(), Pose2D::new(2.0, 1.0, PI / 4.0), 5.0, 12.0),
        SegmentSpec::rest_to_rest(
            Pose2D::new(2.0, 1.0, PI / 4.0),
            Pose2D::new(4.0, 2.0, PI / 2.0),
            0.0,
            6.0,
        ),
        SegmentSpec::rest_to_rest(Pose2D::new(4.0, 2.0, PI / 2.0), Pose2D::new(5.0, 3.0, PI), 5.0, 10.0),
    ];

    let mut dispatcher = RecordingDispatcher::new();
    let result = executor.execute(&segments, &mut dispatcher);

    assert!(matches!(result, Err(RoboticsError::DegenerateHorizon(_))));
    // only the first segment reached the actuator
    assert_eq!(dispatcher.len(), 101);
}

#[test]
fn test_plan_file_run() {
    let plan = load_plan(plan_path()).unwrap();
    plan.validate().unwrap();
    assert_eq!(plan.segments.len(), 3);
    assert_eq!(plan.config, ExecutorConfig::default());

    let executor = PathExecutor::new(plan.config).unwrap();
    let mut dispatcher = RecordingDispatcher::new();
    let report = executor.execute(&plan.segments, &mut dispatcher).unwrap();

    assert_eq!(report.dispatch_count, 303);
    assert_eq!(report.trace.len(), 304);
    assert!(report.final_pose.x.is_finite());
    assert!(report.final_pose.yaw.is_finite());

    let caps = [12.0, 6.0, 10.0];
    for (chunk, cap) in dispatcher.records.chunks(101).zip(caps.iter()) {
        assert!(chunk.iter().all(|r| r.left.abs() <= *cap && r.right.abs() <= *cap));
    }
}

#[test]
fn test_invalid_track_width() {
    let config = ExecutorConfig { track_width: -0.5, ..Default::default() };
    assert!(matches!(
        PathExecutor::new(config),
        Err(RoboticsError::InvalidParameter(_))
    ));
}

#[test]
fn test_wrapped_run_with_huge_heading_finishes() {
    let config = ExecutorConfig { wrap_heading_error: true, ..Default::default() };
    let executor = PathExecutor::new(config).unwrap();
    // turn in place so only the heading error is extreme
    let segments = [SegmentSpec::rest_to_rest(
        Pose2D::origin(),
        Pose2D::new(0.0, 0.0, 1e20),
        5.0,
        12.0,
    )];

    let mut dispatcher = RecordingDispatcher::new();
    let report = executor.execute(&segments, &mut dispatcher).unwrap();

    assert_eq!(report.dispatch_count, 101);
    assert!(report.final_pose.yaw.is_finite());
    assert!(dispatcher
        .records
        .iter()
        .all(|r| r.left.abs() <= 12.0 && r.right.abs() <= 12.0));
}
