//! Time-sampled motion profile of one path segment
//!
//! x, y and heading are interpolated by independent quintic polynomials
//! over the same horizon and sampled at uniform time steps.

use crate::common::{
    PathSegment, RoboticsError, RoboticsResult, SegmentSpec, TrajectorySample,
};
use crate::path_planning::quintic_polynomials::QuinticPolynomial;

/// The three splines of one segment
#[derive(Debug, Clone, PartialEq)]
pub struct MotionProfile {
    pub x: QuinticPolynomial,
    pub y: QuinticPolynomial,
    pub yaw: QuinticPolynomial,
    /// Horizon [s]
    pub tf: f64,
}

impl MotionProfile {
    /// Solve the x, y and heading splines of a segment
    pub fn from_segment(segment: &SegmentSpec) -> RoboticsResult<Self> {
        let tf = segment.tf;
        let x = QuinticPolynomial::solve(segment.start.x_state(), segment.end.x_state(), tf)?;
        let y = QuinticPolynomial::solve(segment.start.y_state(), segment.end.y_state(), tf)?;
        let yaw = QuinticPolynomial::solve(segment.start.yaw_state(), segment.end.yaw_state(), tf)?;
        Ok(MotionProfile { x, y, yaw, tf })
    }

    /// Reference sample at time `t`
    pub fn sample_at(&self, t: f64) -> TrajectorySample {
        sample_splines(&self.x, &self.y, &self.yaw, t)
    }

    /// `steps + 1` samples from `t = 0` to `t = tf`
    pub fn sample(&self, steps: usize) -> RoboticsResult<Vec<TrajectorySample>> {
        sample_profile(&self.x, &self.y, &self.yaw, self.tf, steps)
    }

    /// Sample times matching [`MotionProfile::sample`]
    pub fn times(&self, steps: usize) -> Vec<f64> {
        sample_times(self.tf, steps)
    }

    /// Time between consecutive samples
    pub fn dt(&self, steps: usize) -> f64 {
        self.tf / steps as f64
    }
}

/// Uniform sample times `tf * i / steps` for `i = 0..=steps`
pub fn sample_times(tf: f64, steps: usize) -> Vec<f64> {
    (0..=steps)
        .map(|i| tf * (i as f64 / steps as f64))
        .collect()
}

/// Reference sample of three splines at time `t`
fn sample_splines(
    x: &QuinticPolynomial,
    y: &QuinticPolynomial,
    yaw: &QuinticPolynomial,
    t: f64,
) -> TrajectorySample {
    let (px, vx, _) = x.evaluate(t);
    let (py, vy, _) = y.evaluate(t);
    let (pyaw, omega, _) = yaw.evaluate(t);
    TrajectorySample { x: px, y: py, yaw: pyaw, vx, vy, omega }
}

/// Sample three splines at `steps + 1` uniform times over `[0, tf]`.
///
/// `vx`/`vy` are the raw x/y spline rates, `omega` the heading spline rate.
pub fn sample_profile(
    x: &QuinticPolynomial,
    y: &QuinticPolynomial,
    yaw: &QuinticPolynomial,
    tf: f64,
    steps: usize,
) -> RoboticsResult<Vec<TrajectorySample>> {
    if steps == 0 {
        return Err(RoboticsError::InvalidParameter(
            "profile needs at least one step".to_string(),
        ));
    }

    let samples = sample_times(tf, steps)
        .into_iter()
        .map(|t| sample_splines(x, y, yaw, t))
        .collect();
    Ok(samples)
}

/// Solve and sample a segment in one go
pub fn build_path_segment(segment: &SegmentSpec, steps: usize) -> RoboticsResult<PathSegment> {
    let profile = MotionProfile::from_segment(segment)?;
    Ok(PathSegment::new(profile.sample(steps)?, segment.max_voltage))
}
