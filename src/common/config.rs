//! Run configuration and plan files
//!
//! A plan file is a TOML document with an optional `[config]` table and a
//! `[[segments]]` array. Missing config keys fall back to the defaults of
//! [`ExecutorConfig`].

use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::{RoboticsError, RoboticsResult};
use crate::common::types::SegmentSpec;

/// Global constants of a path execution run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Distance between the left and right wheels [m]
    pub track_width: f64,
    /// RAMSETE damping gain
    pub b: f64,
    /// RAMSETE aggressiveness gain
    pub zeta: f64,
    /// Volts per unit wheel speed
    pub voltage_scale: f64,
    /// Sampling steps per segment, each segment yields `steps + 1` samples
    pub steps: usize,
    /// Normalize the RAMSETE heading error to [-pi, pi]
    pub wrap_heading_error: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            track_width: 0.5,
            b: 2.0,
            zeta: 0.7,
            voltage_scale: 12.0,
            steps: 100,
            wrap_heading_error: false,
        }
    }
}

impl ExecutorConfig {
    /// Check the constraints the numeric pipeline relies on
    pub fn validate(&self) -> RoboticsResult<()> {
        positive("track_width", self.track_width)?;
        positive("b", self.b)?;
        positive("zeta", self.zeta)?;
        if !self.voltage_scale.is_finite() {
            return Err(RoboticsError::InvalidParameter(format!(
                "voltage_scale must be finite, got {}",
                self.voltage_scale
            )));
        }
        if self.steps == 0 {
            return Err(RoboticsError::InvalidParameter(
                "steps must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> RoboticsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RoboticsError::InvalidParameter(format!(
            "{} must be > 0, got {}",
            name, value
        )))
    }
}

/// Check a per-segment voltage cap
pub fn validate_max_voltage(max_voltage: f64) -> RoboticsResult<()> {
    if max_voltage.is_nan() || max_voltage < 0.0 {
        return Err(RoboticsError::InvalidParameter(format!(
            "max_voltage must be >= 0, got {}",
            max_voltage
        )));
    }
    Ok(())
}

/// Complete description of a run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(default)]
    pub config: ExecutorConfig,
    #[serde(default)]
    pub segments: Vec<SegmentSpec>,
}

impl PlanFile {
    /// Parse a plan from TOML text
    pub fn from_toml_str(text: &str) -> RoboticsResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Validate the config and every segment cap
    pub fn validate(&self) -> RoboticsResult<()> {
        self.config.validate()?;
        for segment in &self.segments {
            validate_max_voltage(segment.max_voltage)?;
        }
        Ok(())
    }
}

/// Load a plan file from disk
pub fn load_plan<P: AsRef<Path>>(path: P) -> RoboticsResult<PlanFile> {
    let text = read_to_string(path)?;
    PlanFile::from_toml_str(&text)
}
