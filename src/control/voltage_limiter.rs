//! Symmetric voltage saturation

use crate::common::WheelCommand;

/// Clamp `voltage` into `[-max_voltage, max_voltage]`.
///
/// Expects `max_voltage >= 0`. A NaN voltage passes through unchanged.
pub fn clamp_voltage(voltage: f64, max_voltage: f64) -> f64 {
    if voltage > max_voltage {
        max_voltage
    } else if voltage < -max_voltage {
        -max_voltage
    } else {
        voltage
    }
}

/// Per-segment voltage limiter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageLimiter {
    pub max_voltage: f64,
}

impl VoltageLimiter {
    pub fn new(max_voltage: f64) -> Self {
        VoltageLimiter { max_voltage }
    }

    pub fn limit(&self, voltage: f64) -> f64 {
        clamp_voltage(voltage, self.max_voltage)
    }

    /// Clamp both sides independently
    pub fn limit_pair(&self, command: &WheelCommand) -> WheelCommand {
        WheelCommand::new(self.limit(command.left), self.limit(command.right))
    }

    pub fn is_saturated(&self, voltage: f64) -> bool {
        voltage.abs() > self.max_voltage
    }
}
