//! Error types for rust_ramsete

use thiserror::Error;

/// Main error type for motion profiling and tracking
#[derive(Debug, Error)]
pub enum RoboticsError {
    /// Spline horizon was zero, negative or not finite
    #[error("Degenerate horizon: tf must be > 0, got {0}")]
    DegenerateHorizon(f64),
    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Numerical computation failed (linear solve, etc.)
    #[error("Numerical error: {0}")]
    NumericalError(String),
    /// Plan file could not be parsed
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Visualization error
    #[error("Visualization error: {0}")]
    VisualizationError(String),
}

/// Result type alias for robotics operations
pub type RoboticsResult<T> = Result<T, RoboticsError>;
