//! Utility modules for rust_ramsete

pub mod logger;
pub mod visualization;

pub use logger::{logger_init, LoggerInitError};
pub use visualization::{Visualizer, PathStyle, PointStyle, colors, quick_plot_run};
