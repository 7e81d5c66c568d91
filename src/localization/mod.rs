// Localization algorithms module

pub mod odometry;

// Re-exports
pub use odometry::{OdometryIntegrator, update_odometry};
