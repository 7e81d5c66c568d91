// Path Tracking algorithms module

pub mod ramsete;
pub mod path_executor;

pub use ramsete::*;
pub use path_executor::*;
