//! Common types, traits, and error definitions for rust_ramsete
//!
//! This module provides the foundational building blocks shared by the
//! planning, tracking and localization modules.

pub mod types;
pub mod traits;
pub mod error;
pub mod config;

pub use types::*;
pub use traits::*;
pub use error::*;
pub use config::*;
