// Path Planning algorithms module

pub mod quintic_polynomials;
pub mod motion_profile;

pub use quintic_polynomials::*;
pub use motion_profile::*;
