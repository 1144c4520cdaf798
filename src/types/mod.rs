//! Type definitions

pub mod appointment;
pub mod route;

pub use appointment::*;
pub use route::*;
