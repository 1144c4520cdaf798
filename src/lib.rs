//! Route Engine - travel-time estimation and daily route sequencing for
//! field technicians.
//!
//! Everything in this crate is pure and synchronous. Timestamps are always
//! passed in explicitly; only the binary reads the clock, the environment or
//! the filesystem.

pub mod config;
pub mod defaults;
pub mod services;
pub mod types;
