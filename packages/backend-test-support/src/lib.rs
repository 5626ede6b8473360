//! Backend test support utilities
//!
//! This crate provides utilities shared by the backend's unit and integration
//! tests: unified logging initialization and Problem Details assertions.

pub mod logging;
pub mod problem_details;
