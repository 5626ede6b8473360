//! Bootstrap helpers that only exist for the unit-test build.

pub mod logging;
