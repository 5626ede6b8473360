//! Unit-test logging initialization.
//!
//! Integration tests call `backend_test_support::logging::init()` themselves;
//! unit tests get it for free via the `ctor` hook in `lib.rs`.

pub fn init() {
    backend_test_support::logging::init();
}
