//! Accumulator API Test Suite
//!
//! Exercises the public facade: construction, `process`, `add_data`, `clear`,
//! null policies and configuration.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test accumulator_api
//!
//! # Process tests only
//! cargo test --test accumulator_api process::
//! ```

pub use boostkit::prelude::*;

// Test modules
pub mod config;
pub mod log_ops;
pub mod process;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// One accumulator per built-in label, all with the same base value
pub fn all_helpers(base: impl Into<Value> + Clone) -> Vec<Accumulator> {
    vec![
        json_helper(base.clone()),
        log_formatter(base.clone()),
        math_complex(base.clone()),
        file_io(base.clone()),
        vector_math(base),
    ]
}

/// Enable tracing output for a test run
pub fn init_logging() {
    boostkit::logging::init_for_tests();
}
