//! Convenient imports for Boostkit.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use boostkit::prelude::*;
//!
//! let mut acc = json_helper(10);
//! assert_eq!(acc.process(5), Value::Int(15));
//! assert_eq!(acc.add_data("item1"), 1);
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Named constructors
pub use crate::helpers::{file_io, json_helper, log_formatter, math_complex, vector_math};

// Core types
pub use crate::types::{
    Accumulator, AccumulatorBuilder, AccumulatorConfig, AccumulatorSnapshot, NullPolicy, Value,
    Variant,
};

// Re-export serde_json for convenience
pub use serde_json::json;
