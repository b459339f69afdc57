//! Named constructors for the built-in helper labels.
//!
//! Each returns the same [`Accumulator`] type; only the label differs.
//!
//! ```
//! use boostkit::helpers;
//! use boostkit::Value;
//!
//! let json = helpers::json_helper(10);
//! assert_eq!(json.process(5), Value::Int(15));
//! assert_eq!(json.label(), "json_helper");
//! ```

use crate::error::Result;
use crate::types::{Accumulator, AccumulatorConfig, Value, Variant};
use tracing::debug;

/// Accumulator labeled `json_helper`.
pub fn json_helper(base_value: impl Into<Value>) -> Accumulator {
    Accumulator::with_variant(Variant::JsonHelper, base_value)
}

/// Accumulator labeled `log_formatter`.
pub fn log_formatter(base_value: impl Into<Value>) -> Accumulator {
    Accumulator::with_variant(Variant::LogFormatter, base_value)
}

/// Accumulator labeled `math_complex`.
pub fn math_complex(base_value: impl Into<Value>) -> Accumulator {
    Accumulator::with_variant(Variant::MathComplex, base_value)
}

/// Accumulator labeled `file_io`.
pub fn file_io(base_value: impl Into<Value>) -> Accumulator {
    Accumulator::with_variant(Variant::FileIo, base_value)
}

/// Accumulator labeled `vector_math`.
pub fn vector_math(base_value: impl Into<Value>) -> Accumulator {
    Accumulator::with_variant(Variant::VectorMath, base_value)
}

/// Accumulator built from a JSON configuration document.
///
/// ```
/// let acc = boostkit::helpers::from_json(r#"{"variant": "file_io", "base_value": "f"}"#).unwrap();
/// assert_eq!(acc.process("x"), boostkit::Value::from("fx"));
/// ```
pub fn from_json(config: &str) -> Result<Accumulator> {
    let acc = AccumulatorConfig::from_json_str(config)?.build()?;
    debug!(variant = %acc.variant(), "accumulator configured from json");
    Ok(acc)
}
