//! Value types for Boostkit
//!
//! This module defines the canonical `Value` type. Accumulator base values,
//! process inputs and logged items are all `Value`s.
//!
//! ## Contract
//!
//! - No implicit type coercions in equality
//! - IEEE-754 float equality semantics
//! - `Bool` is not numeric
//! - `Display` is the textual representation used for concatenation

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical Boostkit value type
///
/// ## The Seven Types
///
/// 1. `Null` - absence of value
/// 2. `Bool` - Boolean true or false
/// 3. `Int` - 64-bit signed integer
/// 4. `Float` - 64-bit IEEE-754 floating point
/// 5. `String` - UTF-8 encoded string
/// 6. `Array` - Ordered sequence of values
/// 7. `Object` - String-keyed map of values (sorted by key)
///
/// ## Equality Rules
///
/// - Different types are NEVER equal (no type coercion)
/// - `Int(1)` != `Float(1.0)`
/// - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Absence of value
    Null,

    /// Boolean true or false
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    Float(f64),

    /// UTF-8 encoded string
    String(String),

    /// Ordered sequence of values
    Array(Vec<Value>),

    /// String-keyed map of values
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value takes part in arithmetic (`Int` or `Float`)
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Numeric view of `Int` or `Float`, widened to f64
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as array slice
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as object reference
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Arithmetic sum of two numeric values.
    ///
    /// Returns `None` unless both operands are numeric. `Int + Int` stays an
    /// `Int` while it fits in i64. On overflow the exact sum is taken in i128
    /// and rounded once to `Float`. Any `Float` operand makes the result a
    /// `Float`.
    pub fn checked_sum(&self, other: &Value) -> Option<Value> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(
                a.checked_add(*b)
                    .map(Value::Int)
                    .unwrap_or_else(|| Value::Float((i128::from(*a) + i128::from(*b)) as f64)),
            ),
            (a, b) => Some(Value::Float(a.as_number()? + b.as_number()?)),
        }
    }

    /// Textual concatenation: `self` rendered, then `other` rendered.
    pub fn concat(&self, other: &Value) -> Value {
        Value::String(format!("{}{}", self, other))
    }
}

// ============================================================================
// Textual Representation
// ============================================================================

/// Decimal exponents in `[-4, 16)` print positionally, the rest in
/// exponent form (`1e+16`, `1.5e-07`).
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -4..16;

fn fmt_float(f: f64, out: &mut fmt::Formatter<'_>) -> fmt::Result {
    if f.is_nan() {
        return out.write_str("nan");
    }
    if f.is_infinite() {
        return out.write_str(if f > 0.0 { "inf" } else { "-inf" });
    }

    // `{:e}` is the shortest round-trip form, e.g. `-1.5e-7`
    let sci = format!("{:e}", f);
    let split = sci
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));

    match split {
        Some((mantissa, exp)) if !POSITIONAL_EXPONENTS.contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(out, "{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
        _ => {
            let plain = f.to_string();
            if plain.contains('.') {
                out.write_str(&plain)
            } else {
                write!(out, "{}.0", plain)
            }
        }
    }
}

fn fmt_nested(value: &Value, out: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::String(s) => write!(out, "{:?}", s),
        other => write!(out, "{}", other),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => fmt_float(*x, f),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt_nested(item, f)?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: ", k)?;
                    fmt_nested(v, f)?;
                }
                f.write_str("}")
            }
        }
    }
}

// ============================================================================
// Custom PartialEq Implementation (IEEE-754 semantics, no type coercion)
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // NaN != NaN, -0.0 == 0.0
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,

            // Different types: NEVER equal
            _ => false,
        }
    }
}

impl Default for Value {
    /// The default base value is the integer zero.
    fn default() -> Self {
        Value::Int(0)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    /// Non-finite floats have no JSON form and become `null`.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::from(i),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

fn wrong_type(expected: &'static str, actual: &Value) -> Error {
    Error::WrongType {
        expected,
        actual: actual.type_name(),
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| wrong_type("Bool", &value))
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| wrong_type("Int", &value))
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    /// Accepts `Int` as well, widening it.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_number().ok_or_else(|| wrong_type("Float", &value))
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(wrong_type("String", &other)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
