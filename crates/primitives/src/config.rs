//! Accumulator configuration
//!
//! Two ways to configure an [`Accumulator`]:
//! - [`AccumulatorBuilder`] for code
//! - [`AccumulatorConfig`] for JSON documents
//!
//! ```
//! use boostkit_primitives::{AccumulatorBuilder, AccumulatorConfig};
//! use boostkit_core::{NullPolicy, Value, Variant};
//!
//! let acc = AccumulatorBuilder::new()
//!     .variant(Variant::LogFormatter)
//!     .base(10)
//!     .null_policy(NullPolicy::Concatenate)
//!     .build();
//! assert_eq!(acc.process(Value::Null), Value::from("10null"));
//!
//! let acc = AccumulatorConfig::from_json_str(r#"{"variant": "json_helper", "base_value": 2}"#)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! assert_eq!(acc.process(3), Value::Int(5));
//! ```

use crate::accumulator::Accumulator;
use boostkit_core::{Error, NullPolicy, Result, Value, Variant};
use serde::{Deserialize, Serialize};

/// Builder for accumulator configuration.
#[derive(Debug, Clone, Default)]
pub struct AccumulatorBuilder {
    variant: Variant,
    base_value: Value,
    null_policy: NullPolicy,
    capacity: usize,
}

impl AccumulatorBuilder {
    /// Create a builder with defaults: generic label, base `0`,
    /// [`NullPolicy::ReturnBase`], no preallocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base value.
    pub fn base(mut self, base_value: impl Into<Value>) -> Self {
        self.base_value = base_value.into();
        self
    }

    /// Set the domain label.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the null-input policy.
    pub fn null_policy(mut self, policy: NullPolicy) -> Self {
        self.null_policy = policy;
        self
    }

    /// Preallocate room for `capacity` log items.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Build the accumulator.
    pub fn build(self) -> Accumulator {
        Accumulator::from_parts(
            self.variant,
            self.base_value,
            self.null_policy,
            self.capacity,
        )
    }
}

/// Serializable accumulator configuration
///
/// All fields are optional:
///
/// ```json
/// {
///   "variant": "json_helper",
///   "base_value": 10,
///   "null_policy": "return_base",
///   "capacity": 16
/// }
/// ```
///
/// `base_value` accepts any JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccumulatorConfig {
    /// Label, snake_case or CamelCase; unknown labels become custom labels
    pub variant: Option<String>,
    /// Base value as JSON
    pub base_value: Option<serde_json::Value>,
    /// Null-input policy
    pub null_policy: NullPolicy,
    /// Log preallocation
    pub capacity: usize,
}

/// Upper bound on `capacity` accepted from configuration
pub const MAX_CONFIG_CAPACITY: usize = 1 << 20;

impl AccumulatorConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate and turn this configuration into a builder.
    pub fn into_builder(self) -> Result<AccumulatorBuilder> {
        if self.capacity > MAX_CONFIG_CAPACITY {
            return Err(Error::InvalidConfig(format!(
                "capacity {} exceeds maximum {}",
                self.capacity, MAX_CONFIG_CAPACITY
            )));
        }
        let variant = match self.variant.as_deref() {
            Some(label) => label.parse::<Variant>()?,
            None => Variant::default(),
        };
        let base_value = self.base_value.map(Value::from).unwrap_or_default();
        Ok(AccumulatorBuilder::new()
            .variant(variant)
            .base(base_value)
            .null_policy(self.null_policy)
            .capacity(self.capacity))
    }

    /// Validate and build the accumulator.
    pub fn build(self) -> Result<Accumulator> {
        Ok(self.into_builder()?.build())
    }
}
