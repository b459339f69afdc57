//! Accumulator primitive implementation
//!
//! A base value paired with an ordered, append-only log of items.
//!
//! ## Design
//!
//! - `base_value` is fixed at construction and never mutated
//! - `process` is a pure function of the base value and its input
//! - `add_data` appends and reports the new log length
//! - `clear` empties the log and always succeeds
//!
//! Every accumulator carries a [`Variant`] label; behavior does not depend on
//! it. Only the [`NullPolicy`] changes what `process` does with a null input.

use boostkit_core::{NullPolicy, Value, Variant};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A base value combined with an ordered log of items.
///
/// # Example
///
/// ```
/// use boostkit_primitives::Accumulator;
/// use boostkit_core::Value;
///
/// let mut acc = Accumulator::new(10);
/// assert_eq!(acc.process(5), Value::Int(15));
/// assert_eq!(acc.process("test"), Value::from("10test"));
///
/// assert_eq!(acc.add_data("item1"), 1);
/// assert!(acc.clear());
/// assert!(acc.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    variant: Variant,
    base_value: Value,
    null_policy: NullPolicy,
    log: Vec<Value>,
}

impl Accumulator {
    /// Create an unlabeled accumulator with an empty log.
    pub fn new(base_value: impl Into<Value>) -> Self {
        Self::with_variant(Variant::Generic, base_value)
    }

    /// Create a labeled accumulator with an empty log.
    pub fn with_variant(variant: Variant, base_value: impl Into<Value>) -> Self {
        Self::from_parts(variant, base_value.into(), NullPolicy::default(), 0)
    }

    pub(crate) fn from_parts(
        variant: Variant,
        base_value: Value,
        null_policy: NullPolicy,
        capacity: usize,
    ) -> Self {
        debug!(
            variant = %variant,
            base_value = %base_value,
            null_policy = null_policy.as_str(),
            "accumulator created"
        );
        Self {
            variant,
            base_value,
            null_policy,
            log: Vec::with_capacity(capacity),
        }
    }

    // =========================================================================
    // Processing
    // =========================================================================

    /// Combine the base value with `input`.
    ///
    /// - `Null` input under [`NullPolicy::ReturnBase`]: the base value.
    /// - Both numeric: their arithmetic sum.
    /// - Otherwise: base text followed by input text, no separator.
    pub fn process(&self, input: impl Into<Value>) -> Value {
        let input = input.into();
        let result = if input.is_null() && self.null_policy == NullPolicy::ReturnBase {
            self.base_value.clone()
        } else {
            self.base_value
                .checked_sum(&input)
                .unwrap_or_else(|| self.base_value.concat(&input))
        };
        trace!(variant = %self.variant, input = %input, result = %result, "processed");
        result
    }

    /// `process` each input in order.
    pub fn process_all<I>(&self, inputs: I) -> Vec<Value>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        inputs.into_iter().map(|input| self.process(input)).collect()
    }

    // =========================================================================
    // Log Mutation
    // =========================================================================

    /// Append `item` to the log and return the new log length.
    pub fn add_data(&mut self, item: impl Into<Value>) -> usize {
        self.log.push(item.into());
        let len = self.log.len();
        debug!(variant = %self.variant, len, "item appended");
        len
    }

    /// Append every item in order and return the final log length.
    pub fn extend_data<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let before = self.log.len();
        self.log.extend(items.into_iter().map(Into::into));
        debug!(
            variant = %self.variant,
            appended = self.log.len() - before,
            len = self.log.len(),
            "items appended"
        );
        self.log.len()
    }

    /// Empty the log. Always returns `true`.
    pub fn clear(&mut self) -> bool {
        let dropped = self.log.len();
        self.log.clear();
        debug!(variant = %self.variant, dropped, "log cleared");
        true
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The base value fixed at construction
    pub fn base_value(&self) -> &Value {
        &self.base_value
    }

    /// The logged items, in insertion order
    pub fn data(&self) -> &[Value] {
        &self.log
    }

    /// Number of logged items
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Iterate over logged items in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.log.iter()
    }

    /// Domain label
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Domain label as text
    pub fn label(&self) -> &str {
        self.variant.name()
    }

    /// Null-input policy
    pub fn null_policy(&self) -> NullPolicy {
        self.null_policy
    }

    /// Capture the current state for display or diagnostics.
    pub fn snapshot(&self) -> AccumulatorSnapshot {
        AccumulatorSnapshot {
            variant: self.variant.clone(),
            base_value: self.base_value.clone(),
            null_policy: self.null_policy,
            data: self.log.clone(),
        }
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new(Value::default())
    }
}

impl<'a> IntoIterator for &'a Accumulator {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Point-in-time copy of an accumulator's state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccumulatorSnapshot {
    /// Domain label
    pub variant: Variant,
    /// Base value
    pub base_value: Value,
    /// Null-input policy
    pub null_policy: NullPolicy,
    /// Logged items in insertion order
    pub data: Vec<Value>,
}

// ============================================================================
// Tests
// ============================================================================
