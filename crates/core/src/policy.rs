//! Null-input policy for `process`

use serde::{Deserialize, Serialize};

/// How an accumulator treats a `Null` process input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NullPolicy {
    /// Return the base value unchanged
    #[default]
    ReturnBase,
    /// Concatenate the base value with the text `null`
    Concatenate,
}

impl NullPolicy {
    /// snake_case name, as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            NullPolicy::ReturnBase => "return_base",
            NullPolicy::Concatenate => "concatenate",
        }
    }
}
