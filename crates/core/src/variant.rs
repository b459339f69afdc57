//! Variant labels
//!
//! A [`Variant`] names the domain an accumulator is used for. All variants
//! share one behavior; the label exists for call-site clarity, logging and
//! snapshots.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Domain label of an accumulator
///
/// Serializes as its plain label string, the same form configuration
/// accepts. Equality and hashing go through [`Variant::name`], so
/// `Custom("json_helper")` equals `JsonHelper`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(into = "String", try_from = "String")]
pub enum Variant {
    /// JSON helper
    JsonHelper,
    /// Log formatter
    LogFormatter,
    /// Complex math helper
    MathComplex,
    /// File I/O helper
    FileIo,
    /// Vector math helper
    VectorMath,
    /// Caller-defined label
    Custom(String),
    /// No label
    #[default]
    Generic,
}

impl Variant {
    /// The five built-in labels, in declaration order
    pub const BUILTIN: [Variant; 5] = [
        Variant::JsonHelper,
        Variant::LogFormatter,
        Variant::MathComplex,
        Variant::FileIo,
        Variant::VectorMath,
    ];

    /// snake_case label
    pub fn name(&self) -> &str {
        match self {
            Variant::JsonHelper => "json_helper",
            Variant::LogFormatter => "log_formatter",
            Variant::MathComplex => "math_complex",
            Variant::FileIo => "file_io",
            Variant::VectorMath => "vector_math",
            Variant::Custom(label) => label,
            Variant::Generic => "generic",
        }
    }

    /// Check if this carries one of the five built-in labels
    pub fn is_builtin(&self) -> bool {
        Variant::BUILTIN.iter().any(|builtin| builtin == self)
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Variant {}

impl Hash for Variant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl From<Variant> for String {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Custom(label) => label,
            builtin => builtin.name().to_string(),
        }
    }
}

impl TryFrom<String> for Variant {
    type Error = Error;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Accepts snake_case (`json_helper`) or CamelCase (`JsonHelper`).
    /// Unknown non-empty labels become `Custom`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidVariant("label must not be empty".to_string()));
        }
        let variant = match trimmed {
            "json_helper" | "JsonHelper" => Variant::JsonHelper,
            "log_formatter" | "LogFormatter" => Variant::LogFormatter,
            "math_complex" | "MathComplex" => Variant::MathComplex,
            "file_io" | "FileIo" => Variant::FileIo,
            "vector_math" | "VectorMath" => Variant::VectorMath,
            "generic" | "Generic" => Variant::Generic,
            other => Variant::Custom(other.to_string()),
        };
        Ok(variant)
    }
}
