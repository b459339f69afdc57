//! # Boostkit
//!
//! Value accumulators: a fixed base value combined with an ordered log of
//! arbitrary items.
//!
//! ## Quick Start
//!
//! ```
//! use boostkit::prelude::*;
//!
//! let mut acc = Accumulator::new(10);
//!
//! // Numbers add, everything else concatenates
//! assert_eq!(acc.process(5), Value::Int(15));
//! assert_eq!(acc.process("test"), Value::from("10test"));
//!
//! // The log counts appends and resets on clear
//! assert_eq!(acc.add_data("item1"), 1);
//! assert_eq!(acc.data(), &[Value::from("item1")]);
//! assert!(acc.clear());
//! assert!(acc.is_empty());
//! ```
//!
//! ## Labels
//!
//! One [`Accumulator`] type serves every helper domain. The label is set with
//! a named constructor ([`helpers::json_helper`], [`helpers::log_formatter`],
//! ...) or a [`Variant`] and never changes behavior.
//!
//! ## Null inputs
//!
//! [`NullPolicy::ReturnBase`] (the default) makes `process(Value::Null)`
//! return the base value. [`NullPolicy::Concatenate`] renders the null as
//! text instead.

#![warn(missing_docs)]

mod error;
mod types;

pub mod helpers;
pub mod logging;
pub mod prelude;

pub use error::{Error, Result};

// Re-export types
pub use types::*;
