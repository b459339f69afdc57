//! Core types for Boostkit
//!
//! This crate defines the fundamental types used throughout the system:
//! - [`Value`]: dynamic value for base values, inputs and logged items
//! - [`Variant`]: domain label of an accumulator
//! - [`NullPolicy`]: how `process` treats a null input
//! - [`Error`]: core error type

#![warn(missing_docs)]

pub mod error;
pub mod policy;
pub mod value;
pub mod variant;

pub use error::{Error, Result};
pub use policy::NullPolicy;
pub use value::Value;
pub use variant::Variant;
