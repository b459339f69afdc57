//! Public types for the Boostkit API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Core value types
pub use boostkit_core::Value;

// Labels and policies
pub use boostkit_core::NullPolicy;
pub use boostkit_core::Variant;

// Accumulator primitive
pub use boostkit_primitives::{
    Accumulator, AccumulatorBuilder, AccumulatorConfig, AccumulatorSnapshot,
};
