//! Primitives for Boostkit
//!
//! - [`Accumulator`]: base value plus an ordered item log
//! - [`AccumulatorBuilder`] / [`AccumulatorConfig`]: construction and configuration

#![warn(missing_docs)]

pub mod accumulator;
pub mod config;

pub use accumulator::{Accumulator, AccumulatorSnapshot};
pub use config::{AccumulatorBuilder, AccumulatorConfig, MAX_CONFIG_CAPACITY};
