//! Core types for the nvleaf benchmark harness
//!
//! This crate defines the foundational pieces shared by every layer:
//! - CostMeter / CostSnapshot: the synthetic hardware-cost ledger
//! - BenchConfig: per-run configuration with explicit validation
//! - Error: error type hierarchy
//!
//! Nothing here performs I/O or touches real hardware counters; costs are
//! bookkeeping abstractions recorded by the leaf strategies.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod meter;

pub use config::BenchConfig;
pub use error::{Error, Result};
pub use meter::{CostMeter, CostSnapshot};
