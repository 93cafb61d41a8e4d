//! Benchmark harness for the nvleaf leaf strategies
//!
//! Three layers on top of the strategy crate:
//! - [`workload`]: deterministic seeded key/op streams
//! - [`driver`]: the two-phase (prefill, timed) benchmark protocol
//! - [`suite`] and [`report`]: the (variant × write ratio) comparison
//!   matrix and its structured result records
//!
//! The harness owns no files and prints nothing; rendering lives with
//! the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod driver;
pub mod report;
pub mod suite;
pub mod workload;

pub use driver::{BenchmarkDriver, BenchmarkResult};
pub use report::{to_csv, RunRecord, CSV_HEADER};
pub use suite::compare_strategies;
pub use workload::{WorkloadGenerator, WorkloadOp};
