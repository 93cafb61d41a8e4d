//! nvleaf — leaf-strategy micro-benchmarks for persistent-memory indexes
//!
//! Five leaf-node update strategies (append-only, in-place sorted,
//! logging, slot-indirect, multi-word-CAS) replay the same seeded mixed
//! read/write workload against a single fixed-capacity leaf. Each run
//! reports throughput plus a synthetic cost profile: word writes,
//! cache-line flushes, and memory fences.
//!
//! # Quick Start
//!
//! ```
//! use nvleaf::{
//!     compare_strategies, BenchConfig, CostModel, StrategyKind,
//! };
//!
//! let config = BenchConfig {
//!     prefill_count: 20,
//!     ops_count: 1000,
//!     ..BenchConfig::default()
//! };
//!
//! let records = compare_strategies(
//!     &config,
//!     &StrategyKind::ALL,
//!     &[0.5, 0.0],
//!     CostModel::Positional,
//! )?;
//!
//! for record in &records {
//!     println!("{}", record.to_csv_row());
//! }
//! # Ok::<(), nvleaf::Error>(())
//! ```
//!
//! # Architecture
//!
//! - [`nvleaf_core`]: cost meter, configuration, errors
//! - [`nvleaf_strategies`]: the [`LeafStrategy`] trait and its five
//!   variants, plus the multi-word update primitive
//! - [`nvleaf_harness`]: workload generator, benchmark driver,
//!   comparison suite, result records
//!
//! The library owns no files and prints nothing; the `nvleaf` binary is
//! the reporting shell around it.

pub use nvleaf_core::*;
pub use nvleaf_harness::*;
pub use nvleaf_strategies::*;
