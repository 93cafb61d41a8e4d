//! Benchmark driver: prefill, timed phase, throughput.
//!
//! A driver owns a validated [`BenchConfig`] and executes runs against
//! caller-supplied leaf instances. Each run gets a fresh meter and a
//! fresh generator; the caller must supply a fresh leaf (the comparison
//! suite builds one per run via `StrategyKind`), so no mutable state
//! survives between runs.

use std::time::Instant;

use tracing::debug;

use nvleaf_core::{BenchConfig, CostMeter, CostSnapshot, Error, Result};
use nvleaf_strategies::LeafStrategy;
use serde::{Deserialize, Serialize};

use crate::workload::{WorkloadGenerator, WorkloadOp};

/// Outcome of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Operations executed in the timed phase
    pub ops: u64,
    /// Timed-phase operations per wall-clock second
    pub throughput_ops_per_sec: f64,
    /// Final cost totals covering prefill and timed phases
    pub costs: CostSnapshot,
}

/// Executes the two-phase benchmark protocol for one configuration.
pub struct BenchmarkDriver {
    config: BenchConfig,
}

impl BenchmarkDriver {
    /// Create a driver, rejecting unusable configurations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the config fails
    /// validation.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration this driver runs.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run prefill plus the timed mixed phase against `strategy`.
    ///
    /// The op list is materialized before the timer starts so the timed
    /// window contains nothing but strategy calls. Search results are
    /// discarded; reads exist to shape the mix, not to assert membership.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Measurement`] if the monotonic clock reports a
    /// non-positive elapsed time for the timed phase.
    pub fn run(&self, strategy: &mut dyn LeafStrategy) -> Result<BenchmarkResult> {
        let cfg = &self.config;
        let mut meter = CostMeter::new();
        let mut workload = WorkloadGenerator::new(cfg.seed, cfg.key_max, cfg.write_ratio);

        debug!(
            target: "nvleaf::driver",
            strategy = strategy.name(),
            prefill = cfg.prefill_count,
            "prefill phase"
        );
        for _ in 0..cfg.prefill_count {
            let key = workload.next_key();
            strategy.insert(key, &mut meter);
        }

        let ops: Vec<WorkloadOp> = (0..cfg.ops_count).map(|_| workload.next_op()).collect();

        debug!(
            target: "nvleaf::driver",
            strategy = strategy.name(),
            ops = cfg.ops_count,
            write_ratio = cfg.write_ratio,
            "timed phase"
        );
        let start = Instant::now();
        for op in &ops {
            match *op {
                WorkloadOp::Insert(key) => strategy.insert(key, &mut meter),
                WorkloadOp::Search(key) => {
                    let _ = strategy.search(key, &mut meter);
                }
            }
        }
        let elapsed_secs = start.elapsed().as_secs_f64();

        if elapsed_secs <= 0.0 {
            return Err(Error::Measurement { elapsed_secs });
        }

        Ok(BenchmarkResult {
            ops: cfg.ops_count,
            throughput_ops_per_sec: cfg.ops_count as f64 / elapsed_secs,
            costs: meter.snapshot(),
        })
    }
}
