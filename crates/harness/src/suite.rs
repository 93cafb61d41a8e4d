//! Comparison suite: the full (variant × write ratio) matrix.

use tracing::{info, warn};

use nvleaf_core::{BenchConfig, Result};
use nvleaf_strategies::{CostModel, StrategyKind};

use crate::driver::BenchmarkDriver;
use crate::report::RunRecord;

/// Run every (kind, ratio) pair and collect the records.
///
/// Each run gets its own driver, strategy instance, and meter; runs are
/// fully independent. A run that fails at measurement time is logged and
/// skipped so it cannot block the rest of the matrix.
///
/// # Errors
///
/// Returns [`nvleaf_core::Error::InvalidConfiguration`] if `base` or any
/// requested write ratio fails validation; configuration problems
/// surface before the first run rather than mid-matrix.
pub fn compare_strategies(
    base: &BenchConfig,
    kinds: &[StrategyKind],
    write_ratios: &[f64],
    model: CostModel,
) -> Result<Vec<RunRecord>> {
    let mut drivers = Vec::with_capacity(write_ratios.len());
    for &write_ratio in write_ratios {
        let config = BenchConfig {
            write_ratio,
            ..*base
        };
        drivers.push(BenchmarkDriver::new(config)?);
    }

    let mut records = Vec::with_capacity(kinds.len() * drivers.len());
    for &kind in kinds {
        for driver in &drivers {
            let mut strategy = kind.build(base.leaf_capacity, model);
            match driver.run(strategy.as_mut()) {
                Ok(result) => {
                    info!(
                        target: "nvleaf::suite",
                        variant = kind.label(),
                        write_ratio = driver.config().write_ratio,
                        throughput = result.throughput_ops_per_sec,
                        word_writes = result.costs.word_writes,
                        "run complete"
                    );
                    records.push(RunRecord::new(
                        kind.label(),
                        driver.config().write_ratio,
                        &result,
                    ));
                }
                Err(e) => {
                    warn!(
                        target: "nvleaf::suite",
                        variant = kind.label(),
                        write_ratio = driver.config().write_ratio,
                        error = %e,
                        "run failed, skipping"
                    );
                }
            }
        }
    }
    Ok(records)
}
