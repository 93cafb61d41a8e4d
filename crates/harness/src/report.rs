//! Structured run records and their text renderings.
//!
//! One [`RunRecord`] per (variant, write ratio) run. Rendering here is
//! string-only; writing files or printing to the console is the
//! reporter's job, not this crate's.

use serde::{Deserialize, Serialize};

use crate::driver::BenchmarkResult;

/// CSV header matching [`RunRecord::to_csv_row`].
pub const CSV_HEADER: &str = "variant,write_ratio,ops,throughput_ops_sec,Nw,Nclf,Nmf";

/// Result of one (variant, write ratio) benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Strategy label, e.g. `sorted_leaf`
    pub variant: String,
    /// Fraction of timed operations that were inserts
    pub write_ratio: f64,
    /// Timed operations executed
    pub ops: u64,
    /// Timed-phase throughput
    pub throughput_ops_per_sec: f64,
    /// Simulated word writes, prefill included
    pub word_writes: u64,
    /// Simulated cache-line flushes, prefill included
    pub cache_line_flushes: u64,
    /// Simulated memory fences, prefill included
    pub memory_fences: u64,
}

impl RunRecord {
    /// Combine a driver result with its run labels.
    pub fn new(variant: &str, write_ratio: f64, result: &BenchmarkResult) -> Self {
        Self {
            variant: variant.to_string(),
            write_ratio,
            ops: result.ops,
            throughput_ops_per_sec: result.throughput_ops_per_sec,
            word_writes: result.costs.word_writes,
            cache_line_flushes: result.costs.cache_line_flushes,
            memory_fences: result.costs.memory_fences,
        }
    }

    /// Render one CSV row in [`CSV_HEADER`] column order.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{:.2},{},{},{}",
            self.variant,
            self.write_ratio,
            self.ops,
            self.throughput_ops_per_sec,
            self.word_writes,
            self.cache_line_flushes,
            self.memory_fences
        )
    }
}

/// Render a full CSV document, header row included.
pub fn to_csv(records: &[RunRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&record.to_csv_row());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nvleaf_core::CostSnapshot;

    fn sample_record() -> RunRecord {
        RunRecord::new(
            "sorted_leaf",
            0.5,
            &BenchmarkResult {
                ops: 100_000,
                throughput_ops_per_sec: 1_234_567.891,
                costs: CostSnapshot {
                    word_writes: 42,
                    cache_line_flushes: 7,
                    memory_fences: 3,
                },
            },
        )
    }

    #[test]
    fn test_csv_row_column_order() {
        let row = sample_record().to_csv_row();
        assert_eq!(row, "sorted_leaf,0.5,100000,1234567.89,42,7,3");
    }

    #[test]
    fn test_csv_document_has_header() {
        let doc = to_csv(&[sample_record()]);
        let mut lines = doc.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_csv_of_no_records_is_header_only() {
        assert_eq!(to_csv(&[]), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: RunRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
