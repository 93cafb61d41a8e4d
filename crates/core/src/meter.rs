//! Synthetic persistent-memory cost accounting
//!
//! The harness never touches hardware counters. Strategies describe the
//! cost of their updates against an abstract ledger of three quantities:
//! word writes, cache-line flushes, and memory fences. The ledger is an
//! explicitly passed value owned by exactly one benchmark run, which keeps
//! independent runs (and any future parallelization across runs) free of
//! shared mutable state.
//!
//! Counters are additive and never decremented. Reads record nothing.

use serde::{Deserialize, Serialize};

/// Additive counter triple threaded through every strategy operation.
///
/// One meter per benchmark run; the driver constructs a fresh one for
/// each run and snapshots it into the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostMeter {
    word_writes: u64,
    cache_line_flushes: u64,
    memory_fences: u64,
}

impl CostMeter {
    /// Create a meter with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `words` simulated word writes.
    pub fn record_write(&mut self, words: u64) {
        self.word_writes += words;
    }

    /// Record one simulated cache-line flush.
    pub fn record_flush(&mut self) {
        self.cache_line_flushes += 1;
    }

    /// Record one simulated memory fence / durability barrier.
    pub fn record_fence(&mut self) {
        self.memory_fences += 1;
    }

    /// Total word writes recorded so far.
    pub fn word_writes(&self) -> u64 {
        self.word_writes
    }

    /// Total cache-line flushes recorded so far.
    pub fn cache_line_flushes(&self) -> u64 {
        self.cache_line_flushes
    }

    /// Total memory fences recorded so far.
    pub fn memory_fences(&self) -> u64 {
        self.memory_fences
    }

    /// Immutable copy of the current totals.
    pub fn snapshot(&self) -> CostSnapshot {
        CostSnapshot {
            word_writes: self.word_writes,
            cache_line_flushes: self.cache_line_flushes,
            memory_fences: self.memory_fences,
        }
    }
}

/// Point-in-time copy of a meter's totals.
///
/// Comparable with `==`, which is how the determinism tests check that two
/// runs with the same seed produce identical cost profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSnapshot {
    /// Simulated word writes
    pub word_writes: u64,
    /// Simulated cache-line flushes
    pub cache_line_flushes: u64,
    /// Simulated memory fences
    pub memory_fences: u64,
}
