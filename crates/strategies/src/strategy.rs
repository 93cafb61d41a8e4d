//! The leaf-strategy abstraction
//!
//! Every leaf variant exposes the same two-operation contract: `insert`
//! mutates the leaf and records its cost against the meter; `search`
//! answers membership and records nothing (reads cause no wear in the
//! cost model). The trait is object-safe so the comparison suite can
//! drive a heterogeneous set of boxed variants through one loop.
//!
//! # Capacity policy
//!
//! A full leaf silently ignores further inserts and records no cost.
//! There is no tree above the leaf, so there is no split to escalate to;
//! dropping the insert keeps every variant comparable under identical
//! workloads.

use nvleaf_core::CostMeter;

use crate::cost_model::CostModel;
use crate::logging::LoggingLeaf;
use crate::mwcas::MwcasLeaf;
use crate::slotted::SlottedLeaf;
use crate::sorted::SortedLeaf;
use crate::unsorted::UnsortedLeaf;

/// A single fixed-capacity leaf node under test.
///
/// Implementations must uphold:
/// - `insert` on a full leaf is a no-op that records no cost
/// - `search` never mutates the meter
/// - duplicate keys are permitted
pub trait LeafStrategy {
    /// Insert `key`, recording the update's cost against `meter`.
    fn insert(&mut self, key: u64, meter: &mut CostMeter);

    /// Report whether `key` is present. Never records cost; the meter
    /// parameter exists so variants that model read wear could use it.
    fn search(&self, key: u64, meter: &mut CostMeter) -> bool;

    /// Number of keys currently held.
    fn len(&self) -> usize;

    /// Whether the leaf holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fixed capacity of the leaf.
    fn capacity(&self) -> usize;

    /// Stable variant label used in reports.
    fn name(&self) -> &'static str;
}

/// Factory enum over the five leaf variants.
///
/// The comparison suite and the CLI iterate [`StrategyKind::ALL`] and call
/// [`StrategyKind::build`] to get a fresh boxed strategy per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Append-only leaf, minimal writes, linear-scan reads
    Unsorted,
    /// In-place sorted leaf, shift-heavy inserts, binary-search reads
    Sorted,
    /// Sorted leaf with an intent record persisted before each update
    Logging,
    /// Append plus slot-array indirection (write-optimized tree style)
    Slotted,
    /// Append committed through the multi-word update primitive
    /// (lock-free tree style)
    Mwcas,
}

impl StrategyKind {
    /// Every variant, in report order.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Unsorted,
        StrategyKind::Sorted,
        StrategyKind::Logging,
        StrategyKind::Slotted,
        StrategyKind::Mwcas,
    ];

    /// Stable label used in reports and CSV output.
    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::Unsorted => "unsorted_leaf",
            StrategyKind::Sorted => "sorted_leaf",
            StrategyKind::Logging => "logging_leaf",
            StrategyKind::Slotted => "slotted_leaf",
            StrategyKind::Mwcas => "mwcas_leaf",
        }
    }

    /// Construct a fresh leaf of this kind.
    ///
    /// `model` selects the cost-accounting policy for the shift-based
    /// variants; the append-based variants have a single cost shape and
    /// ignore it.
    pub fn build(&self, capacity: usize, model: CostModel) -> Box<dyn LeafStrategy> {
        match self {
            StrategyKind::Unsorted => Box::new(UnsortedLeaf::new(capacity)),
            StrategyKind::Sorted => Box::new(SortedLeaf::new(capacity, model)),
            StrategyKind::Logging => Box::new(LoggingLeaf::new(capacity, model)),
            StrategyKind::Slotted => Box::new(SlottedLeaf::new(capacity)),
            StrategyKind::Mwcas => Box::new(MwcasLeaf::new(capacity)),
        }
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unsorted_leaf" | "unsorted" => Ok(StrategyKind::Unsorted),
            "sorted_leaf" | "sorted" => Ok(StrategyKind::Sorted),
            "logging_leaf" | "logging" => Ok(StrategyKind::Logging),
            "slotted_leaf" | "slotted" => Ok(StrategyKind::Slotted),
            "mwcas_leaf" | "mwcas" => Ok(StrategyKind::Mwcas),
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}
