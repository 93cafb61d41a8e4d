//! Leaf-node update strategies for persistent-memory-resident indexes
//!
//! Five variants of a single fixed-capacity leaf, each modeling how one
//! family of persistent index structures updates its leaves:
//!
//! - [`UnsortedLeaf`]: append-only, minimal writes
//! - [`SortedLeaf`]: in-place sorted, shift-heavy inserts
//! - [`LoggingLeaf`]: sorted with a persisted intent record per update
//! - [`SlottedLeaf`]: append plus slot-array indirection
//!   (write-optimized tree style)
//! - [`MwcasLeaf`]: appends committed through a multi-word atomic update
//!   descriptor (lock-free tree style)
//!
//! All variants implement [`LeafStrategy`] and record their update costs
//! against an explicitly passed [`nvleaf_core::CostMeter`]. The
//! [`CostModel`] policy selects between positional (shift-count) and
//! fixed-coefficient pricing for the shift-based variants.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cost_model;
pub mod logging;
pub mod mwcas;
pub mod slotted;
pub mod sorted;
pub mod strategy;
pub mod unsorted;

#[cfg(test)]
mod proptests;

pub use cost_model::CostModel;
pub use logging::LoggingLeaf;
pub use mwcas::{MwcasDescriptor, MwcasLeaf};
pub use slotted::SlottedLeaf;
pub use sorted::SortedLeaf;
pub use strategy::{LeafStrategy, StrategyKind};
pub use unsorted::UnsortedLeaf;
