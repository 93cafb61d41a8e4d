//! Cost-accounting policy for shift-based inserts
//!
//! Two philosophies exist for pricing a sorted insert:
//!
//! - **Positional**: one word write per key actually relocated to keep the
//!   sequence ordered, plus one for the new key. Cost tracks algorithmic
//!   work, so a nearly full leaf is more expensive than an empty one.
//! - **Coefficient**: a fixed per-insert bundle of writes/flushes/fences
//!   regardless of leaf state, as used in coarse mixed-workload
//!   simulations where only the relative ordering of variants matters.
//!
//! Both disagree on what "realistic" means, so the choice is an explicit
//! policy selected at strategy construction rather than baked in. Only the
//! shift-based variants ([`SortedLeaf`](crate::SortedLeaf) and
//! [`LoggingLeaf`](crate::LoggingLeaf)) are sensitive to it; the
//! append-based variants relocate nothing and have one cost shape.

/// Policy selecting how shift-based inserts are priced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CostModel {
    /// Price each insert by the number of keys it relocates.
    #[default]
    Positional,
    /// Price each insert with fixed per-variant coefficients.
    Coefficient,
}

impl std::fmt::Display for CostModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostModel::Positional => write!(f, "positional"),
            CostModel::Coefficient => write!(f, "coefficient"),
        }
    }
}

impl std::str::FromStr for CostModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positional" => Ok(CostModel::Positional),
            "coefficient" => Ok(CostModel::Coefficient),
            other => Err(format!("unknown cost model: {other}")),
        }
    }
}
