//! Append-only leaf: minimal write amplification, linear-scan reads.

use nvleaf_core::CostMeter;

use crate::strategy::LeafStrategy;

/// Leaf that appends each key at the next free slot.
///
/// One word write per insert, flushed and fenced for persistence. Reads
/// pay with a full scan instead of extra writes.
pub struct UnsortedLeaf {
    keys: Vec<u64>,
    capacity: usize,
}

impl UnsortedLeaf {
    /// Create an empty leaf with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Keys in arrival order.
    pub fn keys(&self) -> &[u64] {
        &self.keys
    }
}

impl LeafStrategy for UnsortedLeaf {
    fn insert(&mut self, key: u64, meter: &mut CostMeter) {
        if self.keys.len() >= self.capacity {
            return;
        }
        self.keys.push(key);
        meter.record_write(1);
        meter.record_flush();
        meter.record_fence();
    }

    fn search(&self, key: u64, _meter: &mut CostMeter) -> bool {
        self.keys.contains(&key)
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn name(&self) -> &'static str {
        "unsorted_leaf"
    }
}
