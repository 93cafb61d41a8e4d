//! Write-optimized leaf with slot-array indirection.
//!
//! Keys are appended in arrival order and never relocated; logical order
//! lives in a small slot array holding indices into the key area. The
//! slot array is word-sized in the cost model, so reordering it costs one
//! word write no matter where the new key lands. Per insert: one write
//! for the key, one for the slot word, a single flush and fence.

use nvleaf_core::CostMeter;

use crate::strategy::LeafStrategy;

/// Leaf that appends keys and keeps ordering in a slot array.
///
/// Capacity is bounded by the slot index width (`u16`).
pub struct SlottedLeaf {
    keys: Vec<u64>,
    /// Indices into `keys`, maintained in key-sorted order.
    slots: Vec<u16>,
    capacity: usize,
}

impl SlottedLeaf {
    /// Create an empty leaf with the given capacity.
    ///
    /// Capacities beyond `u16::MAX` are clamped to keep slot indices
    /// representable.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.min(u16::MAX as usize);
        Self {
            keys: Vec::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Keys in arrival order.
    pub fn keys(&self) -> &[u64] {
        &self.keys
    }

    /// Keys in sorted order, resolved through the slot array.
    pub fn keys_in_order(&self) -> impl Iterator<Item = u64> + '_ {
        self.slots.iter().map(|&s| self.keys[s as usize])
    }
}

impl LeafStrategy for SlottedLeaf {
    fn insert(&mut self, key: u64, meter: &mut CostMeter) {
        if self.keys.len() >= self.capacity {
            return;
        }
        let idx = self.keys.len() as u16;
        self.keys.push(key);

        let pos = self
            .slots
            .partition_point(|&s| self.keys[s as usize] <= key);
        self.slots.insert(pos, idx);

        // Key word plus the single slot-array word.
        meter.record_write(1);
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
        "slotted_leaf"
    }
}
