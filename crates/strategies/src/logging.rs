//! Sorted leaf with undo/redo-style logging.
//!
//! Before touching the node in place, each insert persists a small intent
//! record (node id, op type, key, position: four words in the cost
//! model), flushed and fenced so the update is discoverable after a
//! crash. The in-place shift then proceeds exactly like the plain sorted
//! leaf, followed by a second flush + fence for the updated node.

use nvleaf_core::CostMeter;

use crate::cost_model::CostModel;
use crate::sorted::insert_in_order;
use crate::strategy::LeafStrategy;

/// Words in the simulated intent record.
const LOG_RECORD_WORDS: u64 = 4;

/// Fixed per-insert coefficients under [`CostModel::Coefficient`]:
/// the sorted-leaf bundle plus logging overhead.
const LOGGING_COEF_WRITES: u64 = 8;
const LOGGING_COEF_FLUSHES: u64 = 4;
const LOGGING_COEF_FENCES: u64 = 2;

/// Sorted leaf guarded by a write-ahead intent record.
pub struct LoggingLeaf {
    keys: Vec<u64>,
    capacity: usize,
    model: CostModel,
}

impl LoggingLeaf {
    /// Create an empty leaf with the given capacity and cost policy.
    pub fn new(capacity: usize, model: CostModel) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            capacity,
            model,
        }
    }

    /// Keys in non-decreasing order.
    pub fn keys(&self) -> &[u64] {
        &self.keys
    }
}

impl LeafStrategy for LoggingLeaf {
    fn insert(&mut self, key: u64, meter: &mut CostMeter) {
        if self.keys.len() >= self.capacity {
            return;
        }
        match self.model {
            CostModel::Positional => {
                // Intent record first: durable before any word changes in place.
                meter.record_write(LOG_RECORD_WORDS);
                meter.record_flush();
                meter.record_fence();

                let shifted = insert_in_order(&mut self.keys, key);
                if shifted > 0 {
                    meter.record_write(shifted);
                }
                meter.record_write(1);

                meter.record_flush();
                meter.record_fence();
            }
            CostModel::Coefficient => {
                insert_in_order(&mut self.keys, key);
                meter.record_write(LOGGING_COEF_WRITES);
                for _ in 0..LOGGING_COEF_FLUSHES {
                    meter.record_flush();
                }
                for _ in 0..LOGGING_COEF_FENCES {
                    meter.record_fence();
                }
            }
        }
    }

    fn search(&self, key: u64, _meter: &mut CostMeter) -> bool {
        self.keys.binary_search(&key).is_ok()
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn name(&self) -> &'static str {
        "logging_leaf"
    }
}
