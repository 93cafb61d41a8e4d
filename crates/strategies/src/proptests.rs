use proptest::prelude::*;

use nvleaf_core::CostMeter;

use crate::cost_model::CostModel;
use crate::strategy::{LeafStrategy, StrategyKind};

/// Insert `keys` into a fresh leaf of each kind and hand the populated
/// leaves to `check`.
fn for_each_variant(keys: &[u64], capacity: usize, check: impl Fn(Box<dyn LeafStrategy>, &[u64])) {
    for kind in StrategyKind::ALL {
        let mut leaf = kind.build(capacity, CostModel::Positional);
        let mut meter = CostMeter::new();
        for &key in keys {
            leaf.insert(key, &mut meter);
        }
        check(leaf, keys);
    }
}

proptest! {
    #[test]
    fn sorted_variants_stay_ordered(keys in proptest::collection::vec(1u64..1_000_000, 0..64)) {
        for model in [CostModel::Positional, CostModel::Coefficient] {
            let mut sorted = crate::SortedLeaf::new(64, model);
            let mut logging = crate::LoggingLeaf::new(64, model);
            let mut meter = CostMeter::new();
            let mut reference: Vec<u64> = Vec::new();
            for &key in &keys {
                sorted.insert(key, &mut meter);
                logging.insert(key, &mut meter);
                reference.push(key);
                // The sequence must be non-decreasing after every insert.
                prop_assert!(sorted.keys().windows(2).all(|w| w[0] <= w[1]));
                prop_assert!(logging.keys().windows(2).all(|w| w[0] <= w[1]));
                prop_assert!(sorted.search(key, &mut meter));
            }
            reference.sort_unstable();
            prop_assert_eq!(sorted.keys(), reference.as_slice());
            prop_assert_eq!(logging.keys(), reference.as_slice());
        }
    }

    #[test]
    fn inserted_keys_are_found_in_every_variant(
        keys in proptest::collection::vec(1u64..1_000_000, 1..32),
        probe in 1_000_001u64..2_000_000,
    ) {
        for_each_variant(&keys, 32, |leaf, keys| {
            let mut meter = CostMeter::new();
            for &key in keys {
                assert!(leaf.search(key, &mut meter), "{} lost {}", leaf.name(), key);
            }
            // The probe key is outside the inserted domain.
            assert!(!leaf.search(probe, &mut meter), "{} invented {}", leaf.name(), probe);
            assert_eq!(meter.snapshot(), CostMeter::new().snapshot());
        });
    }

    #[test]
    fn capacity_bounds_hold_in_every_variant(keys in proptest::collection::vec(1u64..1_000, 0..48)) {
        for_each_variant(&keys, 16, |leaf, keys| {
            assert_eq!(leaf.len(), keys.len().min(16), "{}", leaf.name());
        });
    }
}
