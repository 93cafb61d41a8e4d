//! Deterministic seeded workload generation
//!
//! A [`WorkloadGenerator`] turns a seed into a reproducible stream of
//! keys and insert/search decisions. Reproducibility is a hard
//! requirement: cost counters are compared across strategies, so every
//! strategy must face byte-identical op streams for the comparison to
//! mean anything. The op-type decision is drawn before the key, and both
//! come from a single RNG, so the full (kind, key) sequence is a pure
//! function of the seed, the key domain, and the write ratio.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One workload operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadOp {
    /// Insert the key into the leaf
    Insert(u64),
    /// Probe the leaf for the key
    Search(u64),
}

impl WorkloadOp {
    /// The key this operation carries.
    pub fn key(&self) -> u64 {
        match *self {
            WorkloadOp::Insert(key) | WorkloadOp::Search(key) => key,
        }
    }

    /// Whether this operation mutates the leaf.
    pub fn is_write(&self) -> bool {
        matches!(self, WorkloadOp::Insert(_))
    }
}

/// Seeded source of keys and mixed operations.
pub struct WorkloadGenerator {
    rng: StdRng,
    key_dist: Uniform<u64>,
    ratio_dist: Uniform<f64>,
    write_ratio: f64,
}

impl WorkloadGenerator {
    /// Create a generator over the key domain `[1, key_max]`.
    ///
    /// # Panics
    ///
    /// Panics if `key_max` is zero (the driver validates its
    /// configuration before constructing a generator).
    pub fn new(seed: u64, key_max: u64, write_ratio: f64) -> Self {
        assert!(key_max >= 1, "key domain must be non-empty");
        Self {
            rng: StdRng::seed_from_u64(seed),
            key_dist: Uniform::new_inclusive(1, key_max),
            ratio_dist: Uniform::new(0.0, 1.0),
            write_ratio,
        }
    }

    /// Draw the next key, uniform over `[1, key_max]`. Used for prefill.
    pub fn next_key(&mut self) -> u64 {
        self.key_dist.sample(&mut self.rng)
    }

    /// Draw the next mixed operation: insert with probability
    /// `write_ratio`, search otherwise.
    pub fn next_op(&mut self) -> WorkloadOp {
        let is_write = self.ratio_dist.sample(&mut self.rng) < self.write_ratio;
        let key = self.next_key();
        if is_write {
            WorkloadOp::Insert(key)
        } else {
            WorkloadOp::Search(key)
        }
    }
}
