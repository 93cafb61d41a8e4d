//! Benchmark run configuration
//!
//! A [`BenchConfig`] describes one benchmark run: how many keys are
//! prefilled into the leaf before timing starts, how many timed
//! operations follow, the insert/search mix, the seeded key domain, and
//! the leaf capacity. Validation happens explicitly via
//! [`BenchConfig::validate`]; the driver rejects unusable configurations
//! at construction instead of degrading silently.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for a single benchmark run.
///
/// Defaults mirror the reference mixed-workload setup: a leaf prefilled
/// with 5000 keys (capped by leaf capacity), 100_000 timed operations at
/// a 50% write ratio over the key domain `[1, 1e9]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Keys inserted before the timed phase (untimed, cost still accrues)
    pub prefill_count: u64,
    /// Operations executed in the timed phase
    pub ops_count: u64,
    /// Fraction of timed operations that are inserts, in [0, 1]
    pub write_ratio: f64,
    /// Seed for the workload generator; same seed, same op stream
    pub seed: u64,
    /// Keys are drawn uniformly from `[1, key_max]`
    pub key_max: u64,
    /// Fixed capacity of the leaf under test
    pub leaf_capacity: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            prefill_count: 5000,
            ops_count: 100_000,
            write_ratio: 0.5,
            seed: 123,
            key_max: 1_000_000_000,
            leaf_capacity: 128,
        }
    }
}

impl BenchConfig {
    /// Check every constraint, returning the first violation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the write ratio is not a
    /// finite value in [0, 1], or if `ops_count`, `key_max`, or
    /// `leaf_capacity` is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.write_ratio.is_finite() || !(0.0..=1.0).contains(&self.write_ratio) {
            return Err(Error::invalid_config(format!(
                "write_ratio must be within [0, 1], got {}",
                self.write_ratio
            )));
        }
        if self.ops_count == 0 {
            return Err(Error::invalid_config("ops_count must be positive"));
        }
        if self.key_max == 0 {
            return Err(Error::invalid_config("key_max must be positive"));
        }
        if self.leaf_capacity == 0 {
            return Err(Error::invalid_config("leaf_capacity must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BenchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_write_ratio_above_one() {
        let config = BenchConfig {
            write_ratio: 1.5,
            ..BenchConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("write_ratio"));
    }

    #[test]
    fn test_rejects_negative_write_ratio() {
        let config = BenchConfig {
            write_ratio: -0.1,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_write_ratio() {
        let config = BenchConfig {
            write_ratio: f64::NAN,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_boundary_write_ratios_are_valid() {
        for ratio in [0.0, 1.0] {
            let config = BenchConfig {
                write_ratio: ratio,
                ..BenchConfig::default()
            };
            assert!(config.validate().is_ok(), "ratio {} should be valid", ratio);
        }
    }

    #[test]
    fn test_rejects_zero_ops() {
        let config = BenchConfig {
            ops_count: 0,
            ..BenchConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ops_count"));
    }

    #[test]
    fn test_rejects_zero_key_max() {
        let config = BenchConfig {
            key_max: 0,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = BenchConfig {
            leaf_capacity: 0,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_prefill_is_valid() {
        let config = BenchConfig {
            prefill_count: 0,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = BenchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: BenchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
