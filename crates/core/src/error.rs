//! Error types for nvleaf
//!
//! The error surface is deliberately narrow: the harness is a
//! deterministic, single-threaded computation, so the only failures are
//! caller-input errors caught at construction and degenerate clock
//! readings caught when throughput is computed.
//!
//! Inserting into a full leaf is *not* an error. Every strategy treats it
//! as a silent no-op that records no cost; that policy is part of the
//! benchmark contract and is covered by the conformance tests.

use thiserror::Error;

/// Result type alias for nvleaf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the benchmark harness
#[derive(Debug, Error)]
pub enum Error {
    /// Caller-supplied configuration is unusable (write ratio outside
    /// [0, 1], zero operation count, empty key domain, zero capacity).
    /// Rejected at driver construction rather than degrading silently.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Which constraint was violated
        reason: String,
    },

    /// The timed phase measured a non-positive duration, so throughput
    /// cannot be computed without producing infinity or NaN.
    #[error("degenerate timing: timed phase measured {elapsed_secs}s")]
    Measurement {
        /// The offending elapsed time in seconds
        elapsed_secs: f64,
    },
}

impl Error {
    /// Shorthand for an [`Error::InvalidConfiguration`] with the given reason.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
