//! # Error Types
//!
//! Structured error types for suvat_core. Every solving call either returns
//! its two computed quantities or exactly one of these errors; there is no
//! ambient error state and no partially-computed result.
//!
//! ## Example
//!
//! ```rust
//! use suvat_core::errors::{SuvatError, SuvatResult};
//!
//! fn require_positive_time(t: f64) -> SuvatResult<()> {
//!     if t < 0.0 {
//!         return Err(SuvatError::invalid_input(
//!             "negative-time",
//!             format!("time must not be negative, got {}", t),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_positive_time(-1.0).unwrap_err().is_contradiction());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for suvat_core operations
pub type SuvatResult<T> = Result<T, SuvatError>;

/// Structured error type for solving operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SuvatError {
    /// The supplied values contradict each other (or the solved result does)
    #[error("Invalid input ({check}): {reason}")]
    InvalidInput { check: String, reason: String },

    /// The input is self-consistent but every formula in the branch degenerates
    #[error("Cannot solve {combination}: {reason}")]
    Unsolvable { combination: String, reason: String },

    /// The generic dispatcher needs exactly three known quantities
    #[error("Exactly three quantities must be known, got {known}")]
    WrongKnownCount { known: usize },

    /// A supplied value is NaN or infinite
    #[error("Non-finite value for '{quantity}': {value}")]
    NonFinite { quantity: String, value: String },
}

impl SuvatError {
    /// Create an InvalidInput error
    pub fn invalid_input(check: impl Into<String>, reason: impl Into<String>) -> Self {
        SuvatError::InvalidInput {
            check: check.into(),
            reason: reason.into(),
        }
    }

    /// Create an Unsolvable error
    pub fn unsolvable(combination: impl Into<String>, reason: impl Into<String>) -> Self {
        SuvatError::Unsolvable {
            combination: combination.into(),
            reason: reason.into(),
        }
    }

    /// Create a NonFinite error
    pub fn non_finite(quantity: impl Into<String>, value: f64) -> Self {
        SuvatError::NonFinite {
            quantity: quantity.into(),
            value: value.to_string(),
        }
    }

    /// True when the input itself is contradictory or unusable.
    ///
    /// Non-finite values are treated as invalid input.
    pub fn is_contradiction(&self) -> bool {
        matches!(self, SuvatError::InvalidInput { .. } | SuvatError::NonFinite { .. })
    }

    /// True when the input is consistent but under-determined
    pub fn is_degenerate(&self) -> bool {
        matches!(self, SuvatError::Unsolvable { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SuvatError::InvalidInput { .. } => "INVALID_INPUT",
            SuvatError::Unsolvable { .. } => "UNSOLVABLE",
            SuvatError::WrongKnownCount { .. } => "WRONG_KNOWN_COUNT",
            SuvatError::NonFinite { .. } => "NON_FINITE",
        }
    }
}
