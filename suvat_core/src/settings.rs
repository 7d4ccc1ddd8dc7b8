//! # Solver Settings
//!
//! Numeric thresholds shared by the validator and the solver set. Settings
//! serialize to plain JSON so a front end can keep them in a config file.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "zero_tolerance": 1e-12,
//!   "consistency_tolerance": 1e-6,
//!   "post_check": true
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{SuvatError, SuvatResult};

/// Default absolute threshold for treating a value as zero
pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-12;

/// Default relative tolerance for the post-solve identity check
pub const DEFAULT_CONSISTENCY_TOLERANCE: f64 = 1e-6;

/// Thresholds used while validating and solving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Values with `|x| <= zero_tolerance` count as zero (denominators, t = 0, s = 0)
    pub zero_tolerance: f64,

    /// Relative tolerance used when checking a solved motion against the identities
    pub consistency_tolerance: f64,

    /// Run the identity check on every solved motion
    pub post_check: bool,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            zero_tolerance: DEFAULT_ZERO_TOLERANCE,
            consistency_tolerance: DEFAULT_CONSISTENCY_TOLERANCE,
            post_check: true,
        }
    }
}

impl SolverSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> SuvatResult<Self> {
        let settings: SolverSettings = serde_json::from_str(json)
            .map_err(|e| SuvatError::invalid_input("settings", e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers and a bool; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Tolerances must be finite and non-negative
    pub fn validate(&self) -> SuvatResult<()> {
        for (name, value) in [
            ("zero_tolerance", self.zero_tolerance),
            ("consistency_tolerance", self.consistency_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SuvatError::invalid_input(
                    "settings",
                    format!("{} must be a non-negative number, got {}", name, value),
                ));
            }
        }
        Ok(())
    }

    /// Whether `x` is zero under this configuration
    #[inline]
    pub fn is_zero(&self, x: f64) -> bool {
        x.abs() <= self.zero_tolerance
    }

    /// Whether `a` and `b` are equal under this configuration
    #[inline]
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        self.is_zero(a - b)
    }
}
