//! # Motion Values
//!
//! `Motion` holds all five quantities of a solved scenario. `MotionInput` is
//! the generic, JSON-friendly form where any quantity may be unknown.
//!
//! ## JSON Example
//!
//! ```json
//! { "s": 100.0, "u": 0.0, "v": 20.0, "a": null, "t": null }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{SuvatError, SuvatResult};
use crate::quantity::{KnownSet, Quantity};

/// The five quantities of one uniformly accelerated motion.
///
/// Quantities that are not known yet are carried as `0.0` placeholders; the
/// accompanying `KnownSet` says which values are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Motion {
    /// Displacement
    pub s: f64,
    /// Initial velocity
    pub u: f64,
    /// Final velocity
    pub v: f64,
    /// Acceleration
    pub a: f64,
    /// Time
    pub t: f64,
}

impl Motion {
    pub fn new(s: f64, u: f64, v: f64, a: f64, t: f64) -> Self {
        Motion { s, u, v, a, t }
    }

    /// Build a motion from three values in the order given by `quantities`;
    /// the remaining two stay at zero.
    pub fn from_known(quantities: [Quantity; 3], values: [f64; 3]) -> Self {
        let mut motion = Motion::default();
        for (q, value) in quantities.into_iter().zip(values) {
            motion.set(q, value);
        }
        motion
    }

    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Displacement => self.s,
            Quantity::InitialVelocity => self.u,
            Quantity::FinalVelocity => self.v,
            Quantity::Acceleration => self.a,
            Quantity::Time => self.t,
        }
    }

    pub fn set(&mut self, quantity: Quantity, value: f64) {
        match quantity {
            Quantity::Displacement => self.s = value,
            Quantity::InitialVelocity => self.u = value,
            Quantity::FinalVelocity => self.v = value,
            Quantity::Acceleration => self.a = value,
            Quantity::Time => self.t = value,
        }
    }

    /// Reject NaN or infinite values among the `known` quantities
    pub fn ensure_finite(&self, known: KnownSet) -> SuvatResult<()> {
        for q in known.iter() {
            let value = self.get(q);
            if !value.is_finite() {
                return Err(SuvatError::non_finite(q.symbol(), value));
            }
        }
        Ok(())
    }
}

/// Generic solver input: any subset of the five quantities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MotionInput {
    #[serde(default)]
    pub s: Option<f64>,
    #[serde(default)]
    pub u: Option<f64>,
    #[serde(default)]
    pub v: Option<f64>,
    #[serde(default)]
    pub a: Option<f64>,
    #[serde(default)]
    pub t: Option<f64>,
}

impl MotionInput {
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Displacement => self.s,
            Quantity::InitialVelocity => self.u,
            Quantity::FinalVelocity => self.v,
            Quantity::Acceleration => self.a,
            Quantity::Time => self.t,
        }
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, quantity: Quantity, value: f64) -> Self {
        match quantity {
            Quantity::Displacement => self.s = Some(value),
            Quantity::InitialVelocity => self.u = Some(value),
            Quantity::FinalVelocity => self.v = Some(value),
            Quantity::Acceleration => self.a = Some(value),
            Quantity::Time => self.t = Some(value),
        }
        self
    }

    /// Which quantities carry a value
    pub fn known_set(&self) -> KnownSet {
        Quantity::ALL
            .into_iter()
            .filter(|q| self.get(*q).is_some())
            .fold(KnownSet::empty(), KnownSet::with)
    }
}
