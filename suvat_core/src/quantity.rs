//! # Quantities and Combinations
//!
//! The five SUVAT quantities, the per-call set of which ones are known, and the
//! ten ways of choosing three known quantities out of five.
//!
//! `KnownSet` is a plain `Copy` value passed into the validator and solver; it
//! is never stored anywhere outside a single call.
//!
//! ## Example
//!
//! ```rust
//! use suvat_core::quantity::{Combination, KnownSet, Quantity};
//!
//! let known = KnownSet::from_quantities(&[
//!     Quantity::Displacement,
//!     Quantity::InitialVelocity,
//!     Quantity::FinalVelocity,
//! ]);
//! assert_eq!(Combination::from_known(known), Some(Combination::At));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Quantity
// ============================================================================

/// One of the five scalar quantities of uniformly accelerated motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// s - signed displacement
    Displacement,
    /// u - signed velocity at t = 0
    InitialVelocity,
    /// v - signed velocity at time t
    FinalVelocity,
    /// a - signed constant acceleration
    Acceleration,
    /// t - elapsed time (t >= 0)
    Time,
}

impl Quantity {
    /// All quantities in s, u, v, a, t order
    pub const ALL: [Quantity; 5] = [
        Quantity::Displacement,
        Quantity::InitialVelocity,
        Quantity::FinalVelocity,
        Quantity::Acceleration,
        Quantity::Time,
    ];

    /// Conventional single-letter symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Quantity::Displacement => "s",
            Quantity::InitialVelocity => "u",
            Quantity::FinalVelocity => "v",
            Quantity::Acceleration => "a",
            Quantity::Time => "t",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Displacement => "displacement",
            Quantity::InitialVelocity => "initial velocity",
            Quantity::FinalVelocity => "final velocity",
            Quantity::Acceleration => "acceleration",
            Quantity::Time => "time",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Quantity::Displacement => 1 << 0,
            Quantity::InitialVelocity => 1 << 1,
            Quantity::FinalVelocity => 1 << 2,
            Quantity::Acceleration => 1 << 3,
            Quantity::Time => 1 << 4,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// KnownSet
// ============================================================================

/// Immutable set of the quantities supplied to a single solving call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KnownSet(u8);

impl KnownSet {
    /// The empty set
    pub const fn empty() -> Self {
        KnownSet(0)
    }

    /// Build a set from a slice of quantities (duplicates are ignored)
    pub fn from_quantities(quantities: &[Quantity]) -> Self {
        quantities.iter().fold(KnownSet::empty(), |set, q| set.with(*q))
    }

    /// Return a copy of this set that also contains `quantity`
    #[must_use]
    pub fn with(self, quantity: Quantity) -> Self {
        KnownSet(self.0 | quantity.bit())
    }

    pub fn contains(&self, quantity: Quantity) -> bool {
        self.0 & quantity.bit() != 0
    }

    /// Number of known quantities
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate known quantities in s, u, v, a, t order
    pub fn iter(&self) -> impl Iterator<Item = Quantity> + '_ {
        Quantity::ALL.into_iter().filter(move |q| self.contains(*q))
    }
}

impl fmt::Display for KnownSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<&str> = self.iter().map(|q| q.symbol()).collect();
        write!(f, "{{{}}}", symbols.join(","))
    }
}

// ============================================================================
// Combination
// ============================================================================

/// The ten known-triple combinations, named by the two quantities computed.
///
/// | Variant | Known | Computes |
/// |---------|-------|----------|
/// | `At` | s, u, v | a, t |
/// | `Vt` | s, u, a | v, t |
/// | `Va` | s, u, t | v, a |
/// | `Ut` | s, v, a | u, t |
/// | `Ua` | s, v, t | u, a |
/// | `Uv` | s, a, t | u, v |
/// | `St` | u, v, a | s, t |
/// | `Sa` | u, v, t | s, a |
/// | `Sv` | u, a, t | s, v |
/// | `Su` | v, a, t | s, u |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combination {
    At,
    Vt,
    Va,
    Ut,
    Ua,
    Uv,
    St,
    Sa,
    Sv,
    Su,
}

impl Combination {
    pub const ALL: [Combination; 10] = [
        Combination::At,
        Combination::Vt,
        Combination::Va,
        Combination::Ut,
        Combination::Ua,
        Combination::Uv,
        Combination::St,
        Combination::Sa,
        Combination::Sv,
        Combination::Su,
    ];

    /// The three supplied quantities, in argument order
    pub fn known_quantities(&self) -> [Quantity; 3] {
        use Quantity::*;
        match self {
            Combination::At => [Displacement, InitialVelocity, FinalVelocity],
            Combination::Vt => [Displacement, InitialVelocity, Acceleration],
            Combination::Va => [Displacement, InitialVelocity, Time],
            Combination::Ut => [Displacement, FinalVelocity, Acceleration],
            Combination::Ua => [Displacement, FinalVelocity, Time],
            Combination::Uv => [Displacement, Acceleration, Time],
            Combination::St => [InitialVelocity, FinalVelocity, Acceleration],
            Combination::Sa => [InitialVelocity, FinalVelocity, Time],
            Combination::Sv => [InitialVelocity, Acceleration, Time],
            Combination::Su => [FinalVelocity, Acceleration, Time],
        }
    }

    /// The two computed quantities, in result order
    pub fn computed(&self) -> [Quantity; 2] {
        use Quantity::*;
        match self {
            Combination::At => [Acceleration, Time],
            Combination::Vt => [FinalVelocity, Time],
            Combination::Va => [FinalVelocity, Acceleration],
            Combination::Ut => [InitialVelocity, Time],
            Combination::Ua => [InitialVelocity, Acceleration],
            Combination::Uv => [InitialVelocity, FinalVelocity],
            Combination::St => [Displacement, Time],
            Combination::Sa => [Displacement, Acceleration],
            Combination::Sv => [Displacement, FinalVelocity],
            Combination::Su => [Displacement, InitialVelocity],
        }
    }

    pub fn known(&self) -> KnownSet {
        KnownSet::from_quantities(&self.known_quantities())
    }

    /// Find the combination whose known triple is exactly `known`
    pub fn from_known(known: KnownSet) -> Option<Combination> {
        Combination::ALL.into_iter().find(|c| c.known() == known)
    }

    /// Label such as `"s,u,v -> a,t"`
    pub fn label(&self) -> String {
        let known: Vec<&str> = self.known_quantities().iter().map(|q| q.symbol()).collect();
        let computed: Vec<&str> = self.computed().iter().map(|q| q.symbol()).collect();
        format!("{} -> {}", known.join(","), computed.join(","))
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_set_basics() {
        let set = KnownSet::empty()
            .with(Quantity::Time)
            .with(Quantity::Displacement)
            .with(Quantity::Time);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Quantity::Displacement));
        assert!(!set.contains(Quantity::Acceleration));
        assert_eq!(set.to_string(), "{s,t}");
        assert!(KnownSet::empty().is_empty());
    }

    #[test]
    fn test_combinations_cover_all_triples() {
        let triples: HashSet<KnownSet> = Combination::ALL.iter().map(|c| c.known()).collect();
        assert_eq!(triples.len(), 10);
        for combination in Combination::ALL {
            assert_eq!(combination.known().len(), 3);
            for q in combination.computed() {
                assert!(!combination.known().contains(q), "{:?} computes a known quantity", combination);
            }
        }
    }

    #[test]
    fn test_from_known_roundtrip() {
        for combination in Combination::ALL {
            assert_eq!(Combination::from_known(combination.known()), Some(combination));
        }
        let two = KnownSet::from_quantities(&[Quantity::InitialVelocity, Quantity::Time]);
        assert_eq!(Combination::from_known(two), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Combination::At.label(), "s,u,v -> a,t");
        assert_eq!(Combination::Su.label(), "v,a,t -> s,u");
    }
}
