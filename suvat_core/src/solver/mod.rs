//! # Solver Set
//!
//! Ten solving operations, one per combination of three known quantities,
//! plus a generic entry point that picks the combination from whichever
//! quantities are present.
//!
//! Every call follows the same path:
//!
//! 1. validate the known triple ([`crate::validation::validate`])
//! 2. run the combination's closed-form procedure
//! 3. check the solved motion against the identities
//!    ([`crate::validation::check_solution`])
//!
//! Calls share no state; a [`Solver`] only carries read-only settings.
//!
//! ## Example
//!
//! ```rust
//! use suvat_core::solver::{solve_at, solve_sv};
//!
//! // s = 100, u = 0, v = 20  ->  a = 2, t = 10
//! let (a, t) = solve_at(100.0, 0.0, 20.0).unwrap();
//! assert!((a - 2.0).abs() < 1e-9 && (t - 10.0).abs() < 1e-9);
//!
//! // u = 0, a = 9.8, t = 2  ->  s = 19.6, v = 19.6
//! let (s, v) = solve_sv(0.0, 9.8, 2.0).unwrap();
//! assert!((s - 19.6).abs() < 1e-9 && (v - 19.6).abs() < 1e-9);
//! ```

pub mod procedures;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::{EquationTracker, EquationUsage};
use crate::errors::{SuvatError, SuvatResult};
use crate::motion::{Motion, MotionInput};
use crate::quantity::Combination;
use crate::settings::SolverSettings;
use crate::validation::{check_solution, validate};

pub use procedures::{resolve_root_sign, Recovered};

/// A fully solved motion.
///
/// ## JSON Example
///
/// ```json
/// {
///   "combination": "At",
///   "motion": { "s": 100.0, "u": 0.0, "v": 20.0, "a": 2.0, "t": 10.0 },
///   "equations": [
///     { "equation": "AverageVelocity", "step": "t = 2s / (u + v)" },
///     { "equation": "VelocityTime", "step": "a = (v - u) / t" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Which triple was supplied
    pub combination: Combination,
    /// All five quantities
    pub motion: Motion,
    /// Formula steps taken, in order
    pub equations: Vec<EquationUsage>,
}

impl Solution {
    /// The two computed quantities, in the combination's result order
    pub fn computed(&self) -> (f64, f64) {
        let [first, second] = self.combination.computed();
        (self.motion.get(first), self.motion.get(second))
    }
}

/// Solver with explicit settings.
///
/// The free functions in this module use `Solver::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Solver {
    settings: SolverSettings,
}

impl Solver {
    /// Create a solver, rejecting unusable settings
    pub fn new(settings: SolverSettings) -> SuvatResult<Self> {
        settings.validate()?;
        Ok(Solver { settings })
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Solve one combination given its three known values in argument order.
    pub fn solve_combination(&self, combination: Combination, values: [f64; 3]) -> SuvatResult<Solution> {
        let motion = Motion::from_known(combination.known_quantities(), values);
        debug!(%combination, ?values, "solving");

        validate(combination.known(), &motion, &self.settings)?;

        let mut tracker = EquationTracker::new();
        let solved = (combination.procedure())(&motion, &self.settings, &mut tracker)?;
        check_solution(&solved, &self.settings)?;

        debug!(%combination, ?solved, "solved");
        Ok(Solution {
            combination,
            motion: solved,
            equations: tracker.into_usages(),
        })
    }

    /// Solve from any input with exactly three known quantities.
    pub fn solve(&self, input: &MotionInput) -> SuvatResult<Solution> {
        let known = input.known_set();
        let combination = Combination::from_known(known)
            .ok_or(SuvatError::WrongKnownCount { known: known.len() })?;

        let mut values = [0.0; 3];
        for (slot, q) in values.iter_mut().zip(combination.known_quantities()) {
            *slot = input.get(q).unwrap_or_default();
        }
        self.solve_combination(combination, values)
    }

    fn pair(&self, combination: Combination, values: [f64; 3]) -> SuvatResult<(f64, f64)> {
        self.solve_combination(combination, values)
            .map(|solution| solution.computed())
    }
}

/// Solve from any input with exactly three known quantities, default settings.
pub fn solve(input: &MotionInput) -> SuvatResult<Solution> {
    Solver::default().solve(input)
}

macro_rules! combination_fns {
    ($( $(#[$doc:meta])* $name:ident => $combination:ident ($x:ident, $y:ident, $z:ident); )*) => {
        impl Solver {
            $(
                $(#[$doc])*
                pub fn $name(&self, $x: f64, $y: f64, $z: f64) -> SuvatResult<(f64, f64)> {
                    self.pair(Combination::$combination, [$x, $y, $z])
                }
            )*
        }

        $(
            $(#[$doc])*
            pub fn $name($x: f64, $y: f64, $z: f64) -> SuvatResult<(f64, f64)> {
                Solver::default().$name($x, $y, $z)
            }
        )*
    };
}

combination_fns! {
    /// Returns `(a, t)` given `s, u, v`.
    solve_at => At(s, u, v);
    /// Returns `(v, t)` given `s, u, a`. The sign of `v` is resolved heuristically.
    solve_vt => Vt(s, u, a);
    /// Returns `(v, a)` given `s, u, t`.
    solve_va => Va(s, u, t);
    /// Returns `(u, t)` given `s, v, a`. The sign of `u` is resolved heuristically.
    solve_ut => Ut(s, v, a);
    /// Returns `(u, a)` given `s, v, t`.
    solve_ua => Ua(s, v, t);
    /// Returns `(u, v)` given `s, a, t`.
    solve_uv => Uv(s, a, t);
    /// Returns `(s, t)` given `u, v, a`.
    solve_st => St(u, v, a);
    /// Returns `(s, a)` given `u, v, t`.
    solve_sa => Sa(u, v, t);
    /// Returns `(s, v)` given `u, a, t`.
    solve_sv => Sv(u, a, t);
    /// Returns `(s, u)` given `v, a, t`.
    solve_su => Su(v, a, t);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;

    fn assert_pair(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_from_rest_to_twenty() {
        assert_pair(solve_at(100.0, 0.0, 20.0).unwrap(), (2.0, 10.0));
    }

    #[test]
    fn test_free_fall() {
        assert_pair(solve_sv(0.0, 9.8, 2.0).unwrap(), (19.6, 19.6));
    }

    #[test]
    fn test_zero_displacement_equal_velocities_unsolvable() {
        let err = solve_at(0.0, 5.0, 5.0).unwrap_err();
        assert!(err.is_degenerate(), "got {:?}", err);
    }

    #[test]
    fn test_degenerate_zero_time() {
        // s = 0, u = 5, t = 0: any (v, a) with v = 5 fits
        let err = solve_va(0.0, 5.0, 0.0).unwrap_err();
        assert!(err.is_degenerate(), "got {:?}", err);
    }

    #[test]
    fn test_direction_reversal_accepted() {
        assert_pair(solve_st(3.0, -3.0, -2.0).unwrap(), (0.0, 3.0));
    }

    #[test]
    fn test_direction_reversal_wrong_sign_rejected() {
        let err = solve_st(3.0, -3.0, 2.0).unwrap_err();
        assert!(err.is_contradiction(), "got {:?}", err);
    }

    #[test]
    fn test_validator_rejects_before_solving() {
        // s = 5 in zero time; the procedure would also fail, but as Unsolvable
        let err = solve_va(5.0, 1.0, 0.0).unwrap_err();
        assert!(err.is_contradiction());
    }

    #[test]
    fn test_post_check_rejects_unreachable_displacement() {
        // u = 1, a = -1 never gets 10 forward: u^2 + 2as < 0
        let err = solve_vt(10.0, 1.0, -1.0).unwrap_err();
        assert!(err.is_contradiction(), "got {:?}", err);
    }

    #[test]
    fn test_post_check_rejects_backwards_time() {
        // Slowing from 5 to 3 under positive acceleration
        let err = solve_st(5.0, 3.0, 2.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_each_combination_on_one_motion() {
        // u = 2, a = 3, t = 4 -> v = 14, s = 32
        let motion = Motion::new(32.0, 2.0, 14.0, 3.0, 4.0);
        for combination in Combination::ALL {
            let values = combination.known_quantities().map(|q| motion.get(q));
            let solution = Solver::default().solve_combination(combination, values).unwrap();
            for q in Quantity::ALL {
                assert!(
                    (solution.motion.get(q) - motion.get(q)).abs() < 1e-9,
                    "{} got {} = {}",
                    combination,
                    q,
                    solution.motion.get(q)
                );
            }
            assert!(!solution.equations.is_empty());
        }
    }

    #[test]
    fn test_generic_solve() {
        let input = MotionInput::default()
            .with(Quantity::InitialVelocity, 0.0)
            .with(Quantity::Acceleration, 9.8)
            .with(Quantity::Time, 2.0);
        let solution = solve(&input).unwrap();
        assert_eq!(solution.combination, Combination::Sv);
        assert_pair(solution.computed(), (19.6, 19.6));
    }

    #[test]
    fn test_generic_solve_wrong_count() {
        let two = MotionInput::default()
            .with(Quantity::InitialVelocity, 0.0)
            .with(Quantity::Time, 2.0);
        assert_eq!(solve(&two).unwrap_err(), SuvatError::WrongKnownCount { known: 2 });

        let four = two
            .with(Quantity::Acceleration, 1.0)
            .with(Quantity::Displacement, 2.0);
        assert_eq!(solve(&four).unwrap_err(), SuvatError::WrongKnownCount { known: 4 });
    }

    #[test]
    fn test_custom_settings() {
        let settings = SolverSettings {
            zero_tolerance: 1e-3,
            ..SolverSettings::default()
        };
        let solver = Solver::new(settings).unwrap();
        // t = 1e-4 counts as zero under the looser tolerance
        assert!(solver.solve_va(0.0, 5.0, 1e-4).unwrap_err().is_degenerate());
        assert!(solve_va(0.0, 5.0, 1e-4).is_ok());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = SolverSettings {
            zero_tolerance: f64::NAN,
            ..SolverSettings::default()
        };
        assert!(Solver::new(settings).is_err());
    }

    #[test]
    fn test_solution_serializes() {
        let solution = Solver::default().solve_combination(Combination::At, [100.0, 0.0, 20.0]).unwrap();
        let json = serde_json::to_string(&solution).unwrap();
        assert!(json.contains("\"combination\":\"At\""));
        assert!(json.contains("AverageVelocity"));
        let roundtrip: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, solution);
    }

    #[test]
    fn test_concurrent_calls_are_independent() {
        let handles: Vec<_> = (1..=8)
            .map(|i| {
                std::thread::spawn(move || {
                    let t = i as f64;
                    let (s, v) = solve_sv(1.0, 2.0, t).unwrap();
                    (t, s, v)
                })
            })
            .collect();
        for handle in handles {
            let (t, s, v) = handle.join().unwrap();
            assert!((v - (1.0 + 2.0 * t)).abs() < 1e-9);
            assert!((s - (t + t * t)).abs() < 1e-9);
        }
    }
}
