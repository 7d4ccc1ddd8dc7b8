//! # SUVAT Identities
//!
//! The five defining identities of motion under constant acceleration. A
//! physically valid scenario satisfies all five at once.
//!
//! ## Notation
//!
//! - `s` = Displacement
//! - `u` = Initial velocity
//! - `v` = Final velocity
//! - `a` = Acceleration (constant)
//! - `t` = Elapsed time
//!
//! ## Sign Conventions
//!
//! All quantities are signed along a single axis; `t` is non-negative.

use crate::equations::registry::Equation;
use crate::motion::Motion;

/// v = u + a·t
#[inline]
pub fn final_velocity(u: f64, a: f64, t: f64) -> f64 {
    u + a * t
}

/// s = (u + v)·t / 2
#[inline]
pub fn average_velocity_displacement(u: f64, v: f64, t: f64) -> f64 {
    (u + v) * t / 2.0
}

/// v² = u² + 2·a·s (returns v², not v)
#[inline]
pub fn velocity_squared(u: f64, a: f64, s: f64) -> f64 {
    u * u + 2.0 * a * s
}

/// s = u·t + a·t²/2
#[inline]
pub fn displacement_from_initial(u: f64, a: f64, t: f64) -> f64 {
    u * t + 0.5 * a * t * t
}

/// s = v·t − a·t²/2
#[inline]
pub fn displacement_from_final(v: f64, a: f64, t: f64) -> f64 {
    v * t - 0.5 * a * t * t
}

/// How far one identity is from holding for a given motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentityCheck {
    pub equation: Equation,
    /// lhs − rhs
    pub residual: f64,
    /// Largest magnitude among the terms, used to make the residual relative
    pub scale: f64,
}

impl IdentityCheck {
    /// Residual divided by `max(1, scale)`
    pub fn relative_residual(&self) -> f64 {
        self.residual.abs() / self.scale.max(1.0)
    }
}

fn check(equation: Equation, lhs: f64, rhs: f64, terms: [f64; 2]) -> IdentityCheck {
    IdentityCheck {
        equation,
        residual: lhs - rhs,
        scale: terms.iter().fold(lhs.abs(), |acc, x| acc.max(x.abs())),
    }
}

/// Evaluate all five identities for `m`.
pub fn identity_checks(m: &Motion) -> [IdentityCheck; 5] {
    let Motion { s, u, v, a, t } = *m;
    let half_at2 = 0.5 * a * t * t;
    [
        check(Equation::VelocityTime, v, final_velocity(u, a, t), [u, a * t]),
        check(
            Equation::AverageVelocity,
            s,
            average_velocity_displacement(u, v, t),
            [u * t / 2.0, v * t / 2.0],
        ),
        check(Equation::VelocitySquared, v * v, velocity_squared(u, a, s), [u * u, 2.0 * a * s]),
        check(Equation::DisplacementFromInitial, s, displacement_from_initial(u, a, t), [u * t, half_at2]),
        check(Equation::DisplacementFromFinal, s, displacement_from_final(v, a, t), [v * t, half_at2]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_fall() {
        // u = 0, a = 9.8, t = 2: v = 19.6, s = 19.6
        assert!((final_velocity(0.0, 9.8, 2.0) - 19.6).abs() < 1e-12);
        assert!((displacement_from_initial(0.0, 9.8, 2.0) - 19.6).abs() < 1e-12);
        assert!((displacement_from_final(19.6, 9.8, 2.0) - 19.6).abs() < 1e-12);
        assert!((average_velocity_displacement(0.0, 19.6, 2.0) - 19.6).abs() < 1e-12);
        assert!((velocity_squared(0.0, 9.8, 19.6) - 19.6 * 19.6).abs() < 1e-9);
    }

    #[test]
    fn test_consistent_motion_has_zero_residuals() {
        let m = Motion::new(100.0, 0.0, 20.0, 2.0, 10.0);
        for check in identity_checks(&m) {
            assert!(check.relative_residual() < 1e-12, "{:?} does not hold", check.equation);
        }
    }

    #[test]
    fn test_inconsistent_motion_is_detected() {
        // v should be 20, not 25
        let m = Motion::new(100.0, 0.0, 25.0, 2.0, 10.0);
        let failing: Vec<Equation> = identity_checks(&m)
            .iter()
            .filter(|c| c.relative_residual() > 1e-6)
            .map(|c| c.equation)
            .collect();
        assert!(failing.contains(&Equation::VelocityTime));
        assert!(failing.contains(&Equation::VelocitySquared));
        assert!(!failing.contains(&Equation::DisplacementFromInitial));
    }

    #[test]
    fn test_residuals_measure_against_identity_functions() {
        let m = Motion::new(7.0, 1.5, 4.0, 0.5, 3.0);
        let checks = identity_checks(&m);
        assert_eq!(checks[0].residual, m.v - final_velocity(m.u, m.a, m.t));
        assert_eq!(checks[1].residual, m.s - average_velocity_displacement(m.u, m.v, m.t));
        assert_eq!(checks[2].residual, m.v * m.v - velocity_squared(m.u, m.a, m.s));
        assert_eq!(checks[3].residual, m.s - displacement_from_initial(m.u, m.a, m.t));
        assert_eq!(checks[4].residual, m.s - displacement_from_final(m.v, m.a, m.t));
    }

    #[test]
    fn test_relative_residual_scales_large_values() {
        let check = IdentityCheck {
            equation: Equation::VelocityTime,
            residual: 1e-3,
            scale: 1e6,
        };
        assert!((check.relative_residual() - 1e-9).abs() < 1e-15);
    }
}
