//! # Solving Procedures
//!
//! One closed-form procedure per known-triple combination. Each procedure
//! receives a [`Motion`] whose three known fields are set and returns it with
//! the two missing fields filled in. Formulas are tried in a fixed order so
//! that no branch divides by a (near-)zero denominator; when every formula in
//! the branch degenerates the procedure fails with `Unsolvable`.
//!
//! Procedures assume the triple already passed [`crate::validation::validate`].

use tracing::debug;

use crate::equations::{
    average_velocity_displacement, displacement_from_final, final_velocity, velocity_squared, Equation,
    EquationTracker,
};
use crate::errors::{SuvatError, SuvatResult};
use crate::motion::Motion;
use crate::quantity::Combination;
use crate::settings::SolverSettings;

/// Signature shared by all ten procedures
pub type Procedure = fn(&Motion, &SolverSettings, &mut EquationTracker) -> SuvatResult<Motion>;

impl Combination {
    /// The solving procedure for this combination
    pub fn procedure(&self) -> Procedure {
        match self {
            Combination::At => solve_at,
            Combination::Vt => solve_vt,
            Combination::Va => solve_va,
            Combination::Ut => solve_ut,
            Combination::Ua => solve_ua,
            Combination::Uv => solve_uv,
            Combination::St => solve_st,
            Combination::Sa => solve_sa,
            Combination::Sv => solve_sv,
            Combination::Su => solve_su,
        }
    }
}

fn cannot_solve(combination: Combination, reason: &str) -> SuvatError {
    debug!(%combination, reason, "no viable formula");
    SuvatError::unsolvable(combination.label(), reason)
}

// ============================================================================
// Square-Root Sign Resolution
// ============================================================================

/// Which velocity a square root recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovered {
    /// v recovered from u: v = ±sqrt(|u² + 2as|)
    Final,
    /// u recovered from v: u = ±sqrt(|v² − 2as|)
    Initial,
}

/// Pick the sign of a velocity recovered through `v² = u² + 2as`.
///
/// Best effort, not a derivation: the recovered velocity is made consistent
/// with `a` changing velocity in its own direction (`v − u` has the sign of
/// `a`), preferring the positive root when it already is. Both roots can be
/// physically reachable; this picks one.
///
/// - Final, `a < 0`: keep `+m` if `m < u`, otherwise `−m`
/// - Final, `a > 0`: keep `+m` if `m > u`, otherwise `−m`
/// - Initial, `a < 0`: keep `+m` if `m > v`, otherwise `−m`
/// - Initial, `a > 0`: keep `+m` if `m < v`, otherwise `−m`
/// - `a = 0`: no velocity change, so the root takes the companion's sign
pub fn resolve_root_sign(
    magnitude: f64,
    companion: f64,
    a: f64,
    recovered: Recovered,
    settings: &SolverSettings,
) -> f64 {
    if settings.is_zero(a) {
        return magnitude.copysign(companion);
    }

    let keep_positive = match (recovered, a > 0.0) {
        (Recovered::Final, false) => magnitude < companion,
        (Recovered::Final, true) => magnitude > companion,
        (Recovered::Initial, false) => magnitude > companion,
        (Recovered::Initial, true) => magnitude < companion,
    };

    if keep_positive {
        magnitude
    } else {
        -magnitude
    }
}

/// t from u, v and a: prefer t = (v − u)/a, fall back to t = 2s/(u + v).
fn time_from_velocities(
    combination: Combination,
    m: &Motion,
    settings: &SolverSettings,
    eqs: &mut EquationTracker,
) -> SuvatResult<f64> {
    if !settings.is_zero(m.a) {
        eqs.record(Equation::VelocityTime, "t = (v - u) / a");
        Ok((m.v - m.u) / m.a)
    } else if !settings.is_zero(m.u + m.v) {
        eqs.record(Equation::AverageVelocity, "t = 2s / (u + v)");
        Ok(2.0 * m.s / (m.u + m.v))
    } else {
        Err(cannot_solve(combination, "acceleration and u + v are both zero"))
    }
}

// ============================================================================
// Procedures
// ============================================================================

/// s, u, v -> a, t
fn solve_at(m: &Motion, settings: &SolverSettings, eqs: &mut EquationTracker) -> SuvatResult<Motion> {
    let Motion { s, u, v, .. } = *m;
    let sum = u + v;

    let (a, t) = if !settings.is_zero(sum) {
        eqs.record(Equation::AverageVelocity, "t = 2s / (u + v)");
        let t = 2.0 * s / sum;

        let a = if !settings.is_zero(t) {
            eqs.record(Equation::VelocityTime, "a = (v - u) / t");
            (v - u) / t
        } else if !settings.is_zero(s) {
            eqs.record(Equation::VelocitySquared, "a = (v^2 - u^2) / 2s");
            (v * v - u * u) / (2.0 * s)
        } else {
            return Err(cannot_solve(
                Combination::At,
                "zero displacement in zero time leaves acceleration undetermined",
            ));
        };
        (a, t)
    } else if !settings.is_zero(s) {
        eqs.record(Equation::VelocitySquared, "a = (v^2 - u^2) / 2s");
        let a = (v * v - u * u) / (2.0 * s);

        if settings.is_zero(a) {
            return Err(cannot_solve(Combination::At, "u + v = 0 and acceleration is zero"));
        }
        eqs.record(Equation::VelocityTime, "t = (s - u) / a");
        (a, (s - u) / a)
    } else {
        return Err(cannot_solve(Combination::At, "u + v = 0 with zero displacement"));
    };

    Ok(Motion { a, t, ..*m })
}

/// s, u, a -> v, t
fn solve_vt(m: &Motion, settings: &SolverSettings, eqs: &mut EquationTracker) -> SuvatResult<Motion> {
    let magnitude = velocity_squared(m.u, m.a, m.s).abs().sqrt();
    let v = resolve_root_sign(magnitude, m.u, m.a, Recovered::Final, settings);
    eqs.record(Equation::VelocitySquared, "v = ±sqrt(|u^2 + 2as|)");
    debug!(magnitude, v, "recovered final velocity");

    let partial = Motion { v, ..*m };
    let t = time_from_velocities(Combination::Vt, &partial, settings, eqs)?;
    Ok(Motion { t, ..partial })
}

/// s, u, t -> v, a
fn solve_va(m: &Motion, settings: &SolverSettings, eqs: &mut EquationTracker) -> SuvatResult<Motion> {
    if settings.is_zero(m.t) {
        return Err(cannot_solve(Combination::Va, "time is zero"));
    }
    eqs.record(Equation::AverageVelocity, "v = 2s/t - u");
    let v = 2.0 * m.s / m.t - m.u;
    eqs.record(Equation::VelocityTime, "a = (v - u) / t");
    let a = (v - m.u) / m.t;
    Ok(Motion { v, a, ..*m })
}

/// s, v, a -> u, t
fn solve_ut(m: &Motion, settings: &SolverSettings, eqs: &mut EquationTracker) -> SuvatResult<Motion> {
    let magnitude = (m.v * m.v - 2.0 * m.a * m.s).abs().sqrt();
    let u = resolve_root_sign(magnitude, m.v, m.a, Recovered::Initial, settings);
    eqs.record(Equation::VelocitySquared, "u = ±sqrt(|v^2 - 2as|)");
    debug!(magnitude, u, "recovered initial velocity");

    let partial = Motion { u, ..*m };
    let t = time_from_velocities(Combination::Ut, &partial, settings, eqs)?;
    Ok(Motion { t, ..partial })
}

/// s, v, t -> u, a
fn solve_ua(m: &Motion, settings: &SolverSettings, eqs: &mut EquationTracker) -> SuvatResult<Motion> {
    if settings.is_zero(m.t) {
        return Err(cannot_solve(Combination::Ua, "time is zero"));
    }
    eqs.record(Equation::AverageVelocity, "u = 2s/t - v");
    let u = 2.0 * m.s / m.t - m.v;
    eqs.record(Equation::VelocityTime, "a = (v - u) / t");
    let a = (m.v - u) / m.t;
    Ok(Motion { u, a, ..*m })
}

/// s, a, t -> u, v
fn solve_uv(m: &Motion, settings: &SolverSettings, eqs: &mut EquationTracker) -> SuvatResult<Motion> {
    if settings.is_zero(m.t) {
        return Err(cannot_solve(Combination::Uv, "time is zero"));
    }
    eqs.record(Equation::DisplacementFromInitial, "u = (s - a*t^2/2) / t");
    let u = (m.s - 0.5 * m.a * m.t * m.t) / m.t;
    eqs.record(Equation::VelocityTime, "v = u + a*t");
    let v = final_velocity(u, m.a, m.t);
    Ok(Motion { u, v, ..*m })
}

/// u, v, a -> s, t
fn solve_st(m: &Motion, settings: &SolverSettings, eqs: &mut EquationTracker) -> SuvatResult<Motion> {
    let Motion { u, v, a, .. } = *m;
    if settings.is_zero(a) {
        return Err(cannot_solve(Combination::St, "acceleration is zero"));
    }

    eqs.record(Equation::VelocitySquared, "s = (v^2 - u^2) / 2a");
    let s = (v * v - u * u) / (2.0 * a);

    let t = if !settings.is_zero(u + v) {
        eqs.record(Equation::AverageVelocity, "t = 2s / (u + v)");
        2.0 * s / (u + v)
    } else {
        eqs.record(Equation::VelocityTime, "t = (v - u) / a");
        (v - u) / a
    };

    Ok(Motion { s, t, ..*m })
}

/// u, v, t -> s, a
fn solve_sa(m: &Motion, settings: &SolverSettings, eqs: &mut EquationTracker) -> SuvatResult<Motion> {
    eqs.record(Equation::AverageVelocity, "s = (u + v)*t / 2");
    let s = average_velocity_displacement(m.u, m.v, m.t);

    // t = 0 forces s = 0 and leaves a free
    if settings.is_zero(m.t) {
        return Err(cannot_solve(Combination::Sa, "time is zero, acceleration is undetermined"));
    }
    eqs.record(Equation::VelocityTime, "a = (v - u) / t");
    let a = (m.v - m.u) / m.t;
    Ok(Motion { s, a, ..*m })
}

/// u, a, t -> s, v
fn solve_sv(m: &Motion, _settings: &SolverSettings, eqs: &mut EquationTracker) -> SuvatResult<Motion> {
    eqs.record(Equation::VelocityTime, "v = u + a*t");
    let v = final_velocity(m.u, m.a, m.t);
    eqs.record(Equation::AverageVelocity, "s = (u + v)*t / 2");
    let s = average_velocity_displacement(m.u, v, m.t);
    Ok(Motion { s, v, ..*m })
}

/// v, a, t -> s, u
fn solve_su(m: &Motion, _settings: &SolverSettings, eqs: &mut EquationTracker) -> SuvatResult<Motion> {
    eqs.record(Equation::DisplacementFromFinal, "s = v*t - a*t^2/2");
    let s = displacement_from_final(m.v, m.a, m.t);
    eqs.record(Equation::VelocityTime, "u = v - a*t");
    let u = m.v - m.a * m.t;
    Ok(Motion { s, u, ..*m })
}
