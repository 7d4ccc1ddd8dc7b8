//! # Consistency Validation
//!
//! Rejects physically contradictory input triples before solving, and checks
//! solved motions against the five identities afterwards.
//!
//! Only the quantities in the supplied [`KnownSet`] are inspected; the other
//! two fields of the [`Motion`] are placeholders.
//!
//! ## Checks (in order, first failure wins)
//!
//! 1. Known values are finite, and a known `t` is not negative
//! 2. Zero time: no displacement, no change of velocity
//! 3. Zero displacement (time unknown): velocities must not describe a trip
//!    that goes somewhere
//! 4. Direction reversal: `a` points the way velocity changes
//! 5. Zero acceleration: `u = v`

use tracing::debug;

use crate::equations::identity_checks;
use crate::errors::{SuvatError, SuvatResult};
use crate::motion::Motion;
use crate::quantity::{KnownSet, Quantity};
use crate::settings::SolverSettings;

/// Sign of `x`, with values inside the zero tolerance mapped to 0
fn sign(x: f64, settings: &SolverSettings) -> i8 {
    if settings.is_zero(x) {
        0
    } else if x > 0.0 {
        1
    } else {
        -1
    }
}

/// Validate the known triple of `motion`.
///
/// # Returns
///
/// * `Ok(())` - No contradiction detected
/// * `Err(SuvatError::InvalidInput)` - The known values contradict each other
/// * `Err(SuvatError::NonFinite)` - A known value is NaN or infinite
pub fn validate(known: KnownSet, motion: &Motion, settings: &SolverSettings) -> SuvatResult<()> {
    motion.ensure_finite(known)?;

    let has = |q: Quantity| known.contains(q);
    let Motion { s, u, v, a, t } = *motion;

    if has(Quantity::Time) && t < 0.0 && !settings.is_zero(t) {
        return Err(SuvatError::invalid_input(
            "negative-time",
            format!("time must not be negative, got {}", t),
        ));
    }

    // Nothing can change in zero time
    if has(Quantity::Time) && settings.is_zero(t) {
        if has(Quantity::Displacement) && !settings.is_zero(s) {
            return Err(SuvatError::invalid_input(
                "zero-time",
                format!("displacement {} covered in zero time", s),
            ));
        }
        if has(Quantity::InitialVelocity)
            && has(Quantity::FinalVelocity)
            && !settings.approx_eq(u, v)
        {
            return Err(SuvatError::invalid_input(
                "zero-time",
                format!("velocity cannot jump from {} to {} in zero time", u, v),
            ));
        }
    }

    // A known time pins the trajectory down on its own, so these only apply
    // when t is one of the unknowns.
    if has(Quantity::Displacement) && settings.is_zero(s) && !has(Quantity::Time) {
        check_zero_displacement(known, u, v, settings)?;
    }

    if has(Quantity::InitialVelocity) && has(Quantity::FinalVelocity) && has(Quantity::Acceleration) {
        if sign(u, settings) * sign(v, settings) < 0 && sign(v - u, settings) != sign(a, settings) {
            return Err(SuvatError::invalid_input(
                "acceleration-sign",
                format!(
                    "velocity reverses from {} to {} but acceleration {} points the other way",
                    u, v, a
                ),
            ));
        }

        if settings.is_zero(a) && !settings.approx_eq(u, v) {
            return Err(SuvatError::invalid_input(
                "zero-acceleration",
                format!("velocity changes from {} to {} without acceleration", u, v),
            ));
        }
    }

    debug!(%known, "input triple is consistent");
    Ok(())
}

fn check_zero_displacement(
    known: KnownSet,
    u: f64,
    v: f64,
    settings: &SolverSettings,
) -> SuvatResult<()> {
    let has_u = known.contains(Quantity::InitialVelocity);
    let has_v = known.contains(Quantity::FinalVelocity);
    let u_zero = settings.is_zero(u);
    let v_zero = settings.is_zero(v);

    // A velocity must be zero unless the other one is known and non-zero
    if has_u && !u_zero && !(has_v && !v_zero) {
        return Err(SuvatError::invalid_input(
            "zero-displacement",
            format!("initial velocity {} with zero displacement", u),
        ));
    }
    if has_v && !v_zero && !(has_u && !u_zero) {
        return Err(SuvatError::invalid_input(
            "zero-displacement",
            format!("final velocity {} with zero displacement", v),
        ));
    }

    // Symmetric non-zero round trip
    if has_u && has_v && !u_zero && settings.approx_eq(u, -v) {
        return Err(SuvatError::invalid_input(
            "zero-displacement",
            format!("u = -v = {} with zero displacement", u),
        ));
    }

    Ok(())
}

/// Check a solved motion: all five identities must hold within
/// `consistency_tolerance` and the elapsed time must not be negative.
///
/// Skipped entirely when `settings.post_check` is false.
pub fn check_solution(motion: &Motion, settings: &SolverSettings) -> SuvatResult<()> {
    if !settings.post_check {
        return Ok(());
    }

    for q in Quantity::ALL {
        let value = motion.get(q);
        if !value.is_finite() {
            return Err(SuvatError::invalid_input(
                "post-check",
                format!("solved {} is not finite ({})", q.name(), value),
            ));
        }
    }

    if motion.t < 0.0 && !settings.is_zero(motion.t) {
        return Err(SuvatError::invalid_input(
            "negative-time",
            format!("the given values are only reachable at negative time t = {}", motion.t),
        ));
    }

    for check in identity_checks(motion) {
        if check.relative_residual() > settings.consistency_tolerance {
            let meta = check.equation.metadata();
            return Err(SuvatError::invalid_input(
                "post-check",
                format!(
                    "solved values violate {} ({}) by {:.3e}",
                    meta.name, meta.formula_plain, check.residual
                ),
            ));
        }
    }

    Ok(())
}
