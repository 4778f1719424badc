//! Conversions between the mean, eccentric and true anomalies of an
//! elliptic orbit.
//!
//! The closed-form conversions don't guard their inputs: an eccentricity
//! outside `[0, 1)` just propagates NaN. Solving Kepler's equation is the
//! only fallible step, and it checks the eccentricity up front.

use std::f64::consts::PI;

use thiserror::Error;

use crate::math::root_finding::{find_root_bracket, newton_plus_bisection, RootFindingError};

/// Largest Newton step we still count as movement when solving Kepler's
/// equation.
const STEP_TOLERANCE: f64 = 1e-14;
/// Largest residual `|E - e sin E - M|` we accept, scaled by `max(1, |M|)`.
pub const KEPLER_TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: usize = 100;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnomalyError {
    #[error("Eccentricity {0} is outside of the elliptic range [0, 1)")]
    InvalidEccentricity(f64),

    #[error("Anomaly must be finite, got {0}")]
    NonFiniteAnomaly(f64),

    #[error("Kepler's equation solver failed for M = {mean_anomaly}, e = {eccentricity}: {source}")]
    Solver {
        mean_anomaly: f64,
        eccentricity: f64,
        #[source]
        source: RootFindingError,
    },

    #[error(
        "Kepler's equation did not converge for M = {mean_anomaly}, e = {eccentricity} \
         (residual {residual:e})"
    )]
    NotConverged {
        mean_anomaly: f64,
        eccentricity: f64,
        residual: f64,
    },
}

pub fn check_eccentricity(e: f64) -> Result<(), AnomalyError> {
    if (0.0..1.0).contains(&e) {
        Ok(())
    } else {
        Err(AnomalyError::InvalidEccentricity(e))
    }
}

/// Converts a true anomaly straight to the mean anomaly.
///
/// The atan2 term recovers the eccentric anomaly, shifted into `(0, 2pi]`,
/// and the last term is `-e sin E` written in terms of the true anomaly.
pub fn mean_from_true(true_anomaly: f64, e: f64) -> f64 {
    let root = (1.0 - e * e).sqrt();
    let (sin, cos) = true_anomaly.sin_cos();

    (-root * sin).atan2(-e - cos) + PI - e * root * sin / (1.0 + e * cos)
}

/// Solves Kepler's equation, `M = E - e sin E`, for the eccentric anomaly.
pub fn eccentric_from_mean(mean_anomaly: f64, e: f64) -> Result<f64, AnomalyError> {
    solve_kepler(mean_anomaly, e, STEP_TOLERANCE, MAX_ITERATIONS)
}

fn solve_kepler(
    mean_anomaly: f64,
    e: f64,
    step_tolerance: f64,
    max_iterations: usize,
) -> Result<f64, AnomalyError> {
    check_eccentricity(e)?;
    if !mean_anomaly.is_finite() {
        return Err(AnomalyError::NonFiniteAnomaly(mean_anomaly));
    }

    // This doesn't have a closed form, so let's do some rootfinding
    let kepler = |x: f64| -> f64 { eccentric_to_mean(x, e) - mean_anomaly };
    let kepler_der = |x: f64| -> f64 { 1.0 - e * x.cos() };

    let solver_error = |source: RootFindingError| AnomalyError::Solver {
        mean_anomaly,
        eccentricity: e,
        source,
    };

    // |E - M| <= e, so this radius brackets the root on the first try. For
    // huge M, e + 0.1 is below an ulp of M, so widen it to a few ulps.
    let radius = (e + 0.1).max(4.0 * f64::EPSILON * mean_anomaly.abs());
    let bracket =
        find_root_bracket(kepler, mean_anomaly, radius, max_iterations).map_err(solver_error)?;
    let eccentric_anomaly = newton_plus_bisection(
        |x| (kepler(x), kepler_der(x)),
        bracket,
        step_tolerance,
        max_iterations,
    )
    .map_err(solver_error)?;

    let residual = kepler(eccentric_anomaly).abs();
    if residual > KEPLER_TOLERANCE * mean_anomaly.abs().max(1.0) {
        return Err(AnomalyError::NotConverged {
            mean_anomaly,
            eccentricity: e,
            residual,
        });
    }

    Ok(eccentric_anomaly)
}

/// Kepler's equation in the easy direction.
pub fn eccentric_to_mean(eccentric_anomaly: f64, e: f64) -> f64 {
    eccentric_anomaly - e * eccentric_anomaly.sin()
}

/// Converts eccentric anomaly to true anomaly without going through
/// `tan(theta/2) = sqrt((1+e)/(1-e)) tan(E/2)`, which blows up at apoapsis
/// and loses precision as e approaches 1.
///
/// Formula from https://ui.adsabs.harvard.edu/abs/1973CeMec...7..388B/abstract
pub fn true_from_eccentric(eccentric_anomaly: f64, e: f64) -> f64 {
    let beta = e / (1.0 + (1.0 - e * e).sqrt());
    let (sin, cos) = eccentric_anomaly.sin_cos();

    eccentric_anomaly + 2.0 * (beta * sin).atan2(1.0 - beta * cos)
}

pub fn mean_from_true_all(true_anomalies: &[f64], e: f64) -> Vec<f64> {
    true_anomalies
        .iter()
        .map(|&theta| mean_from_true(theta, e))
        .collect()
}

/// Solves each element independently. Fails on the first element that
/// doesn't converge.
pub fn eccentric_from_mean_all(mean_anomalies: &[f64], e: f64) -> Result<Vec<f64>, AnomalyError> {
    mean_anomalies
        .iter()
        .map(|&m| eccentric_from_mean(m, e))
        .collect()
}

pub fn true_from_eccentric_all(eccentric_anomalies: &[f64], e: f64) -> Vec<f64> {
    eccentric_anomalies
        .iter()
        .map(|&ecc| true_from_eccentric(ecc, e))
        .collect()
}
