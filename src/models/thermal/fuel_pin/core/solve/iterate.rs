//! Averaged fixed-point iteration shared by every stage.
//!
//! Each stage solves for the temperature on the inner side of a region whose
//! outer-side temperature `T_b` is known. With `k_b = k(T_b)`, the seed
//! estimate uses `k_b` alone; every later update uses
//! `k = ½·(k(T_current) + k_b)`. Iteration stops once the largest change over
//! the whole batch is within tolerance, so all pins advance in lockstep.

use ndarray::{Array1, ArrayView1, Zip};
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

use crate::models::thermal::fuel_pin::core::StageConfig;
use crate::support::constraint::StrictlyPositive;

use super::{SolveError, Stage};

/// A converged stage temperature and the conductivity that produced it.
#[derive(Debug)]
pub(super) struct FixedPoint {
    pub(super) temperature: Array1<f64>,
    pub(super) conductivity: Array1<f64>,
}

/// Runs the averaged fixed point for one stage.
///
/// `update(t, k)` returns the next temperature estimate given the current one
/// and the averaged conductivity. The seed is `update(t_boundary, k_boundary)`.
///
/// # Errors
///
/// Returns [`SolveError::InvalidTolerance`] if the tolerance is not strictly
/// positive, or [`SolveError::NotConverged`] after `config.max_iters` updates
/// without meeting the tolerance.
pub(super) fn averaged_fixed_point(
    stage: Stage,
    config: &StageConfig,
    t_boundary: ArrayView1<'_, f64>,
    conductivity: impl Fn(ArrayView1<'_, f64>) -> Array1<f64>,
    update: impl Fn(&Array1<f64>, &Array1<f64>) -> Array1<f64>,
) -> Result<FixedPoint, SolveError> {
    let tolerance = StrictlyPositive::new(config.tolerance_k())
        .map_err(|source| SolveError::InvalidTolerance { stage, source })?
        .into_inner();
    let k_boundary = conductivity(t_boundary);

    let mut previous = t_boundary.to_owned();
    let mut k = k_boundary.clone();
    let mut current = update(&previous, &k);
    let mut iters = 0;

    loop {
        let residual = max_abs_diff(&current, &previous);
        if residual <= tolerance {
            log::debug!("{stage} converged after {iters} iterations (residual {residual:.3e} K)");
            return Ok(FixedPoint {
                temperature: current,
                conductivity: k,
            });
        }

        if iters == config.max_iters {
            log::warn!("{stage} hit the {iters}-iteration cap (residual {residual:.3e} K)");
            return Err(SolveError::NotConverged {
                stage,
                iters,
                residual: TemperatureInterval::new::<delta_kelvin>(residual),
            });
        }

        k = (conductivity(current.view()) + &k_boundary) * 0.5;
        let next = update(&current, &k);
        previous = std::mem::replace(&mut current, next);
        iters += 1;
    }
}

/// Largest absolute elementwise difference; NaN if any difference is NaN.
fn max_abs_diff(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    Zip::from(a).and(b).fold(0.0, |acc: f64, &x, &y| {
        let d = (x - y).abs();
        if d.is_nan() || d > acc { d } else { acc }
    })
}
