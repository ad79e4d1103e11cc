//! Fuel-clad gap stage: conduction and thermal radiation across an annulus.
//!
//! The fuel surface temperature `T_f` satisfies
//!
//! ```text
//! T_f = T_c + (d₁ − d₂·T_f⁴) / k
//! d₁  = δ · (q / (2π·dz·r_f) + ε·σ·T_c⁴)
//! d₂  = δ · ε · σ
//! ```
//!
//! with gap thickness `δ`, pellet radius `r_f`, and pellet emissivity `ε`.

use std::f64::consts::PI;

use ndarray::{Array1, ArrayView1, Zip};

use crate::models::thermal::fuel_pin::core::{
    StageConfig,
    geometry::{FuelGeometry, GapGeometry},
};
use crate::support::conductivity::ConductivityModel;

use super::{SolveError, Stage, iterate::averaged_fixed_point};

/// Stefan–Boltzmann constant, W/m²·K⁴.
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;

/// Returns the fuel surface temperature, or the clad inner temperature
/// unchanged when there is no gap material (closed gap).
pub(crate) fn fuel_surface_temperature(
    gap: &GapGeometry,
    fuel: &FuelGeometry,
    k_gap: Option<&dyn ConductivityModel>,
    q_total: ArrayView1<'_, f64>,
    dz: f64,
    t_clad_inner: ArrayView1<'_, f64>,
    config: &StageConfig,
) -> Result<Array1<f64>, SolveError> {
    let Some(k_gap) = k_gap else {
        return Ok(t_clad_inner.to_owned());
    };

    let delta = gap.thickness_m();
    let eps_sigma = fuel.emissivity() * STEFAN_BOLTZMANN;
    let flux = &q_total / (2.0 * PI * dz * fuel.r_outer_m());

    // δ·(flux + εσ·(T_c⁴ − T⁴)) is d₁ − d₂·T⁴, kept in this form so a zero
    // heat rate leaves T_f equal to T_c exactly.
    let fixed_point = averaged_fixed_point(
        Stage::Gap,
        config,
        t_clad_inner,
        |t| k_gap.conductivity_batch(t),
        |t, k| {
            Zip::from(t_clad_inner)
                .and(&flux)
                .and(t)
                .and(k)
                .map_collect(|&tc, &q, &tf, &k| {
                    tc + delta * (q + eps_sigma * (tc.powi(4) - tf.powi(4))) / k
                })
        },
    )?;

    Ok(fixed_point.temperature)
}
