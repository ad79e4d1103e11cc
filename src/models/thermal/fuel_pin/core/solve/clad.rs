//! Cladding stage: convective film plus conduction through a hollow cylinder.
//!
//! The clad is treated as a shell with no internal heat generation, so all
//! pin heat flows through it. This slightly overstates every temperature
//! except at the clad outer surface.

use std::f64::consts::PI;

use ndarray::{Array1, ArrayView1, Zip};

use crate::models::thermal::fuel_pin::core::{StageConfig, geometry::CladGeometry};
use crate::support::conductivity::ConductivityModel;

use super::{
    SolveError, Stage,
    iterate::{FixedPoint, averaged_fixed_point},
};

/// Clad outer, midwall, and inner temperatures (K) for a batch of pins.
#[derive(Debug, Clone, PartialEq)]
pub struct CladTemperatures {
    pub outer: Array1<f64>,
    pub midwall: Array1<f64>,
    pub inner: Array1<f64>,
}

pub(crate) fn clad_temperatures(
    clad: &CladGeometry,
    k_clad: &dyn ConductivityModel,
    q_total: ArrayView1<'_, f64>,
    dz: f64,
    t_coolant: ArrayView1<'_, f64>,
    htc: ArrayView1<'_, f64>,
    config: &StageConfig,
) -> Result<CladTemperatures, SolveError> {
    // Heat through the wall per unit length, over 2π.
    let c = &q_total / (2.0 * PI * dz);
    let r_outer = clad.r_outer_m();

    let outer = Zip::from(t_coolant)
        .and(&c)
        .and(htc)
        .map_collect(|&t, &c, &h| t + c / (h * r_outer));

    let rise = &c * clad.ln_outer_inner();
    let FixedPoint {
        temperature: inner,
        conductivity,
    } = averaged_fixed_point(
        Stage::Clad,
        config,
        outer.view(),
        |t| k_clad.conductivity_batch(t),
        |_, k| &outer + &(&rise / k),
    )?;

    let midwall = &outer + &(&c * clad.ln_outer_mid() / &conductivity);

    Ok(CladTemperatures {
        outer,
        midwall,
        inner,
    })
}
