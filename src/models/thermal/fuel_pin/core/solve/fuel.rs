//! Fuel pellet stage: nested solid shells with uniform heat generation.
//!
//! Nodes are solved from the pellet surface inward. Across node `i` the
//! temperature rises by `(r_out² − r_in²)/4 · q'''/k`, with `k` averaged
//! between the node's outer and inner boundary temperatures. Each node's
//! inner temperature is the next node's outer temperature; the innermost
//! node's inner temperature is the centerline temperature.

use ndarray::{Array1, ArrayView1};

use crate::models::thermal::fuel_pin::core::{StageConfig, geometry::FuelGeometry};
use crate::support::conductivity::SharedConductivity;

use super::{SolveError, Stage, iterate::averaged_fixed_point};

pub(crate) fn fuel_centerline_temperature(
    fuel: &FuelGeometry,
    materials: &[SharedConductivity],
    q_density: ArrayView1<'_, f64>,
    t_fuel_outer: ArrayView1<'_, f64>,
    config: &StageConfig,
) -> Result<Array1<f64>, SolveError> {
    let mut t_out = t_fuel_outer.to_owned();

    for (node, (geometry, k_node)) in fuel.nodes().iter().zip(materials).enumerate().rev() {
        let rise = &q_density * geometry.drsq_over_4();
        let t_in = averaged_fixed_point(
            Stage::Fuel { node },
            config,
            t_out.view(),
            |t| k_node.conductivity_batch(t),
            |_, k| &t_out + &(&rise / k),
        )?
        .temperature;
        t_out = t_in;
    }

    Ok(t_out)
}
