//! Three-stage radial conduction solve.
//!
//! Stages run from the coolant inward, each seeded by the temperature the
//! previous stage produced:
//!
//! 1. Clad: film drop to the clad outer surface, then conduction to the
//!    inner surface ([`clad`]).
//! 2. Gap: conduction and radiation to the fuel surface ([`gap`]).
//! 3. Fuel: node-by-node conduction to the centerline ([`fuel`]).

mod clad;
mod error;
mod fuel;
mod gap;
mod iterate;

pub use clad::CladTemperatures;
pub use error::{SolveError, Stage};
pub use gap::STEFAN_BOLTZMANN;

pub(super) use clad::clad_temperatures;
pub(super) use fuel::fuel_centerline_temperature;
pub(super) use gap::fuel_surface_temperature;

use ndarray::Array2;
use uom::si::{f64::Length, length::meter};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{Landmark, PinConditions, PinModel, PinTemperatures, SolveConfig};

/// Solves all six landmark temperatures for a batch of pins.
///
/// `dz` is the axial length of the slice over which the linear heat rate acts.
pub(super) fn solve(
    model: &PinModel,
    conditions: &PinConditions,
    dz: Constrained<Length, StrictlyPositive>,
    config: &SolveConfig,
) -> Result<PinTemperatures, SolveError> {
    let dz = dz.into_inner().get::<meter>();
    let geometry = model.geometry();
    let q_linear = conditions.linear_heat_rate();
    let t_coolant = conditions.coolant_temperature();

    let q_total = &q_linear * dz;
    let q_density = &q_linear / geometry.fuel().area_m2();

    let clad = clad_temperatures(
        geometry.clad(),
        model.clad_material(),
        q_total.view(),
        dz,
        t_coolant,
        conditions.film_coefficient(),
        &config.clad(),
    )?;

    let t_fuel_outer = fuel_surface_temperature(
        geometry.gap(),
        geometry.fuel(),
        model.gap_material(),
        q_total.view(),
        dz,
        clad.inner.view(),
        &config.gap(),
    )?;

    let t_centerline = fuel_centerline_temperature(
        geometry.fuel(),
        model.fuel_materials(),
        q_density.view(),
        t_fuel_outer.view(),
        &config.fuel(),
    )?;

    let mut temperatures = Array2::zeros((conditions.len(), Landmark::ALL.len()));
    for (landmark, values) in [
        (Landmark::Coolant, t_coolant),
        (Landmark::CladOuter, clad.outer.view()),
        (Landmark::CladMidwall, clad.midwall.view()),
        (Landmark::CladInner, clad.inner.view()),
        (Landmark::FuelOuter, t_fuel_outer.view()),
        (Landmark::FuelCenterline, t_centerline.view()),
    ] {
        temperatures.column_mut(landmark.column()).assign(&values);
    }

    Ok(PinTemperatures::new(temperatures))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use ndarray::array;
    use uom::si::{
        f64::TemperatureInterval, length::millimeter, temperature_interval::kelvin as delta_kelvin,
    };

    use crate::support::constraint::ConstraintError;
    use crate::models::thermal::fuel_pin::core::{
        DirectFuel, StageConfig,
        test_support::{
            Oscillating, constant, metallic_design, reference_design, reference_design_with,
            reference_fuel,
        },
    };

    fn slice() -> Constrained<Length, StrictlyPositive> {
        StrictlyPositive::new(Length::new::<meter>(1.0)).unwrap()
    }

    fn assert_monotonic(temperatures: &PinTemperatures) {
        let t = temperatures.as_array();
        for row in t.rows() {
            for pair in row.windows(2) {
                assert!(
                    pair[1] >= pair[0],
                    "temperatures must not fall moving inward: {row}"
                );
            }
        }
    }

    #[test]
    fn single_pin_reference_case() {
        let model = PinModel::new(reference_design()).unwrap();
        let conditions = PinConditions::new(array![3.0e4], array![600.0], array![5.0e4]).unwrap();

        let result = solve(&model, &conditions, slice(), &SolveConfig::default()).unwrap();
        assert_eq!(result.n_pins(), 1);
        assert!(result.as_array().iter().all(|t| t.is_finite()));

        let film_drop = 3.0e4 / (2.0 * PI * 0.0042 * 5.0e4);
        assert_relative_eq!(
            result.column(Landmark::CladOuter)[0] - 600.0,
            film_drop,
            epsilon = 1e-6
        );
        assert_eq!(result.column(Landmark::Coolant)[0], 600.0);
        assert_monotonic(&result);

        // Constant k gives the closed-form shell and cylinder solutions.
        let clad_drop = 3.0e4 / (2.0 * PI * 20.0) * (0.0042_f64 / 0.00364).ln();
        assert_relative_eq!(
            result.column(Landmark::CladInner)[0] - result.column(Landmark::CladOuter)[0],
            clad_drop,
            max_relative = 1e-9
        );
        let fuel_drop = 3.0e4 / (4.0 * PI * 20.0);
        assert_relative_eq!(
            result.column(Landmark::FuelCenterline)[0] - result.column(Landmark::FuelOuter)[0],
            fuel_drop,
            max_relative = 1e-9
        );
    }

    #[test]
    fn closed_gap_passes_clad_inner_through() {
        let model = PinModel::new(reference_design()).unwrap();
        let conditions =
            PinConditions::new(array![1.0e4, 4.0e4], array![620.0, 700.0], array![3.0e4, 6.0e4])
                .unwrap();

        let result = solve(&model, &conditions, slice(), &SolveConfig::default()).unwrap();
        assert_eq!(
            result.column(Landmark::FuelOuter),
            result.column(Landmark::CladInner)
        );
    }

    #[test]
    fn zero_power_is_isothermal() {
        let model = PinModel::new(metallic_design()).unwrap();
        let conditions =
            PinConditions::new(array![0.0, 0.0], array![650.0, 710.0], array![4.0e4, 4.0e4])
                .unwrap();

        let result = solve(&model, &conditions, slice(), &SolveConfig::default()).unwrap();
        for (row, coolant) in result.as_array().rows().into_iter().zip([650.0, 710.0]) {
            for &t in row {
                assert_eq!(t, coolant);
            }
        }
    }

    #[test]
    fn metallic_pins_with_gap_are_monotonic() {
        let model = PinModel::new(metallic_design()).unwrap();
        let conditions = PinConditions::new(
            array![5.0e3, 2.0e4, 3.5e4],
            array![630.0, 680.0, 720.0],
            array![2.0e4, 5.0e4, 8.0e4],
        )
        .unwrap();
        let dz = StrictlyPositive::new(Length::new::<millimeter>(50.0)).unwrap();

        let result = solve(&model, &conditions, dz, &SolveConfig::default()).unwrap();
        assert_eq!(result.n_pins(), 3);
        assert!(result.as_array().iter().all(|t| t.is_finite()));
        assert_monotonic(&result);

        // The open gap carries a real temperature drop.
        let gap_drop = &result.column(Landmark::FuelOuter) - &result.column(Landmark::CladInner);
        assert!(gap_drop.iter().all(|&dt| dt > 0.0));

        // Hotter rows follow higher heat rates.
        let centerline = result.column(Landmark::FuelCenterline);
        assert!(centerline[0] < centerline[1] && centerline[1] < centerline[2]);
    }

    #[test]
    fn batch_matches_individual_solves() {
        let model = PinModel::new(metallic_design()).unwrap();
        let q = [1.0e4, 3.0e4];
        let t = [640.0, 690.0];
        let h = [3.0e4, 7.0e4];
        let config = SolveConfig {
            tolerance: StageConfig::clad().tolerance,
            clad_max_iters: 50,
            gap_max_iters: 50,
            fuel_max_iters: 50,
        };

        let batch = solve(
            &model,
            &PinConditions::new(array![q[0], q[1]], array![t[0], t[1]], array![h[0], h[1]])
                .unwrap(),
            slice(),
            &config,
        )
        .unwrap();

        for i in 0..2 {
            let single = solve(
                &model,
                &PinConditions::new(array![q[i]], array![t[i]], array![h[i]]).unwrap(),
                slice(),
                &config,
            )
            .unwrap();
            for landmark in Landmark::ALL {
                assert_relative_eq!(
                    batch.column(landmark)[i],
                    single.column(landmark)[0],
                    epsilon = 1e-4
                );
            }
        }
    }

    fn expect_not_converged(result: Result<PinTemperatures, SolveError>, expected: Stage, cap: usize) {
        match result {
            Err(SolveError::NotConverged {
                stage,
                iters,
                residual,
            }) => {
                assert_eq!(stage, expected);
                assert_eq!(iters, cap);
                assert!(residual.value > 0.0);
            }
            other => panic!("Expected NotConverged, got: {other:?}"),
        }
    }

    fn reference_conditions() -> PinConditions {
        PinConditions::new(array![3.0e4], array![600.0], array![5.0e4]).unwrap()
    }

    #[test]
    fn clad_stage_stops_at_its_cap() {
        let design = reference_design_with(Oscillating::shared(), reference_fuel());
        let model = PinModel::new(design).unwrap();

        let result = solve(&model, &reference_conditions(), slice(), &SolveConfig::default());
        expect_not_converged(result, Stage::Clad, 20);
    }

    #[test]
    fn gap_stage_stops_at_its_cap() {
        let design =
            reference_design().with_gap(Length::new::<millimeter>(0.1), Oscillating::shared());
        let model = PinModel::new(design).unwrap();

        let result = solve(&model, &reference_conditions(), slice(), &SolveConfig::default());
        expect_not_converged(result, Stage::Gap, 10);
    }

    #[test]
    fn fuel_stage_reports_the_failing_node() {
        let fuel = DirectFuel::new(vec![0.0, 0.5], vec![Oscillating::shared(), constant(20.0)]);
        let model = PinModel::new(reference_design_with(constant(20.0), fuel)).unwrap();

        let result = solve(&model, &reference_conditions(), slice(), &SolveConfig::default());
        expect_not_converged(result, Stage::Fuel { node: 0 }, 10);
    }

    #[test]
    fn negative_tolerance_is_a_configuration_error() {
        let model = PinModel::new(reference_design()).unwrap();
        let config = SolveConfig {
            tolerance: TemperatureInterval::new::<delta_kelvin>(-1.0),
            ..SolveConfig::default()
        };

        match solve(&model, &reference_conditions(), slice(), &config) {
            Err(SolveError::InvalidTolerance { stage, source }) => {
                assert_eq!(stage, Stage::Clad);
                assert_eq!(source, ConstraintError::Negative);
            }
            other => panic!("Expected InvalidTolerance, got: {other:?}"),
        }
    }

    #[test]
    fn custom_caps_are_honored() {
        let design = reference_design_with(Oscillating::shared(), reference_fuel());
        let model = PinModel::new(design).unwrap();
        let config = SolveConfig {
            clad_max_iters: 3,
            ..SolveConfig::default()
        };

        let result = solve(&model, &reference_conditions(), slice(), &config);
        expect_not_converged(result, Stage::Clad, 3);
    }
}
