//! Steady-state radial conduction in a fuel pin.
//!
//! A [`PinModel`] is built once per pin design from a [`PinDesign`], then
//! solved repeatedly for batches of pins sharing that design, one axial slice
//! at a time. The model is immutable after construction and can be shared
//! across threads.

mod conditions;
mod config;
mod design;
mod geometry;
mod results;
mod solve;

#[cfg(test)]
mod test_support;

pub use conditions::{ConditionsError, PinConditions};
pub use config::{SolveConfig, StageConfig};
pub use design::{CompositionFuel, DEFAULT_EMISSIVITY, DirectFuel, PinConfigError, PinDesign};
pub use geometry::{CladGeometry, FuelGeometry, FuelNode, GapGeometry, PinGeometry};
pub use results::{Landmark, LandmarkTemperatures, PinTemperatures};
pub use solve::{CladTemperatures, STEFAN_BOLTZMANN, SolveError, Stage};

use std::sync::Arc;

use ndarray::{Array1, ArrayView1};
use uom::si::{f64::Length, length::meter};

use crate::support::{
    conductivity::{ConductivityModel, FuelComposition, MetallicFuel, SharedConductivity},
    constraint::{Constrained, StrictlyPositive},
};

/// Pin geometry bound to a conductivity correlation for every radial region.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use ndarray::array;
/// use twine_pin_models::{
///     models::thermal::fuel_pin::{
///         DirectFuel, Landmark, PinConditions, PinDesign, PinModel, SolveConfig,
///     },
///     support::{
///         conductivity::{Polynomial, SharedConductivity},
///         constraint::StrictlyPositive,
///     },
/// };
/// use uom::si::{f64::Length, length::meter};
///
/// let steel: SharedConductivity = Arc::new(Polynomial::new([20.0]).unwrap());
/// let design = PinDesign::new(
///     Length::new::<meter>(0.0084),
///     Length::new::<meter>(0.00056),
///     steel.clone(),
/// )
/// .with_direct_fuel(DirectFuel::new(vec![0.0], vec![steel]));
///
/// let model = PinModel::new(design).unwrap();
/// let conditions = PinConditions::new(array![3.0e4], array![600.0], array![5.0e4]).unwrap();
/// let dz = StrictlyPositive::new(Length::new::<meter>(1.0)).unwrap();
///
/// let temperatures = model.solve(&conditions, dz, &SolveConfig::default()).unwrap();
/// assert!(temperatures.column(Landmark::FuelCenterline)[0] > 600.0);
/// ```
#[derive(Debug, Clone)]
pub struct PinModel {
    geometry: PinGeometry,
    clad: SharedConductivity,
    gap: Option<SharedConductivity>,
    fuel: Vec<SharedConductivity>,
}

impl PinModel {
    /// Validates a pin design and precomputes its geometry.
    ///
    /// Composition-specified fuel nodes are each bound to a [`MetallicFuel`]
    /// correlation. A gap material given with a zero gap thickness is unused.
    ///
    /// # Errors
    ///
    /// Returns [`PinConfigError`] if the fuel specification is missing,
    /// duplicated, or inconsistent in length, if a dimension, fractional radius,
    /// composition, or emissivity is out of range, or if an open gap has no
    /// material.
    pub fn new(design: PinDesign) -> Result<Self, PinConfigError> {
        let PinDesign {
            outer_diameter,
            clad_thickness,
            clad,
            composition,
            direct,
            gap_thickness,
            gap,
            emissivity,
        } = design;

        let fuel_spec = match (composition, direct) {
            (None, None) => return Err(PinConfigError::MissingFuelSpec),
            (Some(_), Some(_)) => return Err(PinConfigError::DuplicateFuelSpec),
            (Some(composition), None) => FuelSpec::Composition(composition),
            (None, Some(direct)) => FuelSpec::Direct(direct),
        };
        fuel_spec.check_lengths()?;

        let geometry = PinGeometry::new(
            outer_diameter,
            clad_thickness,
            gap_thickness,
            fuel_spec.r_frac(),
            emissivity,
        )?;

        let fuel = fuel_spec.into_materials()?;

        let gap = match (geometry.gap().is_open(), gap) {
            (false, _) => None,
            (true, Some(material)) => Some(material),
            (true, None) => {
                return Err(PinConfigError::MissingGapMaterial {
                    thickness: geometry.gap().thickness(),
                });
            }
        };

        Ok(Self {
            geometry,
            clad,
            gap,
            fuel,
        })
    }

    #[must_use]
    pub fn geometry(&self) -> &PinGeometry {
        &self.geometry
    }

    /// Solves the six landmark temperatures for every pin in `conditions`.
    ///
    /// `dz` is the axial length of the slice; the heat deposited in each pin
    /// over the slice is `q'·dz`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NotConverged`] if any stage exhausts its iteration
    /// cap, or [`SolveError::InvalidTolerance`] if the tolerance is not
    /// strictly positive. No partial results are returned.
    pub fn solve(
        &self,
        conditions: &PinConditions,
        dz: Constrained<Length, StrictlyPositive>,
        config: &SolveConfig,
    ) -> Result<PinTemperatures, SolveError> {
        solve::solve(self, conditions, dz, config)
    }

    /// Solves the clad outer, midwall, and inner temperatures alone.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NotConverged`] if the clad stage does not converge.
    pub fn clad_temperatures(
        &self,
        conditions: &PinConditions,
        dz: Constrained<Length, StrictlyPositive>,
        config: &StageConfig,
    ) -> Result<CladTemperatures, SolveError> {
        let dz = dz.into_inner().get::<meter>();
        let q_total = &conditions.linear_heat_rate() * dz;
        solve::clad_temperatures(
            self.geometry.clad(),
            self.clad_material(),
            q_total.view(),
            dz,
            conditions.coolant_temperature(),
            conditions.film_coefficient(),
            config,
        )
    }

    /// Solves the fuel surface temperature from the clad inner temperature.
    ///
    /// With a closed gap the clad inner temperature is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::BatchLength`] if the arrays differ in length, or
    /// [`SolveError::NotConverged`] if the gap stage does not converge.
    pub fn fuel_surface_temperature(
        &self,
        linear_heat_rate: ArrayView1<'_, f64>,
        clad_inner_temperature: ArrayView1<'_, f64>,
        dz: Constrained<Length, StrictlyPositive>,
        config: &StageConfig,
    ) -> Result<Array1<f64>, SolveError> {
        check_batch(linear_heat_rate, clad_inner_temperature)?;
        let dz = dz.into_inner().get::<meter>();
        let q_total = &linear_heat_rate * dz;
        solve::fuel_surface_temperature(
            self.geometry.gap(),
            self.geometry.fuel(),
            self.gap_material(),
            q_total.view(),
            dz,
            clad_inner_temperature,
            config,
        )
    }

    /// Solves the fuel centerline temperature from the fuel surface temperature.
    ///
    /// For annular fuel this is the temperature at the inner pellet surface.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::BatchLength`] if the arrays differ in length, or
    /// [`SolveError::NotConverged`] naming the first fuel node that does not
    /// converge.
    pub fn fuel_centerline_temperature(
        &self,
        linear_heat_rate: ArrayView1<'_, f64>,
        fuel_surface_temperature: ArrayView1<'_, f64>,
        config: &StageConfig,
    ) -> Result<Array1<f64>, SolveError> {
        check_batch(linear_heat_rate, fuel_surface_temperature)?;
        let q_density = &linear_heat_rate / self.geometry.fuel().area_m2();
        solve::fuel_centerline_temperature(
            self.geometry.fuel(),
            &self.fuel,
            q_density.view(),
            fuel_surface_temperature,
            config,
        )
    }

    fn clad_material(&self) -> &dyn ConductivityModel {
        &*self.clad
    }

    /// Present only when the gap is open.
    fn gap_material(&self) -> Option<&dyn ConductivityModel> {
        self.gap.as_deref().map(|k| k as &dyn ConductivityModel)
    }

    fn fuel_materials(&self) -> &[SharedConductivity] {
        &self.fuel
    }
}

fn check_batch(expected: ArrayView1<'_, f64>, found: ArrayView1<'_, f64>) -> Result<(), SolveError> {
    if expected.len() == found.len() {
        Ok(())
    } else {
        Err(SolveError::BatchLength {
            expected: expected.len(),
            found: found.len(),
        })
    }
}

/// The single fuel specification chosen by a design.
enum FuelSpec {
    Composition(CompositionFuel),
    Direct(DirectFuel),
}

impl FuelSpec {
    fn r_frac(&self) -> &[f64] {
        match self {
            Self::Composition(fuel) => &fuel.r_frac,
            Self::Direct(fuel) => &fuel.r_frac,
        }
    }

    fn check_lengths(&self) -> Result<(), PinConfigError> {
        match self {
            Self::Composition(fuel) => {
                let n = fuel.r_frac.len();
                if [&fuel.pu_frac, &fuel.zr_frac, &fuel.porosity]
                    .iter()
                    .all(|values| values.len() == n)
                {
                    Ok(())
                } else {
                    Err(PinConfigError::CompositionLengthMismatch {
                        r_frac: n,
                        pu_frac: fuel.pu_frac.len(),
                        zr_frac: fuel.zr_frac.len(),
                        porosity: fuel.porosity.len(),
                    })
                }
            }
            Self::Direct(fuel) => {
                if fuel.r_frac.len() == fuel.materials.len() {
                    Ok(())
                } else {
                    Err(PinConfigError::DirectLengthMismatch {
                        zones: fuel.r_frac.len(),
                        materials: fuel.materials.len(),
                    })
                }
            }
        }
    }

    fn into_materials(self) -> Result<Vec<SharedConductivity>, PinConfigError> {
        match self {
            Self::Direct(fuel) => Ok(fuel.materials),
            Self::Composition(fuel) => fuel
                .pu_frac
                .iter()
                .zip(&fuel.zr_frac)
                .zip(&fuel.porosity)
                .enumerate()
                .map(|(index, ((&pu, &zr), &porosity))| {
                    FuelComposition::new(pu, zr, porosity)
                        .and_then(|composition| MetallicFuel::new(composition, fuel.beta))
                        .map(|k| Arc::new(k) as SharedConductivity)
                        .map_err(|source| PinConfigError::InvalidComposition { index, source })
                })
                .collect(),
        }
    }
}
