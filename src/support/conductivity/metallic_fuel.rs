//! Metallic (U-Pu-Zr) fuel conductivity.
//!
//! Correlation from the Metallic Fuels Handbook, Section C.1.2, with the
//! porosity degradation used in Vilim's simple fuel pin model:
//!
//! ```text
//! k(T) = (c₀ + c₁·T + c₂·T²) · (1 − p) / (1 + β·p)
//!
//! c₀ = 17.5   · ((1 − 2.23·x_Zr) / (1 + 1.61·x_Zr) − 2.62·x_Pu)
//! c₁ = 0.0154 · ((1 + 0.061·x_Zr) / (1 + 1.61·x_Zr) + 0.9·x_Pu)
//! c₂ = 9.38e-6 · (1 − 2.7·x_Pu)
//! ```
//!
//! where `x_Pu` and `x_Zr` are weight fractions and `p` is porosity.

use ndarray::{Array1, ArrayView1};
use thiserror::Error;
use uom::si::{
    f64::{ThermalConductivity, ThermodynamicTemperature},
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{
    Constrained, ConstraintError, NonNegative, UnitInterval, UnitIntervalUpperOpen,
};

use super::{ConductivityModel, horner};

/// Porosity degradation exponent `β` used when none is given.
pub const DEFAULT_POROSITY_EXPONENT: f64 = 2.0;

/// Errors from validating a fuel composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompositionError {
    #[error("invalid Pu weight fraction")]
    PuFraction(#[source] ConstraintError),
    #[error("invalid Zr weight fraction")]
    ZrFraction(#[source] ConstraintError),
    #[error("invalid porosity")]
    Porosity(#[source] ConstraintError),
    #[error("invalid porosity exponent")]
    PorosityExponent(#[source] ConstraintError),
}

/// Composition of one radial fuel node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelComposition {
    pu_fraction: Constrained<f64, UnitInterval>,
    zr_fraction: Constrained<f64, UnitInterval>,
    porosity: Constrained<f64, UnitIntervalUpperOpen>,
}

impl FuelComposition {
    /// Validates Pu and Zr weight fractions in `[0, 1]` and porosity in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError`] naming the first out-of-range field.
    pub fn new(pu_fraction: f64, zr_fraction: f64, porosity: f64) -> Result<Self, CompositionError> {
        Ok(Self {
            pu_fraction: UnitInterval::new(pu_fraction).map_err(CompositionError::PuFraction)?,
            zr_fraction: UnitInterval::new(zr_fraction).map_err(CompositionError::ZrFraction)?,
            porosity: UnitIntervalUpperOpen::new(porosity).map_err(CompositionError::Porosity)?,
        })
    }

    #[must_use]
    pub fn pu_fraction(&self) -> f64 {
        *self.pu_fraction.as_ref()
    }

    #[must_use]
    pub fn zr_fraction(&self) -> f64 {
        *self.zr_fraction.as_ref()
    }

    #[must_use]
    pub fn porosity(&self) -> f64 {
        *self.porosity.as_ref()
    }
}

/// Composition-derived conductivity of a metallic fuel node.
///
/// Coefficients are computed once at construction; evaluation is a quadratic.
///
/// ```
/// use twine_pin_models::support::conductivity::{
///     ConductivityModel, FuelComposition, MetallicFuel,
/// };
/// use uom::si::{
///     f64::ThermodynamicTemperature, thermal_conductivity::watt_per_meter_kelvin,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let u10zr = FuelComposition::new(0.0, 0.1, 0.0).unwrap();
/// let fuel = MetallicFuel::with_default_exponent(u10zr);
/// let k = fuel.conductivity(ThermodynamicTemperature::new::<kelvin>(800.0));
/// assert!(k.get::<watt_per_meter_kelvin>() > 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetallicFuel {
    composition: FuelComposition,
    raw: [f64; 3],
    porosity_factor: f64,
}

impl MetallicFuel {
    /// Builds the correlation with porosity exponent `beta`.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::PorosityExponent`] if `beta` is negative or NaN.
    pub fn new(composition: FuelComposition, beta: f64) -> Result<Self, CompositionError> {
        let beta = NonNegative::new(beta).map_err(CompositionError::PorosityExponent)?;
        Ok(Self::from_parts(composition, beta.into_inner()))
    }

    /// Builds the correlation with `β` = [`DEFAULT_POROSITY_EXPONENT`].
    #[must_use]
    pub fn with_default_exponent(composition: FuelComposition) -> Self {
        Self::from_parts(composition, DEFAULT_POROSITY_EXPONENT)
    }

    fn from_parts(composition: FuelComposition, beta: f64) -> Self {
        let x_pu = composition.pu_fraction();
        let x_zr = composition.zr_fraction();
        let p = composition.porosity();

        let c0 = 17.5 * ((1.0 - 2.23 * x_zr) / (1.0 + 1.61 * x_zr) - 2.62 * x_pu);
        let c1 = 0.0154 * ((1.0 + 0.061 * x_zr) / (1.0 + 1.61 * x_zr) + 0.9 * x_pu);
        let c2 = 9.38e-6 * (1.0 - 2.7 * x_pu);

        Self {
            composition,
            raw: [c0, c1, c2],
            porosity_factor: (1.0 - p) / (1.0 + beta * p),
        }
    }

    /// Returns the node composition.
    #[must_use]
    pub fn composition(&self) -> FuelComposition {
        self.composition
    }

    /// Returns `[c₀, c₁, c₂]` before porosity degradation.
    #[must_use]
    pub fn raw_coefficients(&self) -> [f64; 3] {
        self.raw
    }

    /// Returns `(1 − p) / (1 + β·p)`.
    #[must_use]
    pub fn porosity_factor(&self) -> f64 {
        self.porosity_factor
    }

    fn evaluate(&self, t: f64) -> f64 {
        horner(&self.raw, t) * self.porosity_factor
    }
}

impl ConductivityModel for MetallicFuel {
    fn conductivity(&self, temperature: ThermodynamicTemperature) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(
            self.evaluate(temperature.get::<kelvin>()),
        )
    }

    fn conductivity_batch(&self, temperatures: ArrayView1<'_, f64>) -> Array1<f64> {
        temperatures.mapv(|t| self.evaluate(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn zero_porosity_matches_raw_polynomial() {
        let composition = FuelComposition::new(0.19, 0.10, 0.0).unwrap();
        let fuel = MetallicFuel::new(composition, DEFAULT_POROSITY_EXPONENT).unwrap();
        assert_relative_eq!(fuel.porosity_factor(), 1.0);

        let [c0, c1, c2] = fuel.raw_coefficients();
        let t = 900.0;
        let k = fuel.conductivity(ThermodynamicTemperature::new::<kelvin>(t));
        assert_relative_eq!(
            k.get::<watt_per_meter_kelvin>(),
            c0 + c1 * t + c2 * t * t,
            max_relative = 1e-14
        );
    }

    #[test]
    fn handbook_coefficients_for_u_pu_zr() {
        let composition = FuelComposition::new(0.19, 0.10, 0.0).unwrap();
        let [c0, c1, c2] = MetallicFuel::new(composition, 2.0)
            .unwrap()
            .raw_coefficients();

        assert_relative_eq!(
            c0,
            17.5 * ((1.0 - 0.223) / 1.161 - 2.62 * 0.19),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            c1,
            0.0154 * (1.0061 / 1.161 + 0.9 * 0.19),
            max_relative = 1e-12
        );
        assert_relative_eq!(c2, 9.38e-6 * (1.0 - 2.7 * 0.19), max_relative = 1e-12);
    }

    #[test]
    fn porosity_degrades_conductivity() {
        let dense = MetallicFuel::new(FuelComposition::new(0.0, 0.1, 0.0).unwrap(), 2.0).unwrap();
        let porous = MetallicFuel::new(FuelComposition::new(0.0, 0.1, 0.25).unwrap(), 2.0).unwrap();

        assert_relative_eq!(porous.porosity_factor(), 0.75 / 1.5);

        let t = array![700.0, 1000.0];
        let k_dense = dense.conductivity_batch(t.view());
        let k_porous = porous.conductivity_batch(t.view());
        assert_relative_eq!(k_porous[0], 0.5 * k_dense[0], max_relative = 1e-14);
        assert_relative_eq!(k_porous[1], 0.5 * k_dense[1], max_relative = 1e-14);
    }

    #[test]
    fn default_exponent_matches_explicit() {
        let composition = FuelComposition::new(0.1, 0.1, 0.15).unwrap();
        assert_eq!(
            MetallicFuel::with_default_exponent(composition),
            MetallicFuel::new(composition, DEFAULT_POROSITY_EXPONENT).unwrap()
        );
    }

    #[test]
    fn rejects_out_of_range_composition() {
        assert_eq!(
            FuelComposition::new(1.2, 0.1, 0.0),
            Err(CompositionError::PuFraction(ConstraintError::AboveMaximum))
        );
        assert_eq!(
            FuelComposition::new(0.1, -0.1, 0.0),
            Err(CompositionError::ZrFraction(ConstraintError::BelowMinimum))
        );
        assert_eq!(
            FuelComposition::new(0.1, 0.1, 1.0),
            Err(CompositionError::Porosity(ConstraintError::AboveMaximum))
        );

        let composition = FuelComposition::new(0.1, 0.1, 0.1).unwrap();
        assert_eq!(
            MetallicFuel::new(composition, -1.0),
            Err(CompositionError::PorosityExponent(ConstraintError::Negative))
        );
    }
}
