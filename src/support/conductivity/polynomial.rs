use ndarray::{Array1, ArrayView1};
use thiserror::Error;
use uom::si::{
    f64::{ThermalConductivity, ThermodynamicTemperature},
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{ConductivityModel, horner};

/// Errors from building a [`Polynomial`] correlation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolynomialError {
    #[error("polynomial correlation needs at least one coefficient")]
    Empty,
    #[error("coefficient {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },
}

/// Conductivity as a polynomial in absolute temperature.
///
/// Coefficients are in ascending order of power with `T` in kelvin and `k` in
/// W/m·K, so `[c₀, c₁, c₂]` gives `k(T) = c₀ + c₁·T + c₂·T²`.
///
/// ```
/// use twine_pin_models::support::conductivity::{ConductivityModel, Polynomial};
/// use uom::si::{
///     f64::ThermodynamicTemperature, thermal_conductivity::watt_per_meter_kelvin,
///     thermodynamic_temperature::kelvin,
/// };
///
/// // HT9 cladding, roughly.
/// let ht9 = Polynomial::new([17.622, 2.42e-2, -1.696e-5]).unwrap();
/// let k = ht9.conductivity(ThermodynamicTemperature::new::<kelvin>(700.0));
/// assert!(k.get::<watt_per_meter_kelvin>() > 25.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a correlation from coefficients in ascending power order.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError`] if no coefficients are given or any is not finite.
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Result<Self, PolynomialError> {
        let coefficients = coefficients.into();
        if coefficients.is_empty() {
            return Err(PolynomialError::Empty);
        }
        if let Some((index, &value)) = coefficients
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_finite())
        {
            return Err(PolynomialError::NonFinite { index, value });
        }
        Ok(Self { coefficients })
    }

    /// Creates a temperature-independent correlation.
    #[must_use]
    pub fn constant(k: ThermalConductivity) -> Self {
        Self {
            coefficients: vec![k.get::<watt_per_meter_kelvin>()],
        }
    }

    /// Returns the coefficients in ascending power order.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl ConductivityModel for Polynomial {
    fn conductivity(&self, temperature: ThermodynamicTemperature) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(horner(
            &self.coefficients,
            temperature.get::<kelvin>(),
        ))
    }

    fn conductivity_batch(&self, temperatures: ArrayView1<'_, f64>) -> Array1<f64> {
        temperatures.mapv(|t| horner(&self.coefficients, t))
    }
}
