//! Temperature-dependent thermal conductivity correlations.
//!
//! Each radial region of a fuel pin (clad, gap, every fuel node) is bound to a
//! [`ConductivityModel`]. The conduction solver evaluates correlations for a
//! whole batch of pins at once through [`ConductivityModel::conductivity_batch`],
//! which works on raw SI values (kelvin in, W/m·K out).
//!
//! Two correlations are provided:
//!
//! - [`Polynomial`]: stored coefficients, `k(T) = c₀ + c₁·T + c₂·T² + …`
//! - [`MetallicFuel`]: U-Pu-Zr alloy quadratic derived from composition and
//!   degraded by porosity
//!
//! Correlations are shared between regions and across threads through
//! [`SharedConductivity`].

mod metallic_fuel;
mod polynomial;

use std::{fmt, sync::Arc};

use ndarray::{Array1, ArrayView1};
use uom::si::{
    f64::{ThermalConductivity, ThermodynamicTemperature},
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

pub use metallic_fuel::{
    CompositionError, DEFAULT_POROSITY_EXPONENT, FuelComposition, MetallicFuel,
};
pub use polynomial::{Polynomial, PolynomialError};

/// A thermal conductivity correlation.
pub trait ConductivityModel: fmt::Debug {
    /// Returns the thermal conductivity at `temperature`.
    fn conductivity(&self, temperature: ThermodynamicTemperature) -> ThermalConductivity;

    /// Returns the thermal conductivity (W/m·K) at each temperature (K).
    ///
    /// The default evaluates [`ConductivityModel::conductivity`] element by
    /// element; correlations with a closed form should override it.
    fn conductivity_batch(&self, temperatures: ArrayView1<'_, f64>) -> Array1<f64> {
        temperatures.mapv(|t| {
            self.conductivity(ThermodynamicTemperature::new::<kelvin>(t))
                .get::<watt_per_meter_kelvin>()
        })
    }
}

/// Reference-counted handle to a correlation usable from any thread.
pub type SharedConductivity = Arc<dyn ConductivityModel + Send + Sync>;

/// Evaluates `k(T) = Σ cᵢ·Tⁱ` by Horner's rule.
fn horner(coefficients: &[f64], t: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}
