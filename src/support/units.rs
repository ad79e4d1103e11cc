//! Extensions to [`uom`].
//!
//! Pin design inputs and scalar results use [`uom`] quantities. This module
//! adds the pieces the fuel pin models need that [`uom`] does not provide:
//!
//! - [`TemperatureDifference::minus`] for subtracting absolute temperatures
//!   into a [`TemperatureInterval`](uom::si::f64::TemperatureInterval).
//! - Heat-rate quantities for line, surface-film, and volumetric sources.
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use twine_pin_models::support::units::TemperatureDifference;
//!
//! let clad_od = ThermodynamicTemperature::new::<kelvin>(623.0);
//! let coolant = ThermodynamicTemperature::new::<kelvin>(600.0);
//! let film_rise = clad_od.minus(coolant);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{HeatTransferCoefficient, LinearHeatRate, VolumetricHeatRate};
pub use temperature_difference::TemperatureDifference;
