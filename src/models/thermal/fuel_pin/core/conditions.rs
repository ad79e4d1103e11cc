//! Per-pin boundary conditions for one axial slice.

use ndarray::{Array1, ArrayView1, array};
use thiserror::Error;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::{HeatTransferCoefficient, LinearHeatRate},
};

/// Errors from assembling [`PinConditions`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConditionsError {
    #[error("pin batch is empty")]
    Empty,

    #[error(
        "heat rate ({heat_rate}), coolant temperature ({coolant}), and film coefficient \
         ({film}) arrays must have equal length"
    )]
    LengthMismatch {
        heat_rate: usize,
        coolant: usize,
        film: usize,
    },

    #[error("invalid {name} at pin {index}: {value}")]
    InvalidValue {
        name: &'static str,
        index: usize,
        value: f64,
    },
}

/// Linear heat rate, coolant temperature, and film coefficient for a batch of pins.
///
/// Values are SI: W/m, K, and W/m²·K. Heat rates must be finite, coolant
/// temperatures and film coefficients finite and strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct PinConditions {
    linear_heat_rate: Array1<f64>,
    coolant_temperature: Array1<f64>,
    film_coefficient: Array1<f64>,
}

impl PinConditions {
    /// Validates and collects per-pin conditions.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionsError`] if the batch is empty, the arrays differ in
    /// length, or any value is out of range.
    pub fn new(
        linear_heat_rate: Array1<f64>,
        coolant_temperature: Array1<f64>,
        film_coefficient: Array1<f64>,
    ) -> Result<Self, ConditionsError> {
        let n = linear_heat_rate.len();
        if coolant_temperature.len() != n || film_coefficient.len() != n {
            return Err(ConditionsError::LengthMismatch {
                heat_rate: n,
                coolant: coolant_temperature.len(),
                film: film_coefficient.len(),
            });
        }
        if n == 0 {
            return Err(ConditionsError::Empty);
        }

        check_each("linear heat rate", linear_heat_rate.view(), |q| q.is_finite())?;
        check_each("coolant temperature", coolant_temperature.view(), finite_positive)?;
        check_each("film coefficient", film_coefficient.view(), finite_positive)?;

        Ok(Self {
            linear_heat_rate,
            coolant_temperature,
            film_coefficient,
        })
    }

    /// Conditions for a single pin.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionsError::InvalidValue`] if any value is out of range.
    pub fn single(
        linear_heat_rate: LinearHeatRate,
        coolant_temperature: ThermodynamicTemperature,
        film_coefficient: HeatTransferCoefficient,
    ) -> Result<Self, ConditionsError> {
        Self::new(
            array![linear_heat_rate.value],
            array![coolant_temperature.get::<kelvin>()],
            array![film_coefficient.value],
        )
    }

    /// Number of pins in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.linear_heat_rate.len()
    }

    /// Always `false`; an empty batch is rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.linear_heat_rate.is_empty()
    }

    /// Linear heat rate per pin, W/m.
    #[must_use]
    pub fn linear_heat_rate(&self) -> ArrayView1<'_, f64> {
        self.linear_heat_rate.view()
    }

    /// Coolant temperature per pin, K.
    #[must_use]
    pub fn coolant_temperature(&self) -> ArrayView1<'_, f64> {
        self.coolant_temperature.view()
    }

    /// Film coefficient per pin, W/m²·K.
    #[must_use]
    pub fn film_coefficient(&self) -> ArrayView1<'_, f64> {
        self.film_coefficient.view()
    }
}

fn finite_positive(value: f64) -> bool {
    value.is_finite() && StrictlyPositive::check(&value).is_ok()
}

fn check_each(
    name: &'static str,
    values: ArrayView1<'_, f64>,
    valid: impl Fn(f64) -> bool,
) -> Result<(), ConditionsError> {
    match values.iter().position(|&v| !valid(v)) {
        Some(index) => Err(ConditionsError::InvalidValue {
            name,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, Length, Power, TemperatureInterval},
        length::meter,
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
    };

    #[test]
    fn single_pin_from_quantities() {
        let q: LinearHeatRate = Power::new::<watt>(3.0e4) / Length::new::<meter>(1.0);
        let htc: HeatTransferCoefficient = Power::new::<watt>(5.0e4)
            / Area::new::<square_meter>(1.0)
            / TemperatureInterval::new::<delta_kelvin>(1.0);
        let conditions =
            PinConditions::single(q, ThermodynamicTemperature::new::<kelvin>(600.0), htc).unwrap();

        assert_eq!(conditions.len(), 1);
        assert_relative_eq!(conditions.linear_heat_rate()[0], 3.0e4);
        assert_relative_eq!(conditions.coolant_temperature()[0], 600.0);
        assert_relative_eq!(conditions.film_coefficient()[0], 5.0e4);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let result = PinConditions::new(array![1.0, 2.0], array![600.0], array![1e4, 1e4]);
        assert_eq!(
            result,
            Err(ConditionsError::LengthMismatch {
                heat_rate: 2,
                coolant: 1,
                film: 2
            })
        );
    }

    #[test]
    fn rejects_empty_batch() {
        let empty = Array1::<f64>::zeros(0);
        assert_eq!(
            PinConditions::new(empty.clone(), empty.clone(), empty),
            Err(ConditionsError::Empty)
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            PinConditions::new(array![1e4, f64::NAN], array![600.0, 600.0], array![1e4, 1e4]),
            Err(ConditionsError::InvalidValue {
                name: "linear heat rate",
                index: 1,
                ..
            })
        ));
        assert!(matches!(
            PinConditions::new(array![1e4], array![600.0], array![0.0]),
            Err(ConditionsError::InvalidValue {
                name: "film coefficient",
                index: 0,
                ..
            })
        ));
        assert!(matches!(
            PinConditions::new(array![1e4], array![-1.0], array![1e4]),
            Err(ConditionsError::InvalidValue {
                name: "coolant temperature",
                ..
            })
        ));
    }
}
