use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtracts two absolute temperatures into a temperature interval.
///
/// [`uom`] does not define `ThermodynamicTemperature - ThermodynamicTemperature`;
/// see [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn rise_across_clad() {
        let outer = ThermodynamicTemperature::new::<abs_kelvin>(622.7);
        let inner = ThermodynamicTemperature::new::<abs_kelvin>(656.9);

        assert_relative_eq!(inner.minus(outer).get::<delta_kelvin>(), 34.2, epsilon = 1e-9);
        assert_relative_eq!(outer.minus(inner).get::<delta_kelvin>(), -34.2, epsilon = 1e-9);
    }

    #[test]
    fn mixed_scales() {
        let t_c = ThermodynamicTemperature::new::<degree_celsius>(326.85);
        let t_k = ThermodynamicTemperature::new::<abs_kelvin>(600.0);
        assert_relative_eq!(t_c.minus(t_k).get::<delta_kelvin>(), 0.0, epsilon = 1e-9);
    }
}
