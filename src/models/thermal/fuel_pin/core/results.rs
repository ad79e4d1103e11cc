//! Landmark temperatures produced by a pin solve.

use ndarray::{Array2, ArrayView1};
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::support::units::TemperatureDifference;

/// One of the six characteristic radial temperatures, ordered from the
/// coolant inward. The discriminant is the column index in [`PinTemperatures`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    Coolant = 0,
    CladOuter = 1,
    CladMidwall = 2,
    CladInner = 3,
    FuelOuter = 4,
    FuelCenterline = 5,
}

impl Landmark {
    /// All landmarks in column order.
    pub const ALL: [Landmark; 6] = [
        Landmark::Coolant,
        Landmark::CladOuter,
        Landmark::CladMidwall,
        Landmark::CladInner,
        Landmark::FuelOuter,
        Landmark::FuelCenterline,
    ];

    #[must_use]
    pub fn column(self) -> usize {
        self as usize
    }
}

/// Landmark temperatures for a batch of pins.
///
/// Backed by an `(n_pins, 6)` array in kelvin, one row per pin and one column
/// per [`Landmark`].
#[derive(Debug, Clone, PartialEq)]
pub struct PinTemperatures(Array2<f64>);

impl PinTemperatures {
    pub(super) fn new(temperatures: Array2<f64>) -> Self {
        debug_assert_eq!(temperatures.ncols(), Landmark::ALL.len());
        Self(temperatures)
    }

    /// Number of pins in the batch.
    #[must_use]
    pub fn n_pins(&self) -> usize {
        self.0.nrows()
    }

    /// Temperatures (K) of one landmark across the batch.
    #[must_use]
    pub fn column(&self, landmark: Landmark) -> ArrayView1<'_, f64> {
        self.0.column(landmark.column())
    }

    /// Landmark temperatures of pin `index`, or `None` if out of range.
    #[must_use]
    pub fn pin(&self, index: usize) -> Option<LandmarkTemperatures> {
        if index >= self.n_pins() {
            return None;
        }
        let row = self.0.row(index);
        let t = |landmark: Landmark| ThermodynamicTemperature::new::<kelvin>(row[landmark.column()]);
        Some(LandmarkTemperatures {
            coolant: t(Landmark::Coolant),
            clad_outer: t(Landmark::CladOuter),
            clad_midwall: t(Landmark::CladMidwall),
            clad_inner: t(Landmark::CladInner),
            fuel_outer: t(Landmark::FuelOuter),
            fuel_centerline: t(Landmark::FuelCenterline),
        })
    }

    #[must_use]
    pub fn as_array(&self) -> &Array2<f64> {
        &self.0
    }

    #[must_use]
    pub fn into_array(self) -> Array2<f64> {
        self.0
    }
}

/// Landmark temperatures of a single pin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkTemperatures {
    pub coolant: ThermodynamicTemperature,
    pub clad_outer: ThermodynamicTemperature,
    pub clad_midwall: ThermodynamicTemperature,
    pub clad_inner: ThermodynamicTemperature,
    pub fuel_outer: ThermodynamicTemperature,
    pub fuel_centerline: ThermodynamicTemperature,
}

impl LandmarkTemperatures {
    /// Rise across the coolant film, clad outer surface minus coolant.
    #[must_use]
    pub fn film_rise(&self) -> TemperatureInterval {
        self.clad_outer.minus(self.coolant)
    }

    #[must_use]
    pub fn clad_rise(&self) -> TemperatureInterval {
        self.clad_inner.minus(self.clad_outer)
    }

    /// Zero when the pin has no gap.
    #[must_use]
    pub fn gap_rise(&self) -> TemperatureInterval {
        self.fuel_outer.minus(self.clad_inner)
    }

    #[must_use]
    pub fn fuel_rise(&self) -> TemperatureInterval {
        self.fuel_centerline.minus(self.fuel_outer)
    }
}
