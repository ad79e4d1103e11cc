use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use ndarray::{Array1, ArrayView1};
use uom::si::{
    f64::{Length, ThermalConductivity, ThermodynamicTemperature},
    length::{meter, millimeter},
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::conductivity::{ConductivityModel, Polynomial, SharedConductivity};

use super::{CompositionFuel, DirectFuel, PinDesign};

/// A temperature-independent conductivity (W/m·K).
pub(super) fn constant(k: f64) -> SharedConductivity {
    Arc::new(Polynomial::constant(
        ThermalConductivity::new::<watt_per_meter_kelvin>(k),
    ))
}

/// Single fuel node spanning the whole pellet at 20 W/m·K.
pub(super) fn reference_fuel() -> DirectFuel {
    DirectFuel::new(vec![0.0], vec![constant(20.0)])
}

/// 8.4 mm pin with 0.56 mm clad and no gap.
pub(super) fn reference_design_with(clad: SharedConductivity, fuel: DirectFuel) -> PinDesign {
    PinDesign::new(
        Length::new::<meter>(0.0084),
        Length::new::<meter>(0.00056),
        clad,
    )
    .with_direct_fuel(fuel)
}

/// Reference pin with 20 W/m·K clad and fuel and no gap.
pub(super) fn reference_design() -> PinDesign {
    reference_design_with(constant(20.0), reference_fuel())
}

/// U-Pu-Zr pin with three composition nodes and a sodium-bonded gap.
pub(super) fn metallic_design() -> PinDesign {
    let fuel = CompositionFuel::new(
        vec![0.0, 0.4, 0.7],
        vec![0.19, 0.19, 0.19],
        vec![0.10, 0.10, 0.06],
        vec![0.0, 0.05, 0.10],
    );
    PinDesign::new(
        Length::new::<meter>(0.0084),
        Length::new::<meter>(0.00056),
        Arc::new(Polynomial::new([13.0, 0.015]).unwrap()),
    )
    .with_composition_fuel(fuel)
    .with_gap(Length::new::<millimeter>(0.1), constant(60.0))
}

/// A conductivity that alternates between two values on every batch call.
///
/// The averaged conductivity then flips between `high` and `(high + low)/2`,
/// so the iterate never settles.
#[derive(Debug)]
pub(super) struct Oscillating {
    calls: AtomicUsize,
    high: f64,
    low: f64,
}

impl Oscillating {
    pub(super) fn shared() -> SharedConductivity {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            high: 20.0,
            low: 2.0,
        })
    }

    fn next(&self) -> f64 {
        if self.calls.fetch_add(1, Ordering::Relaxed).is_multiple_of(2) {
            self.high
        } else {
            self.low
        }
    }
}

impl ConductivityModel for Oscillating {
    fn conductivity(&self, _temperature: ThermodynamicTemperature) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(self.next())
    }

    fn conductivity_batch(&self, temperatures: ArrayView1<'_, f64>) -> Array1<f64> {
        Array1::from_elem(temperatures.len(), self.next())
    }
}
