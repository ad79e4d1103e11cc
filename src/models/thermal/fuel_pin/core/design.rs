//! Static pin design input.
//!
//! A [`PinDesign`] collects everything needed to build a
//! [`PinModel`](super::PinModel): pin dimensions, the cladding correlation,
//! one fuel specification, and optionally a fuel-clad gap.
//! Nothing is validated here; [`PinModel::new`](super::PinModel::new) checks
//! the whole design at once and reports a [`PinConfigError`].

mod error;

pub use error::PinConfigError;

use uom::{ConstZero, si::f64::Length};

use crate::support::conductivity::{DEFAULT_POROSITY_EXPONENT, SharedConductivity};

/// Pellet surface emissivity used when none is given.
pub const DEFAULT_EMISSIVITY: f64 = 0.9;

/// Fuel described by per-node alloy composition.
///
/// Entry `i` of each array belongs to radial node `i`, ordered from the pellet
/// center outward. `r_frac[i]` is the inner fractional radius of node `i`;
/// the last node extends to the pellet surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionFuel {
    pub r_frac: Vec<f64>,
    pub pu_frac: Vec<f64>,
    pub zr_frac: Vec<f64>,
    pub porosity: Vec<f64>,
    /// Porosity degradation exponent `β`.
    pub beta: f64,
}

impl CompositionFuel {
    /// Creates a composition specification with the default porosity exponent.
    #[must_use]
    pub fn new(r_frac: Vec<f64>, pu_frac: Vec<f64>, zr_frac: Vec<f64>, porosity: Vec<f64>) -> Self {
        Self {
            r_frac,
            pu_frac,
            zr_frac,
            porosity,
            beta: DEFAULT_POROSITY_EXPONENT,
        }
    }

    #[must_use]
    pub fn with_porosity_exponent(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }
}

/// Fuel described by one conductivity correlation per radial node.
#[derive(Debug, Clone)]
pub struct DirectFuel {
    pub r_frac: Vec<f64>,
    pub materials: Vec<SharedConductivity>,
}

impl DirectFuel {
    #[must_use]
    pub fn new(r_frac: Vec<f64>, materials: Vec<SharedConductivity>) -> Self {
        Self { r_frac, materials }
    }
}

/// Pin design input for building a [`PinModel`](super::PinModel).
#[derive(Debug, Clone)]
pub struct PinDesign {
    pub(super) outer_diameter: Length,
    pub(super) clad_thickness: Length,
    pub(super) clad: SharedConductivity,
    pub(super) composition: Option<CompositionFuel>,
    pub(super) direct: Option<DirectFuel>,
    pub(super) gap_thickness: Length,
    pub(super) gap: Option<SharedConductivity>,
    pub(super) emissivity: f64,
}

impl PinDesign {
    /// Starts a design with no fuel specification and a closed gap.
    #[must_use]
    pub fn new(outer_diameter: Length, clad_thickness: Length, clad: SharedConductivity) -> Self {
        Self {
            outer_diameter,
            clad_thickness,
            clad,
            composition: None,
            direct: None,
            gap_thickness: Length::ZERO,
            gap: None,
            emissivity: DEFAULT_EMISSIVITY,
        }
    }

    #[must_use]
    pub fn with_composition_fuel(mut self, fuel: CompositionFuel) -> Self {
        self.composition = Some(fuel);
        self
    }

    #[must_use]
    pub fn with_direct_fuel(mut self, fuel: DirectFuel) -> Self {
        self.direct = Some(fuel);
        self
    }

    /// Adds a fuel-clad gap filled with `material`.
    #[must_use]
    pub fn with_gap(mut self, thickness: Length, material: SharedConductivity) -> Self {
        self.gap_thickness = thickness;
        self.gap = Some(material);
        self
    }

    /// Sets the gap thickness without changing the gap material.
    #[must_use]
    pub fn with_gap_thickness(mut self, thickness: Length) -> Self {
        self.gap_thickness = thickness;
        self
    }

    #[must_use]
    pub fn with_emissivity(mut self, emissivity: f64) -> Self {
        self.emissivity = emissivity;
        self
    }
}
