//! Fuel pin radial temperature models.
//!
//! This module provides a [`twine_core::Model`] implementation for the radial
//! temperature profile of a fuel pin at one axial slice.
//! The computational core is in the internal [`core`] module; its public types
//! are re-exported here.

mod core;

pub use self::core::{
    CladGeometry, CladTemperatures, CompositionFuel, ConditionsError, DEFAULT_EMISSIVITY,
    DirectFuel, FuelGeometry, FuelNode, GapGeometry, Landmark, LandmarkTemperatures,
    PinConditions, PinConfigError, PinDesign, PinGeometry, PinModel, PinTemperatures,
    STEFAN_BOLTZMANN, SolveConfig, SolveError, Stage, StageConfig,
};

use std::sync::Arc;

use twine_core::Model;
use uom::si::f64::Length;

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Conditions for one axial slice of a batch of pins.
#[derive(Debug, Clone, PartialEq)]
pub struct AxialSlice {
    pub conditions: PinConditions,

    /// Axial length of the slice.
    pub dz: Constrained<Length, StrictlyPositive>,
}

/// Fuel pin model solving the six landmark temperatures of an [`AxialSlice`].
///
/// The pin model is held behind an [`Arc`], so cloning a `FuelPin` is cheap
/// and clones can be evaluated from several threads at once.
#[derive(Debug, Clone)]
pub struct FuelPin {
    model: Arc<PinModel>,
    config: SolveConfig,
}

impl FuelPin {
    /// Creates a fuel pin model with the default [`SolveConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`PinConfigError`] if the design is invalid.
    pub fn new(design: PinDesign) -> Result<Self, PinConfigError> {
        Ok(Self {
            model: Arc::new(PinModel::new(design)?),
            config: SolveConfig::default(),
        })
    }

    #[must_use]
    pub fn with_config(mut self, config: SolveConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn model(&self) -> &PinModel {
        &self.model
    }

    #[must_use]
    pub fn config(&self) -> &SolveConfig {
        &self.config
    }
}

impl Model for FuelPin {
    type Input = AxialSlice;
    type Output = PinTemperatures;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.model.solve(&input.conditions, input.dz, &self.config)
    }
}
