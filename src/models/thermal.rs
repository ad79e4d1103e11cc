//! Thermal models.
//!
//! This module contains models for heat conduction in reactor components.

pub mod fuel_pin;
