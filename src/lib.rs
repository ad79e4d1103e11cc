//! # Twine Pin Models
//!
//! Fuel pin thermal models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! The main entry point is
//! [`PinModel`](models::thermal::fuel_pin::PinModel): built once from a pin
//! design, it solves the steady-state radial temperature profile (coolant,
//! clad outer surface, clad midwall, clad inner surface, fuel surface, fuel
//! centerline) for a batch of pins at one axial slice.
//! [`FuelPin`](models::thermal::fuel_pin::FuelPin) wraps it as a
//! [`twine_core::Model`].
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models, including thermal
//!   conductivity correlations.
//!
//! ## Logging
//!
//! The solver reports stage convergence through the [`log`] facade at
//! `debug` level and iteration-cap failures at `warn` level. No logger is
//! installed by this crate.

pub mod models;
pub mod support;
