use thiserror::Error;
use uom::si::f64::Length;

use crate::support::constraint::ConstraintError;
use crate::support::conductivity::CompositionError;

/// Errors detected while building a [`PinModel`](super::super::PinModel).
///
/// Every variant is fatal: a model is never built from inconsistent design data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PinConfigError {
    /// Neither a composition nor a direct fuel specification was given.
    #[error("one of a composition or a direct fuel specification is required")]
    MissingFuelSpec,

    /// Both fuel specification modes were given.
    #[error("only one of a composition or a direct fuel specification is allowed")]
    DuplicateFuelSpec,

    /// Composition arrays differ in length.
    #[error(
        "fractional radius ({r_frac}), Pu fraction ({pu_frac}), Zr fraction ({zr_frac}), \
         and porosity ({porosity}) arrays must have equal length"
    )]
    CompositionLengthMismatch {
        r_frac: usize,
        pu_frac: usize,
        zr_frac: usize,
        porosity: usize,
    },

    /// Direct specification has a different number of zones and materials.
    #[error("{zones} radial zones but {materials} fuel materials")]
    DirectLengthMismatch { zones: usize, materials: usize },

    /// A gap has nonzero thickness but no conductivity correlation.
    #[error("gap material is required for a gap thickness of {thickness:?}")]
    MissingGapMaterial { thickness: Length },

    /// The fuel specification has no radial nodes.
    #[error("fuel must have at least one radial node")]
    NoFuelNodes,

    /// A fractional radius is outside `[0, 1]`, decreasing, or leaves no fuel.
    #[error("invalid fractional radius {value} at node {index}")]
    FractionalRadius { index: usize, value: f64 },

    /// A pin dimension violates its bound.
    #[error("invalid {name}")]
    InvalidDimension {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A fuel node composition is out of range.
    #[error("invalid composition at fuel node {index}")]
    InvalidComposition {
        index: usize,
        #[source]
        source: CompositionError,
    },

    /// Pellet surface emissivity is outside `[0, 1]`.
    #[error("invalid emissivity")]
    Emissivity(#[source] ConstraintError),
}
