use std::fmt;

use thiserror::Error;
use uom::si::f64::TemperatureInterval;

use crate::support::constraint::ConstraintError;

/// The iteration stage of a pin solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Clad inner-surface temperature.
    Clad,
    /// Fuel surface temperature across the fuel-clad gap.
    Gap,
    /// Inner-boundary temperature of fuel node `node` (0 is innermost).
    Fuel { node: usize },
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Clad => f.write_str("clad"),
            Stage::Gap => f.write_str("fuel-clad gap"),
            Stage::Fuel { node } => write!(f, "fuel node {node}"),
        }
    }
}

/// Errors that can occur while solving pin temperatures.
///
/// A failed solve returns no partial results for any pin in the batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// A stage reached its iteration cap without meeting the batch tolerance.
    ///
    /// Usually a sign of unphysical inputs, such as an extreme heat rate or a
    /// near-zero film coefficient.
    #[error("{stage} temperature did not converge: iters={iters}, residual={residual:?}")]
    NotConverged {
        stage: Stage,

        /// Averaged updates performed, equal to the stage cap.
        iters: usize,

        /// Largest change between the last two iterates over the batch.
        residual: TemperatureInterval,
    },

    /// The stage tolerance is not a positive temperature interval.
    #[error("invalid {stage} tolerance")]
    InvalidTolerance {
        stage: Stage,
        #[source]
        source: ConstraintError,
    },

    /// A per-pin array passed to a stage does not match the batch size.
    #[error("expected {expected} pins, found {found}")]
    BatchLength { expected: usize, found: usize },
}
