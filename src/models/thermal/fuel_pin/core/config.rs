use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Solver configuration for a full pin temperature solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveConfig {
    /// Absolute tolerance applied to every iteration stage.
    ///
    /// A stage converges once the largest change in its iterated temperature,
    /// taken over the whole pin batch, is at or below this value.
    pub tolerance: TemperatureInterval,

    /// Iteration cap for the cladding stage.
    pub clad_max_iters: usize,

    /// Iteration cap for the fuel-clad gap stage.
    pub gap_max_iters: usize,

    /// Iteration cap for each fuel node.
    pub fuel_max_iters: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            tolerance: TemperatureInterval::new::<delta_kelvin>(1e-3),
            clad_max_iters: 20,
            gap_max_iters: 10,
            fuel_max_iters: 10,
        }
    }
}

impl SolveConfig {
    pub(super) fn clad(&self) -> StageConfig {
        StageConfig {
            tolerance: self.tolerance,
            max_iters: self.clad_max_iters,
        }
    }

    pub(super) fn gap(&self) -> StageConfig {
        StageConfig {
            tolerance: self.tolerance,
            max_iters: self.gap_max_iters,
        }
    }

    pub(super) fn fuel(&self) -> StageConfig {
        StageConfig {
            tolerance: self.tolerance,
            max_iters: self.fuel_max_iters,
        }
    }
}

/// Convergence settings for a single iteration stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageConfig {
    /// Absolute tolerance on the whole-batch temperature change.
    pub tolerance: TemperatureInterval,

    /// Averaged updates allowed after the seed estimate.
    pub max_iters: usize,
}

impl StageConfig {
    /// Defaults for calling the cladding stage on its own.
    #[must_use]
    pub fn clad() -> Self {
        Self::tight(20)
    }

    /// Defaults for calling the gap stage on its own.
    #[must_use]
    pub fn gap() -> Self {
        Self::tight(10)
    }

    /// Defaults for calling the fuel stage on its own.
    #[must_use]
    pub fn fuel() -> Self {
        Self::tight(10)
    }

    fn tight(max_iters: usize) -> Self {
        Self {
            tolerance: TemperatureInterval::new::<delta_kelvin>(1e-6),
            max_iters,
        }
    }

    pub(super) fn tolerance_k(&self) -> f64 {
        self.tolerance.get::<delta_kelvin>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn full_solve_defaults() {
        let config = SolveConfig::default();
        assert_relative_eq!(config.tolerance.get::<delta_kelvin>(), 1e-3);
        assert_eq!(config.clad().max_iters, 20);
        assert_eq!(config.gap().max_iters, 10);
        assert_eq!(config.fuel().max_iters, 10);
        assert_eq!(config.fuel().tolerance, config.tolerance);
    }

    #[test]
    fn stage_defaults_are_tighter() {
        for stage in [StageConfig::clad(), StageConfig::gap(), StageConfig::fuel()] {
            assert_relative_eq!(stage.tolerance_k(), 1e-6);
        }
        assert_eq!(StageConfig::clad().max_iters, 20);
        assert_eq!(StageConfig::gap().max_iters, 10);
    }
}
