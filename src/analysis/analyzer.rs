//! Resolution sweep against a fine reference run
//!
//! # Algorithm
//!
//! 1. Run the reference with `reference_space_steps` intervals in space
//!    *and* in time, so that `dt = dx` when `max_time = max_length`
//! 2. For `j = 0, 1, ..., sweep_len − 1`:
//!    - run a degraded simulation with `reference_space_steps − j` spatial
//!      intervals and `reference_time_steps` time intervals
//!    - `errors[j]` = sup over the common spatial indices of
//!      `|u_ref[i, time_index] − u_degraded[i, time_index]|`
//!    - `delta_xs[j] = max_time / (reference_time_steps − j)`
//! 3. Stop with [`AdvectionError::DegradedResolutionExhausted`] as soon as
//!    either step count would drop to zero
//!
//! The two grids have different sizes, so the comparison is by index over
//! the shorter level, not by physical position.

use tracing::{debug, info, trace};

use crate::analysis::{ErrorSweep, ErrorSweepConfig, DEFAULT_SWEEP_LEN};
use crate::error::{AdvectionError, Result, SweepAxis};
use crate::physics::sup_norm;
use crate::solver::{Scheme, SimulationConfig, SimulationResult, Simulator};

/// Measures how the error at a fixed time level grows as the grid coarsens
///
/// # Example
///
/// ```rust
/// use advect_rs::analysis::ErrorAnalyzer;
///
/// let sweep = ErrorAnalyzer::new()
///     .with_sweep_len(10)
///     .error_at_timestep(20, 1.0, 1.0, 1.0, 120, 100, 20)?;
///
/// assert_eq!(sweep.len(), 10);
/// # Ok::<(), advect_rs::AdvectionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorAnalyzer {
    scheme: Scheme,
    sweep_len: usize,
}

impl Default for ErrorAnalyzer {
    fn default() -> Self {
        Self {
            scheme: Scheme::LaxFriedrichs,
            sweep_len: DEFAULT_SWEEP_LEN,
        }
    }
}

impl ErrorAnalyzer {
    /// Lax-Friedrichs analyzer with 100 sweep iterations
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_sweep_len(mut self, sweep_len: usize) -> Self {
        self.sweep_len = sweep_len;
        self
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn sweep_len(&self) -> usize {
        self.sweep_len
    }

    /// Scalar call surface using this analyzer's scheme and sweep length
    #[allow(clippy::too_many_arguments)]
    pub fn error_at_timestep(
        &self,
        time_index: usize,
        max_length: f64,
        max_time: f64,
        velocity: f64,
        reference_time_steps: usize,
        reference_space_steps: usize,
        front_size: usize,
    ) -> Result<ErrorSweep> {
        let config = ErrorSweepConfig::new(
            time_index,
            max_length,
            max_time,
            velocity,
            reference_time_steps,
            reference_space_steps,
            front_size,
        )
        .with_scheme(self.scheme)
        .with_sweep_len(self.sweep_len);

        self.run(&config)
    }

    /// Run the sweep described by `config`
    ///
    /// `config.scheme` and `config.sweep_len` take precedence over the
    /// analyzer's own settings.
    ///
    /// # Errors
    ///
    /// - [`AdvectionError::TimeIndexOutOfRange`] when `time_index` exceeds
    ///   either step count
    /// - [`AdvectionError::DegradedResolutionExhausted`] when a step count
    ///   reaches zero, with the completed entries in `partial`
    /// - any error of the underlying simulator runs
    pub fn run(&self, config: &ErrorSweepConfig) -> Result<ErrorSweep> {
        config.validate()?;

        info!(
            "{} error sweep: time_index={}, reference {}x{}, degraded time_steps={}, {} iterations",
            config.scheme,
            config.time_index,
            config.reference_space_steps,
            config.reference_space_steps,
            config.reference_time_steps,
            config.sweep_len
        );

        let simulator = Simulator::new();

        let reference_config = SimulationConfig::new(config.scheme)
            .with_grid(
                config.max_length,
                config.max_time,
                config.reference_space_steps,
                config.reference_space_steps,
            )
            .with_velocity(config.velocity)
            .with_front_size(config.front_size);
        let reference = simulator.run(&reference_config)?;

        let mut sweep = ErrorSweep::with_capacity(config.sweep_len);

        for j in 0..config.sweep_len {
            let space_steps = match remaining_steps(config.reference_space_steps, j) {
                Some(steps) => steps,
                None => return Err(exhausted(j, config.reference_space_steps, SweepAxis::Space, sweep)),
            };
            let time_steps = match remaining_steps(config.reference_time_steps, j) {
                Some(steps) => steps,
                None => return Err(exhausted(j, config.reference_time_steps, SweepAxis::Time, sweep)),
            };

            let degraded_config = reference_config.with_grid(
                config.max_length,
                config.max_time,
                space_steps,
                config.reference_time_steps,
            );
            let degraded = simulator.run(&degraded_config)?;

            let error = level_error(&reference, &degraded, config.time_index)?;
            let delta_x = config.max_time / time_steps as f64;

            trace!("sweep iteration {j}: space_steps={space_steps}, delta_x={delta_x}, error={error}");

            sweep.push(delta_x, error);
        }

        info!(
            "{} error sweep complete: max error {:?}, trend {:?}",
            config.scheme,
            sweep.max_error(),
            sweep.trend()
        );

        Ok(sweep)
    }
}

/// `error_at_timestep(time_index, L, T, c, reference_time_steps, reference_space_steps, front_size)`
///
/// Lax-Friedrichs sweep of 100 iterations; see [`ErrorAnalyzer`].
#[allow(clippy::too_many_arguments)]
pub fn error_at_timestep(
    time_index: usize,
    max_length: f64,
    max_time: f64,
    velocity: f64,
    reference_time_steps: usize,
    reference_space_steps: usize,
    front_size: usize,
) -> Result<ErrorSweep> {
    ErrorAnalyzer::new().error_at_timestep(
        time_index,
        max_length,
        max_time,
        velocity,
        reference_time_steps,
        reference_space_steps,
        front_size,
    )
}

/// Sup-norm of the difference of two runs at `time_index`, over the common
/// spatial indices
///
/// NaN propagates, so an overflowed run never reports a finite error.
pub fn level_error(
    reference: &SimulationResult,
    degraded: &SimulationResult,
    time_index: usize,
) -> Result<f64> {
    let max = reference.time_steps().min(degraded.time_steps());
    if time_index > max {
        return Err(AdvectionError::TimeIndexOutOfRange { time_index, max });
    }

    let differences: Vec<f64> = reference
        .level(time_index)
        .iter()
        .zip(degraded.level(time_index))
        .map(|(r, d)| r - d)
        .collect();

    Ok(sup_norm(&differences))
}

/// `steps − j` when strictly positive
fn remaining_steps(steps: usize, j: usize) -> Option<usize> {
    steps.checked_sub(j).filter(|&remaining| remaining > 0)
}

fn exhausted(iteration: usize, reference_steps: usize, axis: SweepAxis, partial: ErrorSweep) -> AdvectionError {
    debug!(
        "error sweep stopped at iteration {iteration}: {axis} steps exhausted, {} entries kept",
        partial.len()
    );
    AdvectionError::DegradedResolutionExhausted {
        iteration,
        reference_steps,
        axis,
        partial,
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::simulate;

    #[test]
    fn test_identical_runs_have_zero_error() {
        let run = simulate(Scheme::LaxFriedrichs, 1.0, 1.0, 1.0, 40, 40, 10).unwrap();
        assert_eq!(level_error(&run, &run, 40).unwrap(), 0.0);
    }

    #[test]
    fn test_level_error_uses_common_prefix() {
        let fine = simulate(Scheme::LaxFriedrichs, 1.0, 1.0, 1.0, 10, 20, 5).unwrap();
        let coarse = simulate(Scheme::LaxFriedrichs, 1.0, 1.0, 1.0, 10, 10, 5).unwrap();

        // Level 0 of both is ones on 0..4 then zeros; indices 11..=20 of the
        // fine run have no counterpart and are ignored
        assert_eq!(level_error(&fine, &coarse, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_level_error_rejects_missing_level() {
        let short = simulate(Scheme::Ftcs, 1.0, 1.0, 1.0, 5, 10, 3).unwrap();
        let long = simulate(Scheme::Ftcs, 1.0, 1.0, 1.0, 10, 10, 3).unwrap();

        assert!(matches!(
            level_error(&long, &short, 6),
            Err(AdvectionError::TimeIndexOutOfRange { time_index: 6, max: 5 })
        ));
    }

    #[test]
    fn test_first_entry_compares_equal_grids() {
        // reference_time_steps == reference_space_steps: iteration 0 repeats the reference
        let sweep = ErrorAnalyzer::new()
            .with_sweep_len(3)
            .error_at_timestep(10, 1.0, 1.0, 1.0, 50, 50, 10)
            .unwrap();

        assert_eq!(sweep.len(), 3);
        assert_eq!(sweep.errors()[0], 0.0);
        assert_eq!(sweep.delta_xs()[0], 1.0 / 50.0);
        assert_eq!(sweep.delta_xs()[2], 1.0 / 48.0);
    }

    #[test]
    fn test_space_exhaustion_keeps_prefix() {
        let result = ErrorAnalyzer::new()
            .with_sweep_len(10)
            .error_at_timestep(2, 1.0, 1.0, 1.0, 20, 6, 3);

        match result {
            Err(AdvectionError::DegradedResolutionExhausted {
                iteration,
                reference_steps,
                axis,
                partial,
            }) => {
                assert_eq!(iteration, 6);
                assert_eq!(reference_steps, 6);
                assert_eq!(axis, SweepAxis::Space);
                assert_eq!(partial.len(), 6);
                assert!(partial.errors().iter().all(|e| e.is_finite()));
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn test_time_exhaustion_keeps_prefix() {
        let result = ErrorAnalyzer::new()
            .with_sweep_len(10)
            .error_at_timestep(2, 1.0, 1.0, 1.0, 4, 20, 3);

        let error = result.unwrap_err();
        assert!(matches!(
            error,
            AdvectionError::DegradedResolutionExhausted { axis: SweepAxis::Time, iteration: 4, .. }
        ));
        let partial = error.partial_sweep().unwrap();
        assert_eq!(partial.len(), 4);
        assert!(partial.delta_xs().iter().all(|dx| dx.is_finite()));
    }

    #[test]
    fn test_config_overrides_analyzer_settings() {
        let config = ErrorSweepConfig::new(5, 1.0, 1.0, 1.0, 30, 30, 5)
            .with_scheme(Scheme::Ftcs)
            .with_sweep_len(4);

        let sweep = ErrorAnalyzer::new().run(&config).unwrap();
        assert_eq!(sweep.len(), 4);
    }

    #[test]
    fn test_free_function_defaults() {
        let analyzer = ErrorAnalyzer::new();
        assert_eq!(analyzer.scheme(), Scheme::LaxFriedrichs);
        assert_eq!(analyzer.sweep_len(), 100);

        let sweep = error_at_timestep(20, 1.0, 1.0, 1.0, 120, 100, 20).unwrap();
        assert_eq!(sweep.len(), 100);
    }
}
