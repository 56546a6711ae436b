//! Simulator: grid initialization plus repeated stepping
//!
//! # Algorithm
//!
//! 1. Validate the configuration
//! 2. Initialize the grid (square wave, Dirichlet boundaries)
//! 3. For each time level `k = 0, 1, ..., N − 1`:
//!    - split the field into level `k` (read-only) and level `k + 1` (write)
//!    - compute every interior point `i = 1, ..., M − 1` of level `k + 1`
//! 4. Return the filled field with its axes
//!
//! Level `k + 1` depends on level `k` only. The split borrow makes that
//! structural: no update can observe a value written in its own level.
//!
//! # Example
//!
//! ```rust
//! use advect_rs::solver::{simulate, Scheme};
//!
//! let result = simulate(Scheme::LaxFriedrichs, 1.0, 1.0, 1.0, 350, 300, 50)?;
//!
//! assert!((0..=350).all(|k| result.level(k)[0] == 1.0));
//! assert!((0..=350).all(|k| result.level(k)[300] == 0.0));
//! # Ok::<(), advect_rs::AdvectionError>(())
//! ```

use tracing::{debug, warn};

use crate::error::Result;
use crate::grid::initialize;
use crate::physics::SolutionField;
use crate::solver::{SimulationConfig, SimulationResult, Scheme, Stepper};

// =================================================================================================
// Simulator
// =================================================================================================

/// Explicit time-marching driver
///
/// Stateless: one instance can run any number of independent simulations,
/// each owning its own [`SolutionField`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Create a simulator
    pub fn new() -> Self {
        Self
    }

    /// Run the simulation described by `config`
    ///
    /// # Errors
    ///
    /// [`crate::AdvectionError::InvalidGrid`] for a degenerate grid,
    /// [`crate::AdvectionError::InvalidParameter`] for a non-finite velocity.
    /// An unstable run is not an error: its values are returned as computed.
    pub fn run(&self, config: &SimulationConfig) -> Result<SimulationResult> {

        // ====== Step 1: Validation ======

        config.validate()?;

        let grid = config.grid();
        let parameters = config.parameters();
        let scheme = config.scheme;

        // ====== Step 2: Setup ======

        let mut init = initialize(&grid, &parameters)?;
        let courant = 2.0 * init.courant_factor.abs();

        debug!(
            "{} run: space_steps={}, time_steps={}, dx={}, dt={}, courant={}",
            scheme, grid.space_steps, grid.time_steps, init.dx, init.dt, courant
        );

        if scheme.is_conditionally_stable() && courant > 1.0 {
            warn!(
                "{scheme} run violates the CFL condition (courant number {courant} > 1); \
                 the solution will grow without bound"
            );
        }

        // ====== Step 3: Time Integration ======

        integrate(&scheme, &mut init.u, init.courant_factor);

        debug!("{} run complete: final sup-norm {}", scheme, init.u.sup_norm(grid.time_steps));

        // ====== Step 4: Build Result ======

        let mut result = SimulationResult::new(
            init.axes.x,
            init.axes.t,
            init.u,
            init.dt,
            init.dx,
            init.courant_factor,
            scheme,
        );

        result.add_metadata("scheme", scheme.name());
        result.add_metadata("space steps", &grid.space_steps.to_string());
        result.add_metadata("time steps", &grid.time_steps.to_string());
        result.add_metadata("dx", &init.dx.to_string());
        result.add_metadata("dt", &init.dt.to_string());
        result.add_metadata("velocity", &parameters.velocity.to_string());
        result.add_metadata("front size", &parameters.front_size.to_string());

        Ok(result)
    }
}

/// Scalar call surface: `simulate(scheme, L, T, c, N, M, front_size)`
///
/// Equivalent to [`Simulator::run`] on the corresponding
/// [`SimulationConfig`].
#[allow(clippy::too_many_arguments)]
pub fn simulate(
    scheme: Scheme,
    max_length: f64,
    max_time: f64,
    velocity: f64,
    time_steps: usize,
    space_steps: usize,
    front_size: usize,
) -> Result<SimulationResult> {
    let config = SimulationConfig::new(scheme)
        .with_grid(max_length, max_time, space_steps, time_steps)
        .with_velocity(velocity)
        .with_front_size(front_size);

    Simulator::new().run(&config)
}

// =================================================================================================
// Time Integration
// =================================================================================================

/// Fill levels `1..=N` of `u` in place, level by level
///
/// Level 0 and the two boundary rows must already be set; they are never
/// written. Any [`Stepper`] can drive the loop.
pub fn integrate<S: Stepper + ?Sized>(stepper: &S, u: &mut SolutionField, factor: f64) {
    let time_steps = u.time_steps();
    let mut overflow_reported = false;

    for k in 0..time_steps {
        let (previous, next) = u.split_levels(k);
        step_level(stepper, previous, next, factor);

        // Unstable schemes may overflow; that is their behaviour, not a failure.
        if !overflow_reported && next.iter().any(|v| !v.is_finite()) {
            warn!(
                "{}: non-finite value first reached at time level {}",
                stepper.name(),
                k + 1
            );
            overflow_reported = true;
        }
    }
}

/// Compute interior points `1..M` of one level from the previous level
fn step_level<S: Stepper + ?Sized>(stepper: &S, previous: &[f64], next: &mut [f64], factor: f64) {
    let last = previous.len() - 1;
    if last < 2 {
        // no interior point
        return;
    }
    let interior = &mut next[1..last];

    if interior.len() > crate::solver::parallel_threshold() {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            interior
                .par_iter_mut()
                .enumerate()
                .for_each(|(offset, value)| *value = stepper.update(previous, offset + 1, factor));
            return;
        }
    }

    for (offset, value) in interior.iter_mut().enumerate() {
        *value = stepper.update(previous, offset + 1, factor);
    }
}

// =================================================================================================
// Tests
// =================================================================================================
