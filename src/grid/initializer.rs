//! Grid initialization
//!
//! Allocates the solution buffer and writes the square-wave initial
//! condition and the Dirichlet boundaries.

use nalgebra::DVector;

use crate::error::Result;
use crate::grid::{AxisArrays, Grid};
use crate::physics::{courant_factor, AdvectionParameters, SolutionField};

/// Everything a stepper needs before the first time step
#[derive(Debug, Clone, PartialEq)]
pub struct InitializedGrid {
    /// Time step `T / N`
    pub dt: f64,

    /// Spatial step `L / M`
    pub dx: f64,

    /// `c·dt / (2·dx)`
    pub courant_factor: f64,

    /// Solution buffer with level 0 and both boundary rows written
    pub u: SolutionField,

    /// Node coordinates
    pub axes: AxisArrays,
}

impl InitializedGrid {
    /// Spatial coordinates
    pub fn x(&self) -> &DVector<f64> {
        &self.axes.x
    }

    /// Time coordinates
    pub fn t(&self) -> &DVector<f64> {
        &self.axes.t
    }
}

/// Build `(dt, dx, courant_factor, u, x, t)` for a run
///
/// - `u` is `(M + 1) × (N + 1)`, zero-filled
/// - `u[i, 0] = 1` when the 1-based position `i + 1` is below `front_size`
/// - `u[0, k] = 1` and `u[M, k] = 0` for every level `k`
///
/// The boundary rows are written last, so they hold at `k = 0` too.
///
/// # Errors
///
/// Returns [`crate::AdvectionError::InvalidGrid`] for a degenerate grid and
/// [`crate::AdvectionError::InvalidParameter`] for a non-finite velocity.
///
/// # Example
///
/// ```rust
/// use advect_rs::grid::{initialize, Grid};
/// use advect_rs::physics::AdvectionParameters;
///
/// let init = initialize(&Grid::new(1.0, 1.0, 300, 350), &AdvectionParameters::new(1.0, 50))?;
///
/// assert_eq!(init.u.level(0).iter().filter(|&&v| v == 1.0).count(), 49);
/// assert!((init.courant_factor - 300.0 / 700.0).abs() < 1e-12);
/// # Ok::<(), advect_rs::AdvectionError>(())
/// ```
pub fn initialize(grid: &Grid, parameters: &AdvectionParameters) -> Result<InitializedGrid> {
    grid.validate()?;
    parameters.validate()?;

    let dt = grid.dt();
    let dx = grid.dx();
    let last = grid.space_steps;

    let mut u = SolutionField::zeros(grid.space_steps, grid.time_steps);

    // Initial condition: square wave
    for (i, value) in u.level_mut(0).iter_mut().enumerate() {
        *value = if parameters.in_front(i) { 1.0 } else { 0.0 };
    }

    // Boundary conditions: inflow held at 1, outflow held at 0
    for k in 0..grid.levels() {
        let level = u.level_mut(k);
        level[0] = 1.0;
        level[last] = 0.0;
    }

    Ok(InitializedGrid {
        dt,
        dx,
        courant_factor: courant_factor(parameters.velocity, dt, dx),
        u,
        axes: grid.axes(),
    })
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvectionError;

    fn reference_grid() -> (Grid, AdvectionParameters) {
        (Grid::new(1.0, 1.0, 300, 350), AdvectionParameters::new(1.0, 50))
    }

    #[test]
    fn test_initial_row_has_49_ones() {
        let (grid, parameters) = reference_grid();
        let init = initialize(&grid, &parameters).unwrap();
        let level = init.u.level(0);

        assert!(level[..49].iter().all(|&v| v == 1.0));
        assert!(level[49..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_boundaries_on_every_level() {
        let (grid, parameters) = reference_grid();
        let init = initialize(&grid, &parameters).unwrap();

        for k in 0..=grid.time_steps {
            assert_eq!(init.u.get(0, k), 1.0);
            assert_eq!(init.u.get(300, k), 0.0);
        }
    }

    #[test]
    fn test_interior_is_zero_after_level_zero() {
        let (grid, parameters) = reference_grid();
        let init = initialize(&grid, &parameters).unwrap();

        for k in 1..=grid.time_steps {
            assert!(init.u.level(k)[1..300].iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_initialization_is_idempotent() {
        let (grid, parameters) = reference_grid();
        let first = initialize(&grid, &parameters).unwrap();
        let second = initialize(&grid, &parameters).unwrap();

        assert_eq!(first.dt.to_bits(), second.dt.to_bits());
        assert_eq!(first.dx.to_bits(), second.dx.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_front_size_saturates() {
        let grid = Grid::new(1.0, 1.0, 10, 5);

        let none = initialize(&grid, &AdvectionParameters::new(1.0, 0)).unwrap();
        assert_eq!(none.u.level(0), &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

        let all = initialize(&grid, &AdvectionParameters::new(1.0, 1_000)).unwrap();
        assert_eq!(all.u.level(0), &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_courant_factor_sign_follows_velocity() {
        let grid = Grid::new(1.0, 1.0, 100, 100);
        let init = initialize(&grid, &AdvectionParameters::new(-1.0, 10)).unwrap();

        assert_eq!(init.courant_factor, -0.5);
    }

    #[test]
    fn test_degenerate_grid_fails_fast() {
        let parameters = AdvectionParameters::new(1.0, 5);

        let error = initialize(&Grid::new(1.0, 1.0, 0, 10), &parameters).unwrap_err();
        assert!(matches!(error, AdvectionError::InvalidGrid { .. }));

        let error = initialize(&Grid::new(1.0, 1.0, 10, 0), &parameters).unwrap_err();
        assert!(matches!(error, AdvectionError::InvalidGrid { .. }));
    }

    #[test]
    fn test_single_interval_grid() {
        let grid = Grid::new(1.0, 1.0, 1, 1);
        let init = initialize(&grid, &AdvectionParameters::new(1.0, 50)).unwrap();

        assert_eq!(init.u.level(0), &[1.0, 0.0]);
        assert_eq!(init.u.level(1), &[1.0, 0.0]);
    }
}
