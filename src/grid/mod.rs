//! Space-time discretization
//!
//! # Design
//!
//! A [`Grid`] is the uniform discretization of `[0, L] × [0, T]` into
//! `space_steps` spatial intervals and `time_steps` time intervals. The axes
//! built from it ([`AxisArrays`]) and the initialized solution buffer
//! ([`InitializedGrid`]) are produced by [`initialize`].
//!
//! ```text
//!   t ▲
//!  T  ┤ u[0,N]=1 ·  ·  ·  · u[M,N]=0
//!     │    ·                  ·
//!     │    ·    interior      ·      (filled by a stepper)
//!     │    ·                  ·
//!  0  ┤ u[0,0]=1 1  1  0  0 u[M,0]=0  (square wave)
//!     └────┬──────────────────┬────▶ x
//!          0                  L
//! ```

mod initializer;

pub use initializer::{initialize, InitializedGrid};

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::{AdvectionError, Result};

// =================================================================================================
// Grid
// =================================================================================================

/// Uniform space-time discretization
///
/// # Invariant
///
/// `dx > 0` and `dt > 0`, enforced by [`Grid::validate`]. Every entry point
/// validates before allocating.
///
/// # Example
///
/// ```rust
/// use advect_rs::grid::Grid;
///
/// let grid = Grid::new(1.0, 1.0, 300, 350);
/// assert!(grid.validate().is_ok());
/// assert_eq!(grid.dx(), 1.0 / 300.0);
/// assert_eq!(grid.dt(), 1.0 / 350.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Domain length `L`
    pub max_length: f64,

    /// Simulation horizon `T`
    pub max_time: f64,

    /// Number of spatial intervals `M`
    pub space_steps: usize,

    /// Number of time intervals `N`
    pub time_steps: usize,
}

impl Grid {
    /// Create a grid (not validated)
    pub fn new(max_length: f64, max_time: f64, space_steps: usize, time_steps: usize) -> Self {
        Self {
            max_length,
            max_time,
            space_steps,
            time_steps,
        }
    }

    /// Spatial step `L / M`
    pub fn dx(&self) -> f64 {
        self.max_length / self.space_steps as f64
    }

    /// Time step `T / N`
    pub fn dt(&self) -> f64 {
        self.max_time / self.time_steps as f64
    }

    /// Number of spatial points (`M + 1`)
    pub fn points(&self) -> usize {
        self.space_steps + 1
    }

    /// Number of time levels (`N + 1`)
    pub fn levels(&self) -> usize {
        self.time_steps + 1
    }

    /// Fail fast on a degenerate grid
    ///
    /// # Errors
    ///
    /// [`AdvectionError::InvalidGrid`] when either step count is zero, or
    /// when an extent is non-finite or non-positive. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        if self.space_steps == 0 {
            return Err(AdvectionError::invalid_grid(
                self.space_steps,
                self.time_steps,
                "space_steps must be positive",
            ));
        }
        if self.time_steps == 0 {
            return Err(AdvectionError::invalid_grid(
                self.space_steps,
                self.time_steps,
                "time_steps must be positive",
            ));
        }
        if !(self.max_length.is_finite() && self.max_length > 0.0) {
            return Err(AdvectionError::invalid_grid(
                self.space_steps,
                self.time_steps,
                format!("max_length must be positive and finite, got {}", self.max_length),
            ));
        }
        if !(self.max_time.is_finite() && self.max_time > 0.0) {
            return Err(AdvectionError::invalid_grid(
                self.space_steps,
                self.time_steps,
                format!("max_time must be positive and finite, got {}", self.max_time),
            ));
        }
        Ok(())
    }

    /// Build the coordinate axes
    pub fn axes(&self) -> AxisArrays {
        AxisArrays::new(self)
    }
}

// =================================================================================================
// Axis Arrays
// =================================================================================================

/// Coordinates of the grid nodes
///
/// `x[i] = i·dx` and `t[k] = k·dt`, each computed directly from its index so
/// that no rounding accumulates along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisArrays {
    /// Spatial coordinates, length `M + 1`
    pub x: DVector<f64>,

    /// Time coordinates, length `N + 1`
    pub t: DVector<f64>,
}

impl AxisArrays {
    /// Axes of `grid`
    pub fn new(grid: &Grid) -> Self {
        let dx = grid.dx();
        let dt = grid.dt();
        Self {
            x: DVector::from_fn(grid.points(), |i, _| i as f64 * dx),
            t: DVector::from_fn(grid.levels(), |k, _| k as f64 * dt),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_steps() {
        let grid = Grid::new(2.0, 0.5, 4, 10);

        assert_relative_eq!(grid.dx(), 0.5);
        assert_relative_eq!(grid.dt(), 0.05);
        assert_eq!(grid.points(), 5);
        assert_eq!(grid.levels(), 11);
    }

    #[test]
    fn test_zero_space_steps_rejected() {
        let error = Grid::new(1.0, 1.0, 0, 10).validate().unwrap_err();
        assert!(matches!(error, AdvectionError::InvalidGrid { space_steps: 0, .. }));
    }

    #[test]
    fn test_zero_time_steps_rejected() {
        let error = Grid::new(1.0, 1.0, 10, 0).validate().unwrap_err();
        assert!(matches!(error, AdvectionError::InvalidGrid { time_steps: 0, .. }));
    }

    #[test]
    fn test_non_positive_extent_rejected() {
        assert!(Grid::new(0.0, 1.0, 10, 10).validate().is_err());
        assert!(Grid::new(1.0, -1.0, 10, 10).validate().is_err());
        assert!(Grid::new(f64::NAN, 1.0, 10, 10).validate().is_err());
        assert!(Grid::new(1.0, f64::INFINITY, 10, 10).validate().is_err());
    }

    #[test]
    fn test_axes_endpoints() {
        let axes = Grid::new(1.0, 2.0, 300, 350).axes();

        assert_eq!(axes.x.len(), 301);
        assert_eq!(axes.t.len(), 351);
        assert_eq!(axes.x[0], 0.0);
        assert_eq!(axes.t[0], 0.0);
        assert_relative_eq!(axes.x[300], 1.0, epsilon = 1e-12);
        assert_relative_eq!(axes.t[350], 2.0, epsilon = 1e-12);
    }
}
