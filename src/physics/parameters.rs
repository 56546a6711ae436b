//! Advection parameters and CFL helpers
//!
//! The linear advection equation is fully characterised by its signed speed
//! `c`. The initial square wave is characterised by `front_size`, an index
//! threshold rather than a physical length.

use serde::{Deserialize, Serialize};

use crate::error::{AdvectionError, Result};

// =================================================================================================
// Advection Parameters
// =================================================================================================

/// Physical parameters of one advection run
///
/// # Fields
///
/// - `velocity`: signed advection speed `c` in `∂u/∂t + c ∂u/∂x = 0`
/// - `front_size`: 1-based position threshold of the initial square wave.
///   Every grid point whose 1-based position is strictly below `front_size`
///   starts at `1.0`.
///
/// Values of `front_size` outside `[1, space_steps + 1]` are legal: they
/// saturate to an initial row with no interior ones, or all interior ones.
///
/// # Example
///
/// ```rust
/// use advect_rs::physics::AdvectionParameters;
///
/// let parameters = AdvectionParameters::new(1.0, 50);
/// assert_eq!(parameters.front_size, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvectionParameters {
    /// Signed advection speed
    pub velocity: f64,

    /// Square-wave width as a 1-based index threshold
    pub front_size: usize,
}

impl AdvectionParameters {
    /// Create parameters
    pub fn new(velocity: f64, front_size: usize) -> Self {
        Self { velocity, front_size }
    }

    /// Check the velocity is a usable number
    ///
    /// `front_size` is never rejected, see the type documentation.
    pub fn validate(&self) -> Result<()> {
        if !self.velocity.is_finite() {
            return Err(AdvectionError::InvalidParameter {
                name: "velocity",
                value: self.velocity,
            });
        }
        Ok(())
    }

    /// Whether the 0-based grid index `i` lies inside the initial square wave
    pub fn in_front(&self, i: usize) -> bool {
        i + 1 < self.front_size
    }
}

impl Default for AdvectionParameters {
    fn default() -> Self {
        Self {
            velocity: 1.0,
            front_size: 50,
        }
    }
}

// =================================================================================================
// CFL Condition
// =================================================================================================

/// Courant number `|c|·dt/dx`
pub fn courant_number(velocity: f64, dt: f64, dx: f64) -> f64 {
    velocity.abs() * dt / dx
}

/// Courant factor `c·dt / (2·dx)`, the coefficient both schemes multiply the
/// centred difference by
pub fn courant_factor(velocity: f64, dt: f64, dx: f64) -> f64 {
    velocity * dt / (2.0 * dx)
}

/// CFL condition `|c|·dt/dx ≤ 1`
///
/// Lax-Friedrichs is stable exactly when this holds. Nothing in the crate
/// enforces it: callers may violate it on purpose to observe instability.
///
/// # Example
///
/// ```rust
/// use advect_rs::physics::is_cfl_satisfied;
///
/// assert!(is_cfl_satisfied(1.0, 0.01, 0.01));
/// assert!(is_cfl_satisfied(-0.5, 0.01, 0.01));
/// assert!(!is_cfl_satisfied(2.0, 0.01, 0.01));
/// ```
pub fn is_cfl_satisfied(velocity: f64, dt: f64, dx: f64) -> bool {
    courant_number(velocity, dt, dx) <= 1.0
}

// =================================================================================================
// Tests
// =================================================================================================
