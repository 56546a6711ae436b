//! Lax-Friedrichs scheme
//!
//! # Mathematical Background
//!
//! FTCS with the centre value replaced by the average of its neighbours:
//!
//! ```text
//! u[i,k+1] = ½·(u[i+1,k] + u[i−1,k]) − f·(u[i+1,k] − u[i−1,k]),    f = c·dt / (2·dx)
//! ```
//!
//! # Stability
//!
//! ```text
//! g(θ) = cos θ − i·C·sin θ,    |g(θ)|² = cos²θ + C²·sin²θ,    C = c·dt/dx
//! ```
//!
//! Stable iff `|C| ≤ 1` (CFL). The condition is **not** enforced; callers
//! may violate it to watch the solution blow up.
//!
//! # Numerical Dissipation
//!
//! The averaging adds an artificial viscosity `(dx²/2dt)·(1 − C²)`, which
//! smears the square-wave front. At `C = 1` the viscosity vanishes and the
//! update reduces to the exact shift `u[i,k+1] = u[i−1,k]`: binary 0/1 data
//! stays binary.
//!
//! For `|C| ≤ 1` both neighbour weights `½ ∓ C/2` are non-negative, so the
//! scheme is monotone and values stay within the range of the initial data.

use crate::solver::traits::Stepper;

/// Lax-Friedrichs update from the two neighbours of level `k`
#[inline]
pub fn lax_friedrichs_update(left: f64, right: f64, factor: f64) -> f64 {
    0.5 * (right + left) - factor * (right - left)
}

/// Lax-Friedrichs as a standalone [`Stepper`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LaxFriedrichsStepper;

impl LaxFriedrichsStepper {
    /// Create the stepper
    pub fn new() -> Self {
        Self
    }
}

impl Stepper for LaxFriedrichsStepper {
    fn update(&self, level: &[f64], i: usize, factor: f64) -> f64 {
        lax_friedrichs_update(level[i - 1], level[i + 1], factor)
    }

    fn name(&self) -> &'static str {
        "Lax-Friedrichs"
    }

    fn is_conditionally_stable(&self) -> bool {
        true
    }
}

// =================================================================================================
// Tests
// =================================================================================================
