//! Forward-Time Centred-Space scheme
//!
//! # Mathematical Background
//!
//! Forward Euler in time, centred difference in space:
//!
//! ```text
//! u[i,k+1] = u[i,k] − f·(u[i+1,k] − u[i−1,k]),    f = c·dt / (2·dx)
//! ```
//!
//! # Stability
//!
//! Von Neumann analysis gives the amplification factor
//!
//! ```text
//! g(θ) = 1 − 2i·f·sin θ,    |g(θ)|² = 1 + 4f²·sin²θ
//! ```
//!
//! so `|g| > 1` for every non-zero wavenumber and every `f ≠ 0`. The scheme is
//! **unconditionally unstable** for advection: rounding error and the jumps
//! of the square wave grow without bound as `k` increases. This is the
//! expected behaviour and is reproduced exactly, with no stabilising term.
//!
//! # When to Use
//!
//! - Demonstrating why a centred explicit scheme fails for hyperbolic PDEs
//! - Baseline for comparison with Lax-Friedrichs

use crate::solver::traits::Stepper;

/// FTCS update from the three neighbouring values of level `k`
#[inline]
pub fn ftcs_update(left: f64, centre: f64, right: f64, factor: f64) -> f64 {
    centre - factor * (right - left)
}

/// FTCS as a standalone [`Stepper`]
///
/// # Example
///
/// ```rust
/// use advect_rs::solver::methods::FtcsStepper;
/// use advect_rs::solver::Stepper;
///
/// let stepper = FtcsStepper::new();
/// assert_eq!(stepper.name(), "FTCS");
/// assert_eq!(stepper.update(&[1.0, 0.5, 0.0], 1, 0.5), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FtcsStepper;

impl FtcsStepper {
    /// Create the stepper
    pub fn new() -> Self {
        Self
    }
}

impl Stepper for FtcsStepper {
    fn update(&self, level: &[f64], i: usize, factor: f64) -> f64 {
        ftcs_update(level[i - 1], level[i], level[i + 1], factor)
    }

    fn name(&self) -> &'static str {
        "FTCS"
    }

    fn is_conditionally_stable(&self) -> bool {
        false
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Scheme;

    #[test]
    fn test_constant_state_is_preserved() {
        for factor in [-1.0, -0.25, 0.0, 0.5, 3.0] {
            assert_eq!(ftcs_update(0.7, 0.7, 0.7, factor), 0.7);
        }
    }

    #[test]
    fn test_zero_factor_is_identity() {
        assert_eq!(ftcs_update(1.0, 0.3, -2.0, 0.0), 0.3);
    }

    #[test]
    fn test_matches_scheme_dispatch() {
        let level = [1.0, 0.8, 0.1, 0.0];
        let stepper = FtcsStepper::new();

        for i in 1..3 {
            assert_eq!(
                stepper.update(&level, i, 0.3),
                Scheme::Ftcs.update(&level, i, 0.3)
            );
        }
    }

    #[test]
    fn test_amplifies_quarter_wave_mode() {
        // Quarter-wavelength mode, sin θ = 1
        let mode = [0.0, 1.0, 0.0, -1.0, 0.0];
        let factor = 0.5;
        let next: Vec<f64> = (1..4).map(|i| ftcs_update(mode[i - 1], mode[i], mode[i + 1], factor)).collect();

        let energy_before: f64 = mode[1..4].iter().map(|v| v * v).sum();
        let energy_after: f64 = next.iter().map(|v| v * v).sum();
        assert!(energy_after > energy_before);
    }
}
