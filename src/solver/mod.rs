//! Numerical solvers
//!
//! This module turns an initialized grid into a full space-time solution.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Configuration** (`SimulationConfig`) - WHAT to solve
//!    - Domain extents and step counts
//!    - Advection speed and square-wave width
//!    - Scheme selection
//!
//! 2. **Stepper** (`Stepper` trait, `Scheme` enum) - HOW one level advances
//!    - FTCS or Lax-Friedrichs update rule
//!    - Pure, stateless, interior points only
//!
//! 3. **Simulator** (`Simulator`, `simulate`) - the time-marching loop
//!    - Initializes the grid once
//!    - Advances level by level, strictly in time order
//!    - Returns a `SimulationResult`
//!
//! # Module Organization
//!
//! - **`traits`**: `Stepper` trait and `Scheme` enum
//! - **`config`**: `SimulationConfig` (builder + JSON loading)
//! - **`result`**: `SimulationResult` with diagnostics
//! - **`simulator`**: `Simulator`, `simulate`, `integrate`
//! - **`methods`**: the update rules themselves
//!
//! # Quick Start Example
//!
//! ```rust
//! use advect_rs::solver::{Scheme, SimulationConfig, Simulator};
//!
//! let config = SimulationConfig::new(Scheme::LaxFriedrichs)
//!     .with_grid(1.0, 1.0, 300, 350)
//!     .with_velocity(1.0)
//!     .with_front_size(50);
//!
//! let result = Simulator::new().run(&config)?;
//!
//! // Lax-Friedrichs under CFL keeps the square wave within [0, 1]
//! assert!(result.max_abs() <= 1.0);
//! # Ok::<(), advect_rs::AdvectionError>(())
//! ```
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌──────────────────┐
//! │ SimulationConfig │  (grid + parameters + scheme)
//! └────────┬─────────┘
//!          │ validate()
//! ┌────────▼─────────┐
//! │ grid::initialize │  square wave, u[0,·]=1, u[M,·]=0
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐      for k in 0..N:
//! │    integrate     │ ───▶   level k  (read)  ─┐
//! │  (Stepper loop)  │        level k+1 (write) ◀┘ Stepper::update
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ SimulationResult │  x, t, u + metadata
//! └──────────────────┘
//! ```
//!
//! # Error Handling
//!
//! Every entry point returns [`crate::Result`]. A degenerate grid fails fast;
//! an unstable run does not fail, it returns whatever the scheme produced.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod config;
mod result;
mod simulator;
pub mod methods;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Interior points of one level are independent of each other, so a level may
// be computed with Rayon when the crate is built with the `parallel` feature.
// The threshold below decides when that pays off.
//
// It lives in an AtomicUsize so it can be changed at runtime (benchmarks,
// tests) without a lock on every level. Relaxed ordering is enough: the
// value is a performance hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of interior points above which a level is computed in
/// parallel.
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Runtime-configurable parallel-execution threshold.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// A level with more interior points than this value is split across the
/// Rayon pool, but only when the crate is compiled with the `parallel`
/// feature. The computed values are identical either way.
///
/// # Example
///
/// ```rust
/// use advect_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use advect_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{Scheme, Stepper};
pub use config::SimulationConfig;
pub use result::SimulationResult;
pub use simulator::{integrate, simulate, Simulator};

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 4096);
    }

    #[test]
    fn test_get_and_set_threshold() {
        let _guard = ThresholdGuard::save(500);
        assert!(parallel_threshold() > 0);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_is_visible_across_threads() {
        use std::thread;

        let _guard = ThresholdGuard::save(1234);
        let expected = parallel_threshold();

        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(parallel_threshold))
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap() > 0);
        }
        assert!(expected > 0);
    }
}
