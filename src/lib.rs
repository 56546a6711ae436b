//! advect-rs: explicit finite-difference schemes for 1D linear advection
//!
//! Solves `∂u/∂t + c ∂u/∂x = 0` on `[0, L] × [0, T]` for a square-wave
//! initial condition with Dirichlet boundaries `u(0, t) = 1`, `u(L, t) = 0`,
//! using one of two explicit schemes:
//!
//! - **FTCS** (forward time, centred space): unconditionally unstable for
//!   this equation, kept as a counter-example
//! - **Lax-Friedrichs**: stable under the CFL condition `|c|·dt/dx ≤ 1`
//!
//! and measures how the numerical error grows as the grid is coarsened.
//!
//! # Architecture
//!
//! 1. **Separation of physics and numerics**
//!    - [`physics`] and [`grid`] describe the problem (what to solve)
//!    - [`solver`] provides the update rules and the time loop (how)
//!
//! 2. **Explicit inputs**
//!    - every run takes its parameters as arguments or a config value
//!    - no global mutable state besides a performance hint
//!
//! # Quick Start
//!
//! ```rust
//! use advect_rs::prelude::*;
//!
//! # fn main() -> advect_rs::Result<()> {
//! // 1. Stability check before running
//! let (dt, dx) = (1.0 / 350.0, 1.0 / 300.0);
//! assert!(is_cfl_satisfied(1.0, dt, dx));
//!
//! // 2. Run a simulation
//! let result = simulate(Scheme::LaxFriedrichs, 1.0, 1.0, 1.0, 350, 300, 50)?;
//! assert_eq!(result.u.levels(), 351);
//!
//! // 3. Resolution sweep at time level 20
//! let sweep = error_at_timestep(20, 1.0, 1.0, 1.0, 120, 100, 20)?;
//! assert_eq!(sweep.len(), 100);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`grid`]: discretization and initial/boundary values
//! - [`physics`]: parameters, solution field, CFL helpers
//! - [`solver`]: steppers, simulator, configuration
//! - [`analysis`]: resolution error sweep
//! - [`output`]: CSV export
//! - [`error`]: error type
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber.

pub mod error;

// Core modules
pub mod grid;
pub mod physics;
pub mod solver;

pub mod analysis;
pub mod output;

pub use error::{AdvectionError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use advect_rs::prelude::*;
    //! ```
    pub use crate::analysis::{error_at_timestep, ErrorAnalyzer, ErrorSweep, ErrorSweepConfig};
    pub use crate::error::{AdvectionError, Result};
    pub use crate::grid::{initialize, Grid, InitializedGrid};
    pub use crate::physics::{is_cfl_satisfied, AdvectionParameters, SolutionField};
    pub use crate::solver::{simulate, Scheme, SimulationConfig, SimulationResult, Simulator, Stepper};
}
