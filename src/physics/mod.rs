//! Physics of the linear advection problem
//!
//! This module holds WHAT is being solved, independently of the numerical
//! scheme used to solve it:
//!
//! - [`AdvectionParameters`]: signed speed `c` and the square-wave width
//! - [`SolutionField`]: the space-time array `u[i, k]`
//! - CFL helpers: [`courant_number`], [`courant_factor`], [`is_cfl_satisfied`]
//!
//! # The Equation
//!
//! ```text
//! ∂u/∂t + c ∂u/∂x = 0,    x ∈ [0, L],  t ∈ [0, T]
//! u(x, 0)  = square wave of width front_size
//! u(0, t)  = 1   (inflow)
//! u(L, t)  = 0   (outflow)
//! ```
//!
//! # Example
//!
//! ```rust
//! use advect_rs::physics::{AdvectionParameters, is_cfl_satisfied};
//!
//! let parameters = AdvectionParameters::new(1.0, 50);
//! let (dt, dx) = (1.0 / 350.0, 1.0 / 300.0);
//!
//! assert!(is_cfl_satisfied(parameters.velocity, dt, dx));
//! ```

pub mod field;
pub mod parameters;

pub use field::{sup_norm, SolutionField};
pub use parameters::{courant_factor, courant_number, is_cfl_satisfied, AdvectionParameters};
