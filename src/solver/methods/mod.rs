//! Finite-difference update rules
//!
//! This module contains the concrete [`Stepper`](crate::solver::Stepper)
//! implementations and the pure update functions the
//! [`Scheme`](crate::solver::Scheme) enum dispatches to.
//!
//! # Available Methods
//!
//! | Scheme          | Update                                         | Stability         |
//! |-----------------|------------------------------------------------|-------------------|
//! | FTCS            | `u_i − f·(u_{i+1} − u_{i−1})`                  | never             |
//! | Lax-Friedrichs  | `½(u_{i+1} + u_{i−1}) − f·(u_{i+1} − u_{i−1})` | Courant ≤ 1       |
//!
//! with `f = c·dt / (2·dx)`.
//!
//! # Design Philosophy
//!
//! Each update is:
//! - **Pure**: a function of three (or two) numbers and the factor
//! - **Stateless**: steppers are unit structs, reusable across runs
//! - **Local**: the value at `i` reads only `i − 1`, `i`, `i + 1` of the
//!   previous level, which is what makes a level parallelisable
//!
//! # Example
//!
//! ```rust
//! use advect_rs::solver::methods::{ftcs_update, lax_friedrichs_update};
//!
//! assert_eq!(ftcs_update(1.0, 1.0, 1.0, 0.4), 1.0);
//! assert_eq!(lax_friedrichs_update(1.0, 0.0, 0.5), 1.0);
//! ```

pub mod ftcs;
pub mod lax_friedrichs;

pub use ftcs::{ftcs_update, FtcsStepper};
pub use lax_friedrichs::{lax_friedrichs_update, LaxFriedrichsStepper};
