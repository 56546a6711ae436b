//! Resolution error analysis
//!
//! How much does the numerical solution at a fixed time level change when
//! the spatial grid is coarsened step by step? [`ErrorAnalyzer`] answers by
//! comparing a sequence of degraded runs against one fine reference run.
//!
//! - [`ErrorSweep`]: the `(delta_x, error)` pairs, one per degraded run
//! - [`ErrorSweepConfig`]: serde-loadable sweep inputs
//! - [`ErrorAnalyzer`] / [`error_at_timestep`]: the sweep itself
//!
//! The reference is computed once per sweep and only read afterwards.

mod analyzer;
mod config;
mod sweep;

pub use analyzer::{error_at_timestep, level_error, ErrorAnalyzer};
pub use config::{ErrorSweepConfig, DEFAULT_SWEEP_LEN};
pub use sweep::ErrorSweep;
