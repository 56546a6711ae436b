//! Error types
//!
//! Every fallible operation in the crate returns [`Result<T>`], an alias over
//! [`AdvectionError`]. Numeric failures are deterministic: nothing here is
//! retriable, and a failure aborts only the run that produced it.

use thiserror::Error;

use crate::analysis::ErrorSweep;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, AdvectionError>;

/// Which step count ran out during a resolution sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepAxis {
    /// The degraded spatial step count `reference_space_steps - j`
    Space,

    /// The time-step count used for `delta_x = max_time / (reference_time_steps - j)`
    Time,
}

impl std::fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepAxis::Space => write!(f, "space"),
            SweepAxis::Time => write!(f, "time"),
        }
    }
}

/// Errors raised by grid construction, simulation, analysis and export
#[derive(Error, Debug)]
pub enum AdvectionError {
    /// Degenerate grid: zero steps, or a non-positive / non-finite extent.
    #[error("Invalid grid (space_steps={space_steps}, time_steps={time_steps}): {reason}")]
    InvalidGrid {
        space_steps: usize,
        time_steps: usize,
        reason: String,
    },

    /// A resolution sweep needed a non-positive step count.
    ///
    /// `partial` holds every entry computed before the sweep ran out, so a
    /// caller may truncate and keep the valid prefix.
    #[error(
        "Degraded resolution exhausted at iteration {iteration}: \
         {axis} steps {reference_steps} - {iteration} is not positive \
         ({} valid entries computed)",
        .partial.len()
    )]
    DegradedResolutionExhausted {
        iteration: usize,
        reference_steps: usize,
        axis: SweepAxis,
        partial: ErrorSweep,
    },

    /// Observation level outside a solution field.
    #[error("Time index {time_index} out of range (last available level is {max})")]
    TimeIndexOutOfRange { time_index: usize, max: usize },

    /// A scalar input that is not usable (NaN, infinite, non-positive extent).
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export rejected its input.
    #[error("CSV export error: {0}")]
    Csv(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AdvectionError {
    /// Shorthand for an [`AdvectionError::InvalidGrid`]
    pub fn invalid_grid(space_steps: usize, time_steps: usize, reason: impl Into<String>) -> Self {
        Self::InvalidGrid {
            space_steps,
            time_steps,
            reason: reason.into(),
        }
    }

    /// Valid prefix of an exhausted sweep, if this is one.
    pub fn partial_sweep(&self) -> Option<&ErrorSweep> {
        match self {
            Self::DegradedResolutionExhausted { partial, .. } => Some(partial),
            _ => None,
        }
    }
}
