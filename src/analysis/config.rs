//! Error-sweep configuration
//!
//! ```json
//! {
//!   "scheme": "lax_friedrichs",
//!   "time_index": 20,
//!   "max_length": 1.0,
//!   "max_time": 1.0,
//!   "velocity": 1.0,
//!   "reference_time_steps": 120,
//!   "reference_space_steps": 100,
//!   "front_size": 20
//! }
//! ```
//!
//! `sweep_len` is optional and defaults to 100.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AdvectionError, Result};
use crate::grid::Grid;
use crate::physics::AdvectionParameters;
use crate::solver::Scheme;

/// Default number of sweep iterations
pub const DEFAULT_SWEEP_LEN: usize = 100;

fn default_sweep_len() -> usize {
    DEFAULT_SWEEP_LEN
}

/// Inputs of one error sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorSweepConfig {
    /// Scheme used for the reference and every degraded run
    #[serde(default)]
    pub scheme: Scheme,

    /// Time level at which runs are compared
    pub time_index: usize,

    pub max_length: f64,
    pub max_time: f64,
    pub velocity: f64,

    /// Time steps of each degraded run
    pub reference_time_steps: usize,

    /// Space steps (and time steps) of the reference run
    pub reference_space_steps: usize,

    pub front_size: usize,

    /// Number of degraded runs
    #[serde(default = "default_sweep_len")]
    pub sweep_len: usize,
}

impl Default for ErrorSweepConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::LaxFriedrichs,
            time_index: 20,
            max_length: 1.0,
            max_time: 1.0,
            velocity: 1.0,
            reference_time_steps: 120,
            reference_space_steps: 100,
            front_size: 20,
            sweep_len: DEFAULT_SWEEP_LEN,
        }
    }
}

impl ErrorSweepConfig {
    /// Scalar inputs with the default scheme and sweep length
    pub fn new(
        time_index: usize,
        max_length: f64,
        max_time: f64,
        velocity: f64,
        reference_time_steps: usize,
        reference_space_steps: usize,
        front_size: usize,
    ) -> Self {
        Self {
            time_index,
            max_length,
            max_time,
            velocity,
            reference_time_steps,
            reference_space_steps,
            front_size,
            ..Default::default()
        }
    }

    /// Builder pattern: set scheme
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Builder pattern: set number of degraded runs
    pub fn with_sweep_len(mut self, sweep_len: usize) -> Self {
        self.sweep_len = sweep_len;
        self
    }

    /// Reference discretization: `reference_space_steps` in both space and time
    pub fn reference_grid(&self) -> Grid {
        Grid::new(
            self.max_length,
            self.max_time,
            self.reference_space_steps,
            self.reference_space_steps,
        )
    }

    pub fn parameters(&self) -> AdvectionParameters {
        AdvectionParameters::new(self.velocity, self.front_size)
    }

    /// Check the reference grid, the parameters and the observation level
    ///
    /// Degraded grids are not checked here: running out of resolution is
    /// reported by the sweep itself, with the entries computed so far.
    pub fn validate(&self) -> Result<()> {
        if self.sweep_len == 0 {
            return Err(AdvectionError::Config("sweep_len must be at least 1".to_string()));
        }

        self.reference_grid().validate()?;
        Grid::new(self.max_length, self.max_time, self.reference_space_steps, self.reference_time_steps)
            .validate()?;
        self.parameters().validate()?;

        let max = self.reference_space_steps.min(self.reference_time_steps);
        if self.time_index > max {
            return Err(AdvectionError::TimeIndexOutOfRange {
                time_index: self.time_index,
                max,
            });
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(AdvectionError::from)
    }
}
