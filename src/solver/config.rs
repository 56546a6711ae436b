//! Simulation configuration
//!
//! A [`SimulationConfig`] is the complete, explicit input of one simulator
//! run. Nothing is read from ambient state.
//!
//! Configurations can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "scheme": "lax_friedrichs",
//!   "max_length": 1.0,
//!   "max_time": 1.0,
//!   "velocity": 1.0,
//!   "time_steps": 350,
//!   "space_steps": 300,
//!   "front_size": 50
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AdvectionError, Result};
use crate::grid::Grid;
use crate::physics::{courant_number, AdvectionParameters};
use crate::solver::Scheme;

/// Inputs of one simulator run
///
/// # Example
///
/// ```rust
/// use advect_rs::solver::{Scheme, SimulationConfig};
///
/// let config = SimulationConfig::new(Scheme::Ftcs)
///     .with_grid(2.0, 1.0, 200, 400)
///     .with_velocity(-0.5)
///     .with_front_size(20);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.grid().space_steps, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Update rule
    #[serde(default)]
    pub scheme: Scheme,

    /// Domain length
    pub max_length: f64,

    /// Simulation horizon
    pub max_time: f64,

    /// Signed advection speed
    pub velocity: f64,

    /// Number of time intervals
    pub time_steps: usize,

    /// Number of spatial intervals
    pub space_steps: usize,

    /// Square-wave width (1-based index threshold)
    pub front_size: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::LaxFriedrichs,
            max_length: 1.0,
            max_time: 1.0,
            velocity: 1.0,
            time_steps: 350,
            space_steps: 300,
            front_size: 50,
        }
    }
}

impl SimulationConfig {
    /// Default scenario with the given scheme
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            ..Default::default()
        }
    }

    /// Builder pattern: set extents and step counts
    pub fn with_grid(mut self, max_length: f64, max_time: f64, space_steps: usize, time_steps: usize) -> Self {
        self.max_length = max_length;
        self.max_time = max_time;
        self.space_steps = space_steps;
        self.time_steps = time_steps;
        self
    }

    /// Builder pattern: set velocity
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder pattern: set square-wave width
    pub fn with_front_size(mut self, front_size: usize) -> Self {
        self.front_size = front_size;
        self
    }

    /// Builder pattern: set scheme
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Discretization described by this configuration
    pub fn grid(&self) -> Grid {
        Grid::new(self.max_length, self.max_time, self.space_steps, self.time_steps)
    }

    /// Physical parameters described by this configuration
    pub fn parameters(&self) -> AdvectionParameters {
        AdvectionParameters::new(self.velocity, self.front_size)
    }

    /// Courant number `|c|·dt/dx` of this configuration
    pub fn courant_number(&self) -> f64 {
        let grid = self.grid();
        courant_number(self.velocity, grid.dt(), grid.dx())
    }

    /// Validate grid and parameters
    pub fn validate(&self) -> Result<()> {
        self.grid().validate()?;
        self.parameters().validate()
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

    /// Pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(AdvectionError::from)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
