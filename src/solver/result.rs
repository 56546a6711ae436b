//! Simulation result
//!
//! The complete space-time solution of one run together with the
//! discretization it was computed on.

use std::collections::HashMap;

use nalgebra::DVector;

use crate::physics::SolutionField;
use crate::solver::Scheme;

/// Output of one simulator run
///
/// # Contents
///
/// - `x`, `t`: node coordinates
/// - `u`: the filled [`SolutionField`]
/// - `dt`, `dx`, `courant_factor`: the discretization actually used
/// - `metadata`: free-form diagnostics (scheme name, grid sizes, ...)
///
/// [`SimulationResult::into_parts`] gives the bare `(x, u, t)` triple.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Spatial coordinates, length `M + 1`
    pub x: DVector<f64>,

    /// Time coordinates, length `N + 1`
    pub t: DVector<f64>,

    /// Solution `u[i, k]`
    pub u: SolutionField,

    /// Time step
    pub dt: f64,

    /// Spatial step
    pub dx: f64,

    /// `c·dt / (2·dx)`
    pub courant_factor: f64,

    /// Scheme the field was computed with
    pub scheme: Scheme,

    metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Assemble a result
    pub fn new(
        x: DVector<f64>,
        t: DVector<f64>,
        u: SolutionField,
        dt: f64,
        dx: f64,
        courant_factor: f64,
        scheme: Scheme,
    ) -> Self {
        Self {
            x,
            t,
            u,
            dt,
            dx,
            courant_factor,
            scheme,
            metadata: HashMap::new(),
        }
    }

    /// Number of spatial intervals
    pub fn space_steps(&self) -> usize {
        self.u.space_steps()
    }

    /// Number of time intervals
    pub fn time_steps(&self) -> usize {
        self.u.time_steps()
    }

    /// Spatial profile at time level `k`
    pub fn level(&self, k: usize) -> &[f64] {
        self.u.level(k)
    }

    /// `max_i |u[i, k]|`
    pub fn sup_norm(&self, k: usize) -> f64 {
        self.u.sup_norm(k)
    }

    /// Sup-norm of every level, in time order
    pub fn sup_norm_history(&self) -> Vec<f64> {
        (0..self.u.levels()).map(|k| self.u.sup_norm(k)).collect()
    }

    /// Largest absolute value anywhere in the field
    pub fn max_abs(&self) -> f64 {
        self.u.max_abs()
    }

    /// Whether every value is exactly `0.0` or `1.0`
    pub fn is_binary(&self) -> bool {
        self.u.iter().all(|&v| v == 0.0 || v == 1.0)
    }

    /// Courant number `|c|·dt/dx`, recovered from the stored factor
    pub fn courant_number(&self) -> f64 {
        (2.0 * self.courant_factor).abs()
    }

    /// Whether the run satisfied the CFL condition
    pub fn is_cfl_satisfied(&self) -> bool {
        self.courant_number() <= 1.0
    }

    /// Attach a diagnostic entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Look up a diagnostic entry
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// All diagnostic entries
    pub fn metadata_entries(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// `(x, u, t)` triple
    pub fn into_parts(self) -> (DVector<f64>, SolutionField, DVector<f64>) {
        (self.x, self.u, self.t)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
