//! Output of a resolution sweep

use serde::{Deserialize, Serialize};

/// Error of a degraded run against the reference, per sweep iteration
///
/// Entry `j` pairs the sup-norm error of the `j`-th degraded run with its
/// nominal step size `max_time / (reference_time_steps − j)`. Both vectors
/// always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorSweep {
    errors: Vec<f64>,
    delta_xs: Vec<f64>,
}

impl ErrorSweep {
    /// Pair up errors and step sizes
    ///
    /// Extra entries of the longer vector are dropped so the pairing stays
    /// one-to-one.
    pub fn new(mut errors: Vec<f64>, mut delta_xs: Vec<f64>) -> Self {
        let len = errors.len().min(delta_xs.len());
        errors.truncate(len);
        delta_xs.truncate(len);
        Self { errors, delta_xs }
    }

    /// Empty sweep with room for `capacity` entries
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            errors: Vec::with_capacity(capacity),
            delta_xs: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, delta_x: f64, error: f64) {
        self.delta_xs.push(delta_x);
        self.errors.push(error);
    }

    /// Number of completed iterations
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `errors[j]`
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// `delta_xs[j]`
    pub fn delta_xs(&self) -> &[f64] {
        &self.delta_xs
    }

    /// `(delta_x, error)` pairs in sweep order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.delta_xs.iter().copied().zip(self.errors.iter().copied())
    }

    /// Largest error of the sweep, `None` when empty
    pub fn max_error(&self) -> Option<f64> {
        self.errors.iter().copied().reduce(f64::max)
    }

    /// `errors.last() − errors.first()`
    ///
    /// Positive when coarsening the grid made the result worse.
    pub fn trend(&self) -> Option<f64> {
        match (self.errors.first(), self.errors.last()) {
            (Some(first), Some(last)) => Some(last - first),
            _ => None,
        }
    }

    /// `(errors, delta_xs)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.errors, self.delta_xs)
    }
}
