//! Space-time solution storage
//!
//! A [`SolutionField`] holds every value `u[i, k]` of one simulator run:
//! rows are spatial indices, columns are time levels.
//!
//! # Memory Layout
//!
//! The field wraps a column-major [`DMatrix`], so one time level is one
//! contiguous `&[f64]` of length `space_steps + 1`. That makes the level
//! split in [`SolutionField::split_levels`] a plain `split_at_mut` on the
//! backing slice.

use nalgebra::DMatrix;

// =================================================================================================
// Solution Field
// =================================================================================================

/// Solution array `u[space_index, time_index]`
///
/// # Ownership
///
/// Owned by exactly one simulator run, then handed to the caller inside the
/// result. Never shared mutably across runs.
///
/// # Example
///
/// ```rust
/// use advect_rs::physics::SolutionField;
///
/// let mut field = SolutionField::zeros(10, 5);
/// field.set(3, 2, 0.5);
///
/// assert_eq!(field.points(), 11);
/// assert_eq!(field.levels(), 6);
/// assert_eq!(field.level(2)[3], 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionField {
    values: DMatrix<f64>,
}

impl SolutionField {

    // ======================================= constructors =======================================

    /// Zero-filled `(space_steps + 1) × (time_steps + 1)` field
    pub fn zeros(space_steps: usize, time_steps: usize) -> Self {
        Self {
            values: DMatrix::zeros(space_steps + 1, time_steps + 1),
        }
    }

    /// Wrap an existing matrix (rows = space, columns = time)
    pub fn from_matrix(values: DMatrix<f64>) -> Self {
        Self { values }
    }

    // ========================================== Queries ==========================================

    /// Number of spatial points (`space_steps + 1`)
    pub fn points(&self) -> usize {
        self.values.nrows()
    }

    /// Number of time levels (`time_steps + 1`)
    pub fn levels(&self) -> usize {
        self.values.ncols()
    }

    /// Index of the last spatial point
    pub fn space_steps(&self) -> usize {
        self.points().saturating_sub(1)
    }

    /// Index of the last time level
    pub fn time_steps(&self) -> usize {
        self.levels().saturating_sub(1)
    }

    /// Value at `(i, k)`
    ///
    /// # Panics
    ///
    /// Panics when the index is outside the field.
    pub fn get(&self, i: usize, k: usize) -> f64 {
        self.values[(i, k)]
    }

    /// Checked access
    pub fn try_get(&self, i: usize, k: usize) -> Option<f64> {
        self.values.get((i, k)).copied()
    }

    /// All spatial values of time level `k`
    ///
    /// # Panics
    ///
    /// Panics when `k` is not a level of the field.
    pub fn level(&self, k: usize) -> &[f64] {
        let points = self.points();
        &self.values.as_slice()[k * points..(k + 1) * points]
    }

    /// Time history of spatial point `i`
    pub fn history(&self, i: usize) -> Vec<f64> {
        self.values.row(i).iter().copied().collect()
    }

    /// Sup-norm `max_i |u[i, k]|` of one level
    ///
    /// NaN entries propagate as NaN so that a broken run is never reported
    /// as bounded.
    pub fn sup_norm(&self, k: usize) -> f64 {
        sup_norm(self.level(k))
    }

    /// Largest absolute value over the whole field
    pub fn max_abs(&self) -> f64 {
        sup_norm(self.values.as_slice())
    }

    /// Iterator over every value, level by level
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.values.iter()
    }

    /// Underlying matrix
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Consume the field, returning the matrix
    pub fn into_matrix(self) -> DMatrix<f64> {
        self.values
    }

    // ========================================= Mutation =========================================

    /// Write `(i, k)`
    pub fn set(&mut self, i: usize, k: usize, value: f64) {
        self.values[(i, k)] = value;
    }

    /// Mutable view of time level `k`
    pub fn level_mut(&mut self, k: usize) -> &mut [f64] {
        let points = self.points();
        &mut self.values.as_mut_slice()[k * points..(k + 1) * points]
    }

    /// Borrow level `k` immutably and level `k + 1` mutably
    ///
    /// The two slices come from disjoint halves of the storage, so an update
    /// of level `k + 1` can only ever read level `k`.
    ///
    /// # Panics
    ///
    /// Panics when `k + 1` is not a level of the field.
    pub fn split_levels(&mut self, k: usize) -> (&[f64], &mut [f64]) {
        let points = self.points();
        let (head, tail) = self.values.as_mut_slice().split_at_mut((k + 1) * points);
        (&head[k * points..], &mut tail[..points])
    }
}

/// Sup-norm of a slice; NaN-propagating
pub fn sup_norm(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |acc, &v| {
        if v.is_nan() || acc.is_nan() {
            f64::NAN
        } else {
            acc.max(v.abs())
        }
    })
}

// =================================================================================================
// Tests
// =================================================================================================
