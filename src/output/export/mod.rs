//! Export of simulation results.
//!
//! # Architecture
//!
//! The [`Exporter`] trait abstracts the file format. Each format is an
//! independent implementation in its own sub-module, so adding a format
//! means adding a file.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use advect_rs::output::export::{CsvConfig, CsvExporter, Exporter};
//! use advect_rs::solver::{simulate, Scheme};
//!
//! let result = simulate(Scheme::LaxFriedrichs, 1.0, 1.0, 1.0, 350, 300, 50)?;
//! let exporter = CsvExporter::new(CsvConfig::default().every(10));
//!
//! exporter.export_level(&result, 350, Path::new("final.csv"))?;
//! exporter.export_field(&result, Path::new("field.csv"))?;
//! # Ok::<(), advect_rs::AdvectionError>(())
//! ```

pub mod csv;

pub use csv::{export_error_sweep_csv, export_field_csv, export_level_csv, CsvConfig, CsvExporter, CsvMetadata};

use std::path::Path;

use crate::analysis::ErrorSweep;
use crate::error::Result;
use crate::solver::SimulationResult;

/// Abstraction over export formats
///
/// # Errors
///
/// Every method fails when the data is unusable (missing level, NaN/Inf,
/// empty sweep) or the file cannot be written.
pub trait Exporter {
    /// Spatial profile at time level `k`
    fn export_level(&self, result: &SimulationResult, k: usize, path: &Path) -> Result<()>;

    /// Whole space-time field
    fn export_field(&self, result: &SimulationResult, path: &Path) -> Result<()>;

    /// `(delta_x, error)` pairs of a resolution sweep
    fn export_sweep(&self, sweep: &ErrorSweep, path: &Path) -> Result<()>;
}
