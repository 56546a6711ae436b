//! Output of simulation results
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── export/             ← Data export
//!     ├── mod.rs          ← Exporter trait
//!     └── csv.rs
//! ```
//!
//! Plotting is left to external tools; the CSV files are laid out for
//! direct use with gnuplot, pandas or a spreadsheet.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use advect_rs::output::{export_error_sweep_csv, export_level_csv};
//! use advect_rs::analysis::error_at_timestep;
//! use advect_rs::solver::{simulate, Scheme};
//!
//! let result = simulate(Scheme::LaxFriedrichs, 1.0, 1.0, 1.0, 350, 300, 50)?;
//! export_level_csv(&result, 350, "profile.csv", None)?;
//!
//! let sweep = error_at_timestep(20, 1.0, 1.0, 1.0, 120, 100, 20)?;
//! export_error_sweep_csv(&sweep, "sweep.csv", None)?;
//! # Ok::<(), advect_rs::AdvectionError>(())
//! ```

pub mod export;

pub use export::{export_error_sweep_csv, export_field_csv, export_level_csv, CsvConfig, CsvExporter, CsvMetadata, Exporter};
