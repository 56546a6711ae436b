//! CSV export of simulation results and error sweeps
//!
//! The files are plain delimited text, readable by spreadsheets, pandas,
//! gnuplot or MATLAB.
//!
//! # Features
//!
//! - **One level**: `x, u` at a chosen time level
//! - **Whole field**: `x` then one column per (optionally downsampled) level
//! - **Error sweep**: `delta_x, error`
//! - **Metadata**: optional `#` comment header with the discretization
//! - **Validation**: empty data, missing level and non-finite values are
//!   rejected before the file is created
//!
//! # Example
//!
//! ```rust,no_run
//! use advect_rs::output::export::{export_level_csv, CsvConfig, CsvMetadata};
//! use advect_rs::solver::{simulate, Scheme};
//!
//! let result = simulate(Scheme::LaxFriedrichs, 1.0, 1.0, 1.0, 350, 300, 50)?;
//!
//! let config = CsvConfig::default().with_metadata(CsvMetadata::from_result(&result));
//! export_level_csv(&result, 350, "final_profile.csv", Some(&config))?;
//! # Ok::<(), advect_rs::AdvectionError>(())
//! ```
//!
//! **Output** (`final_profile.csv`):
//! ```csv
//! # Linear Advection Simulation Data
//! # Generated: 2026-10-15T09:12:44+00:00
//! # Scheme: Lax-Friedrichs
//! # Space Steps: 300
//! # Time Steps: 350
//! # dx: 0.0033333333333333335
//! # dt: 0.002857142857142857
//! # Velocity: 1
//! # Courant Number: 0.857142857142857
//! #
//! x,u
//! 0.000000,1.000000
//! 0.003333,1.000000
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::analysis::ErrorSweep;
use crate::error::{AdvectionError, Result};
use crate::output::export::Exporter;
use crate::solver::SimulationResult;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use advect_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::european().precision(10).every(5);
/// assert_eq!(config.delimiter, ';');
/// assert_eq!(config.every, 5);
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Keep one time level out of `every` in field exports (default: 1).
    /// The last level is always kept.
    pub every: usize,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            every: 1,
        }
    }
}

impl CsvConfig {
    /// Semicolon delimiter, comma decimal separator
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// 12 decimal places
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: set level downsampling stride
    pub fn every(mut self, every: usize) -> Self {
        self.every = every;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Scheme name (e.g. "Lax-Friedrichs")
    pub scheme: Option<String>,

    pub space_steps: Option<usize>,
    pub time_steps: Option<usize>,
    pub dx: Option<f64>,
    pub dt: Option<f64>,

    /// Signed advection speed
    pub velocity: Option<f64>,

    /// `|c|·dt/dx`
    pub courant_number: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Describe the discretization of a finished run
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            scheme: Some(result.scheme.to_string()),
            space_steps: Some(result.space_steps()),
            time_steps: Some(result.time_steps()),
            dx: Some(result.dx),
            dt: Some(result.dt),
            velocity: Some(2.0 * result.courant_factor * result.dx / result.dt),
            courant_number: Some(result.courant_number()),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> Result<()> {
    writeln!(out, "# Linear Advection Simulation Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(scheme) = &metadata.scheme {
        writeln!(out, "# Scheme: {}", scheme)?;
    }
    if let Some(space_steps) = metadata.space_steps {
        writeln!(out, "# Space Steps: {}", space_steps)?;
    }
    if let Some(time_steps) = metadata.time_steps {
        writeln!(out, "# Time Steps: {}", time_steps)?;
    }
    if let Some(dx) = metadata.dx {
        writeln!(out, "# dx: {}", dx)?;
    }
    if let Some(dt) = metadata.dt {
        writeln!(out, "# dt: {}", dt)?;
    }
    if let Some(velocity) = metadata.velocity {
        writeln!(out, "# Velocity: {}", velocity)?;
    }
    if let Some(courant) = metadata.courant_number {
        writeln!(out, "# Courant Number: {}", courant)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Create the file and write the optional metadata block
fn open_with_header(path: &Path, config: &CsvConfig) -> Result<BufWriter<File>> {
    let mut out = BufWriter::new(File::create(path)?);

    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut out, metadata)?;
        }
    }

    Ok(out)
}

fn ensure_finite(values: &[f64], what: &str) -> Result<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(AdvectionError::Csv(format!("Invalid data: NaN or Inf detected in {what}")));
    }
    Ok(())
}

/// Levels `0, every, 2·every, ...` plus the last level
fn selected_levels(time_steps: usize, every: usize) -> Vec<usize> {
    let mut levels: Vec<usize> = (0..=time_steps).step_by(every).collect();
    if levels.last() != Some(&time_steps) {
        levels.push(time_steps);
    }
    levels
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export the spatial profile at time level `k`
///
/// Two columns: `x` and `u`.
///
/// # Errors
///
/// [`AdvectionError::Csv`] when `k` is past the last level or the profile
/// contains NaN/Inf (an overflowed unstable run), [`AdvectionError::Io`]
/// when the file cannot be written.
pub fn export_level_csv(
    result: &SimulationResult,
    k: usize,
    path: impl AsRef<Path>,
    config: Option<&CsvConfig>,
) -> Result<()> {

    // ============================= Validation =============================

    if k > result.time_steps() {
        return Err(AdvectionError::Csv(format!(
            "Time level {} out of range: last level is {}",
            k,
            result.time_steps()
        )));
    }

    let profile = result.level(k);
    ensure_finite(profile, &format!("time level {k}"))?;

    // ============================= Write ==================================

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);
    let mut out = open_with_header(path.as_ref(), config)?;

    writeln!(out, "x{}u", config.delimiter)?;
    for (x, u) in result.x.iter().zip(profile) {
        writeln!(out, "{}{}{}", format_number(*x, config), config.delimiter, format_number(*u, config))?;
    }

    out.flush()?;
    Ok(())
}

/// Export the whole field as a wide table
///
/// Column `x`, then one column `t=<time>` per selected level (see
/// [`CsvConfig::every`]). One row per spatial node.
pub fn export_field_csv(
    result: &SimulationResult,
    path: impl AsRef<Path>,
    config: Option<&CsvConfig>,
) -> Result<()> {
    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);

    // ============================= Validation =============================

    if config.every == 0 {
        return Err(AdvectionError::Csv("Level stride `every` must be at least 1".to_string()));
    }

    let levels = selected_levels(result.time_steps(), config.every);
    for &k in &levels {
        ensure_finite(result.level(k), &format!("time level {k}"))?;
    }

    // ============================= Write ==================================

    let mut out = open_with_header(path.as_ref(), config)?;

    write!(out, "x")?;
    for &k in &levels {
        write!(out, "{}t={}", config.delimiter, format_number(result.t[k], config))?;
    }
    writeln!(out)?;

    for (i, x) in result.x.iter().enumerate() {
        write!(out, "{}", format_number(*x, config))?;
        for &k in &levels {
            write!(out, "{}{}", config.delimiter, format_number(result.u.get(i, k), config))?;
        }
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

/// Export an error sweep: columns `delta_x` and `error`
pub fn export_error_sweep_csv(
    sweep: &ErrorSweep,
    path: impl AsRef<Path>,
    config: Option<&CsvConfig>,
) -> Result<()> {

    // ============================= Validation =============================

    if sweep.is_empty() {
        return Err(AdvectionError::Csv("Empty data: error sweep has no entries".to_string()));
    }
    ensure_finite(sweep.errors(), "error series")?;
    ensure_finite(sweep.delta_xs(), "delta_x series")?;

    // ============================= Write ==================================

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);
    let mut out = open_with_header(path.as_ref(), config)?;

    writeln!(out, "delta_x{}error", config.delimiter)?;
    for (delta_x, error) in sweep.iter() {
        writeln!(
            out,
            "{}{}{}",
            format_number(delta_x, config),
            config.delimiter,
            format_number(error, config)
        )?;
    }

    out.flush()?;
    Ok(())
}

// =============================================================================
// Exporter implementation
// =============================================================================

/// [`Exporter`] writing CSV files with a fixed [`CsvConfig`]
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    fn export_level(&self, result: &SimulationResult, k: usize, path: &Path) -> Result<()> {
        export_level_csv(result, k, path, Some(&self.config))
    }

    fn export_field(&self, result: &SimulationResult, path: &Path) -> Result<()> {
        export_field_csv(result, path, Some(&self.config))
    }

    fn export_sweep(&self, sweep: &ErrorSweep, path: &Path) -> Result<()> {
        export_error_sweep_csv(sweep, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{simulate, Scheme};
    use std::fs;
    use tempfile::NamedTempFile;

    fn small_run() -> SimulationResult {
        simulate(Scheme::LaxFriedrichs, 1.0, 1.0, 1.0, 8, 4, 3).unwrap()
    }

    #[test]
    fn test_level_export_basic() {
        let result = small_run();
        let file = NamedTempFile::new().unwrap();

        export_level_csv(&result, 0, file.path(), None).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "x,u");
        assert_eq!(lines[1], "0.000000,1.000000");
        assert_eq!(lines[2], "0.250000,1.000000");
        assert_eq!(lines[5], "1.000000,0.000000");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_level_export_with_metadata() {
        let result = small_run();
        let file = NamedTempFile::new().unwrap();

        let mut metadata = CsvMetadata::from_result(&result);
        metadata.add_custom("Front Size", "3");
        let config = CsvConfig::default().with_metadata(metadata);

        export_level_csv(&result, 8, file.path(), Some(&config)).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("# Linear Advection Simulation Data"));
        assert!(content.contains("# Generated: "));
        assert!(content.contains("# Scheme: Lax-Friedrichs"));
        assert!(content.contains("# Space Steps: 4"));
        assert!(content.contains("# Front Size: 3"));
        assert!(content.contains("\nx,u\n"));
    }

    #[test]
    fn test_european_format() {
        let result = small_run();
        let file = NamedTempFile::new().unwrap();

        export_level_csv(&result, 0, file.path(), Some(&CsvConfig::european().precision(2))).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("x;u"));
        assert!(content.contains("0,25;1,00"));
    }

    #[test]
    fn test_level_out_of_range() {
        let result = small_run();
        let file = NamedTempFile::new().unwrap();

        let error = export_level_csv(&result, 9, file.path(), None).unwrap_err();
        assert!(matches!(error, AdvectionError::Csv(_)));
    }

    #[test]
    fn test_overflowed_run_rejected() {
        let result = simulate(Scheme::Ftcs, 1.0, 40.0, 4.0, 2_000, 50, 10).unwrap();
        let file = NamedTempFile::new().unwrap();

        let error = export_level_csv(&result, 2_000, file.path(), None).unwrap_err();
        assert!(error.to_string().contains("NaN or Inf"));
    }

    #[test]
    fn test_field_export_downsampled() {
        let result = small_run();
        let file = NamedTempFile::new().unwrap();

        export_field_csv(&result, file.path(), Some(&CsvConfig::default().every(3))).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let header = content.lines().next().unwrap();

        // levels 0, 3, 6 and the final level 8
        assert_eq!(header.split(',').count(), 5);
        assert!(header.starts_with("x,t=0.000000"));
        assert!(header.ends_with("t=1.000000"));
        assert_eq!(content.lines().count(), 1 + 5);
    }

    #[test]
    fn test_field_export_rejects_zero_stride() {
        let result = small_run();
        let file = NamedTempFile::new().unwrap();

        assert!(export_field_csv(&result, file.path(), Some(&CsvConfig::default().every(0))).is_err());
    }

    #[test]
    fn test_selected_levels_keeps_last() {
        assert_eq!(selected_levels(10, 4), vec![0, 4, 8, 10]);
        assert_eq!(selected_levels(8, 4), vec![0, 4, 8]);
        assert_eq!(selected_levels(3, 1), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sweep_export() {
        let sweep = ErrorSweep::new(vec![0.5, 0.75], vec![0.01, 0.02]);
        let file = NamedTempFile::new().unwrap();

        CsvExporter::default().export_sweep(&sweep, file.path()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "delta_x,error\n0.010000,0.500000\n0.020000,0.750000\n");
    }

    #[test]
    fn test_empty_sweep_rejected() {
        let file = NamedTempFile::new().unwrap();

        let error = export_error_sweep_csv(&ErrorSweep::default(), file.path(), None).unwrap_err();
        assert!(matches!(error, AdvectionError::Csv(_)));
    }

    #[test]
    fn test_invalid_path() {
        let result = small_run();
        let error = export_level_csv(&result, 0, "/nonexistent/dir/profile.csv", None).unwrap_err();

        assert!(matches!(error, AdvectionError::Io(_)));
    }
}
