//! Example: resolution error sweep
//!
//! Compares Lax-Friedrichs runs on progressively coarser spatial grids with
//! a fine reference at one time level and prints how the sup-norm error
//! grows with the step size.
//!
//! An optional JSON config path may be given as the first argument:
//!
//! ```bash
//! cargo run --example error_sweep -- sweep.json
//! ```
//!
//! Without it the default sweep is used (time index 20, reference 100×100,
//! degraded runs with 120 time steps, 100 iterations).

use advect_rs::{
    analysis::{ErrorAnalyzer, ErrorSweepConfig},
    output::{export_error_sweep_csv, CsvConfig, CsvMetadata},
    AdvectionError,
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Linear Advection - Resolution Error Sweep");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Configuration ======

    let config = match std::env::args().nth(1) {
        Some(path) => ErrorSweepConfig::from_json_file(path)?,
        None => ErrorSweepConfig::default(),
    };

    println!("Sweep:");
    println!("  scheme                : {}", config.scheme);
    println!("  time index            : {}", config.time_index);
    println!("  reference space steps : {}", config.reference_space_steps);
    println!("  reference time steps  : {}", config.reference_time_steps);
    println!("  iterations            : {}\n", config.sweep_len);

    // ====== Run ======

    let start = Instant::now();
    let sweep = match ErrorAnalyzer::new().run(&config) {
        Ok(sweep) => sweep,
        Err(AdvectionError::DegradedResolutionExhausted { iteration, axis, partial, .. }) => {
            println!("  Resolution exhausted on the {} axis at iteration {}", axis, iteration);
            println!("  Keeping the {} valid entries\n", partial.len());
            partial
        }
        Err(error) => return Err(error.into()),
    };
    println!("  Completed in {:.3} s\n", start.elapsed().as_secs_f64());

    // ====== Table ======

    println!("  {:>4}  {:>12}  {:>12}", "j", "delta_x", "error");
    for (j, (delta_x, error)) in sweep.iter().enumerate().step_by(10) {
        println!("  {:>4}  {:>12.6}  {:>12.6}", j, delta_x, error);
    }

    if let (Some(max), Some(trend)) = (sweep.max_error(), sweep.trend()) {
        println!("\n  max error : {:.6}", max);
        println!("  trend     : {:+.6} (last − first)", trend);
    }

    // ====== Export ======

    let path = std::env::temp_dir().join("advection_error_sweep.csv");

    let mut metadata = CsvMetadata {
        scheme: Some(config.scheme.to_string()),
        velocity: Some(config.velocity),
        ..Default::default()
    };
    metadata.add_custom("Time Index", config.time_index.to_string());
    metadata.add_custom("Reference Space Steps", config.reference_space_steps.to_string());
    metadata.add_custom("Reference Time Steps", config.reference_time_steps.to_string());

    export_error_sweep_csv(&sweep, &path, Some(&CsvConfig::default().with_metadata(metadata)))?;
    println!("\n  Exported → {}", path.display());

    Ok(())
}
