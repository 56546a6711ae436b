//! Example: FTCS vs Lax-Friedrichs on a square wave
//!
//! Runs both schemes on the same grid and compares how the sup-norm of
//! the solution evolves:
//!
//! - Lax-Friedrichs under CFL stays bounded by 1 (numerical dissipation
//!   rounds the front)
//! - FTCS grows without bound even under CFL
//!
//! Final profiles are written to CSV in the system temp directory.
//!
//! **Setup**:
//! - Domain: L = 1, T = 1
//! - Grid: 300 space steps, 350 time steps (Courant number ≈ 0.857)
//! - Velocity: c = 1
//! - Square wave: 49 cells at 1, the rest at 0

use advect_rs::{
    output::{export_level_csv, CsvConfig, CsvMetadata},
    physics::is_cfl_satisfied,
    solver::{Scheme, SimulationConfig, SimulationResult, Simulator},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Linear Advection - FTCS vs Lax-Friedrichs");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Configuration ======

    let base = SimulationConfig::default();
    let grid = base.grid();

    println!("Parameters:");
    println!("  L (length)      : {}", base.max_length);
    println!("  T (horizon)     : {}", base.max_time);
    println!("  c (velocity)    : {}", base.velocity);
    println!("  M (space steps) : {}", base.space_steps);
    println!("  N (time steps)  : {}", base.time_steps);
    println!("  front size      : {}", base.front_size);
    println!("  Courant number  : {:.4}", base.courant_number());
    println!(
        "  CFL satisfied   : {}\n",
        is_cfl_satisfied(base.velocity, grid.dt(), grid.dx())
    );

    let tmp_dir = std::env::temp_dir();
    let simulator = Simulator::new();

    let mut results: Vec<(Scheme, f64, SimulationResult)> = Vec::new();

    // ====== Runs ======

    for scheme in Scheme::ALL {
        print!("  Running {:<15}", scheme.to_string());
        std::io::Write::flush(&mut std::io::stdout())?;

        let start = Instant::now();
        let result = simulator.run(&base.with_scheme(scheme))?;
        let elapsed = start.elapsed().as_secs_f64();

        println!(" done in {:.3} s", elapsed);
        results.push((scheme, elapsed, result));
    }

    // ====== Sup-norm history ======

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Sup-norm max_i |u[i, k]|");
    println!("═══════════════════════════════════════════════════════\n");

    println!("  {:>6}  {:>16}  {:>16}", "k", "FTCS", "Lax-Friedrichs");
    for k in (0..=base.time_steps).step_by(50) {
        let ftcs = results[0].2.sup_norm(k);
        let lax = results[1].2.sup_norm(k);
        println!("  {:>6}  {:>16.6e}  {:>16.6}", k, ftcs, lax);
    }

    // ====== Export ======

    println!("\nExport:");
    for (scheme, _, result) in &results {
        let path = tmp_dir.join(format!("advection_{}_final.csv", scheme.id()));
        let config = CsvConfig::default().with_metadata(CsvMetadata::from_result(result));

        match export_level_csv(result, base.time_steps, &path, Some(&config)) {
            Ok(()) => println!("  {:<15} → {}", scheme.to_string(), path.display()),
            Err(error) => println!("  {:<15} skipped: {}", scheme.to_string(), error),
        }
    }

    // ====== Summary ======

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Summary");
    println!("═══════════════════════════════════════════════════════\n");

    for (scheme, elapsed, result) in &results {
        println!(
            "  {:<15} max |u| = {:<14.6e} binary: {:<5} time: {:.3} s",
            scheme.to_string(),
            result.max_abs(),
            result.is_binary(),
            elapsed
        );
    }

    Ok(())
}
