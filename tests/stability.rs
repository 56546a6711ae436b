//! Integration tests: CFL stability law
//!
//! Lax-Friedrichs stays bounded by the initial data when the Courant number
//! is at most 1 and blows up otherwise; FTCS blows up regardless.

use advect_rs::physics::is_cfl_satisfied;
use advect_rs::solver::{simulate, Scheme, Simulator};

mod common;
use common::scenarios::stable_lax_friedrichs_scenarios;
use common::{assert_bounded, reference_scenario, sup_norm_growth};

// =================================================================================================
// Lax-Friedrichs
// =================================================================================================

#[test]
fn test_lax_friedrichs_bounded_under_cfl() {
    for scenario in stable_lax_friedrichs_scenarios() {
        assert!(
            scenario.config.courant_number() <= 1.0,
            "{}: scenario is not CFL-stable",
            scenario.label
        );

        let result = Simulator::new().run(&scenario.config).unwrap();
        assert!(result.is_cfl_satisfied());
        assert_bounded(&result, 1.0 + 1e-12, scenario.label);
    }
}

#[test]
fn test_lax_friedrichs_stays_non_negative_under_cfl() {
    for scenario in stable_lax_friedrichs_scenarios() {
        let result = Simulator::new().run(&scenario.config).unwrap();
        let min = result.u.iter().copied().fold(f64::INFINITY, f64::min);

        assert!(min >= -1e-12, "{}: minimum {} below zero", scenario.label, min);
    }
}

#[test]
fn test_lax_friedrichs_grows_beyond_cfl() {
    // dt = 0.02, dx = 0.01 → Courant number 2
    assert!(!is_cfl_satisfied(1.0, 1.0 / 50.0, 1.0 / 100.0));

    let result = simulate(Scheme::LaxFriedrichs, 1.0, 1.0, 1.0, 50, 100, 20).unwrap();

    assert!(!result.is_cfl_satisfied());
    assert!(result.sup_norm(50) > 10.0, "sup-norm {}", result.sup_norm(50));
}

// =================================================================================================
// FTCS
// =================================================================================================

#[test]
fn test_ftcs_unstable_under_cfl() {
    let scenario = reference_scenario(Scheme::Ftcs);
    assert!(scenario.config.courant_number() < 1.0);

    let result = Simulator::new().run(&scenario.config).unwrap();

    assert!(result.sup_norm(350) > 1e3);
    assert!(result.sup_norm(350) > result.sup_norm(175));
    assert!(sup_norm_growth(&result, 175, 350) > 1.0);
}

#[test]
fn test_ftcs_unstable_at_unit_courant() {
    let result = simulate(Scheme::Ftcs, 1.0, 1.0, 1.0, 100, 100, 20).unwrap();

    assert!(result.sup_norm(50) > 1e3);
    assert!(result.sup_norm(100) > result.sup_norm(50));
}

#[test]
fn test_same_inputs_diverge_only_by_scheme() {
    let lax = Simulator::new()
        .run(&reference_scenario(Scheme::LaxFriedrichs).config)
        .unwrap();
    let ftcs = Simulator::new()
        .run(&reference_scenario(Scheme::Ftcs).config)
        .unwrap();

    assert_eq!(lax.dt, ftcs.dt);
    assert_eq!(lax.dx, ftcs.dx);
    assert_eq!(lax.level(0), ftcs.level(0));
    assert!(ftcs.max_abs() > 1e3 * lax.max_abs());
}
