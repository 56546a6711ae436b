//! Named simulation setups shared by the integration tests

use advect_rs::solver::{Scheme, SimulationConfig};

/// A configuration together with a short label for assertion messages
pub struct Scenario {
    pub label: &'static str,
    pub config: SimulationConfig,
}

impl Scenario {
    pub fn new(label: &'static str, config: SimulationConfig) -> Self {
        Self { label, config }
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.config = self.config.with_scheme(scheme);
        self
    }
}

/// `L = T = 1`, `c = 1`, 350 time steps, 300 space steps, front 50
///
/// Courant number 300/350 ≈ 0.857.
pub fn reference_scenario(scheme: Scheme) -> Scenario {
    Scenario::new("reference", SimulationConfig::new(scheme))
}

/// `dt = dx`, `c = 1`: Courant number exactly 1
pub fn unit_courant_scenario(scheme: Scheme, steps: usize, front_size: usize) -> Scenario {
    Scenario::new(
        "unit courant",
        SimulationConfig::new(scheme)
            .with_grid(1.0, 1.0, steps, steps)
            .with_velocity(1.0)
            .with_front_size(front_size),
    )
}

/// Stable Lax-Friedrichs setups with Courant number ≤ 1, both directions
pub fn stable_lax_friedrichs_scenarios() -> Vec<Scenario> {
    let base = SimulationConfig::new(Scheme::LaxFriedrichs);

    vec![
        Scenario::new("c = 1.0", base),
        Scenario::new("c = 0.8", base.with_velocity(0.8)),
        Scenario::new("c = -0.8", base.with_velocity(-0.8)),
        Scenario::new("c = 0.5", base.with_velocity(0.5)),
        unit_courant_scenario(Scheme::LaxFriedrichs, 100, 20),
    ]
}
