//! Helper functions for integration tests

use advect_rs::solver::SimulationResult;

/// Assert every value of the field lies in `[-bound, bound]`
pub fn assert_bounded(result: &SimulationResult, bound: f64, message: &str) {
    for k in 0..=result.time_steps() {
        let sup = result.sup_norm(k);
        assert!(
            sup <= bound,
            "{}: sup-norm {} at level {} exceeds {}",
            message, sup, k, bound
        );
    }
}

/// Assert `u[0, k] = 1` and `u[M, k] = 0` at every level
pub fn assert_boundaries_hold(result: &SimulationResult, message: &str) {
    let last = result.space_steps();

    for k in 0..=result.time_steps() {
        let level = result.level(k);
        assert_eq!(level[0], 1.0, "{}: left boundary at level {}", message, k);
        assert_eq!(level[last], 0.0, "{}: right boundary at level {}", message, k);
    }
}

/// Number of exact ones in a level
pub fn count_ones(level: &[f64]) -> usize {
    level.iter().filter(|&&v| v == 1.0).count()
}

/// `sup(level b) / sup(level a)`
pub fn sup_norm_growth(result: &SimulationResult, a: usize, b: usize) -> f64 {
    result.sup_norm(b) / result.sup_norm(a)
}
