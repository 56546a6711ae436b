//! Common utilities for integration tests

#![allow(dead_code)]

pub mod scenarios;
pub mod test_helpers;

// Re-export commonly used items
pub use scenarios::{reference_scenario, unit_courant_scenario, Scenario};
pub use test_helpers::{assert_bounded, assert_boundaries_hold, count_ones, sup_norm_growth};
