//! Stepping traits and scheme selection
//!
//! # Design Philosophy
//!
//! - [`Stepper`]: the interface every explicit one-level update implements
//! - [`Scheme`]: the closed set of schemes, a tagged enum dispatched to the
//!   pure update functions in [`crate::solver::methods`]
//!
//! A stepper carries no state between calls. It reads level `k` and returns
//! the single value at `(i, k + 1)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdvectionError;
use crate::physics::SolutionField;
use crate::solver::methods::{ftcs_update, lax_friedrichs_update};

// =================================================================================================
// Stepper Trait
// =================================================================================================

/// One-level explicit update rule
///
/// # Contract
///
/// - `update` is called for interior points only, `i ∈ [1, M − 1]`; the
///   boundary points are owned by the grid initializer
/// - `level` is the complete time level `k`; the returned value is
///   `u[i, k + 1]`
/// - Implementations are pure: same inputs, same output, no side effects
pub trait Stepper: Send + Sync {
    /// Value at `(i, k + 1)` from level `k`
    fn update(&self, level: &[f64], i: usize, factor: f64) -> f64;

    /// Read level `k` of `u` and write `u[i, k + 1]`
    fn advance(&self, u: &mut SolutionField, i: usize, k: usize, factor: f64) {
        let (previous, next) = u.split_levels(k);
        next[i] = self.update(previous, i, factor);
    }

    /// Human-readable name (used in logs and exported metadata)
    fn name(&self) -> &'static str;

    /// Whether the scheme has a stability region at all
    ///
    /// `false` means no choice of `dt`/`dx` makes it stable.
    fn is_conditionally_stable(&self) -> bool;
}

// =================================================================================================
// Scheme Enumeration
// =================================================================================================

/// Available finite-difference schemes
///
/// # Examples
///
/// ```rust
/// use advect_rs::solver::{Scheme, Stepper};
///
/// let level = [1.0, 1.0, 0.0, 0.0];
///
/// // Lax-Friedrichs at factor 0.5 (Courant number 1) is an exact shift
/// assert_eq!(Scheme::LaxFriedrichs.update(&level, 2, 0.5), 1.0);
///
/// let scheme: Scheme = "ftcs".parse()?;
/// assert_eq!(scheme, Scheme::Ftcs);
/// # Ok::<(), advect_rs::AdvectionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Forward-time centred-space: unconditionally unstable
    Ftcs,

    /// Lax-Friedrichs: stable under the CFL condition
    #[default]
    LaxFriedrichs,
}

impl Scheme {
    /// All schemes, in declaration order
    pub const ALL: [Scheme; 2] = [Scheme::Ftcs, Scheme::LaxFriedrichs];

    /// Short identifier used in configuration files
    pub fn id(&self) -> &'static str {
        match self {
            Scheme::Ftcs => "ftcs",
            Scheme::LaxFriedrichs => "lax_friedrichs",
        }
    }
}

impl Stepper for Scheme {
    fn update(&self, level: &[f64], i: usize, factor: f64) -> f64 {
        let (left, centre, right) = (level[i - 1], level[i], level[i + 1]);
        match self {
            Scheme::Ftcs => ftcs_update(left, centre, right, factor),
            Scheme::LaxFriedrichs => lax_friedrichs_update(left, right, factor),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Scheme::Ftcs => "FTCS",
            Scheme::LaxFriedrichs => "Lax-Friedrichs",
        }
    }

    fn is_conditionally_stable(&self) -> bool {
        matches!(self, Scheme::LaxFriedrichs)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Scheme {
    type Err = AdvectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "ftcs" => Ok(Scheme::Ftcs),
            "lax_friedrichs" | "lax" | "laxfriedrichs" => Ok(Scheme::LaxFriedrichs),
            other => Err(AdvectionError::Config(format!("unknown scheme '{other}'"))),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_parsing() {
        assert_eq!("FTCS".parse::<Scheme>().unwrap(), Scheme::Ftcs);
        assert_eq!("Lax-Friedrichs".parse::<Scheme>().unwrap(), Scheme::LaxFriedrichs);
        assert_eq!("lax".parse::<Scheme>().unwrap(), Scheme::LaxFriedrichs);
        assert!("crank_nicolson".parse::<Scheme>().is_err());
    }

    #[test]
    fn test_scheme_serde_ids() {
        let json = serde_json::to_string(&Scheme::LaxFriedrichs).unwrap();
        assert_eq!(json, "\"lax_friedrichs\"");

        let scheme: Scheme = serde_json::from_str("\"ftcs\"").unwrap();
        assert_eq!(scheme, Scheme::Ftcs);

        for scheme in Scheme::ALL {
            assert_eq!(scheme.id().parse::<Scheme>().unwrap(), scheme);
        }
    }

    #[test]
    fn test_stability_classification() {
        assert!(!Scheme::Ftcs.is_conditionally_stable());
        assert!(Scheme::LaxFriedrichs.is_conditionally_stable());
    }

    #[test]
    fn test_advance_writes_only_next_level() {
        let mut u = SolutionField::zeros(4, 2);
        u.level_mut(0).copy_from_slice(&[1.0, 1.0, 0.0, 0.0, 0.0]);

        Scheme::LaxFriedrichs.advance(&mut u, 2, 0, 0.5);

        assert_eq!(u.get(2, 1), 1.0);
        assert_eq!(u.level(0), &[1.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(u.level(2), &[0.0; 5]);
    }

    #[test]
    fn test_ftcs_dispatch() {
        let level = [1.0, 1.0, 0.0];
        // 1 - 0.25 * (0 - 1)
        assert_eq!(Scheme::Ftcs.update(&level, 1, 0.25), 1.25);
    }
}
