//! Satisfiability oracle interface and the z3 backend
//!
//! The oracle decides whether a conjunction of constraints over real
//! unknowns has a solution and, if so, produces one model. Callers only
//! depend on the [`Oracle`] trait; [`Z3Oracle`] is the backend shipped
//! with the crate.

pub mod model;
pub mod smt;
pub mod system;

use std::fmt;
use std::time::Duration;

pub use model::Model;
pub use smt::Z3Oracle;
pub use system::ConstraintSystem;

/// Configuration for an oracle invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleConfig {
    /// Timeout for a single check (None means no timeout)
    pub timeout: Option<Duration>,
}

impl OracleConfig {
    /// Create a config with no timeout
    pub fn no_timeout() -> Self {
        Self { timeout: None }
    }

    /// Create a config with a specific timeout in seconds
    pub fn with_timeout_secs(secs: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(secs)),
        }
    }

    /// Create a config with a specific timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Outcome of a satisfiability check
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The constraints are jointly satisfiable; carries one satisfying model
    Sat(Model),
    /// The constraints have no common solution
    Unsat,
    /// Could not determine (timeout, resource limit, etc.)
    Unknown(String),
}

impl Verdict {
    /// Status token as printed by SMT solvers
    pub fn status(&self) -> &'static str {
        match self {
            Verdict::Sat(_) => "sat",
            Verdict::Unsat => "unsat",
            Verdict::Unknown(_) => "unknown",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status())
    }
}

/// A decision procedure for constraint systems
pub trait Oracle {
    /// Short backend name used in logs and statistics
    fn name(&self) -> &'static str;

    /// Decide the conjunction of every constraint asserted in `system`
    fn check(&self, system: &ConstraintSystem) -> Verdict;
}
