//! Failure modes of a solve call

use thiserror::Error;

/// Why a solve produced no sum
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The constraints have no common solution
    #[error("no solution: no single line meets every observation")]
    NoSolution,
    /// The oracle could not decide within its limits
    #[error("indeterminate result: {0}")]
    IndeterminateResult(String),
    /// An input record was rejected before the oracle was invoked
    #[error("malformed observation #{index}: {reason}")]
    MalformedObservation { index: usize, reason: String },
}

impl SolveError {
    /// Status token of the oracle verdict behind this error; `None` when
    /// the oracle was never consulted
    pub fn status(&self) -> Option<&'static str> {
        match self {
            SolveError::NoSolution => Some("unsat"),
            SolveError::IndeterminateResult(_) => Some("unknown"),
            SolveError::MalformedObservation { .. } => None,
        }
    }
}
