//! Solve result types and statistics

use std::time::Duration;

use num::{BigInt, BigRational};

use crate::oracle::Model;

/// A satisfying line and the derived position sum
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Status token reported by the oracle (always `sat` here)
    pub status: &'static str,
    /// The full model returned by the oracle
    pub model: Model,
    /// Values of `x`, `y` and `z`
    pub position: [BigRational; 3],
    /// Values of `vx`, `vy` and `vz`
    pub velocity: [BigRational; 3],
    /// `x + y + z`
    pub sum: BigRational,
    /// Statistics from the solve
    pub statistics: SolveStatistics,
}

impl Solution {
    /// The sum as an integer, if it is one
    pub fn sum_as_integer(&self) -> Option<BigInt> {
        self.sum.is_integer().then(|| self.sum.to_integer())
    }
}

/// Statistics from a solve call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveStatistics {
    /// Name of the oracle backend
    pub oracle: &'static str,
    /// Number of observations assembled
    pub observations: usize,
    /// Number of unknowns declared
    pub unknowns_declared: usize,
    /// Number of constraints asserted, bounds included
    pub constraints_asserted: usize,
    /// Total time from assembly to extraction
    pub elapsed_time: Duration,
}

impl SolveStatistics {
    pub fn new(oracle: &'static str) -> Self {
        Self {
            oracle,
            ..Default::default()
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Oracle: {}\n", self.oracle));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Observations: {}\n", self.observations));
        s.push_str(&format!("Unknowns declared: {}\n", self.unknowns_declared));
        s.push_str(&format!(
            "Constraints asserted: {}\n",
            self.constraints_asserted
        ));
        s
    }
}
