//! Exact solver for the single line that meets every observed hailstone
//!
//! Observations are turned into a system of equality constraints over real
//! unknowns and handed to a satisfiability [`oracle::Oracle`]. A satisfying
//! model yields the line's starting position and `x + y + z`.

pub mod crossing;
pub mod ir;
pub mod oracle;
pub mod parser;
pub mod puzzle;
pub mod solve;

pub use ir::{Axis, Constraint, Observation, Unknown};
pub use oracle::{ConstraintSystem, Model, Oracle, OracleConfig, Verdict, Z3Oracle};
pub use solve::{
    Solution, SolveConfig, SolveError, SolveStatistics, solve, solve_literals, solve_with_config,
    solve_with_oracle,
};
