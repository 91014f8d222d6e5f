//! Equation assembly and oracle invocation
//!
//! Every solve call builds its own constraint system, hands it to an
//! oracle, extracts the line from the model and drops the system again.
//! Nothing is shared between calls.

pub mod config;
pub mod error;
pub mod result;

use std::time::Instant;

use log::{debug, info};
use num::{BigInt, BigRational};

pub use config::SolveConfig;
pub use error::SolveError;
pub use result::{Solution, SolveStatistics};

use crate::ir::{Axis, Constraint, Observation, Unknown};
use crate::oracle::{ConstraintSystem, Oracle, Verdict, Z3Oracle};

/// Build the constraint system for `observations`
///
/// Declares `x y z vx vy vz` and one `t_i` per observation, then asserts
/// `P[a] + t_i * V[a] == p[a] + t_i * v[a]` for every axis. With
/// `non_negative_time` each `t_i` is also bounded below by zero.
pub fn assemble(observations: &[Observation], config: &SolveConfig) -> ConstraintSystem {
    let mut system = ConstraintSystem::new();
    for unknown in Unknown::line() {
        system.declare(unknown);
    }
    for index in 0..observations.len() {
        system.declare(Unknown::Time(index));
    }

    for (index, observation) in observations.iter().enumerate() {
        for axis in Axis::ALL {
            system.assert(Constraint::meets(index, observation, axis));
        }
        if config.non_negative_time {
            system.assert(Constraint::NonNegative(Unknown::Time(index)));
        }
    }
    debug!(
        "assembled {} constraints for {} observations",
        system.constraints().len(),
        observations.len()
    );
    system
}

/// Solve with the default configuration and the z3 oracle
pub fn solve(observations: &[Observation]) -> Result<Solution, SolveError> {
    solve_with_config(observations, &SolveConfig::default())
}

pub fn solve_with_config(
    observations: &[Observation],
    config: &SolveConfig,
) -> Result<Solution, SolveError> {
    let oracle = Z3Oracle::new(config.oracle.clone());
    solve_with_oracle(&oracle, observations, config)
}

/// Assemble, check with `oracle`, and extract `x + y + z` from the model
pub fn solve_with_oracle(
    oracle: &dyn Oracle,
    observations: &[Observation],
    config: &SolveConfig,
) -> Result<Solution, SolveError> {
    let started = Instant::now();
    let mut statistics = SolveStatistics::new(oracle.name());

    let system = assemble(observations, config);
    statistics.observations = observations.len();
    statistics.unknowns_declared = system.unknowns().len();
    statistics.constraints_asserted = system.constraints().len();

    info!(
        "checking {} constraints over {} unknowns with the {} oracle",
        statistics.constraints_asserted,
        statistics.unknowns_declared,
        oracle.name()
    );
    let verdict = oracle.check(&system);
    info!("oracle verdict: {}", verdict);

    let model = match verdict {
        Verdict::Sat(model) => model,
        Verdict::Unsat => return Err(SolveError::NoSolution),
        Verdict::Unknown(reason) => return Err(SolveError::IndeterminateResult(reason)),
    };

    let value = |unknown: Unknown| -> Result<BigRational, SolveError> {
        model.get(&unknown).cloned().ok_or_else(|| {
            SolveError::IndeterminateResult(format!("model has no value for {}", unknown))
        })
    };
    let position = [
        value(Unknown::Position(Axis::X))?,
        value(Unknown::Position(Axis::Y))?,
        value(Unknown::Position(Axis::Z))?,
    ];
    let velocity = [
        value(Unknown::Velocity(Axis::X))?,
        value(Unknown::Velocity(Axis::Y))?,
        value(Unknown::Velocity(Axis::Z))?,
    ];
    let sum = &position[0] + &position[1] + &position[2];

    statistics.elapsed_time = started.elapsed();
    Ok(Solution {
        status: "sat",
        model,
        position,
        velocity,
        sum,
        statistics,
    })
}

/// Validate flat literal records, then solve them
///
/// Every record must hold exactly six literals. The first bad record
/// fails the call before any constraint is built.
pub fn solve_literals(
    records: &[Vec<BigInt>],
    config: &SolveConfig,
) -> Result<Solution, SolveError> {
    let observations = records
        .iter()
        .enumerate()
        .map(|(index, literals)| {
            Observation::from_literals(literals).map_err(|e| match e {
                SolveError::MalformedObservation { reason, .. } => {
                    SolveError::MalformedObservation { index, reason }
                }
                other => other,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    solve_with_config(&observations, config)
}
