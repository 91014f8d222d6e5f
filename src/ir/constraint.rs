//! Constraints asserted for a solve call

use std::fmt;

use num::{BigInt, One, Signed, Zero};

use crate::ir::types::{Axis, Observation, Unknown};

/// An assertion handed to the oracle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// `position + t_i * velocity == axis + v_axis * t_i` for observation `i`
    Meets {
        observation: usize,
        axis: Axis,
        position: BigInt,
        velocity: BigInt,
    },
    /// `unknown >= 0`
    NonNegative(Unknown),
}

impl Constraint {
    /// The line meets observation `index` along `axis` at time `t_index`
    pub fn meets(index: usize, observation: &Observation, axis: Axis) -> Self {
        Constraint::Meets {
            observation: index,
            axis,
            position: observation.position(axis).clone(),
            velocity: observation.velocity(axis).clone(),
        }
    }

    pub fn unknowns(&self) -> Vec<Unknown> {
        match self {
            Constraint::Meets {
                observation, axis, ..
            } => vec![
                Unknown::Position(*axis),
                Unknown::Velocity(*axis),
                Unknown::Time(*observation),
            ],
            Constraint::NonNegative(unknown) => vec![*unknown],
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Meets {
                observation,
                axis,
                position,
                velocity,
            } => {
                let t = Unknown::Time(*observation);
                write!(f, "{}", position)?;
                if !velocity.is_zero() {
                    let sign = if velocity.is_negative() { "-" } else { "+" };
                    let magnitude = velocity.abs();
                    if magnitude.is_one() {
                        write!(f, " {} {}", sign, t)?;
                    } else {
                        write!(f, " {} {}*{}", sign, magnitude, t)?;
                    }
                }
                write!(
                    f,
                    " == {} + {}*{}",
                    Unknown::Position(*axis),
                    Unknown::Velocity(*axis),
                    t
                )
            }
            Constraint::NonNegative(unknown) => write!(f, "{} >= 0", unknown),
        }
    }
}
