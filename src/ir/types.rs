//! Core types for the hailstone constraint representation

use std::fmt;

use num::BigInt;

use crate::solve::SolveError;

/// Spatial axis of a three-dimensional position or velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in component order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index (0 for X, 1 for Y, 2 for Z)
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Lowercase axis name
    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named real-valued symbol, resolved only once the oracle produces a model
///
/// The derived ordering (positions, then velocities, then times by index)
/// is also the order in which models are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unknown {
    /// Shared starting position of the thrown line
    Position(Axis),
    /// Shared velocity of the thrown line
    Velocity(Axis),
    /// Time at which the line meets the observation with this index
    Time(usize),
}

impl Unknown {
    /// The six unknowns shared by every observation
    pub fn line() -> [Unknown; 6] {
        [
            Unknown::Position(Axis::X),
            Unknown::Position(Axis::Y),
            Unknown::Position(Axis::Z),
            Unknown::Velocity(Axis::X),
            Unknown::Velocity(Axis::Y),
            Unknown::Velocity(Axis::Z),
        ]
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unknown::Position(axis) => write!(f, "{}", axis),
            Unknown::Velocity(axis) => write!(f, "v{}", axis),
            Unknown::Time(index) => write!(f, "t{}", index),
        }
    }
}

/// One observed particle: a starting position and a constant velocity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Observation {
    pub position: [BigInt; 3],
    pub velocity: [BigInt; 3],
}

impl Observation {
    pub fn new(position: [BigInt; 3], velocity: [BigInt; 3]) -> Self {
        Self { position, velocity }
    }

    /// Build an observation from plain integers
    pub fn from_i64(position: [i64; 3], velocity: [i64; 3]) -> Self {
        Self {
            position: position.map(BigInt::from),
            velocity: velocity.map(BigInt::from),
        }
    }

    /// Build an observation from a flat record of six literals
    /// (`px, py, pz, vx, vy, vz`)
    pub fn from_literals(literals: &[BigInt]) -> Result<Self, SolveError> {
        match literals {
            [px, py, pz, vx, vy, vz] => Ok(Self {
                position: [px.clone(), py.clone(), pz.clone()],
                velocity: [vx.clone(), vy.clone(), vz.clone()],
            }),
            _ => Err(SolveError::MalformedObservation {
                index: 0,
                reason: format!("expected 6 literals, found {}", literals.len()),
            }),
        }
    }

    pub fn position(&self, axis: Axis) -> &BigInt {
        &self.position[axis.index()]
    }

    pub fn velocity(&self, axis: Axis) -> &BigInt {
        &self.velocity[axis.index()]
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [px, py, pz] = &self.position;
        let [vx, vy, vz] = &self.velocity;
        write!(f, "{}, {}, {} @ {}, {}, {}", px, py, pz, vx, vy, vz)
    }
}
