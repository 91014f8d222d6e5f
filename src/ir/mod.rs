//! Intermediate representation: unknowns, observations and constraints

pub mod constraint;
pub mod types;

// Re-export commonly used types
pub use constraint::Constraint;
pub use types::{Axis, Observation, Unknown};
