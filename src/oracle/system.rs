//! Declared unknowns and asserted constraints for a single check

use std::fmt;

use log::debug;

use crate::ir::{Constraint, Unknown};

/// Constraint system scoped to one solve call
///
/// Unknowns keep their declaration order. Asserting a constraint that
/// mentions an undeclared unknown declares it implicitly.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSystem {
    unknowns: Vec<Unknown>,
    constraints: Vec<Constraint>,
}

impl ConstraintSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an unknown; declaring it twice has no effect
    pub fn declare(&mut self, unknown: Unknown) {
        if !self.unknowns.contains(&unknown) {
            self.unknowns.push(unknown);
        }
    }

    pub fn assert(&mut self, constraint: Constraint) {
        for unknown in constraint.unknowns() {
            self.declare(unknown);
        }
        debug!("assert {}", constraint);
        self.constraints.push(constraint);
    }

    pub fn unknowns(&self) -> &[Unknown] {
        &self.unknowns
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

impl fmt::Display for ConstraintSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for constraint in &self.constraints {
            writeln!(f, "{}", constraint)?;
        }
        Ok(())
    }
}
