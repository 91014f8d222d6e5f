//! Satisfying assignments produced by an oracle

use std::collections::BTreeMap;
use std::fmt;

use num::BigRational;

use crate::ir::Unknown;

/// A concrete exact value for every unknown of a constraint system
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    values: BTreeMap<Unknown, BigRational>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, unknown: Unknown, value: BigRational) {
        self.values.insert(unknown, value);
    }

    pub fn get(&self, unknown: &Unknown) -> Option<&BigRational> {
        self.values.get(unknown)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .values
            .iter()
            .map(|(unknown, value)| format!("{} = {}", unknown, value))
            .collect();
        write!(f, "[{}]", entries.join(",\n "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Axis;
    use num::BigInt;
    use pretty_assertions::assert_eq;

    fn rat(value: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(value))
    }

    fn sample_model() -> Model {
        let mut model = Model::new();
        model.assign(Unknown::Time(0), rat(5));
        model.assign(Unknown::Position(Axis::X), rat(24));
        model.assign(Unknown::Velocity(Axis::X), rat(-3));
        model
    }

    #[test]
    fn test_assign_and_get() {
        let mut model = sample_model();
        assert_eq!(model.len(), 3);
        assert_eq!(model.get(&Unknown::Position(Axis::X)), Some(&rat(24)));
        assert_eq!(model.get(&Unknown::Time(1)), None);

        model.assign(Unknown::Position(Axis::X), rat(-1));
        assert_eq!(model.len(), 3);
        assert_eq!(model.get(&Unknown::Position(Axis::X)), Some(&rat(-1)));
        assert!(Model::new().is_empty());
    }

    #[test]
    fn test_display_is_ordered() {
        assert_eq!(sample_model().to_string(), "[x = 24,\n vx = -3,\n t0 = 5]");
    }

    #[test]
    fn test_display_fraction() {
        let mut model = Model::new();
        model.assign(
            Unknown::Time(0),
            BigRational::new(BigInt::from(1), BigInt::from(2)),
        );
        assert_eq!(model.to_string(), "[t0 = 1/2]");
    }
}
