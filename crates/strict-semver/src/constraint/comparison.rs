//! Comparison constraint against a captured reference version

use std::fmt;

use super::{Constraint, IntoVersion, Operator};
use crate::{InvalidVersionError, Version};

/// A constraint comparing applied versions against one captured reference
/// version under a fixed [`Operator`].
#[derive(Debug, Clone)]
pub struct Comparison {
    operator: Operator,
    reference: Version,
}

impl Comparison {
    /// Captures the reference version to compare against.
    pub fn new(operator: Operator, version: impl IntoVersion) -> Result<Self, InvalidVersionError> {
        Ok(Comparison {
            operator,
            reference: version.into_version()?,
        })
    }

    /// Returns the comparison operator.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the captured reference version.
    pub fn reference(&self) -> &Version {
        &self.reference
    }
}

impl Constraint for Comparison {
    fn apply(&self, version: &Version) -> bool {
        self.operator.compare(version, &self.reference)
    }

    fn clone_box(&self) -> Box<dyn Constraint> {
        Box::new(self.clone())
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.reference)
    }
}
