//! Comparison operators for version constraints

use std::cmp::Ordering;
use std::fmt;

use crate::Version;

/// Comparison operators usable in a [`Comparison`](super::Comparison) constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (==)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
}

impl Operator {
    /// Checks a version against a reference version under this operator.
    pub fn compare(&self, version: &Version, reference: &Version) -> bool {
        match version.cmp(reference) {
            Ordering::Equal => matches!(
                self,
                Operator::Equal | Operator::GreaterThanOrEqual | Operator::LessThanOrEqual
            ),
            Ordering::Greater => matches!(
                self,
                Operator::NotEqual | Operator::GreaterThan | Operator::GreaterThanOrEqual
            ),
            Ordering::Less => matches!(
                self,
                Operator::NotEqual | Operator::LessThan | Operator::LessThanOrEqual
            ),
        }
    }

    /// Returns the string representation of the operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
