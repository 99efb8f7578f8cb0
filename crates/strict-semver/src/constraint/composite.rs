//! Composite constraints combining child constraints with AND/OR logic

use std::fmt;

use super::Constraint;
use crate::Version;

/// Requires a version number to match every constraint in a set.
///
/// Any child returning `false` short-circuits the evaluation to `false`; an
/// exhausted (or empty) set yields `true`. Children are pure predicates, so
/// the aggregate result does not depend on their order. Growing the set while
/// another thread evaluates is ruled out by the `&mut` receiver; callers
/// wanting shared mutation must synchronize externally.
#[derive(Debug, Clone, Default)]
pub struct And {
    constraints: Vec<Box<dyn Constraint>>,
}

impl And {
    /// Creates a conjunction with an empty set of constraints.
    pub fn new() -> Self {
        And::default()
    }

    /// Adds a constraint to the set.
    pub fn add(&mut self, constraint: impl Constraint + 'static) -> &mut Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Adds a constraint to the set, by value.
    pub fn with(mut self, constraint: impl Constraint + 'static) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Returns the child constraints.
    pub fn constraints(&self) -> &[Box<dyn Constraint>] {
        &self.constraints
    }
}

impl Constraint for And {
    fn apply(&self, version: &Version) -> bool {
        self.constraints.iter().all(|c| c.apply(version))
    }

    fn clone_box(&self) -> Box<dyn Constraint> {
        Box::new(self.clone())
    }
}

impl FromIterator<Box<dyn Constraint>> for And {
    fn from_iter<I: IntoIterator<Item = Box<dyn Constraint>>>(iter: I) -> Self {
        And {
            constraints: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for And {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_composite(f, &self.constraints, " ")
    }
}

/// Requires a version number to match at least one constraint in a set.
///
/// Any child returning `true` short-circuits the evaluation to `true`; an
/// exhausted (or empty) set yields `false`.
#[derive(Debug, Clone, Default)]
pub struct Or {
    constraints: Vec<Box<dyn Constraint>>,
}

impl Or {
    /// Creates a disjunction with an empty set of constraints.
    pub fn new() -> Self {
        Or::default()
    }

    /// Adds a constraint to the set.
    pub fn add(&mut self, constraint: impl Constraint + 'static) -> &mut Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Adds a constraint to the set, by value.
    pub fn with(mut self, constraint: impl Constraint + 'static) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Returns the child constraints.
    pub fn constraints(&self) -> &[Box<dyn Constraint>] {
        &self.constraints
    }
}

impl Constraint for Or {
    fn apply(&self, version: &Version) -> bool {
        self.constraints.iter().any(|c| c.apply(version))
    }

    fn clone_box(&self) -> Box<dyn Constraint> {
        Box::new(self.clone())
    }
}

impl FromIterator<Box<dyn Constraint>> for Or {
    fn from_iter<I: IntoIterator<Item = Box<dyn Constraint>>>(iter: I) -> Self {
        Or {
            constraints: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_composite(f, &self.constraints, " || ")
    }
}

fn write_composite(
    f: &mut fmt::Formatter<'_>,
    constraints: &[Box<dyn Constraint>],
    separator: &str,
) -> fmt::Result {
    let parts: Vec<String> = constraints.iter().map(|c| c.to_string()).collect();

    write!(f, "[{}]", parts.join(separator))
}
