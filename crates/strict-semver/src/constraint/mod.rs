//! Composable predicates over version numbers

mod aliases;
mod comparison;
mod composite;
mod constraint_interface;
mod operator;
mod stability;

pub use aliases::{and, eq, gt, gte, lt, lte, ne, or, pre, stable};
pub use comparison::Comparison;
pub use composite::{And, Or};
pub use constraint_interface::{Constraint, IntoVersion};
pub use operator::Operator;
pub use stability::{PreRelease, Stable};
