//! Shorthand constructors for the constraint types

use super::{And, Comparison, Constraint, IntoVersion, Operator, Or, PreRelease, Stable};
use crate::InvalidVersionError;

/// Requires a version number to match every constraint in the set.
pub fn and(constraints: impl IntoIterator<Item = Box<dyn Constraint>>) -> And {
    constraints.into_iter().collect()
}

/// Requires a version number to match at least one constraint in the set.
pub fn or(constraints: impl IntoIterator<Item = Box<dyn Constraint>>) -> Or {
    constraints.into_iter().collect()
}

/// Requires a version number to be equal to another.
pub fn eq(version: impl IntoVersion) -> Result<Comparison, InvalidVersionError> {
    Comparison::new(Operator::Equal, version)
}

/// Requires a version number to not be equal to another.
pub fn ne(version: impl IntoVersion) -> Result<Comparison, InvalidVersionError> {
    Comparison::new(Operator::NotEqual, version)
}

/// Requires a version number to have greater precedence than another.
pub fn gt(version: impl IntoVersion) -> Result<Comparison, InvalidVersionError> {
    Comparison::new(Operator::GreaterThan, version)
}

/// Requires a version number to have greater or equal precedence to another.
pub fn gte(version: impl IntoVersion) -> Result<Comparison, InvalidVersionError> {
    Comparison::new(Operator::GreaterThanOrEqual, version)
}

/// Requires a version number to have lesser precedence than another.
pub fn lt(version: impl IntoVersion) -> Result<Comparison, InvalidVersionError> {
    Comparison::new(Operator::LessThan, version)
}

/// Requires a version number to have lesser or equal precedence to another.
pub fn lte(version: impl IntoVersion) -> Result<Comparison, InvalidVersionError> {
    Comparison::new(Operator::LessThanOrEqual, version)
}

/// Requires a version number to be stable.
pub fn stable() -> Stable {
    Stable
}

/// Requires a version number to be a pre-release.
pub fn pre() -> PreRelease {
    PreRelease
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Version;

    fn composed() -> Or {
        or([
            and([
                gte("1.0.0").unwrap().boxed(),
                lt("2.0.0").unwrap().boxed(),
                ne("1.2.3").unwrap().boxed(),
            ])
            .boxed(),
            and([gt("2.0.0").unwrap().boxed(), lte("2.1.0").unwrap().boxed()]).boxed(),
            and([
                gte("7.0.0").unwrap().boxed(),
                lt("8.0.0").unwrap().boxed(),
                stable().boxed(),
            ])
            .boxed(),
            and([
                gte("8.0.0").unwrap().boxed(),
                lt("9.0.0").unwrap().boxed(),
                pre().boxed(),
            ])
            .boxed(),
            eq("9.9.9").unwrap().boxed(),
        ])
    }

    #[test]
    fn test_aliases_with_strings() {
        let constraint = composed();

        assert!(!constraint.apply_str("1.2.3").unwrap());
        assert!(constraint.apply_str("1.5.0").unwrap());
        assert!(constraint.apply_str("2.0.10").unwrap());
        assert!(constraint.apply_str("7.1.0").unwrap());
        assert!(!constraint.apply_str("7.1.0-beta").unwrap());
        assert!(constraint.apply_str("8.1.0-beta").unwrap());
        assert!(constraint.apply_str("9.9.9").unwrap());
    }

    #[test]
    fn test_aliases_with_versions() {
        let constraint = or([
            and([
                gte(Version::new(1, 0, 0)).unwrap().boxed(),
                lt(Version::new(2, 0, 0)).unwrap().boxed(),
            ])
            .boxed(),
            eq(Version::new(9, 9, 9)).unwrap().boxed(),
        ]);

        assert!(constraint.apply(&Version::new(1, 5, 0)));
        assert!(!constraint.apply(&Version::new(2, 0, 0)));
        assert!(constraint.apply(&Version::new(9, 9, 9)));
    }

    #[test]
    fn test_range_composition() {
        let constraint = or([
            and([gte("1.0.0").unwrap().boxed(), lt("2.0.0").unwrap().boxed()]).boxed(),
            eq("9.9.9").unwrap().boxed(),
        ]);

        assert!(constraint.apply_str("1.5.0").unwrap());
        assert!(!constraint.apply_str("2.0.0").unwrap());
        assert!(constraint.apply_str("9.9.9").unwrap());
    }

    #[test]
    fn test_alias_rejects_invalid_strings() {
        assert!(eq("1.0").is_err());
        assert!(gt("x.y.z").is_err());
        assert!(lte("01.0.0").is_err());
    }
}
