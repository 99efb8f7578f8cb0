//! Constraint trait and version conversion seam

use crate::{InvalidVersionError, Version};

/// A predicate over version numbers.
///
/// Constraints are pure with respect to the version they are applied to; a
/// constraint may capture a reference version or a set of child constraints at
/// construction time.
pub trait Constraint: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Applies the constraint to a version number.
    fn apply(&self, version: &Version) -> bool;

    /// Parses a version string and applies the constraint to it.
    fn apply_str(&self, version: &str) -> Result<bool, InvalidVersionError> {
        Ok(self.apply(&version.parse()?))
    }

    /// Clones this constraint into a boxed trait object.
    fn clone_box(&self) -> Box<dyn Constraint>;

    /// Moves this constraint into a boxed trait object.
    fn boxed(self) -> Box<dyn Constraint>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl Clone for Box<dyn Constraint> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Conversion accepted by constraint constructors: either an existing
/// [`Version`] or a string to parse into one.
pub trait IntoVersion {
    fn into_version(self) -> Result<Version, InvalidVersionError>;
}

impl IntoVersion for Version {
    fn into_version(self) -> Result<Version, InvalidVersionError> {
        Ok(self)
    }
}

impl IntoVersion for &Version {
    fn into_version(self) -> Result<Version, InvalidVersionError> {
        Ok(self.clone())
    }
}

impl IntoVersion for &str {
    fn into_version(self) -> Result<Version, InvalidVersionError> {
        self.parse()
    }
}

impl IntoVersion for String {
    fn into_version(self) -> Result<Version, InvalidVersionError> {
        self.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_version() {
        let version = Version::new(1, 2, 3);

        assert_eq!(version.clone().into_version().unwrap(), version);
        assert_eq!((&version).into_version().unwrap(), version);
        assert_eq!("1.2.3".into_version().unwrap(), version);
        assert_eq!("1.2.3".to_string().into_version().unwrap(), version);

        assert!("1.2".into_version().is_err());
    }
}
