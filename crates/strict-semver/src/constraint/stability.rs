//! Stability constraints without a reference version

use std::fmt;

use super::Constraint;
use crate::Version;

/// Requires a version number to be stable: major version above zero and no
/// pre-release identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stable;

impl Constraint for Stable {
    fn apply(&self, version: &Version) -> bool {
        version.is_stable()
    }

    fn clone_box(&self) -> Box<dyn Constraint> {
        Box::new(*self)
    }
}

impl fmt::Display for Stable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stable")
    }
}

/// Requires a version number to be a pre-release: major version of zero or
/// pre-release identifiers present.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreRelease;

impl Constraint for PreRelease {
    fn apply(&self, version: &Version) -> bool {
        version.is_pre_release()
    }

    fn clone_box(&self) -> Box<dyn Constraint> {
        Box::new(*self)
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pre-release")
    }
}
