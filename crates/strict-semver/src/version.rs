//! Immutable semantic version numbers and their precedence ordering

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::ParseIntError;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Validates a complete semantic version number string.
    static ref VALIDATOR: Regex = Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"
    ).unwrap();

    /// Validates a single pre-release identifier (numeric identifiers carry no leading zero).
    static ref PRE_RELEASE_IDENTIFIER: Regex =
        Regex::new(r"^(0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)$").unwrap();

    /// Validates a single build metadata identifier.
    static ref BUILD_IDENTIFIER: Regex = Regex::new(r"^[0-9A-Za-z-]+$").unwrap();
}

/// Error type for rejected version numbers
#[derive(Error, Debug, Clone)]
pub enum InvalidVersionError {
    #[error("\"{0}\" is not a valid semantic version number")]
    Malformed(String),
    #[error("\"{0}\" is not a valid pre-release identifier")]
    PreReleaseIdentifier(String),
    #[error("\"{0}\" is not a valid build metadata identifier")]
    BuildIdentifier(String),
    #[error("the numeric component \"{value}\" of \"{version}\" could not be parsed")]
    Number {
        version: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// An immutable representation of a semantic version number.
///
/// Equality, hashing, and ordering follow SemVer 2.0.0 precedence: the numeric
/// triple and the pre-release identifiers participate, build metadata never
/// does. Every mutation-like operation returns a new `Version` and leaves the
/// receiver untouched.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<String>,
    build: Vec<String>,
}

impl Version {
    /// A default version number (0.0.0) that can be used as a starting point.
    pub const DEFAULT: Version = Version {
        major: 0,
        minor: 0,
        patch: 0,
        pre_release: Vec::new(),
        build: Vec::new(),
    };

    /// The version of the Semantic Versioning specification implemented here.
    pub const SPEC: Version = Version {
        major: 2,
        minor: 0,
        patch: 0,
        pre_release: Vec::new(),
        build: Vec::new(),
    };

    /// Creates a version number without pre-release or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Creates a version number with pre-release and build metadata, validating
    /// every identifier against its grammar.
    pub fn with_metadata<P, B>(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: P,
        build: B,
    ) -> Result<Self, InvalidVersionError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        let pre_release = validate_identifiers(pre_release, validate_pre_release_identifier)?;
        let build = validate_identifiers(build, validate_build_identifier)?;

        Ok(Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }

    /// Returns the major version number.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Returns the minor version number.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Returns the patch version number.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Returns the pre-release identifiers.
    pub fn pre_release(&self) -> &[String] {
        &self.pre_release
    }

    /// Returns the build metadata identifiers.
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Increments the major version number by 1, resetting the minor and patch
    /// numbers and clearing all metadata.
    pub fn increment_major(&self) -> Version {
        self.increment_major_by(1)
    }

    /// Increments the major version number by the given amount, resetting the
    /// minor and patch numbers and clearing all metadata.
    pub fn increment_major_by(&self, amount: u64) -> Version {
        Version::new(self.major + amount, 0, 0)
    }

    /// Increments the minor version number by 1, resetting the patch number
    /// and clearing all metadata.
    pub fn increment_minor(&self) -> Version {
        self.increment_minor_by(1)
    }

    /// Increments the minor version number by the given amount, resetting the
    /// patch number and clearing all metadata.
    pub fn increment_minor_by(&self, amount: u64) -> Version {
        Version::new(self.major, self.minor + amount, 0)
    }

    /// Increments the patch version number by 1, clearing all metadata.
    pub fn increment_patch(&self) -> Version {
        self.increment_patch_by(1)
    }

    /// Increments the patch version number by the given amount, clearing all
    /// metadata.
    pub fn increment_patch_by(&self, amount: u64) -> Version {
        Version::new(self.major, self.minor, self.patch + amount)
    }

    /// Replaces the major version number, keeping everything else.
    pub fn set_major(&self, number: u64) -> Version {
        Version {
            major: number,
            ..self.clone()
        }
    }

    /// Replaces the minor version number, keeping everything else.
    pub fn set_minor(&self, number: u64) -> Version {
        Version {
            minor: number,
            ..self.clone()
        }
    }

    /// Replaces the patch version number, keeping everything else.
    pub fn set_patch(&self, number: u64) -> Version {
        Version {
            patch: number,
            ..self.clone()
        }
    }

    /// Replaces the pre-release identifiers, validating each one.
    pub fn set_pre_release<I>(&self, identifiers: I) -> Result<Version, InvalidVersionError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let pre_release = validate_identifiers(identifiers, validate_pre_release_identifier)?;

        Ok(Version {
            pre_release,
            ..self.clone()
        })
    }

    /// Replaces the build metadata identifiers, validating each one.
    pub fn set_build<I>(&self, identifiers: I) -> Result<Version, InvalidVersionError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let build = validate_identifiers(identifiers, validate_build_identifier)?;

        Ok(Version {
            build,
            ..self.clone()
        })
    }

    /// Removes the pre-release identifiers, keeping everything else.
    pub fn clear_pre_release(&self) -> Version {
        Version {
            pre_release: Vec::new(),
            ..self.clone()
        }
    }

    /// Removes the build metadata identifiers, keeping everything else.
    pub fn clear_build(&self) -> Version {
        Version {
            build: Vec::new(),
            ..self.clone()
        }
    }

    /// Checks if this is a stable version number: major version above zero and
    /// no pre-release identifiers.
    pub fn is_stable(&self) -> bool {
        self.major > 0 && self.pre_release.is_empty()
    }

    /// Checks if this is a pre-release version number: major version of zero
    /// or pre-release identifiers present.
    ///
    /// This is not the negation of [`is_stable`](Version::is_stable): `0.1.0`
    /// is a pre-release but not stable even without pre-release identifiers.
    pub fn is_pre_release(&self) -> bool {
        self.major == 0 || !self.pre_release.is_empty()
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::DEFAULT
    }
}

impl FromStr for Version {
    type Err = InvalidVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !VALIDATOR.is_match(s) {
            return Err(InvalidVersionError::Malformed(s.to_string()));
        }

        // Everything after the first "+" is build metadata, then everything
        // after the first "-" of the remainder is pre-release metadata.
        let mut rest = s;

        let build: Vec<String> = match rest.split_once('+') {
            Some((head, metadata)) => {
                rest = head;
                metadata.split('.').map(String::from).collect()
            }
            None => Vec::new(),
        };

        let pre_release: Vec<String> = match rest.split_once('-') {
            Some((head, metadata)) => {
                rest = head;
                metadata.split('.').map(String::from).collect()
            }
            None => Vec::new(),
        };

        let mut numbers = rest.splitn(3, '.');
        let mut next_number = || parse_number(s, numbers.next().unwrap_or_default());

        Ok(Version {
            major: next_number()?,
            minor: next_number()?,
            patch: next_number()?,
            pre_release,
            build,
        })
    }
}

impl TryFrom<&str> for Version {
    type Error = InvalidVersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release.join("."))?;
        }

        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }

        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Compares two version numbers by precedence. Build metadata is ignored.
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| compare_pre_release(&self.pre_release, &other.pre_release))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = serde::Deserialize::deserialize(deserializer)?;

        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Compares two pre-release identifier sequences. A version without
/// pre-release identifiers takes precedence over one with them; otherwise the
/// first unequal pair decides, and a strict prefix sorts lower.
fn compare_pre_release(left: &[String], right: &[String]) -> Ordering {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            for (l, r) in left.iter().zip(right) {
                let ordering = compare_identifier(l, r);

                if ordering != Ordering::Equal {
                    return ordering;
                }
            }

            left.len().cmp(&right.len())
        }
    }
}

/// Compares a pair of pre-release identifiers: numerically when both are pure
/// digit strings, lexicographically otherwise.
fn compare_identifier(left: &str, right: &str) -> Ordering {
    let numeric = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if numeric(left) && numeric(right) {
        // Valid numeric identifiers carry no leading zeros, so magnitude
        // order is length order first, then lexicographic.
        left.len().cmp(&right.len()).then_with(|| left.cmp(right))
    } else {
        left.cmp(right)
    }
}

fn parse_number(version: &str, value: &str) -> Result<u64, InvalidVersionError> {
    value.parse().map_err(|source| InvalidVersionError::Number {
        version: version.to_string(),
        value: value.to_string(),
        source,
    })
}

fn validate_identifiers<I>(
    identifiers: I,
    validate: fn(&str) -> Result<(), InvalidVersionError>,
) -> Result<Vec<String>, InvalidVersionError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    identifiers
        .into_iter()
        .map(|identifier| {
            let identifier: String = identifier.into();
            validate(&identifier)?;

            Ok(identifier)
        })
        .collect()
}

fn validate_pre_release_identifier(identifier: &str) -> Result<(), InvalidVersionError> {
    if PRE_RELEASE_IDENTIFIER.is_match(identifier) {
        Ok(())
    } else {
        Err(InvalidVersionError::PreReleaseIdentifier(
            identifier.to_string(),
        ))
    }
}

fn validate_build_identifier(identifier: &str) -> Result<(), InvalidVersionError> {
    if BUILD_IDENTIFIER.is_match(identifier) {
        Ok(())
    } else {
        Err(InvalidVersionError::BuildIdentifier(identifier.to_string()))
    }
}
