//! Strict Semantic Versioning 2.0.0 value types and constraints
//!
//! This crate provides an immutable [`Version`] value type covering the full
//! SemVer 2.0.0 grammar (parsing, validation, precedence comparison, derived
//! versions) and a composable [`constraint`] engine for matching versions
//! against predicates.

pub mod constraint;
mod version;

pub use constraint::{Comparison, Constraint, IntoVersion, Operator};
pub use version::{InvalidVersionError, Version};
