//! # Violations
//!
//! Structured mismatch reports produced by [`explain`](crate::explain).
//! Each violation pairs a JSON Pointer into the data with what went wrong
//! there. The boolean [`matches`](crate::matches) path never builds these.

use std::fmt;

use serde::{Deserialize, Serialize};
use shapecheck_core::{ShapeError, ValueKind};
use thiserror::Error;

use crate::schema::SchemaKind;

/// What went wrong at a single location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// The value's runtime category did not pass the schema's type gate.
    TypeMismatch {
        /// Kind the schema demanded.
        expected: SchemaKind,
        /// Category of the value found (`missing` for an absent property).
        actual: ValueKind,
    },
    /// A string outside the schema's enumeration.
    NotInEnum {
        /// The offending string.
        value: String,
        /// The enumeration it was checked against.
        allowed: Vec<String>,
    },
    /// A required key absent from an object.
    MissingRequired {
        /// The absent key.
        key: String,
    },
    /// Descending here would exceed the configured recursion limit.
    DepthExceeded {
        /// The configured `max_depth`.
        limit: usize,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, actual } => {
                write!(f, "expected {expected}, got {actual}")
            }
            Self::NotInEnum { value, allowed } => {
                write!(f, "{value:?} is not one of {allowed:?}")
            }
            Self::MissingRequired { key } => write!(f, "required property {key:?} is missing"),
            Self::DepthExceeded { limit } => write!(f, "nesting exceeds max depth {limit}"),
        }
    }
}

/// A single violation with its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// JSON Pointer to the violating value in the data. Empty for the root.
    /// For `MissingRequired` this points at the object that lacks the key.
    pub instance_path: String,
    /// What went wrong.
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.kind)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.kind)
        }
    }
}

/// Collection of violations, in the order the validator found them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Error returned by [`explain`](crate::explain).
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The data did not conform to the schema.
    #[error("validation failed against {schema_kind} schema:\n{violations}")]
    ValidationFailed {
        /// Kind of the root schema.
        schema_kind: SchemaKind,
        /// Every violation found.
        violations: ValidationViolations,
    },
}

impl SchemaValidationError {
    /// Returns the violations carried by this error.
    pub fn violations(&self) -> &ValidationViolations {
        match self {
            Self::ValidationFailed { violations, .. } => violations,
        }
    }
}

impl From<SchemaValidationError> for ShapeError {
    fn from(err: SchemaValidationError) -> Self {
        ShapeError::Validation(err.to_string())
    }
}
