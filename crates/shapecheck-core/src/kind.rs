//! # Value Kinds
//!
//! Classifies runtime data for the validator's type gate.
//!
//! The data model has five categories (string, number, boolean, array,
//! object). `serde_json::Value` adds `null`, and object lookups add the
//! absent case. Both are named here so that nothing downstream has to
//! probe a value ad hoc: an absent key is `Option<&Value>::None`, which
//! classifies as [`ValueKind::Missing`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The runtime category of a data value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// JSON `null`. Matches no schema kind.
    Null,
    /// `true` or `false`.
    Boolean,
    /// Any JSON number, integral or not.
    Number,
    /// A UTF-8 string.
    String,
    /// An ordered sequence.
    Array,
    /// A string-keyed mapping.
    Object,
    /// The key was not present on the enclosing object.
    Missing,
}

impl ValueKind {
    /// Classifies a present value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Classifies a value that may be absent.
    pub fn of_optional(value: Option<&Value>) -> Self {
        value.map_or(Self::Missing, Self::of)
    }

    /// Returns the lowercase name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Missing => "missing",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
