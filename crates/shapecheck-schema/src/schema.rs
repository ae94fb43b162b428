//! # Schema Model
//!
//! A schema is one of five kinds. Each kind is a variant of [`Schema`], so
//! every consumer dispatches with an exhaustive `match` instead of probing
//! optional fields.
//!
//! ## Serialized Form
//!
//! ```text
//! {"type": "string"}
//! {"type": "string", "enum": ["apple", "banana"]}
//! {"type": "number"}
//! {"type": "boolean"}
//! {"type": "array", "items": <schema>}
//! {"type": "object", "properties": {<name>: <schema>, ...}, "required": [<name>, ...]}
//! ```
//!
//! ## Invariants
//!
//! - Schemas are immutable once built; the validator only reads them.
//! - Schemas are finite trees. Children are owned (`Box`, `BTreeMap`), so a
//!   cyclic `Schema` value cannot be constructed.
//! - `required: None` and `required: Some(empty)` are distinct. Only the
//!   former lets an empty object match without checking `properties`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a schema, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// Matches strings, optionally restricted to an enumeration.
    String,
    /// Matches any number.
    Number,
    /// Matches `true` and `false`.
    Boolean,
    /// Matches arrays whose elements all match one item schema.
    Array,
    /// Matches objects by property and required-key rules.
    Object,
}

impl SchemaKind {
    /// Returns the lowercase kind name used in the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declarative description of expected data shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Schema {
    /// A string, optionally one of `allowed`.
    String {
        /// Permitted values, compared by equality. `None` permits any string.
        #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
        allowed: Option<Vec<String>>,
    },
    /// Any number.
    Number,
    /// Any boolean.
    Boolean,
    /// An array whose every element matches `items`.
    Array {
        /// Schema applied to each element.
        items: Box<Schema>,
    },
    /// An object.
    Object {
        /// Per-key schemas. Keys on the data that are not listed here are ignored.
        #[serde(default)]
        properties: BTreeMap<String, Schema>,
        /// Keys that must be present on the data.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        required: Option<BTreeSet<String>>,
    },
}

impl Schema {
    /// Any string.
    pub fn string() -> Self {
        Self::String { allowed: None }
    }

    /// A string drawn from `values`.
    pub fn string_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::String {
            allowed: Some(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Any number.
    pub fn number() -> Self {
        Self::Number
    }

    /// Any boolean.
    pub fn boolean() -> Self {
        Self::Boolean
    }

    /// An array of `items`.
    pub fn array(items: Schema) -> Self {
        Self::Array {
            items: Box::new(items),
        }
    }

    /// An object with the given properties and no required keys.
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        Self::Object {
            properties: properties.into_iter().map(|(k, s)| (k.into(), s)).collect(),
            required: None,
        }
    }

    /// An object with the given properties and required keys.
    ///
    /// Required keys need not appear in `properties`; such keys are checked
    /// for presence only.
    pub fn object_required<I, K, R, S>(properties: I, required: R) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Object {
            properties: properties.into_iter().map(|(k, s)| (k.into(), s)).collect(),
            required: Some(required.into_iter().map(Into::into).collect()),
        }
    }

    /// Returns the kind of this schema.
    pub fn kind(&self) -> SchemaKind {
        match self {
            Self::String { .. } => SchemaKind::String,
            Self::Number => SchemaKind::Number,
            Self::Boolean => SchemaKind::Boolean,
            Self::Array { .. } => SchemaKind::Array,
            Self::Object { .. } => SchemaKind::Object,
        }
    }

    /// Number of schema levels from this node to its deepest leaf.
    ///
    /// Scalars and property-less objects have depth 1. Data validated
    /// against a schema never recurses deeper than this, so a validator
    /// whose `max_depth` is at least `depth()` never trips its depth guard.
    pub fn depth(&self) -> usize {
        match self {
            Self::String { .. } | Self::Number | Self::Boolean => 1,
            Self::Array { items } => 1 + items.depth(),
            Self::Object { properties, .. } => {
                1 + properties.values().map(Schema::depth).max().unwrap_or(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_names() {
        assert_eq!(Schema::string().kind().as_str(), "string");
        assert_eq!(Schema::number().kind().as_str(), "number");
        assert_eq!(Schema::boolean().kind().as_str(), "boolean");
        assert_eq!(Schema::array(Schema::number()).kind().as_str(), "array");
        assert_eq!(Schema::object([("a", Schema::number())]).kind().to_string(), "object");
    }

    #[test]
    fn serializes_to_typed_layout() {
        let schema = Schema::object_required(
            [
                ("name", Schema::string()),
                ("fruit", Schema::string_enum(["apple", "banana"])),
                ("flags", Schema::array(Schema::boolean())),
            ],
            ["name"],
        );
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "type": "object",
                "properties": {
                    "flags": {"type": "array", "items": {"type": "boolean"}},
                    "fruit": {"type": "string", "enum": ["apple", "banana"]},
                    "name": {"type": "string"}
                },
                "required": ["name"]
            })
        );
    }

    #[test]
    fn deserializes_reference_literals() {
        let schema: Schema = serde_json::from_value(json!({
            "type": "array",
            "items": {"type": "array", "items": {"type": "boolean"}}
        }))
        .unwrap();
        assert_eq!(schema, Schema::array(Schema::array(Schema::boolean())));

        let schema: Schema = serde_json::from_value(json!({"type": "number"})).unwrap();
        assert_eq!(schema, Schema::number());
    }

    #[test]
    fn absent_required_differs_from_empty_required() {
        let without: Schema = serde_json::from_value(json!({"type": "object"})).unwrap();
        assert_eq!(without, Schema::object(Vec::<(String, Schema)>::new()));

        let empty: Schema =
            serde_json::from_value(json!({"type": "object", "properties": {}, "required": []}))
                .unwrap();
        assert_ne!(without, empty);
    }

    #[test]
    fn depth_counts_levels() {
        assert_eq!(Schema::string().depth(), 1);
        assert_eq!(Schema::object(Vec::<(String, Schema)>::new()).depth(), 1);
        assert_eq!(Schema::array(Schema::array(Schema::boolean())).depth(), 3);

        let nested = Schema::object([
            ("shallow", Schema::number()),
            ("deep", Schema::object([("leaf", Schema::array(Schema::string()))])),
        ]);
        assert_eq!(nested.depth(), 4);
    }
}
