//! # shapecheck-schema — Schema Model & Validator
//!
//! Validates a `serde_json::Value` against a declarative shape schema:
//! primitive type, string enumerations, array element type, and object
//! properties with an optional required-key list.
//!
//! ## Schema Model (`schema`)
//!
//! [`Schema`] is a sum type over the five kinds (string, number, boolean,
//! array, object). Its serialized form is the familiar
//! `{"type": "...", ...}` layout. Schemas are built in code with the
//! constructors on [`Schema`].
//!
//! ## Validation (`validate`)
//!
//! - [`matches`] — the primary contract. Total and pure: every input yields
//!   a definite `bool`, nothing panics, nothing is mutated.
//! - [`explain`] — walks the whole tree without short-circuiting and
//!   returns every mismatch as a [`Violation`] with a JSON Pointer to the
//!   offending value. `explain(d, s).is_ok() == matches(d, s)`.
//!
//! ## Configuration (`config`)
//!
//! [`ValidatorConfig`] selects how absent optional properties are treated
//! ([`MissingPropertyPolicy`]) and bounds recursion depth. The free
//! functions use the default configuration.
//!
//! ## Crate Policy
//!
//! - Depends only on `shapecheck-core` internally.
//! - No global state: `Validator` is `Send + Sync` and holds only its
//!   configuration.
//! - Library code never panics on any data or schema value.

pub mod config;
pub mod schema;
pub mod validate;
pub mod violation;

pub use config::{MissingPropertyPolicy, ValidatorConfig, DEFAULT_MAX_DEPTH};
pub use schema::{Schema, SchemaKind};
pub use validate::{explain, matches, Validator};
pub use violation::{SchemaValidationError, ValidationViolations, Violation, ViolationKind};
