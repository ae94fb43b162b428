//! # Validation
//!
//! Recursive descent over schema and data in lockstep.
//!
//! ## Rules
//!
//! 1. **Type gate.** The value's category must equal the schema kind. No
//!    coercion: `"false"` is not a boolean, an array is not an object,
//!    and `null` or an absent value passes no gate.
//! 2. **String.** With an enumeration, the value must equal a member.
//! 3. **Number / Boolean.** The type gate decides.
//! 4. **Array.** Every element must match `items`. An empty array matches.
//! 5. **Object.**
//!    - An empty object matches a schema with no `required` list, without
//!      consulting `properties`.
//!    - Every `required` key must be present.
//!    - Every key in `properties` is checked against its schema. Absent
//!      optional keys follow [`MissingPropertyPolicy`].
//!    - Keys on the data not named in `properties` are ignored.
//!
//! ## Modes
//!
//! The same walk serves both entry points. [`Validator::matches`] runs it
//! without a report and stops at the first failure.
//! [`Validator::explain`] runs it with a report, visits everything, and
//! records each failure with its JSON Pointer. Both modes make identical
//! pass/fail decisions at every node.
//!
//! ## Depth Guard
//!
//! Each descent into an array element or property adds one level. A node
//! beyond `max_depth` fails without being inspected. The first such node
//! in a pass logs a warning; any further ones log at trace level.

use serde_json::{Map, Value};
use shapecheck_core::{ConfigError, InstancePath, ValueKind};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace, warn};

use crate::config::{MissingPropertyPolicy, ValidatorConfig};
use crate::schema::{Schema, SchemaKind};
use crate::violation::{SchemaValidationError, ValidationViolations, Violation, ViolationKind};

/// Returns true if `data` matches `schema` under the default configuration.
pub fn matches(data: &Value, schema: &Schema) -> bool {
    Validator::default().matches(data, schema)
}

/// Explains why `data` does not match `schema` under the default configuration.
///
/// # Errors
///
/// Returns `SchemaValidationError::ValidationFailed` listing every violation.
pub fn explain(data: &Value, schema: &Schema) -> Result<(), SchemaValidationError> {
    Validator::default().explain(data, schema)
}

/// A configured validator.
///
/// Holds only its configuration, so it is cheap to build, `Send + Sync`,
/// and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator after checking `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: ValidatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            max_depth = config.max_depth,
            missing_property = ?config.missing_property,
            "validator configured"
        );
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Returns true if `data` matches `schema`. Stops at the first mismatch.
    pub fn matches(&self, data: &Value, schema: &Schema) -> bool {
        let mut walk = Walk {
            config: &self.config,
            report: None,
            depth_warned: false,
        };
        walk.check(Some(data), schema, 1)
    }

    /// Collects every violation of `schema` by `data`. Empty iff `matches`.
    pub fn violations(&self, data: &Value, schema: &Schema) -> ValidationViolations {
        let mut report = Report::default();
        let mut walk = Walk {
            config: &self.config,
            report: Some(&mut report),
            depth_warned: false,
        };
        walk.check(Some(data), schema, 1);
        report.violations
    }

    /// Validates `data` against `schema`, explaining any failure.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidationFailed` listing every violation.
    pub fn explain(&self, data: &Value, schema: &Schema) -> Result<(), SchemaValidationError> {
        debug!(schema = %schema.kind(), data = %ValueKind::of(data), "explaining");
        let violations = self.violations(data, schema);
        debug!(violations = violations.len(), "explain finished");

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::ValidationFailed {
                schema_kind: schema.kind(),
                violations,
            })
        }
    }
}

/// Violations gathered by an explaining walk, plus the current location.
#[derive(Default)]
struct Report {
    path: InstancePath,
    violations: ValidationViolations,
}

/// One validation pass. Without a report it short-circuits.
struct Walk<'a> {
    config: &'a ValidatorConfig,
    report: Option<&'a mut Report>,
    /// Set once the depth guard has logged its warning for this pass.
    depth_warned: bool,
}

impl Walk<'_> {
    fn collecting(&self) -> bool {
        self.report.is_some()
    }

    fn record(&mut self, kind: ViolationKind) {
        if let Some(report) = self.report.as_deref_mut() {
            let instance_path = report.path.to_string();
            trace!(path = %instance_path, violation = %kind, "violation");
            report.violations.push(Violation {
                instance_path,
                kind,
            });
        }
    }

    fn mismatch(&mut self, expected: SchemaKind, data: Option<&Value>) -> bool {
        self.record(ViolationKind::TypeMismatch {
            expected,
            actual: ValueKind::of_optional(data),
        });
        false
    }

    /// Checks `data` (absent if `None`) against `schema` at schema level `level`.
    fn check(&mut self, data: Option<&Value>, schema: &Schema, level: usize) -> bool {
        if level > self.config.max_depth {
            if self.depth_warned {
                trace!(limit = self.config.max_depth, "another node beyond max depth");
            } else {
                warn!(limit = self.config.max_depth, "schema nesting exceeds max depth");
                self.depth_warned = true;
            }
            self.record(ViolationKind::DepthExceeded {
                limit: self.config.max_depth,
            });
            return false;
        }

        match schema {
            Schema::String { allowed } => {
                let Some(Value::String(value)) = data else {
                    return self.mismatch(SchemaKind::String, data);
                };
                match allowed {
                    Some(allowed) if !allowed.iter().any(|a| a == value) => {
                        self.record(ViolationKind::NotInEnum {
                            value: value.clone(),
                            allowed: allowed.clone(),
                        });
                        false
                    }
                    _ => true,
                }
            }
            Schema::Number => match data {
                Some(Value::Number(_)) => true,
                _ => self.mismatch(SchemaKind::Number, data),
            },
            Schema::Boolean => match data {
                Some(Value::Bool(_)) => true,
                _ => self.mismatch(SchemaKind::Boolean, data),
            },
            Schema::Array { items } => {
                let Some(Value::Array(elements)) = data else {
                    return self.mismatch(SchemaKind::Array, data);
                };
                self.check_array(elements, items, level)
            }
            Schema::Object {
                properties,
                required,
            } => {
                let Some(Value::Object(object)) = data else {
                    return self.mismatch(SchemaKind::Object, data);
                };
                self.check_object(object, properties, required.as_ref(), level)
            }
        }
    }

    fn check_array(&mut self, elements: &[Value], items: &Schema, level: usize) -> bool {
        let mut ok = true;
        for (index, element) in elements.iter().enumerate() {
            if let Some(report) = self.report.as_deref_mut() {
                report.path.push_index(index);
            }
            let element_ok = self.check(Some(element), items, level + 1);
            if let Some(report) = self.report.as_deref_mut() {
                report.path.pop();
            }

            if !element_ok {
                ok = false;
                if !self.collecting() {
                    break;
                }
            }
        }
        ok
    }

    fn check_object(
        &mut self,
        object: &Map<String, Value>,
        properties: &BTreeMap<String, Schema>,
        required: Option<&BTreeSet<String>>,
        level: usize,
    ) -> bool {
        if object.is_empty() && required.is_none() {
            return true;
        }

        let mut ok = true;

        for key in required.into_iter().flatten() {
            if !object.contains_key(key) {
                self.record(ViolationKind::MissingRequired { key: key.clone() });
                ok = false;
                if !self.collecting() {
                    return false;
                }
            }
        }

        for (key, property) in properties {
            let value = object.get(key);
            if value.is_none() {
                // A required key is already reported above.
                if required.is_some_and(|r| r.contains(key)) {
                    continue;
                }
                if self.config.missing_property == MissingPropertyPolicy::Skip {
                    continue;
                }
            }

            if let Some(report) = self.report.as_deref_mut() {
                report.path.push_key(key);
            }
            let property_ok = self.check(value, property, level + 1);
            if let Some(report) = self.report.as_deref_mut() {
                report.path.pop();
            }

            if !property_ok {
                ok = false;
                if !self.collecting() {
                    return false;
                }
            }
        }

        ok
    }
}
