//! # Validator Configuration
//!
//! Two knobs, both with defaults that reproduce the reference behavior:
//!
//! - `missing_property` — what happens when an object schema lists a
//!   property that is neither present on the data nor required.
//! - `max_depth` — how many schema levels the validator will descend
//!   before failing closed.
//!
//! The config derives `Deserialize` with `#[serde(default)]` so a host
//! application can embed it in its own configuration file and set only
//! the fields it cares about.

use serde::{Deserialize, Serialize};
use shapecheck_core::ConfigError;

/// Default recursion limit, counted in schema levels (the root is level 1).
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Treatment of object properties that are declared but absent and not required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPropertyPolicy {
    /// The absent value is run through the property schema's type gate,
    /// which it always fails. A declared property therefore has to be
    /// present unless the object is empty and has no `required` list.
    #[default]
    Strict,
    /// Absent optional properties are not checked.
    Skip,
}

/// Validator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Maximum schema levels evaluated, root included. Must be at least 1.
    pub max_depth: usize,
    /// Handling of absent optional properties.
    pub missing_property: MissingPropertyPolicy,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            missing_property: MissingPropertyPolicy::default(),
        }
    }
}

impl ValidatorConfig {
    /// Sets the recursion limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the absent-property policy.
    pub fn with_missing_property(mut self, policy: MissingPropertyPolicy) -> Self {
        self.missing_property = policy;
        self
    }

    /// Checks the settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMaxDepth` if `max_depth` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth(self.max_depth));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.missing_property, MissingPropertyPolicy::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_depth_rejected() {
        let config = ValidatorConfig::default().with_max_depth(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxDepth(0)));
    }

    #[test]
    fn setters_chain() {
        let config = ValidatorConfig::default()
            .with_max_depth(4)
            .with_missing_property(MissingPropertyPolicy::Skip);
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.missing_property, MissingPropertyPolicy::Skip);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: ValidatorConfig =
            serde_json::from_value(json!({"missing_property": "skip"})).unwrap();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.missing_property, MissingPropertyPolicy::Skip);

        let config: ValidatorConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }
}
