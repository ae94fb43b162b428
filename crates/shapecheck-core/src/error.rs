//! # Error Types
//!
//! The validator's primary contract is a plain boolean and never fails.
//! Errors exist only at the edges: rejecting a bad configuration, and
//! carrying an explained validation failure up through host code that
//! prefers `Result` to `bool`.

use thiserror::Error;

/// Top-level error type for shapecheck.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// Validator configuration rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Data did not match its schema. Carries the rendered violation list.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Error in validator configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The recursion limit must allow at least the root value to be checked.
    #[error("max_depth must be at least 1, got {0}")]
    InvalidMaxDepth(usize),
}
