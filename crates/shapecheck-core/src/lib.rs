//! # shapecheck-core — Foundational Types
//!
//! Leaf crate of the shapecheck workspace. It defines the vocabulary the
//! validator speaks in, independent of any particular schema model:
//!
//! 1. **`ValueKind`** — the runtime category of a data value, including an
//!    explicit `Missing` category for absent object keys. The validator's
//!    type gate and every diagnostic are phrased in terms of it.
//!
//! 2. **`InstancePath`** — an RFC 6901 JSON Pointer into the data being
//!    validated, built incrementally while the validator descends.
//!
//! 3. **Error hierarchy** — `ShapeError` and `ConfigError`, derived with
//!    `thiserror`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `shapecheck-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod kind;
pub mod pointer;

pub use error::{ConfigError, ShapeError};
pub use kind::ValueKind;
pub use pointer::{InstancePath, PathSegment};
