//! # Instance Paths
//!
//! RFC 6901 JSON Pointers into the data being validated. The validator
//! pushes a segment when it descends into an array element or an object
//! property and pops it on the way back up, so a single `InstancePath`
//! is reused for the whole walk.
//!
//! Rendering follows RFC 6901: the root is the empty string, every
//! segment is prefixed with `/`, and `~` / `/` inside keys are escaped as
//! `~0` / `~1`.

use std::fmt;

/// One step from a container to a child value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object property name.
    Key(String),
    /// Array element index.
    Index(usize),
}

/// A JSON Pointer under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstancePath {
    segments: Vec<PathSegment>,
}

impl InstancePath {
    /// The pointer to the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Descends into an object property.
    pub fn push_key(&mut self, key: &str) {
        self.segments.push(PathSegment::Key(key.to_owned()));
    }

    /// Descends into an array element.
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    /// Returns to the parent container. No-op at the root.
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Returns true if this pointer addresses the document root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments below the root.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this pointer has no segments. Same as [`is_root`](Self::is_root).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segments from the root down.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str("/")?;
            match segment {
                PathSegment::Index(i) => write!(f, "{i}")?,
                PathSegment::Key(key) => {
                    for c in key.chars() {
                        match c {
                            '~' => f.write_str("~0")?,
                            '/' => f.write_str("~1")?,
                            other => write!(f, "{other}")?,
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
