//! Shared types for the pointunion engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parse::EdgeParseError;

/// A 2-D point with non-negative integer coordinates.
///
/// Equality and hashing are structural, so two textually identical points
/// read from different edges resolve to the same registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: u64,
    /// Vertical coordinate.
    pub y: u64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Stable identity of a registered point.
///
/// Identities are handed out by [`PointRegistry`](crate::PointRegistry)
/// in first-seen order starting at zero, and double as indices into the
/// union-find forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(usize);

impl PointId {
    /// Wrap a raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index backing this identity.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One input edge: two points that belong to the same component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint. Its root survives when the edge merges two classes.
    pub a: Point,
    /// Second endpoint.
    pub b: Point,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
}

/// How [`UnionFind::connect`](crate::UnionFind::connect) walks parent
/// chains on its way to the roots.
///
/// Both strategies produce the same roots and therefore the same
/// components; they differ only in the shape of the forest left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FindStrategy {
    /// Follow parent links without touching them.
    #[default]
    ChainWalk,
    /// Re-point every other visited node at its grandparent while walking.
    Halving,
}

impl FindStrategy {
    /// The strategy used when none is chosen.
    pub const DEFAULT: Self = Self::ChainWalk;
}

/// Errors that can occur while loading edges.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A non-blank line did not match `[X,Y][X,Y]`.
    #[error("line {line_number} is in incorrect format: {line}: {source}")]
    MalformedLine {
        /// 1-based line number within the input.
        line_number: usize,
        /// The offending line as read, without its terminator.
        line: String,
        /// Why the line was rejected.
        #[source]
        source: EdgeParseError,
    },

    /// A line was not valid UTF-8.
    #[error("line {line_number} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        /// 1-based line number within the input.
        line_number: usize,
        /// Where decoding stopped.
        #[source]
        source: std::str::Utf8Error,
    },
}
