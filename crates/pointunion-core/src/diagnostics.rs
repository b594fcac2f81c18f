//! Load diagnostics: counts describing how an input built the forest.
//!
//! Collected on every [`load_lines`](crate::load_lines) call. The CLI
//! prints [`LoadDiagnostics::report`] on stderr when asked to be verbose,
//! or serializes the struct as JSON.

use serde::{Deserialize, Serialize};

use crate::forest::{Union, UnionFind};
use crate::types::{FindStrategy, PointId};

/// Counts collected while loading one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadDiagnostics {
    /// Strategy the engine used for `connect`.
    pub strategy: FindStrategy,
    /// Lines read, blank ones included.
    pub lines: usize,
    /// Lines that were empty after whitespace removal.
    pub blank_lines: usize,
    /// Edges applied.
    pub edges: usize,
    /// Distinct points registered.
    pub points: usize,
    /// Edges that merged two classes.
    pub merges: usize,
    /// Edges whose endpoints were already in one class (self edges included).
    pub redundant_unions: usize,
    /// Number of components in the final partition.
    pub components: usize,
    /// Longest parent chain left in the forest.
    ///
    /// `None` until [`measure_depth`](Self::measure_depth) is called,
    /// since it costs a walk from every point.
    pub max_depth: Option<usize>,
}

impl LoadDiagnostics {
    pub(crate) fn new(strategy: FindStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub(crate) const fn record_blank(&mut self) {
        self.lines += 1;
        self.blank_lines += 1;
    }

    pub(crate) const fn record_union(&mut self, union: Union) {
        self.lines += 1;
        self.edges += 1;
        match union {
            Union::Merged { .. } => self.merges += 1,
            Union::AlreadyJoined { .. } => self.redundant_unions += 1,
            Union::Unknown => {}
        }
    }

    /// Fill in the counts that depend on the finished forest.
    pub(crate) fn finish(&mut self, engine: &UnionFind) {
        self.points = engine.len();
        // Every point starts as its own class and each merge removes one.
        self.components = self.points - self.merges;
    }

    /// Record the longest parent chain in `engine`.
    pub fn measure_depth(&mut self, engine: &UnionFind) {
        let deepest = (0..engine.len())
            .filter_map(|i| engine.depth(PointId::new(i)))
            .max()
            .unwrap_or(0);
        self.max_depth = Some(deepest);
    }

    /// Format diagnostics as a human-readable report.
    #[must_use]
    pub fn report(&self) -> String {
        let lines = [
            format!("Load Diagnostics Report\n{}", "=".repeat(60)),
            format!("Strategy: {:?}", self.strategy),
            format!(
                "Lines: {} ({} blank)  |  Edges: {}",
                self.lines, self.blank_lines, self.edges,
            ),
            format!(
                "Unions: {} merged, {} redundant",
                self.merges, self.redundant_unions,
            ),
            format!(
                "Points: {}  |  Components: {}  |  Max chain depth: {}",
                self.points,
                self.components,
                self.max_depth
                    .map_or_else(|| "not measured".to_owned(), |d| d.to_string()),
            ),
        ];
        lines.join("\n")
    }
}
