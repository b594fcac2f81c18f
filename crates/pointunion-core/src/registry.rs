//! Point registry: deduplicates point values and hands out identities.
//!
//! The registry is an append-only arena. Points live in a `Vec` indexed
//! by [`PointId`], and a `HashMap` resolves a point value back to its
//! identity in constant time.

use std::collections::HashMap;

use crate::types::{Point, PointId};

/// Bidirectional mapping between point values and stable identities.
#[derive(Debug, Clone, Default)]
pub struct PointRegistry {
    points: Vec<Point>,
    ids: HashMap<Point, PointId>,
}

impl PointRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the identity of `point`, registering it first if needed.
    ///
    /// New identities are allocated in increasing order starting at zero.
    /// A point seen before keeps the identity it was first given.
    pub fn register(&mut self, point: Point) -> PointId {
        if let Some(&id) = self.ids.get(&point) {
            return id;
        }
        let id = PointId::new(self.points.len());
        self.points.push(point);
        self.ids.insert(point, id);
        id
    }

    /// Identity of an already registered point, without registering it.
    #[must_use]
    pub fn lookup(&self, point: &Point) -> Option<PointId> {
        self.ids.get(point).copied()
    }

    /// The point registered under `id`, if any.
    #[must_use]
    pub fn point(&self, id: PointId) -> Option<Point> {
        self.points.get(id.index()).copied()
    }

    /// Every registered point in registration order.
    pub fn all_points(&self) -> impl Iterator<Item = (PointId, Point)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, &p)| (PointId::new(i), p))
    }

    /// Number of distinct registered points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
