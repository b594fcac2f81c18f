//! Union-find forest over registered points.
//!
//! Parent links are plain [`PointId`] indices into a growable `Vec`, so the
//! forest is an arena with no ownership cycles. Only identities issued by
//! the registry ever get a slot, and a slot holds `None` until its identity
//! is [`ensure`](UnionFind::ensure)d, which is how `find` distinguishes
//! "never seen" from "a class of one".
//!
//! # Root choice
//!
//! [`connect(a, b)`](UnionFind::connect) always re-parents the root of
//! `b`'s class onto the root of `a`'s class. There is no union by rank or
//! size; the asymmetry keeps the surviving representative predictable.

use std::collections::BTreeMap;

use crate::registry::PointRegistry;
use crate::types::{FindStrategy, Point, PointId};

/// Outcome of a [`UnionFind::connect`] call.
///
/// Purely informational: unknown identities and redundant unions are
/// silently ignored by the forest, and callers are free to drop this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Union {
    /// Two distinct classes were merged.
    Merged {
        /// Root of the first argument's class; it stays a root.
        root: PointId,
        /// Former root of the second argument's class, now a child of `root`.
        absorbed: PointId,
    },
    /// Both identities already shared `root`. Nothing changed.
    AlreadyJoined {
        /// The shared root.
        root: PointId,
    },
    /// At least one identity was never ensured. Nothing changed.
    Unknown,
}

/// Disjoint-set engine that owns its [`PointRegistry`] and parent forest.
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    registry: PointRegistry,
    parents: Vec<Option<PointId>>,
    strategy: FindStrategy,
}

impl UnionFind {
    /// Create an empty engine using [`FindStrategy::ChainWalk`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty engine using the given strategy for `connect`.
    #[must_use]
    pub fn with_strategy(strategy: FindStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// The strategy `connect` uses to reach roots.
    #[must_use]
    pub const fn strategy(&self) -> FindStrategy {
        self.strategy
    }

    /// The registry backing this engine.
    #[must_use]
    pub const fn registry(&self) -> &PointRegistry {
        &self.registry
    }

    /// Number of registered points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns `true` if no point has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Register `point` and make sure it has a parent entry.
    ///
    /// A new point starts as a singleton class; a known point keeps its
    /// identity and its current class.
    pub fn register(&mut self, point: Point) -> PointId {
        let id = self.registry.register(point);
        self.ensure(id);
        id
    }

    /// Give `id` a self-parent entry unless it already has one.
    ///
    /// Identities the registry has not issued are ignored, so they stay
    /// unknown to [`find`](Self::find) and to [`connect`](Self::connect).
    pub fn ensure(&mut self, id: PointId) {
        let i = id.index();
        if i >= self.registry.len() {
            return;
        }
        if i >= self.parents.len() {
            self.parents.resize(i + 1, None);
        }
        let slot = &mut self.parents[i];
        if slot.is_none() {
            *slot = Some(id);
        }
    }

    fn parent(&self, id: PointId) -> Option<PointId> {
        self.parents.get(id.index()).copied().flatten()
    }

    /// Representative of `id`'s class, or `None` if `id` was never ensured.
    ///
    /// Walks parent links until reaching an identity that is its own
    /// parent. The forest is not modified.
    #[must_use]
    pub fn find(&self, id: PointId) -> Option<PointId> {
        let mut current = id;
        let mut parent = self.parent(current)?;
        while parent != current {
            current = parent;
            parent = self.parent(current)?;
        }
        Some(current)
    }

    /// Like [`find`](Self::find), but points every other node on the walk
    /// at its grandparent.
    fn find_halving(&mut self, id: PointId) -> Option<PointId> {
        let mut current = id;
        let mut parent = self.parent(current)?;
        while parent != current {
            let grandparent = self.parent(parent)?;
            self.parents[current.index()] = Some(grandparent);
            current = grandparent;
            parent = self.parent(current)?;
        }
        Some(current)
    }

    fn root_for_union(&mut self, id: PointId) -> Option<PointId> {
        match self.strategy {
            FindStrategy::ChainWalk => self.find(id),
            FindStrategy::Halving => self.find_halving(id),
        }
    }

    /// Merge the classes of `a` and `b`.
    ///
    /// The root of `b`'s class is re-parented onto the root of `a`'s
    /// class. Unknown identities and identities already in the same class
    /// (including `a == b`) leave the forest untouched.
    pub fn connect(&mut self, a: PointId, b: PointId) -> Union {
        let (Some(root_a), Some(root_b)) = (self.root_for_union(a), self.root_for_union(b)) else {
            return Union::Unknown;
        };
        if root_a == root_b {
            return Union::AlreadyJoined { root: root_a };
        }
        self.parents[root_b.index()] = Some(root_a);
        Union::Merged {
            root: root_a,
            absorbed: root_b,
        }
    }

    /// Register both endpoints, then connect them.
    pub fn connect_points(&mut self, a: Point, b: Point) -> Union {
        let a = self.register(a);
        let b = self.register(b);
        self.connect(a, b)
    }

    /// Returns `true` if both identities are known and share a root.
    #[must_use]
    pub fn same_class(&self, a: PointId, b: PointId) -> bool {
        matches!((self.find(a), self.find(b)), (Some(x), Some(y)) if x == y)
    }

    /// Number of parent hops from `id` to its root.
    #[must_use]
    pub fn depth(&self, id: PointId) -> Option<usize> {
        let mut current = id;
        let mut parent = self.parent(current)?;
        let mut hops = 0;
        while parent != current {
            hops += 1;
            current = parent;
            parent = self.parent(current)?;
        }
        Some(hops)
    }

    /// Group every registered point by its representative.
    ///
    /// Members of a group appear in registration order. Groups are keyed
    /// by root identity; callers should not rely on group order.
    #[must_use]
    pub fn components(&self) -> Components<'_> {
        let mut groups: BTreeMap<PointId, Vec<PointId>> = BTreeMap::new();
        for (id, _) in self.registry.all_points() {
            if let Some(root) = self.find(id) {
                groups.entry(root).or_default().push(id);
            }
        }
        Components {
            registry: &self.registry,
            groups,
        }
    }
}

/// The partition of registered points produced by
/// [`UnionFind::components`].
#[derive(Debug, Clone)]
pub struct Components<'a> {
    registry: &'a PointRegistry,
    groups: BTreeMap<PointId, Vec<PointId>>,
}

impl Components<'_> {
    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no components (no points registered).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Root identities, one per component.
    pub fn roots(&self) -> impl Iterator<Item = PointId> + '_ {
        self.groups.keys().copied()
    }

    /// Members of the component rooted at `root`.
    #[must_use]
    pub fn members(&self, root: PointId) -> Option<&[PointId]> {
        self.groups.get(&root).map(Vec::as_slice)
    }

    /// Each component as `(root, members)`.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &[PointId])> + '_ {
        self.groups.iter().map(|(&root, ids)| (root, ids.as_slice()))
    }

    /// Each component as its point values.
    pub fn point_groups(&self) -> impl Iterator<Item = Vec<Point>> + '_ {
        self.groups.values().map(move |ids| self.resolve(ids))
    }

    /// Consume the partition into plain point lists.
    #[must_use]
    pub fn into_point_groups(self) -> Vec<Vec<Point>> {
        self.point_groups().collect()
    }

    fn resolve(&self, ids: &[PointId]) -> Vec<Point> {
        ids.iter().filter_map(|&id| self.registry.point(id)).collect()
    }
}
