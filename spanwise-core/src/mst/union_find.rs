//! Disjoint-set union over arbitrary node ids.
//!
//! Ids are interned into dense indices on construction; the forest itself is
//! a pair of index vectors. `find` compresses paths so every visited node
//! points straight at its root afterwards, and `union` attaches the
//! lower-rank root beneath the higher-rank one.

use std::{fmt, hash::Hash};

use indexmap::IndexSet;

use crate::error::GraphError;

/// Union-find over a fixed set of ids.
///
/// # Examples
/// ```
/// use spanwise_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(["a", "b", "c"]);
/// assert!(sets.union(&"a", &"b")?);
/// assert!(!sets.union(&"b", &"a")?);
/// let root = *sets.find(&"a")?;
/// assert_eq!(*sets.find(&"b")?, root);
/// assert_eq!(sets.components(), 2);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<N> {
    items: IndexSet<N>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl<N> DisjointSet<N>
where
    N: Eq + Hash + fmt::Display,
{
    /// Creates one singleton component of rank zero per distinct id.
    #[must_use]
    pub fn new(ids: impl IntoIterator<Item = N>) -> Self {
        let items: IndexSet<N> = ids.into_iter().collect();
        let count = items.len();
        Self {
            items,
            parent: (0..count).collect(),
            rank: vec![0; count],
            components: count,
        }
    }

    /// Returns the number of tracked ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when no ids are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the current number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns the representative of `item`'s component.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `item` is not tracked.
    pub fn find(&mut self, item: &N) -> Result<&N, GraphError> {
        let index = self.index_of(item)?;
        let root = self.find_root(index);
        self.items
            .get_index(root)
            .ok_or_else(|| GraphError::unknown_node(item))
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when either id is not tracked.
    pub fn same_set(&mut self, left: &N, right: &N) -> Result<bool, GraphError> {
        let left_index = self.index_of(left)?;
        let right_index = self.index_of(right)?;
        Ok(self.find_root(left_index) == self.find_root(right_index))
    }

    /// Merges the components of `left` and `right`.
    ///
    /// Returns `false` without changing anything when both already share a
    /// component; an edge between them would close a cycle.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when either id is not tracked.
    pub fn union(&mut self, left: &N, right: &N) -> Result<bool, GraphError> {
        let left_index = self.index_of(left)?;
        let right_index = self.index_of(right)?;
        Ok(self.union_indices(left_index, right_index))
    }

    fn index_of(&self, item: &N) -> Result<usize, GraphError> {
        self.items
            .get_index_of(item)
            .ok_or_else(|| GraphError::unknown_node(item))
    }

    fn find_root(&mut self, node: usize) -> usize {
        let mut root = node;
        while let Some(&parent) = self.parent.get(root)
            && parent != root
        {
            root = parent;
        }

        let mut current = node;
        while let Some(slot) = self.parent.get_mut(current)
            && *slot != current
        {
            current = std::mem::replace(slot, root);
        }

        root
    }

    fn rank_of(&self, root: usize) -> u8 {
        self.rank.get(root).copied().unwrap_or(0)
    }

    fn union_indices(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find_root(left);
        let right_root = self.find_root(right);
        if left_root == right_root {
            return false;
        }
        let left_rank = self.rank_of(left_root);
        let right_rank = self.rank_of(right_root);
        let (parent, child) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        if let Some(slot) = self.parent.get_mut(child) {
            *slot = parent;
        }
        if left_rank == right_rank
            && let Some(rank) = self.rank.get_mut(parent)
        {
            *rank = rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        true
    }
}
