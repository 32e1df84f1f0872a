//! A single person in the tree.

use crate::{NodeId, TreeError, TreeResult};

/// A tree node: an id plus either no parents (a root) or exactly `N` parents.
///
/// Partial parent lists cannot be represented. Parent order is kept for
/// printing but ignored by equality: two nodes are equal when their ids are
/// equal and their parents are equal as unordered collections.
#[derive(Debug, Clone)]
pub struct Node<I, const N: usize> {
    id: I,
    parents: Option<[I; N]>,
}

impl<I: NodeId, const N: usize> Node<I, N> {
    /// Create a parentless node.
    #[must_use]
    pub const fn root(id: I) -> Self {
        Self { id, parents: None }
    }

    /// Create a node with its full parent set.
    #[must_use]
    pub const fn with_parents(id: I, parents: [I; N]) -> Self {
        Self {
            id,
            parents: Some(parents),
        }
    }

    /// Create a node from a parent list of any length.
    ///
    /// An empty list yields a root; otherwise the list must hold exactly `N` ids.
    ///
    /// # Errors
    ///
    /// [`TreeError::TooFewParents`] or [`TreeError::TooManyParents`] when the
    /// list is non-empty and its length differs from `N`.
    pub fn from_parts(id: I, parents: Vec<I>) -> TreeResult<Self> {
        if parents.is_empty() {
            return Ok(Self::root(id));
        }
        let found = parents.len();
        if found < N {
            return Err(TreeError::too_few_parents(N, found));
        }
        <[I; N]>::try_from(parents)
            .map(|parents| Self::with_parents(id, parents))
            .map_err(|_| TreeError::too_many_parents(N, found))
    }

    #[must_use]
    pub const fn id(&self) -> &I {
        &self.id
    }

    /// Parent ids in their original order; empty for a root.
    pub fn parents(&self) -> impl Iterator<Item = &I> {
        self.parents.iter().flatten()
    }

    #[must_use]
    pub const fn parent_array(&self) -> Option<&[I; N]> {
        self.parents.as_ref()
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parents.is_none()
    }

    fn sorted_parents(&self) -> Vec<&I> {
        let mut parents: Vec<&I> = self.parents().collect();
        parents.sort();
        parents
    }
}

impl<I: NodeId, const N: usize> PartialEq for Node<I, N> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.is_root() == other.is_root()
            && self.sorted_parents() == other.sorted_parents()
    }
}

impl<I: NodeId, const N: usize> Eq for Node<I, N> {}
