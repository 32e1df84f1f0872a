//! # Node store
//!
//! Owns every node of a family tree together with the derived
//! parent → children index, and enforces referential integrity on insertion.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::id::check_token;
use crate::{Node, NodeId, TreeError, TreeResult};

/// A family tree with parent arity `N`.
///
/// Nodes are immutable once inserted and are never removed. The children
/// index is derived from the nodes and updated only by [`Tree::add_node`].
#[derive(Debug, Clone)]
pub struct Tree<I, const N: usize> {
    /// Every node, keyed by id
    nodes: BTreeMap<I, Node<I, N>>,
    /// Parent id → ids of its direct children
    children: BTreeMap<I, BTreeSet<I>>,
}

impl<I: NodeId, const N: usize> Tree<I, N> {
    /// Create an empty tree
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_tree::Tree;
    ///
    /// let tree = Tree::<String, 2>::new();
    /// assert_eq!(tree.size(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            children: BTreeMap::new(),
        }
    }

    /// Build a tree by inserting `nodes` in the order given.
    ///
    /// # Errors
    ///
    /// The first error [`Tree::add_node`] reports.
    pub fn try_from_nodes(nodes: impl IntoIterator<Item = Node<I, N>>) -> TreeResult<Self> {
        let mut tree = Self::new();
        for node in nodes {
            tree.add_node(node)?;
        }
        Ok(tree)
    }

    /// Insert a node.
    ///
    /// Every parent the node names must already be in the tree. On failure
    /// the tree is left exactly as it was.
    ///
    /// # Errors
    ///
    /// * [`TreeError::InvalidNodeId`] if an id prints as an empty string or
    ///   contains whitespace, so it could not be read back from text
    /// * [`TreeError::DuplicateNodeId`] if the id is taken
    /// * [`TreeError::UnknownParentId`] if a parent is absent
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_tree::{Node, Tree};
    ///
    /// let mut tree = Tree::<u32, 2>::new();
    /// tree.add_node(Node::root(1))?
    ///     .add_node(Node::root(2))?
    ///     .add_node(Node::with_parents(3, [1, 2]))?;
    /// assert_eq!(tree.size(), 3);
    /// # Ok::<(), kindred_tree::TreeError>(())
    /// ```
    pub fn add_node(&mut self, node: Node<I, N>) -> TreeResult<&mut Self> {
        check_token(node.id())?;
        for parent in node.parents() {
            check_token(parent)?;
        }
        if self.nodes.contains_key(node.id()) {
            return Err(TreeError::duplicate_node_id(node.id()));
        }
        if let Some(missing) = node.parents().find(|parent| !self.nodes.contains_key(*parent)) {
            return Err(TreeError::unknown_parent_id(node.id(), missing));
        }

        debug!(node = %node.id(), parents = node.parents().count(), "Adding node");
        for parent in node.parents() {
            self.children
                .entry(parent.clone())
                .or_default()
                .insert(node.id().clone());
        }
        self.nodes.insert(node.id().clone(), node);
        Ok(self)
    }

    /// Insert nodes given in any order.
    ///
    /// Nodes are inserted as soon as all their parents are present, so the
    /// batch may list children before parents. The whole batch is applied or
    /// none of it is.
    ///
    /// # Errors
    ///
    /// * [`TreeError::DuplicateNodeId`] if an id is taken or repeated
    /// * [`TreeError::UnknownParentId`] if some node's parents can never be satisfied
    pub fn insert_batch(&mut self, nodes: impl IntoIterator<Item = Node<I, N>>) -> TreeResult<&mut Self> {
        let mut staged = self.clone();
        let mut pending: Vec<Node<I, N>> = nodes.into_iter().collect();

        while !pending.is_empty() {
            let before = pending.len();
            let mut blocked = Vec::with_capacity(before);
            for node in pending {
                let missing = node.parents().find(|parent| !staged.contains(parent)).cloned();
                match missing {
                    None => {
                        staged.add_node(node)?;
                    }
                    Some(missing) => blocked.push((node, missing)),
                }
            }
            if blocked.len() == before {
                if let Some((node, missing)) = blocked.first() {
                    return Err(TreeError::unknown_parent_id(node.id(), missing));
                }
            }
            pending = blocked.into_iter().map(|(node, _)| node).collect();
        }

        *self = staged;
        Ok(self)
    }

    /// Look up a node
    #[must_use]
    pub fn get_node(&self, id: &I) -> Option<&Node<I, N>> {
        self.nodes.get(id)
    }

    /// Look up a node that must exist.
    ///
    /// # Errors
    ///
    /// [`TreeError::NodeNotFound`] if `id` is absent.
    pub fn node(&self, id: &I) -> TreeResult<&Node<I, N>> {
        self.get_node(id).ok_or_else(|| TreeError::node_not_found(id))
    }

    #[must_use]
    pub fn contains(&self, id: &I) -> bool {
        self.nodes.contains_key(id)
    }

    /// Direct children of `id`. Unknown ids have no children.
    #[must_use]
    pub fn get_children(&self, id: &I) -> BTreeSet<I> {
        self.children.get(id).cloned().unwrap_or_default()
    }

    /// Borrowing iterator over the direct children of `id`.
    pub fn children(&self, id: &I) -> impl Iterator<Item = &I> {
        self.children.get(id).into_iter().flatten()
    }

    /// Parent ids of `id` in their original order.
    ///
    /// # Errors
    ///
    /// [`TreeError::NodeNotFound`] if `id` is absent.
    pub fn get_parents(&self, id: &I) -> TreeResult<Vec<I>> {
        self.node(id).map(|node| node.parents().cloned().collect())
    }

    /// Number of nodes
    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, ordered by id
    pub fn nodes(&self) -> impl Iterator<Item = &Node<I, N>> {
        self.nodes.values()
    }

    /// Ids of the parentless nodes, ordered by id
    pub fn roots(&self) -> impl Iterator<Item = &I> {
        self.nodes
            .values()
            .filter(|node| node.is_root())
            .map(Node::id)
    }

    pub(crate) fn children_index(&self) -> &BTreeMap<I, BTreeSet<I>> {
        &self.children
    }
}

impl<I: NodeId, const N: usize> Default for Tree<I, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: NodeId, const N: usize> PartialEq for Tree<I, N> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<I: NodeId, const N: usize> Eq for Tree<I, N> {}
