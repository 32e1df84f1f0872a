//! # Traversal
//!
//! Orderings over every node of a [`Tree`], built on `petgraph`'s visitor
//! framework through the [`TreeView`] adapter.
//!
//! | Ordering | Parents before children? |
//! |----------|--------------------------|
//! | [`Tree::breadth_first`] | only along single-parent chains |
//! | [`Tree::depth_first`] | no |
//! | [`Tree::topological_order`] | always |
//!
//! Breadth-first enqueues a child the first time *any* of its parents is
//! visited, so a child with several parents can be visited before its other
//! parents. Use it to enumerate, never to compute values from parent data;
//! layout and color derivation go through [`Tree::topological_order`].

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::iter::Flatten;
use std::option;

use itertools::Either;
use petgraph::Direction;
use petgraph::visit::{
    Bfs, Dfs, DfsPostOrder, GraphBase, GraphRef, IntoNeighbors, IntoNeighborsDirected, Reversed,
    VisitMap, Visitable,
};

use crate::{Node, NodeId, Tree, TreeResult};

/// Iterator over the children of one node
pub type Children<'a, I> = Flatten<option::IntoIter<&'a BTreeSet<I>>>;

/// Iterator over the parents of one node
pub type Parents<'a, I, const N: usize> = Flatten<option::IntoIter<&'a [I; N]>>;

/// Borrowed graph view of a [`Tree`].
///
/// Edges point from parent to child. `Direction::Incoming` neighbors are a
/// node's parents, so `Reversed(view)` walks towards ancestors.
pub struct TreeView<'a, I, const N: usize> {
    tree: &'a Tree<I, N>,
}

impl<I, const N: usize> Clone for TreeView<'_, I, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, const N: usize> Copy for TreeView<'_, I, N> {}

impl<'a, I: NodeId, const N: usize> TreeView<'a, I, N> {
    #[must_use]
    pub const fn new(tree: &'a Tree<I, N>) -> Self {
        Self { tree }
    }

    fn children_of(self, id: &I) -> Children<'a, I> {
        self.tree.children_index().get(id).into_iter().flatten()
    }

    fn parents_of(self, id: &I) -> Parents<'a, I, N> {
        self.tree
            .get_node(id)
            .and_then(Node::parent_array)
            .into_iter()
            .flatten()
    }
}

impl<'a, I: NodeId, const N: usize> GraphBase for TreeView<'a, I, N> {
    type NodeId = &'a I;
    type EdgeId = (&'a I, &'a I);
}

impl<I: NodeId, const N: usize> GraphRef for TreeView<'_, I, N> {}

impl<'a, I: NodeId, const N: usize> IntoNeighbors for TreeView<'a, I, N> {
    type Neighbors = Children<'a, I>;

    fn neighbors(self, a: Self::NodeId) -> Self::Neighbors {
        self.children_of(a)
    }
}

impl<'a, I: NodeId, const N: usize> IntoNeighborsDirected for TreeView<'a, I, N> {
    type NeighborsDirected = Either<Children<'a, I>, Parents<'a, I, N>>;

    fn neighbors_directed(self, n: Self::NodeId, d: Direction) -> Self::NeighborsDirected {
        match d {
            Direction::Outgoing => Either::Left(self.children_of(n)),
            Direction::Incoming => Either::Right(self.parents_of(n)),
        }
    }
}

impl<'a, I: NodeId, const N: usize> Visitable for TreeView<'a, I, N> {
    type Map = HashSet<&'a I>;

    fn visit_map(&self) -> Self::Map {
        HashSet::with_capacity(self.tree.size())
    }

    fn reset_map(&self, map: &mut Self::Map) {
        map.clear();
    }
}

impl<I: NodeId, const N: usize> Tree<I, N> {
    /// Graph view for use with `petgraph::visit` algorithms
    #[must_use]
    pub const fn view(&self) -> TreeView<'_, I, N> {
        TreeView::new(self)
    }

    /// Breadth-first order seeded with every root.
    ///
    /// A read-only enumeration: it does NOT guarantee that all parents of a
    /// multi-parent node precede it.
    #[must_use]
    pub fn breadth_first(&self) -> Vec<&I> {
        let view = self.view();
        let mut discovered = view.visit_map();
        let stack: VecDeque<&I> = self.roots().filter(|root| discovered.visit(*root)).collect();
        let mut bfs = Bfs { stack, discovered };

        let mut order = Vec::with_capacity(self.size());
        while let Some(id) = bfs.next(view) {
            order.push(id);
        }
        order
    }

    /// Depth-first pre-order from each root in turn, skipping nodes already visited.
    #[must_use]
    pub fn depth_first(&self) -> Vec<&I> {
        let view = self.view();
        let mut dfs = Dfs::empty(view);

        let mut order = Vec::with_capacity(self.size());
        for root in self.roots() {
            dfs.move_to(root);
            while let Some(id) = dfs.next(view) {
                order.push(id);
            }
        }
        order
    }

    /// Topological order: every node appears after all of its parents.
    ///
    /// Depth-first post-order from every root, reversed.
    #[must_use]
    pub fn topological_order(&self) -> Vec<&I> {
        let view = self.view();
        let mut dfs = DfsPostOrder::empty(view);

        let mut order = Vec::with_capacity(self.size());
        for root in self.roots() {
            dfs.move_to(root);
            while let Some(id) = dfs.next(view) {
                order.push(id);
            }
        }
        order.reverse();
        order
    }

    /// Breadth-first walk from `start` outwards through parent edges,
    /// including `start` itself.
    ///
    /// # Errors
    ///
    /// [`crate::TreeError::NodeNotFound`] if `start` is absent.
    pub fn ancestors_breadth_first(&self, start: &I) -> TreeResult<Vec<&I>> {
        let start = self.node(start)?.id();
        let upwards = Reversed(self.view());
        let mut bfs = Bfs::new(upwards, start);

        let mut order = Vec::new();
        while let Some(id) = bfs.next(upwards) {
            order.push(id);
        }
        Ok(order)
    }
}
