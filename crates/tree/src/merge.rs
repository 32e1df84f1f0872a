//! # Merge
//!
//! Union of two trees that agree on every node they share.

use tracing::{debug, info};

use crate::{NodeId, Tree, TreeError, TreeResult};

impl<I: NodeId, const N: usize> Tree<I, N> {
    /// Merge two trees into a new one.
    ///
    /// A node id present in both trees must have the same parents in both
    /// (in any order). Neither input is modified.
    ///
    /// # Errors
    ///
    /// [`TreeError::MergeConflict`] naming the first shared id (in id order)
    /// whose parents differ. No partial tree is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_tree::Tree;
    ///
    /// let left: Tree<u8, 2> = "1\n2\n4 1 2".parse()?;
    /// let right: Tree<u8, 2> = "2\n1\n4 2 1\n6\n7 6 2".parse()?;
    /// let merged = Tree::merge(&left, &right)?;
    /// assert_eq!(merged.size(), 5);
    /// # Ok::<(), kindred_tree::TreeError>(())
    /// ```
    pub fn merge(first: &Self, second: &Self) -> TreeResult<Self> {
        if let Some(conflict) = first.nodes().find(|node| {
            second
                .get_node(node.id())
                .is_some_and(|other| other != *node)
        }) {
            return Err(TreeError::merge_conflict(conflict.id()));
        }

        let mut merged = Self::new();
        for id in first.topological_order() {
            merged.add_node(first.node(id)?.clone())?;
        }
        let mut shared = 0_usize;
        for id in second.topological_order() {
            if merged.contains(id) {
                shared += 1;
                continue;
            }
            merged.add_node(second.node(id)?.clone())?;
        }

        debug!(shared, "Merged trees share nodes");
        info!(
            first = first.size(),
            second = second.size(),
            merged = merged.size(),
            "Merged trees"
        );
        Ok(merged)
    }
}
