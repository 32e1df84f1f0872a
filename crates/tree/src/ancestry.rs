//! # Ancestry
//!
//! Ancestor closures and lowest-common-ancestor sets.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{NodeId, Tree, TreeResult};

impl<I: NodeId, const N: usize> Tree<I, N> {
    /// Reflexive-transitive closure of `id` under the parent relation.
    ///
    /// # Errors
    ///
    /// [`crate::TreeError::NodeNotFound`] if `id` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_tree::Tree;
    ///
    /// let tree: Tree<char, 2> = "A\nB\nC A B\nD".parse()?;
    /// let ancestors = tree.get_ancestors(&'C')?;
    /// assert_eq!(ancestors.into_iter().collect::<String>(), "ABC");
    /// # Ok::<(), kindred_tree::TreeError>(())
    /// ```
    pub fn get_ancestors(&self, id: &I) -> TreeResult<BTreeSet<I>> {
        Ok(self
            .ancestors_breadth_first(id)?
            .into_iter()
            .cloned()
            .collect())
    }

    /// Whether `ancestor` is in the ancestor closure of `of` (a node is its own ancestor).
    ///
    /// # Errors
    ///
    /// [`crate::TreeError::NodeNotFound`] if `of` is absent.
    pub fn is_ancestor(&self, ancestor: &I, of: &I) -> TreeResult<bool> {
        Ok(self
            .ancestors_breadth_first(of)?
            .into_iter()
            .any(|id| id == ancestor))
    }

    /// Common ancestors of `first` and `second` that are not an ancestor of
    /// any other common ancestor.
    ///
    /// `x` and `x` yield `{x}`; nodes with disjoint ancestries yield an empty set.
    ///
    /// # Errors
    ///
    /// [`crate::TreeError::NodeNotFound`] if either id is absent.
    pub fn lowest_common_ancestors(&self, first: &I, second: &I) -> TreeResult<BTreeSet<I>> {
        let first_ancestors = self.get_ancestors(first)?;
        let second_ancestors = self.get_ancestors(second)?;
        let common: BTreeSet<&I> = first_ancestors.intersection(&second_ancestors).collect();

        // Any common ancestor that is a parent of another common ancestor is not lowest.
        let mut lowest: BTreeSet<I> = common.iter().map(|id| (*id).clone()).collect();
        for id in &common {
            for parent in self.node(id)?.parents() {
                lowest.remove(parent);
            }
        }

        debug!(
            first = %first,
            second = %second,
            common = common.len(),
            lowest = lowest.len(),
            "Computed lowest common ancestors"
        );
        Ok(lowest)
    }
}
