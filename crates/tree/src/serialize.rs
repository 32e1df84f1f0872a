//! # Text format
//!
//! One node per line: the id, then either nothing (a root) or exactly `N`
//! parent ids, separated by whitespace. Blank lines are ignored.
//!
//! ```text
//! Adam
//! Eve
//! Cain Adam Eve
//! ```
//!
//! A printed tree lists its nodes in topological order with parents in
//! their original order, so printing and re-parsing yields an equal tree.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::id::parse_id;
use crate::{Node, NodeId, Tree, TreeError, TreeResult};

impl<I: NodeId, const N: usize> Node<I, N> {
    /// Parse a single node line.
    ///
    /// # Errors
    ///
    /// * [`TreeError::EmptyNodeInput`] for an empty or blank line
    /// * [`TreeError::InvalidNodeId`] if a token is not a valid id
    /// * [`TreeError::TooFewParents`] / [`TreeError::TooManyParents`] for partial parent lists
    pub fn parse(line: &str) -> TreeResult<Self> {
        let mut tokens = line.split_whitespace();
        let id = tokens.next().ok_or(TreeError::EmptyNodeInput)?;
        let id = parse_id(id)?;
        let parents = tokens.map(parse_id).collect::<TreeResult<Vec<I>>>()?;
        Self::from_parts(id, parents)
    }
}

impl<I: NodeId, const N: usize> FromStr for Node<I, N> {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<I: NodeId, const N: usize> fmt::Display for Node<I, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())?;
        for parent in self.parents() {
            write!(f, " {parent}")?;
        }
        Ok(())
    }
}

impl<I: NodeId, const N: usize> Tree<I, N> {
    /// Parse a whole tree, inserting nodes line by line.
    ///
    /// # Errors
    ///
    /// The first parse or insertion error, see [`Node::parse`] and [`Tree::add_node`].
    pub fn parse(text: &str) -> TreeResult<Self> {
        let mut tree = Self::new();
        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            Node::parse(line)
                .and_then(|node| tree.add_node(node).map(|_| ()))
                .inspect_err(|e| debug!(line = number + 1, error = %e, "Rejected tree line"))?;
        }
        Ok(tree)
    }
}

impl<I: NodeId, const N: usize> FromStr for Tree<I, N> {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<I: NodeId, const N: usize> fmt::Display for Tree<I, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.topological_order() {
            if let Some(node) = self.get_node(id) {
                writeln!(f, "{node}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    type NodeT = Node<i32, 2>;

    #[test]
    fn test_parse_root() {
        assert_eq!(NodeT::parse("1").unwrap(), NodeT::root(1));
    }

    #[test]
    fn test_parse_ignores_parent_order_for_equality() {
        let node = NodeT::with_parents(5, [1, 2]);
        assert_eq!(node, NodeT::parse("5 2 1").unwrap());
        assert_ne!(node, NodeT::parse("2 1 5").unwrap());
    }

    #[test]
    fn test_print_keeps_parent_order() {
        let root = NodeT::root(1);
        let child = NodeT::with_parents(5, [1, 2]);
        assert_eq!(format!("{root}\n{child}"), "1\n5 1 2");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(NodeT::parse("1 2"), Err(TreeError::too_few_parents(2, 1)));
        assert_eq!(NodeT::parse("1 2 3 4"), Err(TreeError::too_many_parents(2, 3)));
        assert_eq!(NodeT::parse(""), Err(TreeError::EmptyNodeInput));
        assert_eq!(NodeT::parse("   "), Err(TreeError::EmptyNodeInput));
        assert!(matches!(
            NodeT::parse("1 x 2"),
            Err(TreeError::InvalidNodeId { ref token, .. }) if token == "x"
        ));
    }

    #[test]
    fn test_tree_parse_skips_blank_lines() {
        let tree: Tree<String, 2> = "Biba\n\nBoba\n  \nBingus Biba Boba\n".parse().unwrap();
        assert_eq!(tree.size(), 3);
    }

    #[test]
    fn test_tree_print_is_topological() {
        let tree: Tree<u8, 2> = "2\n1\n3 1 2\n4 3 1".parse().unwrap();
        let printed = tree.to_string();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines.last(), Some(&"4 3 1"));
        assert!(lines.iter().position(|l| *l == "3 1 2") < lines.iter().position(|l| *l == "4 3 1"));
    }

    #[test]
    fn test_tree_round_trip() {
        let tree: Tree<String, 3> = "1.0\n2.0\n3.0\n4.0 3.0 1.0 2.0\n5.0 4.0 2.0 1.0".parse().unwrap();
        let printed = tree.to_string();
        assert!(printed.contains("4.0 3.0 1.0 2.0"));
        let reparsed: Tree<String, 3> = printed.parse().unwrap();
        assert_eq!(tree, reparsed);
    }

    #[test]
    fn test_ids_that_cannot_round_trip_are_rejected() {
        let mut tree = Tree::<String, 2>::new();
        for id in ["Anna Maria", ""] {
            let result = tree.add_node(Node::root(id.to_string()));
            assert!(
                matches!(result, Err(TreeError::InvalidNodeId { ref token, .. }) if token == id),
                "{id:?} should be rejected"
            );
        }
        assert!(tree.is_empty());

        tree.add_node(Node::root("Anna".to_string())).unwrap();
        let reparsed: Tree<String, 2> = tree.to_string().parse().unwrap();
        assert_eq!(reparsed, tree);
    }

    #[test]
    fn test_tree_parse_stops_at_first_bad_line() {
        let result: TreeResult<Tree<String, 2>> = "1\n2\nbiba\nboba biba amogus".parse();
        assert_eq!(
            result.err(),
            Some(TreeError::unknown_parent_id("boba", "amogus"))
        );
    }
}
