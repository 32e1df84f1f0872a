//! # Layout
//!
//! Assigns every node a discrete level and a position on a fixed canvas.
//!
//! Levels are computed in topological order, so a node's level is always
//! derived from the final levels of all of its parents:
//!
//! ```text
//! level(root) = 0
//! level(n)    = 1 + max(level(p) for p in parents(n))
//! ```
//!
//! Levels are spread evenly from top to bottom of the canvas and the nodes
//! of one level evenly from left to right, in topological order.

use im::HashMap;
use serde::Deserialize;
use tracing::debug;

use crate::{NodeId, Tree};

/// Drawing surface dimensions, in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Margin kept free on every side
    pub padding: f64,
    /// Radius of a node marker; used by renderers, not by the layout
    pub node_radius: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1500.0,
            height: 660.0,
            padding: 100.0,
            node_radius: 30.0,
        }
    }
}

impl Canvas {
    /// Center of the canvas
    #[must_use]
    pub fn midpoint(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A 2D position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Levels and positions of every node in a tree
#[derive(Debug, Clone)]
pub struct Layout<I: NodeId> {
    levels: HashMap<I, usize>,
    buckets: Vec<Vec<I>>,
    positions: HashMap<I, Point>,
}

impl<I: NodeId> Layout<I> {
    /// Lay out `tree` on `canvas`.
    #[must_use]
    pub fn compute<const N: usize>(tree: &Tree<I, N>, canvas: &Canvas) -> Self {
        let (levels, buckets) = assign_levels(tree);

        let rows = even_distribution(canvas.padding, canvas.height - canvas.padding, buckets.len());
        let mut positions = HashMap::new();
        for (bucket, y) in buckets.iter().zip(rows) {
            let columns =
                even_distribution(canvas.padding, canvas.width - canvas.padding, bucket.len());
            for (id, x) in bucket.iter().zip(columns) {
                positions.insert(id.clone(), Point::new(x, y));
            }
        }

        debug!(
            nodes = positions.len(),
            levels = buckets.len(),
            "Computed layout"
        );
        Self {
            levels,
            buckets,
            positions,
        }
    }

    #[must_use]
    pub fn level(&self, id: &I) -> Option<usize> {
        self.levels.get(id).copied()
    }

    #[must_use]
    pub fn position(&self, id: &I) -> Option<Point> {
        self.positions.get(id).copied()
    }

    /// Node ids grouped by level, each level in topological order
    #[must_use]
    pub fn buckets(&self) -> &[Vec<I>] {
        &self.buckets
    }

    #[must_use]
    pub fn level_count(&self) -> usize {
        self.buckets.len()
    }
}

/// Compute each node's level and group the nodes by level.
#[must_use]
pub fn assign_levels<I: NodeId, const N: usize>(
    tree: &Tree<I, N>,
) -> (HashMap<I, usize>, Vec<Vec<I>>) {
    let mut levels: HashMap<I, usize> = HashMap::new();
    let mut buckets: Vec<Vec<I>> = Vec::new();

    for id in tree.topological_order() {
        let level = tree
            .get_node(id)
            .into_iter()
            .flat_map(|node| node.parents())
            .filter_map(|parent| levels.get(parent))
            .map(|parent_level| parent_level + 1)
            .max()
            .unwrap_or(0);

        if buckets.len() <= level {
            buckets.resize_with(level + 1, Vec::new);
        }
        if let Some(bucket) = buckets.get_mut(level) {
            bucket.push(id.clone());
        }
        levels.insert(id.clone(), level);
    }

    (levels, buckets)
}

/// `count` evenly spaced values from `min` to `max` inclusive; the midpoint
/// when `count` is one.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn even_distribution(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![(min + max) / 2.0],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            (0..count).map(|i| min + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;
    use crate::Node;

    #[test]
    fn test_even_distribution_endpoints() {
        assert_eq!(even_distribution(100.0, 1400.0, 3), vec![100.0, 750.0, 1400.0]);
        assert_eq!(even_distribution(100.0, 560.0, 1), vec![330.0]);
        assert!(even_distribution(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_single_root_sits_at_canvas_midpoint() {
        let tree: Tree<char, 2> = "A".parse().unwrap();
        let canvas = Canvas::default();
        let layout = Layout::compute(&tree, &canvas);
        assert_eq!(layout.position(&'A'), Some(canvas.midpoint()));
        assert_eq!(layout.level(&'A'), Some(0));
    }

    #[test]
    fn test_level_is_one_more_than_deepest_parent() {
        // D's parents sit on levels 0 and 2.
        let tree: Tree<char, 2> = "A\nZ\nB A Z\nC B Z\nD A C".parse().unwrap();
        let layout = Layout::compute(&tree, &Canvas::default());
        assert_eq!(layout.level(&'A'), Some(0));
        assert_eq!(layout.level(&'B'), Some(1));
        assert_eq!(layout.level(&'C'), Some(2));
        assert_eq!(layout.level(&'D'), Some(3));
        assert_eq!(layout.level_count(), 4);
    }

    #[test]
    fn test_positions_spread_over_padded_canvas() {
        let tree: Tree<char, 2> = "A\nB\nC A B".parse().unwrap();
        let canvas = Canvas {
            width: 1000.0,
            height: 500.0,
            padding: 50.0,
            node_radius: 10.0,
        };
        let layout = Layout::compute(&tree, &canvas);

        let a = layout.position(&'A').unwrap();
        let b = layout.position(&'B').unwrap();
        let c = layout.position(&'C').unwrap();
        assert_eq!(a.y, 50.0);
        assert_eq!(b.y, 50.0);
        assert_eq!(c, Point::new(500.0, 450.0));
        assert_eq!([a.x.min(b.x), a.x.max(b.x)], [50.0, 950.0]);
    }

    #[test]
    fn test_buckets_group_every_node_once() {
        let mut tree = Tree::<u8, 1>::new();
        tree.add_node(Node::root(0)).unwrap();
        for id in 1..6 {
            tree.add_node(Node::with_parents(id, [id / 2])).unwrap();
        }
        let layout = Layout::compute(&tree, &Canvas::default());
        let total: usize = layout.buckets().iter().map(Vec::len).sum();
        assert_eq!(total, tree.size());
        assert_eq!(layout.buckets()[0], vec![0]);
    }

    #[test]
    fn test_empty_tree_has_empty_layout() {
        let layout = Layout::compute(&Tree::<u8, 2>::new(), &Canvas::default());
        assert_eq!(layout.level_count(), 0);
        assert!(layout.position(&1).is_none());
    }
}
