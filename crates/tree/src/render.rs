//! # Rendering seam
//!
//! [`Scene`] is the backend-independent description of a drawn tree: one
//! [`Edge`] per parent/child pair and one [`Marker`] per node. Drawing it is
//! left to an implementation of [`Renderer`].

use tracing::debug;

use crate::{Canvas, Color, ColorMap, Layout, NodeId, Point, Tree, TreeResult};

/// A line from a parent to one of its children, stroked in the parent's color
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
    pub color: Color,
}

/// A labelled node marker
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: String,
    pub position: Point,
    pub fill: Color,
}

/// Everything a renderer needs to draw a tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    /// Drawn first, so markers cover edge endpoints
    pub edges: Vec<Edge>,
    pub markers: Vec<Marker>,
}

impl Scene {
    /// Combine a tree with its layout and colors.
    ///
    /// Markers follow topological order. A node without a position is
    /// skipped, as is any edge touching it; a node without a color is drawn
    /// with [`Color::None`].
    ///
    /// # Errors
    ///
    /// [`crate::TreeError::NodeNotFound`] if the tree changes shape while
    /// being walked, which cannot happen through the public API.
    pub fn compose<I: NodeId, const N: usize>(
        tree: &Tree<I, N>,
        layout: &Layout<I>,
        colors: &ColorMap<I>,
    ) -> TreeResult<Self> {
        let mut scene = Self::default();
        let color_of = |id: &I| colors.get(id).cloned().unwrap_or_default();

        for id in tree.topological_order() {
            let Some(position) = layout.position(id) else {
                continue;
            };
            for parent in tree.node(id)?.parents() {
                if let Some(from) = layout.position(parent) {
                    scene.edges.push(Edge {
                        from,
                        to: position,
                        color: color_of(parent),
                    });
                }
            }
            scene.markers.push(Marker {
                label: id.to_string(),
                position,
                fill: color_of(id),
            });
        }

        debug!(
            edges = scene.edges.len(),
            markers = scene.markers.len(),
            "Composed scene"
        );
        Ok(scene)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// A drawing backend
pub trait Renderer {
    type Output;

    fn render(&self, scene: &Scene, canvas: &Canvas) -> Self::Output;
}
