//! # Kindred Tree
//!
//! Genealogical directed acyclic graph ("family tree") generic over the
//! identifier type and a fixed parent arity `N`.
//!
//! A [`Tree`] only grows through single-node insertion, and every parent a
//! node names must already be present when it is inserted. Cycles are
//! therefore impossible by construction; nothing in this crate searches for
//! them.
//!
//! On top of the store the crate provides:
//!
//! - three orderings (breadth-first, depth-first, topological), see [`traversal`]
//! - ancestor closures and lowest common ancestors, see [`ancestry`]
//! - conflict-aware merging, see [`merge`]
//! - level/position layout and inherited colors, see [`layout`] and [`color`]
//! - a line-oriented text format, see [`serialize`]
//! - the [`Scene`] handed to an external [`Renderer`]

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod ancestry;
pub mod color;
pub mod error;
pub mod id;
pub mod layout;
pub mod merge;
pub mod node;
pub mod render;
pub mod serialize;
pub mod store;
pub mod traversal;

pub use color::{Color, ColorEngine, ColorMap, Rgb, Rgba};
pub use error::{TreeError, TreeResult};
pub use id::NodeId;
pub use layout::{Canvas, Layout, Point};
pub use node::Node;
pub use render::{Edge, Marker, Renderer, Scene};
pub use store::Tree;
pub use traversal::TreeView;
