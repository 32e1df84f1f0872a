#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Kindred
//!
//! Interactive shell over a two-parent family tree.
//!
//! The tree itself lives in [`kindred_tree`]; this crate adds the command
//! session, configuration and the SVG backend.

pub mod commands;
pub mod config;
pub mod session;
pub mod svg;

pub use kindred_core;
pub use kindred_tree;
