//! # Kindred Core
//!
//! Ambient plumbing shared by the Kindred crates: the I/O and configuration
//! error type, the `Result` alias with its logging combinator, and thin
//! filesystem helpers that map failures into [`Error`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod fs;
pub mod result;

pub use error::Error;
pub use result::{Result, ResultExt};
