//! Identifier capability required of tree node ids.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// Capabilities a node identifier must provide.
///
/// Ids are compared, hashed, ordered (for deterministic output), printed and
/// parsed back from a single whitespace-free token. Anything satisfying the
/// bounds is a `NodeId` automatically: `String`, `char`, integers, or a
/// domain type with `Display`/`FromStr` implementations.
pub trait NodeId: Clone + Eq + Ord + Hash + Debug + Display + FromStr<Err: Display> {}

impl<T> NodeId for T where T: Clone + Eq + Ord + Hash + Debug + Display + FromStr<Err: Display> {}

/// Parse a single token into an id, keeping the token in the error.
pub(crate) fn parse_id<I: NodeId>(token: &str) -> crate::TreeResult<I> {
    token
        .parse::<I>()
        .map_err(|e| crate::TreeError::invalid_node_id(token, e))
}

/// Reject ids whose printed form is not a single non-empty token.
pub(crate) fn check_token<I: NodeId>(id: &I) -> crate::TreeResult<()> {
    let token = id.to_string();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(crate::TreeError::invalid_node_id(
            token,
            "must print as a non-empty token without whitespace",
        ));
    }
    Ok(())
}
