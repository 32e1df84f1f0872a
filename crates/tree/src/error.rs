//! Tree-specific error types

use thiserror::Error;

/// Errors raised by tree construction, parsing, merging and coloring.
///
/// Node ids are carried in their printed form so the error stays
/// independent of the identifier type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Node already exists: {0}")]
    DuplicateNodeId(String),

    #[error("Unknown parent id '{parent}' for node '{node}'")]
    UnknownParentId { node: String, parent: String },

    #[error("Too few parents: got {found}, should be {expected}")]
    TooFewParents { expected: usize, found: usize },

    #[error("Too many parents: got {found}, should be {expected}")]
    TooManyParents { expected: usize, found: usize },

    #[error("Can't parse node from empty input")]
    EmptyNodeInput,

    #[error("Invalid node id '{token}': {reason}")]
    InvalidNodeId { token: String, reason: String },

    #[error("Can't blend non-rgb color of parent '{parent}' into node '{node}'")]
    NonRgbColorBlend { node: String, parent: String },

    #[error("Merge conflict: node '{0}' has different parents in the merged trees")]
    MergeConflict(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),
}

impl TreeError {
    pub fn duplicate_node_id(id: impl ToString) -> Self {
        Self::DuplicateNodeId(id.to_string())
    }

    pub fn unknown_parent_id(node: impl ToString, parent: impl ToString) -> Self {
        Self::UnknownParentId {
            node: node.to_string(),
            parent: parent.to_string(),
        }
    }

    pub const fn too_few_parents(expected: usize, found: usize) -> Self {
        Self::TooFewParents { expected, found }
    }

    pub const fn too_many_parents(expected: usize, found: usize) -> Self {
        Self::TooManyParents { expected, found }
    }

    pub fn invalid_node_id(token: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidNodeId {
            token: token.into(),
            reason: reason.to_string(),
        }
    }

    pub fn non_rgb_color_blend(node: impl ToString, parent: impl ToString) -> Self {
        Self::NonRgbColorBlend {
            node: node.to_string(),
            parent: parent.to_string(),
        }
    }

    pub fn merge_conflict(id: impl ToString) -> Self {
        Self::MergeConflict(id.to_string())
    }

    pub fn node_not_found(id: impl ToString) -> Self {
        Self::NodeNotFound(id.to_string())
    }
}

/// Result type for tree operations
pub type TreeResult<T> = std::result::Result<T, TreeError>;
