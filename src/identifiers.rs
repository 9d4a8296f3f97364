//! Identifier types for move-tree nodes.
//!
//! Nodes live in an arena owned by their [`MoveTree`](crate::rules::MoveTree);
//! a [`NodeIndex`] is a handle into that arena, while a [`NodeId`] is the
//! game-record numbering of the node (move depth and variation slot).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle to a node inside a move-tree arena.
///
/// Only meaningful for the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Index of the root node in every tree.
    pub const ROOT: NodeIndex = NodeIndex(0);

    pub(crate) fn new(value: usize) -> Self {
        Self(value)
    }

    /// Position of the node in the arena.
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position of a node in the game record.
///
/// `node_num` is the depth below the root (the root is 0). `var_num` is the
/// node's index among its parent's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NodeId {
    pub node_num: usize,
    pub var_num: usize,
}

impl NodeId {
    pub fn new(node_num: usize, var_num: usize) -> Self {
        Self { node_num, var_num }
    }

    /// Id for the `var_num`th child of a node with this id.
    pub fn child(&self, var_num: usize) -> Self {
        Self::new(self.node_num + 1, var_num)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.node_num, self.var_num)
    }
}
