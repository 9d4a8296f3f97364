//! A single node of a game record

use serde::{Deserialize, Serialize};

use super::properties::Properties;
use crate::identifiers::{NodeId, NodeIndex};

/// A position in the game record: its SGF properties plus links into the
/// owning tree's arena.
///
/// Children are owned by the tree; `parent` is a lookup link only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveNode {
    pub(crate) properties: Properties,
    pub(crate) children: Vec<NodeIndex>,
    pub(crate) node_id: NodeId,
    pub(crate) parent: Option<NodeIndex>,
}

impl MoveNode {
    pub(crate) fn new(node_id: NodeId, parent: Option<NodeIndex>) -> Self {
        Self {
            properties: Properties::new(),
            children: Vec::new(),
            node_id,
            parent,
        }
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    pub fn get_child(&self, var_num: usize) -> Option<NodeIndex> {
        self.children.get(var_num).copied()
    }

    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    /// Depth below the root.
    pub fn node_num(&self) -> usize {
        self.node_id.node_num
    }

    /// Index among the parent's children.
    pub fn var_num(&self) -> usize {
        self.node_id.var_num
    }
}
