//! Structured change operations emitted by one interaction frame.
//!
//! A drag, a box selection or a delete key press arrives as a batch of
//! changes that the store applies in order.

use serde::{Deserialize, Serialize};

use crate::canvas::{
    edge::{Edge, EdgeId},
    node::{Node, NodeId, Position},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeChange {
    /// Insert a node.
    Add { item: Node },
    /// Remove a node and every edge attached to it.
    Remove { id: NodeId },
    /// Replace the node with the same id.
    Replace { item: Node },
    /// Move a node to an absolute position. `position` is absent on the
    /// frame that only toggles `dragging`.
    Position {
        id: NodeId,
        #[serde(default)]
        position: Option<Position>,
        #[serde(default)]
        dragging: bool,
    },
    /// Move a node by a delta.
    Translate { id: NodeId, dx: f64, dy: f64 },
    /// Set the selection flag.
    Select { id: NodeId, selected: bool },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EdgeChange {
    Add { item: Edge },
    Remove { id: EdgeId },
    Replace { item: Edge },
    Select { id: EdgeId, selected: bool },
}

impl NodeChange {
    /// Id of the node this change targets.
    pub fn id(&self) -> &str {
        match self {
            NodeChange::Add { item } | NodeChange::Replace { item } => &item.id,
            NodeChange::Remove { id } | NodeChange::Position { id, .. } | NodeChange::Translate { id, .. } | NodeChange::Select { id, .. } => id,
        }
    }

    /// Whether the change adds, removes or replaces a node.
    pub fn is_structural(&self) -> bool {
        matches!(self, NodeChange::Add { .. } | NodeChange::Remove { .. } | NodeChange::Replace { .. })
    }
}

impl EdgeChange {
    pub fn id(&self) -> &str {
        match self {
            EdgeChange::Add { item } | EdgeChange::Replace { item } => &item.id,
            EdgeChange::Remove { id } | EdgeChange::Select { id, .. } => id,
        }
    }

    pub fn is_structural(&self) -> bool {
        !matches!(self, EdgeChange::Select { .. })
    }
}
