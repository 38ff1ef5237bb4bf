//! Canvas edges connecting nodes.
//!
//! Edges attach to named handles on their endpoints. Fan-out node types
//! (routers, supervisors) expose several output handles; every other type has
//! a single `output` and a single `input` handle.

use serde::{Deserialize, Serialize};

use crate::canvas::node::NodeId;

/// Unique identifier for an edge on the canvas.
pub type EdgeId = String;

/// Handle used when an edge does not name its source handle.
pub const DEFAULT_SOURCE_HANDLE: &str = "output";
/// Handle used when an edge does not name its target handle.
pub const DEFAULT_TARGET_HANDLE: &str = "input";

/// Directed connection between two nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Edge {
    /// Unique edge identifier.
    pub id: EdgeId,
    /// ID of the source node.
    pub source: NodeId,
    /// ID of the target node.
    pub target: NodeId,
    /// Output handle on the source node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    /// Input handle on the target node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Boolean expression guarding a conditional route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Selected on the canvas, never persisted.
    #[serde(default, skip_serializing)]
    pub selected: bool,
}

impl Edge {
    pub fn new(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
            label: None,
            condition: None,
            selected: false,
        }
    }

    pub fn with_handles(
        mut self,
        source_handle: impl Into<String>,
        target_handle: impl Into<String>,
    ) -> Self {
        self.source_handle = Some(source_handle.into());
        self.target_handle = Some(target_handle.into());
        self
    }

    pub fn with_label(
        mut self,
        label: impl Into<String>,
    ) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_condition(
        mut self,
        condition: impl Into<String>,
    ) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Source handle, falling back to [`DEFAULT_SOURCE_HANDLE`].
    pub fn source_handle(&self) -> &str {
        self.source_handle.as_deref().unwrap_or(DEFAULT_SOURCE_HANDLE)
    }

    /// Target handle, falling back to [`DEFAULT_TARGET_HANDLE`].
    pub fn target_handle(&self) -> &str {
        self.target_handle.as_deref().unwrap_or(DEFAULT_TARGET_HANDLE)
    }

    /// Whether this edge starts or ends at `nid`.
    pub fn touches(
        &self,
        nid: &str,
    ) -> bool {
        self.source == nid || self.target == nid
    }
}

/// Connection request produced by a connect gesture.
///
/// Either endpoint may be missing while the gesture is still in flight; only
/// complete requests become edges.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Connection {
    pub source: Option<NodeId>,
    pub target: Option<NodeId>,
    #[serde(default)]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub target_handle: Option<String>,
}

impl Connection {
    pub fn new(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> Self {
        Self {
            source: Some(source.into()),
            target: Some(target.into()),
            source_handle: None,
            target_handle: None,
        }
    }

    pub fn with_source_handle(
        mut self,
        handle: impl Into<String>,
    ) -> Self {
        self.source_handle = Some(handle.into());
        self
    }

    pub fn with_target_handle(
        mut self,
        handle: impl Into<String>,
    ) -> Self {
        self.target_handle = Some(handle.into());
        self
    }
}
