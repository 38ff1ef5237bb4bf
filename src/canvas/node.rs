//! Pipeline nodes placed on the canvas.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// node id
pub type NodeId = String;

/// Kind of pipeline step a node represents.
///
/// The type decides which connection handles the node exposes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumString, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NodeType {
    #[default]
    Agent,
    Supervisor,
    Router,
    Synthesizer,
    Connector,
    Input,
    Output,
}

impl NodeType {
    /// Label given to a freshly created node of this type.
    pub fn title(&self) -> &'static str {
        match self {
            NodeType::Agent => "Agent",
            NodeType::Supervisor => "Supervisor",
            NodeType::Router => "Router",
            NodeType::Synthesizer => "Synthesizer",
            NodeType::Connector => "Connector",
            NodeType::Input => "Input",
            NodeType::Output => "Output",
        }
    }
}

/// Canvas coordinate of a node's top-left corner.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            x,
            y,
        }
    }

    pub fn translate(
        &self,
        dx: f64,
        dy: f64,
    ) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Payload carried by every node.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NodeData {
    /// display label
    pub label: String,
    /// linked agent, if the node runs a configured agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    /// free-form step configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,
}

/// Partial update for [`NodeData`]. Absent fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NodeDataPatch {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub agent_id: Option<String>,
    /// merged key by key into the existing config
    #[serde(default)]
    pub config: Option<Map<String, Value>>,
}

impl NodeData {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            agent_id: None,
            config: None,
        }
    }

    /// Shallow-merge a patch into this payload. Returns whether any field changed.
    pub fn merge(
        &mut self,
        patch: NodeDataPatch,
    ) -> bool {
        let mut changed = false;
        if let Some(label) = patch.label {
            changed |= self.label != label;
            self.label = label;
        }
        if let Some(agent_id) = patch.agent_id {
            changed |= self.agent_id.as_deref() != Some(agent_id.as_str());
            self.agent_id = Some(agent_id);
        }
        if let Some(config) = patch.config.filter(|c| !c.is_empty()) {
            let current = self.config.get_or_insert_with(Map::new);
            for (k, v) in config {
                if current.get(&k) != Some(&v) {
                    current.insert(k, v);
                    changed = true;
                }
            }
        }
        changed
    }
}

impl NodeDataPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }
}

/// A vertex of the pipeline graph.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Node {
    /// node id
    pub id: NodeId,
    /// node type
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// canvas position
    pub position: Position,
    /// node payload
    pub data: NodeData,
    /// selected on the canvas, never persisted
    #[serde(default, skip_serializing)]
    pub selected: bool,
    /// currently being dragged, never persisted
    #[serde(default, skip_serializing)]
    pub dragging: bool,
}

impl Node {
    pub fn new(
        id: impl Into<NodeId>,
        node_type: NodeType,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            node_type,
            position,
            data: NodeData::new(node_type.title()),
            selected: false,
            dragging: false,
        }
    }

    pub fn with_label(
        mut self,
        label: impl Into<String>,
    ) -> Self {
        self.data.label = label.into();
        self
    }

    pub fn with_agent(
        mut self,
        agent_id: impl Into<String>,
    ) -> Self {
        self.data.agent_id = Some(agent_id.into());
        self
    }

    pub fn with_config(
        mut self,
        config: Map<String, Value>,
    ) -> Self {
        self.data.config = Some(config);
        self
    }
}
