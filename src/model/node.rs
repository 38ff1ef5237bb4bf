use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::canvas::{Node, NodeData, NodeType, Position};

/// Backend record for a pipeline node. Position is stored flattened.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodeModel {
    pub id: String,
    pub node_type: NodeType,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,
    #[serde(default)]
    pub position_x: f64,
    #[serde(default)]
    pub position_y: f64,
}

impl From<&NodeModel> for Node {
    fn from(model: &NodeModel) -> Self {
        Node {
            id: model.id.clone(),
            node_type: model.node_type,
            position: Position::new(model.position_x, model.position_y),
            data: NodeData {
                label: model.label.clone(),
                agent_id: model.agent_id.clone(),
                config: model.config.clone(),
            },
            selected: false,
            dragging: false,
        }
    }
}

impl From<&Node> for NodeModel {
    fn from(node: &Node) -> Self {
        NodeModel {
            id: node.id.clone(),
            node_type: node.node_type,
            label: node.data.label.clone(),
            agent_id: node.data.agent_id.clone(),
            config: node.data.config.clone(),
            position_x: node.position.x,
            position_y: node.position.y,
        }
    }
}
