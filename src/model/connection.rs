use serde::{Deserialize, Serialize};

use crate::canvas::Edge;

/// Backend record for a pipeline connection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConnectionModel {
    pub id: String,
    pub source_node_id: String,
    pub target_node_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl From<&ConnectionModel> for Edge {
    fn from(model: &ConnectionModel) -> Self {
        Edge {
            id: model.id.clone(),
            source: model.source_node_id.clone(),
            target: model.target_node_id.clone(),
            source_handle: model.source_handle.clone(),
            target_handle: model.target_handle.clone(),
            label: model.label.clone(),
            condition: model.condition.clone(),
            selected: false,
        }
    }
}

impl From<&Edge> for ConnectionModel {
    fn from(edge: &Edge) -> Self {
        // handles are always written out so the backend never sees a bare edge
        ConnectionModel {
            id: edge.id.clone(),
            source_node_id: edge.source.clone(),
            target_node_id: edge.target.clone(),
            source_handle: Some(edge.source_handle().to_string()),
            target_handle: Some(edge.target_handle().to_string()),
            condition: edge.condition.clone(),
            label: edge.label.clone(),
        }
    }
}
