use serde::{Deserialize, Serialize};

use crate::{
    CanvasError, GraphSnapshot, Result,
    canvas::{Edge, Node},
    model::{ConnectionModel, NodeModel},
};

/// Pipeline as exchanged with the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PipelineModel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nodes: Vec<NodeModel>,
    #[serde(default)]
    pub connections: Vec<ConnectionModel>,
}

impl PipelineModel {
    pub fn from_json(s: &str) -> Result<Self> {
        let pipeline = serde_json::from_str::<PipelineModel>(s);
        match pipeline {
            Ok(v) => Ok(v),
            Err(e) => Err(CanvasError::Pipeline(format!("{}", e))),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build the record for saving the given graph. Transient canvas flags are dropped.
    pub fn from_snapshot(
        id: impl Into<String>,
        name: impl Into<String>,
        snapshot: &GraphSnapshot,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            nodes: snapshot.nodes().iter().map(NodeModel::from).collect(),
            connections: snapshot.edges().iter().map(ConnectionModel::from).collect(),
        }
    }

    pub fn with_description(
        mut self,
        description: impl Into<String>,
    ) -> Self {
        self.description = description.into();
        self
    }
}

impl From<&PipelineModel> for GraphSnapshot {
    fn from(model: &PipelineModel) -> Self {
        GraphSnapshot::new(model.nodes.iter().map(Node::from).collect(), model.connections.iter().map(Edge::from).collect())
    }
}
