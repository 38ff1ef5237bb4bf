//! Selection derived from the `selected` flags on nodes and edges.
//!
//! There is no separately maintained selection set; every read recomputes it
//! from the graph so it can never drift out of sync.

use crate::canvas::{
    edge::{Edge, EdgeId},
    node::{Node, NodeId},
};

/// Selected node and edge ids, in graph order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeId>,
}

impl Selection {
    pub fn derive(
        nodes: &[Node],
        edges: &[Edge],
    ) -> Self {
        Self {
            nodes: selected_node_ids(nodes),
            edges: selected_edge_ids(edges),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn contains_node(
        &self,
        id: &str,
    ) -> bool {
        self.nodes.iter().any(|n| n == id)
    }

    pub fn contains_edge(
        &self,
        id: &str,
    ) -> bool {
        self.edges.iter().any(|e| e == id)
    }
}

pub fn selected_node_ids(nodes: &[Node]) -> Vec<NodeId> {
    nodes.iter().filter(|n| n.selected).map(|n| n.id.clone()).collect()
}

pub fn selected_edge_ids(edges: &[Edge]) -> Vec<EdgeId> {
    edges.iter().filter(|e| e.selected).map(|e| e.id.clone()).collect()
}
