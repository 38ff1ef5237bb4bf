//! Read-only checks over a graph snapshot.
//!
//! The store accepts whatever the canvas produces. Before saving or running a
//! pipeline, [`validate`] reports what a strict consumer would reject, and
//! [`describe`] renders the graph for logs and debugging.

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use petgraph::{
    Direction,
    algo::{tarjan_scc, toposort},
    graph::{DiGraph, NodeIndex},
    visit::{Bfs, EdgeRef, Walker},
};

use crate::{
    GraphSnapshot,
    canvas::{Edge, EdgeId, Node, NodeId, NodeType, registry},
};

/// A problem found in a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphIssue {
    /// Two nodes share an id. Only the first one takes part in further checks.
    DuplicateNodeId(NodeId),
    DuplicateEdgeId(EdgeId),
    /// Edge endpoint that no node answers to.
    DanglingEdge {
        edge: EdgeId,
        missing: NodeId,
    },
    /// Edge violating its endpoints' handle rules.
    HandleRule {
        edge: EdgeId,
        reason: String,
    },
    /// Nodes forming a directed cycle.
    Cycle(Vec<NodeId>),
    /// Node not reachable from any input node.
    Unreachable(NodeId),
}

impl fmt::Display for GraphIssue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            GraphIssue::DuplicateNodeId(id) => write!(f, "duplicate node id {}", id),
            GraphIssue::DuplicateEdgeId(id) => write!(f, "duplicate edge id {}", id),
            GraphIssue::DanglingEdge {
                edge,
                missing,
            } => write!(f, "edge {} references missing node {}", edge, missing),
            GraphIssue::HandleRule {
                edge,
                reason,
            } => write!(f, "edge {}: {}", edge, reason),
            GraphIssue::Cycle(nodes) => write!(f, "cycle through {}", nodes.join(" -> ")),
            GraphIssue::Unreachable(id) => write!(f, "node {} is not reachable from an input", id),
        }
    }
}

/// Directed graph over the well-formed part of a snapshot.
struct Indexed<'a> {
    graph: DiGraph<&'a Node, &'a Edge>,
    index: HashMap<&'a str, NodeIndex>,
}

impl<'a> Indexed<'a> {
    fn build(
        snapshot: &'a GraphSnapshot,
        issues: &mut Vec<GraphIssue>,
    ) -> Self {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();

        for node in snapshot.nodes() {
            if index.contains_key(node.id.as_str()) {
                issues.push(GraphIssue::DuplicateNodeId(node.id.clone()));
                continue;
            }
            index.insert(node.id.as_str(), graph.add_node(node));
        }

        let mut edge_ids = HashSet::new();
        for edge in snapshot.edges() {
            if !edge_ids.insert(edge.id.as_str()) {
                issues.push(GraphIssue::DuplicateEdgeId(edge.id.clone()));
                continue;
            }
            let Some(source) = index.get(edge.source.as_str()).copied() else {
                issues.push(GraphIssue::DanglingEdge {
                    edge: edge.id.clone(),
                    missing: edge.source.clone(),
                });
                continue;
            };
            let Some(target) = index.get(edge.target.as_str()).copied() else {
                issues.push(GraphIssue::DanglingEdge {
                    edge: edge.id.clone(),
                    missing: edge.target.clone(),
                });
                continue;
            };
            graph.add_edge(source, target, edge);
        }

        Self {
            graph,
            index,
        }
    }
}

/// Report every issue found in the snapshot, in discovery order.
pub fn validate(snapshot: &GraphSnapshot) -> Vec<GraphIssue> {
    let mut issues = Vec::new();
    let indexed = Indexed::build(snapshot, &mut issues);
    let graph = &indexed.graph;

    for edge_ref in graph.edge_references() {
        let edge = edge_ref.weight();
        if let Err(e) = registry::check_connection(graph[edge_ref.source()], graph[edge_ref.target()], edge.source_handle(), edge.target_handle()) {
            issues.push(GraphIssue::HandleRule {
                edge: edge.id.clone(),
                reason: e.to_string(),
            });
        }
    }

    for scc in tarjan_scc(graph) {
        let self_loop = scc.len() == 1 && graph.find_edge(scc[0], scc[0]).is_some();
        if scc.len() > 1 || self_loop {
            let mut ids: Vec<NodeId> = scc.iter().map(|idx| graph[*idx].id.clone()).collect();
            ids.sort();
            issues.push(GraphIssue::Cycle(ids));
        }
    }

    let inputs: Vec<NodeIndex> = graph.node_indices().filter(|idx| graph[*idx].node_type == NodeType::Input).collect();
    if !inputs.is_empty() {
        let mut reached = vec![false; graph.node_count()];
        for start in inputs {
            for idx in Bfs::new(graph, start).iter(graph) {
                reached[idx.index()] = true;
            }
        }
        for idx in graph.node_indices() {
            if !reached[idx.index()] {
                issues.push(GraphIssue::Unreachable(graph[idx].id.clone()));
            }
        }
    }

    issues
}

/// Node ids in dependency order, or `None` if the graph has a cycle.
/// Dangling edges are ignored.
pub fn execution_order(snapshot: &GraphSnapshot) -> Option<Vec<NodeId>> {
    let mut issues = Vec::new();
    let indexed = Indexed::build(snapshot, &mut issues);
    let order = toposort(&indexed.graph, None).ok()?;
    Some(order.into_iter().map(|idx| indexed.graph[idx].id.clone()).collect())
}

/// Output a human-readable representation of the graph.
pub fn describe(snapshot: &GraphSnapshot) -> String {
    let mut issues = Vec::new();
    let indexed = Indexed::build(snapshot, &mut issues);
    let graph = &indexed.graph;
    let mut lines = Vec::new();

    lines.push("=== Pipeline Graph ===".to_string());
    lines.push(format!("Nodes: {}, Edges: {}", snapshot.nodes().len(), snapshot.edges().len()));
    lines.push(String::new());

    lines.push("--- Nodes ---".to_string());
    for node in snapshot.nodes() {
        lines.push(format!("[{}] {} (type: {}, at: {}, {})", node.id, node.data.label, node.node_type.as_ref(), node.position.x, node.position.y));
    }
    lines.push(String::new());

    lines.push("--- Edges ---".to_string());
    for edge in snapshot.edges() {
        let condition = edge.condition.as_deref().map(|c| format!(" if {}", c)).unwrap_or_default();
        lines.push(format!("{} --[{}]--> {} (id: {}){}", edge.source, edge.source_handle(), edge.target, edge.id, condition));
    }
    lines.push(String::new());

    lines.push("--- Graph Structure ---".to_string());
    for node in snapshot.nodes() {
        let Some(idx) = indexed.index.get(node.id.as_str()).copied() else {
            continue;
        };
        // later duplicates of an id are not part of the graph
        if !std::ptr::eq(graph[idx], node) {
            continue;
        }
        let mut outgoing: Vec<String> = graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| format!("{}({})", graph[e.target()].id, e.weight().source_handle()))
            .collect();
        // petgraph iterates edges newest first
        outgoing.reverse();

        if outgoing.is_empty() {
            lines.push(format!("{} -> (end)", node.id));
        } else {
            lines.push(format!("{} -> {}", node.id, outgoing.join(", ")));
        }
    }

    if !issues.is_empty() {
        lines.push(String::new());
        lines.push("--- Issues ---".to_string());
        lines.extend(issues.iter().map(|i| i.to_string()));
    }

    lines.join("\n")
}
