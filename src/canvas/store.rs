//! Canonical node and edge collections for one editing session.
//!
//! Every mutation is lenient: unknown ids are ignored rather than reported,
//! because interactive events may arrive out of order (a node removed while a
//! drag frame for it is still in flight). The one invariant every mutation
//! keeps is referential integrity: removing a node removes its edges in the
//! same step.

use tracing::{debug, trace, warn};

use crate::{
    canvas::{
        changes::{EdgeChange, NodeChange},
        edge::{Connection, DEFAULT_SOURCE_HANDLE, DEFAULT_TARGET_HANDLE, Edge, EdgeId},
        node::{Node, NodeDataPatch},
        registry,
        selection::Selection,
    },
    config::{CanvasConfig, DuplicatePolicy},
    events::{CanvasEvent, Channel},
    history::GraphSnapshot,
    utils,
};

/// Owner of the current graph.
#[derive(Debug)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    duplicate_ids: DuplicatePolicy,
    enforce_handle_rules: bool,
    /// disambiguates edge ids synthesized within the same millisecond
    edge_seq: u64,
    channel: Channel,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    pub fn new() -> Self {
        Self::with_config(&CanvasConfig::default(), Channel::new())
    }

    pub fn with_config(
        config: &CanvasConfig,
        channel: Channel,
    ) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            duplicate_ids: config.duplicate_ids,
            enforce_handle_rules: config.connect.enforce_handle_rules,
            edge_seq: 0,
            channel,
        }
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(
        &self,
        id: &str,
    ) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(
        &self,
        id: &str,
    ) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Selected ids, recomputed from the node and edge flags.
    pub fn selection(&self) -> Selection {
        Selection::derive(&self.nodes, &self.edges)
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::new(self.nodes.clone(), self.edges.clone())
    }

    /// Replace all nodes. No validation; edges are left as they are.
    pub fn set_nodes(
        &mut self,
        nodes: Vec<Node>,
    ) {
        trace!("store::set_nodes({})", nodes.len());
        let before = self.selection();
        self.nodes = nodes;
        self.publish(true, false, &before);
    }

    /// Replace all edges. Dangling edges are accepted.
    pub fn set_edges(
        &mut self,
        edges: Vec<Edge>,
    ) {
        trace!("store::set_edges({})", edges.len());
        let before = self.selection();
        self.edges = edges;
        self.publish(false, true, &before);
    }

    /// Replace the whole graph with a snapshot.
    pub fn restore(
        &mut self,
        snapshot: &GraphSnapshot,
    ) {
        trace!("store::restore(nodes: {}, edges: {})", snapshot.nodes().len(), snapshot.edges().len());
        let before = self.selection();
        self.nodes = snapshot.nodes().to_vec();
        self.edges = snapshot.edges().to_vec();
        self.publish(true, true, &before);
    }

    pub fn clear(&mut self) {
        self.restore(&GraphSnapshot::default());
    }

    /// Append a node. Returns false when the id already exists and the
    /// duplicate policy is `Reject`.
    pub fn add_node(
        &mut self,
        node: Node,
    ) -> bool {
        trace!("store::add_node({})", node.id);
        let before = self.selection();
        let changed = self.insert_node(node);
        if changed {
            self.publish(true, false, &before);
        }
        changed
    }

    /// Merge `patch` into the node's data. Position and type are untouched.
    pub fn update_node(
        &mut self,
        id: &str,
        patch: NodeDataPatch,
    ) -> bool {
        trace!("store::update_node({})", id);
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        if !node.data.merge(patch) {
            return false;
        }
        self.channel.emit(&CanvasEvent::NodesChanged(self.nodes.len()));
        true
    }

    /// Remove a node together with every edge attached to it.
    pub fn remove_node(
        &mut self,
        id: &str,
    ) -> bool {
        trace!("store::remove_node({})", id);
        let before = self.selection();
        let Some(detached) = self.detach_node(id) else {
            return false;
        };
        self.publish(true, detached > 0, &before);
        true
    }

    /// Append an edge. Endpoints are not checked.
    pub fn add_edge(
        &mut self,
        edge: Edge,
    ) -> bool {
        trace!("store::add_edge({}: {} -> {})", edge.id, edge.source, edge.target);
        let before = self.selection();
        let changed = self.insert_edge(edge);
        if changed {
            self.publish(false, true, &before);
        }
        changed
    }

    pub fn remove_edge(
        &mut self,
        id: &str,
    ) -> bool {
        trace!("store::remove_edge({})", id);
        let before = self.selection();
        let Some(idx) = self.edges.iter().position(|e| e.id == id) else {
            return false;
        };
        self.edges.remove(idx);
        self.publish(false, true, &before);
        true
    }

    /// Apply one frame of node changes in order. Returns whether anything changed.
    pub fn apply_node_changes(
        &mut self,
        changes: impl IntoIterator<Item = NodeChange>,
    ) -> bool {
        let before = self.selection();
        let mut nodes_changed = false;
        let mut edges_changed = false;

        for change in changes {
            match change {
                NodeChange::Add {
                    item,
                } => nodes_changed |= self.insert_node(item),
                NodeChange::Remove {
                    id,
                } => {
                    if let Some(detached) = self.detach_node(&id) {
                        nodes_changed = true;
                        edges_changed |= detached > 0;
                    }
                }
                NodeChange::Replace {
                    item,
                } => {
                    if let Some(node) = self.nodes.iter_mut().find(|n| n.id == item.id) {
                        nodes_changed |= *node != item;
                        *node = item;
                    }
                }
                NodeChange::Position {
                    id,
                    position,
                    dragging,
                } => {
                    if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
                        let position = position.unwrap_or(node.position);
                        nodes_changed |= node.position != position || node.dragging != dragging;
                        node.position = position;
                        node.dragging = dragging;
                    }
                }
                NodeChange::Translate {
                    id,
                    dx,
                    dy,
                } => {
                    if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
                        let position = node.position.translate(dx, dy);
                        nodes_changed |= node.position != position;
                        node.position = position;
                    }
                }
                NodeChange::Select {
                    id,
                    selected,
                } => {
                    if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
                        nodes_changed |= node.selected != selected;
                        node.selected = selected;
                    }
                }
            }
        }

        self.publish(nodes_changed, edges_changed, &before);
        nodes_changed || edges_changed
    }

    /// Apply one frame of edge changes in order. Returns whether anything changed.
    pub fn apply_edge_changes(
        &mut self,
        changes: impl IntoIterator<Item = EdgeChange>,
    ) -> bool {
        let before = self.selection();
        let mut changed = false;

        for change in changes {
            match change {
                EdgeChange::Add {
                    item,
                } => changed |= self.insert_edge(item),
                EdgeChange::Remove {
                    id,
                } => {
                    let len = self.edges.len();
                    self.edges.retain(|e| e.id != id);
                    changed |= self.edges.len() != len;
                }
                EdgeChange::Replace {
                    item,
                } => {
                    if let Some(edge) = self.edges.iter_mut().find(|e| e.id == item.id) {
                        changed |= *edge != item;
                        *edge = item;
                    }
                }
                EdgeChange::Select {
                    id,
                    selected,
                } => {
                    if let Some(edge) = self.edges.iter_mut().find(|e| e.id == id) {
                        changed |= edge.selected != selected;
                        edge.selected = selected;
                    }
                }
            }
        }

        self.publish(false, changed, &before);
        changed
    }

    /// Turn a completed connect gesture into an edge.
    ///
    /// Missing handles default to `output`/`input`. Returns the new edge id,
    /// or `None` when the request is incomplete or rejected by the handle rules.
    pub fn on_connect(
        &mut self,
        connection: Connection,
    ) -> Option<EdgeId> {
        debug_assert!(connection.source.is_some() && connection.target.is_some(), "connection requires both source and target");
        let (Some(source), Some(target)) = (connection.source, connection.target) else {
            return None;
        };
        let source_handle = connection.source_handle.unwrap_or_else(|| DEFAULT_SOURCE_HANDLE.to_string());
        let target_handle = connection.target_handle.unwrap_or_else(|| DEFAULT_TARGET_HANDLE.to_string());

        if self.enforce_handle_rules {
            let (Some(s), Some(t)) = (self.node(&source), self.node(&target)) else {
                debug!("connection {} -> {} rejected: endpoint not found", source, target);
                return None;
            };
            if let Err(e) = registry::check_connection(s, t, &source_handle, &target_handle) {
                debug!("connection {} -> {} rejected: {}", source, target, e);
                return None;
            }
        }

        self.edge_seq += 1;
        let id = format!("e-{}-{}-{}-{}", source, target, utils::time::time_millis(), self.edge_seq);
        let edge = Edge::new(id.clone(), source, target).with_handles(source_handle, target_handle);

        self.add_edge(edge).then_some(id)
    }

    /// Remove every selected edge, then every selected node with its edges.
    pub fn remove_selected(&mut self) -> bool {
        let before = self.selection();
        if before.is_empty() {
            return false;
        }
        trace!("store::remove_selected(nodes: {}, edges: {})", before.nodes.len(), before.edges.len());

        let edge_count = self.edges.len();
        self.edges.retain(|e| !e.selected);
        let mut edges_changed = self.edges.len() != edge_count;
        for id in before.nodes.iter() {
            if let Some(detached) = self.detach_node(id) {
                edges_changed |= detached > 0;
            }
        }

        self.publish(!before.nodes.is_empty(), edges_changed, &before);
        true
    }

    pub fn clear_selection(&mut self) {
        let before = self.selection();
        if before.is_empty() {
            return;
        }
        self.nodes.iter_mut().for_each(|n| n.selected = false);
        self.edges.iter_mut().for_each(|e| e.selected = false);
        self.publish(!before.nodes.is_empty(), !before.edges.is_empty(), &before);
    }

    fn insert_node(
        &mut self,
        node: Node,
    ) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == node.id) {
            None => self.nodes.push(node),
            Some(existing) => match self.duplicate_ids {
                DuplicatePolicy::Reject => {
                    warn!("duplicate node id {}, ignored", node.id);
                    return false;
                }
                DuplicatePolicy::Replace => *existing = node,
            },
        }
        true
    }

    fn insert_edge(
        &mut self,
        edge: Edge,
    ) -> bool {
        match self.edges.iter_mut().find(|e| e.id == edge.id) {
            None => self.edges.push(edge),
            Some(existing) => match self.duplicate_ids {
                DuplicatePolicy::Reject => {
                    warn!("duplicate edge id {}, ignored", edge.id);
                    return false;
                }
                DuplicatePolicy::Replace => *existing = edge,
            },
        }
        true
    }

    /// Remove a node and its edges without publishing. Returns the number of
    /// edges removed, or `None` if the node does not exist.
    fn detach_node(
        &mut self,
        id: &str,
    ) -> Option<usize> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        self.nodes.remove(idx);
        let len = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        Some(len - self.edges.len())
    }

    fn publish(
        &self,
        nodes: bool,
        edges: bool,
        before: &Selection,
    ) {
        if nodes {
            self.channel.emit(&CanvasEvent::NodesChanged(self.nodes.len()));
        }
        if edges {
            self.channel.emit(&CanvasEvent::EdgesChanged(self.edges.len()));
        }
        let after = self.selection();
        if after != *before {
            self.channel.emit(&CanvasEvent::SelectionChanged(after));
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;
    use crate::canvas::{NodeType, Position};

    fn node(id: &str) -> Node {
        Node::new(id, NodeType::Agent, Position::default())
    }

    fn typed(
        id: &str,
        node_type: NodeType,
    ) -> Node {
        Node::new(id, node_type, Position::default())
    }

    fn store_with(
        ids: &[&str],
        edges: &[(&str, &str, &str)],
    ) -> GraphStore {
        let mut store = GraphStore::new();
        store.set_nodes(ids.iter().map(|id| node(id)).collect());
        store.set_edges(edges.iter().map(|(id, s, t)| Edge::new(*id, *s, *t)).collect());
        store
    }

    fn ids<T>(
        items: &[T],
        f: impl Fn(&T) -> &str,
    ) -> Vec<String> {
        items.iter().map(|i| f(i).to_string()).collect()
    }

    #[test]
    fn test_remove_node_cascades_edges() {
        let mut store = store_with(&["n1", "n2"], &[("e1", "n1", "n2")]);

        assert!(store.remove_node("n1"));

        assert_eq!(ids(store.nodes(), |n| n.id.as_str()), vec!["n2"]);
        assert!(store.edges().is_empty());
    }

    #[test]
    fn test_remove_node_keeps_unrelated_edges() {
        let mut store = store_with(&["a", "b", "c"], &[("e1", "a", "b"), ("e2", "b", "c"), ("e3", "c", "a")]);

        store.remove_node("a");

        assert_eq!(ids(store.edges(), |e| e.id.as_str()), vec!["e2"]);
    }

    #[test]
    fn test_removal_is_idempotent() {
        let mut store = store_with(&["a", "b", "c"], &[("e1", "a", "b"), ("e2", "b", "c")]);

        assert!(store.remove_node("a"));
        let once = store.snapshot();
        assert!(!store.remove_node("a"));
        assert_eq!(store.snapshot(), once);

        assert!(store.remove_edge("e2"));
        let once = store.snapshot();
        assert!(!store.remove_edge("e2"));
        assert_eq!(store.snapshot(), once);
    }

    #[test]
    fn test_no_dangling_edges_after_random_mutations() {
        let mut store = GraphStore::new();
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move |m: u64| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed % m
        };

        for step in 0..500 {
            let a = format!("n{}", next(12));
            let b = format!("n{}", next(12));
            match next(3) {
                0 => {
                    store.add_node(node(&a));
                }
                1 => {
                    // only connect rendered nodes, like the connect gesture
                    if store.node(&a).is_some() && store.node(&b).is_some() {
                        store.add_edge(Edge::new(format!("e{}", step), a, b));
                    }
                }
                _ => {
                    store.remove_node(&a);
                    assert!(store.edges().iter().all(|e| !e.touches(&a)));
                }
            }
            for e in store.edges() {
                assert!(store.node(&e.source).is_some() && store.node(&e.target).is_some());
            }
        }
    }

    #[test]
    fn test_set_edges_tolerates_dangling() {
        let store = store_with(&["a"], &[("e1", "a", "ghost")]);
        assert_eq!(store.edges().len(), 1);
    }

    #[test]
    fn test_duplicate_node_rejected_by_default() {
        let mut store = GraphStore::new();
        assert!(store.add_node(node("a").with_label("first")));
        assert!(!store.add_node(node("a").with_label("second")));

        assert_eq!(store.nodes().len(), 1);
        assert_eq!(store.node("a").unwrap().data.label, "first");
    }

    #[test]
    fn test_duplicate_node_replaced_in_place() {
        let config = CanvasConfig {
            duplicate_ids: DuplicatePolicy::Replace,
            ..Default::default()
        };
        let mut store = GraphStore::with_config(&config, Channel::new());
        store.add_node(node("a").with_label("first"));
        store.add_node(node("b"));
        assert!(store.add_node(node("a").with_label("second")));

        assert_eq!(ids(store.nodes(), |n| n.id.as_str()), vec!["a", "b"]);
        assert_eq!(store.node("a").unwrap().data.label, "second");

        store.add_edge(Edge::new("e1", "a", "b"));
        assert!(store.add_edge(Edge::new("e1", "b", "a")));
        assert_eq!(store.edges().len(), 1);
        assert_eq!(store.edge("e1").unwrap().source, "b");
    }

    #[test]
    fn test_update_node_merges_data_only() {
        let mut store = GraphStore::new();
        store.add_node(typed("r", NodeType::Router).with_config(json!({"strategy": "intent"}).as_object().unwrap().clone()));

        assert!(store.update_node(
            "r",
            NodeDataPatch {
                label: Some("Triage".into()),
                agent_id: None,
                config: Some(json!({"fallback": "support"}).as_object().unwrap().clone()),
            }
        ));

        let r = store.node("r").unwrap();
        assert_eq!(r.data.label, "Triage");
        assert_eq!(r.node_type, NodeType::Router);
        assert_eq!(r.position, Position::default());
        let config = r.data.config.as_ref().unwrap();
        assert_eq!(config["strategy"], "intent");
        assert_eq!(config["fallback"], "support");

        assert!(!store.update_node("missing", NodeDataPatch::label("x")));
    }

    #[test]
    fn test_connect_synthesizes_distinct_edges() {
        let mut store = store_with(&["A", "B"], &[]);

        let first = store.on_connect(Connection::new("A", "B")).unwrap();
        let second = store.on_connect(Connection::new("A", "B")).unwrap();

        assert_ne!(first, second);
        assert_eq!(store.edges().len(), 2);
        for e in store.edges() {
            assert_eq!(e.source, "A");
            assert_eq!(e.target, "B");
            assert_eq!(e.source_handle.as_deref(), Some("output"));
            assert_eq!(e.target_handle.as_deref(), Some("input"));
        }
    }

    #[test]
    fn test_connect_keeps_named_handles() {
        let mut store = store_with(&["r", "a"], &[]);
        let id = store.on_connect(Connection::new("r", "a").with_source_handle("billing")).unwrap();
        assert_eq!(store.edge(&id).unwrap().source_handle(), "billing");
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "connection requires both source and target"))]
    fn test_connect_without_target() {
        let mut store = store_with(&["A"], &[]);
        let connection = Connection {
            source: Some("A".into()),
            ..Default::default()
        };
        assert!(store.on_connect(connection).is_none());
        assert!(store.edges().is_empty());
    }

    #[test]
    fn test_connect_enforces_handle_rules_when_enabled() {
        let mut config = CanvasConfig::default();
        config.connect.enforce_handle_rules = true;
        let mut store = GraphStore::with_config(&config, Channel::new());
        store.set_nodes(vec![typed("in", NodeType::Input), typed("sup", NodeType::Supervisor), typed("a", NodeType::Agent)]);

        assert!(store.on_connect(Connection::new("a", "in")).is_none());
        assert!(store.on_connect(Connection::new("a", "ghost")).is_none());
        assert!(store.on_connect(Connection::new("a", "sup").with_source_handle("extra")).is_none());
        assert!(store.on_connect(Connection::new("in", "sup")).is_some());
        assert!(store.on_connect(Connection::new("sup", "a").with_source_handle("worker_1")).is_some());
        assert_eq!(store.edges().len(), 2);
    }

    #[test]
    fn test_connect_lenient_by_default() {
        let mut store = store_with(&["a"], &[]);
        store.add_node(typed("in", NodeType::Input));
        assert!(store.on_connect(Connection::new("a", "in")).is_some());
    }

    #[test]
    fn test_apply_node_changes_drag_and_select() {
        let mut store = store_with(&["a", "b"], &[]);

        let changed = store.apply_node_changes(vec![
            NodeChange::Position {
                id: "a".into(),
                position: Some(Position::new(40.0, 10.0)),
                dragging: true,
            },
            NodeChange::Select {
                id: "a".into(),
                selected: true,
            },
            NodeChange::Select {
                id: "ghost".into(),
                selected: true,
            },
        ]);

        assert!(changed);
        let a = store.node("a").unwrap();
        assert_eq!(a.position, Position::new(40.0, 10.0));
        assert!(a.dragging);
        assert_eq!(store.selection().nodes, vec!["a".to_string()]);

        store.apply_node_changes(vec![
            NodeChange::Translate {
                id: "a".into(),
                dx: 5.0,
                dy: -10.0,
            },
            NodeChange::Position {
                id: "a".into(),
                position: None,
                dragging: false,
            },
            NodeChange::Select {
                id: "b".into(),
                selected: true,
            },
            NodeChange::Select {
                id: "a".into(),
                selected: false,
            },
        ]);

        let a = store.node("a").unwrap();
        assert_eq!(a.position, Position::new(45.0, 0.0));
        assert!(!a.dragging);
        assert_eq!(store.selection().nodes, vec!["b".to_string()]);
    }

    #[test]
    fn test_apply_node_changes_remove_cascades() {
        let mut store = store_with(&["a", "b"], &[("e1", "a", "b")]);
        store.apply_node_changes(vec![
            NodeChange::Select {
                id: "a".into(),
                selected: true,
            },
            NodeChange::Remove {
                id: "a".into(),
            },
        ]);

        assert!(store.edges().is_empty());
        assert!(store.selection().is_empty());
    }

    #[test]
    fn test_apply_node_changes_unknown_ids_are_noops() {
        let mut store = store_with(&["a"], &[]);
        let before = store.snapshot();
        let changed = store.apply_node_changes(vec![
            NodeChange::Remove {
                id: "ghost".into(),
            },
            NodeChange::Replace {
                item: node("ghost"),
            },
        ]);
        assert!(!changed);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_unchanged_frames_report_no_change() {
        let channel = Channel::new();
        let seen = Arc::new(Mutex::new(0));
        let s = seen.clone();
        channel.subscribe(move |_| *s.lock().unwrap() += 1);
        let mut store = GraphStore::with_config(&CanvasConfig::default(), channel);
        store.set_nodes(vec![node("a")]);
        store.set_edges(vec![Edge::new("e1", "a", "a")]);
        *seen.lock().unwrap() = 0;

        assert!(!store.apply_node_changes(vec![
            NodeChange::Position {
                id: "a".into(),
                position: None,
                dragging: false,
            },
            NodeChange::Position {
                id: "a".into(),
                position: Some(Position::default()),
                dragging: false,
            },
            NodeChange::Translate {
                id: "a".into(),
                dx: 0.0,
                dy: 0.0,
            },
            NodeChange::Select {
                id: "a".into(),
                selected: false,
            },
            NodeChange::Replace {
                item: node("a"),
            },
        ]));
        assert!(!store.apply_edge_changes(vec![
            EdgeChange::Select {
                id: "e1".into(),
                selected: false,
            },
            EdgeChange::Replace {
                item: Edge::new("e1", "a", "a"),
            },
        ]));
        assert!(!store.update_node("a", NodeDataPatch::default()));
        assert_eq!(*seen.lock().unwrap(), 0);

        // starting a drag in place flips the flag
        assert!(store.apply_node_changes(vec![NodeChange::Position {
            id: "a".into(),
            position: None,
            dragging: true,
        }]));
    }

    #[test]
    fn test_apply_edge_changes() {
        let mut store = store_with(&["a", "b"], &[("e1", "a", "b")]);

        store.apply_edge_changes(vec![
            EdgeChange::Add {
                item: Edge::new("e2", "b", "a"),
            },
            EdgeChange::Select {
                id: "e2".into(),
                selected: true,
            },
            EdgeChange::Replace {
                item: Edge::new("e1", "a", "b").with_label("primary"),
            },
        ]);
        assert_eq!(store.selection().edges, vec!["e2".to_string()]);
        assert_eq!(store.edge("e1").unwrap().label.as_deref(), Some("primary"));

        store.apply_edge_changes(vec![EdgeChange::Remove {
            id: "e2".into(),
        }]);
        assert_eq!(ids(store.edges(), |e| e.id.as_str()), vec!["e1"]);
        assert!(store.selection().is_empty());
    }

    #[test]
    fn test_remove_selected() {
        let mut store = store_with(&["a", "b", "c"], &[("e1", "a", "b"), ("e2", "b", "c")]);
        store.apply_node_changes(vec![NodeChange::Select {
            id: "c".into(),
            selected: true,
        }]);
        store.apply_edge_changes(vec![EdgeChange::Select {
            id: "e1".into(),
            selected: true,
        }]);

        assert!(store.remove_selected());
        assert_eq!(ids(store.nodes(), |n| n.id.as_str()), vec!["a", "b"]);
        assert!(store.edges().is_empty());
        assert!(!store.remove_selected());
    }

    #[test]
    fn test_events_published() {
        let channel = Channel::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        channel.subscribe(move |e| s.lock().unwrap().push(e.clone()));

        let mut store = GraphStore::with_config(&CanvasConfig::default(), channel);
        store.add_node(node("a"));
        store.add_node(node("b"));
        store.add_edge(Edge::new("e1", "a", "b"));
        store.apply_node_changes(vec![NodeChange::Select {
            id: "a".into(),
            selected: true,
        }]);
        store.remove_node("a");
        // unknown id publishes nothing
        store.remove_node("a");

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                CanvasEvent::NodesChanged(1),
                CanvasEvent::NodesChanged(2),
                CanvasEvent::EdgesChanged(1),
                CanvasEvent::NodesChanged(2),
                CanvasEvent::SelectionChanged(Selection {
                    nodes: vec!["a".into()],
                    edges: vec![],
                }),
                CanvasEvent::NodesChanged(1),
                CanvasEvent::EdgesChanged(0),
                CanvasEvent::SelectionChanged(Selection::default()),
            ]
        );
    }
}
