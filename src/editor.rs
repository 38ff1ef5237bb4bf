//! Editing session - the main entry point of the crate.
//!
//! The editor owns one graph store and one history store and is the only
//! place where the two meet. Structural edits record the pre-edit snapshot
//! before they are applied; undo and redo hand the current snapshot to the
//! history and restore whatever comes back.

use tracing::trace;

use crate::{
    CanvasConfig, GraphSnapshot,
    canvas::{Connection, Edge, EdgeChange, EdgeId, GraphStore, Node, NodeChange, NodeDataPatch, NodeId, NodeType, Position, Selection},
    events::{CanvasEvent, Channel, SubscriptionId},
    history::HistoryStore,
    model::PipelineModel,
    utils,
};

/// One pipeline editing session.
///
/// # Example
///
/// ```rust,ignore
/// let mut editor = CanvasBuilder::new().build()?;
/// editor.load_pipeline(&PipelineModel::from_json(json_str)?);
///
/// let id = editor.create_node(NodeType::Agent, Position::new(120.0, 40.0));
/// editor.connect(Connection::new("input", id));
/// editor.undo();
///
/// let record = editor.to_pipeline("pipeline-1", "Support triage");
/// ```
#[derive(Debug)]
pub struct Editor {
    store: GraphStore,
    history: HistoryStore,
    channel: Channel,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new_with_config(&CanvasConfig::default())
    }
}

impl Editor {
    /// Creates an editor whose stores publish on a shared channel.
    pub fn new_with_config(config: &CanvasConfig) -> Self {
        let channel = Channel::new();
        Self {
            store: GraphStore::with_config(config, channel.clone()),
            history: HistoryStore::with_channel(config.history.capacity, channel.clone()),
            channel,
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Direct store access. Mutations made here are not recorded in history.
    pub fn store_mut(&mut self) -> &mut GraphStore {
        &mut self.store
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn nodes(&self) -> &[Node] {
        self.store.nodes()
    }

    pub fn edges(&self) -> &[Edge] {
        self.store.edges()
    }

    pub fn selection(&self) -> Selection {
        self.store.selection()
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        self.store.snapshot()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Channel shared by both stores, for filtered subscriptions.
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn subscribe(
        &self,
        f: impl Fn(&CanvasEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.channel.subscribe(f)
    }

    pub fn unsubscribe(
        &self,
        id: SubscriptionId,
    ) -> bool {
        self.channel.unsubscribe(id)
    }

    /// Replace the graph and start with an empty history.
    pub fn load(
        &mut self,
        snapshot: &GraphSnapshot,
    ) {
        trace!("editor::load(nodes: {}, edges: {})", snapshot.nodes().len(), snapshot.edges().len());
        self.store.restore(snapshot);
        self.history.clear_history();
    }

    pub fn load_pipeline(
        &mut self,
        pipeline: &PipelineModel,
    ) {
        self.load(&GraphSnapshot::from(pipeline));
    }

    /// Export the current graph for saving.
    pub fn to_pipeline(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> PipelineModel {
        PipelineModel::from_snapshot(id, name, &self.store.snapshot())
    }

    /// Record the current graph as an undo point.
    pub fn checkpoint(&mut self) {
        self.history.push_state(self.store.snapshot());
    }

    /// Restore the state before the last recorded edit.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo_from(self.store.snapshot()) else {
            return false;
        };
        self.store.restore(&snapshot);
        true
    }

    /// Re-apply the last undone edit.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo_from(self.store.snapshot()) else {
            return false;
        };
        self.store.restore(&snapshot);
        true
    }

    pub fn add_node(
        &mut self,
        node: Node,
    ) -> bool {
        self.record(|store| store.add_node(node))
    }

    /// Palette drop: create a node with a generated id and the type's default label.
    pub fn create_node(
        &mut self,
        node_type: NodeType,
        position: Position,
    ) -> NodeId {
        let id = format!("{}-{}", node_type.as_ref(), utils::shortid());
        self.add_node(Node::new(id.clone(), node_type, position));
        id
    }

    pub fn update_node(
        &mut self,
        id: &str,
        patch: NodeDataPatch,
    ) -> bool {
        self.record(|store| store.update_node(id, patch))
    }

    pub fn remove_node(
        &mut self,
        id: &str,
    ) -> bool {
        self.record(|store| store.remove_node(id))
    }

    pub fn add_edge(
        &mut self,
        edge: Edge,
    ) -> bool {
        self.record(|store| store.add_edge(edge))
    }

    pub fn remove_edge(
        &mut self,
        id: &str,
    ) -> bool {
        self.record(|store| store.remove_edge(id))
    }

    pub fn connect(
        &mut self,
        connection: Connection,
    ) -> Option<EdgeId> {
        let before = self.store.snapshot();
        let id = self.store.on_connect(connection)?;
        self.history.push_state(before);
        Some(id)
    }

    /// Delete key: remove the selected edges and nodes as one undo step.
    pub fn delete_selection(&mut self) -> bool {
        self.record(|store| store.remove_selected())
    }

    /// Apply one interaction frame of node changes.
    ///
    /// Structural changes record an undo point. A drag records one when it
    /// starts, so the whole drag undoes in one step; the frames that follow
    /// and selection toggles are not recorded.
    pub fn apply_node_changes(
        &mut self,
        changes: Vec<NodeChange>,
    ) -> bool {
        let recorded = changes.iter().any(|c| match c {
            NodeChange::Position {
                id,
                ..
            } => self.store.node(id).is_some_and(|n| !n.dragging),
            NodeChange::Translate {
                id,
                ..
            } => self.store.node(id).is_some(),
            NodeChange::Select { .. } => false,
            _ => c.is_structural(),
        });

        if recorded {
            self.record(|store| store.apply_node_changes(changes))
        } else {
            self.store.apply_node_changes(changes)
        }
    }

    pub fn apply_edge_changes(
        &mut self,
        changes: Vec<EdgeChange>,
    ) -> bool {
        if changes.iter().any(|c| c.is_structural()) {
            self.record(|store| store.apply_edge_changes(changes))
        } else {
            self.store.apply_edge_changes(changes)
        }
    }

    /// Run a store mutation and record the prior graph if it changed more than selection flags.
    fn record(
        &mut self,
        f: impl FnOnce(&mut GraphStore) -> bool,
    ) -> bool {
        let before = self.store.snapshot();
        let changed = f(&mut self.store);
        if changed && !same_beyond_selection(&before, &self.store.snapshot()) {
            self.history.push_state(before);
        }
        changed
    }
}

fn same_beyond_selection(
    a: &GraphSnapshot,
    b: &GraphSnapshot,
) -> bool {
    a.nodes().len() == b.nodes().len()
        && a.edges().len() == b.edges().len()
        && a.nodes().iter().zip(b.nodes()).all(|(x, y)| {
            Node {
                selected: y.selected,
                ..x.clone()
            } == *y
        })
        && a.edges().iter().zip(b.edges()).all(|(x, y)| {
            Edge {
                selected: y.selected,
                ..x.clone()
            } == *y
        })
}
