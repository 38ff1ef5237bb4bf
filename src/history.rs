//! Linear undo/redo over complete graph snapshots.
//!
//! The history store only keeps snapshot bookkeeping. It never reads or
//! writes the graph store; callers hand it snapshots and apply whatever it
//! returns. See [`Editor`](crate::Editor) for the usual wiring.

use std::{collections::VecDeque, sync::Arc};

use tracing::trace;

use crate::{
    canvas::{Edge, Node},
    config::MAX_HISTORY_SIZE,
    events::{CanvasEvent, Channel},
};

/// Immutable capture of the full node and edge collections.
///
/// Clones share the underlying slices.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSnapshot {
    nodes: Arc<[Node]>,
    edges: Arc<[Edge]>,
}

impl Default for GraphSnapshot {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl GraphSnapshot {
    pub fn new(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
    ) -> Self {
        Self {
            nodes: nodes.into(),
            edges: edges.into(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(
        &self,
        id: &str,
    ) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Two bounded stacks of snapshots.
///
/// `past` holds the oldest entry at the front; `future` holds the next entry
/// to redo at the back.
#[derive(Debug)]
pub struct HistoryStore {
    past: VecDeque<GraphSnapshot>,
    future: Vec<GraphSnapshot>,
    capacity: usize,
    channel: Channel,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(MAX_HISTORY_SIZE)
    }
}

impl HistoryStore {
    /// Create a history keeping at most `capacity` undo entries (at least one).
    pub fn new(capacity: usize) -> Self {
        Self::with_channel(capacity, Channel::new())
    }

    pub fn with_channel(
        capacity: usize,
        channel: Channel,
    ) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            capacity: capacity.max(1),
            channel,
        }
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a snapshot taken before a mutation. Invalidates every redo entry.
    pub fn push_state(
        &mut self,
        snapshot: GraphSnapshot,
    ) {
        self.past.push_back(snapshot);
        while self.past.len() > self.capacity {
            self.past.pop_front();
        }
        self.future.clear();
        trace!("history::push_state(past: {})", self.past.len());
        self.notify();
    }

    /// Move the latest snapshot from `past` to `future` and return it.
    pub fn undo(&mut self) -> Option<GraphSnapshot> {
        let snapshot = self.past.pop_back()?;
        self.future.push(snapshot.clone());
        trace!("history::undo(past: {}, future: {})", self.past.len(), self.future.len());
        self.notify();
        Some(snapshot)
    }

    /// Move the latest snapshot from `future` to `past` and return it.
    pub fn redo(&mut self) -> Option<GraphSnapshot> {
        let snapshot = self.future.pop()?;
        self.push_past(snapshot.clone());
        trace!("history::redo(past: {}, future: {})", self.past.len(), self.future.len());
        self.notify();
        Some(snapshot)
    }

    /// Pop the latest `past` snapshot and park `current` on the redo stack
    /// instead, so that a later redo returns to `current`.
    pub fn undo_from(
        &mut self,
        current: GraphSnapshot,
    ) -> Option<GraphSnapshot> {
        let snapshot = self.past.pop_back()?;
        self.future.push(current);
        trace!("history::undo_from(past: {}, future: {})", self.past.len(), self.future.len());
        self.notify();
        Some(snapshot)
    }

    /// Counterpart of [`undo_from`](Self::undo_from).
    pub fn redo_from(
        &mut self,
        current: GraphSnapshot,
    ) -> Option<GraphSnapshot> {
        let snapshot = self.future.pop()?;
        self.push_past(current);
        trace!("history::redo_from(past: {}, future: {})", self.past.len(), self.future.len());
        self.notify();
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Undo entries, oldest first.
    pub fn past(&self) -> impl ExactSizeIterator<Item = &GraphSnapshot> {
        self.past.iter()
    }

    pub fn clear_history(&mut self) {
        self.past.clear();
        self.future.clear();
        trace!("history::clear_history");
        self.notify();
    }

    // redo must not exceed capacity either
    fn push_past(
        &mut self,
        snapshot: GraphSnapshot,
    ) {
        self.past.push_back(snapshot);
        if self.past.len() > self.capacity {
            self.past.pop_front();
        }
    }

    fn notify(&self) {
        self.channel.emit(&CanvasEvent::History {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        });
    }
}
