//! Events published by the canvas stores.
//!
//! Stores publish an event after every effective mutation so that views can
//! re-render without polling. Handlers run synchronously, in subscription order.

mod channel;

pub use channel::{CanvasEventHandle, Channel, SubscriptionId};

use crate::canvas::Selection;

/// Notification emitted after a store changed.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// The node collection changed. Carries the new node count.
    NodesChanged(usize),
    /// The edge collection changed. Carries the new edge count.
    EdgesChanged(usize),
    /// The derived selection differs from the one before the mutation.
    SelectionChanged(Selection),
    /// Undo/redo availability after a history operation.
    History {
        can_undo: bool,
        can_redo: bool,
    },
}

impl CanvasEvent {
    pub fn is_graph(&self) -> bool {
        matches!(self, CanvasEvent::NodesChanged(_) | CanvasEvent::EdgesChanged(_))
    }
}
