use std::sync::{
    Arc, RwLock,
    atomic::{AtomicU64, Ordering},
};

use crate::{ShareLock, canvas::Selection, events::CanvasEvent};

macro_rules! dispatch_event {
    ($handles:expr, $($item:expr), +) => {
        for (_, handle) in $handles.iter() {
            (handle)($($item),+);
        }
    };
}

pub type CanvasEventHandle = Arc<dyn Fn(&CanvasEvent) + Send + Sync>;

/// Token returned by [`Channel::subscribe`], used to unsubscribe.
pub type SubscriptionId = u64;

/// Observer registry shared by the graph store and the history store.
///
/// Cloning a channel shares the handler list, so one subscription sees events
/// from every store the channel was handed to.
#[derive(Clone, Default)]
pub struct Channel {
    handlers: ShareLock<Vec<(SubscriptionId, CanvasEventHandle)>>,
    next_id: Arc<AtomicU64>,
}

impl std::fmt::Debug for Channel {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("Channel").field("handlers", &self.len()).finish()
    }
}

impl Channel {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register a handler for every event.
    pub fn subscribe(
        &self,
        f: impl Fn(&CanvasEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.handlers.write().unwrap_or_else(|e| e.into_inner()).push((id, Arc::new(f)));
        id
    }

    /// Register a handler for node and edge collection changes.
    pub fn on_graph(
        &self,
        f: impl Fn(&CanvasEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subscribe(move |e| {
            if e.is_graph() {
                f(e);
            }
        })
    }

    /// Register a handler for selection changes.
    pub fn on_selection(
        &self,
        f: impl Fn(&Selection) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subscribe(move |e| {
            if let CanvasEvent::SelectionChanged(selection) = e {
                f(selection);
            }
        })
    }

    /// Register a handler for undo/redo availability, called as `f(can_undo, can_redo)`.
    pub fn on_history(
        &self,
        f: impl Fn(bool, bool) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subscribe(move |e| {
            if let CanvasEvent::History {
                can_undo,
                can_redo,
            } = e
            {
                f(*can_undo, *can_redo);
            }
        })
    }

    /// Remove a handler. Returns false if the id was not subscribed.
    pub fn unsubscribe(
        &self,
        id: SubscriptionId,
    ) -> bool {
        let mut handlers = self.handlers.write().unwrap_or_else(|e| e.into_inner());
        let before = handlers.len();
        handlers.retain(|(sid, _)| *sid != id);
        handlers.len() != before
    }

    pub fn emit(
        &self,
        event: &CanvasEvent,
    ) {
        // handlers may subscribe while being dispatched, so release the lock first
        let handlers = self.handlers.read().unwrap_or_else(|e| e.into_inner()).clone();
        dispatch_event!(handlers, event);
    }

    pub fn len(&self) -> usize {
        self.handlers.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
