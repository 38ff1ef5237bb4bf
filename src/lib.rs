//! # Kaizen Canvas
//!
//! In-memory state model behind the pipeline editor: a directed graph of
//! typed nodes (agents, routers, supervisors, inputs, outputs, ...) joined by
//! edges, with interactive change sets, derived selection and linear
//! undo/redo.
//!
//! ## Core Features
//!
//! - **Graph Store**: lenient mutations that never leave dangling edges behind
//! - **History Store**: bounded undo/redo over immutable snapshots, decoupled from the graph
//! - **Editor**: one editing session wiring the two stores together
//! - **Pipeline records**: translation to and from the backend's node/connection shape
//! - **Analysis**: validation and a readable dump of a graph
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kaizen_canvas::{CanvasBuilder, Connection, NodeType, PipelineModel, Position};
//!
//! let mut editor = CanvasBuilder::new().build()?;
//! editor.load_pipeline(&PipelineModel::from_json(json_str)?);
//!
//! let agent = editor.create_node(NodeType::Agent, Position::new(240.0, 80.0));
//! editor.connect(Connection::new("input", agent));
//! editor.undo();
//!
//! let record = editor.to_pipeline("pipeline-1", "Support triage");
//! ```

pub mod analysis;
mod builder;
pub mod canvas;
mod config;
mod editor;
mod error;
pub mod events;
mod history;
mod model;
mod utils;

use std::sync::{Arc, RwLock};

pub use builder::CanvasBuilder;
pub use canvas::{Connection, Edge, EdgeChange, EdgeId, GraphStore, Node, NodeChange, NodeData, NodeDataPatch, NodeId, NodeType, Position, Selection};
pub use config::{CanvasConfig, ConnectConfig, DuplicatePolicy, HistoryConfig, MAX_HISTORY_SIZE};
pub use editor::Editor;
pub use error::CanvasError;
pub use events::{CanvasEvent, Channel, SubscriptionId};
pub use history::{GraphSnapshot, HistoryStore};
pub use model::*;

/// Result type alias for canvas operations.
pub type Result<T> = std::result::Result<T, CanvasError>;

/// Shared lock wrapper using Arc<RwLock<T>>.
pub(crate) type ShareLock<T> = Arc<RwLock<T>>;
