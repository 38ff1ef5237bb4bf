pub mod changes;
pub mod edge;
pub mod node;
pub mod registry;
pub mod selection;
mod store;

pub use changes::{EdgeChange, NodeChange};
pub use edge::{Connection, DEFAULT_SOURCE_HANDLE, DEFAULT_TARGET_HANDLE, Edge, EdgeId};
pub use node::{Node, NodeData, NodeDataPatch, NodeId, NodeType, Position};
pub use registry::NodeTypeSpec;
pub use selection::Selection;
pub use store::GraphStore;
