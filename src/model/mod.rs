mod connection;
mod node;
mod pipeline;

pub use connection::ConnectionModel;
pub use node::NodeModel;
pub use pipeline::PipelineModel;
