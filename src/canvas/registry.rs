//! Connection handle rules per node type.
//!
//! The store does not enforce these on its own. They are applied by the
//! connect gesture when `enforce_handle_rules` is enabled, and reported by
//! [`analysis::validate`](crate::analysis::validate).

use crate::{
    CanvasError, Result,
    canvas::{
        edge::{DEFAULT_SOURCE_HANDLE, DEFAULT_TARGET_HANDLE},
        node::{Node, NodeType},
    },
};

/// Structural contract of a node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeTypeSpec {
    /// Whether the node has an incoming handle.
    pub accepts_input: bool,
    /// Whether the node may expose several distinctly named output handles.
    pub fan_out: bool,
}

impl NodeType {
    pub fn spec(&self) -> NodeTypeSpec {
        match self {
            NodeType::Input => NodeTypeSpec {
                accepts_input: false,
                fan_out: false,
            },
            NodeType::Supervisor | NodeType::Router => NodeTypeSpec {
                accepts_input: true,
                fan_out: true,
            },
            NodeType::Agent | NodeType::Synthesizer | NodeType::Connector | NodeType::Output => NodeTypeSpec {
                accepts_input: true,
                fan_out: false,
            },
        }
    }
}

/// Check a prospective connection against the handle rules of its endpoints.
pub fn check_connection(
    source: &Node,
    target: &Node,
    source_handle: &str,
    target_handle: &str,
) -> Result<()> {
    let target_spec = target.node_type.spec();
    if !target_spec.accepts_input {
        return Err(CanvasError::Connection(format!("node {} ({}) has no input handle", target.id, target.node_type.as_ref())));
    }
    if target_handle != DEFAULT_TARGET_HANDLE {
        return Err(CanvasError::Connection(format!("node {} has no input handle named '{}'", target.id, target_handle)));
    }

    let source_spec = source.node_type.spec();
    if !source_spec.fan_out && source_handle != DEFAULT_SOURCE_HANDLE {
        return Err(CanvasError::Connection(format!(
            "node {} ({}) has a single output handle, got '{}'",
            source.id,
            source.node_type.as_ref(),
            source_handle
        )));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::canvas::node::Position;

    fn node(
        id: &str,
        node_type: NodeType,
    ) -> Node {
        Node::new(id, node_type, Position::default())
    }

    #[test]
    fn test_only_input_lacks_incoming_handle() {
        for t in NodeType::iter() {
            assert_eq!(t.spec().accepts_input, t != NodeType::Input, "{}", t.as_ref());
        }
    }

    #[test]
    fn test_fan_out_types() {
        let fan_out: Vec<NodeType> = NodeType::iter().filter(|t| t.spec().fan_out).collect();
        assert_eq!(fan_out, vec![NodeType::Supervisor, NodeType::Router]);
    }

    #[test]
    fn test_check_connection_into_input_rejected() {
        let err = check_connection(&node("a", NodeType::Agent), &node("in", NodeType::Input), "output", "input").unwrap_err();
        assert!(matches!(err, CanvasError::Connection(_)));
    }

    #[test]
    fn test_check_connection_named_handles() {
        let router = node("r", NodeType::Router);
        let agent = node("a", NodeType::Agent);

        assert!(check_connection(&router, &agent, "billing", "input").is_ok());
        assert!(check_connection(&agent, &router, "output", "input").is_ok());
        assert!(check_connection(&agent, &router, "secondary", "input").is_err());
        assert!(check_connection(&router, &agent, "billing", "context").is_err());
    }
}
