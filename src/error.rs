//! Error types for the canvas state model.
//!
//! Interactive graph mutations never fail; they treat unknown ids as no-ops.
//! `CanvasError` covers the fallible surfaces around them: configuration,
//! config file I/O, pipeline record parsing and connection-rule checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all canvas operations.
#[derive(Deserialize, Serialize, Error, Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// Configuration parsing or loading errors.
    #[error("{0}")]
    Config(String),

    /// Data conversion errors (JSON).
    #[error("{0}")]
    Convert(String),

    /// Pipeline record errors.
    #[error("{0}")]
    Pipeline(String),

    /// A connection request that violates a node type's handle rules.
    #[error("{0}")]
    Connection(String),

    /// I/O operation errors.
    #[error("{0}")]
    IoError(String),
}

impl From<std::io::Error> for CanvasError {
    fn from(error: std::io::Error) -> Self {
        CanvasError::IoError(error.to_string())
    }
}

impl From<serde_json::Error> for CanvasError {
    fn from(error: serde_json::Error) -> Self {
        CanvasError::Convert(error.to_string())
    }
}

impl From<toml::de::Error> for CanvasError {
    fn from(error: toml::de::Error) -> Self {
        CanvasError::Config(error.to_string())
    }
}
