use std::{fs, path::Path};

use serde::Deserialize;

use crate::{CanvasError, Result};

/// Default number of snapshots kept in the undo stack.
pub const MAX_HISTORY_SIZE: usize = 100;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CanvasConfig {
    /// history config
    #[serde(default)]
    pub history: HistoryConfig,
    /// connect gesture config
    #[serde(default)]
    pub connect: ConnectConfig,
    /// what to do when a node or edge id is added twice
    #[serde(default)]
    pub duplicate_ids: DuplicatePolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// maximum number of undo snapshots, oldest are evicted first
    pub capacity: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectConfig {
    /// reject connections that violate the node type handle rules
    #[serde(default)]
    pub enforce_handle_rules: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DuplicatePolicy {
    /// keep the existing entry and ignore the new one
    #[default]
    Reject,
    /// replace the existing entry in place
    Replace,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_HISTORY_SIZE,
        }
    }
}

impl CanvasConfig {
    pub fn create<T: AsRef<Path>>(path: T) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref())?;

        Self::load_from_str(data.as_str())
    }

    pub fn load_from_str(toml_str: &str) -> Result<Self> {
        let config = toml::from_str::<CanvasConfig>(toml_str)?;
        if config.history.capacity == 0 {
            return Err(CanvasError::Config("history capacity must be greater than 0".into()));
        }
        Ok(config)
    }
}
