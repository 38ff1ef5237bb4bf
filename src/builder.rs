use crate::{CanvasConfig, CanvasError, DuplicatePolicy, Editor, Result};

#[derive(Default)]
pub struct CanvasBuilder {
    config: CanvasConfig,
}

impl CanvasBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(
        mut self,
        config: CanvasConfig,
    ) -> Self {
        self.config = config;
        self
    }

    pub fn history_capacity(
        mut self,
        n: usize,
    ) -> Self {
        self.config.history.capacity = n;
        self
    }

    pub fn enforce_handle_rules(
        mut self,
        enforce: bool,
    ) -> Self {
        self.config.connect.enforce_handle_rules = enforce;
        self
    }

    pub fn duplicate_ids(
        mut self,
        policy: DuplicatePolicy,
    ) -> Self {
        self.config.duplicate_ids = policy;
        self
    }

    pub fn build(&self) -> Result<Editor> {
        if self.config.history.capacity == 0 {
            return Err(CanvasError::Config("history capacity must be greater than 0".into()));
        }
        Ok(Editor::new_with_config(&self.config))
    }
}
