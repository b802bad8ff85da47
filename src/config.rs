use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};
use tokio::fs;

/// A task placed on the board when it is first built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTask {
    /// Name of the column the task starts in
    pub column: String,
    pub content: String,
}

impl SeedTask {
    pub fn new(column: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            content: content.into(),
        }
    }
}

/// Board configuration
///
/// Columns are listed in display order. `inbox` names the column new tasks
/// land in; when absent the first column is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub columns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbox: Option<String>,
    #[serde(default)]
    pub seed_tasks: Vec<SeedTask>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                "Requested".to_string(),
                "Todo".to_string(),
                "In Progress".to_string(),
                "Done".to_string(),
            ],
            inbox: Some("Requested".to_string()),
            seed_tasks: vec![
                SeedTask::new("Requested", "First task"),
                SeedTask::new("Requested", "Second task"),
            ],
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).await?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            columns = config.columns.len(),
            "Loaded board config"
        );
        Ok(config)
    }

    /// Name of the column new tasks are appended to
    pub fn inbox_name(&self) -> Option<&str> {
        self.inbox
            .as_deref()
            .or_else(|| self.columns.first().map(String::as_str))
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(BoardError::ConfigError(
                "board needs at least one column".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.columns {
            if name.trim().is_empty() {
                return Err(BoardError::ConfigError(
                    "column names must not be empty".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(BoardError::ConfigError(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
        }

        if let Some(inbox) = &self.inbox {
            if !seen.contains(inbox.as_str()) {
                return Err(BoardError::ConfigError(format!(
                    "inbox '{}' does not name a column",
                    inbox
                )));
            }
        }

        for seed in &self.seed_tasks {
            if !seen.contains(seed.column.as_str()) {
                return Err(BoardError::ConfigError(format!(
                    "seed task '{}' targets unknown column '{}'",
                    seed.content, seed.column
                )));
            }
        }

        Ok(())
    }
}
