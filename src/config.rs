//! Configuration for [`DocumentAnalyzer`](crate::analyzer::DocumentAnalyzer).
//!
//! ```
//! use docsift::config::{AnalyzerConfig, EmptyQueryPolicy, HistoryMode};
//!
//! let config = AnalyzerConfig::builder()
//!     .history_mode(HistoryMode::Restorative)
//!     .empty_query(EmptyQueryPolicy::Degenerate)
//!     .max_history(16)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.history_mode, HistoryMode::Restorative);
//! assert_eq!(config.max_history, Some(16));
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DocsiftError, Result};

/// How undo and redo move between snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryMode {
    /// Undo re-captures the current state and restores it, leaving the data
    /// unchanged; redo pops the state it has just pushed. Every analysis also
    /// pushes the previous state onto the redo stack.
    #[default]
    AsBuilt,
    /// Undo returns to the state before the most recent analysis and redo
    /// moves forward again. A new analysis discards the redo stack.
    Restorative,
}

/// What `find_word` does with a query that is empty or only whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyQueryPolicy {
    /// Report not found with a count of zero.
    #[default]
    NotFound,
    /// Run the containment test as is. The empty string is contained in every
    /// word, so the root matches and every token is counted.
    Degenerate,
}

/// Analyzer settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Undo/redo semantics
    pub history_mode: HistoryMode,

    /// Handling of blank search queries
    pub empty_query: EmptyQueryPolicy,

    /// Maximum entries kept on each history stack; oldest are dropped first.
    /// `None` keeps everything.
    pub max_history: Option<usize>,
}

impl AnalyzerConfig {
    /// Create a builder starting from the defaults.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check the settings for consistency.
    pub fn validate(&self) -> Result<()> {
        if self.max_history == Some(0) {
            return Err(DocsiftError::config(
                "max_history must be at least 1 (omit it for unbounded history)",
            ));
        }
        Ok(())
    }
}

/// Builder for [`AnalyzerConfig`].
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Set the undo/redo semantics.
    pub fn history_mode(mut self, mode: HistoryMode) -> Self {
        self.config.history_mode = mode;
        self
    }

    /// Set the blank query handling.
    pub fn empty_query(mut self, policy: EmptyQueryPolicy) -> Self {
        self.config.empty_query = policy;
        self
    }

    /// Cap each history stack at `limit` entries.
    pub fn max_history(mut self, limit: usize) -> Self {
        self.config.max_history = Some(limit);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<AnalyzerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
