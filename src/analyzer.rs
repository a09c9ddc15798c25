//! Document analyzer: the entry point tying counting, lookup and history together.
//!
//! ```
//! use docsift::analyzer::DocumentAnalyzer;
//!
//! let mut analyzer = DocumentAnalyzer::new();
//! analyzer.analyze(["Cats", "category", "dog"]);
//!
//! let result = analyzer.find_word("cat");
//! assert!(result.found());
//! assert_eq!(result.occurrences, 2);
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::fold_case;
use crate::config::{AnalyzerConfig, EmptyQueryPolicy};
use crate::frequency::WordCount;
use crate::history::HistoryManager;
use crate::state::AnalysisState;

/// Outcome of [`DocumentAnalyzer::find_word`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSearch {
    /// The query as given
    pub query: String,
    /// Stored word of the tree node that matched
    pub matched: Option<String>,
    /// Depth of the matching node
    pub depth: Option<usize>,
    /// Document tokens containing the query, counted only when found
    pub occurrences: usize,
}

impl WordSearch {
    fn not_found(query: &str) -> Self {
        WordSearch {
            query: query.to_string(),
            matched: None,
            depth: None,
            occurrences: 0,
        }
    }

    /// Check if the tree search succeeded.
    pub fn found(&self) -> bool {
        self.matched.is_some()
    }
}

/// Analyzes word sequences and keeps an undo/redo history of the results.
#[derive(Debug, Clone, Default)]
pub struct DocumentAnalyzer {
    config: AnalyzerConfig,
    state: AnalysisState,
    history: HistoryManager,
}

impl DocumentAnalyzer {
    /// Create an analyzer with default settings.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with the given settings.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        DocumentAnalyzer {
            history: HistoryManager::from_config(&config),
            config,
            state: AnalysisState::new(),
        }
    }

    /// Replace the current analysis with one of `words`.
    ///
    /// The previous state is handed to the history first. Counts, tree and
    /// document are then rebuilt from scratch; nothing carries over from
    /// earlier calls.
    pub fn analyze<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.history.record_analysis(&self.state);
        self.state.clear();
        self.state.load(words.into_iter().map(Into::into).collect());

        debug!(
            "Analyzed {} words ({} distinct, {} tree nodes)",
            self.state.document.len(),
            self.state.frequencies.distinct_count(),
            self.state.tree.len()
        );
    }

    /// All words by descending count; ties keep first-seen order.
    pub fn frequency_report(&self) -> Vec<WordCount> {
        self.state.frequencies.ranked_by_frequency()
    }

    /// Search the tree for `query` and count the document tokens containing it.
    ///
    /// The tree search accepts containment in either direction along its
    /// descent path. The count is one-directional: a token is counted only if
    /// it contains the query.
    pub fn find_word(&self, query: &str) -> WordSearch {
        if query.trim().is_empty() && self.config.empty_query == EmptyQueryPolicy::NotFound {
            return WordSearch::not_found(query);
        }

        let Some(hit) = self.state.tree.search(query) else {
            return WordSearch::not_found(query);
        };

        let folded_query = fold_case(query);
        let occurrences = self
            .state
            .document
            .iter()
            .filter(|token| fold_case(token).contains(folded_query.as_str()))
            .count();

        WordSearch {
            query: query.to_string(),
            matched: Some(hit.word),
            depth: Some(hit.depth),
            occurrences,
        }
    }

    /// Step back in the history. Returns whether a state was restored.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.state)
    }

    /// Step forward in the history. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.state);
        if redone {
            info!(
                "Redone analysis has {} distinct words",
                self.state.frequencies.distinct_count()
            );
        }
        redone
    }

    /// Start over: empty state and empty history.
    pub fn reset(&mut self) {
        self.state = AnalysisState::new();
        self.history = HistoryManager::from_config(&self.config);
        debug!("Analyzer reset");
    }

    /// The live analysis.
    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// The snapshot history.
    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Tokens of the document behind the live state.
    pub fn document(&self) -> &[String] {
        &self.state.document
    }

    /// The settings in use.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}
