//! # docsift
//!
//! In-memory analysis of tokenized documents.
//!
//! ## Features
//!
//! - Exact-case word frequency table with deterministic ranking
//! - Case-insensitive binary search tree with containment-based lookup
//! - Undo/redo history of analysis snapshots
//! - Whitespace tokenizer and a small command line front end
//!
//! ```
//! use docsift::analyzer::DocumentAnalyzer;
//!
//! let mut analyzer = DocumentAnalyzer::new();
//! analyzer.analyze(["word", "we", "you", "a123b", "a", "A", "bH0"]);
//!
//! assert_eq!(analyzer.frequency_report().len(), 7);
//! assert_eq!(analyzer.find_word("wo").matched.as_deref(), Some("word"));
//! ```

pub mod analysis;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod frequency;
pub mod history;
pub mod state;
pub mod tree;

pub mod prelude {
    pub use crate::analyzer::{DocumentAnalyzer, WordSearch};
    pub use crate::config::{AnalyzerConfig, EmptyQueryPolicy, HistoryMode};
    pub use crate::error::{DocsiftError, Result};
    pub use crate::frequency::{FrequencyTable, WordCount};
    pub use crate::history::HistoryManager;
    pub use crate::state::AnalysisState;
    pub use crate::tree::{SubstringSearchTree, TreeMatch};
}
