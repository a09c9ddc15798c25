//! The live result of an analysis.

use std::rc::Rc;

use crate::frequency::FrequencyTable;
use crate::tree::SubstringSearchTree;

/// Frequency table, search tree and source words captured together.
///
/// Cloning copies the table but shares the tree root (see
/// [`SubstringSearchTree`]), so a snapshot and the state it was taken from
/// observe the same nodes until one of them gets a fresh tree. The word
/// sequence is immutable once loaded and is shared by clones as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisState {
    /// Exact-case word counts
    pub frequencies: FrequencyTable,
    /// Case-insensitive lookup tree
    pub tree: SubstringSearchTree,
    /// The analyzed words in document order
    pub document: Rc<[String]>,
}

impl AnalysisState {
    /// Create an empty state.
    pub fn new() -> Self {
        AnalysisState::default()
    }

    /// Record one word in both views.
    pub fn ingest(&mut self, word: &str) {
        self.frequencies.increment(word);
        self.tree.insert(word);
    }

    /// Ingest every word and keep them as the current document.
    pub fn load(&mut self, words: Vec<String>) {
        for word in &words {
            self.ingest(word);
        }
        self.document = words.into();
    }

    /// Replace every view with an empty one.
    ///
    /// The tree gets a new root instead of being emptied in place, so
    /// snapshots holding the old root keep their nodes.
    pub fn clear(&mut self) {
        self.frequencies.clear();
        self.tree = SubstringSearchTree::new();
        self.document = Rc::default();
    }

    /// Check if nothing has been ingested.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty() && self.tree.is_empty() && self.document.is_empty()
    }
}
