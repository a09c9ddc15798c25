//! Word occurrence counting.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One row of a frequency report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The word exactly as it appeared in the document
    pub word: String,
    /// Number of occurrences
    pub count: usize,
}

/// A table mapping exact-case words to their occurrence counts.
///
/// Keys are case sensitive: `"Cat"` and `"cat"` are counted separately. The
/// table remembers the order in which words were first seen, which is the
/// tie-break used by [`ranked_by_frequency`](FrequencyTable::ranked_by_frequency).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    /// Word to slot in `entries`
    index: AHashMap<String, usize>,
    /// Distinct words and their counts, in first-seen order
    entries: Vec<(String, usize)>,
    /// Total number of occurrences across all words
    total_count: usize,
}

impl FrequencyTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    /// Add one occurrence of `word`.
    pub fn increment(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
        self.total_count += 1;
    }

    /// Get the number of occurrences of `word` (exact case).
    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Check if `word` has been seen (exact case).
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Iterate over the distinct words in first-seen order.
    pub fn distinct_words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    /// Get the number of distinct words.
    pub fn distinct_count(&self) -> usize {
        self.entries.len()
    }

    /// Get the total number of occurrences.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every word.
    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
        self.total_count = 0;
    }

    /// All words sorted by count, highest first.
    ///
    /// Words with equal counts keep their first-seen order.
    pub fn ranked_by_frequency(&self) -> Vec<WordCount> {
        let mut ranked: Vec<WordCount> = self
            .entries
            .iter()
            .map(|(word, count)| WordCount {
                word: word.clone(),
                count: *count,
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for word in iter {
            table.increment(word.as_ref());
        }
        table
    }
}
