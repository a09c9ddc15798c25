//! Undo/redo snapshots of [`AnalysisState`].
//!
//! Two transition rule sets are available, selected by [`HistoryMode`].
//!
//! With [`HistoryMode::AsBuilt`] every transition first captures the live state
//! into a single `last_snapshot` slot and pushes a copy onto the redo stack:
//!
//! - an analysis captures the state it is about to replace;
//! - undo captures the live state and immediately restores that same capture,
//!   so the data does not change and the redo stack grows by one;
//! - redo captures the live state, pops the top of the redo stack (the capture
//!   it just pushed) into the live state, and pushes a copy onto the undo stack.
//!
//! No sequence of undo and redo brings back the state from before an analysis
//! in this mode. [`HistoryMode::Restorative`] provides conventional semantics
//! instead: undo steps back to the state before the most recent analysis and
//! redo steps forward again.
//!
//! Snapshots are clones of [`AnalysisState`], so they share tree roots with the
//! live state.

use std::collections::VecDeque;
use std::mem;

use log::{debug, warn};

use crate::config::{AnalyzerConfig, HistoryMode};
use crate::state::AnalysisState;

/// Holds snapshots and applies undo/redo transitions to a live state.
#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    mode: HistoryMode,
    max_history: Option<usize>,
    last_snapshot: Option<AnalysisState>,
    undo_stack: VecDeque<AnalysisState>,
    redo_stack: VecDeque<AnalysisState>,
}

impl HistoryManager {
    /// Create an empty history with the given transition rules.
    pub fn new(mode: HistoryMode) -> Self {
        HistoryManager {
            mode,
            ..Default::default()
        }
    }

    /// Create an empty history from analyzer settings.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        HistoryManager {
            mode: config.history_mode,
            max_history: config.max_history,
            ..Default::default()
        }
    }

    /// The transition rules in use.
    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// Capture `current` into the last-snapshot slot and onto the redo stack.
    pub fn snapshot(&mut self, current: &AnalysisState) {
        self.last_snapshot = Some(current.clone());
        push_bounded(&mut self.redo_stack, current.clone(), self.max_history);
        debug!(
            "Captured snapshot ({} distinct words), redo depth {}",
            current.frequencies.distinct_count(),
            self.redo_stack.len()
        );
    }

    /// Overwrite `live` with the last captured snapshot.
    ///
    /// Returns `false` and leaves `live` alone when nothing was captured yet.
    pub fn restore_from_last_snapshot(&self, live: &mut AnalysisState) -> bool {
        match &self.last_snapshot {
            Some(snapshot) => {
                *live = snapshot.clone();
                true
            }
            None => false,
        }
    }

    /// Record the state an analysis is about to replace.
    pub fn record_analysis(&mut self, live: &AnalysisState) {
        match self.mode {
            HistoryMode::AsBuilt => self.snapshot(live),
            HistoryMode::Restorative => {
                self.last_snapshot = Some(live.clone());
                push_bounded(&mut self.undo_stack, live.clone(), self.max_history);
                self.redo_stack.clear();
                debug!("Recorded pre-analysis state, undo depth {}", self.undo_stack.len());
            }
        }
    }

    /// Apply an undo to `live`.
    ///
    /// Returns whether a state was restored.
    pub fn undo(&mut self, live: &mut AnalysisState) -> bool {
        match self.mode {
            HistoryMode::AsBuilt => {
                self.snapshot(live);
                let restored = self.restore_from_last_snapshot(live);
                debug!("Undo last analysis");
                restored
            }
            HistoryMode::Restorative => match self.undo_stack.pop_back() {
                Some(previous) => {
                    let replaced = mem::replace(live, previous);
                    push_bounded(&mut self.redo_stack, replaced, self.max_history);
                    debug!("Undo last analysis, undo depth {}", self.undo_stack.len());
                    true
                }
                None => {
                    warn!("No analysis to undo");
                    false
                }
            },
        }
    }

    /// Apply a redo to `live`.
    ///
    /// Returns `false` without touching anything when the redo stack is empty.
    pub fn redo(&mut self, live: &mut AnalysisState) -> bool {
        if self.redo_stack.is_empty() {
            warn!("No analysis to redo");
            return false;
        }

        match self.mode {
            HistoryMode::AsBuilt => {
                self.snapshot(live);
                if let Some(state) = self.redo_stack.pop_back() {
                    *live = state;
                }
                push_bounded(&mut self.undo_stack, live.clone(), self.max_history);
            }
            HistoryMode::Restorative => {
                if let Some(next) = self.redo_stack.pop_back() {
                    let replaced = mem::replace(live, next);
                    push_bounded(&mut self.undo_stack, replaced, self.max_history);
                }
            }
        }

        debug!("Redo last undone analysis");
        true
    }

    /// The last state captured by [`snapshot`](Self::snapshot) or an analysis.
    pub fn last_snapshot(&self) -> Option<&AnalysisState> {
        self.last_snapshot.as_ref()
    }

    /// Undo stack, oldest first.
    pub fn undo_stack(&self) -> impl Iterator<Item = &AnalysisState> {
        self.undo_stack.iter()
    }

    /// Redo stack, oldest first.
    pub fn redo_stack(&self) -> impl Iterator<Item = &AnalysisState> {
        self.redo_stack.iter()
    }

    /// Number of entries on the undo stack.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of entries on the redo stack.
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Check if a redo would succeed.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Check if an undo would restore a state.
    pub fn can_undo(&self) -> bool {
        match self.mode {
            // Undo always has the snapshot it takes itself.
            HistoryMode::AsBuilt => true,
            HistoryMode::Restorative => !self.undo_stack.is_empty(),
        }
    }

    /// Drop every snapshot, keeping the mode and limit.
    pub fn clear(&mut self) {
        self.last_snapshot = None;
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

fn push_bounded(stack: &mut VecDeque<AnalysisState>, state: AnalysisState, limit: Option<usize>) {
    stack.push_back(state);
    if let Some(limit) = limit {
        while stack.len() > limit {
            stack.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_of(words: &[&str]) -> AnalysisState {
        let mut state = AnalysisState::new();
        for word in words {
            state.ingest(word);
        }
        state
    }

    #[test]
    fn test_snapshot_fills_slot_and_redo_stack() {
        let mut history = HistoryManager::new(HistoryMode::AsBuilt);
        let state = state_of(&["a"]);

        history.snapshot(&state);

        assert_eq!(history.last_snapshot(), Some(&state));
        assert_eq!(history.redo_len(), 1);
        assert_eq!(history.undo_len(), 0);
    }

    #[test]
    fn test_restore_without_snapshot() {
        let history = HistoryManager::new(HistoryMode::AsBuilt);
        let mut live = state_of(&["a"]);
        assert!(!history.restore_from_last_snapshot(&mut live));
        assert_eq!(live, state_of(&["a"]));
    }

    #[test]
    fn test_as_built_undo_keeps_live_state() {
        let mut history = HistoryManager::new(HistoryMode::AsBuilt);
        let mut live = state_of(&["b", "a", "c", "a"]);
        let before = live.clone();

        assert!(history.undo(&mut live));

        assert_eq!(live, before);
        assert_eq!(live.tree.words_in_order(), vec!["a", "b", "c"]);
        assert_eq!(history.redo_len(), 1);
        assert_eq!(history.redo_stack().last(), Some(&before));
    }

    #[test]
    fn test_as_built_redo_on_empty_stack() {
        let mut history = HistoryManager::new(HistoryMode::AsBuilt);
        let mut live = state_of(&["a"]);

        assert!(!history.redo(&mut live));
        assert_eq!(live, state_of(&["a"]));
        assert_eq!(history.undo_len(), 0);
        assert_eq!(history.redo_len(), 0);
        assert!(history.last_snapshot().is_none());
    }

    #[test]
    fn test_as_built_redo_pops_fresh_capture() {
        let mut history = HistoryManager::new(HistoryMode::AsBuilt);
        let empty = AnalysisState::new();
        history.record_analysis(&empty);

        let mut live = state_of(&["x", "y"]);
        let post = live.clone();

        assert!(history.redo(&mut live));

        assert_eq!(live, post);
        assert_eq!(history.redo_len(), 1);
        assert_eq!(history.redo_stack().next(), Some(&empty));
        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.undo_stack().next(), Some(&post));
    }

    #[test]
    fn test_restorative_round_trip() {
        let mut history = HistoryManager::new(HistoryMode::Restorative);
        let mut live = AnalysisState::new();

        history.record_analysis(&live);
        live = state_of(&["first"]);
        history.record_analysis(&live);
        live = state_of(&["second"]);

        assert!(history.undo(&mut live));
        assert_eq!(live, state_of(&["first"]));
        assert!(history.undo(&mut live));
        assert!(live.is_empty());
        assert!(!history.undo(&mut live));

        assert!(history.redo(&mut live));
        assert_eq!(live, state_of(&["first"]));
        assert!(history.redo(&mut live));
        assert_eq!(live, state_of(&["second"]));
        assert!(!history.redo(&mut live));
    }

    #[test]
    fn test_restorative_analysis_discards_redo() {
        let mut history = HistoryManager::new(HistoryMode::Restorative);
        let mut live = AnalysisState::new();
        history.record_analysis(&live);
        live = state_of(&["a"]);

        history.undo(&mut live);
        assert!(history.can_redo());

        history.record_analysis(&live);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_max_history_drops_oldest() {
        let config = AnalyzerConfig::builder().max_history(2).build().unwrap();
        let mut history = HistoryManager::from_config(&config);

        for word in ["a", "b", "c"] {
            history.snapshot(&state_of(&[word]));
        }

        let kept: Vec<Vec<String>> = history
            .redo_stack()
            .map(|s| s.tree.words_in_order())
            .collect();
        assert_eq!(kept, vec![vec!["b".to_string()], vec!["c".to_string()]]);
    }

    #[test]
    fn test_clear_keeps_mode() {
        let mut history = HistoryManager::new(HistoryMode::Restorative);
        history.record_analysis(&state_of(&["a"]));
        history.clear();

        assert_eq!(history.mode(), HistoryMode::Restorative);
        assert!(!history.can_undo());
        assert!(history.last_snapshot().is_none());
    }
}
