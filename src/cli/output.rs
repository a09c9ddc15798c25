//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analyzer::{DocumentAnalyzer, WordSearch};
use crate::cli::args::{DocsiftArgs, OutputFormat};
use crate::error::Result;
use crate::frequency::WordCount;

/// Result structure for a document analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub source: String,
    pub total_words: usize,
    pub distinct_words: usize,
    pub tree_nodes: usize,
    pub frequencies: Vec<WordCount>,
    pub search: Option<WordSearch>,
}

impl AnalysisReport {
    /// Summarize the analyzer's live state.
    pub fn from_analyzer(source: &str, analyzer: &DocumentAnalyzer, top: Option<usize>) -> Self {
        let mut frequencies = analyzer.frequency_report();
        if let Some(limit) = top {
            frequencies.truncate(limit);
        }

        let state = analyzer.state();
        AnalysisReport {
            source: source.to_string(),
            total_words: state.frequencies.total_count(),
            distinct_words: state.frequencies.distinct_count(),
            tree_nodes: state.tree.len(),
            frequencies,
            search: None,
        }
    }
}

/// Result structure for undo, redo, reset and history inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStatus {
    pub action: String,
    pub success: bool,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub distinct_words: usize,
}

impl HistoryStatus {
    /// Describe the analyzer's history after `action`.
    pub fn from_analyzer(action: &str, success: bool, analyzer: &DocumentAnalyzer) -> Self {
        HistoryStatus {
            action: action.to_string(),
            success,
            undo_depth: analyzer.history().undo_len(),
            redo_depth: analyzer.history().redo_len(),
            distinct_words: analyzer.state().frequencies.distinct_count(),
        }
    }
}

/// Types that know how to print themselves for people.
pub trait HumanOutput {
    fn print_human(&self);
}

impl HumanOutput for AnalysisReport {
    fn print_human(&self) {
        println!("Word Frequency Analysis: {}", self.source);
        println!("═══════════════════════");
        for entry in &self.frequencies {
            println!("{}: {}", entry.word, entry.count);
        }
        println!();
        println!("Total words: {}", self.total_words);
        println!("Distinct words: {}", self.distinct_words);
        println!("Tree nodes: {}", self.tree_nodes);

        if let Some(search) = &self.search {
            println!();
            search.print_human();
        }
    }
}

impl HumanOutput for WordSearch {
    fn print_human(&self) {
        match &self.matched {
            Some(word) => {
                println!("Search for '{}' in binary tree: Word found! ({word})", self.query);
                println!("Word count for '{}': {}", self.query, self.occurrences);
            }
            None => println!("Search for '{}' in binary tree: Word not found.", self.query),
        }
    }
}

impl HumanOutput for HistoryStatus {
    fn print_human(&self) {
        let outcome = match (self.action.as_str(), self.success) {
            ("redo", false) => "No analysis to redo".to_string(),
            ("undo", false) => "No analysis to undo".to_string(),
            (action, _) => format!("{action}: ok"),
        };
        println!(
            "{outcome} (undo depth {}, redo depth {}, {} distinct words)",
            self.undo_depth, self.redo_depth, self.distinct_words
        );
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &DocsiftArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &DocsiftArgs) -> Result<()> {
    if args.verbosity() > 1 && !message.is_empty() {
        println!("{message}");
        println!();
    }
    result.print_human();
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &DocsiftArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_truncates_to_top() {
        let mut analyzer = DocumentAnalyzer::new();
        analyzer.analyze(["a", "b", "b", "c", "c", "c"]);

        let report = AnalysisReport::from_analyzer("inline", &analyzer, Some(2));
        assert_eq!(report.total_words, 6);
        assert_eq!(report.distinct_words, 3);
        assert_eq!(report.tree_nodes, 3);
        let words: Vec<&str> = report.frequencies.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["c", "b"]);
    }

    #[test]
    fn test_report_serializes_search() {
        let mut analyzer = DocumentAnalyzer::new();
        analyzer.analyze(["word", "we"]);
        let mut report = AnalysisReport::from_analyzer("inline", &analyzer, None);
        report.search = Some(analyzer.find_word("wo"));

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["search"]["matched"], "word");
        assert_eq!(value["search"]["occurrences"], 1);
        assert_eq!(value["frequencies"][0]["count"], 1);
    }

    #[test]
    fn test_history_status() {
        let mut analyzer = DocumentAnalyzer::new();
        analyzer.analyze(["x"]);
        let undone = analyzer.undo();

        let status = HistoryStatus::from_analyzer("undo", undone, &analyzer);
        assert!(status.success);
        assert_eq!(status.redo_depth, 2);
        assert_eq!(status.undo_depth, 0);
        assert_eq!(status.distinct_words, 1);
    }
}
