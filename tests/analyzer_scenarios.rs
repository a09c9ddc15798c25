//! End-to-end scenarios for DocumentAnalyzer: ingestion, lookup and history.

use docsift::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use docsift::prelude::*;

fn words(text: &str) -> Vec<String> {
    WhitespaceTokenizer::new().words(text).unwrap()
}

#[test]
fn test_sample_document() -> Result<()> {
    let mut analyzer = DocumentAnalyzer::new();
    analyzer.analyze(words("word we you a123b a A bH0"));

    let report = analyzer.frequency_report();
    assert_eq!(report.len(), 7);
    assert!(report.iter().all(|entry| entry.count == 1));
    // Ties keep document order.
    let order: Vec<&str> = report.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(order, vec!["word", "we", "you", "a123b", "a", "A", "bH0"]);

    // "a" and "A" share one tree node.
    assert_eq!(analyzer.state().tree.len(), 6);

    let result = analyzer.find_word("wo");
    assert_eq!(result.matched.as_deref(), Some("word"));
    assert_eq!(result.depth, Some(0));
    assert_eq!(result.occurrences, 1);
    Ok(())
}

#[test]
fn test_report_sums_to_document_length() {
    let documents = [
        "",
        "the cat and the hat",
        "The the THE tHe",
        "a b c d e f g a b c a b a",
        "x",
    ];

    for text in documents {
        let tokens = words(text);
        let mut analyzer = DocumentAnalyzer::new();
        analyzer.analyze(tokens.clone());

        let report = analyzer.frequency_report();
        let total: usize = report.iter().map(|e| e.count).sum();
        assert_eq!(total, tokens.len(), "document: {text:?}");

        let mut reported: Vec<&str> = report.iter().map(|e| e.word.as_str()).collect();
        let mut distinct: Vec<&str> = tokens.iter().map(String::as_str).collect();
        reported.sort_unstable();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(reported, distinct, "document: {text:?}");

        // Counts never increase going down the report.
        assert!(report.windows(2).all(|w| w[0].count >= w[1].count));
    }
}

#[test]
fn test_cats_category_dog() {
    let mut analyzer = DocumentAnalyzer::new();
    analyzer.analyze(["Cats", "category", "dog"]);

    let result = analyzer.find_word("cat");
    assert!(result.found());
    assert_eq!(result.occurrences, 2);
}

#[test]
fn test_search_is_limited_to_descent_path() {
    let mut analyzer = DocumentAnalyzer::new();
    analyzer.analyze(["mango", "apple", "zebra"]);

    assert_eq!(analyzer.find_word("man").depth, Some(0));
    assert_eq!(analyzer.find_word("zeb").matched.as_deref(), Some("zebra"));
    assert_eq!(analyzer.find_word("app").matched.as_deref(), Some("apple"));

    // "ppl" sorts right of "mango" while "apple" is on the left.
    let miss = analyzer.find_word("ppl");
    assert!(!miss.found());
    assert_eq!(miss.occurrences, 0);
}

#[test]
fn test_as_built_state_machine() {
    let mut analyzer = DocumentAnalyzer::new();
    analyzer.analyze(["one", "two", "two"]);
    assert_eq!(analyzer.history().redo_len(), 1);
    assert!(analyzer.history().redo_stack().next().unwrap().is_empty());

    let post = analyzer.state().clone();

    // Undo does not touch the data.
    assert!(analyzer.undo());
    assert_eq!(analyzer.state(), &post);
    assert_eq!(analyzer.history().redo_len(), 2);
    assert_eq!(analyzer.history().redo_stack().last(), Some(&post));

    // Redo swaps in a duplicate of the live state.
    assert!(analyzer.redo());
    assert_eq!(analyzer.state(), &post);
    assert_eq!(analyzer.history().undo_len(), 1);
    assert_eq!(analyzer.history().redo_len(), 2);

    // No amount of undo/redo brings back the empty pre-analysis state.
    for _ in 0..5 {
        analyzer.undo();
        analyzer.redo();
        assert_eq!(analyzer.state(), &post);
    }
}

#[test]
fn test_redo_on_fresh_analyzer() {
    let mut analyzer = DocumentAnalyzer::new();
    let before = analyzer.state().clone();

    assert!(!analyzer.redo());
    assert_eq!(analyzer.state(), &before);
    assert_eq!(analyzer.history().undo_len(), 0);
}

#[test]
fn test_snapshots_share_tree_root() {
    let mut analyzer = DocumentAnalyzer::new();
    analyzer.analyze(["m", "a"]);
    analyzer.undo();

    let live_tree = &analyzer.state().tree;
    let captured = analyzer.history().redo_stack().last().unwrap();
    assert!(captured.tree.shares_root_with(live_tree));

    // A new analysis builds a new tree; the old snapshot keeps its nodes.
    analyzer.analyze(["z"]);
    let captured = analyzer.history().redo_stack().nth(1).unwrap();
    assert_eq!(captured.tree.words_in_order(), vec!["a", "m"]);
    assert!(!captured.tree.shares_root_with(&analyzer.state().tree));
}

#[test]
fn test_restorative_history() -> Result<()> {
    let config = AnalyzerConfig::from_json_str(r#"{"history_mode": "restorative"}"#)?;
    let mut analyzer = DocumentAnalyzer::with_config(config);

    analyzer.analyze(words("alpha beta"));
    analyzer.analyze(words("gamma"));

    assert!(analyzer.undo());
    assert_eq!(analyzer.state().frequencies.count("alpha"), 1);
    assert!(analyzer.find_word("alp").found());

    assert!(analyzer.undo());
    assert!(analyzer.state().is_empty());
    assert!(!analyzer.undo());

    assert!(analyzer.redo());
    assert!(analyzer.redo());
    assert_eq!(analyzer.state().frequencies.count("gamma"), 1);
    assert!(!analyzer.redo());
    Ok(())
}

#[test]
fn test_bounded_history() -> Result<()> {
    let config = AnalyzerConfig::builder().max_history(3).build()?;
    let mut analyzer = DocumentAnalyzer::with_config(config);

    analyzer.analyze(["a"]);
    for _ in 0..10 {
        analyzer.undo();
    }
    assert_eq!(analyzer.history().redo_len(), 3);
    Ok(())
}

#[test]
fn test_restorative_undo_restores_document_counts() -> Result<()> {
    let config = AnalyzerConfig::from_json_str(r#"{"history_mode": "restorative"}"#)?;
    let mut analyzer = DocumentAnalyzer::with_config(config);

    analyzer.analyze(words("alpha alpha beta"));
    analyzer.analyze(words("gamma"));
    assert!(analyzer.undo());

    let search = analyzer.find_word("alpha");
    assert!(search.found());
    assert_eq!(search.occurrences, analyzer.state().frequencies.count("alpha"));
    assert_eq!(search.occurrences, 2);
    Ok(())
}

#[test]
fn test_sorted_document() {
    let document: Vec<String> = (0..5_000).map(|i| format!("w{i:07}")).collect();
    let mut analyzer = DocumentAnalyzer::new();
    analyzer.analyze(document.clone());
    analyzer.analyze(document.iter().rev().cloned());

    assert_eq!(analyzer.state().tree.height(), 5_000);
    assert_eq!(analyzer.frequency_report().len(), 5_000);
    assert_eq!(analyzer.find_word("w0000042").occurrences, 1);

    analyzer.reset();
    assert!(analyzer.state().is_empty());
}
