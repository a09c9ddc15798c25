//! Text analysis primitives for docsift.
//!
//! This module turns raw document text into the word sequence consumed by
//! [`DocumentAnalyzer`](crate::analyzer::DocumentAnalyzer), and provides the
//! single case-folding routine shared by the search tree and the analyzer.

pub mod token;
pub mod tokenizer;

/// Fold a word to the form used for every comparison.
///
/// Only ASCII letters are folded; other characters pass through unchanged.
///
/// ```
/// use docsift::analysis::fold_case;
///
/// assert_eq!(fold_case("bH0"), "bh0");
/// assert_eq!(fold_case("Ünïcode"), "Ünïcode");
/// ```
pub fn fold_case(word: &str) -> String {
    word.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_case_ascii_only() {
        assert_eq!(fold_case("MiXeD"), "mixed");
        assert_eq!(fold_case("a123B"), "a123b");
        assert_eq!(fold_case("ÄBC"), "Äbc");
        assert_eq!(fold_case(""), "");
    }
}
