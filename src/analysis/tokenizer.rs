//! Tokenizer implementations for document ingestion.
//!
//! A tokenizer splits raw document text into the ordered word sequence that
//! [`DocumentAnalyzer::analyze`](crate::analyzer::DocumentAnalyzer::analyze)
//! consumes.
//!
//! # Examples
//!
//! ```
//! use docsift::analysis::tokenizer::Tokenizer;
//! use docsift::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Tokenize the given text and keep only the token texts.
    fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.tokenize(text)?.map(Token::into_text).collect())
    }
}
